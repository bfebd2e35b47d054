//! Evaluation of file type filters.
//!
//! Toolkits apply filters themselves; this module reproduces their accept and
//! reject decisions so the headless backend and callers can reason about
//! which files a chooser would offer.

use std::path::Path;

use crate::file::FileSpec;

/// An ordered list of named filters with one of them active.
///
/// Mirrors the chooser's filter dropdown: the first filter is active when the
/// dialog opens, and with no filters at all every file is accepted.
#[derive(Debug, Clone, Copy)]
pub struct FilterSet<'a> {
    filters: &'a [FileSpec],
    active: Option<usize>,
}

impl<'a> FilterSet<'a> {
    pub fn new(filters: &'a [FileSpec]) -> Self {
        Self {
            filters,
            active: if filters.is_empty() { None } else { Some(0) },
        }
    }

    /// Switch the dropdown to the filter at `index`.
    ///
    /// Indices past the end leave the selection unchanged.
    pub fn select(mut self, index: usize) -> Self {
        if index < self.filters.len() {
            self.active = Some(index);
        }
        self
    }

    pub fn active(&self) -> Option<&'a FileSpec> {
        self.active.map(|index| &self.filters[index])
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn filters(&self) -> &'a [FileSpec] {
        self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn accepts(&self, path: impl AsRef<Path>) -> bool {
        match self.active() {
            Some(spec) => spec.matches(path),
            None => true,
        }
    }
}

/// Shell-style matching of `name` against `pattern`.
///
/// `*` matches any run of characters and `?` matches exactly one. There are
/// no character classes and no escaping, as with GTK's filter patterns.
pub(crate) fn glob_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();

    let (mut p, mut n) = (0, 0);
    // Position of the last `*` and the name index it is currently absorbing up to.
    let mut star: Option<(usize, usize)> = None;

    while n < name.len() {
        match pattern.get(p) {
            Some('*') => {
                star = Some((p, n));
                p += 1;
            }
            Some('?') => {
                p += 1;
                n += 1;
            }
            Some(&c) if c == name[n] => {
                p += 1;
                n += 1;
            }
            _ => match star {
                Some((star_p, star_n)) => {
                    p = star_p + 1;
                    n = star_n + 1;
                    star = Some((star_p, star_n + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}
