//! Parent window anchoring.
//!
//! Dialogs are anchored to an existing top-level window through the handles
//! exposed by [`raw_window_handle`]. A [`ParentWindow`] only borrows those
//! handles, so it can never outlive the window it was taken from.

use std::fmt;

use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, RawDisplayHandle,
    RawWindowHandle, WindowHandle,
};

use crate::error::DialogError;

/// A borrowed reference to the window a dialog should be modal to.
///
/// Pass `None` instead of a parent to show a dialog that is modal to the
/// application but not stacked above any particular window.
pub struct ParentWindow<'a> {
    window: WindowHandle<'a>,
    display: DisplayHandle<'a>,
}

impl<'a> ParentWindow<'a> {
    /// Borrow the window and display handles of `window`.
    ///
    /// Fails when the windowing system cannot currently provide a handle, for
    /// example on Android while the app is suspended.
    pub fn new<W>(window: &'a W) -> Result<Self, DialogError>
    where
        W: HasWindowHandle + HasDisplayHandle + ?Sized,
    {
        Ok(Self {
            window: window.window_handle()?,
            display: window.display_handle()?,
        })
    }

    /// Build a parent from handles that were already borrowed.
    pub fn from_handles(window: WindowHandle<'a>, display: DisplayHandle<'a>) -> Self {
        Self { window, display }
    }

    pub fn raw_window_handle(&self) -> RawWindowHandle {
        self.window.as_raw()
    }

    pub fn raw_display_handle(&self) -> RawDisplayHandle {
        self.display.as_raw()
    }
}

impl HasWindowHandle for ParentWindow<'_> {
    fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        Ok(self.window)
    }
}

impl HasDisplayHandle for ParentWindow<'_> {
    fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
        Ok(self.display)
    }
}

impl fmt::Debug for ParentWindow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParentWindow")
            .field("window", &self.window.as_raw())
            .field("display", &self.display.as_raw())
            .finish()
    }
}
