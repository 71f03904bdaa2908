#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Viewport width above which the mobile menu must never stay open.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

/// Quiescence window for the resize listener before the close check runs.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Mobile navigation state.
///
/// Owned by the mobile navigation controller and provided via context;
/// the smooth scroll handler and the resize observer close it through
/// [`crate::util::mobile_nav::close`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    /// Flip the menu between open and closed. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.menu_open;
        self.menu_open = false;
        was_open
    }

    /// Whether a settled resize at `width` logical pixels should close the
    /// menu. Strictly greater than the breakpoint, per the desktop layout
    /// switch.
    pub fn should_close_on_resize(self, width: f64) -> bool {
        self.menu_open && width > DESKTOP_BREAKPOINT_PX
    }
}
