//! Mobile navigation menu state

/// Viewport width at and above which the desktop navigation is shown.
pub const DEFAULT_BREAKPOINT_PX: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Where focus goes after a menu transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    FirstMenuLink,
}

/// The hamburger menu below the breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavMenu {
    state: MenuState,
    breakpoint_px: u32,
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT_PX)
    }
}

impl NavMenu {
    pub fn new(breakpoint_px: u32) -> Self {
        Self {
            state: MenuState::Closed,
            breakpoint_px,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Value for the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }

    /// Flip the menu. Opening asks for focus on the first menu link.
    pub fn toggle(&mut self) -> Option<FocusTarget> {
        self.state = match self.state {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
        self.is_open().then_some(FocusTarget::FirstMenuLink)
    }

    /// A menu link was followed. Only the mobile layout closes.
    /// Returns whether the state changed.
    pub fn link_activated(&mut self, viewport_width: f64) -> bool {
        if viewport_width < f64::from(self.breakpoint_px) {
            self.close()
        } else {
            false
        }
    }

    /// Growing to the desktop layout always closes the menu.
    pub fn viewport_resized(&mut self, viewport_width: f64) -> bool {
        if viewport_width >= f64::from(self.breakpoint_px) {
            self.close()
        } else {
            false
        }
    }

    fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = MenuState::Closed;
        was_open
    }
}
