use crate::content::SectionId;

use super::theme::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Collapsible navigation menu. The open/closed state only matters on
/// mobile; desktop always renders the menu inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavMenu {
    state: MenuState,
    viewport: Viewport,
}

impl NavMenu {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            state: MenuState::Closed,
            viewport,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.viewport.is_mobile() && self.state == MenuState::Open
    }

    pub fn renders_inline(&self) -> bool {
        !self.viewport.is_mobile()
    }

    pub fn panel_visible(&self) -> bool {
        self.renders_inline() || self.is_open()
    }

    pub fn toggle(&mut self) {
        if self.renders_inline() {
            return;
        }
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// Picks a destination and closes the menu. Returns the section to scroll to.
    pub fn select(&mut self, section: SectionId) -> SectionId {
        self.state = MenuState::Closed;
        section
    }

    /// Click landed outside the menu. Returns whether the menu was closed.
    pub fn dismiss(&mut self) -> bool {
        if self.is_open() {
            self.state = MenuState::Closed;
            true
        } else {
            false
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport.is_mobile() && !viewport.is_mobile() {
            self.state = MenuState::Closed;
        }
        self.viewport = viewport;
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}
