/// Input device behind a pointer event, from `PointerEvent.pointerType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

impl PointerKind {
    /// Pen and touch both tap; anything unrecognised behaves like a mouse.
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" | "pen" => PointerKind::Touch,
            _ => PointerKind::Mouse,
        }
    }
}

/// A fixed set of cards where at most one is active, plus the one-time
/// "explore the cards" hint shown until the first interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosureSet {
    len: usize,
    active: Option<usize>,
    hint_visible: bool,
}

impl DisclosureSet {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: None,
            hint_visible: true,
        }
    }

    pub fn without_hint(len: usize) -> Self {
        Self {
            hint_visible: false,
            ..Self::new(len)
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Returns false for an index outside the set.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = Some(index);
        self.hint_visible = false;
        true
    }

    pub fn deactivate(&mut self, index: usize) {
        if self.active == Some(index) {
            self.active = None;
        }
    }

    /// Touch input: tapping the open card closes it, any other card opens.
    pub fn tap(&mut self, index: usize) {
        if self.is_active(index) {
            self.active = None;
        } else {
            self.activate(index);
        }
    }

    pub fn pointer_enter(&mut self, index: usize, kind: PointerKind) {
        if kind == PointerKind::Mouse {
            self.activate(index);
        }
    }

    pub fn pointer_leave(&mut self, index: usize, kind: PointerKind) {
        if kind == PointerKind::Mouse {
            self.deactivate(index);
        }
    }

    /// A completed click. Only touch and pen clicks toggle, mouse users
    /// already opened the card by hovering. Scroll gestures never click.
    pub fn click(&mut self, index: usize, kind: PointerKind) {
        if kind == PointerKind::Touch {
            self.tap(index);
        }
    }

    pub fn dismiss_hint(&mut self) {
        self.hint_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_active_card() {
        let mut cards = DisclosureSet::new(4);
        assert_eq!(cards.active(), None);

        assert!(cards.activate(1));
        assert!(cards.is_active(1));

        assert!(cards.activate(3));
        assert!(cards.is_active(3));
        assert!(!cards.is_active(1));
        assert_eq!((0..4).filter(|i| cards.is_active(*i)).count(), 1);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut cards = DisclosureSet::new(2);
        cards.activate(0);
        assert!(!cards.activate(2));
        assert_eq!(cards.active(), Some(0));
    }

    #[test]
    fn test_leave_only_clears_own_card() {
        let mut cards = DisclosureSet::new(3);
        cards.activate(0);
        cards.activate(2);
        // stale leave from the previous card must not close the new one
        cards.deactivate(0);
        assert_eq!(cards.active(), Some(2));
        cards.deactivate(2);
        assert_eq!(cards.active(), None);
    }

    #[test]
    fn test_activation_hides_hint_for_good() {
        let mut cards = DisclosureSet::new(4);
        assert!(cards.hint_visible());
        cards.activate(0);
        assert!(!cards.hint_visible());
        cards.deactivate(0);
        assert!(!cards.hint_visible());
    }

    #[test]
    fn test_dismiss_hint_idempotent() {
        let mut cards = DisclosureSet::new(4);
        cards.dismiss_hint();
        cards.dismiss_hint();
        assert!(!cards.hint_visible());
        assert_eq!(cards.active(), None);
    }

    #[test]
    fn test_tap_toggles() {
        let mut cards = DisclosureSet::new(3);
        cards.tap(1);
        assert!(cards.is_active(1));
        cards.tap(2);
        assert!(cards.is_active(2));
        cards.tap(2);
        assert_eq!(cards.active(), None);
        assert!(!cards.hint_visible());
    }

    #[test]
    fn test_pointer_type_mapping() {
        assert_eq!(PointerKind::from_pointer_type("mouse"), PointerKind::Mouse);
        assert_eq!(PointerKind::from_pointer_type("touch"), PointerKind::Touch);
        assert_eq!(PointerKind::from_pointer_type("pen"), PointerKind::Touch);
        assert_eq!(PointerKind::from_pointer_type(""), PointerKind::Mouse);
    }

    #[test]
    fn test_touch_swipe_leaves_cards_alone() {
        let mut cards = DisclosureSet::new(4);
        // a swipe delivers enter/leave with touch type but no click
        cards.pointer_enter(2, PointerKind::Touch);
        cards.pointer_leave(2, PointerKind::Touch);
        assert_eq!(cards.active(), None);
        assert!(cards.hint_visible());
    }

    #[test]
    fn test_touch_click_toggles_mouse_click_does_not() {
        let mut cards = DisclosureSet::new(4);
        cards.click(2, PointerKind::Touch);
        assert!(cards.is_active(2));
        cards.click(2, PointerKind::Touch);
        assert_eq!(cards.active(), None);

        cards.pointer_enter(1, PointerKind::Mouse);
        cards.click(1, PointerKind::Mouse);
        assert!(cards.is_active(1));
        cards.pointer_leave(1, PointerKind::Mouse);
        assert_eq!(cards.active(), None);
    }

    #[test]
    fn test_without_hint() {
        let cards = DisclosureSet::without_hint(5);
        assert!(!cards.hint_visible());
    }
}
