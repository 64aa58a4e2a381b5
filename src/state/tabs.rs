/// Exactly one selected item out of a non-empty static list.
#[derive(Debug)]
pub struct TabSelector<T: 'static> {
    items: &'static [T],
    selected: usize,
}

impl<T> Clone for TabSelector<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TabSelector<T> {}

impl<T> PartialEq for TabSelector<T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.items, other.items) && self.selected == other.selected
    }
}

impl<T> TabSelector<T> {
    /// `None` when there is nothing to select.
    pub fn new(items: &'static [T]) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items, selected: 0 })
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    /// Out of range indices leave the selection untouched.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> &'static T {
        &self.items[self.selected]
    }

    pub fn items(&self) -> &'static [T] {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MILESTONES;

    static EMPTY: &[u8] = &[];

    #[test]
    fn test_defaults_to_first() {
        let tabs = TabSelector::new(MILESTONES).unwrap();
        assert_eq!(tabs.selected(), 0);
        assert_eq!(tabs.current().year, MILESTONES[0].year);
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(TabSelector::new(EMPTY).is_none());
    }

    #[test]
    fn test_select_shows_details_verbatim() {
        let mut tabs = TabSelector::new(MILESTONES).unwrap();
        for k in 0..MILESTONES.len() {
            assert!(tabs.select(k));
            assert_eq!(tabs.current().details, MILESTONES[k].details);
            assert_eq!((0..tabs.len()).filter(|i| tabs.is_selected(*i)).count(), 1);
        }
    }

    #[test]
    fn test_out_of_range_keeps_selection() {
        let mut tabs = TabSelector::new(MILESTONES).unwrap();
        tabs.select(2);
        assert!(!tabs.select(MILESTONES.len()));
        assert_eq!(tabs.selected(), 2);
    }
}
