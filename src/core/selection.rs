/// Holds at most one selected entity for a funnel step.
///
/// The store performs no validation on the item and has no side effects
/// beyond its own state; the subject and package steps each own an
/// independent instance.
#[derive(Debug, Clone)]
pub struct SelectionStore<T> {
    item: Option<T>,
}

impl<T> SelectionStore<T> {
    pub fn new() -> Self {
        Self { item: None }
    }

    pub fn get(&self) -> Option<&T> {
        self.item.as_ref()
    }

    /// Replaces the current selection unconditionally.
    pub fn select(&mut self, item: T) {
        self.item = Some(item);
    }

    pub fn clear(&mut self) {
        self.item = None;
    }

    pub fn is_selected(&self) -> bool {
        self.item.is_some()
    }
}

impl<T> Default for SelectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
