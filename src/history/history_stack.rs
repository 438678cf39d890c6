//! Last-in-first-out history container.
//!
//! A thin wrapper over `Vec` with end push/pop. The controller owns two of
//! these, one for undo and one for redo.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStack<T> {
    items: Vec<T>,
}

impl<T> Default for HistoryStack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> HistoryStack<T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the most recent item, `None` when empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Oldest to newest.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a HistoryStack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
