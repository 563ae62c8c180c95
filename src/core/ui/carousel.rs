//=========================================================================
// Carousel
//=========================================================================
//
// Cyclic cursor over a fixed, non-empty sequence.
//
// The sequence is immutable after construction and the index is always
// taken modulo its length, so stepping wraps in both directions.
//
//=========================================================================

/// Non-empty ring of items with a current index.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Carousel<T> {
    /// Returns `None` for an empty sequence.
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    /// Advances to `(index + 1) mod len` and returns the new current item.
    pub fn next(&mut self) -> &T {
        self.index = (self.index + 1) % self.items.len();
        self.current()
    }

    /// Steps back to `(index - 1) mod len` and returns the new current item.
    pub fn previous(&mut self) -> &T {
        let len = self.items.len();
        self.index = (self.index + len - 1) % len;
        self.current()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
