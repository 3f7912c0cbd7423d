use std::collections::HashMap;

/// Which answers are currently shown, keyed by question index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    shown: HashMap<usize, bool>,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shown(&self, index: usize) -> bool {
        self.shown.get(&index).copied().unwrap_or(false)
    }

    /// Flip the visibility of one answer.
    pub fn toggle(&mut self, index: usize) {
        let shown = self.shown.entry(index).or_insert(false);
        *shown = !*shown;
    }

    pub fn clear(&mut self) {
        self.shown.clear();
    }
}
