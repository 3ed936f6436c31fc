use super::types::WorldItem;

/// World picker state: the latest world list and which entry is selected.
#[derive(Debug, Clone, Default)]
pub struct WorldSelector {
    worlds: Vec<WorldItem>,
    options: Vec<String>,
    selected: usize,
}

impl WorldSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list. Selection goes back to the first entry.
    pub fn populate(&mut self, worlds: Vec<WorldItem>) {
        self.options = worlds.iter().map(WorldItem::label).collect();
        self.worlds = worlds;
        self.selected = 0;
    }

    pub fn worlds(&self) -> &[WorldItem] {
        &self.worlds
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&WorldItem> {
        self.worlds.get(self.selected)
    }

    /// Select by index, clamped to the last entry.
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.worlds.len().saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        if !self.worlds.is_empty() {
            self.selected = (self.selected + 1) % self.worlds.len();
        }
    }
}
