use super::column::ColumnState;
use uuid::Uuid;

/// Ordered, duplicate-free set of subreddit columns.
#[derive(Default)]
pub struct BoardState {
    pub columns: Vec<ColumnState>,
    pub focused: usize,
}

/// Trimmed subreddit name, or `None` when nothing is left.
pub fn normalize_name(input: &str) -> Option<&str> {
    let name = input.trim();
    (!name.is_empty()).then_some(name)
}

impl BoardState {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.subreddit.as_str()).collect()
    }

    /// Exact, case-sensitive match.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.subreddit == name)
    }

    /// Appends a new loading column and focuses it. `None` when the name is blank or already present.
    pub fn add(&mut self, input: &str) -> Option<&ColumnState> {
        let name = normalize_name(input)?;
        if self.contains(name) {
            return None;
        }
        self.columns.push(ColumnState::new(name));
        self.focused = self.columns.len() - 1;
        self.columns.last()
    }

    pub fn remove(&mut self, name: &str) -> Option<ColumnState> {
        let idx = self.columns.iter().position(|c| c.subreddit == name)?;
        let removed = self.columns.remove(idx);
        if idx < self.focused || self.focused >= self.columns.len() {
            self.focused = self.focused.saturating_sub(1);
        }
        Some(removed)
    }

    pub fn column_by_id_mut(&mut self, id: Uuid) -> Option<&mut ColumnState> {
        self.columns.iter_mut().find(|c| c.id == id)
    }

    pub fn focused_column(&self) -> Option<&ColumnState> {
        self.columns.get(self.focused)
    }

    pub fn focused_column_mut(&mut self) -> Option<&mut ColumnState> {
        self.columns.get_mut(self.focused)
    }

    pub fn focus_next(&mut self) {
        if !self.columns.is_empty() {
            self.focused = (self.focused + 1) % self.columns.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.columns.is_empty() {
            self.focused = (self.focused + self.columns.len() - 1) % self.columns.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(names: &[&str]) -> BoardState {
        let mut board = BoardState::default();
        for name in names {
            board.add(name);
        }
        board
    }

    #[test]
    fn add_appends_and_keeps_order() {
        let mut board = board_with(&["golang", "rust"]);
        assert!(board.add("python").is_some());
        assert_eq!(board.names(), vec!["golang", "rust", "python"]);
        assert_eq!(board.focused, 2);
    }

    #[test]
    fn add_trims_whitespace() {
        let mut board = BoardState::default();
        let column = board.add("  golang \n").unwrap();
        assert_eq!(column.subreddit, "golang");
        assert!(column.is_loading());
    }

    #[test]
    fn add_ignores_blank_input() {
        let mut board = BoardState::default();
        assert!(board.add("").is_none());
        assert!(board.add("   ").is_none());
        assert!(board.is_empty());
    }

    #[test]
    fn add_is_idempotent_for_exact_match() {
        let mut board = board_with(&["golang"]);
        assert!(board.add("golang").is_none());
        assert!(board.add(" golang ").is_none());
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn add_is_case_sensitive() {
        let mut board = board_with(&["golang"]);
        assert!(board.add("GoLang").is_some());
        assert_eq!(board.names(), vec!["golang", "GoLang"]);
    }

    #[test]
    fn remove_present_name_keeps_remaining_order() {
        let mut board = board_with(&["a", "b", "c"]);
        let removed = board.remove("b").unwrap();
        assert_eq!(removed.subreddit, "b");
        assert_eq!(board.names(), vec!["a", "c"]);
    }

    #[test]
    fn remove_absent_name_is_noop() {
        let mut board = board_with(&["a", "b"]);
        assert!(board.remove("z").is_none());
        assert!(board.remove("A").is_none());
        assert_eq!(board.names(), vec!["a", "b"]);
    }

    #[test]
    fn remove_keeps_focus_on_same_column_when_possible() {
        let mut board = board_with(&["a", "b", "c"]);
        board.focused = 2;
        board.remove("a");
        assert_eq!(board.focused_column().map(|c| c.subreddit.as_str()), Some("c"));

        board.remove("c");
        assert_eq!(board.focused_column().map(|c| c.subreddit.as_str()), Some("b"));

        board.remove("b");
        assert!(board.focused_column().is_none());
        assert_eq!(board.focused, 0);
    }

    #[test]
    fn readding_creates_a_fresh_column() {
        let mut board = board_with(&["golang"]);
        let old_id = board.columns[0].id;
        board.remove("golang");
        let new_id = board.add("golang").unwrap().id;
        assert_ne!(old_id, new_id);
        assert!(board.column_by_id_mut(old_id).is_none());
    }

    #[test]
    fn focus_wraps() {
        let mut board = board_with(&["a", "b", "c"]);
        board.focus_next();
        assert_eq!(board.focused, 0);
        board.focus_previous();
        assert_eq!(board.focused, 2);
    }
}
