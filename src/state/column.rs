use crate::error::FetchError;
use crate::model::Post;
use ratatui::widgets::ListState;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Error(String),
    Loaded(Vec<Post>),
}

/// What a column should draw right now.
#[derive(Debug, PartialEq)]
pub enum ColumnView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Posts(&'a [Post]),
}

/// One subreddit column and its load state.
pub struct ColumnState {
    /// Distinguishes a re-added column from the one that was closed under the same name.
    pub id: Uuid,
    pub subreddit: String,
    pub status: LoadStatus,
    pub list_state: ListState,
}

impl ColumnState {
    /// Starts in `Loading`; the owner is expected to spawn the first fetch.
    pub fn new(subreddit: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            subreddit: subreddit.into(),
            status: LoadStatus::Loading,
            list_state: ListState::default(),
        }
    }

    pub fn complete(&mut self, result: Result<Vec<Post>, FetchError>) {
        match result {
            Ok(posts) => {
                self.list_state
                    .select(if posts.is_empty() { None } else { Some(0) });
                self.status = LoadStatus::Loaded(posts);
            }
            Err(e) => {
                self.list_state.select(None);
                self.status = LoadStatus::Error(e.to_string());
            }
        }
    }

    /// Back to `Loading` from `Error`. Returns whether a new fetch is needed.
    pub fn retry(&mut self) -> bool {
        if matches!(self.status, LoadStatus::Error(_)) {
            self.status = LoadStatus::Loading;
            true
        } else {
            false
        }
    }

    /// Manual refresh of an already loaded column.
    pub fn reload(&mut self) -> bool {
        if matches!(self.status, LoadStatus::Loaded(_)) {
            self.status = LoadStatus::Loading;
            true
        } else {
            false
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn view(&self) -> ColumnView<'_> {
        match &self.status {
            LoadStatus::Loading => ColumnView::Loading,
            LoadStatus::Error(msg) => ColumnView::Error(msg),
            LoadStatus::Loaded(posts) if posts.is_empty() => ColumnView::Empty,
            LoadStatus::Loaded(posts) => ColumnView::Posts(posts),
        }
    }

    pub fn posts(&self) -> &[Post] {
        match &self.status {
            LoadStatus::Loaded(posts) => posts,
            _ => &[],
        }
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.list_state.selected().and_then(|i| self.posts().get(i))
    }

    pub fn select_next(&mut self) {
        let len = self.posts().len();
        if len > 0 {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some((current + 1) % len));
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.posts().len();
        if len > 0 {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some((current + len - 1) % len));
        }
    }
}
