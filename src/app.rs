use crate::config::Config;
use crate::error::FetchError;
use crate::handlers;
use crate::model::Post;
use crate::services::PostSource;
use crate::state::{board::normalize_name, AppMode, BoardState, NotificationState, UiState};
use crossterm::event::Event as CEvent;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

/// Application events
pub enum AppEvent {
    Terminal(CEvent),
    Fetch(FetchCompletion),
    Verified { subreddit: String, exists: bool },
    Tick,
}

/// Result of one listing request, addressed to the column instance that asked for it.
pub struct FetchCompletion {
    pub column_id: Uuid,
    pub subreddit: String,
    pub result: Result<Vec<Post>, FetchError>,
}

pub struct App {
    pub ui: UiState,
    pub board: BoardState,
    pub notifications: NotificationState,
    pub config: Config,
    source: Arc<dyn PostSource>,
    events: mpsc::UnboundedSender<AppEvent>,
    pending_verifications: HashSet<String>,
}

impl App {
    pub fn new(config: Config, source: Arc<dyn PostSource>, events: mpsc::UnboundedSender<AppEvent>) -> App {
        App {
            ui: UiState::default(),
            board: BoardState::default(),
            notifications: NotificationState::default(),
            config,
            source,
            events,
            pending_verifications: HashSet::new(),
        }
    }

    pub fn set_notification(&mut self, message: impl Into<String>) {
        let ticks = self.config.notification_ticks();
        self.notifications
            .set_notification(message, Some(ticks), self.ui.tick_count);
    }

    /// Adds a column for `input` unless it is blank or already on the board.
    ///
    /// With `verify_before_add` the column only appears once the about lookup
    /// comes back positive, so this returns `false` in that case.
    pub fn add_subreddit(&mut self, input: &str) -> bool {
        let Some(name) = normalize_name(input) else {
            return false;
        };
        if self.board.contains(name) {
            debug!(subreddit = name, "already on the board");
            return false;
        }
        if self.config.verify_before_add {
            self.spawn_verify(name.to_string());
            return false;
        }
        self.open_column(name)
    }

    fn open_column(&mut self, name: &str) -> bool {
        let Some((id, subreddit)) = self.board.add(name).map(|c| (c.id, c.subreddit.clone())) else {
            return false;
        };
        info!(subreddit = %subreddit, "column added");
        self.spawn_fetch(id, subreddit);
        true
    }

    pub fn remove_subreddit(&mut self, name: &str) -> bool {
        match self.board.remove(name) {
            Some(column) => {
                info!(subreddit = %column.subreddit, "column closed");
                true
            }
            None => false,
        }
    }

    pub fn close_focused(&mut self) {
        if let Some(name) = self.board.focused_column().map(|c| c.subreddit.clone()) {
            self.remove_subreddit(&name);
        }
    }

    /// Retries a failed column or reloads a loaded one. Loading columns are left alone.
    pub fn refresh_focused(&mut self) {
        let Some(column) = self.board.focused_column_mut() else {
            return;
        };
        if column.retry() || column.reload() {
            let (id, name) = (column.id, column.subreddit.clone());
            self.spawn_fetch(id, name);
        }
    }

    fn spawn_fetch(&self, column_id: Uuid, subreddit: String) {
        debug!(subreddit = %subreddit, "spawning fetch");
        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = source.fetch_posts(&subreddit).await;
            // The receiver only goes away on shutdown.
            let _ = events.send(AppEvent::Fetch(FetchCompletion {
                column_id,
                subreddit,
                result,
            }));
        });
    }

    fn spawn_verify(&mut self, subreddit: String) {
        if !self.pending_verifications.insert(subreddit.clone()) {
            return;
        }
        self.set_notification(format!("Checking r/{}...", subreddit));
        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        tokio::spawn(async move {
            let exists = source.exists(&subreddit).await;
            let _ = events.send(AppEvent::Verified { subreddit, exists });
        });
    }

    pub fn handle_fetch_completion(&mut self, completion: FetchCompletion) {
        match self.board.column_by_id_mut(completion.column_id) {
            Some(column) => column.complete(completion.result),
            None => debug!(subreddit = %completion.subreddit, "dropping result for closed column"),
        }
    }

    pub fn handle_verification(&mut self, subreddit: String, exists: bool) {
        self.pending_verifications.remove(&subreddit);
        if exists {
            self.notifications.clear_notification();
            self.open_column(&subreddit);
        } else {
            info!(subreddit = %subreddit, "subreddit not found");
            self.set_notification(format!("r/{} not found", subreddit));
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Terminal(CEvent::Key(key)) => handlers::handle_key_event(key, self),
            AppEvent::Terminal(_) => {}
            AppEvent::Fetch(completion) => self.handle_fetch_completion(completion),
            AppEvent::Verified { subreddit, exists } => self.handle_verification(subreddit, exists),
            AppEvent::Tick => self.on_tick(),
        }
    }

    pub fn on_tick(&mut self) {
        self.ui.tick();
        if self.notifications.should_close_notification(self.ui.tick_count) {
            self.notifications.clear_notification();
        }
    }

    pub fn enter_add_prompt(&mut self) {
        self.ui.open_prompt();
    }

    pub fn submit_add_prompt(&mut self) {
        let input = self.ui.take_input();
        self.add_subreddit(&input);
    }

    pub fn is_prompt_open(&self) -> bool {
        self.ui.mode == AppMode::AddSubreddit
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::sample_post;
    use crate::state::{ColumnView, LoadStatus};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory post source; names without a canned result fail with 404.
    #[derive(Default)]
    pub(crate) struct FakeSource {
        pub results: Mutex<HashMap<String, Vec<Post>>>,
        pub calls: Mutex<Vec<String>>,
        pub known: Vec<String>,
    }

    impl FakeSource {
        pub(crate) fn with(name: &str, posts: Vec<Post>) -> Self {
            let source = FakeSource::default();
            source.results.lock().unwrap().insert(name.to_string(), posts);
            source
        }
    }

    #[async_trait]
    impl PostSource for FakeSource {
        async fn fetch_posts(&self, subreddit: &str) -> Result<Vec<Post>, FetchError> {
            self.calls.lock().unwrap().push(subreddit.to_string());
            self.results
                .lock()
                .unwrap()
                .get(subreddit)
                .cloned()
                .ok_or(FetchError::Status(404))
        }

        async fn exists(&self, subreddit: &str) -> bool {
            self.known.iter().any(|k| k == subreddit)
        }
    }

    pub(crate) fn test_app(source: FakeSource) -> (App, Arc<FakeSource>, mpsc::UnboundedReceiver<AppEvent>) {
        let source = Arc::new(source);
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(Config::default(), source.clone(), tx);
        (app, source, rx)
    }

    async fn pump_one(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppEvent>) {
        let event = rx.recv().await.expect("event");
        app.handle_event(event);
    }

    fn ids(app: &App, idx: usize) -> Vec<String> {
        app.board.columns[idx].posts().iter().map(|p| p.id.clone()).collect()
    }

    #[tokio::test]
    async fn adding_golang_fetches_once_and_renders_in_order() {
        let posts = vec![sample_post("3", None), sample_post("1", None), sample_post("2", None)];
        let (mut app, source, mut rx) = test_app(FakeSource::with("golang", posts));

        assert!(app.add_subreddit("golang"));
        assert!(app.board.columns[0].is_loading());
        pump_one(&mut app, &mut rx).await;

        assert_eq!(*source.calls.lock().unwrap(), vec!["golang".to_string()]);
        assert_eq!(ids(&app, 0), vec!["3", "1", "2"]);
        assert!(matches!(app.board.columns[0].view(), ColumnView::Posts(p) if p.len() == 3));
    }

    #[tokio::test]
    async fn failed_fetch_surfaces_error_and_retry_refetches() {
        let (mut app, source, mut rx) = test_app(FakeSource::default());
        app.add_subreddit("doesnotexist");
        pump_one(&mut app, &mut rx).await;
        assert!(matches!(app.board.columns[0].view(), ColumnView::Error(_)));

        source
            .results
            .lock()
            .unwrap()
            .insert("doesnotexist".to_string(), vec![]);
        app.refresh_focused();
        assert!(app.board.columns[0].is_loading());
        pump_one(&mut app, &mut rx).await;

        assert_eq!(app.board.columns[0].view(), ColumnView::Empty);
        assert_eq!(source.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn refresh_while_loading_does_not_refetch() {
        let (mut app, source, mut rx) = test_app(FakeSource::with("golang", vec![]));
        app.add_subreddit("golang");
        app.refresh_focused();
        pump_one(&mut app, &mut rx).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(source.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_add_does_not_fetch_again() {
        let (mut app, source, mut rx) = test_app(FakeSource::with("golang", vec![]));
        assert!(app.add_subreddit("golang"));
        assert!(!app.add_subreddit(" golang "));
        assert!(!app.add_subreddit("   "));
        pump_one(&mut app, &mut rx).await;
        assert_eq!(app.board.len(), 1);
        assert_eq!(source.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn result_for_closed_column_is_dropped() {
        let (mut app, _source, mut rx) =
            test_app(FakeSource::with("golang", vec![sample_post("a", None)]));
        app.add_subreddit("golang");
        assert!(app.remove_subreddit("golang"));
        app.add_subreddit("golang");

        // One of the two completions belongs to the closed column.
        pump_one(&mut app, &mut rx).await;
        pump_one(&mut app, &mut rx).await;
        assert_eq!(app.board.len(), 1);
        assert_eq!(app.board.columns[0].status, LoadStatus::Loaded(vec![sample_post("a", None)]));
    }

    #[tokio::test]
    async fn remove_absent_is_noop() {
        let (mut app, _, _rx) = test_app(FakeSource::default());
        app.add_subreddit("a");
        assert!(!app.remove_subreddit("b"));
        assert_eq!(app.board.names(), vec!["a"]);
    }

    #[tokio::test]
    async fn verify_before_add_opens_only_known_subreddits() {
        let source = FakeSource {
            known: vec!["golang".to_string()],
            ..FakeSource::with("golang", vec![])
        };
        let (mut app, _, mut rx) = test_app(source);
        app.config.verify_before_add = true;

        assert!(!app.add_subreddit("nope"));
        pump_one(&mut app, &mut rx).await;
        assert!(app.board.is_empty());
        assert_eq!(app.notifications.message(), Some("r/nope not found"));

        assert!(!app.add_subreddit("golang"));
        pump_one(&mut app, &mut rx).await;
        assert_eq!(app.board.names(), vec!["golang"]);
        pump_one(&mut app, &mut rx).await;
        assert_eq!(app.board.columns[0].view(), ColumnView::Empty);
    }

    #[tokio::test]
    async fn notification_expires_on_tick() {
        let (mut app, _, _rx) = test_app(FakeSource::default());
        app.set_notification("hi");
        for _ in 0..app.config.notification_ticks() {
            app.on_tick();
        }
        assert_eq!(app.notifications.message(), None);
    }
}
