#[derive(PartialEq, Debug, Clone, Copy)]
pub enum AppMode {
    Board,
    AddSubreddit,
}

/// State management for UI-specific state
pub struct UiState {
    pub mode: AppMode,
    pub should_quit: bool,
    pub tick_count: u64,

    // Add-subreddit prompt
    pub input: String,

    // Quit confirmation
    pub show_quit_confirm: bool,
    pub quit_confirm_selected: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            mode: AppMode::Board,
            should_quit: false,
            tick_count: 0,
            input: String::new(),
            show_quit_confirm: false,
            quit_confirm_selected: 0,
        }
    }
}

impl UiState {
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count += 1;
    }

    pub fn open_prompt(&mut self) {
        self.input.clear();
        self.mode = AppMode::AddSubreddit;
    }

    /// Closes the prompt and hands back whatever was typed.
    pub fn take_input(&mut self) -> String {
        self.mode = AppMode::Board;
        std::mem::take(&mut self.input)
    }

    pub fn cancel_prompt(&mut self) {
        self.input.clear();
        self.mode = AppMode::Board;
    }

    pub fn show_quit_confirm(&mut self) {
        self.show_quit_confirm = true;
        self.quit_confirm_selected = 1; // Default to "No"
    }

    /// Spinner frame for columns that are still loading.
    pub fn spinner(&self) -> char {
        const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
        FRAMES[(self.tick_count % FRAMES.len() as u64) as usize]
    }
}
