pub mod board;
pub mod column;
pub mod notification;
pub mod ui;

pub use board::BoardState;
pub use column::{ColumnState, ColumnView, LoadStatus};
pub use notification::NotificationState;
pub use ui::{AppMode, UiState};
