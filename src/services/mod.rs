pub mod reddit;

pub use reddit::{PostSource, RedditClient};
