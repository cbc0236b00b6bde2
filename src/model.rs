use serde::Deserialize;

// --- Data Structures ---

const SENTINEL_THUMBNAILS: [&str; 2] = ["self", "default"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub author: String,
    pub score: i64,
    pub num_comments: u64,
    pub created_utc: f64,
    pub permalink: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub subreddit: String,
}

impl Post {
    /// Thumbnail URL worth drawing, skipping empty values and Reddit's placeholders.
    pub fn display_thumbnail(&self) -> Option<&str> {
        self.thumbnail
            .as_deref()
            .filter(|t| !t.is_empty() && !SENTINEL_THUMBNAILS.contains(t))
    }

    pub fn permalink_url(&self) -> String {
        format!("https://reddit.com{}", self.permalink)
    }
}

/// `GET /r/{name}.json` response envelope.
#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
pub struct ListingChild {
    pub data: Post,
}

impl Listing {
    pub fn into_posts(self) -> Vec<Post> {
        self.data.children.into_iter().map(|child| child.data).collect()
    }
}

#[cfg(test)]
pub(crate) fn sample_post(id: &str, thumbnail: Option<&str>) -> Post {
    Post {
        id: id.to_string(),
        title: format!("Post {}", id),
        author: "gopher".to_string(),
        score: 42,
        num_comments: 7,
        created_utc: 1_700_000_000.0,
        permalink: format!("/r/golang/comments/{}/post/", id),
        url: format!("https://example.com/{}", id),
        thumbnail: thumbnail.map(str::to_string),
        subreddit: "golang".to_string(),
    }
}
