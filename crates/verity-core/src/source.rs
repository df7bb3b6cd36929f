//! Source classification for submitted URLs.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::VIDEO_HOSTS;

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:youtube\.com/(?:[^/\n\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})",
    )
    .expect("youtube id pattern is valid")
});

/// Kind of content behind a source URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Video with a transcript
    Youtube,
    /// News or blog article; any unrecognized value maps here
    #[default]
    #[serde(other)]
    Article,
}

impl ContentType {
    /// Classify a URL by host substring.
    pub fn from_url(url: &str) -> Self {
        if VIDEO_HOSTS.iter().any(|host| url.contains(host)) {
            Self::Youtube
        } else {
            Self::Article
        }
    }

    /// Human-readable label for metadata display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Youtube => "YouTube Video",
            Self::Article => "Article",
        }
    }
}

/// Extract the 11-character video id from a YouTube URL.
pub fn extract_youtube_id(url: &str) -> Option<String> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
}
