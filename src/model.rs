//! Display-relevant post record consumed by the cards.
//!
//! Posts are owned by whoever loads them; cards only borrow.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque post identifier passed to the navigate callback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub author: PostAuthor,
    /// Pre-formatted display date (e.g. "July 09").
    pub date: String,
    pub read_time_minutes: u32,
}

/// Publication a post appeared in. Accepted on input, unused by the cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub name: String,
    pub logo_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication: Option<Publication>,
    pub metadata: Metadata,
    /// Asset id of the hero image.
    pub image_id: String,
    /// Asset id of the small thumbnail.
    pub image_thumb_id: String,
}

/// Built-in posts used by the preview when no feed is given.
pub mod samples {
    use super::{Metadata, Post, PostAuthor, PostId};

    fn post(id: &str, title: &str, author: &str, date: &str, minutes: u32, image: &str) -> Post {
        Post {
            id: PostId::new(id),
            title: title.to_string(),
            subtitle: None,
            url: None,
            publication: None,
            metadata: Metadata {
                author: PostAuthor {
                    name: author.to_string(),
                    url: None,
                },
                date: date.to_string(),
                read_time_minutes: minutes,
            },
            image_id: image.to_string(),
            image_thumb_id: format!("{image}_thumb"),
        }
    }

    pub fn popular() -> Post {
        post(
            "dc523f0ed25c",
            "A Little Thing about Android Module Paths",
            "Pietro Maggi",
            "August 02",
            1,
            "post_1",
        )
    }

    pub fn history() -> Post {
        post(
            "ac552dcc1741",
            "Improving Inclusive Design for Everyone",
            "Florina Muntenescu",
            "July 09",
            3,
            "post_3",
        )
    }

    pub fn all() -> Vec<Post> {
        vec![popular(), history()]
    }
}
