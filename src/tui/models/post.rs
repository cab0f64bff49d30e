//! # Post Model
//!
//! The single domain record exchanged with the post store, plus the request
//! bodies used to create and update it.

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Server-assigned post identifier
///
/// Stores differ on whether ids are integers or strings. Both decode into the
/// textual form, so `1` and `"1"` name the same post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
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

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPostId {
    Number(serde_json::Number),
    Text(String),
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawPostId::deserialize(deserializer)? {
            RawPostId::Number(n) => PostId(n.to_string()),
            RawPostId::Text(s) => PostId(s),
        })
    }
}

impl Serialize for PostId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// A post as returned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
}

/// Body of a create request; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub author: String,
    pub image: String,
    pub content: String,
    pub date: String,
}

impl NewPost {
    /// Build a post dated today (UTC)
    pub fn dated_today(title: String, author: String, image: String, content: String) -> Self {
        Self {
            title,
            author,
            image,
            content,
            date: today(),
        }
    }
}

/// Body of a partial update; only title and content are editable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPatch {
    pub title: String,
    pub content: String,
}

/// Today's UTC date as `YYYY-MM-DD`
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
