//! Visitor comment board.
//!
//! Comments are appended one submission at a time and listed newest first.
//! The scheduling core does not depend on this module.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Largest number of comments a single listing may request.
pub const MAX_COMMENT_LIMIT: usize = 10;

/// A stored comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    /// A comment stamped with the current time.
    pub fn now(text: impl Into<String>, author: Option<String>) -> Self {
        Self {
            text: text.into(),
            author,
            timestamp: Utc::now(),
        }
    }
}

/// Storage backend for comments.
///
/// Methods take `&self` so a store can be shared between threads.
pub trait CommentStore {
    fn append(&self, text: &str, author: Option<&str>) -> Result<()>;

    /// Append several comments by the same author.
    ///
    /// The default appends one at a time, so an error can leave earlier
    /// entries stored. Stores that can write a batch at once override this
    /// to store all of `texts` or none.
    fn append_all(&self, texts: &[&str], author: Option<&str>) -> Result<usize> {
        for text in texts {
            self.append(text, author)?;
        }
        Ok(texts.len())
    }

    /// At most `limit` comments, most recent first.
    fn list(&self, limit: usize) -> Result<Vec<Comment>>;

    fn clear(&self) -> Result<()>;
}

/// In-process store; contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryCommentStore {
    comments: RwLock<Vec<Comment>>,
}

impl MemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.comments.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.read().is_empty()
    }
}

impl CommentStore for MemoryCommentStore {
    fn append(&self, text: &str, author: Option<&str>) -> Result<()> {
        let comment = Comment::now(text, author.map(str::to_owned));
        self.comments.write().push(comment);
        Ok(())
    }

    fn append_all(&self, texts: &[&str], author: Option<&str>) -> Result<usize> {
        let author = author.map(str::to_owned);
        let batch = texts.iter().map(|text| Comment::now(*text, author.clone()));
        self.comments.write().extend(batch);
        Ok(texts.len())
    }

    fn list(&self, limit: usize) -> Result<Vec<Comment>> {
        Ok(most_recent_first(&self.comments.read(), limit))
    }

    fn clear(&self) -> Result<()> {
        self.comments.write().clear();
        Ok(())
    }
}

/// Order comments held in insertion order newest first, keeping at most
/// `limit`.
///
/// Equal timestamps are ordered by insertion, later first.
pub fn most_recent_first(comments: &[Comment], limit: usize) -> Vec<Comment> {
    let mut indexed: Vec<(usize, &Comment)> = comments.iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| b.timestamp.cmp(&a.timestamp).then(ib.cmp(ia)));
    indexed
        .into_iter()
        .take(limit)
        .map(|(_, c)| c.clone())
        .collect()
}

/// Split a submitted form value into individual comments.
///
/// Entries are separated by commas. Surrounding whitespace is trimmed and
/// blank entries are dropped.
///
/// ```
/// use meeting_engine::comments::split_comment_input;
///
/// assert_eq!(split_comment_input(" hi , there,, "), vec!["hi", "there"]);
/// ```
pub fn split_comment_input(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Parse a user-supplied listing limit in `1..=MAX_COMMENT_LIMIT`.
///
/// # Errors
/// Returns `EngineError::InvalidCommentLimit` for non-integers or values out
/// of range.
pub fn parse_comment_limit(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if (1..=MAX_COMMENT_LIMIT).contains(&n) => Ok(n),
        _ => Err(EngineError::InvalidCommentLimit(raw.to_string())),
    }
}
