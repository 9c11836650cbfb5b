//! Comment store persisted as a JSON array on disk.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use meeting_engine::comments::most_recent_first;
use meeting_engine::error::{EngineError, Result};
use meeting_engine::{Comment, CommentStore};
use parking_lot::Mutex;
use tempfile::NamedTempFile;

/// Comments kept in insertion order in a single JSON file.
///
/// A missing file reads as an empty board. Writes go to a temporary file in
/// the same directory which is then renamed over the board, so readers see
/// either the old or the new contents. Every load-modify-save cycle holds the
/// store's lock; writers in other processes are not serialized.
#[derive(Debug)]
pub struct JsonFileCommentStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileCommentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Comment>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(store_error(&self.path, e)),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw).map_err(|e| store_error(&self.path, e))
    }

    fn save(&self, comments: &[Comment]) -> Result<()> {
        let json = serde_json::to_vec_pretty(comments).map_err(|e| store_error(&self.path, e))?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| store_error(&self.path, e))?;
        tmp.write_all(&json)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| store_error(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| store_error(&self.path, e.error))?;
        Ok(())
    }

    fn update(&self, batch: Vec<Comment>) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut comments = self.load()?;
        comments.extend(batch);
        self.save(&comments)
    }
}

impl CommentStore for JsonFileCommentStore {
    fn append(&self, text: &str, author: Option<&str>) -> Result<()> {
        self.update(vec![Comment::now(text, author.map(str::to_owned))])
    }

    fn append_all(&self, texts: &[&str], author: Option<&str>) -> Result<usize> {
        let author = author.map(str::to_owned);
        let batch = texts
            .iter()
            .map(|text| Comment::now(*text, author.clone()))
            .collect();
        self.update(batch)?;
        Ok(texts.len())
    }

    fn list(&self, limit: usize) -> Result<Vec<Comment>> {
        Ok(most_recent_first(&self.load()?, limit))
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(store_error(&self.path, e)),
        }
    }
}

fn store_error(path: &Path, err: impl std::fmt::Display) -> EngineError {
    EngineError::Store(format!("{}: {}", path.display(), err))
}
