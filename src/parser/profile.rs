//! Airfoil coordinate file parser and the per-run profile cache.

use crate::error::{ImportError, Result};
use crate::model::{AirfoilProfile, Point2D};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Parse airfoil file content. The first line is a header and is ignored.
///
/// Every other non-blank line must start with two numbers; anything else
/// fails the whole file, since a section outline cannot be built from a
/// partial airfoil.
pub fn parse_profile(content: &str) -> Result<AirfoilProfile> {
    let mut points = Vec::new();

    for (idx, line) in content.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (Some(x), Some(y)) = (tokens.next(), tokens.next()) else {
            return Err(ImportError::Parse {
                line: idx + 1,
                message: format!("expected two coordinates, got '{}'", line),
            });
        };

        let x = parse_coordinate(x, idx + 1)?;
        let y = parse_coordinate(y, idx + 1)?;
        points.push(Point2D::new(x, y));
    }

    Ok(AirfoilProfile::new(points))
}

fn parse_coordinate(token: &str, line: usize) -> Result<f64> {
    token.parse().map_err(|_| ImportError::Parse {
        line,
        message: format!("invalid coordinate '{}'", token),
    })
}

/// Parse an airfoil file from a path.
pub fn parse_profile_file(path: &Path) -> Result<AirfoilProfile> {
    if !path.exists() {
        return Err(ImportError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(ImportError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_profile(&content)
}

/// Parsed airfoils keyed by absolute path.
///
/// Owned by the caller and passed to each import. Entries are never
/// refreshed, so a file edited on disk is only re-read after `clear`.
#[derive(Debug, Default)]
pub struct ProfileCache {
    entries: Mutex<HashMap<PathBuf, Arc<AirfoilProfile>>>,
}

impl ProfileCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached profile for `path`, parsing the file on first use.
    pub fn load(&self, path: &Path) -> Result<Arc<AirfoilProfile>> {
        let key = cache_key(path)?;

        if let Some(profile) = self.lock().get(&key) {
            debug!("Profile cache hit: {}", key.display());
            return Ok(Arc::clone(profile));
        }

        // Parse outside the lock so loads of distinct files do not serialize.
        let profile = Arc::new(parse_profile_file(&key)?);
        debug!(
            "Profile cache miss: {} ({} points)",
            key.display(),
            profile.len()
        );

        let mut entries = self.lock();
        let entry = entries.entry(key).or_insert(profile);
        Ok(Arc::clone(entry))
    }

    /// Check if `path` has been loaded.
    pub fn contains(&self, path: &Path) -> bool {
        cache_key(path).is_ok_and(|key| self.lock().contains_key(&key))
    }

    /// Number of cached profiles.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing has been cached.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all cached profiles.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Arc<AirfoilProfile>>> {
        // The map stays consistent even if a holder panicked.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn cache_key(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}
