// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Server configuration.

use personnel_persistence::{Persistence, PersistenceError};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

/// Where the directory is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// A private in-memory database, lost on exit.
    InMemory,
    /// A `SQLite` file, created if missing.
    File(PathBuf),
}

impl DatabaseLocation {
    /// Interprets a configured database value.
    ///
    /// Accepts a plain path, a `sqlite://` or `sqlite:` URL, or `:memory:`.
    /// An absent or blank value means in-memory.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::InMemory;
        };
        let path: &str = raw
            .strip_prefix("sqlite://")
            .or_else(|| raw.strip_prefix("sqlite:"))
            .unwrap_or(raw);
        if path.is_empty() || path == ":memory:" {
            Self::InMemory
        } else {
            Self::File(PathBuf::from(path))
        }
    }

    /// Opens the store at this location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open(&self) -> Result<Persistence, PersistenceError> {
        match self {
            Self::InMemory => {
                info!("Using in-memory database");
                Persistence::new_in_memory()
            }
            Self::File(path) => {
                info!(path = %path.display(), "Using file-based database");
                Persistence::new_with_file(path)
            }
        }
    }
}

/// Configuration resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database: DatabaseLocation,
    pub bind: SocketAddr,
}

impl ServerConfig {
    /// Builds the configuration from command-line values.
    ///
    /// `fallback_database` is consulted only when no database was given
    /// on the command line or in `PERSONNEL_DATABASE`.
    #[must_use]
    pub fn new(
        database: Option<String>,
        fallback_database: Option<String>,
        bind: SocketAddr,
    ) -> Self {
        Self {
            database: DatabaseLocation::parse(database.or(fallback_database).as_deref()),
            bind,
        }
    }
}
