// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::{DatabaseLocation, ServerConfig};
use std::net::SocketAddr;
use std::path::PathBuf;

#[test]
fn test_database_location_parsing() {
    assert_eq!(DatabaseLocation::parse(None), DatabaseLocation::InMemory);
    assert_eq!(DatabaseLocation::parse(Some("  ")), DatabaseLocation::InMemory);
    assert_eq!(
        DatabaseLocation::parse(Some(":memory:")),
        DatabaseLocation::InMemory
    );
    assert_eq!(
        DatabaseLocation::parse(Some("sqlite::memory:")),
        DatabaseLocation::InMemory
    );
    assert_eq!(
        DatabaseLocation::parse(Some("/var/lib/personnel/directory.db")),
        DatabaseLocation::File(PathBuf::from("/var/lib/personnel/directory.db"))
    );
    assert_eq!(
        DatabaseLocation::parse(Some("sqlite://data/directory.db")),
        DatabaseLocation::File(PathBuf::from("data/directory.db"))
    );
}

#[test]
fn test_explicit_database_wins_over_fallback() {
    let bind: SocketAddr = "127.0.0.1:8080".parse().unwrap();

    let config: ServerConfig = ServerConfig::new(
        Some(String::from("primary.db")),
        Some(String::from("sqlite://fallback.db")),
        bind,
    );
    assert_eq!(
        config.database,
        DatabaseLocation::File(PathBuf::from("primary.db"))
    );
    assert_eq!(config.bind, bind);

    let config: ServerConfig =
        ServerConfig::new(None, Some(String::from("sqlite://fallback.db")), bind);
    assert_eq!(
        config.database,
        DatabaseLocation::File(PathBuf::from("fallback.db"))
    );
}

#[test]
fn test_in_memory_location_opens() {
    assert!(DatabaseLocation::InMemory.open().is_ok());
}
