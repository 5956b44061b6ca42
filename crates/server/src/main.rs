// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod routes;

#[cfg(test)]
mod tests;

use axum::Router;
use clap::{Parser, Subcommand};
use personnel_api::purge_employees;
use personnel_persistence::Persistence;
use std::net::SocketAddr;
use tracing::{error, info, warn};

use crate::config::{DatabaseLocation, ServerConfig};
use crate::routes::{AppState, build_router};

/// Personnel Server - HTTP server for the employee directory
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path or `sqlite://` URL of the `SQLite` database. Falls back to
    /// `DATABASE_URL`; uses an in-memory database if neither is set.
    #[arg(short, long, global = true, env = "PERSONNEL_DATABASE")]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(
        short,
        long,
        global = true,
        env = "PERSONNEL_BIND",
        default_value = "127.0.0.1:3000"
    )]
    bind: SocketAddr,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Serve the HTTP API (the default)
    Serve,
    /// Delete every employee record, keeping departments
    PurgeEmployees,
}

/// Resolves when the process is asked to stop.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received, draining connections");
}

async fn serve(
    config: &ServerConfig,
    persistence: Persistence,
) -> Result<(), Box<dyn std::error::Error>> {
    let app_state: AppState = AppState::new(persistence);
    let app: Router = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn purge(
    config: &ServerConfig,
    persistence: &mut Persistence,
) -> Result<(), Box<dyn std::error::Error>> {
    if config.database == DatabaseLocation::InMemory {
        warn!("Purging an in-memory database has no lasting effect");
    }

    let deleted: usize = purge_employees(persistence)?;
    info!(deleted, "Purged employee records");
    println!("Deleted {deleted} employee record(s)");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config: ServerConfig = ServerConfig::new(
        args.database,
        std::env::var("DATABASE_URL").ok(),
        args.bind,
    );

    info!("Initializing personnel server");
    let mut persistence: Persistence = config.database.open()?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, persistence).await,
        Command::PurgeEmployees => purge(&config, &mut persistence),
    }
}
