//! CLI argument definitions for the Biihlive identity binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Session store backend type
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Store {
    /// JSON file in the data directory (default, survives restarts)
    Json,
    /// In-memory only (nothing is persisted)
    Inmemory,
}

/// Biihlive current-user identity tool
#[derive(Parser, Debug)]
#[command(name = "biihlive-identity")]
#[command(about = "Resolve the current Biihlive user from a session and the persisted store")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub config: IdentityConfig,

    /// Print machine-readable JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the current user id (fails unless a non-anonymous session exists)
    Resolve,
    /// Resolve the current user's profile details
    Details,
    /// Show the context key, store and session state
    Info,
}

/// Configuration shared by every command
#[derive(clap::Args, Debug)]
pub struct IdentityConfig {
    /// Session store backend to use
    #[arg(short, long, default_value = "json", env = "BIIHLIVE_STORE", global = true)]
    pub store: Store,

    /// Data directory holding sessions.json
    #[arg(short = 'D', long, env = "BIIHLIVE_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Context key the session is persisted under
    #[arg(long, default_value = "biihlive", env = "BIIHLIVE_CONTEXT_KEY", global = true)]
    pub context_key: String,

    /// JSON session file served by the auth provider (absent file means nobody is signed in)
    #[arg(long, env = "BIIHLIVE_SESSION_FILE", global = true)]
    pub session: Option<PathBuf>,
}
