//! Collaborator creation from CLI configuration.

use std::{path::PathBuf, sync::Arc};

use biihlive_identity::{
    AppContext,
    auth::{AuthProvider, LocalAuthProvider},
    store::{ContextKey, InMemory, JsonFile, SessionStore},
};

use crate::cli::{IdentityConfig, Store};

/// File name of the JSON session store inside the data directory
pub const STORE_FILE: &str = "sessions.json";

/// Human-readable label for the configured store
pub fn store_label(config: &IdentityConfig) -> String {
    match config.store {
        Store::Json => format!("json ({})", store_path(config).display()),
        Store::Inmemory => "inmemory".to_string(),
    }
}

fn store_path(config: &IdentityConfig) -> PathBuf {
    config
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STORE_FILE)
}

/// Create the session store based on configuration
async fn create_store(
    config: &IdentityConfig,
) -> Result<Arc<dyn SessionStore>, Box<dyn std::error::Error>> {
    match config.store {
        Store::Json => {
            let path = store_path(config);
            if let Some(dir) = path.parent() {
                // Ensure data directory exists
                tokio::fs::create_dir_all(dir).await?;
            }
            tracing::info!("Using JSON session store at {}", path.display());
            Ok(Arc::new(JsonFile::open(&path).await?))
        }
        Store::Inmemory => {
            tracing::info!("Using in-memory session store");
            Ok(Arc::new(InMemory::new()))
        }
    }
}

/// Create the auth provider, loading the session file if one is configured
async fn create_auth(
    config: &IdentityConfig,
) -> Result<Arc<dyn AuthProvider>, Box<dyn std::error::Error>> {
    match &config.session {
        Some(path) => {
            tracing::info!("Loading session from {}", path.display());
            Ok(Arc::new(LocalAuthProvider::load_from_file(path).await?))
        }
        None => {
            tracing::info!("No session file configured, nobody is signed in");
            Ok(Arc::new(LocalAuthProvider::new()))
        }
    }
}

/// Build the application context for a command run
pub async fn create_context(
    config: &IdentityConfig,
) -> Result<AppContext, Box<dyn std::error::Error>> {
    let store = create_store(config).await?;
    let auth = create_auth(config).await?;
    Ok(AppContext::new(
        ContextKey::new(config.context_key.as_str()),
        auth,
        store,
    ))
}
