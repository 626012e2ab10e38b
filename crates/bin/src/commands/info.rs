//! Info command - shows context key, store, persisted id and session state.

use biihlive_identity::{AppContext, auth::AuthProvider, store::SessionStore};

use crate::backend::store_label;
use crate::cli::IdentityConfig;
use crate::output::{OutputFormat, print_fields};

/// Run the info command
///
/// Reads the provider and store directly so that inspecting state has no
/// side effects on either.
pub async fn run(
    context: &AppContext,
    config: &IdentityConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let persisted = context
        .session_store()
        .get(context.context_key())
        .await?;
    let session = context.auth_provider().current_session().await?;

    let session_state = match &session {
        Some(session) if session.is_anonymous => "anonymous",
        Some(_) => "signed in",
        None => "none",
    };
    let store_str = store_label(config);

    match format {
        OutputFormat::Human => print_fields(&[
            ("Context key", Some(context.context_key().as_str())),
            ("Store", Some(store_str.as_str())),
            ("Persisted user", persisted.as_deref()),
            ("Session", Some(session_state)),
            ("Session user", session.as_ref().map(|s| s.id.as_str())),
        ]),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "context_key": context.context_key(),
                "store": store_str,
                "persisted_user_id": persisted,
                "session": session,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
