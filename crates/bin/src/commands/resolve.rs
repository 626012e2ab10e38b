//! Resolve command - prints the authoritative user id.

use biihlive_identity::AppContext;

use crate::output::OutputFormat;

/// Run the resolve command
pub async fn run(
    context: &AppContext,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let user_id = context
        .identity_resolver()
        .resolve_current_user_id()
        .await?;

    match format {
        OutputFormat::Human => println!("{user_id}"),
        OutputFormat::Json => {
            let value = serde_json::json!({ "user_id": user_id });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
