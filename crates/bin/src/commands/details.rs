//! Details command - prints the signed-in user's profile snapshot.

use biihlive_identity::AppContext;

use crate::output::{OutputFormat, print_fields};

/// Run the details command
pub async fn run(
    context: &AppContext,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let details = context
        .identity_resolver()
        .resolve_current_user_details()
        .await?;

    match format {
        OutputFormat::Human => print_fields(&[
            ("User ID", Some(details.user_id.as_str())),
            ("Email", details.email.as_deref()),
            ("Display name", details.display_name.as_deref()),
            ("Avatar URL", details.avatar_url.as_deref()),
        ]),
        OutputFormat::Json => println!("{}", serde_json::to_string(&details)?),
    }

    Ok(())
}
