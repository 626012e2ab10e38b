//! Output formatting helpers for human-readable and JSON output.

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Print `label: value` pairs with the values aligned.
///
/// Missing values are printed as `-`.
pub fn print_fields(fields: &[(&str, Option<&str>)]) {
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
    for (label, value) in fields {
        println!(
            "{:<width$}  {}",
            format!("{label}:"),
            value.unwrap_or("-"),
            width = width
        );
    }
}
