//! Command handlers. Each returns the text to print.

use calday_core::Date;

use crate::cli::Commands;
use crate::config::Settings;
use crate::error::AppResult;

/// ## Summary
/// Runs a single command against the loaded settings.
///
/// ## Errors
/// Returns an error if a date fails to parse or a layout is invalid.
#[tracing::instrument(skip(settings))]
pub fn run(command: Commands, settings: &Settings) -> AppResult<String> {
    let output = match command {
        Commands::New { year, month, day } => Date::new(year, month, day).to_string(),
        Commands::Parse { text } => Date::parse(&text)?.to_string(),
        Commands::Show { date, layout } => {
            date.format(layout.as_deref().unwrap_or(&settings.display.layout))?
        }
        Commands::Diff { a, b } => a.sub(b).to_string(),
        Commands::Compare { a, b } => compare(a, b).to_string(),
    };

    tracing::debug!(%output, "Command finished");
    Ok(output)
}

fn compare(a: Date, b: Date) -> &'static str {
    if a.before(b) {
        "before"
    } else if a.after(b) {
        "after"
    } else {
        "equal"
    }
}
