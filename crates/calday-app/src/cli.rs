use calday_core::Date;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "calday")]
#[command(about = "Normalize, parse, compare and format calendar dates.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build a date from numeric fields, carrying out-of-range values
    #[command(alias = "n", allow_negative_numbers = true)]
    New { year: i32, month: i32, day: i32 },
    /// Parse a YYYY-MM-DD date strictly
    #[command(alias = "p")]
    Parse { text: String },
    /// Render a date through a strftime layout
    #[command(alias = "s")]
    Show {
        date: Date,
        /// Layout such as "%A, %B %d"; defaults to `display.layout`
        #[arg(short, long)]
        layout: Option<String>,
    },
    /// Print the number of days from B to A
    #[command(alias = "d")]
    Diff { a: Date, b: Date },
    /// Print whether A is before, equal to or after B
    #[command(alias = "c")]
    Compare { a: Date, b: Date },
}

impl CommandLine {
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
