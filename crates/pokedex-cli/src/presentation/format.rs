//! Output format selection.

use clap::ValueEnum;

/// Output format for a rendered record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Bordered plain-text block.
    #[default]
    Text,
    /// `<h1>` heading followed by a `<ul>` of fields.
    Html,
    /// Semicolon-separated header and data row.
    Csv,
}

impl OutputFormat {
    /// The command-line spelling of this format.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Csv => "csv",
        }
    }
}
