//! Terminal View
//!
//! Draws the catalog and notices as text (or JSON) and asks for
//! confirmation on the input stream.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use super::{CatalogView, Roster, View, EMPTY_ROSTER_TEXT};
use crate::notice::{Notice, Severity};

/// Output format of the terminal view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// [`View`] over a pair of byte streams
pub struct TerminalView {
    format: OutputFormat,
    assume_yes: bool,
    out: Mutex<Box<dyn Write + Send>>,
    input: Mutex<Box<dyn BufRead + Send>>,
}

impl TerminalView {
    /// View over stdout/stdin
    pub fn stdio(format: OutputFormat, assume_yes: bool) -> Self {
        Self::with_io(
            format,
            assume_yes,
            Box::new(io::stdout()),
            Box::new(io::BufReader::new(io::stdin())),
        )
    }

    pub fn with_io(
        format: OutputFormat,
        assume_yes: bool,
        out: Box<dyn Write + Send>,
        input: Box<dyn BufRead + Send>,
    ) -> Self {
        Self {
            format,
            assume_yes,
            out: Mutex::new(out),
            input: Mutex::new(input),
        }
    }

    fn write(&self, text: &str) {
        let Ok(mut out) = self.out.lock() else {
            tracing::warn!("Terminal output lock poisoned");
            return;
        };
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

/// Plain-text rendering of a catalog
pub fn format_table(view: &CatalogView) -> String {
    let mut text = String::new();
    if view.cards.is_empty() {
        text.push_str("No activities.\n");
        return text;
    }

    for card in &view.cards {
        text.push_str(&format!("{}\n", card.name));
        if !card.description.is_empty() {
            text.push_str(&format!("  {}\n", card.description));
        }
        text.push_str(&format!("  Schedule: {}\n", card.schedule));
        text.push_str(&format!("  Availability: {}\n", card.availability_text()));
        text.push_str("  Participants:\n");
        match &card.roster {
            Roster::Empty => text.push_str(&format!("    {}\n", EMPTY_ROSTER_TEXT)),
            Roster::Participants(entries) => {
                for entry in entries {
                    text.push_str(&format!("    - {}\n", entry.email));
                }
            }
        }
        text.push('\n');
    }
    text
}

impl View for TerminalView {
    fn render_catalog(&self, view: &CatalogView) {
        match self.format {
            OutputFormat::Table => self.write(&format_table(view)),
            OutputFormat::Json => match serde_json::to_string_pretty(view) {
                Ok(json) => self.write(&format!("{}\n", json)),
                Err(e) => tracing::error!("Failed to encode catalog: {}", e),
            },
        }
    }

    fn render_load_failure(&self, message: &str) {
        self.write(&format!("{}\n", message));
    }

    fn show_notice(&self, notice: &Notice) {
        match self.format {
            OutputFormat::Table => {
                let icon = match notice.severity {
                    Severity::Success => "✓",
                    Severity::Error => "✕",
                };
                self.write(&format!("{} {}\n", icon, notice.text));
            }
            OutputFormat::Json => match serde_json::to_string(notice) {
                Ok(json) => self.write(&format!("{}\n", json)),
                Err(e) => tracing::error!("Failed to encode notice: {}", e),
            },
        }
    }

    fn hide_notice(&self) {
        tracing::debug!("Notice expired");
    }

    fn reset_form(&self) {
        tracing::debug!("Signup form cleared");
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        self.write(&format!("{} [y/N] ", prompt));

        let read_answer = || {
            let mut answer = String::new();
            let mut input = self
                .input
                .lock()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "input lock poisoned"))?;
            input.read_line(&mut answer)?;
            Ok::<_, io::Error>(answer)
        };

        // Stdin blocks; keep other tasks running while the user answers
        let read = match tokio::runtime::Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == tokio::runtime::RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(read_answer)
            }
            _ => read_answer(),
        };
        match read {
            Ok(answer) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}
