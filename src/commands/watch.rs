//! Interactive field session
//!
//! Each stdin line is typed into the field one keystroke at a time, so
//! non-digits are filtered exactly as a browser field would filter them.
//! Feedback is printed whenever it changes.
//!
//! Line forms:
//! - `paste:<text>` pastes `<text>` at the end of the current value
//! - an empty line clears the field
//! - anything else replaces the value by typing it

use std::io::{self, BufRead, Write};

use serde::Serialize;

use cpfcheck::adapters::{BufferInput, TerminalFeedback};
use cpfcheck::config::Config;
use cpfcheck::core::models::Verdict;
use cpfcheck::core::ports::{FeedbackSink, InputField};
use cpfcheck::field::{FieldController, KeyDecision, KeyEvent, PasteDecision};
use cpfcheck::output::OutputMode;

const PASTE_PREFIX: &str = "paste:";

/// Field state after one line, for JSON output
#[derive(Debug, Serialize)]
struct WatchEvent {
    line: String,
    value: String,
    verdict: Option<Verdict>,
    blocked: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    paste_rejected: Option<bool>,
}

/// Run the interactive field until stdin closes
pub fn watch(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Human => {
            let stdout = io::stdout().lock();
            let feedback = if config.display.color {
                TerminalFeedback::colored(stdout, &config.feedback)?
            } else {
                TerminalFeedback::plain(stdout)
            };
            let mut field =
                FieldController::new(BufferInput::default(), feedback, config.feedback.clone());
            for line in io::stdin().lock().lines() {
                let line = line?;
                let event = apply_line(&mut field, &line);
                if event.blocked > 0 {
                    log::info!("ignored {} non-digit keystroke(s)", event.blocked);
                }
                if event.paste_rejected == Some(true) {
                    log::info!("paste rejected: only digits can be pasted");
                }
            }
        },
        OutputMode::Json => {
            let feedback = TerminalFeedback::plain(io::sink());
            let mut field =
                FieldController::new(BufferInput::default(), feedback, config.feedback.clone());
            let mut out = io::stdout().lock();
            for line in io::stdin().lock().lines() {
                let event = apply_line(&mut field, &line?);
                writeln!(out, "{}", serde_json::to_string(&event)?)?;
            }
        },
    }

    Ok(())
}

fn apply_line<F: FeedbackSink>(
    field: &mut FieldController<BufferInput, F>,
    line: &str,
) -> WatchEvent {
    let mut blocked = 0;
    let mut paste_rejected = None;

    if let Some(text) = line.strip_prefix(PASTE_PREFIX) {
        paste_rejected = Some(field.on_paste(text) == PasteDecision::Reject);
    } else {
        field.input_mut().reset();
        for c in line.chars() {
            if field.type_key(KeyEvent::char(c)) == KeyDecision::Block {
                blocked += 1;
            }
        }
    }

    let verdict = field.on_input();
    WatchEvent {
        line: line.to_string(),
        value: field.input().value(),
        verdict,
        blocked,
        paste_rejected,
    }
}
