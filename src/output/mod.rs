use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Progress line; suppressed in JSON mode so stdout stays one document.
    pub fn line(&self, text: &str) {
        if self.mode == OutputMode::Text {
            println!("{text}");
        }
    }

    pub fn lines<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.line(line.as_ref());
        }
    }

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => println!("{text_line}"),
            OutputMode::Json => {
                let payload = serde_json::to_string_pretty(json_value)?;
                println!("{payload}");
            }
        }
        Ok(())
    }

    /// Emits `json_value` in JSON mode only.
    pub fn json<T: Serialize>(&self, json_value: &T) -> AppResult<()> {
        if self.mode == OutputMode::Json {
            let payload = serde_json::to_string_pretty(json_value)?;
            println!("{payload}");
        }
        Ok(())
    }
}

pub fn status_label(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}
