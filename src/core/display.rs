//! Status line assembly and rendering for i3blocks / i3bar.

use serde::Serialize;

use super::color::ColorTag;

/// Text shown when a metric could not be read
pub const UNAVAILABLE_TEXT: &str = "N/A";

/// How a status line is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Text, then the color on a second line when set
    #[default]
    Plain,
    /// Full text, short text, then color (i3blocks block protocol)
    I3blocks,
    /// One i3bar protocol JSON block
    Json,
}

/// A formatted metric ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLine {
    pub full_text: String,
    pub short_text: String,
    pub color: ColorTag,
}

#[derive(Serialize)]
struct I3barBlock<'a> {
    full_text: &'a str,
    short_text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'static str>,
}

impl StatusLine {
    pub fn new<S: Into<String>>(text: S, color: ColorTag) -> Self {
        let text = text.into();
        Self {
            short_text: text.clone(),
            full_text: text,
            color,
        }
    }

    /// Format `<value><unit>` with the resolved color
    pub fn with_unit(value: impl std::fmt::Display, unit: &str, color: ColorTag) -> Self {
        Self::new(format!("{}{}", value, unit), color)
    }

    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self::new(text, ColorTag::None)
    }

    /// Marked indicator for a metric whose query failed
    pub fn unavailable() -> Self {
        Self::plain(UNAVAILABLE_TEXT)
    }

    pub fn is_empty(&self) -> bool {
        self.full_text.is_empty()
    }

    /// Compose several lines into one.
    ///
    /// Texts are joined with a single space and trimmed. The first
    /// non-empty color in order wins; later colors are ignored even when
    /// more severe.
    pub fn compose<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = StatusLine>,
    {
        let mut texts = Vec::new();
        let mut color = ColorTag::None;

        for part in parts {
            if color.is_none() {
                color = part.color;
            }
            texts.push(part.full_text);
        }

        Self::new(texts.join(" ").trim(), color)
    }

    /// Render for the given output format, without a trailing newline
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Plain => match self.color.hex() {
                Some(hex) => format!("{}\n{}", self.full_text, hex),
                None => self.full_text.clone(),
            },
            OutputFormat::I3blocks => {
                let mut out = format!("{}\n{}", self.full_text, self.short_text);
                if let Some(hex) = self.color.hex() {
                    out.push('\n');
                    out.push_str(hex);
                }
                out
            }
            OutputFormat::Json => {
                let block = I3barBlock {
                    full_text: &self.full_text,
                    short_text: &self.short_text,
                    color: self.color.hex(),
                };
                // Serializing plain strings cannot fail
                serde_json::to_string(&block).unwrap_or_default()
            }
        }
    }
}
