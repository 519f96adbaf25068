//! Document rendering for processed charts.

pub mod rtf;
pub mod text;

pub use rtf::{lines_to_rtf, RtfOptions};
pub use text::lines_to_text;

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rich text with a monospace font and bold chord runs.
    #[default]
    Rtf,
    /// Plain text, one chart line per line.
    Text,
}

impl OutputFormat {
    /// File extension for this format, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Rtf => "rtf",
            Self::Text => "txt",
        }
    }

    /// Render chart lines into the bytes of a document.
    pub fn render(self, lines: &[String], options: &RtfOptions) -> Vec<u8> {
        match self {
            Self::Rtf => rtf::lines_to_rtf_bytes(lines, options),
            Self::Text => lines_to_text(lines).into_bytes(),
        }
    }
}
