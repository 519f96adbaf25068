//! `ChartFlow` - chord chart transposition and Nashville numbering.
//!
//! Turns a plain-text chord chart (chord lines over lyric lines, bracketed
//! section headers) into a transposed or Nashville-numbered chart with
//! repeated sections compressed, then renders it to RTF or plain text.

// Re-export public modules for use in integration tests and as a library
pub mod chart;
pub mod config;
pub mod constants;
pub mod error;
pub mod files;
pub mod lyrics;
pub mod pipeline;
pub mod render;
pub mod theory;
