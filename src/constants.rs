//! Application constants.
//!
//! Centralizes defaults so they can be threaded through the pipeline explicitly.

/// Chart layout constants.
pub mod chart {
    /// Default maximum line width before hard truncation.
    pub const DEFAULT_MAX_WIDTH: usize = 80;

    /// Title used for repeat markers of sections that have no header.
    pub const UNTITLED_SECTION: &str = "[Section]";

    /// Number of blank lines kept before each section header.
    pub const BLANKS_BEFORE_HEADER: usize = 2;
}

/// Input and output location constants.
pub mod paths {
    /// Directory searched for charts that are not found as given.
    pub const DEFAULT_INPUT_DIR: &str = "input";

    /// Directory that receives rendered documents.
    pub const DEFAULT_OUTPUT_DIR: &str = "output";
}

/// Document rendering constants.
pub mod render {
    /// Monospace font so chord columns line up with lyrics.
    pub const MONO_FONT: &str = "Courier New";

    /// Font size in points.
    pub const FONT_SIZE: u32 = 10;

    /// Line spacing in RTF units (240 = single, 276 = 1.15).
    pub const LINE_SPACING: u32 = 276;
}
