//! Note algebra: pitch classes, enharmonic normalization and scale degrees.

pub mod note;

pub use note::{scale_degree, Note};
