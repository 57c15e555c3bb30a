//! CLI library components for the model inspection tool.

pub mod logging;
