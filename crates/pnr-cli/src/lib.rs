//! CLI library components for the PNR status tool.

pub mod logging;
pub mod render;
