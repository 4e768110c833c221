//! CLI library components for the lot format tools.

pub mod logging;
