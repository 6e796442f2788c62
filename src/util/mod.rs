//! Utility modules: platform detection and external command execution

pub mod detect;
pub mod exec;
