//! File handling, configuration and the command-line shell around the engine

/// Command-line parsing and batch file processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Progress bars for batch runs
pub mod progress;
