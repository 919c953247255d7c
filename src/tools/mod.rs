//! The tools module provides the helpers around the Shannon-Fano coder.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Character frequency count and descending-frequency sort.
//! - report: Text tables and summaries for terminal output.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
