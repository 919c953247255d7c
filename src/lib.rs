//! Shannon-Fano entropy coding, built for watching the algorithm work.
//!
//! Given a text, the coder counts each character, sorts the characters by decreasing frequency,
//! recursively splits that list into two halves of nearly equal weight, and gives every character
//! the path of 0s and 1s leading to it. The text is then encoded with those codes and the
//! compression figures are reported.
//!
//! Every stage is a pure function, so they can be called one at a time (see `replay`) or all
//! together:
//!
//! ```
//! use shannon_fano::compression::compress::compress;
//!
//! let coding = compress("aabc").unwrap();
//! assert_eq!(coding.encoded, "001011");
//! assert_eq!(coding.stats.compressed_size, 6);
//! ```
//!
//! From the command line:
//!
//! `$> shannon-fano -e mississippi --decode`
//!
pub mod compression;
pub mod error;
pub mod partitioning;
pub mod replay;
pub mod tools;

pub use error::{Error, Result};
