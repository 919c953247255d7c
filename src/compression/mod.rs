//! The compression module turns a text into its Shannon-Fano bitstring and back.
//!
//! Compression runs these stages, each a pure function of the previous stage's output:
//! - Frequency count: how often each character occurs.
//! - Sort: characters by decreasing frequency.
//! - Partition: recursive balanced-weight splitting (see the partitioning module).
//! - Code assignment: each leaf's path becomes its character's code.
//! - Encoding: the text mapped through the codebook.
//! - Statistics: sizes, ratio and average code length.
//!
//! The output is a string of '0' and '1' characters. No bit packing is done.
//!

pub mod compress;
pub mod decode;
pub mod encode;
pub mod stats;
