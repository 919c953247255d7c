//! The partitioning module holds the Shannon-Fano code construction.
//!
//! Characters sorted by decreasing frequency are cut into two runs whose total weights are as
//! close as possible. Each run is cut again until only single characters remain. Every left
//! branch appends a 0 to the code, every right branch a 1.
//!
//! All partitions are kept in one flat Vec (the history), in pre-order. Parents and children refer
//! to each other by index into that Vec. The codebook and the display tree are both read from it.
//!

pub mod codebook;
pub mod partition;
pub mod tree;
