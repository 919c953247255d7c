use log::{debug, info};

use super::encode::encode;
use super::stats::{compute_statistics, Statistics};
use crate::error::{Error, Result};
use crate::partitioning::codebook::{build_codebook, Codebook};
use crate::partitioning::partition::{build_partition_history, PartitionHistory};
use crate::partitioning::tree::{materialize_tree, TreeNode};
use crate::tools::freq_count::{freqs, sort_by_freq, Frequencies};

/// Everything one run of the coder produces.
#[derive(Debug, Clone)]
pub struct Coding {
    pub freqs: Frequencies,
    pub sorted: Vec<char>,
    /// Empty when the text has a single distinct character
    pub history: PartitionHistory,
    pub tree: Option<TreeNode>,
    pub codes: Codebook,
    pub encoded: String,
    pub stats: Statistics,
}

/// Run every stage on the text, in order.
/// A text made of one repeated character skips partitioning and gets the one-bit code "0".
pub fn compress(text: &str) -> Result<Coding> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let freqs = freqs(text);
    let sorted = sort_by_freq(&freqs);

    let (history, codes) = if sorted.len() == 1 {
        debug!("Single distinct character {:?}, using fixed code", sorted[0]);
        (PartitionHistory::new(), single_char_codebook(sorted[0]))
    } else {
        let history = build_partition_history(&sorted, &freqs);
        let codes = build_codebook(&history);
        (history, codes)
    };
    let tree = materialize_tree(&history);

    let encoded = encode(text, &codes)?;
    let stats = compute_statistics(text, &codes)?;
    info!(
        "Coded {} characters into {} bits ({:.2}% saved)",
        text.chars().count(),
        stats.compressed_size,
        stats.compression_ratio
    );

    Ok(Coding {
        freqs,
        sorted,
        history,
        tree,
        codes,
        encoded,
        stats,
    })
}

/// Codebook for an alphabet of one: the character gets "0".
pub fn single_char_codebook(c: char) -> Codebook {
    let mut codes = Codebook::default();
    codes.insert(c, "0".to_string());
    codes
}
