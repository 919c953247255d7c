use std::fmt::Write;

use crate::compression::stats::Statistics;
use crate::partitioning::codebook::{sorted_codes, Codebook};
use crate::partitioning::partition::PartitionState;
use crate::partitioning::tree::show_char;
use crate::tools::freq_count::Frequencies;

/// Frequency table in sorted order: character, count and share of the text.
pub fn freq_table(sorted: &[char], freqs: &Frequencies) -> String {
    let total = freqs.values().sum::<u32>().max(1) as f64;
    let mut out = String::new();
    let _ = writeln!(out, "{:>6}  {:>7}  {:>7}", "char", "count", "share");
    for c in sorted {
        let n = freqs.get(c).copied().unwrap_or(0);
        let _ = writeln!(
            out,
            "{:>6}  {:>7}  {:>6.2}%",
            show_char(*c),
            n,
            n as f64 * 100.0 / total
        );
    }
    out
}

/// Codebook table: character, frequency, code and code length, shortest codes first.
pub fn code_table(codes: &Codebook, freqs: &Frequencies) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>6}  {:>7}  {:<16}  {:>6}", "char", "count", "code", "bits");
    for (c, code) in sorted_codes(codes) {
        let _ = writeln!(
            out,
            "{:>6}  {:>7}  {:<16}  {:>6}",
            show_char(c),
            freqs.get(&c).copied().unwrap_or(0),
            code,
            code.len()
        );
    }
    out
}

/// One line describing a partition as it is visited.
pub fn partition_line(idx: usize, state: &PartitionState) -> String {
    let chars = state.chars.iter().map(|&c| show_char(c)).collect::<Vec<_>>().join(" ");
    let prefix = if state.prefix.is_empty() { "-" } else { state.prefix.as_str() };
    match state.split {
        Some(split) => format!(
            "#{:<3} depth {} prefix {:<8} {{{}}} weight {} -> split after {} ({} | {})",
            idx,
            state.depth,
            prefix,
            chars,
            state.total_freq,
            show_char(state.chars[split.index]),
            split.left_sum,
            split.right_sum
        ),
        None => format!(
            "#{:<3} depth {} prefix {:<8} {{{}}} weight {} -> leaf",
            idx, state.depth, prefix, chars, state.total_freq
        ),
    }
}

/// Compression figures as printed at the end of a run.
pub fn stats_summary(stats: &Statistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Original size:       {} bits", stats.original_size);
    let _ = writeln!(out, "Compressed size:     {} bits", stats.compressed_size);
    let _ = writeln!(out, "Compression ratio:   {:.2}%", stats.compression_ratio);
    let _ = writeln!(out, "Average code length: {:.3} bits/char", stats.average_code_length);
    out
}
