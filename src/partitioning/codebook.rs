use rustc_hash::FxHashMap;

use super::partition::PartitionHistory;

/// Character -> binary code string.
pub type Codebook = FxHashMap<char, String>;

/// Collect the prefix of every leaf partition as that character's code.
/// A lone root leaf has an empty prefix and yields no entry; callers handle the one-character alphabet.
pub fn build_codebook(history: &PartitionHistory) -> Codebook {
    history
        .iter()
        .filter(|state| state.is_leaf() && !state.prefix.is_empty())
        .map(|state| (state.chars[0], state.prefix.clone()))
        .collect()
}

/// Codebook entries ordered by code length, then by code.
pub fn sorted_codes(codes: &Codebook) -> Vec<(char, &str)> {
    let mut entries = codes
        .iter()
        .map(|(&c, code)| (c, code.as_str()))
        .collect::<Vec<(char, &str)>>();
    entries.sort_unstable_by(|a, b| a.1.len().cmp(&b.1.len()).then(a.1.cmp(b.1)));
    entries
}
