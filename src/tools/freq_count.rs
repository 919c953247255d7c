use log::debug;
use rustc_hash::FxHashMap;

/// Character -> occurrence count. Every key has a count of at least one.
pub type Frequencies = FxHashMap<char, u32>;

/// Returns a frequency count of the input text. Every character is kept verbatim,
/// whitespace included. Empty text gives an empty table.
pub fn freqs(text: &str) -> Frequencies {
    let mut freqs = Frequencies::default();
    text.chars().for_each(|c| *freqs.entry(c).or_insert(0) += 1);
    debug!(
        "Counted {} distinct characters in {} characters of input",
        freqs.len(),
        text.chars().count()
    );
    freqs
}

/// Returns the characters of the table ordered by decreasing frequency.
/// Equal frequencies are ordered by ascending character value so runs are reproducible.
pub fn sort_by_freq(freqs: &Frequencies) -> Vec<char> {
    let mut sorted = freqs.keys().copied().collect::<Vec<char>>();
    sorted.sort_unstable_by(|a, b| freqs[b].cmp(&freqs[a]).then(a.cmp(b)));
    sorted
}
