use log::trace;

use crate::tools::freq_count::Frequencies;

/// Where a partition was cut and the weight that landed on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    /// Last position (inclusive) of the left side
    pub index: usize,
    pub left_sum: u32,
    pub right_sum: u32,
}

/// One contiguous run of the frequency-sorted characters at some depth of the recursion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionState {
    /// Characters in this partition, in sorted order
    pub chars: Vec<char>,
    /// Frequency of each character in `chars`
    pub freqs: Vec<u32>,
    pub total_freq: u32,
    /// Root is depth 0
    pub depth: usize,
    /// Bits accumulated from the root. For a leaf this is the final code.
    pub prefix: String,
    /// History index of the parent, None for the root
    pub parent: Option<usize>,
    /// History indices of the (left, right) children
    pub children: (Option<usize>, Option<usize>),
    /// Only set when the partition holds more than one character
    pub split: Option<Split>,
}

impl PartitionState {
    fn new(chars: &[char], freqs: &Frequencies, depth: usize, prefix: String, parent: Option<usize>) -> Self {
        let weights = chars
            .iter()
            .map(|c| freqs.get(c).copied().unwrap_or(0))
            .collect::<Vec<u32>>();
        PartitionState {
            chars: chars.to_vec(),
            total_freq: weights.iter().sum(),
            freqs: weights,
            depth,
            prefix,
            parent,
            children: (None, None),
            split: None,
        }
    }

    /// A leaf holds exactly one character.
    pub fn is_leaf(&self) -> bool {
        self.chars.len() == 1
    }
}

/// Every partition produced during one run, in pre-order. Parent/child links are indices into this Vec.
pub type PartitionHistory = Vec<PartitionState>;

/// Recursively split the sorted characters into two halves of nearly equal weight, recording
/// every partition along the way. The root is always at index 0, and each node is followed by
/// its whole left subtree and then its whole right subtree.
pub fn build_partition_history(sorted: &[char], freqs: &Frequencies) -> PartitionHistory {
    // A binary tree with n leaves has 2n - 1 nodes
    let mut history = Vec::with_capacity((2 * sorted.len()).saturating_sub(1));
    if !sorted.is_empty() {
        partition(&mut history, sorted, freqs, 0, String::new(), None);
    }
    history
}

/// Push the partition for `chars`, then its subtrees. Returns the index where it landed.
fn partition(
    history: &mut PartitionHistory,
    chars: &[char],
    freqs: &Frequencies,
    depth: usize,
    prefix: String,
    parent: Option<usize>,
) -> usize {
    let idx = history.len();
    history.push(PartitionState::new(chars, freqs, depth, prefix, parent));

    if chars.len() < 2 {
        return idx;
    }

    let split = best_split(&history[idx].freqs, history[idx].total_freq);
    trace!(
        "Partition {} at depth {}: {:?} split after {} ({} | {})",
        idx,
        depth,
        chars,
        split.index,
        split.left_sum,
        split.right_sum
    );
    history[idx].split = Some(split);

    let (left, right) = chars.split_at(split.index + 1);
    debug_assert!(!left.is_empty() && !right.is_empty());

    let left_prefix = format!("{}0", history[idx].prefix);
    let right_prefix = format!("{}1", history[idx].prefix);
    let left_idx = partition(history, left, freqs, depth + 1, left_prefix, Some(idx));
    let right_idx = partition(history, right, freqs, depth + 1, right_prefix, Some(idx));

    // Children only know their position once the left subtree is fully pushed
    history[idx].children = (Some(left_idx), Some(right_idx));
    idx
}

/// Find the cut that minimizes the weight difference between the two sides.
/// The left side always keeps at least one element and so does the right. On ties the first cut wins.
fn best_split(weights: &[u32], total: u32) -> Split {
    let mut best = Split {
        index: 0,
        left_sum: 0,
        right_sum: total,
    };
    let mut min_diff: Option<u32> = None;
    let mut left_sum = 0;

    for (i, &w) in weights.iter().enumerate().take(weights.len().saturating_sub(1)) {
        left_sum += w;
        let right_sum = total - left_sum;
        let diff = left_sum.abs_diff(right_sum);
        if min_diff.map_or(true, |min| diff < min) {
            min_diff = Some(diff);
            best = Split {
                index: i,
                left_sum,
                right_sum,
            };
        }
    }
    best
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::freq_count::{freqs, sort_by_freq};

    fn history_for(text: &str) -> PartitionHistory {
        let f = freqs(text);
        build_partition_history(&sort_by_freq(&f), &f)
    }

    #[test]
    fn aabc_history_test() {
        let h = history_for("aabc");
        assert_eq!(h.len(), 5);

        assert_eq!(h[0].chars, vec!['a', 'b', 'c']);
        assert_eq!(h[0].freqs, vec![2, 1, 1]);
        assert_eq!(h[0].total_freq, 4);
        assert_eq!(h[0].prefix, "");
        assert_eq!(h[0].parent, None);
        assert_eq!(
            h[0].split,
            Some(Split {
                index: 0,
                left_sum: 2,
                right_sum: 2
            })
        );
        assert_eq!(h[0].children, (Some(1), Some(2)));

        assert_eq!(h[1].chars, vec!['a']);
        assert_eq!(h[1].prefix, "0");
        assert_eq!(h[1].split, None);
        assert_eq!(h[1].children, (None, None));

        assert_eq!(h[2].chars, vec!['b', 'c']);
        assert_eq!(h[2].prefix, "1");
        assert_eq!(h[2].depth, 1);
        assert_eq!(h[2].children, (Some(3), Some(4)));

        assert_eq!((h[3].chars[0], h[3].prefix.as_str()), ('b', "10"));
        assert_eq!((h[4].chars[0], h[4].prefix.as_str()), ('c', "11"));
        assert_eq!(h[3].parent, Some(2));
        assert_eq!(h[4].depth, 2);
    }

    #[test]
    fn first_minimum_wins_test() {
        // l:3 o:2 then six singles. Cuts after 'o' and after ' ' both differ by 1.
        let h = history_for("hello world");
        assert_eq!(h[0].chars[..3], ['l', 'o', ' ']);
        let split = h[0].split.unwrap();
        assert_eq!(split.index, 1);
        assert_eq!((split.left_sum, split.right_sum), (5, 6));
    }

    #[test]
    fn pre_order_test() {
        let h = history_for("the quick brown fox jumps over the lazy dog");
        for (i, state) in h.iter().enumerate() {
            if let Some(p) = state.parent {
                assert!(p < i);
                assert_eq!(state.depth, h[p].depth + 1);
                let (l, r) = h[p].children;
                assert!(l == Some(i) || r == Some(i));
            }
            if let (Some(l), Some(r)) = state.children {
                // Left child immediately follows its parent
                assert_eq!(l, i + 1);
                assert!(r > l);
                assert_eq!(h[l].prefix, format!("{}0", state.prefix));
                assert_eq!(h[r].prefix, format!("{}1", state.prefix));
                let mut joined = h[l].chars.clone();
                joined.extend(&h[r].chars);
                assert_eq!(joined, state.chars);
            }
            assert_eq!(state.is_leaf(), state.split.is_none());
        }
        let leaves = h.iter().filter(|s| s.is_leaf()).count();
        assert_eq!(h.len(), 2 * leaves - 1);
    }

    #[test]
    fn split_sums_test() {
        let h = history_for("mississippi");
        for state in h.iter().filter(|s| !s.is_leaf()) {
            let split = state.split.unwrap();
            assert_eq!(split.left_sum + split.right_sum, state.total_freq);
            assert_eq!(split.left_sum, state.freqs[..=split.index].iter().sum::<u32>());
        }
    }

    #[test]
    fn single_and_empty_test() {
        let h = history_for("aaaa");
        assert_eq!(h.len(), 1);
        assert!(h[0].is_leaf());
        assert_eq!(h[0].prefix, "");
        assert!(history_for("").is_empty());
    }
}
