use std::fmt::{Display, Formatter};

use log::{debug, info, warn};

use crate::compression::compress::single_char_codebook;
use crate::compression::encode::encode;
use crate::compression::stats::{compute_statistics, Statistics};
use crate::error::{Error, Result};
use crate::partitioning::codebook::{build_codebook, Codebook};
use crate::partitioning::partition::{build_partition_history, PartitionHistory};
use crate::partitioning::tree::{materialize_tree, TreeNode};
use crate::tools::freq_count::{freqs, sort_by_freq, Frequencies};

pub const EMPTY_INPUT_MSG: &str = "Please enter some text to compress.";
pub const NO_CHARS_MSG: &str = "Input is empty or contains no processable characters.";

/// Preset inputs, by name.
pub const EXAMPLES: [(&str, &str); 5] = [
    ("shannon-fano", "shannon-fano"),
    ("aabc", "aabc"),
    ("hello-world", "hello world"),
    ("mississippi", "mississippi"),
    ("compression", "compression"),
];

/// Look up a preset input by name.
pub fn example(name: &str) -> Result<&'static str> {
    EXAMPLES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, text)| text)
        .ok_or_else(|| Error::UnknownExample(name.to_string()))
}

/// Stage of a stepwise run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Idle,
    FrequencyAnalysis,
    Sorting,
    /// Showing the partition at this history index
    Partitioning(usize),
    CodeAssignment,
    Encoding,
    Complete,
}
impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Idle => write!(f, "idle"),
            Step::FrequencyAnalysis => write!(f, "frequency analysis"),
            Step::Sorting => write!(f, "sorting"),
            Step::Partitioning(i) => write!(f, "partitioning ({})", i),
            Step::CodeAssignment => write!(f, "code assignment"),
            Step::Encoding => write!(f, "encoding"),
            Step::Complete => write!(f, "complete"),
        }
    }
}

/// Replays the coder one stage at a time, keeping every intermediate result for display.
#[derive(Debug, Default)]
pub struct Visualizer {
    input: String,
    step: Step,
    running: bool,
    error: Option<String>,
    pub freqs: Frequencies,
    pub sorted: Vec<char>,
    pub history: PartitionHistory,
    pub tree: Option<TreeNode>,
    pub codes: Codebook,
    pub encoded: String,
    pub stats: Statistics,
}

impl Visualizer {
    pub fn new(input: &str) -> Self {
        Visualizer {
            input: input.to_string(),
            ..Default::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Validation message from the last start or step, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the input. All derived data is discarded.
    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
        self.reset();
    }

    /// Back to Idle with nothing computed. The input is kept.
    pub fn reset(&mut self) {
        let input = std::mem::take(&mut self.input);
        *self = Visualizer {
            input,
            ..Default::default()
        };
    }

    /// Begin a run. Blank input is refused with a message and the visualizer stays Idle.
    pub fn start(&mut self) -> bool {
        if self.input.trim().is_empty() {
            warn!("{}", EMPTY_INPUT_MSG);
            self.error = Some(EMPTY_INPUT_MSG.to_string());
            return false;
        }
        self.reset();
        self.step = Step::FrequencyAnalysis;
        self.running = true;
        info!("Starting run on {} characters", self.input.chars().count());
        true
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Advance one stage. Returns the stage now current.
    pub fn step_forward(&mut self) -> Step {
        let from = self.step;
        match self.step {
            Step::Idle => self.step = Step::FrequencyAnalysis,

            Step::FrequencyAnalysis => {
                self.freqs = freqs(&self.input);
                match self.freqs.len() {
                    0 => self.fail(NO_CHARS_MSG.to_string()),
                    1 => {
                        // Single character alphabet: no partitioning, fixed code
                        if let Some(&c) = self.freqs.keys().next() {
                            self.sorted = vec![c];
                            self.codes = single_char_codebook(c);
                            self.encoded = "0".repeat(self.input.chars().count());
                            self.finish_stats();
                        }
                    }
                    _ => self.step = Step::Sorting,
                }
            }

            Step::Sorting => {
                self.sorted = sort_by_freq(&self.freqs);
                self.history = build_partition_history(&self.sorted, &self.freqs);
                self.tree = materialize_tree(&self.history);
                self.step = Step::Partitioning(0);
            }

            Step::Partitioning(i) => {
                if i + 1 < self.history.len() {
                    self.step = Step::Partitioning(i + 1);
                } else {
                    self.step = Step::CodeAssignment;
                }
            }

            Step::CodeAssignment => {
                self.codes = build_codebook(&self.history);
                self.step = Step::Encoding;
            }

            Step::Encoding => match encode(&self.input, &self.codes) {
                Ok(bits) => {
                    self.encoded = bits;
                    self.finish_stats();
                }
                Err(e) => self.fail(e.to_string()),
            },

            Step::Complete => self.running = false,
        }
        debug!("Step {} -> {}", from, self.step);
        self.step
    }

    /// Partition currently highlighted, while partitioning
    pub fn current_partition(&self) -> Option<usize> {
        match self.step {
            Step::Partitioning(i) => Some(i),
            _ => None,
        }
    }

    fn finish_stats(&mut self) {
        match compute_statistics(&self.input, &self.codes) {
            Ok(stats) => {
                self.stats = stats;
                self.step = Step::Complete;
                self.running = false;
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn fail(&mut self, msg: String) {
        warn!("{}", msg);
        self.error = Some(msg);
        self.step = Step::Idle;
        self.running = false;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn run_to_end(v: &mut Visualizer) -> Vec<Step> {
        let mut seen = vec![v.step()];
        while v.is_running() && v.step() != Step::Complete && v.step() != Step::Idle {
            seen.push(v.step_forward());
        }
        seen
    }

    #[test]
    fn aabc_replay_test() {
        let mut v = Visualizer::new("aabc");
        assert!(v.start());
        let steps = run_to_end(&mut v);
        assert_eq!(
            steps,
            vec![
                Step::FrequencyAnalysis,
                Step::Sorting,
                Step::Partitioning(0),
                Step::Partitioning(1),
                Step::Partitioning(2),
                Step::Partitioning(3),
                Step::Partitioning(4),
                Step::CodeAssignment,
                Step::Encoding,
                Step::Complete,
            ]
        );
        assert_eq!(v.encoded, "001011");
        assert_eq!(v.stats.compressed_size, 6);
        assert!(!v.is_running());
        assert_eq!(v.error(), None);
    }

    #[test]
    fn single_char_replay_test() {
        let mut v = Visualizer::new("aaaa");
        v.start();
        let steps = run_to_end(&mut v);
        assert_eq!(steps, vec![Step::FrequencyAnalysis, Step::Complete]);
        assert_eq!(v.codes[&'a'], "0");
        assert_eq!(v.encoded, "0000");
        assert!((v.stats.compression_ratio - 87.5).abs() < 1e-9);
        assert!(v.history.is_empty());
    }

    #[test]
    fn blank_input_test() {
        let mut v = Visualizer::new("   ");
        assert!(!v.start());
        assert_eq!(v.step(), Step::Idle);
        assert_eq!(v.error(), Some(EMPTY_INPUT_MSG));
        assert!(!v.is_running());
    }

    #[test]
    fn empty_freqs_test() {
        // Stepping from Idle skips validation, so the empty table is caught at frequency analysis
        let mut v = Visualizer::new("");
        assert_eq!(v.step_forward(), Step::FrequencyAnalysis);
        assert_eq!(v.step_forward(), Step::Idle);
        assert_eq!(v.error(), Some(NO_CHARS_MSG));
    }

    #[test]
    fn reset_test() {
        let mut v = Visualizer::new("mississippi");
        v.start();
        run_to_end(&mut v);
        assert!(!v.codes.is_empty());
        v.set_input("abc");
        assert_eq!(v.input(), "abc");
        assert_eq!(v.step(), Step::Idle);
        assert!(v.codes.is_empty() && v.history.is_empty() && v.tree.is_none());
    }

    #[test]
    fn examples_test() {
        assert_eq!(example("hello-world").unwrap(), "hello world");
        assert!(matches!(example("nope"), Err(Error::UnknownExample(_))));
        for (_, text) in EXAMPLES {
            let mut v = Visualizer::new(text);
            v.start();
            run_to_end(&mut v);
            assert_eq!(v.step(), Step::Complete);
        }
    }
}
