use std::fmt::{Display, Formatter};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};

use crate::error::Result;
use crate::replay::visualizer::example;
use crate::replay::Pacing;

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Shannon-Fano coding, one stage at a time",
    long_about = "
    Counts the characters of a text, splits them recursively into halves of nearly equal weight,
    and assigns each character the path of 0s and 1s that leads to it. Every stage is shown as it
    happens, followed by the codebook, the encoded bits and the compression figures."
)]
pub struct Args {
    /// Text to encode (read from stdin when no other input is given)
    #[clap()]
    text: Option<String>,

    /// Use a built-in example text
    #[clap(short = 'e', long = "example")]
    example: Option<String>,

    /// Read the text from a file
    #[clap(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// List the built-in examples and exit
    #[clap(long = "list-examples")]
    list_examples: bool,

    /// Wait for Enter before each step
    #[clap(short = 's', long = "step")]
    step: bool,

    /// Milliseconds to wait between steps when running automatically
    #[clap(short = 'd', long = "delay", default_value_t = 0)]
    delay: u64,

    /// Don't draw the partition tree
    #[clap(long = "no-tree")]
    no_tree: bool,

    /// Decode the bitstring again and check it matches the input
    #[clap(long = "decode")]
    decode: bool,

    /// Sets verbosity. 0 is silent, 5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Where the text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Text(String),
    Example(String),
    File(PathBuf),
    Stdin,
}
impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Text(_) => write!(f, "command line"),
            Source::Example(name) => write!(f, "example '{}'", name),
            Source::File(path) => write!(f, "file {}", path.display()),
            Source::Stdin => write!(f, "stdin"),
        }
    }
}

#[derive(Debug)]
pub struct SfOpts {
    /// Where to read the input text
    pub source: Source,
    /// Manual or timed stepping
    pub pacing: Pacing,
    /// Print the partition tree
    pub show_tree: bool,
    /// Verify the encoding by decoding it
    pub decode: bool,
    /// Only list the examples
    pub list_examples: bool,
}

impl SfOpts {
    pub fn new() -> Self {
        Self {
            source: Source::Stdin,
            pacing: Pacing::Auto(Duration::ZERO),
            show_tree: true,
            decode: false,
            list_examples: false,
        }
    }

    /// Fetch the input text from the configured source.
    pub fn read_input(&self) -> Result<String> {
        let text = match &self.source {
            Source::Text(t) => t.clone(),
            Source::Example(name) => example(name)?.to_string(),
            Source::File(path) => fs::read_to_string(path)?,
            Source::Stdin => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                // Drop the line ending a shell pipe adds
                buf.truncate(buf.trim_end_matches(&['\n', '\r'][..]).len());
                buf
            }
        };
        Ok(text)
    }
}

impl Default for SfOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Put command line information from CLAP into our internal structure.
pub fn sfopts_init() -> SfOpts {
    opts_from_args(Args::parse())
}

fn opts_from_args(args: Args) -> SfOpts {
    let mut opts = SfOpts::new();

    // File beats example beats text
    opts.source = match (args.file, args.example, args.text) {
        (Some(path), _, _) => Source::File(path),
        (None, Some(name), _) => Source::Example(name),
        (None, None, Some(text)) => Source::Text(text),
        (None, None, None) => Source::Stdin,
    };

    opts.pacing = if args.step {
        Pacing::Manual
    } else {
        Pacing::Auto(Duration::from_millis(args.delay))
    };
    opts.show_tree = !args.no_tree;
    opts.decode = args.decode;
    opts.list_examples = args.list_examples;

    // Set the log level
    match args.v {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };

    info!("---- Shannon-Fano Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Reading input from {}", opts.source);
    match opts.pacing {
        Pacing::Manual => info!("Stepping manually, press Enter to advance"),
        Pacing::Auto(d) if !d.is_zero() => info!("Stepping every {} ms", d.as_millis()),
        Pacing::Auto(_) => {}
    }
    if opts.source == Source::Stdin && opts.pacing == Pacing::Manual {
        warn!("Input and step prompts both come from stdin");
    }
    info!("---- Shannon-Fano Initialization End ----\n");
    opts
}
