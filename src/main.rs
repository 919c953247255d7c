//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::io;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use shannon_fano::compression::decode::decode;
use shannon_fano::partitioning::tree::render_tree;
use shannon_fano::replay::visualizer::{Step, Visualizer, EXAMPLES};
use shannon_fano::replay;
use shannon_fano::tools::cli::{sfopts_init, SfOpts};
use shannon_fano::tools::report::{code_table, freq_table, partition_line, stats_summary};
use shannon_fano::Error;

fn main() -> Result<(), Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger already initialized");
    }

    let opts = sfopts_init();

    if opts.list_examples {
        for (name, text) in EXAMPLES {
            println!("{:<14} {:?}", name, text);
        }
        return Ok(());
    }

    let text = opts.read_input()?;
    let mut vis = Visualizer::new(&text);
    if !vis.start() {
        return Err(Error::EmptyInput);
    }

    replay::run(&mut vis, opts.pacing, io::stdin().lock(), |v| show_step(v, &opts))?;

    if let Some(msg) = vis.error() {
        error!("{}", msg);
        return Err(Error::EmptyInput);
    }

    if opts.decode {
        let decoded = decode(&vis.encoded, &vis.codes)?;
        if decoded == text {
            println!("Decoded bits match the input.");
        } else {
            error!("Decoded text differs from the input!");
        }
    }

    info!("Done.\n");
    Ok(())
}

/// Print whatever the step just produced.
fn show_step(vis: &Visualizer, opts: &SfOpts) {
    match vis.step() {
        Step::Sorting => {
            println!("== Frequency analysis: {} distinct characters", vis.freqs.len());
        }
        Step::Partitioning(i) => {
            if i == 0 {
                println!("== Sorted by frequency");
                print!("{}", freq_table(&vis.sorted, &vis.freqs));
                println!("== Partitioning");
            }
            if let Some(state) = vis.history.get(i) {
                println!("{}", partition_line(i, state));
            }
        }
        Step::Encoding => {
            println!("== Codebook");
            print!("{}", code_table(&vis.codes, &vis.freqs));
        }
        Step::Complete => {
            if vis.history.is_empty() {
                println!("== Single character alphabet, fixed code");
                print!("{}", code_table(&vis.codes, &vis.freqs));
            }
            if opts.show_tree {
                if let Some(tree) = &vis.tree {
                    println!("== Partition tree");
                    print!("{}", render_tree(tree));
                }
            }
            println!("== Encoded");
            println!("{}", vis.encoded);
            println!("== Statistics");
            print!("{}", stats_summary(&vis.stats));
        }
        Step::Idle | Step::FrequencyAnalysis | Step::CodeAssignment => {}
    }
}
