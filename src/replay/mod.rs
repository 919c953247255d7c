//! The replay module steps through a Shannon-Fano run one stage at a time, so each intermediate
//! result (frequencies, partitions, codes) can be shown before moving on.
//!
//! The visualizer is a small state machine over the pure coder functions. The driver here
//! advances it either when the user asks (manual) or after a fixed delay (auto). Steps are taken
//! one after another on the calling thread, so there is never more than one step pending.
//!

pub mod visualizer;

use std::io::BufRead;
use std::thread;
use std::time::Duration;

use log::{debug, info};

use crate::error::Result;
use visualizer::{Step, Visualizer};

/// How the driver moves from one step to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Wait this long before each step
    Auto(Duration),
    /// Wait for a line on the prompt reader before each step
    Manual,
}

/// Drive a started visualizer until it completes or fails. `on_step` sees the visualizer after
/// every step. Returns the number of steps taken. Once the prompt reader hits EOF, manual pacing
/// carries on without waiting.
pub fn run<R, F>(vis: &mut Visualizer, pacing: Pacing, mut prompt: R, mut on_step: F) -> Result<usize>
where
    R: BufRead,
    F: FnMut(&Visualizer),
{
    let mut steps = 0;
    let mut prompt_open = true;
    while vis.is_running() && !matches!(vis.step(), Step::Idle | Step::Complete) {
        match pacing {
            Pacing::Auto(delay) => {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
            Pacing::Manual if prompt_open => {
                let mut line = String::new();
                if prompt.read_line(&mut line)? == 0 {
                    debug!("Prompt closed, continuing without waiting");
                    prompt_open = false;
                }
            }
            Pacing::Manual => {}
        }
        vis.step_forward();
        steps += 1;
        on_step(vis);
    }
    info!("Replay finished at {} after {} steps", vis.step(), steps);
    Ok(steps)
}
