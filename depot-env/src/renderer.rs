//! ANSI terminal rendering of episodes.
use crate::act::Action;
use crate::config::RenderConfig;
use crate::state::GridState;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Read-only view of an episode handed to the renderer after each step or
/// reset.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The grid state after the step.
    pub state: GridState,
    /// The action that produced the state; `None` right after a reset.
    pub last_act: Option<Action>,
    /// The reward of the last step.
    pub last_reward: f32,
}

/// Draws episodes as an ANSI grid on the terminal.
///
/// A pure observer of [`Snapshot`]s: it never touches the environment
/// state. Each frame is followed by a fixed delay so episodes play at
/// human viewing speed independently of the stepping rate.
pub struct AnsiRenderer {
    grid_size: u32,
    frame_delay: Duration,
}

impl AnsiRenderer {
    /// Constructs a renderer for a `grid_size` x `grid_size` grid.
    pub fn new(grid_size: u32, config: &RenderConfig) -> Self {
        Self {
            grid_size,
            frame_delay: Duration::from_millis(config.frame_delay_ms),
        }
    }

    fn cell_char(&self, snap: &Snapshot, row: u32, col: u32) -> char {
        let state = &snap.state;
        let here = |p: &crate::state::Pos| p.row == row && p.col == col;
        if here(&state.agent) {
            if state.holding {
                '@'
            } else {
                'A'
            }
        } else if here(&state.pickup) && !state.holding && !state.item_lost && !state.delivered {
            'P'
        } else if here(&state.dest) {
            'D'
        } else {
            '.'
        }
    }

    /// Renders one frame and sleeps for the configured delay.
    pub fn render(&mut self, snap: &Snapshot) {
        let mut frame = String::from("\x1b[2J\x1b[H");
        for row in 0..self.grid_size {
            for col in 0..self.grid_size {
                frame.push(self.cell_char(snap, row, col));
                frame.push(' ');
            }
            frame.push('\n');
        }
        frame.push_str(&format!("step:   {}\n", snap.state.step_count));
        if let Some(act) = snap.last_act {
            frame.push_str(&format!("action: {}\n", act.name()));
        }
        frame.push_str(&format!("reward: {:+.2}\n", snap.last_reward));
        frame.push_str(&format!(
            "dist:   {}\n",
            snap.state.agent.manhattan(&snap.state.target())
        ));

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = handle.write_all(frame.as_bytes());
        let _ = handle.flush();

        thread::sleep(self.frame_delay);
    }
}
