//! Grid state of the warehouse episode.
use serde::{Deserialize, Serialize};

/// A grid cell as `(row, column)`, row 0 at the top. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pos {
    /// Row index, in `[0, grid_size - 1]`.
    pub row: u32,
    /// Column index, in `[0, grid_size - 1]`.
    pub col: u32,
}

impl Pos {
    /// Constructs a [`Pos`].
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell.
    pub fn manhattan(&self, other: &Pos) -> u32 {
        let dr = if self.row > other.row {
            self.row - other.row
        } else {
            other.row - self.row
        };
        let dc = if self.col > other.col {
            self.col - other.col
        } else {
            other.col - self.col
        };
        dr + dc
    }
}

/// The complete world snapshot of one episode.
///
/// Owned exclusively by the environment and replaced wholesale by the
/// transition function; external components only ever see read-only views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    /// Position of the agent.
    pub agent: Pos,

    /// Whether the agent is carrying the item.
    pub holding: bool,

    /// Where the item waits to be picked up. Fixed for the episode.
    pub pickup: Pos,

    /// Where the item must be delivered. Fixed for the episode and
    /// distinct from [`GridState::pickup`].
    pub dest: Pos,

    /// Number of steps taken since reset.
    pub step_count: u32,

    /// Set once the item has been dropped at the destination.
    pub delivered: bool,

    /// Set once a held item has been dropped away from the destination.
    /// A lost item cannot be re-acquired for the rest of the episode.
    pub item_lost: bool,
}

impl GridState {
    /// Constructs the state of a fresh episode.
    pub fn new(agent: Pos, pickup: Pos, dest: Pos) -> Self {
        Self {
            agent,
            holding: false,
            pickup,
            dest,
            step_count: 0,
            delivered: false,
            item_lost: false,
        }
    }

    /// The cell the agent is currently working toward: the pickup cell
    /// while not holding, the destination while holding.
    pub fn target(&self) -> Pos {
        if self.holding {
            self.dest
        } else {
            self.pickup
        }
    }
}
