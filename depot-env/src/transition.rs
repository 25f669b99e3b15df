//! Deterministic world dynamics.
use crate::act::Action;
use crate::state::GridState;

/// Applies `action` to `state` on a `grid_size` x `grid_size` grid and
/// returns the successor state.
///
/// Pure function; the input state is not mutated. Movement off the grid is
/// clamped back to the current cell (a no-op on position that still consumes
/// the step). Illegal PICKUP/DROP attempts leave everything but the step
/// counter unchanged; legality is judged here, penalties are the reward
/// function's business.
pub fn transition(state: &GridState, action: Action, grid_size: u32) -> GridState {
    let mut next = state.clone();
    next.step_count = state.step_count + 1;
    let max_index = grid_size.saturating_sub(1);

    match action {
        Action::Up => next.agent.row = state.agent.row.saturating_sub(1),
        Action::Down => next.agent.row = (state.agent.row + 1).min(max_index),
        Action::Left => next.agent.col = state.agent.col.saturating_sub(1),
        Action::Right => next.agent.col = (state.agent.col + 1).min(max_index),
        Action::Pickup => {
            if state.agent == state.pickup && !state.holding && !state.item_lost {
                next.holding = true;
            }
        }
        Action::Drop => {
            if state.holding {
                next.holding = false;
                if state.agent == state.dest {
                    next.delivered = true;
                } else {
                    // Dropped at the wrong cell: the item is lost for the
                    // rest of the episode.
                    next.item_lost = true;
                }
            }
        }
    }

    next
}
