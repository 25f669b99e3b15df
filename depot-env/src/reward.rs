//! Reward model of the pickup-and-delivery task.
use crate::act::Action;
use crate::config::RewardConfig;
use crate::state::GridState;

/// Computes the scalar reward of a transition, after the transition.
///
/// Pure function; all terms are summed with no clamping or scaling:
///
/// * delivery bonus on the transition into `delivered`,
/// * pickup bonus on the transition into `holding`,
/// * wrong-drop penalty when a held item is dropped off-destination,
/// * approach shaping when the Manhattan distance to the current target
///   strictly decreased (the target is the one pursued when the action was
///   taken, i.e. defined by the pre-step holding flag); moving away earns
///   nothing rather than a penalty, so exploration is not over-penalized,
/// * a constant per-step penalty.
pub fn reward(prev: &GridState, action: Action, next: &GridState, cfg: &RewardConfig) -> f32 {
    let mut r = cfg.step_penalty;

    if next.delivered && !prev.delivered {
        r += cfg.delivery_bonus;
    }

    if next.holding && !prev.holding {
        r += cfg.pickup_bonus;
    }

    if action == Action::Drop && prev.holding && next.agent != next.dest {
        r += cfg.wrong_drop_penalty;
    }

    let target = prev.target();
    if next.agent.manhattan(&target) < prev.agent.manhattan(&target) {
        r += cfg.approach_bonus;
    }

    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Pos;
    use crate::transition::transition;

    const GRID: u32 = 5;
    const EPS: f32 = 1e-5;

    fn cfg() -> RewardConfig {
        RewardConfig::default()
    }

    fn state_at(row: u32, col: u32) -> GridState {
        GridState::new(Pos::new(row, col), Pos::new(0, 0), Pos::new(4, 4))
    }

    fn step(state: &GridState, action: Action) -> (GridState, f32) {
        let next = transition(state, action, GRID);
        let r = reward(state, action, &next, &cfg());
        (next, r)
    }

    #[test]
    fn test_pickup_bonus() {
        let (next, r) = step(&state_at(0, 0), Action::Pickup);
        assert!(next.holding);
        // Bonus plus step penalty; the agent did not move, so no shaping.
        assert!((r - (25.0 - 0.01)).abs() < EPS);
    }

    #[test]
    fn test_delivery_bonus() {
        let mut state = state_at(4, 4);
        state.holding = true;
        let (next, r) = step(&state, Action::Drop);
        assert!(next.delivered);
        assert!((r - (200.0 - 0.01)).abs() < EPS);
    }

    #[test]
    fn test_wrong_drop_penalty() {
        let mut state = state_at(2, 2);
        state.holding = true;
        let (next, r) = step(&state, Action::Drop);
        assert!(!next.delivered);
        assert!((r - (-5.0 - 0.01)).abs() < EPS);
    }

    #[test]
    fn test_approach_shaping_toward_pickup() {
        let (_, r) = step(&state_at(2, 0), Action::Up);
        assert!((r - (0.5 - 0.01)).abs() < EPS);
    }

    #[test]
    fn test_shaping_is_asymmetric() {
        // Moving away from the target costs only the step penalty.
        let (_, r) = step(&state_at(2, 0), Action::Down);
        assert!((r - (-0.01)).abs() < EPS);
    }

    #[test]
    fn test_target_switches_with_holding() {
        // Holding: moving toward the destination is shaped, even though it
        // moves away from the pickup cell.
        let mut state = state_at(2, 2);
        state.holding = true;
        let (_, r) = step(&state, Action::Down);
        assert!((r - (0.5 - 0.01)).abs() < EPS);
    }

    #[test]
    fn test_wall_bump_costs_step_penalty_only() {
        let mut state = state_at(0, 0);
        state.holding = true;
        let (_, r) = step(&state, Action::Up);
        assert!((r - (-0.01)).abs() < EPS);
    }
}
