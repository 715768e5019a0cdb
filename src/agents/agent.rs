use crate::game::GameState;

/// Universal interface for all players: given the current state, choose a
/// cell to occupy.
///
/// Every variant except the human is expected to only ever submit currently
/// free cells; the state machine rejects anything else.
pub trait Agent {
    /// Select a cell index given the current game state.
    fn select_cell(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
