//! Drives two agents through one game or a series, reusing a single
//! [`GameState`] instance with a reset between games.

use log::{debug, warn};

use crate::agents::Agent;
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Player};

/// Win/loss/draw tally over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesResult {
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

impl SeriesResult {
    pub fn games(&self) -> u64 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(Player::X) => self.x_wins += 1,
            GameOutcome::Winner(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Play one game from the current state until it ends.
///
/// When the state machine rejects a submission as out of range or occupied,
/// the same agent is asked again; this is how human retries surface.
/// Automated agents only ever submit free cells, so a rejection loop cannot
/// occur for them. A wrong-turn or game-over rejection means the runner
/// itself is sequencing moves incorrectly, which is a bug.
pub fn play_game<'a>(
    agent_x: &'a mut dyn Agent,
    agent_o: &'a mut dyn Agent,
    state: &mut GameState,
) -> GameOutcome {
    while state.is_ongoing() {
        let player = state.current_player();
        let agent = match player {
            Player::X => &mut *agent_x,
            Player::O => &mut *agent_o,
        };

        loop {
            let cell = agent.select_cell(state);
            match state.occupy(cell, player) {
                Ok(()) => {
                    debug!("{} ({}) occupies cell {}", agent.name(), player, cell);
                    break;
                }
                Err(err @ (MoveError::OutOfRange(_) | MoveError::CellOccupied(_))) => {
                    warn!("{} ({}) submitted a rejected move: {}", agent.name(), player, err);
                }
                Err(err) => {
                    panic!("game runner sequencing bug: {err}");
                }
            }
        }
    }

    state
        .outcome()
        .expect("finished game must have an outcome")
}

/// Play a series of games with a reset between them, tallying outcomes.
pub fn play_series(
    agent_x: &mut dyn Agent,
    agent_o: &mut dyn Agent,
    games: usize,
) -> SeriesResult {
    let mut state = GameState::new();
    let mut result = SeriesResult::default();

    for game in 0..games {
        state.reset();
        let outcome = play_game(agent_x, agent_o, &mut state);
        debug!("game {}: {:?}", game + 1, outcome);
        result.record(outcome);
    }

    result
}
