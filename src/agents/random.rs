use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::GameState;

use super::agent::Agent;

/// An agent that selects uniformly at random from the free cells.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic construction for reproducible games.
    pub fn from_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_cell(&mut self, state: &GameState) -> usize {
        let free = state.legal_actions();
        assert!(!free.is_empty(), "No free cells available");
        let idx = self.rng.random_range(0..free.len());
        free[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
