use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{GameState, CELLS};

use super::agent::Agent;
use super::state_encoding::{encode_tensor, StateTensor};

/// Seam for an externally trained model: maps the perspective tensor of the
/// current board to one score per cell. Architecture and training live
/// outside this crate.
pub trait PolicyModel {
    fn score(&self, input: &StateTensor) -> [f32; CELLS];
}

/// An agent that asks a [`PolicyModel`] to score every cell, masks out the
/// occupied ones, and takes the arg-max. The same exploration probability as
/// the tabular agent overrides the model with a uniform random free cell.
pub struct ModelAgent<M> {
    model: M,
    epsilon: f32,
    rng: StdRng,
}

impl<M: PolicyModel> ModelAgent<M> {
    pub fn new(model: M, epsilon: f32) -> Self {
        ModelAgent {
            model,
            epsilon,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic construction for reproducible games.
    pub fn from_seed(model: M, epsilon: f32, seed: u64) -> Self {
        ModelAgent {
            model,
            epsilon,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    pub fn set_epsilon(&mut self, epsilon: f32) {
        self.epsilon = epsilon;
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

impl<M: PolicyModel> Agent for ModelAgent<M> {
    fn select_cell(&mut self, state: &GameState) -> usize {
        let free = state.legal_actions();
        assert!(!free.is_empty(), "No free cells available");

        if self.rng.random_range(0.0..1.0) < self.epsilon {
            return free[self.rng.random_range(0..free.len())];
        }

        let tensor = encode_tensor(state.board(), state.current_player())
            .expect("board always encodes to 9 cells");
        let mut scores = self.model.score(&tensor);

        // Mask occupied cells so the arg-max can only land on a free one
        for cell in 0..CELLS {
            if !state.board().is_free(cell) {
                scores[cell] = f32::NEG_INFINITY;
            }
        }

        let mut best_cell = free[0];
        let mut best_score = f32::NEG_INFINITY;
        for (cell, &score) in scores.iter().enumerate() {
            if score > best_score {
                best_score = score;
                best_cell = cell;
            }
        }
        best_cell
    }

    fn name(&self) -> &str {
        "Model"
    }
}
