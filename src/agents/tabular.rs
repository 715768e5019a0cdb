use std::collections::HashMap;
use std::path::Path;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::TableError;
use crate::game::GameState;

use super::agent::Agent;
use super::state_encoding::perspective_string;

/// Action-value lookup table keyed by perspective string.
///
/// Each entry maps a state key to `(cell, value)` pairs over the cells that
/// were free in that state. The table is externally owned: it is handed to a
/// [`TabularAgent`] at construction and can be taken back with
/// [`into_table`](TabularAgent::into_table), so the same table can be shared
/// across games and across both seats.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QTable {
    entries: HashMap<String, Vec<(usize, f32)>>,
}

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Action values for a state key, initializing an unseen state with
    /// zero-valued entries over the currently free cells.
    pub fn actions(&mut self, key: &str, free_cells: &[usize]) -> &[(usize, f32)] {
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| free_cells.iter().map(|&cell| (cell, 0.0)).collect())
    }

    /// Overwrite the value of one action in an existing entry. Missing keys
    /// or cells are ignored.
    pub fn set_value(&mut self, key: &str, cell: usize, value: f32) {
        if let Some(actions) = self.entries.get_mut(key) {
            if let Some(entry) = actions.iter_mut().find(|(c, _)| *c == cell) {
                entry.1 = value;
            }
        }
    }

    /// Write the table to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), TableError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| TableError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load a table from a JSON file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path).map_err(|e| TableError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| TableError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// An agent driven by a [`QTable`]: greedy over stored action values, with an
/// exploration probability that overrides the lookup with a uniform random
/// free cell.
pub struct TabularAgent {
    table: QTable,
    epsilon: f32,
    rng: StdRng,
}

impl TabularAgent {
    pub fn new(table: QTable, epsilon: f32) -> Self {
        TabularAgent {
            table,
            epsilon,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic construction for reproducible games.
    pub fn from_seed(table: QTable, epsilon: f32, seed: u64) -> Self {
        TabularAgent {
            table,
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

    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut QTable {
        &mut self.table
    }

    /// Give the table back to its owner.
    pub fn into_table(self) -> QTable {
        self.table
    }
}

impl Agent for TabularAgent {
    fn select_cell(&mut self, state: &GameState) -> usize {
        let free = state.legal_actions();
        assert!(!free.is_empty(), "No free cells available");

        if self.rng.random_range(0.0..1.0) < self.epsilon {
            return free[self.rng.random_range(0..free.len())];
        }

        let key = perspective_string(state.board(), state.current_player());
        let actions = self.table.actions(&key, &free);
        let best = actions
            .iter()
            .map(|&(_, value)| value)
            .fold(f32::NEG_INFINITY, f32::max);
        let best_cells: Vec<usize> = actions
            .iter()
            .filter(|&&(_, value)| value == best)
            .map(|&(cell, _)| cell)
            .collect();

        best_cells[self.rng.random_range(0..best_cells.len())]
    }

    fn name(&self) -> &str {
        "Tabular"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, Player};

    #[test]
    fn test_unseen_state_initialized_with_zeros_over_free_cells() {
        let mut table = QTable::new();
        let actions = table.actions("xo-------", &[2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(actions.len(), 7);
        assert!(actions.iter().all(|&(_, value)| value == 0.0));
        assert_eq!(table.len(), 1);

        // a second lookup reuses the entry
        table.actions("xo-------", &[2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_set_value() {
        let mut table = QTable::new();
        table.actions("---------", &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        table.set_value("---------", 4, 0.75);
        let actions = table.actions("---------", &[]);
        assert!(actions.contains(&(4, 0.75)));
    }

    #[test]
    fn test_greedy_picks_highest_value() {
        let mut table = QTable::new();
        table.actions("---------", &(0..9).collect::<Vec<_>>());
        table.set_value("---------", 6, 1.0);

        let mut agent = TabularAgent::from_seed(table, 0.0, 1);
        let state = GameState::new();
        for _ in 0..20 {
            assert_eq!(agent.select_cell(&state), 6);
        }
    }

    #[test]
    fn test_tie_break_uniform_among_max() {
        let mut table = QTable::new();
        table.actions("---------", &(0..9).collect::<Vec<_>>());
        table.set_value("---------", 2, 0.5);
        table.set_value("---------", 7, 0.5);

        let mut agent = TabularAgent::from_seed(table, 0.0, 42);
        let state = GameState::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            let cell = agent.select_cell(&state);
            assert!(cell == 2 || cell == 7);
            seen.insert(cell);
        }
        assert_eq!(seen.len(), 2, "both max-value cells should be selected");
    }

    #[test]
    fn test_exploration_still_selects_free_cells() {
        let mut state = GameState::new();
        state.occupy(0, Player::X).unwrap();
        state.occupy(1, Player::O).unwrap();

        let mut agent = TabularAgent::from_seed(QTable::new(), 1.0, 3);
        let free = state.legal_actions();
        for _ in 0..50 {
            let cell = agent.select_cell(&state);
            assert!(free.contains(&cell), "Cell {} is not free", cell);
        }
        // exploration bypasses the table entirely
        assert!(agent.table().is_empty());
    }

    #[test]
    fn test_lookup_key_is_perspective_relative() {
        let mut state = GameState::new();
        state.occupy(0, Player::X).unwrap();

        let mut agent = TabularAgent::from_seed(QTable::new(), 0.0, 5);
        agent.select_cell(&state); // O to move, sees X's mark as opponent
        assert!(agent.table().contains("o--------"));
    }

    #[test]
    fn test_into_table_returns_ownership() {
        let mut table = QTable::new();
        table.actions("---------", &[0, 1]);
        let agent = TabularAgent::new(table.clone(), 0.1);
        assert_eq!(agent.into_table(), table);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut table = QTable::new();
        table.actions("x--o-----", &[1, 2, 4, 5, 6, 7, 8]);
        table.set_value("x--o-----", 4, -0.25);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qtable.json");
        table.save(&path).unwrap();

        let loaded = QTable::load(&path).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = QTable::load(Path::new("no_such_table.json"));
        assert!(matches!(err, Err(TableError::FileRead { .. })));
    }
}
