//! Alternate views of the board consumed by the learning players: a flat
//! integer vector, a perspective-normalized string key, and a fixed-shape
//! one-hot tensor.

use crate::error::EncodingError;
use crate::game::{Board, Mark, Player, CELLS};

/// One-hot encoding of a board from one player's perspective: for each cell,
/// a 3-valued vector over (own, empty, opponent).
pub type StateTensor = [[f32; 3]; CELLS];

/// Encode the board as a length-9 vector in cell index order: 0 for an empty
/// cell, +1 for X, -1 for O.
pub fn encode_vector(board: &Board) -> [i8; CELLS] {
    let mut data = [0i8; CELLS];
    for (cell, value) in data.iter_mut().enumerate() {
        *value = match board.get(cell) {
            Mark::Empty => 0,
            Mark::X => Player::X.value(),
            Mark::O => Player::O.value(),
        };
    }
    data
}

/// Encode the board as a length-9 string relative to `pov`: `'-'` for an
/// empty cell, `'x'` for a cell claimed by `pov`, `'o'` for the opponent's.
///
/// Because the string is keyed by self-vs-opponent rather than absolute
/// player identity, both players can share a single lookup table.
pub fn perspective_string(board: &Board, pov: Player) -> String {
    (0..CELLS)
        .map(|cell| {
            let mark = board.get(cell);
            if mark == Mark::Empty {
                '-'
            } else if mark == pov.mark() {
                'x'
            } else {
                'o'
            }
        })
        .collect()
}

/// One-hot encode the board from `pov`'s perspective into a 9x3 tensor.
///
/// Goes through the perspective string and rejects any intermediate key that
/// is not exactly 9 characters. The board invariant makes that unreachable in
/// practice.
pub fn encode_tensor(board: &Board, pov: Player) -> Result<StateTensor, EncodingError> {
    let key = perspective_string(board, pov);
    if key.len() != CELLS {
        return Err(EncodingError::InvalidLength(key.len()));
    }

    let mut tensor = [[0.0f32; 3]; CELLS];
    for (cell, symbol) in key.chars().enumerate() {
        let channel = match symbol {
            'x' => 0,
            '-' => 1,
            _ => 2,
        };
        tensor[cell][channel] = 1.0;
    }
    Ok(tensor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    #[test]
    fn test_vector_empty_board() {
        let board = Board::new();
        assert_eq!(encode_vector(&board), [0i8; 9]);
    }

    #[test]
    fn test_vector_after_moves() {
        let mut state = GameState::new();
        state.occupy(0, Player::X).unwrap();
        state.occupy(4, Player::O).unwrap();
        state.occupy(8, Player::X).unwrap();
        assert_eq!(
            encode_vector(state.board()),
            [1, 0, 0, 0, -1, 0, 0, 0, 1]
        );
    }

    #[test]
    fn test_perspective_string_empty_board() {
        let board = Board::new();
        assert_eq!(perspective_string(&board, Player::X), "---------");
        assert_eq!(perspective_string(&board, Player::O), "---------");
    }

    #[test]
    fn test_perspective_string_is_relative() {
        let mut state = GameState::new();
        state.occupy(0, Player::X).unwrap();
        state.occupy(1, Player::O).unwrap();

        assert_eq!(perspective_string(state.board(), Player::X), "xo-------");
        assert_eq!(perspective_string(state.board(), Player::O), "ox-------");
    }

    #[test]
    fn test_perspectives_differ_on_nonempty_board() {
        let mut state = GameState::new();
        state.occupy(4, Player::X).unwrap();
        assert_ne!(
            perspective_string(state.board(), Player::X),
            perspective_string(state.board(), Player::O)
        );
    }

    #[test]
    fn test_tensor_empty_board() {
        let board = Board::new();
        let tensor = encode_tensor(&board, Player::X).unwrap();
        for cell in tensor {
            assert_eq!(cell, [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn test_tensor_channels() {
        let mut state = GameState::new();
        state.occupy(0, Player::X).unwrap();
        state.occupy(1, Player::O).unwrap();

        let tensor = encode_tensor(state.board(), Player::X).unwrap();
        assert_eq!(tensor[0], [1.0, 0.0, 0.0]); // own
        assert_eq!(tensor[1], [0.0, 0.0, 1.0]); // opponent
        assert_eq!(tensor[2], [0.0, 1.0, 0.0]); // empty

        // O sees the same cells with own/opponent swapped
        let tensor = encode_tensor(state.board(), Player::O).unwrap();
        assert_eq!(tensor[0], [0.0, 0.0, 1.0]);
        assert_eq!(tensor[1], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_tensor_one_hot_per_cell() {
        let mut state = GameState::new();
        for (cell, player) in [(0, Player::X), (4, Player::O), (8, Player::X)] {
            state.occupy(cell, player).unwrap();
        }
        let tensor = encode_tensor(state.board(), Player::O).unwrap();
        for cell in tensor {
            assert_eq!(cell.iter().sum::<f32>(), 1.0);
        }
    }
}
