use std::io::{BufRead, Write};

use crate::game::{GameState, CELLS};

use super::agent::Agent;

/// An agent that prompts a person for every move.
///
/// Re-prompts until a syntactically valid cell index 0-8 is entered.
/// Occupancy is not pre-filtered here: the state machine rejects occupied
/// cells and the session asks again.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanAgent { input, output }
    }

    fn read_cell(&mut self) -> Option<usize> {
        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .expect("failed to read player input");
        if bytes == 0 {
            panic!("input stream closed while waiting for a move");
        }
        line.trim()
            .parse::<usize>()
            .ok()
            .filter(|&cell| cell < CELLS)
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_cell(&mut self, state: &GameState) -> usize {
        write!(
            self.output,
            "{}Player {}, take a cell 0-8: ",
            state.board(),
            state.current_player()
        )
        .expect("failed to write prompt");
        self.output.flush().expect("failed to flush prompt");

        loop {
            if let Some(cell) = self.read_cell() {
                return cell;
            }
            write!(self.output, "Wrong input. Take a cell 0-8: ")
                .expect("failed to write prompt");
            self.output.flush().expect("failed to flush prompt");
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
