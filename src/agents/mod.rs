//! The player variants: a common [`Agent`] trait over "choose a free cell",
//! plus the state encoders the learning players consume.

mod agent;
mod human;
mod model;
mod random;
pub mod state_encoding;
mod tabular;

pub use agent::Agent;
pub use human::HumanAgent;
pub use model::{ModelAgent, PolicyModel};
pub use random::RandomAgent;
pub use tabular::{QTable, TabularAgent};
