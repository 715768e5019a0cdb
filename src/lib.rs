//! # ML Tic-Tac-Toe
//!
//! A tic-tac-toe engine with automated players for reinforcement-learning
//! experiments: uniform random, human-prompted, Q-table driven, and
//! policy-model driven.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player identities, state machine
//! - [`agents`] — Agent trait, player variants, state encoding
//! - [`session`] — Game runner: single games and series with tallies
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod agents;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
