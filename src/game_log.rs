//! Append-only game history.
//!
//! A `GameLog` records every state of a game and the action that produced
//! each successor. `actions[i]` led from `states[i]` to `states[i + 1]`; a
//! `None` action is a skipped turn.

use std::path::Path;
use std::sync::Arc;

use crate::board::{Color, Position};
use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::letters::LetterGenerator;
use crate::protocol::replay::{self, LogError};
use crate::state::State;

/// A played move: ordered board positions spelling a word.
pub type Action = Vec<Position>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLog {
    states: Vec<State>,
    actions: Vec<Option<Action>>,
    pub red_name: String,
    pub blue_name: String,
}

impl GameLog {
    /// A log holding only the opening state.
    pub fn initial(first: State, red_name: impl Into<String>, blue_name: impl Into<String>) -> Self {
        GameLog {
            states: vec![first],
            actions: Vec::new(),
            red_name: red_name.into(),
            blue_name: blue_name.into(),
        }
    }

    /// Rebuilds a log from parts, checking that the action count matches.
    pub(crate) fn from_parts(
        states: Vec<State>,
        actions: Vec<Option<Action>>,
        red_name: String,
        blue_name: String,
    ) -> Option<Self> {
        if states.is_empty() || actions.len() + 1 != states.len() {
            return None;
        }
        Some(GameLog {
            states,
            actions,
            red_name,
            blue_name,
        })
    }

    /// Appends a turn. `action` is None for a skipped turn.
    pub fn add_turn(&mut self, action: Option<Action>, state: State) {
        self.actions.push(action);
        self.states.push(state);
    }

    /// Plays `action` on the current state and appends the result. Nothing
    /// is appended if the move is rejected.
    pub fn act(&mut self, action: Action) -> Result<&State, GameError> {
        let next = self.current_state().act(&action)?;
        self.add_turn(Some(action), next);
        Ok(self.current_state())
    }

    pub fn current_state(&self) -> &State {
        // The log always holds at least the opening state.
        &self.states[self.states.len() - 1]
    }

    pub fn current_turn(&self) -> Color {
        self.current_state().turn
    }

    pub fn current_round(&self) -> u32 {
        self.current_state().round
    }

    pub fn winner(&self) -> Option<Color> {
        self.current_state().winner()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn actions(&self) -> &[Option<Action>] {
        &self.actions
    }

    /// Number of turns taken (including skips).
    pub fn turns(&self) -> usize {
        self.actions.len()
    }

    pub fn name(&self, color: Color) -> &str {
        match color {
            Color::Red => &self.red_name,
            Color::Blue => &self.blue_name,
        }
    }

    /// Serializes the log as a JSON document.
    pub fn to_json(&self) -> Result<String, LogError> {
        replay::encode_log(self)
    }

    /// Parses a JSON log. Restored states share `dictionary` and each get a
    /// copy of `letters`.
    pub fn from_json(
        json: &str,
        dictionary: Arc<Dictionary>,
        letters: LetterGenerator,
    ) -> Result<Self, LogError> {
        replay::decode_log(json, dictionary, letters)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), LogError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn from_file(
        path: &Path,
        dictionary: Arc<Dictionary>,
        letters: LetterGenerator,
    ) -> Result<Self, LogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, dictionary, letters)
    }
}
