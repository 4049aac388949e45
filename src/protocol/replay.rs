//! JSON replay document for game logs.
//!
//! Layout:
//!
//! ```json
//! {
//!   "states": [{ "board": { "(1, 1)": "RED_CAPITAL", ... }, "turn": "RED", "round": 1 }],
//!   "actions": [null, ["(2, 1)", "(3, 2)"]],
//!   "red": "name",
//!   "blue": "name"
//! }
//! ```
//!
//! Boards are sparse: empty tiles are omitted.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::notation::{format_position, parse_color, parse_position, parse_tile, NotationError};
use crate::board::{Board, Position, Tile};
use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::game_log::{Action, GameLog};
use crate::letters::LetterGenerator;
use crate::state::State;

/// Errors raised while reading or writing a game log.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("malformed game log: {0}")]
    Malformed(String),

    /// Failure while encoding a document.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

impl From<NotationError> for LogError {
    fn from(e: NotationError) -> Self {
        LogError::Malformed(e.to_string())
    }
}

/// Serialized form of a whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDocument {
    pub states: Vec<StateDocument>,
    pub actions: Vec<Option<Vec<String>>>,
    pub red: String,
    pub blue: String,
}

/// Serialized form of one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDocument {
    pub board: BTreeMap<String, String>,
    pub turn: String,
    pub round: u32,
}

/// Sparse board map: every non-empty tile keyed by its position string.
pub fn board_to_map(board: &Board) -> BTreeMap<String, String> {
    board
        .iter()
        .filter(|&(_, t)| t != Tile::Empty)
        .map(|(p, t)| (format_position(p), t.kind()))
        .collect()
}

/// Inverse of [`board_to_map`].
pub fn board_from_map(map: &BTreeMap<String, String>) -> Result<Board, LogError> {
    let mut entries = Vec::with_capacity(map.len());
    for (pos, kind) in map {
        entries.push((parse_position(pos)?, parse_tile(kind)?));
    }
    Ok(Board::new(entries)?)
}

fn state_document(state: &State) -> StateDocument {
    StateDocument {
        board: board_to_map(&state.board),
        turn: state.turn.name().to_string(),
        round: state.round,
    }
}

fn action_document(action: &Option<Action>) -> Option<Vec<String>> {
    action
        .as_ref()
        .map(|positions| positions.iter().map(|p| format_position(*p)).collect())
}

fn parse_action(action: &Option<Vec<String>>) -> Result<Option<Action>, LogError> {
    match action {
        None => Ok(None),
        Some(items) => items
            .iter()
            .map(|s| {
                let pos = parse_position(s)?;
                if !pos.is_valid() {
                    return Err(GameError::InvalidPosition(pos).into());
                }
                Ok(pos)
            })
            .collect::<Result<Vec<Position>, LogError>>()
            .map(Some),
    }
}

/// Builds the document for a log.
pub fn log_document(log: &GameLog) -> LogDocument {
    LogDocument {
        states: log.states().iter().map(state_document).collect(),
        actions: log.actions().iter().map(action_document).collect(),
        red: log.red_name.clone(),
        blue: log.blue_name.clone(),
    }
}

/// Rebuilds a log from its document.
pub fn log_from_document(
    doc: &LogDocument,
    dictionary: Arc<Dictionary>,
    letters: LetterGenerator,
) -> Result<GameLog, LogError> {
    let mut states = Vec::with_capacity(doc.states.len());
    for state in &doc.states {
        if state.round == 0 || state.round == u32::MAX {
            return Err(LogError::Malformed(format!(
                "round {} out of range 1..{}",
                state.round,
                u32::MAX
            )));
        }
        states.push(State::from_parts(
            dictionary.clone(),
            board_from_map(&state.board)?,
            letters.clone(),
            parse_color(&state.turn)?,
            state.round,
        ));
    }

    let actions = doc
        .actions
        .iter()
        .map(parse_action)
        .collect::<Result<Vec<_>, _>>()?;

    let (state_count, action_count) = (states.len(), actions.len());
    GameLog::from_parts(states, actions, doc.red.clone(), doc.blue.clone()).ok_or_else(|| {
        LogError::Malformed(format!(
            "expected one more state than actions, got {} states and {} actions",
            state_count, action_count
        ))
    })
}

/// Serializes a log to pretty-printed JSON.
pub fn encode_log(log: &GameLog) -> Result<String, LogError> {
    Ok(serde_json::to_string_pretty(&log_document(log))?)
}

/// Parses a log from JSON.
pub fn decode_log(
    json: &str,
    dictionary: Arc<Dictionary>,
    letters: LetterGenerator,
) -> Result<GameLog, LogError> {
    let doc: LogDocument =
        serde_json::from_str(json).map_err(|e| LogError::Malformed(e.to_string()))?;
    log_from_document(&doc, dictionary, letters)
}
