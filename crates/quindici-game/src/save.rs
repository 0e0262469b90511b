//! The persistence codec: durable snapshots of a [`GameSession`].
//!
//! Snapshots are JSON records with camelCase keys. Loading reconstructs the
//! session exactly as captured — used digits and terminal status come from
//! the snapshot, never re-derived — and any disagreement between the stored
//! grid, history, and used-number list is a load-time error rather than a
//! silent repair.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use quindici_core::{Board, Digit, DigitSet, Move, Parity, Position, Seat};
use serde::{Deserialize, Serialize};

use crate::{
    history::MoveHistory,
    player::Player,
    session::{GameSession, Status},
};

/// The game-type tag every snapshot carries; loading anything else fails.
pub const GAME_TYPE: &str = "NumericalTicTacToe";

const SAVE_EXTENSION: &str = "json";

/// A serialized game snapshot.
///
/// The used-number list is redundant with the undo history but persisted for
/// forward compatibility and debugging; on load it is checked against the
/// history instead of being re-derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveGame {
    /// Game implementation tag; must equal [`GAME_TYPE`] to load.
    pub game_type: String,
    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,
    /// Board height (always 3).
    pub board_rows: u8,
    /// Board width (always 3).
    pub board_cols: u8,
    /// Cell values row-major; 0 means empty.
    pub grid: Vec<Vec<u8>>,
    /// Zero-based index of the seat to move (or the mover, when terminal).
    pub current_player_index: usize,
    /// Whether the game has ended.
    pub terminal: bool,
    /// The winner's name when the game was won.
    pub winner_name: Option<String>,
    /// Both players, in seat order.
    pub players: Vec<PlayerRecord>,
    /// Applied moves, oldest first.
    pub undo_history: Vec<MoveRecord>,
    /// Undone moves, in stack order (next to redo last).
    pub redo_history: Vec<MoveRecord>,
    /// Digits currently on the board, ascending.
    pub used_numbers: Vec<u8>,
}

/// A player as persisted in a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// The player's display name.
    pub name: String,
    /// Whether the player places odd digits.
    pub parity_is_odd: bool,
}

/// A move as persisted in a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    /// Zero-based row.
    pub row: u8,
    /// Zero-based column.
    pub col: u8,
    /// The digit placed (1-9).
    pub value: u8,
    /// Name of the player who made the move.
    pub player_name: String,
}

/// Why a snapshot could not be written or read back.
///
/// All variants are recoverable at the call site; a failed load leaves the
/// in-memory session untouched.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SaveError {
    /// The save file could not be read or written.
    #[display("save file error: {_0}")]
    Io(std::io::Error),
    /// The snapshot JSON is malformed.
    #[display("malformed snapshot: {_0}")]
    Json(serde_json::Error),
    /// The snapshot belongs to a different game implementation.
    #[display("snapshot is for game type {found:?}, expected {GAME_TYPE:?}")]
    GameTypeMismatch {
        /// The tag found in the snapshot.
        found: String,
    },
    /// The snapshot's board dimensions are not 3x3.
    #[display("unsupported board size {rows}x{cols}")]
    UnsupportedBoardSize {
        /// Stored row count.
        rows: u8,
        /// Stored column count.
        cols: u8,
    },
    /// The snapshot does not carry exactly two players.
    #[display("expected 2 players, found {found}")]
    PlayerCount {
        /// Stored player count.
        found: usize,
    },
    /// A stored player name does not match the active roster.
    #[display("unknown player name {name:?}")]
    UnknownPlayer {
        /// The unresolvable name.
        name: String,
    },
    /// A stored player's parity disagrees with the active roster.
    #[display("player {name:?} has parity {stored}, roster says {expected}")]
    ParityMismatch {
        /// The player's name.
        name: String,
        /// Parity recorded in the snapshot.
        stored: Parity,
        /// Parity of the roster player with the same name.
        expected: Parity,
    },
    /// The stored current-player index is out of range.
    #[display("current player index {index} is out of range")]
    CurrentPlayerIndex {
        /// The stored index.
        index: usize,
    },
    /// A grid cell or move record holds a value outside 0-9 / 1-9, or a
    /// move targets a position outside the board.
    #[display("invalid cell or move record (row {row}, col {col}, value {value})")]
    InvalidRecord {
        /// Stored row.
        row: u8,
        /// Stored column.
        col: u8,
        /// Stored value.
        value: u8,
    },
    /// A winner is recorded for a game that is not terminal.
    #[display("winner {name:?} recorded for a game still in progress")]
    WinnerNotTerminal {
        /// The stored winner name.
        name: String,
    },
    /// Replaying the stored undo history does not reproduce the stored grid.
    #[display("undo history disagrees with the stored grid")]
    HistoryGridMismatch,
    /// The stored used-number list disagrees with the undo history.
    #[display("used numbers disagree with the undo history")]
    UsedNumbersMismatch,
    /// A redoable move targets an occupied cell or an already used digit.
    #[display("redo history conflicts with the stored grid")]
    RedoConflict,
}

// Several variants share a field type, so only the wrapper variants get
// `From` impls.
impl From<std::io::Error> for SaveError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Captures a snapshot of `session`, stamped with the current time.
#[must_use]
pub fn snapshot(session: &GameSession) -> SaveGame {
    let board = session.board();
    let grid = board
        .grid()
        .iter()
        .map(|row| row.iter().map(|cell| cell.map_or(0, Digit::value)).collect())
        .collect();

    let players = session
        .players()
        .iter()
        .map(|player| PlayerRecord {
            name: player.name().to_owned(),
            parity_is_odd: player.parity() == Parity::Odd,
        })
        .collect();

    let record = |mv: &Move| MoveRecord {
        row: mv.position().row(),
        col: mv.position().col(),
        value: mv.digit().value(),
        player_name: session.player(mv.seat()).name().to_owned(),
    };

    SaveGame {
        game_type: GAME_TYPE.to_owned(),
        saved_at: Utc::now(),
        board_rows: Position::SIZE,
        board_cols: Position::SIZE,
        grid,
        current_player_index: session.current_seat().index(),
        terminal: session.is_terminal(),
        winner_name: session.winner().map(|p| p.name().to_owned()),
        players,
        undo_history: session.history().undo_moves().iter().map(record).collect(),
        redo_history: session.history().redo_moves().iter().map(record).collect(),
        used_numbers: session.used_digits().iter().map(Digit::value).collect(),
    }
}

/// Reconstructs a session from a snapshot, matching stored player names
/// against `roster` (the active players, in seat order).
///
/// # Errors
///
/// Any [`SaveError`] described on the variant: game-type mismatch, malformed
/// records, unresolvable player names, or internal inconsistency between the
/// grid, histories, and used-number list.
pub fn restore(save: &SaveGame, roster: &[Player; 2]) -> Result<GameSession, SaveError> {
    if save.game_type != GAME_TYPE {
        return Err(SaveError::GameTypeMismatch {
            found: save.game_type.clone(),
        });
    }
    if save.board_rows != Position::SIZE || save.board_cols != Position::SIZE {
        return Err(SaveError::UnsupportedBoardSize {
            rows: save.board_rows,
            cols: save.board_cols,
        });
    }
    if save.players.len() != 2 {
        return Err(SaveError::PlayerCount {
            found: save.players.len(),
        });
    }

    // Stored players bind to roster seats by name; parity must agree.
    for (record, player) in save.players.iter().zip(roster) {
        if record.name != player.name() {
            return Err(SaveError::UnknownPlayer {
                name: record.name.clone(),
            });
        }
        let stored = if record.parity_is_odd {
            Parity::Odd
        } else {
            Parity::Even
        };
        if stored != player.parity() {
            return Err(SaveError::ParityMismatch {
                name: record.name.clone(),
                stored,
                expected: player.parity(),
            });
        }
    }

    let seat_of = |name: &str| -> Result<Seat, SaveError> {
        roster
            .iter()
            .position(|player| player.name() == name)
            .and_then(Seat::from_index)
            .ok_or_else(|| SaveError::UnknownPlayer {
                name: name.to_owned(),
            })
    };

    let board = decode_grid(&save.grid)?;
    let undo = decode_moves(&save.undo_history, &seat_of)?;
    let redo = decode_moves(&save.redo_history, &seat_of)?;

    // The undo history must account for exactly the occupied cells.
    let mut replayed = Board::new();
    for mv in &undo {
        if !replayed.is_empty(mv.position()) {
            return Err(SaveError::HistoryGridMismatch);
        }
        replayed.place(*mv);
    }
    if replayed != board {
        return Err(SaveError::HistoryGridMismatch);
    }

    // Used numbers are taken from the snapshot, then checked against the
    // history rather than re-derived from it.
    let mut used = DigitSet::new();
    for &value in &save.used_numbers {
        let digit = Digit::try_from_value(value).ok_or(SaveError::InvalidRecord {
            row: 0,
            col: 0,
            value,
        })?;
        used.insert(digit);
    }
    let from_history: DigitSet = undo.iter().map(|mv| mv.digit()).collect();
    // A digit appears at most once in a valid history; a duplicate can never
    // agree with the used-number set.
    if undo.len() != from_history.len() || used != from_history {
        return Err(SaveError::UsedNumbersMismatch);
    }

    // Redoable moves must still target free cells and free digits.
    for mv in &redo {
        if !board.is_empty(mv.position()) || used.contains(mv.digit()) {
            return Err(SaveError::RedoConflict);
        }
    }

    let current = Seat::from_index(save.current_player_index).ok_or(
        SaveError::CurrentPlayerIndex {
            index: save.current_player_index,
        },
    )?;

    // Terminal status is restored as stored, not re-derived.
    let status = if save.terminal {
        match &save.winner_name {
            Some(name) => Status::Won(seat_of(name)?),
            None => Status::Drawn,
        }
    } else {
        if let Some(name) = &save.winner_name {
            return Err(SaveError::WinnerNotTerminal { name: name.clone() });
        }
        Status::InProgress
    };

    Ok(GameSession::from_parts(
        board,
        MoveHistory::from_parts(undo, redo),
        used,
        roster.clone(),
        current,
        status,
    ))
}

fn decode_grid(grid: &[Vec<u8>]) -> Result<Board, SaveError> {
    let mut board = Board::new();
    for (row, cells) in grid.iter().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            let (row, col) = (u8::try_from(row), u8::try_from(col));
            let (Ok(row), Ok(col)) = (row, col) else {
                return Err(SaveError::UnsupportedBoardSize {
                    rows: u8::MAX,
                    cols: u8::MAX,
                });
            };
            let Some(pos) = Position::try_new(row, col) else {
                return Err(SaveError::UnsupportedBoardSize {
                    rows: row + 1,
                    cols: col + 1,
                });
            };
            if value == 0 {
                continue;
            }
            let digit = Digit::try_from_value(value)
                .ok_or(SaveError::InvalidRecord { row, col, value })?;
            // Seat is irrelevant for the grid; the history carries owners.
            board.place(Move::new(pos, digit, Seat::P1));
        }
    }
    Ok(board)
}

fn decode_moves(
    records: &[MoveRecord],
    seat_of: &impl Fn(&str) -> Result<Seat, SaveError>,
) -> Result<Vec<Move>, SaveError> {
    records
        .iter()
        .map(|record| {
            let pos = Position::try_new(record.row, record.col);
            let digit = Digit::try_from_value(record.value);
            let (Some(pos), Some(digit)) = (pos, digit) else {
                return Err(SaveError::InvalidRecord {
                    row: record.row,
                    col: record.col,
                    value: record.value,
                });
            };
            Ok(Move::new(pos, digit, seat_of(&record.player_name)?))
        })
        .collect()
}

/// Serializes a session snapshot to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`SaveError::Json`] if serialization fails.
pub fn to_json(session: &GameSession) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(&snapshot(session))?)
}

/// Deserializes snapshot JSON and reconstructs the session against `roster`.
///
/// # Errors
///
/// Returns [`SaveError::Json`] for malformed JSON, or any [`restore`] error.
pub fn from_json(json: &str, roster: &[Player; 2]) -> Result<GameSession, SaveError> {
    let save: SaveGame = serde_json::from_str(json)?;
    restore(&save, roster)
}

/// Appends the `.json` extension when `path` has none.
fn with_save_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_owned()
    } else {
        path.with_extension(SAVE_EXTENSION)
    }
}

/// Writes a session snapshot to `path`, appending `.json` when the path has
/// no extension.
///
/// # Errors
///
/// Returns [`SaveError::Io`] or [`SaveError::Json`].
pub fn write_file(session: &GameSession, path: &Path) -> Result<PathBuf, SaveError> {
    let path = with_save_extension(path);
    let json = to_json(session)?;
    fs::write(&path, json)?;
    log::info!("saved game to {}", path.display());
    Ok(path)
}

/// Reads a snapshot from `path` (trying `.json` when the bare path does not
/// exist) and reconstructs the session against `roster`.
///
/// # Errors
///
/// Returns [`SaveError::Io`] for a missing or unreadable file, or any
/// decoding error. On error the caller's session is untouched; a session is
/// only produced on full success.
pub fn read_file(path: &Path, roster: &[Player; 2]) -> Result<GameSession, SaveError> {
    let path = if path.exists() {
        path.to_owned()
    } else {
        with_save_extension(path)
    };
    let json = fs::read_to_string(&path)?;
    let session = from_json(&json, roster)?;
    log::info!("loaded game from {}", path.display());
    Ok(session)
}
