//! Linear move history with a navigable view cursor.
//!
//! The displayed position is never set directly: every transition
//! recomputes it by replaying the visible prefix of the history from the
//! initial position. This is a pure domain module with no GPUI dependencies.

use log::debug;
use shakmaty::{Chess, Square};

use crate::domain::chess::PieceKind;
use crate::domain::error::MoveError;
use crate::domain::rules::{self, GameStatus, MoveRecord};

/// Which position of the history is on display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    /// The end of the history; the only state that accepts new moves
    Live,
    /// The position after `history[index]`, with `-1` for the initial position
    Reviewing(isize),
}

/// An append-only list of played moves plus the cursor into it
#[derive(Clone, Debug)]
pub struct GameHistory {
    moves: Vec<MoveRecord>,
    cursor: Cursor,
    /// Position after replaying the visible prefix
    position: Chess,
    /// How often `position` occurred within the visible prefix
    occurrences: usize,
}

impl GameHistory {
    /// Create an empty history at the initial position
    pub fn new() -> Self {
        Self {
            moves: Vec::new(),
            cursor: Cursor::Live,
            position: Chess::default(),
            occurrences: 1,
        }
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_live(&self) -> bool {
        self.cursor == Cursor::Live
    }

    /// The displayed position
    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Status of the displayed position
    pub fn status(&self) -> GameStatus {
        rules::status(&self.position, self.occurrences)
    }

    /// Index of the last move applied to the displayed position
    /// (`-1` when showing the initial position)
    pub fn displayed_index(&self) -> isize {
        match self.cursor {
            Cursor::Live => self.last_index(),
            Cursor::Reviewing(index) => index,
        }
    }

    /// Number of moves replayed to reach the displayed position
    pub fn shown_len(&self) -> usize {
        (self.displayed_index() + 1) as usize
    }

    /// The move that produced the displayed position, if any
    pub fn last_shown_move(&self) -> Option<&MoveRecord> {
        self.shown_len()
            .checked_sub(1)
            .and_then(|index| self.moves.get(index))
    }

    /// Play a move at the live position.
    ///
    /// Rejected while reviewing and when the rules engine finds no matching
    /// legal move; the history is unchanged in both cases.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: PieceKind,
    ) -> Result<&MoveRecord, MoveError> {
        if !self.is_live() {
            return Err(MoveError::Reviewing);
        }
        let (record, _) = rules::play_move(&self.position, from, to, promotion)?;
        debug!("applied {} ({})", record.uci(), record.san);
        self.moves.push(record);
        self.refresh();
        Ok(&self.moves[self.moves.len() - 1])
    }

    /// Live: drop the last move. Reviewing: step the cursor back one move
    /// without touching the history. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        match self.cursor {
            Cursor::Live => {
                if self.moves.pop().is_none() {
                    return false;
                }
            }
            Cursor::Reviewing(index) => {
                if index <= -1 {
                    return false;
                }
                self.cursor = Cursor::Reviewing(index - 1);
            }
        }
        self.refresh();
        true
    }

    /// `None` returns to live play; an index is clamped to `[-1, len-1]`
    pub fn jump_to(&mut self, index: Option<isize>) {
        self.cursor = match index {
            None => Cursor::Live,
            Some(index) => Cursor::Reviewing(index.clamp(-1, self.last_index())),
        };
        self.refresh();
    }

    /// Show the position one move earlier. Returns whether the cursor moved.
    pub fn step_back(&mut self) -> bool {
        let next = match self.cursor {
            Cursor::Live if self.moves.is_empty() => return false,
            Cursor::Live => self.last_index(),
            Cursor::Reviewing(-1) => return false,
            Cursor::Reviewing(index) => index - 1,
        };
        self.cursor = Cursor::Reviewing(next);
        self.refresh();
        true
    }

    /// Show the position one move later; past the last move the cursor
    /// returns to live play. Returns whether the cursor moved.
    pub fn step_forward(&mut self) -> bool {
        self.cursor = match self.cursor {
            Cursor::Live => return false,
            Cursor::Reviewing(index) if index >= self.last_index() => Cursor::Live,
            Cursor::Reviewing(index) => Cursor::Reviewing(index + 1),
        };
        self.refresh();
        true
    }

    /// Discard every move and return to the initial position
    pub fn reset(&mut self) {
        self.moves.clear();
        self.cursor = Cursor::Live;
        self.refresh();
    }

    fn last_index(&self) -> isize {
        self.moves.len() as isize - 1
    }

    fn refresh(&mut self) {
        let (position, occurrences) = rules::replay(&self.moves[..self.shown_len()]);
        self.position = position;
        self.occurrences = occurrences;
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
