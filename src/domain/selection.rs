//! The selected origin square and its legal destinations.

use shakmaty::{Chess, Position, Square};

use crate::domain::rules;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    /// Never empty
    pub destinations: Vec<Square>,
}

impl Selection {
    /// Select `square` in `position` if it holds a piece of the side to move
    /// with at least one legal destination.
    pub fn new(position: &Chess, square: Square) -> Option<Self> {
        let piece = position.board().piece_at(square)?;
        if piece.color != position.turn() {
            return None;
        }
        let destinations = rules::legal_destinations(position, square);
        if destinations.is_empty() {
            return None;
        }
        Some(Self {
            square,
            destinations,
        })
    }

    pub fn is_destination(&self, square: Square) -> bool {
        self.destinations.contains(&square)
    }
}
