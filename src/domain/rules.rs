//! Adapter over the shakmaty rules engine.
//!
//! Maps board gestures (origin square, destination square, promotion choice)
//! onto library moves and summarises the status of a position.

use shakmaty::san::San;
use shakmaty::{Chess, EnPassantMode, File, Move, Position, Square};

use crate::domain::chess::{PieceColor, PieceKind};
use crate::domain::error::MoveError;

/// Halfmove clock value at which the fifty-move rule applies
const FIFTY_MOVE_PLIES: u32 = 100;

/// An applied move. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    /// Destination as the user entered it (king destination for castling)
    pub to: Square,
    pub promotion: Option<PieceKind>,
    /// Kind of the captured piece, if any
    pub capture: Option<PieceKind>,
    /// Standard algebraic notation, without check suffix
    pub san: String,
    pub gives_check: bool,
    pub gives_checkmate: bool,
    mv: Move,
}

impl MoveRecord {
    /// The underlying library move
    pub fn chess_move(&self) -> &Move {
        &self.mv
    }

    /// Coordinate notation, e.g. `e2e4` or `e7e8q`
    pub fn uci(&self) -> String {
        let mut text = format!("{}{}", self.from, self.to);
        if let Some(kind) = self.promotion {
            text.push(kind.role().char());
        }
        text
    }
}

/// Summary of a position as reported by the rules engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameStatus {
    pub turn: PieceColor,
    pub in_check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub insufficient_material: bool,
    pub fifty_move_rule: bool,
    pub threefold_repetition: bool,
}

impl GameStatus {
    pub fn is_draw(&self) -> bool {
        self.stalemate
            || self.insufficient_material
            || self.fifty_move_rule
            || self.threefold_repetition
    }

    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.is_draw()
    }

    /// Side that delivered mate, if the game ended decisively
    pub fn winner(&self) -> Option<PieceColor> {
        self.checkmate.then(|| self.turn.opponent())
    }
}

/// The square a move lands on from the user's point of view.
/// Castling is entered by moving the king two files, so the rook square
/// shakmaty uses internally is translated to g/c.
fn gesture_target(m: &Move) -> Option<(Square, Square)> {
    match m {
        Move::Normal { from, to, .. } => Some((*from, *to)),
        Move::EnPassant { from, to } => Some((*from, *to)),
        Move::Castle { king, rook } => {
            let king_dest = if rook.file() == File::H {
                Square::from_coords(File::G, rook.rank())
            } else {
                Square::from_coords(File::C, rook.rank())
            };
            Some((*king, king_dest))
        }
        Move::Put { .. } => None,
    }
}

/// Legal destination squares for the piece on `from`, deduplicated and
/// sorted.
pub fn legal_destinations(position: &Chess, from: Square) -> Vec<Square> {
    let mut destinations: Vec<Square> = position
        .legal_moves()
        .iter()
        .filter_map(gesture_target)
        .filter(|(move_from, _)| *move_from == from)
        .map(|(_, to)| to)
        .collect();
    destinations.sort();
    destinations.dedup();
    destinations
}

/// Find the legal move matching a from/to gesture. Promotions use
/// `promotion`; it is ignored for every other move.
fn find_move(
    position: &Chess,
    from: Square,
    to: Square,
    promotion: PieceKind,
) -> Option<Move> {
    position.legal_moves().into_iter().find(|m| {
        gesture_target(m) == Some((from, to))
            && m.promotion().is_none_or(|role| role == promotion.role())
    })
}

/// Validate a gesture against `position` and play it.
/// Returns the record and the resulting position.
pub fn play_move(
    position: &Chess,
    from: Square,
    to: Square,
    promotion: PieceKind,
) -> Result<(MoveRecord, Chess), MoveError> {
    let mv = find_move(position, from, to, promotion).ok_or(MoveError::Illegal { from, to })?;
    let san = San::from_move(position, mv.clone()).to_string();
    let next = position
        .clone()
        .play(mv.clone())
        .map_err(|_| MoveError::Illegal { from, to })?;

    let record = MoveRecord {
        from,
        to,
        promotion: mv.promotion().map(PieceKind::from_role),
        capture: mv.capture().map(PieceKind::from_role),
        san,
        gives_check: next.is_check(),
        gives_checkmate: next.is_checkmate(),
        mv,
    };
    Ok((record, next))
}

/// Replay recorded moves from the initial position.
///
/// Also returns how often the final position occurred along the way, for
/// threefold repetition.
pub fn replay<'a>(moves: impl IntoIterator<Item = &'a MoveRecord>) -> (Chess, usize) {
    let mut position = Chess::default();
    let mut seen = vec![RepetitionKey::of(&position)];
    for record in moves {
        position = match position.clone().play(record.chess_move().clone()) {
            Ok(next) => next,
            // records only ever come from play_move on the same prefix
            Err(_) => break,
        };
        seen.push(RepetitionKey::of(&position));
    }
    let current = RepetitionKey::of(&position);
    let occurrences = seen.iter().filter(|key| **key == current).count();
    (position, occurrences)
}

/// Status of `position`, given how many times it has occurred in the game
pub fn status(position: &Chess, occurrences: usize) -> GameStatus {
    GameStatus {
        turn: PieceColor::from_color(position.turn()),
        in_check: position.is_check(),
        checkmate: position.is_checkmate(),
        stalemate: position.is_stalemate(),
        insufficient_material: position.is_insufficient_material(),
        fifty_move_rule: position.halfmoves() >= FIFTY_MOVE_PLIES,
        threefold_repetition: occurrences >= 3,
    }
}

/// The parts of a position that decide whether two positions repeat
#[derive(Clone, Debug, PartialEq, Eq)]
struct RepetitionKey {
    board: shakmaty::Board,
    turn: shakmaty::Color,
    castling: shakmaty::Bitboard,
    ep_square: Option<Square>,
}

impl RepetitionKey {
    fn of(position: &Chess) -> Self {
        Self {
            board: position.board().clone(),
            turn: position.turn(),
            castling: position.castles().castling_rights(),
            ep_square: position.ep_square(EnPassantMode::Legal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Role;

    fn play_all(moves: &[(Square, Square)]) -> (Vec<MoveRecord>, Chess) {
        let mut position = Chess::default();
        let mut records = Vec::new();
        for &(from, to) in moves {
            let (record, next) = play_move(&position, from, to, PieceKind::Queen).unwrap();
            records.push(record);
            position = next;
        }
        (records, position)
    }

    #[test]
    fn test_initial_destinations() {
        let pos = Chess::default();
        assert_eq!(
            legal_destinations(&pos, Square::E2),
            vec![Square::E3, Square::E4]
        );
        assert_eq!(
            legal_destinations(&pos, Square::G1),
            vec![Square::F3, Square::H3]
        );
        // empty square and opponent piece have no destinations
        assert!(legal_destinations(&pos, Square::E4).is_empty());
        assert!(legal_destinations(&pos, Square::E7).is_empty());
    }

    #[test]
    fn test_play_move_records_san() {
        let (records, pos) = play_all(&[(Square::E2, Square::E4)]);
        assert_eq!(records[0].san, "e4");
        assert_eq!(records[0].uci(), "e2e4");
        assert_eq!(records[0].capture, None);
        assert_eq!(PieceColor::from_color(pos.turn()), PieceColor::Black);
    }

    #[test]
    fn test_illegal_move_rejected() {
        let pos = Chess::default();
        let err = play_move(&pos, Square::E2, Square::E5, PieceKind::Queen).unwrap_err();
        assert_eq!(
            err,
            MoveError::Illegal {
                from: Square::E2,
                to: Square::E5
            }
        );
    }

    #[test]
    fn test_capture_flag() {
        let (records, _) = play_all(&[
            (Square::E2, Square::E4),
            (Square::D7, Square::D5),
            (Square::E4, Square::D5),
        ]);
        assert_eq!(records[2].capture, Some(PieceKind::Pawn));
        assert_eq!(records[2].san, "exd5");
    }

    #[test]
    fn test_castling_by_king_destination() {
        let (_, pos) = play_all(&[
            (Square::E2, Square::E4),
            (Square::E7, Square::E5),
            (Square::G1, Square::F3),
            (Square::B8, Square::C6),
            (Square::F1, Square::C4),
            (Square::G8, Square::F6),
        ]);
        assert!(legal_destinations(&pos, Square::E1).contains(&Square::G1));
        let (record, next) = play_move(&pos, Square::E1, Square::G1, PieceKind::Queen).unwrap();
        assert_eq!(record.san, "O-O");
        assert_eq!(record.to, Square::G1);
        assert_eq!(
            next.board().piece_at(Square::F1).map(|p| p.role),
            Some(Role::Rook)
        );
    }

    #[test]
    fn test_promotion_uses_requested_piece() {
        let (_, pos) = play_all(&[
            (Square::H2, Square::H4),
            (Square::G7, Square::G5),
            (Square::H4, Square::G5),
            (Square::H7, Square::H6),
            (Square::G5, Square::H6),
            (Square::F8, Square::G7),
            (Square::H6, Square::G7),
            (Square::G8, Square::F6),
        ]);
        // four promotions collapse into one destination per square
        let destinations = legal_destinations(&pos, Square::G7);
        assert_eq!(destinations, vec![Square::G8, Square::H8]);

        let (record, next) = play_move(&pos, Square::G7, Square::H8, PieceKind::Knight).unwrap();
        assert_eq!(record.promotion, Some(PieceKind::Knight));
        assert_eq!(record.capture, Some(PieceKind::Rook));
        assert_eq!(record.uci(), "g7h8n");
        assert_eq!(
            next.board().piece_at(Square::H8).map(|p| p.role),
            Some(Role::Knight)
        );
    }

    #[test]
    fn test_checkmate_status() {
        // fool's mate
        let (records, pos) = play_all(&[
            (Square::F2, Square::F3),
            (Square::E7, Square::E5),
            (Square::G2, Square::G4),
            (Square::D8, Square::H4),
        ]);
        assert!(records[3].gives_check);
        assert!(records[3].gives_checkmate);

        let status = status(&pos, 1);
        assert!(status.in_check);
        assert!(status.checkmate);
        assert!(status.is_game_over());
        assert!(!status.is_draw());
        assert_eq!(status.turn, PieceColor::White);
        assert_eq!(status.winner(), Some(PieceColor::Black));
    }

    #[test]
    fn test_replay_matches_live_play() {
        let (records, live) = play_all(&[
            (Square::E2, Square::E4),
            (Square::C7, Square::C5),
            (Square::G1, Square::F3),
        ]);
        let (replayed, occurrences) = replay(&records);
        assert_eq!(replayed.board(), live.board());
        assert_eq!(replayed.turn(), live.turn());
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn test_threefold_repetition() {
        let shuffle = [
            (Square::G1, Square::F3),
            (Square::G8, Square::F6),
            (Square::F3, Square::G1),
            (Square::F6, Square::G8),
        ];
        let mut moves = Vec::new();
        moves.extend_from_slice(&shuffle);
        moves.extend_from_slice(&shuffle);
        let (records, _) = play_all(&moves);

        let (pos, occurrences) = replay(&records[..4]);
        assert_eq!(occurrences, 2);
        assert!(!status(&pos, occurrences).threefold_repetition);

        let (pos, occurrences) = replay(&records);
        assert_eq!(occurrences, 3);
        let status = status(&pos, occurrences);
        assert!(status.threefold_repetition);
        assert!(status.is_draw());
        assert_eq!(status.winner(), None);
    }
}
