use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, File, Move, Position as _};

use crate::board::{Color, Piece, Role, Snapshot, Square};
use crate::rules::types::{MoveError, Rules};

/// FEN から局面を構築できなかった理由。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum FenError {
    /// FEN の構文が不正。
    #[error("malformed FEN: {0}")]
    Parse(String),
    /// 構文は正しいが、標準チェスの局面として不正。
    #[error("invalid position: {0}")]
    Position(String),
}

/// 標準チェスのルールエンジン（`shakmaty::Chess` のアダプタ）。
#[derive(Clone, Debug, Default)]
pub struct Standard {
    /// 現在の局面。
    position: Chess,
}

impl Standard {
    /// FEN 文字列から局面を構築する。
    ///
    /// # Errors
    ///
    /// - `FenError::Parse`: FEN として解析できない場合
    /// - `FenError::Position`: 標準チェスの局面として成立しない場合
    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed: Fen = match fen.parse() {
            Ok(value) => value,
            Err(err) => return Err(FenError::Parse(err.to_string())),
        };

        match parsed.into_position::<Chess>(CastlingMode::Standard) {
            Ok(position) => Ok(Self { position }),
            Err(err) => Err(FenError::Position(err.to_string())),
        }
    }

    /// 初期局面から開始する。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        Self {
            position: Chess::default(),
        }
    }

    /// `from` から `to` へ向かう合法手を返す。
    ///
    /// 昇格手が複数ある場合はクイーンへの昇格を選ぶ。
    fn find_move(&self, from: Square, to: Square) -> Option<Move> {
        let engine_from = match to_engine(from) {
            Some(value) => value,
            None => return None,
        };
        let engine_to = match to_engine(to) {
            Some(value) => value,
            None => return None,
        };

        self.position
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from() == Some(engine_from) && destination(mv) == engine_to)
            .find(|mv| {
                mv.promotion()
                    .is_none_or(|role| role == shakmaty::Role::Queen)
            })
    }
}

impl Rules for Standard {
    #[inline]
    fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let engine_from = match to_engine(from) {
            Some(value) => value,
            None => return Vec::new(),
        };

        let mut destinations: Vec<Square> = Vec::new();
        for mv in self.position.legal_moves() {
            if mv.from() != Some(engine_from) {
                continue;
            }
            // 昇格手は移動先が重複する。
            if let Some(square) = from_engine(destination(&mv)) {
                if !destinations.contains(&square) {
                    destinations.push(square);
                }
            }
        }
        destinations
    }

    #[inline]
    fn position(&self) -> Snapshot {
        let board = self.position.board();
        Square::all().fold(Snapshot::empty(), |snapshot, square| {
            let piece = to_engine(square).and_then(|engine_square| board.piece_at(engine_square));
            match piece {
                Some(value) => snapshot.with_piece(square, from_engine_piece(value)),
                None => snapshot,
            }
        })
    }

    #[inline]
    fn side_to_move(&self) -> Color {
        from_engine_color(self.position.turn())
    }

    #[inline]
    fn submit_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        match self.find_move(from, to) {
            Some(mv) => {
                self.position.play_unchecked(&mv);
                Ok(())
            }
            None => Err(MoveError::Illegal { from, to }),
        }
    }
}

/// 着手後にキングまたは駒が到達するマスを返す。
///
/// `shakmaty` はキャスリングをルークのマスで表すため、キングの移動先に読み替える。
fn destination(mv: &Move) -> shakmaty::Square {
    match *mv {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() {
                File::G
            } else {
                File::C
            };
            shakmaty::Square::from_coords(file, king.rank())
        }
        _ => mv.to(),
    }
}

/// `shakmaty` の色を変換する。
const fn from_engine_color(color: shakmaty::Color) -> Color {
    match color {
        shakmaty::Color::Black => Color::Black,
        shakmaty::Color::White => Color::White,
    }
}

/// `shakmaty` の駒を変換する。
const fn from_engine_piece(piece: shakmaty::Piece) -> Piece {
    let role = match piece.role {
        shakmaty::Role::Bishop => Role::Bishop,
        shakmaty::Role::King => Role::King,
        shakmaty::Role::Knight => Role::Knight,
        shakmaty::Role::Pawn => Role::Pawn,
        shakmaty::Role::Queen => Role::Queen,
        shakmaty::Role::Rook => Role::Rook,
    };
    Piece::new(from_engine_color(piece.color), role)
}

/// `shakmaty` のマスを代数表記経由で変換する。
fn from_engine(square: shakmaty::Square) -> Option<Square> {
    Square::from_algebraic(&square.to_string()).ok()
}

/// マスを代数表記経由で `shakmaty` のマスへ変換する。
fn to_engine(square: Square) -> Option<shakmaty::Square> {
    square.to_string().parse::<shakmaty::Square>().ok()
}
