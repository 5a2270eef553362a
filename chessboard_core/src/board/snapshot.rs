use crate::board::square::Square;
use crate::board::types::Piece;

/// 1段分のマス。
type Row = [Option<Piece>; 8];

/// ある時点の盤面（8×8、行 0 が 8 段目）。
///
/// ルールエンジンから毎回生成され、描画側では変更もキャッシュもしない。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Snapshot {
    /// 段ごとの駒配置（`rows[y][x]`）。
    rows: [Row; 8],
}

impl Snapshot {
    /// 駒の無い盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            rows: [[None; 8]; 8],
        }
    }

    /// 段ごとの配列から盤面を生成する。
    #[inline]
    #[must_use]
    pub const fn from_rows(rows: [Row; 8]) -> Self {
        Self { rows }
    }

    /// 駒の数を返す。
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    /// 駒が1つも無いかを返す。
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces().next().is_none()
    }

    /// 指定マスの駒を返す。
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.rows
            .get(usize::from(square.y()))
            .and_then(|row| row.get(usize::from(square.x())))
            .copied()
            .flatten()
    }

    /// 盤上の駒を a8, b8, ..., h1 の順に返す。
    #[inline]
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// 指定マスに駒を置いた盤面を返す。
    #[inline]
    #[must_use]
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        let slot = self
            .rows
            .get_mut(usize::from(square.y()))
            .and_then(|row| row.get_mut(usize::from(square.x())));
        if let Some(cell) = slot {
            *cell = Some(piece);
        }
        self
    }
}

impl Default for Snapshot {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}
