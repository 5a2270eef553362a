use core::fmt;
use core::str::FromStr;

use crate::board::coords::Cell;

/// 代数表記の解析に失敗した理由。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseSquareError {
    /// `[a-h][1-8]` の2文字ではない。
    #[error("invalid square notation: {0:?}")]
    Invalid(String),
}

/// 盤面上のマス（0..=63のインデックス）。
///
/// グリッド座標 `(x, y)` は `x = 0` が a 列、`y = 0` が 8 段目に対応する。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Square(
    /// `y * 8 + x` に対応する0..=63の値。
    u8,
);

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 8;

    /// マスの総数。
    pub const COUNT: u8 = 64;

    /// 全64マスを a8, b8, ..., h1 の順に返す。
    #[inline]
    pub fn all() -> impl Iterator<Item = Self> {
        (u8::MIN..Self::COUNT).map(Self)
    }

    /// グリッド座標（符号付き）を返す。
    #[inline]
    #[must_use]
    pub fn cell(self) -> Cell {
        Cell::new(i32::from(self.x()), i32::from(self.y()))
    }

    /// 列を表す文字（`a`..=`h`）を返す。
    #[inline]
    #[must_use]
    pub fn file_char(self) -> char {
        char::from(b'a'.wrapping_add(self.x()))
    }

    /// 代数表記（例: `e4`）から `Square` を生成する。
    ///
    /// # Errors
    ///
    /// `text` が `[a-h][1-8]` のちょうど2文字でない場合、`ParseSquareError::Invalid` を返す。
    #[inline]
    pub fn from_algebraic(text: &str) -> Result<Self, ParseSquareError> {
        let (file, rank) = match *text.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => (file, rank),
            _ => return Err(ParseSquareError::Invalid(text.to_owned())),
        };

        // 8 段目が y = 0。
        let x = file.wrapping_sub(b'a');
        let y = b'8'.wrapping_sub(rank);
        match Self::from_xy(x, y) {
            Some(square) => Ok(square),
            None => Err(ParseSquareError::Invalid(text.to_owned())),
        }
    }

    /// 盤面座標（x, y）から `Square` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_xy(x: u8, y: u8) -> Option<Self> {
        if x >= Self::BOARD_LEN || y >= Self::BOARD_LEN {
            return None;
        }

        let mut idx = match y.checked_mul(Self::BOARD_LEN) {
            Some(value) => value,
            None => return None,
        };

        idx = match idx.checked_add(x) {
            Some(value) => value,
            None => return None,
        };

        Some(Self(idx))
    }

    /// 段を表す文字（`1`..=`8`）を返す。
    #[inline]
    #[must_use]
    pub fn rank_char(self) -> char {
        char::from(b'8'.wrapping_sub(self.y()))
    }

    /// x 座標（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// y 座標（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        match self.0.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }
}

impl fmt::Display for Square {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(text)
    }
}
