/// 駒の色（手番）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Color {
    /// 後手。
    Black,
    /// 先手。
    White,
}

impl Color {
    /// 画像キーに使う1文字（`b` / `w`）を返す。
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Black => 'b',
            Self::White => 'w',
        }
    }
}

/// 駒の種類。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Role {
    /// ビショップ。
    Bishop,
    /// キング。
    King,
    /// ナイト。
    Knight,
    /// ポーン。
    Pawn,
    /// クイーン。
    Queen,
    /// ルーク。
    Rook,
}

impl Role {
    /// 画像ファイル名に使う英名を返す。
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bishop => "bishop",
            Self::King => "king",
            Self::Knight => "knight",
            Self::Pawn => "pawn",
            Self::Queen => "queen",
            Self::Rook => "rook",
        }
    }

    /// 代数表記で使う小文字1文字を返す。
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Bishop => 'b',
            Self::King => 'k',
            Self::Knight => 'n',
            Self::Pawn => 'p',
            Self::Queen => 'q',
            Self::Rook => 'r',
        }
    }
}

/// 盤上の駒（種類と色の組）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    /// 色。
    pub color: Color,
    /// 種類。
    pub role: Role,
}

impl Piece {
    /// 色と種類から駒を生成する。
    #[inline]
    #[must_use]
    pub const fn new(color: Color, role: Role) -> Self {
        Self { color, role }
    }
}
