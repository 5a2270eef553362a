use crate::board::square::Square;

/// キャンバス座標系の点（ピクセル）。
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PixelPoint {
    /// 横方向（右が正）。
    pub x: f64,
    /// 縦方向（下が正）。
    pub y: f64,
}

impl PixelPoint {
    /// 原点。
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// 座標から点を生成する。
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `origin` を原点とする相対座標に変換する。
    ///
    /// ビューポート座標からキャンバス座標への変換に使う。
    #[inline]
    #[must_use]
    pub fn offset_from(self, origin: Self) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }
}

/// グリッド上のセル（列, 行）。範囲外の値も保持できる。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Cell {
    /// 列（0 が a 列）。
    pub col: i32,
    /// 行（0 が 8 段目）。
    pub row: i32,
}

impl Cell {
    /// 盤外を表すセル。
    pub const OFF_BOARD: Self = Self::new(-1, -1);

    /// 列と行からセルを生成する。
    #[inline]
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// 盤内なら対応する `Square` を返す。
    #[inline]
    #[must_use]
    pub fn square(self) -> Option<Square> {
        let x = match u8::try_from(self.col) {
            Ok(value) => value,
            Err(_conversion_error) => return None,
        };
        let y = match u8::try_from(self.row) {
            Ok(value) => value,
            Err(_conversion_error) => return None,
        };

        Square::from_xy(x, y)
    }
}

/// キャンバス座標をグリッドセルへ変換する（床除算、クランプなし）。
///
/// 呼び出し側は事前にキャンバスのビューポートオフセットを差し引いておくこと。
/// 盤外の点は範囲外のセルになる。非有限値や正でないマスサイズは `Cell::OFF_BOARD`。
#[inline]
#[must_use]
pub fn cell_at(pixel: PixelPoint, square_size: f64) -> Cell {
    if !(square_size.is_finite() && square_size > 0.0) {
        return Cell::OFF_BOARD;
    }
    if !(pixel.x.is_finite() && pixel.y.is_finite()) {
        return Cell::OFF_BOARD;
    }

    Cell::new(
        floor_div(pixel.x, square_size),
        floor_div(pixel.y, square_size),
    )
}

/// `value / divisor` を切り捨てて `i32` に収める（飽和）。
#[inline]
#[expect(
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    reason = "float -> int の飽和変換"
)]
fn floor_div(value: f64, divisor: f64) -> i32 {
    (value / divisor).floor() as i32
}
