use crate::assets::PieceKey;
use crate::board::PixelPoint;
use crate::render::surface::Surface;

/// 記録された描画命令。
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Op {
    /// 円の塗りつぶし。
    Circle {
        /// 中心。
        center: PixelPoint,
        /// 色。
        paint: String,
        /// 半径。
        radius: f64,
    },
    /// 全消去。
    Clear,
    /// 駒画像。
    Image {
        /// 画像のキー。
        key: PieceKey,
        /// 左端。
        left: f64,
        /// 一辺。
        size: f64,
        /// 上端。
        top: f64,
    },
    /// 線分。
    Line {
        /// 始点。
        from: PixelPoint,
        /// 色。
        paint: String,
        /// 終点。
        to: PixelPoint,
    },
    /// 正方形の塗りつぶし。
    Rect {
        /// 左端。
        left: f64,
        /// 色。
        paint: String,
        /// 一辺。
        size: f64,
        /// 上端。
        top: f64,
    },
}

/// 描画命令を順に記録するサーフェス（ヘッドレス描画・テスト用）。
///
/// 画像の代わりに `PieceKey` をそのまま扱う。
#[derive(Clone, Debug, PartialEq)]
pub struct Recording {
    /// 記録した命令。
    ops: Vec<Op>,
    /// ビューポート上の左上位置。
    origin: PixelPoint,
    /// 一辺の長さ。
    size: f64,
}

impl Recording {
    /// 円の描画回数を返す。
    #[inline]
    #[must_use]
    pub fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Circle { .. }))
            .count()
    }

    /// 描かれた駒画像を `(key, left, top)` の順に返す。
    #[inline]
    #[must_use]
    pub fn images(&self) -> Vec<(PieceKey, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                Op::Image { key, left, top, .. } => Some((key, left, top)),
                _ => None,
            })
            .collect()
    }

    /// 一辺 `size` ピクセル、原点 `(0, 0)` のサーフェスを生成する。
    #[inline]
    #[must_use]
    pub const fn new(size: f64) -> Self {
        Self {
            ops: Vec::new(),
            origin: PixelPoint::ORIGIN,
            size,
        }
    }

    /// 記録済みの命令を返す。
    #[inline]
    #[must_use]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// 記録済みの命令を取り出し、記録を空にする。
    #[inline]
    pub fn take_ops(&mut self) -> Vec<Op> {
        core::mem::take(&mut self.ops)
    }

    /// ビューポート上の左上位置を設定する。
    #[inline]
    #[must_use]
    pub const fn with_origin(mut self, origin: PixelPoint) -> Self {
        self.origin = origin;
        self
    }
}

impl Surface for Recording {
    type Image = PieceKey;

    #[inline]
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    #[inline]
    fn draw_image(&mut self, image: &PieceKey, left: f64, top: f64, size: f64) {
        self.ops.push(Op::Image {
            key: *image,
            left,
            size,
            top,
        });
    }

    #[inline]
    fn fill_circle(&mut self, center: PixelPoint, radius: f64, paint: &str) {
        self.ops.push(Op::Circle {
            center,
            paint: paint.to_owned(),
            radius,
        });
    }

    #[inline]
    fn fill_rect(&mut self, left: f64, top: f64, size: f64, paint: &str) {
        self.ops.push(Op::Rect {
            left,
            paint: paint.to_owned(),
            size,
            top,
        });
    }

    #[inline]
    fn origin(&self) -> PixelPoint {
        self.origin
    }

    #[inline]
    fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, paint: &str) {
        self.ops.push(Op::Line {
            from,
            paint: paint.to_owned(),
            to,
        });
    }
}
