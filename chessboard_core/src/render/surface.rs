use crate::board::PixelPoint;

/// 描画先（正方形のキャンバス）。ホスト側が実装する。
///
/// 座標はすべてキャンバス左上を原点とするピクセル値。
pub trait Surface {
    /// ホストがデコードした駒画像。
    type Image;

    /// キャンバス全体を消去する。
    fn clear(&mut self);

    /// 画像を `size` 四方に拡大縮小して描く。
    fn draw_image(&mut self, image: &Self::Image, left: f64, top: f64, size: f64);

    /// 塗りつぶした円を描く。
    fn fill_circle(&mut self, center: PixelPoint, radius: f64, paint: &str);

    /// 塗りつぶした正方形を描く。
    fn fill_rect(&mut self, left: f64, top: f64, size: f64, paint: &str);

    /// ビューポート上でのキャンバス左上の位置を返す。
    fn origin(&self) -> PixelPoint;

    /// キャンバスの一辺の長さ（幅 = 高さ）を返す。
    fn size(&self) -> f64;

    /// 線分を描く。
    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, paint: &str);
}
