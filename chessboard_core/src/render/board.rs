use crate::assets::{ImageCache, PieceKey};
use crate::board::{PixelPoint, Snapshot, Square};
use crate::config::Theme;
use crate::render::surface::Surface;

/// 局面スナップショットから盤面を描画する。
///
/// 呼び出し間で状態を持たない（画像キャッシュを読むのみ）。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Renderer {
    /// 配色。
    theme: Theme,
}

impl Renderer {
    /// キャンバス全体を描き直す。
    ///
    /// 消去 → 縦横8本ずつのグリッド線 → 64マスの塗り → 駒画像の順に描く。
    /// キャッシュに無い駒は描かずに飛ばす。
    #[inline]
    pub fn draw_board<S: Surface>(
        &self,
        surface: &mut S,
        snapshot: &Snapshot,
        images: &ImageCache<S::Image>,
    ) {
        let size = Self::square_size(surface);

        surface.clear();
        self.draw_grid(surface, size);
        self.fill_squares(surface, size);

        for (square, piece) in snapshot.pieces() {
            let key = PieceKey::from(piece);
            match images.get(key) {
                Some(image) => {
                    let (left, top) = square_origin(square, size);
                    surface.draw_image(image, left, top, size);
                }
                None => tracing::trace!(%key, %square, "no image cached, skipped"),
            }
        }
    }

    /// グリッド線を描く。
    fn draw_grid<S: Surface>(&self, surface: &mut S, size: f64) {
        let board_px = surface.size();

        for line in 1..=Square::BOARD_LEN {
            let x = f64::from(line) * size;
            surface.stroke_line(
                PixelPoint::new(x, 0.0),
                PixelPoint::new(x, board_px),
                self.theme.grid,
            );
        }
        for line in 1..=Square::BOARD_LEN {
            let y = f64::from(line) * size;
            surface.stroke_line(
                PixelPoint::new(0.0, y),
                PixelPoint::new(board_px, y),
                self.theme.grid,
            );
        }
    }

    /// 64マスを市松模様に塗る。
    fn fill_squares<S: Surface>(&self, surface: &mut S, size: f64) {
        for square in Square::all() {
            let paint = if is_light(square.y(), square.x()) {
                self.theme.light
            } else {
                self.theme.dark
            };
            let (left, top) = square_origin(square, size);
            surface.fill_rect(left, top, size, paint);
        }
    }

    /// 配色を指定して生成する。
    #[inline]
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// 1マスの一辺（キャンバスの一辺 / 8）を返す。
    #[inline]
    #[must_use]
    pub fn square_size<S: Surface>(surface: &S) -> f64 {
        surface.size() / f64::from(Square::BOARD_LEN)
    }

    /// 配色を返す。
    #[inline]
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }
}

/// 段と列の偶奇が一致するマスは明るい。
#[inline]
#[must_use]
pub const fn is_light(rank: u8, file: u8) -> bool {
    matches!(
        (rank.checked_rem(2), file.checked_rem(2)),
        (Some(0), Some(0)) | (Some(1), Some(1))
    )
}

/// マスの左上のピクセル座標を返す。
pub(crate) fn square_origin(square: Square, size: f64) -> (f64, f64) {
    (f64::from(square.x()) * size, f64::from(square.y()) * size)
}

#[cfg(test)]
mod tests {
    use super::{Renderer, is_light};
    use crate::assets::{ImageCache, PieceKey};
    use crate::board::{Color, Piece, Role, Snapshot, Square};
    use crate::config::Theme;
    use crate::render::recording::{Op, Recording};

    const BOARD_PX: f64 = 640.0;
    const SIZE: f64 = 80.0;

    fn full_cache() -> ImageCache<PieceKey> {
        ImageCache::from_entries(PieceKey::ALL.iter().map(|key| (*key, *key)))
    }

    #[test]
    fn parity_matches_reference_checkerboard() {
        // a8 (0, 0) から始まる標準の市松模様。
        let reference = [
            "LDLDLDLD", "DLDLDLDL", "LDLDLDLD", "DLDLDLDL", "LDLDLDLD", "DLDLDLDL", "LDLDLDLD",
            "DLDLDLDL",
        ];
        for (rank, row) in (0_u8..8).zip(reference) {
            for (file, expected) in (0_u8..8).zip(row.chars()) {
                assert_eq!(
                    is_light(rank, file),
                    expected == 'L',
                    "rank={rank} file={file}"
                );
            }
        }
    }

    #[test]
    fn board_is_cleared_then_gridded_then_filled() {
        let mut surface = Recording::new(BOARD_PX);
        Renderer::new(Theme::CLASSIC).draw_board(&mut surface, &Snapshot::empty(), &full_cache());

        let ops = surface.ops();
        assert_eq!(ops.len(), 1 + 16 + 64);
        assert_eq!(ops.first(), Some(&Op::Clear));

        let lines = ops.iter().skip(1).take(16);
        assert!(lines.clone().all(|op| matches!(op, Op::Line { .. })));
        let last_vertical = ops.get(8);
        assert!(
            matches!(last_vertical, Some(Op::Line { from, to, .. }) if from.x == BOARD_PX && to.y == BOARD_PX),
            "got={last_vertical:?}"
        );

        let fills: Vec<&Op> = ops.iter().skip(17).collect();
        assert_eq!(fills.len(), 64);
        assert_eq!(
            fills.first(),
            Some(&&Op::Rect {
                left: 0.0,
                paint: Theme::CLASSIC.light.to_owned(),
                size: SIZE,
                top: 0.0,
            })
        );
        assert_eq!(
            fills.get(1),
            Some(&&Op::Rect {
                left: SIZE,
                paint: Theme::CLASSIC.dark.to_owned(),
                size: SIZE,
                top: 0.0,
            })
        );
    }

    #[test]
    fn single_piece_is_drawn_once_at_its_square() {
        let d4 = Square::from_xy(3, 4);
        assert_eq!(d4.map(|square| square.to_string()), Some("d4".to_owned()));
        let snapshot = d4.map_or_else(Snapshot::empty, |square| {
            Snapshot::empty().with_piece(square, Piece::new(Color::White, Role::Queen))
        });

        let mut surface = Recording::new(BOARD_PX);
        Renderer::default().draw_board(&mut surface, &snapshot, &full_cache());

        assert_eq!(
            surface.images(),
            vec![(PieceKey::new(Color::White, Role::Queen), 3.0 * SIZE, 4.0 * SIZE)]
        );
        let scaled = surface
            .ops()
            .iter()
            .any(|op| matches!(*op, Op::Image { size, .. } if size == SIZE));
        assert!(scaled, "piece must be scaled to exactly one square");
    }

    #[test]
    fn missing_image_is_skipped_without_aborting_the_frame() {
        let queen = PieceKey::new(Color::White, Role::Queen);
        let partial = ImageCache::from_entries(
            PieceKey::ALL
                .iter()
                .filter(|key| **key != queen)
                .map(|key| (*key, *key)),
        );
        let snapshot = match (Square::from_xy(0, 0), Square::from_xy(7, 7)) {
            (Some(a8), Some(h1)) => Snapshot::empty()
                .with_piece(a8, Piece::new(Color::White, Role::Queen))
                .with_piece(h1, Piece::new(Color::Black, Role::King)),
            _ => Snapshot::empty(),
        };

        let mut surface = Recording::new(BOARD_PX);
        Renderer::default().draw_board(&mut surface, &snapshot, &partial);

        assert_eq!(
            surface.images(),
            vec![(PieceKey::new(Color::Black, Role::King), 7.0 * SIZE, 7.0 * SIZE)]
        );
    }

    #[test]
    fn redraw_is_deterministic() {
        let snapshot = Square::from_xy(4, 6).map_or_else(Snapshot::empty, |e2| {
            Snapshot::empty().with_piece(e2, Piece::new(Color::White, Role::Pawn))
        });
        let renderer = Renderer::default();
        let cache = full_cache();

        let mut surface = Recording::new(BOARD_PX);
        renderer.draw_board(&mut surface, &snapshot, &cache);
        let first = surface.take_ops();
        renderer.draw_board(&mut surface, &snapshot, &cache);
        assert_eq!(surface.take_ops(), first);
    }
}
