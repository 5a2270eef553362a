use crate::board::{Cell, PixelPoint};
use crate::render::board::{Renderer, square_origin};
use crate::render::surface::Surface;
use crate::rules::types::Rules;

/// 合法手の点の半径（マスの一辺に対する比）。
const HINT_DOT_DIVISOR: f64 = 6.0;

impl Renderer {
    /// `origin` の駒の合法な移動先を、現在の盤面の上に重ねて描く。
    ///
    /// 盤面自体は消去・再描画しない。合法性の判定はすべて `rules` に委ね、
    /// 返された移動先はそのまま描く。描いた移動先の数を返す。
    #[inline]
    pub fn draw_legal_moves<S: Surface, R: Rules>(
        &self,
        surface: &mut S,
        rules: &R,
        origin: Cell,
    ) -> usize {
        let from = match origin.square() {
            Some(value) => value,
            None => return 0,
        };

        let size = Self::square_size(surface);
        let radius = size / HINT_DOT_DIVISOR;
        let destinations = rules.legal_destinations(from);

        for to in &destinations {
            let (left, top) = square_origin(*to, size);
            surface.fill_rect(left, top, size, self.theme().hint_square);

            let center = PixelPoint::new(left + size / 2.0, top + size / 2.0);
            surface.fill_circle(center, radius, self.theme().hint_dot);
        }

        tracing::trace!(%from, count = destinations.len(), "legal moves drawn");
        destinations.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Cell, PixelPoint, Square};
    use crate::config::Theme;
    use crate::render::board::Renderer;
    use crate::render::recording::{Op, Recording};
    use crate::rules::standard::Standard;
    use crate::rules::types::Rules as _;

    const SIZE: f64 = 80.0;

    fn cell(text: &str) -> Cell {
        Square::from_algebraic(text).map_or(Cell::OFF_BOARD, Square::cell)
    }

    #[test]
    fn one_indicator_per_destination() {
        let rules = Standard::initial();
        let mut surface = Recording::new(640.0);

        for (origin, expected) in [("e2", 2_usize), ("g1", 2), ("b1", 2), ("e1", 0), ("e7", 0), ("e4", 0)] {
            let drawn = Renderer::default().draw_legal_moves(&mut surface, &rules, cell(origin));
            let from = Square::from_algebraic(origin).map(|square| rules.legal_destinations(square).len());
            assert_eq!(drawn, expected, "origin={origin}");
            assert_eq!(from, Ok(expected), "origin={origin}");
            assert_eq!(surface.circles(), expected, "origin={origin}");
            surface.take_ops();
        }
    }

    #[test]
    fn indicator_fills_square_and_centres_dot() {
        let rules = Standard::initial();
        let mut surface = Recording::new(640.0);
        Renderer::new(Theme::CLASSIC).draw_legal_moves(&mut surface, &rules, cell("g1"));

        // g1 から f3 (5, 5) と h3 (7, 5)。
        assert!(surface.ops().contains(&Op::Rect {
            left: 5.0 * SIZE,
            paint: Theme::CLASSIC.hint_square.to_owned(),
            size: SIZE,
            top: 5.0 * SIZE,
        }));
        assert!(surface.ops().contains(&Op::Circle {
            center: PixelPoint::new(7.5 * SIZE, 5.5 * SIZE),
            paint: Theme::CLASSIC.hint_dot.to_owned(),
            radius: SIZE / 6.0,
        }));
        assert!(!surface.ops().contains(&Op::Clear), "overlay must not clear the board");
    }

    #[test]
    fn off_board_origin_draws_nothing() {
        let rules = Standard::initial();
        let mut surface = Recording::new(640.0);
        let drawn = Renderer::default().draw_legal_moves(&mut surface, &rules, Cell::new(8, 2));
        assert_eq!(drawn, 0);
        assert!(surface.ops().is_empty());
    }
}
