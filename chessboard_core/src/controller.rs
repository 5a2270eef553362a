use crate::assets::ImageCache;
use crate::board::coords::cell_at;
use crate::board::{Cell, Piece, PixelPoint, Square};
use crate::config::Theme;
use crate::render::board::Renderer;
use crate::render::surface::Surface;
use crate::rules::types::Rules;

/// 持ち上げ中の駒。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Drag {
    /// 持ち上げたセル（盤外の場合もある）。
    pub origin: Cell,
    /// 持ち上げた駒（空マスなら `None`）。
    pub piece: Option<Piece>,
}

/// ポインタ操作の状態。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum Gesture {
    /// 駒を持ち上げている。
    Dragging(Drag),
    /// 操作なし。
    #[default]
    Idle,
}

/// ポインタ押下の結果。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PickupOutcome {
    /// すでに持ち上げ中のため無視した。
    Ignored,
    /// 持ち上げた。
    PickedUp {
        /// 表示した合法手の数。
        hints: usize,
    },
}

/// ポインタ解放の結果。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum DropOutcome {
    /// 駒が無い、または盤外のため着手せずに終えた。
    Cancelled,
    /// 持ち上げ中でないため無視した。
    Ignored,
    /// 着手した。
    Moved {
        /// 移動元。
        from: Square,
        /// 移動先。
        to: Square,
    },
    /// ルールエンジンが着手を拒否した。
    Rejected {
        /// 移動元。
        from: Square,
        /// 移動先。
        to: Square,
    },
}

/// ポインタ操作を駒の持ち上げ・着手に変換し、盤面を描き直す。
///
/// 描画先、ルールエンジン、画像キャッシュ、操作状態を所有する。
/// 画像キャッシュは全12種の読み込みに成功した場合にしか得られないため、
/// 読み込み前に描画することはできない。
#[derive(Debug)]
pub struct Controller<S: Surface, R: Rules> {
    /// 操作状態。
    gesture: Gesture,
    /// 駒画像。
    images: ImageCache<S::Image>,
    /// 盤面描画。
    renderer: Renderer,
    /// ルールエンジン。
    rules: R,
    /// 描画先。
    surface: S,
}

impl<S: Surface, R: Rules> Controller<S, R> {
    /// ビューポート座標のポインタ位置をセルへ変換する。
    fn cell_under(&self, client: PixelPoint) -> Cell {
        let local = client.offset_from(self.surface.origin());
        cell_at(local, Renderer::square_size(&self.surface))
    }

    /// ルールエンジンの最新局面で盤面全体を描き直す。
    fn draw_current(&mut self) {
        let snapshot = self.rules.position();
        self.renderer
            .draw_board(&mut self.surface, &snapshot, &self.images);
    }

    /// 現在の操作状態を返す。
    #[inline]
    #[must_use]
    pub const fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// ポインタ押下（Idle → Dragging）。
    ///
    /// 駒の有無にかかわらず持ち上げ元のセルを記録し、盤面を描き直してから合法手を重ねる。
    /// 持ち上げ中の再押下は無視する。
    #[inline]
    pub fn on_pointer_down(&mut self, client: PixelPoint) -> PickupOutcome {
        if let Gesture::Dragging(drag) = self.gesture {
            tracing::debug!(origin = ?drag.origin, "pickup ignored while dragging");
            return PickupOutcome::Ignored;
        }

        let origin = self.cell_under(client);
        let snapshot = self.rules.position();
        let piece = origin.square().and_then(|square| snapshot.piece_at(square));
        self.gesture = Gesture::Dragging(Drag { origin, piece });

        self.renderer
            .draw_board(&mut self.surface, &snapshot, &self.images);
        let hints = self
            .renderer
            .draw_legal_moves(&mut self.surface, &self.rules, origin);

        tracing::debug!(?origin, ?piece, hints, "picked up");
        PickupOutcome::PickedUp { hints }
    }

    /// ポインタ解放（Dragging → Idle）。
    ///
    /// 着手の成否にかかわらず操作状態を破棄し、最新局面で盤面を描き直す。
    /// Idle での解放は無視する。
    #[inline]
    pub fn on_pointer_up(&mut self, client: PixelPoint) -> DropOutcome {
        let drag = match core::mem::take(&mut self.gesture) {
            Gesture::Dragging(value) => value,
            Gesture::Idle => return DropOutcome::Ignored,
        };

        let destination = self.cell_under(client);
        let outcome = self.resolve(drag, destination);
        self.draw_current();
        outcome
    }

    /// ルールエンジンを返す。
    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &R {
        &self.rules
    }

    /// 持ち上げた駒をセルへ置く。
    fn resolve(&mut self, drag: Drag, destination: Cell) -> DropOutcome {
        let (from, to) = match (drag.origin.square(), destination.square()) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                tracing::debug!(origin = ?drag.origin, ?destination, "drop off the board");
                return DropOutcome::Cancelled;
            }
        };
        if drag.piece.is_none() {
            tracing::debug!(%from, %to, "nothing was picked up");
            return DropOutcome::Cancelled;
        }

        match self.rules.submit_move(from, to) {
            Ok(()) => {
                tracing::debug!(%from, %to, "moved");
                DropOutcome::Moved { from, to }
            }
            Err(err) => {
                tracing::warn!(%err, "move rejected");
                DropOutcome::Rejected { from, to }
            }
        }
    }

    /// 初期局面を描画して操作を開始する。
    #[inline]
    pub fn start(surface: S, rules: R, images: ImageCache<S::Image>, theme: Theme) -> Self {
        let mut controller = Self {
            gesture: Gesture::Idle,
            images,
            renderer: Renderer::new(theme),
            rules,
            surface,
        };
        controller.draw_current();
        tracing::info!("board ready");
        controller
    }

    /// 描画先を返す。
    #[inline]
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// 描画先を可変で返す。
    #[inline]
    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
