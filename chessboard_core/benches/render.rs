//! `render` と座標変換の性能計測。

use core::hint::black_box;
use criterion::Criterion;
use chessboard_core::assets::{self, ImageCache, PieceKey};
use chessboard_core::board::PixelPoint;
use chessboard_core::board::coords::cell_at;
use chessboard_core::render::{Recording, Renderer};
use chessboard_core::rules::Standard;
use chessboard_core::rules::types::Rules as _;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 全12種がそろった画像キャッシュを返す（画像の代わりにキーを持つ）。
fn key_cache() -> Option<ImageCache<PieceKey>> {
    assets::preload(&assets::asset_paths("images"), |key, _path| Ok(key)).ok()
}

/// `cell_at` を計測する。
fn bench_cell_at(criterion: &mut Criterion) {
    criterion.bench_function("board/cell_at", |bench| {
        bench.iter(|| black_box(cell_at(black_box(PixelPoint::new(367.5, 281.25)), 80.0)));
    });
}

/// 初期局面での `Renderer::draw_board` を計測する。
fn bench_draw_board(criterion: &mut Criterion) {
    let images = match key_cache() {
        Some(value) => value,
        None => return,
    };
    let snapshot = Standard::initial().position();
    let renderer = Renderer::default();
    let mut surface = Recording::new(640.0);

    criterion.bench_function("render/draw_board_initial", |bench| {
        bench.iter(|| {
            renderer.draw_board(&mut surface, black_box(&snapshot), &images);
            black_box(surface.take_ops())
        });
    });
}

/// `Renderer::draw_legal_moves` を計測する。
fn bench_draw_legal_moves(criterion: &mut Criterion) {
    let rules = Standard::initial();
    let renderer = Renderer::default();
    let mut surface = Recording::new(640.0);
    let origin = cell_at(PixelPoint::new(520.0, 600.0), 80.0);

    criterion.bench_function("render/draw_legal_moves_g1", |bench| {
        bench.iter(|| {
            black_box(renderer.draw_legal_moves(&mut surface, &rules, origin));
            black_box(surface.take_ops())
        });
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_cell_at(&mut criterion);
    bench_draw_board(&mut criterion);
    bench_draw_legal_moves(&mut criterion);

    criterion.final_summary();
}
