//! Interactive chessboard core.
//!
//! このクレートはピクセル座標・グリッド座標・代数表記の変換を行う `board`、
//! 盤面と合法手を描く `render`、ポインタ操作を着手に変換する `controller` を提供します。
//! ルール判定は `rules` を通じて外部のルールエンジン（`shakmaty`）に委譲します。
//! UI（`wasm`）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// 駒画像のキーと画像キャッシュを提供するモジュール。
pub mod assets;

/// 盤面の座標系と局面スナップショットを提供するモジュール。
pub mod board;

/// 起動設定と配色を提供するモジュール。
pub mod config;

/// ポインタ操作の状態遷移を提供するモジュール。
pub mod controller;

/// `tracing` の出力設定を提供するモジュール。
pub mod logging;

/// 描画先の抽象と盤面・合法手の描画を提供するモジュール。
pub mod render;

/// ルールエンジンとの境界を提供するモジュール。
pub mod rules;
