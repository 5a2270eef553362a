/// 盤面（グリッド、マス、駒）の描画。
pub mod board;
/// 合法手の表示。
pub mod overlay;
/// 描画命令を記録するだけのサーフェス。
pub mod recording;
pub mod surface;

pub type Op = recording::Op;
pub type Recording = recording::Recording;
pub type Renderer = board::Renderer;
