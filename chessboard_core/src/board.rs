/// ピクセル座標とグリッドセルの変換。
pub mod coords;
/// 8×8 の局面スナップショット。
pub mod snapshot;
/// マス（グリッド座標と代数表記）。
pub mod square;
pub mod types;

pub type Cell = coords::Cell;
pub type Color = types::Color;
pub type ParseSquareError = square::ParseSquareError;
pub type Piece = types::Piece;
pub type PixelPoint = coords::PixelPoint;
pub type Role = types::Role;
pub type Snapshot = snapshot::Snapshot;
pub type Square = square::Square;
