use crate::board::{Color, Snapshot, Square};

/// 着手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum MoveError {
    /// `from` から `to` への合法手が無い。
    #[error("illegal move {from}{to}")]
    Illegal {
        /// 移動元。
        from: Square,
        /// 移動先。
        to: Square,
    },
}

/// 盤面と合法性の唯一の権威となるルールエンジン。
///
/// 描画・操作側は合法性を判定せず、すべてこのトレイトに委譲する。
pub trait Rules {
    /// 指定マスの駒が移動できるマスを返す（駒が無い、手番でない場合は空）。
    fn legal_destinations(&self, from: Square) -> Vec<Square>;

    /// 現在の局面を新しく生成して返す。
    fn position(&self) -> Snapshot;

    /// 手番を返す。
    fn side_to_move(&self) -> Color;

    /// `from` から `to` への着手を適用する。
    ///
    /// # Errors
    ///
    /// 合法手でない場合は `MoveError::Illegal` を返し、局面は変化しない。
    fn submit_move(&mut self, from: Square, to: Square) -> Result<(), MoveError>;
}
