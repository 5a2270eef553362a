/// `shakmaty` による標準チェスのルールエンジン。
pub mod standard;
pub mod types;

pub type FenError = standard::FenError;
pub type MoveError = types::MoveError;
pub type Standard = standard::Standard;
