use core::fmt;
use std::collections::HashMap;

use crate::board::{Color, Piece, Role};

/// 駒画像のキー（種類と色の組）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PieceKey {
    /// 色。
    pub color: Color,
    /// 種類。
    pub role: Role,
}

impl PieceKey {
    /// 全12種のキー（黒6種、白6種）。
    pub const ALL: [Self; 12] = [
        Self::new(Color::Black, Role::Pawn),
        Self::new(Color::Black, Role::Rook),
        Self::new(Color::Black, Role::Knight),
        Self::new(Color::Black, Role::Bishop),
        Self::new(Color::Black, Role::Queen),
        Self::new(Color::Black, Role::King),
        Self::new(Color::White, Role::Pawn),
        Self::new(Color::White, Role::Rook),
        Self::new(Color::White, Role::Knight),
        Self::new(Color::White, Role::Bishop),
        Self::new(Color::White, Role::Queen),
        Self::new(Color::White, Role::King),
    ];

    /// 画像ファイル名（拡張子なし、例: `pawn-b`）を返す。
    #[inline]
    #[must_use]
    pub fn file_stem(self) -> String {
        format!("{}-{}", self.role.name(), self.color.symbol())
    }

    /// 画像の検索キー（例: `p-b`）を返す。
    #[inline]
    #[must_use]
    pub fn name(self) -> String {
        format!("{}-{}", self.role.symbol(), self.color.symbol())
    }

    /// 色と種類からキーを生成する。
    #[inline]
    #[must_use]
    pub const fn new(color: Color, role: Role) -> Self {
        Self { color, role }
    }
}

impl From<Piece> for PieceKey {
    #[inline]
    fn from(piece: Piece) -> Self {
        Self::new(piece.color, piece.role)
    }
}

impl fmt::Display for PieceKey {
    /// `name()` と同じ `p-b` 形式で書き出す。
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name())
    }
}

/// 駒画像の読み込みに失敗した理由。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    /// 画像の読み込み・デコードに失敗した。
    #[error("failed to load {key} from {path}: {reason}")]
    Image {
        /// 対象のキー。
        key: PieceKey,
        /// 読み込み元。
        path: String,
        /// ホストが報告した理由。
        reason: String,
    },
    /// 読み込み結果にキーが含まれていない。
    #[error("no image was loaded for {key}")]
    Missing {
        /// 欠けているキー。
        key: PieceKey,
    },
}

/// 駒画像のパス一覧（`{dir}/{stem}.svg`）を返す。
#[inline]
#[must_use]
pub fn asset_paths(dir: &str) -> Vec<(PieceKey, String)> {
    PieceKey::ALL
        .iter()
        .map(|key| (*key, format!("{dir}/{}.svg", key.file_stem())))
        .collect()
}

/// デコード済みの駒画像。全12種がそろっている場合にのみ生成できる。
///
/// 起動時に1度だけ構築し、以降は読み取り専用。
#[derive(Clone, Debug)]
pub struct ImageCache<I> {
    /// キーごとの画像。
    images: HashMap<PieceKey, I>,
}

impl<I> ImageCache<I> {
    /// テスト用に、欠けのあるキャッシュを生成する。
    #[cfg(test)]
    #[inline]
    #[must_use]
    pub(crate) fn from_entries<T: IntoIterator<Item = (PieceKey, I)>>(entries: T) -> Self {
        Self {
            images: entries.into_iter().collect(),
        }
    }

    /// 読み込み結果からキャッシュを構築する。
    ///
    /// 1件でも失敗があればバッチ全体を失敗とし、以降の結果は読まない。
    ///
    /// # Errors
    ///
    /// - `LoadError::Image`: いずれかの読み込みが失敗した場合（最初の失敗）
    /// - `LoadError::Missing`: 全12種のいずれかが結果に含まれない場合
    #[inline]
    pub fn from_loaded<T>(results: T) -> Result<Self, LoadError>
    where
        T: IntoIterator<Item = (PieceKey, Result<I, LoadError>)>,
    {
        let mut images = HashMap::with_capacity(PieceKey::ALL.len());
        for (key, result) in results {
            match result {
                Ok(image) => {
                    images.insert(key, image);
                }
                Err(err) => return Err(err),
            }
        }

        match PieceKey::ALL.iter().find(|key| !images.contains_key(*key)) {
            Some(key) => Err(LoadError::Missing { key: *key }),
            None => Ok(Self { images }),
        }
    }

    /// 指定キーの画像を返す。
    #[inline]
    #[must_use]
    pub fn get(&self, key: PieceKey) -> Option<&I> {
        self.images.get(&key)
    }

    /// 画像の数を返す。
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// 画像が1つも無いかを返す。
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// パス一覧を順に読み込み、キャッシュを構築する（同期ホスト向け）。
///
/// # Errors
///
/// `load` が最初に返した `LoadError`、または欠けているキーの `LoadError::Missing`。
#[inline]
pub fn preload<I, F>(paths: &[(PieceKey, String)], mut load: F) -> Result<ImageCache<I>, LoadError>
where
    F: FnMut(PieceKey, &str) -> Result<I, LoadError>,
{
    let cache = ImageCache::from_loaded(paths.iter().map(|entry| {
        let (key, path) = entry;
        (*key, load(*key, path))
    }));

    match cache {
        Ok(value) => {
            tracing::debug!(images = value.len(), "piece images loaded");
            Ok(value)
        }
        Err(err) => {
            tracing::error!(%err, "failed to load piece images");
            Err(err)
        }
    }
}
