//! 起動時の前提条件（ターゲット非依存）。

/// 起動を中止する環境・設定の不備。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SetupError {
    /// 指定 ID の要素が無い。
    #[error("canvas element #{0} not found")]
    CanvasNotFound(String),
    /// 2D 描画コンテキストを取得できない。
    #[error("failed to get a 2d drawing context")]
    NoContext,
    /// `document` が無い。
    #[error("document is not available")]
    NoDocument,
    /// `window` が無い。
    #[error("window is not available")]
    NoWindow,
    /// 指定 ID の要素がキャンバスではない。
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    /// キャンバスが正方形ではない。
    #[error("canvas must be square, got {width}x{height}")]
    NotSquare {
        /// 高さ（ピクセル）。
        height: u32,
        /// 幅（ピクセル）。
        width: u32,
    },
}

/// キャンバスが空でない正方形であることを確認し、一辺の長さを返す。
///
/// # Errors
///
/// 幅と高さが異なる、または 0 の場合に `SetupError::NotSquare` を返す。
pub fn ensure_square(width: u32, height: u32) -> Result<u32, SetupError> {
    if width != height || width == 0 {
        return Err(SetupError::NotSquare { height, width });
    }
    Ok(width)
}

#[cfg(test)]
mod tests {
    use super::{SetupError, ensure_square};

    #[test]
    fn square_canvas_is_accepted() {
        assert_eq!(ensure_square(640, 640), Ok(640));
    }

    #[test]
    fn non_square_or_empty_canvas_is_rejected() {
        assert_eq!(
            ensure_square(640, 480),
            Err(SetupError::NotSquare {
                height: 480,
                width: 640,
            })
        );
        assert!(ensure_square(0, 0).is_err());
    }

    #[test]
    fn messages_name_the_canvas() {
        assert_eq!(
            SetupError::CanvasNotFound("chessBoard".to_owned()).to_string(),
            "canvas element #chessBoard not found"
        );
    }
}
