use tracing::Level;

/// 盤面描画に使う色（CSS のカラー文字列）。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Theme {
    /// 暗いマス。
    pub dark: &'static str,
    /// グリッド線。
    pub grid: &'static str,
    /// 合法手のマスに重ねる点。
    pub hint_dot: &'static str,
    /// 合法手のマス全体に重ねる塗り。
    pub hint_square: &'static str,
    /// 明るいマス。
    pub light: &'static str,
}

impl Theme {
    /// 既定の配色（緑系）。
    ///
    /// a8 を含む「段と列の偶奇が一致するマス」を明るい `#eeeed2` で塗る。
    /// このマスを `#769656` で塗る配色とは明暗が逆になる。
    pub const CLASSIC: Self = Self {
        dark: "#769656",
        grid: "#000000",
        hint_dot: "rgba(0, 0, 0, 0.5)",
        hint_square: "rgba(0, 0, 0, 0.3)",
        light: "#eeeed2",
    };
}

impl Default for Theme {
    #[inline]
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// ホスト（ブラウザ）側の起動設定。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// 駒画像を置くディレクトリ。
    pub asset_dir: String,
    /// 描画先キャンバスの要素 ID。
    pub canvas_id: String,
    /// ログの最大レベル。
    pub log_level: Level,
    /// 配色。
    pub theme: Theme,
}

impl Config {
    /// 既定の画像ディレクトリ。
    pub const DEFAULT_ASSET_DIR: &'static str = "images";

    /// 既定のキャンバス要素 ID。
    pub const DEFAULT_CANVAS_ID: &'static str = "chessBoard";

    /// 空でない指定値で既定値を上書きした設定を返す。
    #[inline]
    #[must_use]
    pub fn with_overrides(canvas_id: Option<String>, asset_dir: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(id) = canvas_id.filter(|value| !value.is_empty()) {
            config.canvas_id = id;
        }
        if let Some(dir) = asset_dir.filter(|value| !value.is_empty()) {
            config.asset_dir = dir.trim_end_matches('/').to_owned();
        }
        config
    }
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            asset_dir: Self::DEFAULT_ASSET_DIR.to_owned(),
            canvas_id: Self::DEFAULT_CANVAS_ID.to_owned(),
            log_level: Level::DEBUG,
            theme: Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, Theme};
    use crate::render::board::is_light;

    #[test]
    fn defaults_match_the_static_page() {
        let config = Config::default();
        assert_eq!(config.canvas_id, "chessBoard");
        assert_eq!(config.asset_dir, "images");
        assert_eq!(config.theme, Theme::CLASSIC);
    }

    #[test]
    fn empty_overrides_keep_defaults() {
        let config = Config::with_overrides(Some(String::new()), None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn overrides_replace_defaults_and_trim_trailing_slash() {
        let config = Config::with_overrides(Some("board".to_owned()), Some("static/pieces/".to_owned()));
        assert_eq!(config.canvas_id, "board");
        assert_eq!(config.asset_dir, "static/pieces");
    }

    /// a8（偶奇が一致するマス）は明るい色、b8 は暗い色になる。
    #[test]
    fn classic_paints_a8_light() {
        assert_eq!(Theme::CLASSIC.light, "#eeeed2");
        assert_eq!(Theme::CLASSIC.dark, "#769656");
        assert!(is_light(0, 0), "a8");
        assert!(!is_light(0, 1), "b8");
        assert!(is_light(7, 7), "h1");
    }
}
