use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// ログ出力の初期化に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum LoggingError {
    /// すでにグローバルな subscriber が設定されている。
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// JSON 形式の `tracing` subscriber をグローバルに設定する。
///
/// `wasm32-unknown-unknown` では時刻を取得できないため、タイムスタンプは出力しない。
///
/// # Errors
///
/// すでに subscriber が設定済みの場合、`LoggingError::AlreadyInitialized` を返す。
#[inline]
pub fn init<W>(make_writer: W, max_level: Level) -> Result<(), LoggingError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let installed = tracing_subscriber::fmt()
        .json()
        .without_time()
        .with_max_level(max_level)
        .with_writer(make_writer)
        .try_init();

    match installed {
        Ok(()) => Ok(()),
        Err(_err) => Err(LoggingError::AlreadyInitialized),
    }
}
