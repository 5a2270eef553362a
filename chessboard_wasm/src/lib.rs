//! WASM (Canvas) 向けのチェス盤 UI。
//!
//! - `wasm32` ターゲットのみで `wasm-bindgen` / `web-sys` を有効化する。
//! - それ以外のターゲットでは、workspace の `cargo test` / `cargo clippy` を通すためにスタブを提供する。

mod setup;

pub use setup::{SetupError, ensure_square};

#[cfg(target_arch = "wasm32")]
mod wasm32_app {
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    use chessboard_core::assets::{self, ImageCache, LoadError};
    use chessboard_core::board::PixelPoint;
    use chessboard_core::config::Config;
    use chessboard_core::controller::Controller;
    use chessboard_core::logging;
    use chessboard_core::render::surface::Surface;
    use chessboard_core::rules::Standard;
    use js_sys::Promise;
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, MouseEvent,
        Window,
    };

    use crate::setup::{SetupError, ensure_square};

    /// 円の終了角（ラジアン）。
    const FULL_TURN: f64 = core::f64::consts::TAU;

    /// ブラウザ上で動く盤面。
    type Board = Controller<CanvasSurface, Standard>;

    impl From<SetupError> for JsValue {
        fn from(err: SetupError) -> Self {
            JsValue::from_str(&err.to_string())
        }
    }

    /// `<canvas>` と 2D コンテキスト。
    #[derive(Debug)]
    struct CanvasSurface {
        canvas: HtmlCanvasElement,
        context: CanvasRenderingContext2d,
    }

    impl CanvasSurface {
        /// ID でキャンバスを探し、2D コンテキストを取得する。
        fn find(document: &Document, id: &str) -> Result<Self, SetupError> {
            let element = document
                .get_element_by_id(id)
                .ok_or_else(|| SetupError::CanvasNotFound(id.to_owned()))?;
            let canvas = element
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_element| SetupError::NotACanvas(id.to_owned()))?;
            ensure_square(canvas.width(), canvas.height())?;

            let context = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .ok_or(SetupError::NoContext)?
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_object| SetupError::NoContext)?;

            Ok(Self { canvas, context })
        }
    }

    impl Surface for CanvasSurface {
        type Image = HtmlImageElement;

        fn clear(&mut self) {
            let size = self.size();
            self.context.clear_rect(0.0, 0.0, size, size);
        }

        fn draw_image(&mut self, image: &HtmlImageElement, left: f64, top: f64, size: f64) {
            if let Err(err) = self
                .context
                .draw_image_with_html_image_element_and_dw_and_dh(image, left, top, size, size)
            {
                tracing::trace!(error = %describe(&err), src = %image.src(), left, top, "drawImage failed");
            }
        }

        fn fill_circle(&mut self, center: PixelPoint, radius: f64, paint: &str) {
            self.context.set_fill_style(&JsValue::from_str(paint));
            self.context.begin_path();
            if let Err(err) = self.context.arc(center.x, center.y, radius, 0.0, FULL_TURN) {
                tracing::trace!(error = %describe(&err), x = center.x, y = center.y, "arc failed");
            }
            self.context.fill();
        }

        fn fill_rect(&mut self, left: f64, top: f64, size: f64, paint: &str) {
            self.context.set_fill_style(&JsValue::from_str(paint));
            self.context.fill_rect(left, top, size, size);
        }

        fn origin(&self) -> PixelPoint {
            let rect = self.canvas.get_bounding_client_rect();
            PixelPoint::new(rect.left(), rect.top())
        }

        fn size(&self) -> f64 {
            f64::from(self.canvas.width())
        }

        fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, paint: &str) {
            self.context.set_stroke_style(&JsValue::from_str(paint));
            self.context.begin_path();
            self.context.move_to(from.x, from.y);
            self.context.line_to(to.x, to.y);
            self.context.stroke();
        }
    }

    /// `tracing` の出力を `console.log` に流す。
    #[derive(Clone, Copy, Debug, Default)]
    struct ConsoleMakeWriter;

    impl<'writer> MakeWriter<'writer> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'writer self) -> Self::Writer {
            ConsoleWriter::default()
        }
    }

    /// 1イベント分の出力をためて、破棄時に1行として書き出す。
    #[derive(Debug, Default)]
    struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buffer.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buffer);
            web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
        }
    }

    /// 画像の読み込みを開始し、完了で resolve / 失敗で reject する Promise を返す。
    fn request_image(path: &str) -> Result<(HtmlImageElement, Promise), JsValue> {
        let image = HtmlImageElement::new()?;
        let target = image.clone();
        let promise = Promise::new(&mut |resolve, reject| {
            target.set_onload(Some(&resolve));
            target.set_onerror(Some(&reject));
        });
        image.set_src(path);
        Ok((image, promise))
    }

    /// JS 側のエラー値を文字列にする。
    fn describe(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }

    /// 全12種の駒画像を並行して読み込む。1枚でも失敗すれば全体が失敗する。
    async fn load_images(dir: &str) -> Result<ImageCache<HtmlImageElement>, LoadError> {
        // 先にすべての読み込みを開始してから順に待つ。
        let requests: Vec<_> = assets::asset_paths(dir)
            .into_iter()
            .map(|(key, path)| {
                let request = request_image(&path);
                (key, path, request)
            })
            .collect();

        let mut loaded = Vec::with_capacity(requests.len());
        for (key, path, request) in requests {
            let result = match request {
                Ok((image, promise)) => match JsFuture::from(promise).await {
                    Ok(_event) => Ok(image),
                    Err(err) => Err(LoadError::Image {
                        key,
                        path,
                        reason: describe(&err),
                    }),
                },
                Err(err) => Err(LoadError::Image {
                    key,
                    path,
                    reason: describe(&err),
                }),
            };

            let failed = result.is_err();
            loaded.push((key, result));
            if failed {
                break;
            }
        }

        ImageCache::from_loaded(loaded)
    }

    /// `window` にマウスイベントのリスナーを登録する。
    fn listen(
        window: &Window,
        kind: &str,
        board: &Rc<RefCell<Board>>,
        handle: fn(&mut Board, PixelPoint),
    ) -> Result<(), JsValue> {
        let board = Rc::clone(board);
        let callback = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let client = PixelPoint::new(f64::from(event.client_x()), f64::from(event.client_y()));
            match board.try_borrow_mut() {
                Ok(mut controller) => handle(&mut controller, client),
                Err(_busy) => tracing::warn!("pointer event dropped while the board is busy"),
            }
        });

        window.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        // リスナーはページと同じ寿命。
        callback.forget();
        Ok(())
    }

    /// 盤面を起動する。
    ///
    /// - `canvas_id`: 描画先 `<canvas>` の ID（省略時 `chessBoard`）
    /// - `asset_dir`: 駒画像のディレクトリ（省略時 `images`）
    ///
    /// 駒画像がすべて読み込めるまで盤面は描画しない。
    #[wasm_bindgen]
    pub async fn start(canvas_id: Option<String>, asset_dir: Option<String>) -> Result<(), JsValue> {
        let config = Config::with_overrides(canvas_id, asset_dir);
        if logging::init(ConsoleMakeWriter, config.log_level).is_err() {
            web_sys::console::warn_1(&JsValue::from_str("tracing subscriber already installed"));
        }

        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;
        let surface = CanvasSurface::find(&document, &config.canvas_id)?;

        let images = match load_images(&config.asset_dir).await {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(%err, "failed to load piece images");
                return Err(JsValue::from_str(&err.to_string()));
            }
        };

        let board = Rc::new(RefCell::new(Controller::start(
            surface,
            Standard::initial(),
            images,
            config.theme,
        )));

        listen(&window, "mousedown", &board, |controller, client| {
            let outcome = controller.on_pointer_down(client);
            tracing::trace!(?outcome, "mousedown");
        })?;
        listen(&window, "mouseup", &board, |controller, client| {
            let outcome = controller.on_pointer_up(client);
            tracing::trace!(?outcome, "mouseup");
        })?;

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm32_app::start;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm_stub {
    use chessboard_core::config::Config;

    /// 設定を解決するだけで、盤面は起動しない。
    pub fn start(canvas_id: Option<String>, asset_dir: Option<String>) -> Result<Config, String> {
        let config = Config::with_overrides(canvas_id, asset_dir);
        Err(format!(
            "chessboard UI for #{} is available only on wasm32",
            config.canvas_id
        ))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm_stub::start;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::start;

    #[test]
    fn native_start_reports_wasm_only() {
        let result = start(Some("board".to_owned()), None);
        assert_eq!(
            result,
            Err("chessboard UI for #board is available only on wasm32".to_owned())
        );
    }
}
