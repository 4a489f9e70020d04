//! Browser platform: 2D canvas surface, key listeners and the tick timer

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, KeyboardEvent};

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::game::Game;
use crate::input::Action;
use crate::sprites::SpriteSheet;
use crate::surface::{Color, Rect, Surface, TextStyle};

fn js_error(what: &str, err: JsValue) -> GameError {
    GameError::SurfaceUnavailable(format!("{what}: {err:?}"))
}

/// Canvas 2D context with the sprite sheet image
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    sheet: HtmlImageElement,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`. Alerts the user when the browser
    /// can't provide one.
    pub fn new(canvas: &HtmlCanvasElement, sheet: HtmlImageElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| js_error("get_context", e))?
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok());
        let Some(ctx) = ctx else {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(
                    "Canvas not supported. Please download a modern browser.",
                );
            }
            return Err(GameError::SurfaceUnavailable(
                "no 2d context on canvas".to_string(),
            ));
        };
        Ok(Self {
            ctx,
            sheet,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn draw_sprite(&mut self, src: Rect, dest: Rect) {
        let result = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &self.sheet,
                src.x as f64,
                src.y as f64,
                src.w as f64,
                src.h as f64,
                dest.x.floor() as f64,
                dest.y.floor() as f64,
                dest.w as f64,
                dest.h as f64,
            );
        if let Err(e) = result {
            log::warn!("draw_image failed: {:?}", e);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.ctx.set_font(&style.font);
        self.ctx.set_fill_style_str(&style.color.to_css());
        self.ctx.set_text_align(style.align.as_str());
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}

/// Load an image and wait for it to decode
async fn load_image(url: &str) -> Result<HtmlImageElement> {
    let image = HtmlImageElement::new().map_err(|e| js_error("image", e))?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(url);
    JsFuture::from(promise)
        .await
        .map_err(|e| js_error(&format!("loading {url}"), e))?;
    image.set_onload(None);
    image.set_onerror(None);
    Ok(image)
}

/// Game plus the surface it draws on
struct Runner {
    game: Game,
    surface: CanvasSurface,
}

/// Boot the game on the configured canvas and start ticking
pub async fn run(mut config: GameConfig) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| GameError::SurfaceUnavailable("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| GameError::SurfaceUnavailable("no document".into()))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(&config.canvas_id)
        .ok_or_else(|| GameError::SurfaceUnavailable(format!("no #{} element", config.canvas_id)))?
        .dyn_into()
        .map_err(|_| GameError::SurfaceUnavailable(format!("#{} is not a canvas", config.canvas_id)))?;

    let sheet = load_image(&config.sprite_sheet_url).await?;
    log::info!("Sprite sheet loaded from {}", config.sprite_sheet_url);
    let surface = CanvasSurface::new(&canvas, sheet)?;

    config.seed = js_sys::Date::now() as u64;
    let tick_ms = config.tick_ms;
    let game = Game::new(config, SpriteSheet::axian(), surface.width(), surface.height());
    let runner = Rc::new(RefCell::new(Runner { game, surface }));

    bind_keys(&window, &runner)?;
    schedule_tick(runner, tick_ms);
    Ok(())
}

/// Bound keys update the input snapshot and never reach the page
fn bind_keys(window: &web_sys::Window, runner: &Rc<RefCell<Runner>>) -> Result<()> {
    for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
        let runner = runner.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            // Older browsers only report the numeric code
            let action = Action::from_key(&event.key())
                .or_else(|| Action::from_key_code(event.key_code()));
            let Some(action) = action else {
                return;
            };
            runner.borrow_mut().game.input_mut().set(action, pressed);
            event.prevent_default();
        });
        window
            .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
            .map_err(|e| js_error(event_name, e))?;
        closure.forget();
    }
    Ok(())
}

fn schedule_tick(runner: Rc<RefCell<Runner>>, tick_ms: i32) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move || {
        let result = {
            let mut r = runner.borrow_mut();
            let Runner { game, surface } = &mut *r;
            game.tick(surface)
        };
        match result {
            Ok(()) => schedule_tick(runner, tick_ms),
            Err(e) => log::error!("Game loop stopped: {}", e),
        }
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        tick_ms,
    ) {
        log::error!("set_timeout failed: {:?}", e);
    }
    closure.forget();
}
