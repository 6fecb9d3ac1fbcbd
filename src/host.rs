//! DOM wiring between the page and the [`Engine`].
//!
//! `mount` finds or creates the board canvas and looks up the HUD elements.
//! It then attaches mouse handlers, starts slicing the sprite sheet in the
//! background and kicks off the `requestAnimationFrame` loop. Handlers and
//! the frame callback share the engine through `Rc<RefCell<_>>`. They all
//! run on the page's single UI thread and never nest.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlCanvasElement, MouseEvent, Window};

use crate::atlas::{AtlasLayout, SpriteAtlas};
use crate::config::FrontendConfig;
use crate::engine::{Engine, EngineCore, HudElements};
use crate::error::{FrontendError, Result};
use crate::game::GameModule;
use crate::input::{Button, Point};

pub type SharedEngine<G> = Rc<RefCell<Engine<G>>>;
type FrameCallback = Closure<dyn FnMut(f64)>;

/// Wire `game` into the page and start rendering.
///
/// # Errors
///
/// Fails if the window, document, board section or HUD elements are missing,
/// or if the canvas cannot provide a 2D context.
pub fn mount<G: GameModule + 'static>(game: G, config: FrontendConfig) -> Result<SharedEngine<G>> {
    let window = web_sys::window().ok_or(FrontendError::NoWindow)?;
    let document = window.document().ok_or(FrontendError::NoDocument)?;

    let canvas = board_canvas(&document, &config)?;
    let hud = HudElements {
        mines: element(&document, &config.remaining_mines_id)?,
        state: element(&document, &config.game_state_id)?,
    };

    let sprite_sheet = config.sprite_sheet.clone();
    let layout = config.atlas_layout();
    let engine = Rc::new(RefCell::new(Engine::new(canvas.clone(), hud, EngineCore::new(game, config))?));

    attach_mouse_handlers(&canvas, &engine);
    load_atlas(&engine, sprite_sheet, layout);
    start_render_loop(&window, &engine)?;

    log::info!("board mounted on #{}", canvas.id());
    Ok(engine)
}

fn element(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FrontendError::MissingElement(id.to_owned()))
}

/// Reuse an existing board canvas or create one under the board section.
fn board_canvas(document: &Document, config: &FrontendConfig) -> Result<HtmlCanvasElement> {
    if let Some(existing) = document.get_element_by_id(&config.canvas_id) {
        return existing
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| FrontendError::MissingElement(config.canvas_id.clone()));
    }

    let section = element(document, &config.board_section_id)?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| FrontendError::Js("created element is not a canvas".to_owned()))?;
    canvas.set_id(&config.canvas_id);
    section.append_child(&canvas)?;
    Ok(canvas)
}

fn mouse_point(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Run `f` against the engine, skipping the event if it is already borrowed.
fn with_engine<G>(engine: &SharedEngine<G>, what: &str, f: impl FnOnce(&mut Engine<G>)) {
    match engine.try_borrow_mut() {
        Ok(mut engine) => f(&mut engine),
        Err(err) => log::warn!("{what} skipped: engine busy ({err})"),
    }
}

fn attach_mouse_handlers<G: GameModule + 'static>(canvas: &HtmlCanvasElement, engine: &SharedEngine<G>) {
    let down = {
        let engine = Rc::clone(engine);
        Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            with_engine(&engine, "mousedown", |e| {
                e.on_mouse_down(mouse_point(&ev), Button::from_dom(ev.button()));
            });
        })
    };
    let up = {
        let engine = Rc::clone(engine);
        Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            with_engine(&engine, "mouseup", |e| {
                e.on_mouse_up(Button::from_dom(ev.button()));
            });
        })
    };
    let moved = {
        let engine = Rc::clone(engine);
        Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            with_engine(&engine, "mousemove", |e| {
                e.on_mouse_move(mouse_point(&ev));
            });
        })
    };
    // Right-click flags cells, so the browser menu must stay closed.
    let context_menu = Closure::<dyn FnMut(Event)>::new(|ev: Event| ev.prevent_default());

    canvas.set_onmousedown(Some(down.as_ref().unchecked_ref()));
    canvas.set_onmouseup(Some(up.as_ref().unchecked_ref()));
    canvas.set_onmousemove(Some(moved.as_ref().unchecked_ref()));
    canvas.set_oncontextmenu(Some(context_menu.as_ref().unchecked_ref()));

    // Handlers live as long as the page.
    down.forget();
    up.forget();
    moved.forget();
    context_menu.forget();
}

/// Slice the sprite sheet in the background and hand it to the engine.
fn load_atlas<G: GameModule + 'static>(engine: &SharedEngine<G>, url: String, layout: AtlasLayout) {
    let engine = Rc::clone(engine);
    wasm_bindgen_futures::spawn_local(async move {
        match SpriteAtlas::load(&url, layout).await {
            Ok(atlas) => with_engine(&engine, "atlas install", |e| e.set_atlas(atlas)),
            Err(err) => log::error!("failed to load sprite sheet {url}: {err}"),
        }
    });
}

fn request_frame(window: &Window, cb: &FrameCallback) -> Result<()> {
    window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    Ok(())
}

/// Redraw every animation frame, forever.
///
/// The callback reschedules itself through `holder`, which also keeps it alive.
fn start_render_loop<G: GameModule + 'static>(window: &Window, engine: &SharedEngine<G>) -> Result<()> {
    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let engine = Rc::clone(engine);

    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        with_engine(&engine, "frame", |e| match e.render() {
            Ok(stats) if stats.skipped > 0 => {
                log::debug!("frame drew {} tiles, skipped {} with unknown codes", stats.drawn, stats.skipped);
            }
            Ok(_) => {}
            Err(err) => log::warn!("frame failed: {err}"),
        });

        let Some(window) = web_sys::window() else {
            log::error!("render loop stopped: no window");
            return;
        };
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            if let Err(err) = request_frame(&window, cb) {
                log::error!("render loop stopped: {err}");
            }
        }
    }) as Box<dyn FnMut(f64)>);

    request_frame(window, &cb)?;
    *holder.borrow_mut() = Some(cb);
    Ok(())
}
