//! Browser front-end for a minesweeper game.
//!
//! This crate is compiled to WebAssembly and runs in the page. It draws the
//! board onto a canvas from a sliced sprite sheet, keeps the mine counter and
//! game-state text current, and turns mouse buttons into game calls. The
//! rules themselves (mine placement, reveal, flags, win/loss) belong to the
//! separately built `minesweeper-wasm` package, reached through
//! [`game::GameModule`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`input`] | Buttons, cells and the button-state router |
//! | [`render`] | Frame planning and canvas/HUD drawing |
//! | [`atlas`] | Sprite sheet geometry and sliced tiles |
//! | [`game`] | Game module trait and the wasm import |
//! | [`host`] | DOM wiring: canvas, listeners, animation loop |
//! | [`config`] | Page-supplied settings with defaults |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared constants (cell size, atlas grid, DOM ids) |

pub mod atlas;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod game;
pub mod host;
pub mod input;
pub mod render;

use wasm_bindgen::prelude::*;

use crate::config::FrontendConfig;
use crate::error::Result;
use crate::game::WasmGame;

/// Start the front-end with the default configuration.
///
/// # Errors
///
/// Returns a message if the page is missing required elements.
#[wasm_bindgen]
pub fn start() -> std::result::Result<(), JsValue> {
    run(FrontendConfig::default())?;
    Ok(())
}

/// Start the front-end with a JSON config; absent fields use defaults.
///
/// # Errors
///
/// Returns a message if the config is invalid or the page is missing
/// required elements.
#[wasm_bindgen]
pub fn start_with_config(config: &str) -> std::result::Result<(), JsValue> {
    run(FrontendConfig::from_json(config)?)?;
    Ok(())
}

fn run(config: FrontendConfig) -> Result<()> {
    console_error_panic_hook::set_once();
    init_logging(config.level()?);

    let game = WasmGame::create();
    game.stub();
    log::info!("starting minesweeper front-end");

    host::mount(game, config)?;
    Ok(())
}

fn init_logging(level: log::Level) {
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}
