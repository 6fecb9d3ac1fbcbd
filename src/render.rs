//! Rendering: turns the game's board into canvas pixels and HUD text.
//!
//! Work is split in two. [`plan_frame`] reads the game through
//! [`GameModule`] and produces a [`FramePlan`]: canvas size, HUD strings and
//! one [`TileDraw`] per cell whose code has a tile in the sprite sheet. Cells
//! with any other code are counted as skipped. It is pure and tested natively. [`draw_board`]
//! and [`write_hud`] apply a plan to the browser. They are the only functions
//! that touch [`web_sys::CanvasRenderingContext2d`] or element text.
//!
//! The board is laid out with the game's row index along x and its column
//! index along y, so the canvas is `rows * cell` wide and `cols * cell` high.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Element};

use crate::atlas::SpriteAtlas;
use crate::config::FrontendConfig;
use crate::game::GameModule;

/// One tile blit: atlas index and destination top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileDraw {
    pub code: u8,
    pub dx: f64,
    pub dy: f64,
}

/// Text for the two status elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hud {
    /// Remaining-mines line, label included.
    pub mines: String,
    /// Game state line as reported by the game.
    pub state: String,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Destination edge length of every tile, in pixels.
    pub cell_size: f64,
    pub hud: Hud,
    /// Drawable tiles in row-major order of the game's `(row, col)`.
    pub tiles: Vec<TileDraw>,
    /// Cells whose code has no tile in the sheet.
    pub skipped: usize,
}

/// Outcome of drawing a plan.
///
/// `skipped` counts cells left blank, either because the plan had no tile for
/// their code or because the atlas lacked the bitmap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    pub skipped: usize,
}

/// Canvas pixel size for a board. Negative extents count as empty.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn canvas_size(rows: i32, cols: i32, cell_size: f64) -> (u32, u32) {
    let width = f64::from(rows.max(0)) * cell_size;
    let height = f64::from(cols.max(0)) * cell_size;
    (width.round() as u32, height.round() as u32)
}

/// Build the HUD text from the game.
#[must_use]
pub fn plan_hud<G: GameModule + ?Sized>(game: &G, config: &FrontendConfig) -> Hud {
    Hud {
        mines: format!("{}{}", config.mines_label, game.remaining_mines()),
        state: game.game_state(),
    }
}

/// Read the whole board and lay it out for drawing.
#[must_use]
pub fn plan_frame<G: GameModule + ?Sized>(game: &G, config: &FrontendConfig) -> FramePlan {
    let rows = game.rows();
    let cols = game.cols();
    let cell = config.cell_size;
    let layout = config.atlas_layout();
    let (width, height) = canvas_size(rows, cols, cell);

    let capacity = usize::try_from(i64::from(rows.max(0)) * i64::from(cols.max(0))).unwrap_or(0);
    let mut tiles = Vec::with_capacity(capacity);
    let mut skipped = 0;
    for i in 0..rows {
        for j in 0..cols {
            let code = game.cell_code(i, j);
            if layout.tile_rect(code).is_none() {
                skipped += 1;
                continue;
            }
            tiles.push(TileDraw {
                code,
                dx: f64::from(i) * cell,
                dy: f64::from(j) * cell,
            });
        }
    }

    FramePlan {
        width,
        height,
        cell_size: cell,
        hud: plan_hud(game, config),
        tiles,
        skipped,
    }
}

/// Blit every planned tile, scaled from sheet size to cell size.
///
/// # Errors
///
/// Returns `Err` if a `drawImage` call fails.
pub fn draw_board(ctx: &CanvasRenderingContext2d, atlas: &SpriteAtlas, plan: &FramePlan) -> Result<FrameStats, JsValue> {
    ctx.clear_rect(0.0, 0.0, f64::from(plan.width), f64::from(plan.height));

    let size = plan.cell_size;
    let mut stats = FrameStats { drawn: 0, skipped: plan.skipped };
    for tile in &plan.tiles {
        match atlas.tile(tile.code) {
            Some(bitmap) => {
                ctx.draw_image_with_image_bitmap_and_dw_and_dh(bitmap, tile.dx, tile.dy, size, size)?;
                stats.drawn += 1;
            }
            None => stats.skipped += 1,
        }
    }
    Ok(stats)
}

/// Write the HUD strings into their elements.
pub fn write_hud(mines: &Element, state: &Element, hud: &Hud) {
    mines.set_text_content(Some(&hud.mines));
    state.set_text_content(Some(&hud.state));
}
