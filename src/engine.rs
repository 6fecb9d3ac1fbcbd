use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::atlas::SpriteAtlas;
use crate::config::FrontendConfig;
use crate::error::{FrontendError, Result};
use crate::game::GameModule;
use crate::input::{Action, Button, InputCore, Point};
use crate::render::{self, FramePlan, FrameStats};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state: the game, the input router and the config.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore<G> {
    pub game: G,
    pub input: InputCore,
    pub config: FrontendConfig,
}

impl<G: GameModule> EngineCore<G> {
    #[must_use]
    pub fn new(game: G, config: FrontendConfig) -> Self {
        let input = InputCore::new(config.cell_size);
        Self { game, input, config }
    }

    // --- Input events ---

    pub fn on_mouse_down(&mut self, point: Point, button: Option<Button>) -> Vec<Action> {
        let actions = self.input.on_mouse_down(point, button);
        self.dispatch(&actions);
        actions
    }

    pub fn on_mouse_move(&mut self, point: Point) -> Vec<Action> {
        let actions = self.input.on_mouse_move(point);
        self.dispatch(&actions);
        actions
    }

    pub fn on_mouse_up(&mut self, button: Option<Button>) -> Vec<Action> {
        let actions = self.input.on_mouse_up(button);
        self.dispatch(&actions);
        actions
    }

    /// Apply actions to the game in order.
    pub fn dispatch(&mut self, actions: &[Action]) {
        for action in actions {
            log::trace!("input action: {action:?}");
            match *action {
                Action::ToggleFlag(cell) => self.game.toggle_flag(cell.x, cell.y),
                Action::Mark(cell) => self.game.mark(cell.x, cell.y),
                Action::MarkBlock(cell) => self.game.mark_block(cell.x, cell.y),
                Action::DigMarked => self.game.dig_marked(),
            }
        }
    }

    // --- Queries ---

    /// Snapshot the board for the next frame.
    #[must_use]
    pub fn plan_frame(&self) -> FramePlan {
        render::plan_frame(&self.game, &self.config)
    }
}

/// DOM nodes receiving the status text.
pub struct HudElements {
    pub mines: Element,
    pub state: Element,
}

/// The full engine. Wraps `EngineCore` and owns the canvas, its context and the atlas.
pub struct Engine<G> {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    hud: HudElements,
    atlas: Option<SpriteAtlas>,
    pub core: EngineCore<G>,
}

impl<G: GameModule> Engine<G> {
    /// Bind the engine to a canvas and the HUD elements.
    ///
    /// # Errors
    ///
    /// Returns [`FrontendError::NoContext2d`] if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, hud: HudElements, core: EngineCore<G>) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(FrontendError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FrontendError::NoContext2d)?;
        Ok(Self { canvas, ctx, hud, atlas: None, core })
    }

    /// Install the sliced sprite sheet. Board drawing starts on the next frame.
    pub fn set_atlas(&mut self, atlas: SpriteAtlas) {
        self.atlas = Some(atlas);
    }

    // --- Delegated input events ---

    pub fn on_mouse_down(&mut self, point: Point, button: Option<Button>) -> Vec<Action> {
        self.core.on_mouse_down(point, button)
    }

    pub fn on_mouse_move(&mut self, point: Point) -> Vec<Action> {
        self.core.on_mouse_move(point)
    }

    pub fn on_mouse_up(&mut self, button: Option<Button>) -> Vec<Action> {
        self.core.on_mouse_up(button)
    }

    // --- Render ---

    /// Draw one frame: HUD text, then the board if the atlas is ready.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a canvas draw call fails.
    pub fn render(&self) -> Result<FrameStats> {
        let plan = self.core.plan_frame();
        render::write_hud(&self.hud.mines, &self.hud.state, &plan.hud);
        self.sync_canvas_size(plan.width, plan.height);

        let Some(atlas) = self.atlas.as_ref() else {
            return Ok(FrameStats::default());
        };
        let stats = render::draw_board(&self.ctx, atlas, &plan)?;
        Ok(stats)
    }

    /// Resize the canvas when the board dimensions change.
    fn sync_canvas_size(&self, width: u32, height: u32) {
        if self.canvas.width() != width || self.canvas.height() != height {
            log::debug!("resizing board canvas to {width}x{height}");
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
    }
}
