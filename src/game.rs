//! Boundary to the game-logic module.
//!
//! Mine placement, flood-fill reveal, flag bookkeeping and win/loss detection
//! all live in a separately compiled wasm package (`minesweeper-wasm`). This
//! crate only reads its board through [`GameModule`] and forwards player
//! intent to it. [`WasmGame`] is the imported JS class; tests substitute a
//! recording fake.
//!
//! Coordinates are passed through unchanged: the first argument is the
//! horizontal tile index, the second the vertical one.

#[cfg(test)]
#[path = "game_test.rs"]
pub(crate) mod game_test;

use wasm_bindgen::prelude::*;

/// The operations the front-end needs from a game.
pub trait GameModule {
    /// Mines not yet accounted for by flags.
    fn remaining_mines(&self) -> i32;
    /// Human-readable state line (playing, won, lost, ...).
    fn game_state(&self) -> String;
    /// Board extent along the horizontal axis.
    fn rows(&self) -> i32;
    /// Board extent along the vertical axis.
    fn cols(&self) -> i32;
    /// Sprite index for the cell at `(row, col)`.
    fn cell_code(&self, row: i32, col: i32) -> u8;
    /// Preview a single cell as "would be dug".
    fn mark(&mut self, x: i32, y: i32);
    /// Preview the 3x3 block centred on `(x, y)`.
    fn mark_block(&mut self, x: i32, y: i32);
    /// Flag a covered cell or unflag a flagged one.
    fn toggle_flag(&mut self, x: i32, y: i32);
    /// Dig whatever is marked and clear the mark.
    fn dig_marked(&mut self);
}

#[wasm_bindgen(raw_module = "minesweeper-wasm")]
extern "C" {
    /// The game class exported by the `minesweeper-wasm` package.
    pub type WasmGame;

    #[wasm_bindgen(static_method_of = WasmGame, js_name = new)]
    pub fn create() -> WasmGame;

    /// Begin the package's default game.
    #[wasm_bindgen(method)]
    pub fn stub(this: &WasmGame);

    #[wasm_bindgen(method)]
    fn get_remaining_mines(this: &WasmGame) -> i32;

    #[wasm_bindgen(method)]
    fn get_game_state(this: &WasmGame) -> String;

    #[wasm_bindgen(method)]
    fn get_rows(this: &WasmGame) -> i32;

    #[wasm_bindgen(method)]
    fn get_cols(this: &WasmGame) -> i32;

    #[wasm_bindgen(method)]
    fn get_cell_code(this: &WasmGame, row: i32, col: i32) -> u8;

    #[wasm_bindgen(method, js_name = mark)]
    fn js_mark(this: &WasmGame, x: i32, y: i32);

    #[wasm_bindgen(method, js_name = mark_block)]
    fn js_mark_block(this: &WasmGame, x: i32, y: i32);

    #[wasm_bindgen(method, js_name = toggle_flag)]
    fn js_toggle_flag(this: &WasmGame, x: i32, y: i32);

    #[wasm_bindgen(method, js_name = dig_marked)]
    fn js_dig_marked(this: &WasmGame);
}

impl GameModule for WasmGame {
    fn remaining_mines(&self) -> i32 {
        self.get_remaining_mines()
    }

    fn game_state(&self) -> String {
        self.get_game_state()
    }

    fn rows(&self) -> i32 {
        self.get_rows()
    }

    fn cols(&self) -> i32 {
        self.get_cols()
    }

    fn cell_code(&self, row: i32, col: i32) -> u8 {
        self.get_cell_code(row, col)
    }

    fn mark(&mut self, x: i32, y: i32) {
        self.js_mark(x, y);
    }

    fn mark_block(&mut self, x: i32, y: i32) {
        self.js_mark_block(x, y);
    }

    fn toggle_flag(&mut self, x: i32, y: i32) {
        self.js_toggle_flag(x, y);
    }

    fn dig_marked(&mut self) {
        self.js_dig_marked();
    }
}
