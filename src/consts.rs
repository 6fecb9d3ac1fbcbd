//! Shared constants for the minesweeper front-end.

// ── Board geometry ──────────────────────────────────────────────

/// Edge length of one board cell on the canvas, in CSS pixels.
pub const CELL_SIZE_PX: f64 = 32.0;

// ── Sprite atlas ────────────────────────────────────────────────

/// Path of the sprite sheet, relative to the page.
pub const SPRITE_SHEET_URL: &str = "res/minesweeper-tiles.png";

/// Tiles per row in the sprite sheet.
pub const ATLAS_COLUMNS: u32 = 4;

/// Tile rows in the sprite sheet.
pub const ATLAS_ROWS: u32 = 4;

/// Edge length of one tile in the sprite sheet, in image pixels.
pub const ATLAS_TILE_PX: u32 = 32;

// ── DOM ─────────────────────────────────────────────────────────

/// Id given to the board canvas.
pub const CANVAS_ID: &str = "minesweeper-field";

/// Container the board canvas is appended to.
pub const BOARD_SECTION_ID: &str = "board-section";

/// Element receiving the remaining-mines counter.
pub const REMAINING_MINES_ID: &str = "remaining-mines";

/// Element receiving the game-state text.
pub const GAME_STATE_ID: &str = "gamestate-section";

/// Prefix written before the remaining-mines number.
pub const MINES_LABEL: &str = "Mines left: ";
