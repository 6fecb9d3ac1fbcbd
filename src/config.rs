//! Front-end configuration.
//!
//! The page may pass a JSON object to `start_with_config`; every field is
//! optional and falls back to the values in [`crate::consts`]. The parsed
//! config is validated once at startup so the render loop and input handlers
//! can rely on a positive cell size, a non-empty atlas grid and real DOM ids.
//!
//! `cell_size` is the on-screen size of a board cell and `tile_size` the size
//! of a tile inside the sprite sheet. Tiles are scaled from one to the other.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::atlas::AtlasLayout;
use crate::consts::{
    ATLAS_COLUMNS, ATLAS_ROWS, ATLAS_TILE_PX, BOARD_SECTION_ID, CANVAS_ID, CELL_SIZE_PX, GAME_STATE_ID, MINES_LABEL,
    REMAINING_MINES_ID, SPRITE_SHEET_URL,
};
use crate::error::{FrontendError, Result};

/// Runtime settings for the board, the sprite sheet and the DOM hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Edge length of a board cell on the canvas, in CSS pixels.
    pub cell_size: f64,
    /// URL of the sprite sheet image.
    pub sprite_sheet: String,
    /// Tiles per row in the sprite sheet.
    pub atlas_columns: u32,
    /// Tile rows in the sprite sheet.
    pub atlas_rows: u32,
    /// Edge length of one sheet tile, in image pixels. Tiles are scaled to `cell_size` when drawn.
    pub tile_size: u32,
    /// Id of the board canvas.
    pub canvas_id: String,
    /// Id of the element the canvas is appended to.
    pub board_section_id: String,
    /// Id of the remaining-mines text element.
    pub remaining_mines_id: String,
    /// Id of the game-state text element.
    pub game_state_id: String,
    /// Text written before the remaining-mines count.
    pub mines_label: String,
    /// Minimum level passed to the console logger (`error` .. `trace`).
    pub log_level: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE_PX,
            sprite_sheet: SPRITE_SHEET_URL.to_owned(),
            atlas_columns: ATLAS_COLUMNS,
            atlas_rows: ATLAS_ROWS,
            tile_size: ATLAS_TILE_PX,
            canvas_id: CANVAS_ID.to_owned(),
            board_section_id: BOARD_SECTION_ID.to_owned(),
            remaining_mines_id: REMAINING_MINES_ID.to_owned(),
            game_state_id: GAME_STATE_ID.to_owned(),
            mines_label: MINES_LABEL.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl FrontendConfig {
    /// Parse a JSON object and validate it. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// [`FrontendError::Config`] when the text is not valid JSON for this
    /// shape, [`FrontendError::InvalidConfig`] when a value is out of range.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field the front-end depends on.
    ///
    /// # Errors
    ///
    /// Returns [`FrontendError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(invalid(format!("cell_size must be a positive number, got {}", self.cell_size)));
        }
        if self.atlas_columns == 0 || self.atlas_rows == 0 {
            return Err(invalid(format!(
                "atlas grid must be non-empty, got {}x{}",
                self.atlas_columns, self.atlas_rows
            )));
        }
        if self.tile_size == 0 {
            return Err(invalid("tile_size must be positive".to_owned()));
        }
        let max_edge = i32::MAX.unsigned_abs();
        let fits = |tiles: u32| tiles.checked_mul(self.tile_size).is_some_and(|edge| edge <= max_edge);
        if !fits(self.atlas_columns) || !fits(self.atlas_rows) {
            return Err(invalid(format!(
                "sprite sheet of {}x{} tiles at {}px is too large",
                self.atlas_columns, self.atlas_rows, self.tile_size
            )));
        }
        if self.sprite_sheet.trim().is_empty() {
            return Err(invalid("sprite_sheet must not be empty".to_owned()));
        }
        for (field, value) in [
            ("canvas_id", &self.canvas_id),
            ("board_section_id", &self.board_section_id),
            ("remaining_mines_id", &self.remaining_mines_id),
            ("game_state_id", &self.game_state_id),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(format!("{field} must not be empty")));
            }
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`FrontendError::InvalidConfig`] for an unknown level name.
    pub fn level(&self) -> Result<log::Level> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| invalid(format!("unknown log_level: {}", self.log_level)))
    }

    /// Sprite sheet geometry derived from this config.
    #[must_use]
    pub fn atlas_layout(&self) -> AtlasLayout {
        AtlasLayout::new(self.atlas_columns, self.atlas_rows, self.tile_size)
    }
}

fn invalid(reason: String) -> FrontendError {
    FrontendError::InvalidConfig(reason)
}
