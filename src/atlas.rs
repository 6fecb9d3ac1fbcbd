//! Sprite sheet geometry and the sliced tile atlas.
//!
//! The sheet is a uniform grid of square tiles read left-to-right,
//! top-to-bottom: tile `k` sits at column `k % columns`, row `k / columns`.
//! A cell code from the game module is used directly as a tile index.
//!
//! [`AtlasLayout`] is plain arithmetic and is tested natively. [`SpriteAtlas`]
//! owns the decoded `ImageBitmap`s and is only constructed in the browser.

#[cfg(test)]
#[path = "atlas_test.rs"]
mod atlas_test;

use futures::future::try_join_all;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlImageElement, ImageBitmap};

use crate::error::{FrontendError, Result};

/// Source rectangle of one tile inside the sheet, in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub sx: i32,
    pub sy: i32,
    pub size: i32,
}

/// Grid shape of a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasLayout {
    columns: u32,
    rows: u32,
    tile_size: u32,
}

impl AtlasLayout {
    #[must_use]
    pub fn new(columns: u32, rows: u32, tile_size: u32) -> Self {
        Self { columns, rows, tile_size }
    }

    /// Number of tiles in the sheet.
    #[must_use]
    pub fn tile_count(&self) -> u32 {
        self.columns.saturating_mul(self.rows)
    }

    /// Source rectangle for `code`, or `None` if the sheet has no such tile.
    #[must_use]
    pub fn tile_rect(&self, code: u8) -> Option<TileRect> {
        let index = u32::from(code);
        if index >= self.tile_count() {
            return None;
        }
        Some(self.rect_at(index))
    }

    /// All tile rectangles in index order.
    pub fn rects(&self) -> impl Iterator<Item = TileRect> + '_ {
        (0..self.tile_count()).map(|index| self.rect_at(index))
    }

    #[allow(clippy::cast_possible_wrap)]
    fn rect_at(&self, index: u32) -> TileRect {
        let size = self.tile_size as i32;
        let col = (index % self.columns) as i32;
        let row = (index / self.columns) as i32;
        TileRect { sx: col * size, sy: row * size, size }
    }
}

/// The sprite sheet cut into one `ImageBitmap` per tile.
pub struct SpriteAtlas {
    tiles: Vec<ImageBitmap>,
}

impl SpriteAtlas {
    /// Fetch and decode the sheet at `url`, then slice it per `layout`.
    ///
    /// # Errors
    ///
    /// Fails if there is no window, the image cannot be decoded, or the
    /// browser rejects a `createImageBitmap` call.
    pub async fn load(url: &str, layout: AtlasLayout) -> Result<Self> {
        let window = web_sys::window().ok_or(FrontendError::NoWindow)?;
        let image = HtmlImageElement::new()?;
        image.set_src(url);
        JsFuture::from(image.decode()).await?;

        let pending = layout
            .rects()
            .map(|r| {
                window
                    .create_image_bitmap_with_html_image_element_and_a_sx_and_a_sy_and_a_sw_and_a_sh(
                        &image, r.sx, r.sy, r.size, r.size,
                    )
                    .map(JsFuture::from)
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let tiles = try_join_all(pending)
            .await?
            .into_iter()
            .map(|value| value.dyn_into::<ImageBitmap>())
            .collect::<std::result::Result<Vec<_>, _>>()?;

        log::info!("sprite atlas ready: {} tiles from {url}", tiles.len());
        Ok(Self { tiles })
    }

    /// Tile bitmap for a cell code.
    #[must_use]
    pub fn tile(&self, code: u8) -> Option<&ImageBitmap> {
        self.tiles.get(usize::from(code))
    }
}
