use super::*;

fn standard() -> AtlasLayout {
    AtlasLayout::new(4, 4, 32)
}

#[test]
fn standard_sheet_has_sixteen_tiles() {
    assert_eq!(standard().tile_count(), 16);
}

#[test]
fn first_tile_is_top_left() {
    assert_eq!(standard().tile_rect(0), Some(TileRect { sx: 0, sy: 0, size: 32 }));
}

#[test]
fn tiles_run_left_to_right_then_down() {
    let layout = standard();
    assert_eq!(layout.tile_rect(3), Some(TileRect { sx: 96, sy: 0, size: 32 }));
    assert_eq!(layout.tile_rect(4), Some(TileRect { sx: 0, sy: 32, size: 32 }));
    assert_eq!(layout.tile_rect(13), Some(TileRect { sx: 32, sy: 96, size: 32 }));
}

#[test]
fn last_tile_is_bottom_right() {
    assert_eq!(standard().tile_rect(15), Some(TileRect { sx: 96, sy: 96, size: 32 }));
}

#[test]
fn code_past_sheet_has_no_tile() {
    assert_eq!(standard().tile_rect(16), None);
    assert_eq!(standard().tile_rect(u8::MAX), None);
}

#[test]
fn rects_cover_every_tile_in_order() {
    let layout = standard();
    let rects: Vec<_> = layout.rects().collect();
    assert_eq!(rects.len(), 16);
    for (code, rect) in rects.iter().enumerate() {
        let code = u8::try_from(code).unwrap();
        assert_eq!(Some(*rect), layout.tile_rect(code));
    }
}

#[test]
fn non_square_grid() {
    let layout = AtlasLayout::new(8, 2, 16);
    assert_eq!(layout.tile_count(), 16);
    assert_eq!(layout.tile_rect(9), Some(TileRect { sx: 16, sy: 16, size: 16 }));
}

#[test]
fn tile_origins_stay_on_the_integer_grid() {
    let layout = AtlasLayout::new(4, 4, 33);
    assert_eq!(layout.tile_rect(5), Some(TileRect { sx: 33, sy: 33, size: 33 }));
    assert_eq!(layout.tile_rect(15), Some(TileRect { sx: 99, sy: 99, size: 33 }));
}
