#![allow(clippy::float_cmp)]

use super::*;
use crate::atlas::TileRect;

fn invalid_reason<T: std::fmt::Debug>(result: Result<T>) -> String {
    match result {
        Err(FrontendError::InvalidConfig(reason)) => reason,
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_page_layout() {
    let cfg = FrontendConfig::default();
    assert_eq!(cfg.cell_size, 32.0);
    assert_eq!(cfg.sprite_sheet, "res/minesweeper-tiles.png");
    assert_eq!((cfg.atlas_columns, cfg.atlas_rows), (4, 4));
    assert_eq!(cfg.tile_size, 32);
    assert_eq!(cfg.canvas_id, "minesweeper-field");
    assert_eq!(cfg.board_section_id, "board-section");
    assert_eq!(cfg.remaining_mines_id, "remaining-mines");
    assert_eq!(cfg.game_state_id, "gamestate-section");
    assert_eq!(cfg.mines_label, "Mines left: ");
}

#[test]
fn default_validates() {
    assert!(FrontendConfig::default().validate().is_ok());
}

#[test]
fn default_level_is_info() {
    assert_eq!(FrontendConfig::default().level().unwrap(), log::Level::Info);
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let cfg = FrontendConfig::from_json("{}").unwrap();
    assert_eq!(cfg, FrontendConfig::default());
}

#[test]
fn partial_object_overrides_only_given_fields() {
    let cfg = FrontendConfig::from_json(r#"{"cell_size": 24, "log_level": "debug"}"#).unwrap();
    assert_eq!(cfg.cell_size, 24.0);
    assert_eq!(cfg.level().unwrap(), log::Level::Debug);
    assert_eq!(cfg.canvas_id, "minesweeper-field");
}

#[test]
fn malformed_json_is_config_error() {
    let err = FrontendConfig::from_json("{cell_size:").unwrap_err();
    assert!(matches!(err, FrontendError::Config(_)));
}

#[test]
fn wrong_type_is_config_error() {
    let err = FrontendConfig::from_json(r#"{"atlas_columns": "four"}"#).unwrap_err();
    assert!(matches!(err, FrontendError::Config(_)));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn zero_cell_size_rejected() {
    let reason = invalid_reason(FrontendConfig::from_json(r#"{"cell_size": 0}"#));
    assert!(reason.contains("cell_size"));
}

#[test]
fn negative_cell_size_rejected() {
    let reason = invalid_reason(FrontendConfig::from_json(r#"{"cell_size": -8}"#));
    assert!(reason.contains("cell_size"));
}

#[test]
fn nan_cell_size_rejected() {
    let cfg = FrontendConfig { cell_size: f64::NAN, ..FrontendConfig::default() };
    assert!(invalid_reason(cfg.validate()).contains("cell_size"));
}

#[test]
fn empty_atlas_grid_rejected() {
    let reason = invalid_reason(FrontendConfig::from_json(r#"{"atlas_rows": 0}"#));
    assert!(reason.contains("atlas grid"));
}

#[test]
fn zero_tile_size_rejected() {
    let reason = invalid_reason(FrontendConfig::from_json(r#"{"tile_size": 0}"#));
    assert_eq!(reason, "tile_size must be positive");
}

#[test]
fn negative_tile_size_is_config_error() {
    let err = FrontendConfig::from_json(r#"{"tile_size": -32}"#).unwrap_err();
    assert!(matches!(err, FrontendError::Config(_)));
}

#[test]
fn oversized_sheet_rejected() {
    let reason = invalid_reason(FrontendConfig::from_json(r#"{"tile_size": 1000000000, "atlas_columns": 4}"#));
    assert!(reason.contains("too large"));
}

#[test]
fn blank_sprite_sheet_rejected() {
    let reason = invalid_reason(FrontendConfig::from_json(r#"{"sprite_sheet": "  "}"#));
    assert!(reason.contains("sprite_sheet"));
}

#[test]
fn blank_element_id_rejected_with_field_name() {
    let reason = invalid_reason(FrontendConfig::from_json(r#"{"game_state_id": ""}"#));
    assert_eq!(reason, "game_state_id must not be empty");
}

#[test]
fn unknown_log_level_rejected() {
    let reason = invalid_reason(FrontendConfig::from_json(r#"{"log_level": "loud"}"#));
    assert_eq!(reason, "unknown log_level: loud");
}

#[test]
fn log_level_is_case_insensitive() {
    let cfg = FrontendConfig::from_json(r#"{"log_level": "WARN"}"#).unwrap();
    assert_eq!(cfg.level().unwrap(), log::Level::Warn);
}

// =============================================================
// Derived values
// =============================================================

#[test]
fn atlas_layout_follows_config() {
    let cfg = FrontendConfig::from_json(r#"{"atlas_columns": 8, "atlas_rows": 2, "tile_size": 16}"#).unwrap();
    let layout = cfg.atlas_layout();
    assert_eq!(layout.tile_count(), 16);
    assert_eq!(layout.tile_rect(9), Some(TileRect { sx: 16, sy: 16, size: 16 }));
}

#[test]
fn cell_size_does_not_change_sheet_slicing() {
    let cfg = FrontendConfig::from_json(r#"{"cell_size": 24}"#).unwrap();
    assert_eq!(cfg.atlas_layout().tile_rect(5), Some(TileRect { sx: 32, sy: 32, size: 32 }));
}
