//! Color Constants
//!
//! Warm brown palette: dark panels with cream text, tan accents for
//! results and selection.

use eframe::egui::Color32;

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Thread list panel background - Deep brown
pub const SIDE_PANEL_BG: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Tree panel background - Dark brown
pub const TREE_PANEL_BG: Color32 = Color32::from_rgb(0x3A, 0x27, 0x21);

/// Background of one operation node card
pub const NODE_BG: Color32 = Color32::from_rgb(0x4A, 0x2E, 0x22);

/// Text on dark backgrounds - Cream
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xB0, 0x9C, 0x8A);

/// Computed results - Tan
pub const RESULT: Color32 = Color32::from_rgb(0xD8, 0xC0, 0xA8);

/// Seed value of a thread
pub const SEED: Color32 = Color32::from_rgb(0xFF, 0xD5, 0x9E);

/// Accent color for buttons and selection
pub const ACCENT: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Healthy backend - Green
pub const STATUS_ONLINE: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Unreachable backend - Gray
pub const STATUS_OFFLINE: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Hint color - Orange
pub const HINT: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);
