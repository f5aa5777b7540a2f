//! Color constants for the Dropdeck dark slate palette.

#![allow(dead_code)]

// === SLATE (Backgrounds) ===
pub const SLATE_DEEP: &str = "#101216";
pub const SLATE_PANEL: &str = "#181b21";
pub const SLATE_RAISED: &str = "#21252d";
pub const SLATE_OUTLINE: &str = "#3a4150";

// === ACCENT ===
pub const ACCENT: &str = "#4d9fff";
pub const ACCENT_GLOW: &str = "rgba(77, 159, 255, 0.35)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#e8eaed";
pub const TEXT_SECONDARY: &str = "rgba(232, 234, 237, 0.7)";
pub const TEXT_MUTED: &str = "rgba(232, 234, 237, 0.45)";

// === SEMANTIC ===
pub const DANGER: &str = "#ff5c6c";
pub const WARNING: &str = "#ffb454";
