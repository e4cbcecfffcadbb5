// src/config/consts.rs

// Input
pub const DEFAULT_INPUT: &str = "patterns.txt";

// Output
pub const DEFAULT_OUT_FILE: &str = "patterns.html";
pub const IMG_DIR: &str = "img";
pub const IMG_EXT: &str = "png";

// Layout
pub const DEFAULT_COLUMNS: usize = 4;
pub const PAIR_SPAN: usize = 2;
pub const HEADER_NAME: &str = "Name";
pub const HEADER_ATTR: &str = "Length";
pub const IMAGE_CAPTION: &str =
    "Image of the pattern (highlighted in red) used in a typical wheel (20, 32 or 36 spokes).";
pub const CAPTION_LABEL: &str = "Common names";
