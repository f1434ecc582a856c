//! Canonical rule constants.
//!
//! Static literals for board geometry and the standard opening setup.

/// Conventional board edge length.
pub const STANDARD_BOARD_SIZE: u8 = 8;

/// Smallest and largest supported edge lengths. Files are lettered `a..=z`.
pub const MIN_BOARD_SIZE: u8 = 2;
pub const MAX_BOARD_SIZE: u8 = 26;

/// Standard starting placement, top row first, uppercase = Light.
pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
