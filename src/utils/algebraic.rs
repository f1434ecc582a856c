//! Coordinate conversions for algebraic squares.
//!
//! Files are letters starting at `a` (column 0), ranks are 1-based numbers
//! (row 0 is rank `1`), so `e4` is `Coordinate { row: 3, col: 4 }`. Boards up
//! to 26 files are supported, which means ranks can take two digits.

use crate::game_state::chess_rules::MAX_BOARD_SIZE;
use crate::geometry::coordinate::Coordinate;

/// Convert algebraic notation (for example: "e4") to a coordinate on a
/// board of `board_size`.
pub fn algebraic_to_coordinate(square: &str, board_size: u8) -> Result<Coordinate, String> {
    let mut chars = square.chars();
    let file = chars
        .next()
        .ok_or_else(|| format!("Invalid algebraic square: {square}"))?;
    let rank_text = chars.as_str();

    if !file.is_ascii_lowercase() {
        return Err(format!("Invalid algebraic file: {file}"));
    }
    if rank_text.is_empty() || !rank_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid algebraic rank: {rank_text}"));
    }
    let rank: u8 = rank_text
        .parse()
        .map_err(|_| format!("Invalid algebraic rank: {rank_text}"))?;

    let col = file as u8 - b'a';
    if col >= board_size || rank == 0 || rank > board_size {
        return Err(format!("Algebraic square {square} is off a {board_size}x{board_size} board"));
    }

    Ok(Coordinate::new((rank - 1) as i8, col as i8))
}

/// Convert an in-bounds coordinate to algebraic notation.
pub fn coordinate_to_algebraic(at: Coordinate) -> Result<String, String> {
    if !at.is_in_bounds(MAX_BOARD_SIZE) {
        return Err(format!("Coordinate has no algebraic name: {at}"));
    }
    let file = char::from(b'a' + at.col as u8);
    Ok(format!("{file}{}", at.row + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_squares() {
        assert_eq!(algebraic_to_coordinate("a1", 8), Ok(Coordinate::new(0, 0)));
        assert_eq!(algebraic_to_coordinate("e4", 8), Ok(Coordinate::new(3, 4)));
        assert_eq!(algebraic_to_coordinate("h8", 8), Ok(Coordinate::new(7, 7)));
    }

    #[test]
    fn rejects_squares_off_the_board() {
        assert!(algebraic_to_coordinate("i1", 8).is_err());
        assert!(algebraic_to_coordinate("a9", 8).is_err());
        assert!(algebraic_to_coordinate("a0", 8).is_err());
        assert!(algebraic_to_coordinate("E4", 8).is_err());
        assert!(algebraic_to_coordinate("", 8).is_err());
        assert!(algebraic_to_coordinate("e", 8).is_err());
    }

    #[test]
    fn rank_must_be_plain_digits() {
        assert_eq!(
            algebraic_to_coordinate("e+4", 8),
            Err("Invalid algebraic rank: +4".to_string())
        );
        assert!(algebraic_to_coordinate("e 4", 8).is_err());
        assert!(algebraic_to_coordinate("e-4", 8).is_err());
    }

    #[test]
    fn large_boards_use_two_digit_ranks() {
        let at = algebraic_to_coordinate("j10", 10).expect("j10 is on a 10x10 board");
        assert_eq!(at, Coordinate::new(9, 9));
        assert_eq!(coordinate_to_algebraic(at).as_deref(), Ok("j10"));
    }

    #[test]
    fn negative_coordinates_have_no_name() {
        assert!(coordinate_to_algebraic(Coordinate::new(-1, 0)).is_err());
    }
}
