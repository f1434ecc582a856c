//! Placement-string to Board parser.
//!
//! Reads the piece-placement field of a FEN-style string: rows separated by
//! `/` from the top row down, digits for runs of empty squares, letters for
//! pieces (uppercase Light, lowercase Dark). Works for any supported board
//! size, so runs may need more than one digit (`10` on a 10x10 board).

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Rank, Team};
use crate::geometry::coordinate::Coordinate;
use crate::ids::{IdGenerator, PieceId};

pub fn parse_placement(placement: &str, board_size: u8, ids: &mut dyn IdGenerator) -> Result<Board, String> {
    let mut board = Board::new(board_size).map_err(|e| e.to_string())?;
    let rows: Vec<&str> = placement.trim().split('/').collect();
    if rows.len() != board_size as usize {
        return Err(format!(
            "Placement must contain {board_size} rows, found {}",
            rows.len()
        ));
    }

    for (text_row, row_text) in rows.iter().enumerate() {
        let row = (board_size as usize - 1 - text_row) as i8;
        let mut col = 0usize;
        let mut run = 0usize;

        for ch in row_text.chars() {
            if let Some(digit) = ch.to_digit(10) {
                run = run * 10 + digit as usize;
                if col + run > board_size as usize {
                    return Err(format!("Row '{row_text}' is wider than {board_size}"));
                }
                continue;
            }
            col += run;
            run = 0;

            let rank = Rank::from_letter(ch).ok_or_else(|| format!("Invalid placement token '{ch}'"))?;
            let team = if ch.is_ascii_uppercase() {
                Team::Light
            } else {
                Team::Dark
            };
            if col >= board_size as usize {
                return Err(format!("Row '{row_text}' is wider than {board_size}"));
            }
            board
                .setup_piece(PieceId::next(ids), team, rank, Coordinate::new(row, col as i8))
                .map_err(|e| e.to_string())?;
            col += 1;
        }
        col += run;

        if col != board_size as usize {
            return Err(format!("Row '{row_text}' covers {col} squares, expected {board_size}"));
        }
    }

    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STANDARD_PLACEMENT;
    use crate::ids::SequentialIds;

    #[test]
    fn standard_placement_has_thirty_two_pieces() {
        let mut ids = SequentialIds::default();
        let board = parse_placement(STANDARD_PLACEMENT, 8, &mut ids).expect("standard placement parses");
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_on_board(Team::Light).count(), 16);

        let king = board.occupant_piece_at(Coordinate::new(0, 4)).expect("e1 is occupied");
        assert_eq!((king.team(), king.rank()), (Team::Light, Rank::King));
        let queen = board.occupant_piece_at(Coordinate::new(7, 3)).expect("d8 is occupied");
        assert_eq!((queen.team(), queen.rank()), (Team::Dark, Rank::Queen));
        assert!(board.verify_consistency().is_ok());
    }

    #[test]
    fn multi_digit_runs_on_large_boards() {
        let mut ids = SequentialIds::default();
        let rows = ["k9", "10", "10", "10", "10", "10", "10", "10", "10", "4RK4"];
        let board = parse_placement(&rows.join("/"), 10, &mut ids).expect("10x10 placement parses");
        assert_eq!(board.pieces().count(), 3);
        assert_eq!(
            board.occupant_piece_at(Coordinate::new(0, 5)).map(|p| p.rank()),
            Some(Rank::King)
        );
    }

    #[test]
    fn malformed_placements_fail() {
        let mut ids = SequentialIds::default();
        assert!(parse_placement("8/8/8", 8, &mut ids).is_err());
        assert!(parse_placement("9/8/8/8/8/8/8/8", 8, &mut ids).is_err());
        assert!(parse_placement("7x/8/8/8/8/8/8/8", 8, &mut ids).is_err());
        assert!(parse_placement("ppppppppp/8/8/8/8/8/8/8", 8, &mut ids).is_err());
        assert_eq!(
            parse_placement("99999999999999999999999/8/8/8/8/8/8/8", 8, &mut ids).err(),
            Some("Row '99999999999999999999999' is wider than 8".to_string())
        );
        assert!(parse_placement("p99999999999999999999/8/8/8/8/8/8/8", 8, &mut ids).is_err());
    }
}
