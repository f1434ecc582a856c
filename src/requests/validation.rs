//! Read-only request validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the actor exists and is on the board,
//! 2. the actor's team has the move (when turns are enforced),
//! 3. the destination is on the board,
//! 4. the destination is one of the actor's current destinations,
//! 5. the destination's occupant matches the request kind (attacks need a
//!    non-king enemy, occupies need a vacant square),
//! 6. promotions come from an eligible rank and arrive on the far row.
//!
//! Nothing here mutates the board. A passing request comes back as a
//! [`ValidatedRequest`] carrying the [`MovePlan`] the transaction executes.

use crate::errors::ErrorKind;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Rank, Team};
use crate::game_state::piece::Piece;
use crate::geometry::coordinate::Coordinate;
use crate::ids::PieceId;
use crate::move_generation::move_search::can_reach;
use crate::requests::move_request::{AttackTarget, MoveRequest, RequestKind};

pub type Validation = Result<ValidatedRequest, ErrorKind>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationContext {
    /// Team whose turn it is, or `None` when turns are not enforced.
    pub mover_of_record: Option<Team>,
}

/// Everything the executor needs, resolved against the board at validation
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub actor: PieceId,
    pub team: Team,
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub captured: Option<PieceId>,
    pub promotion: Option<Rank>,
}

impl MovePlan {
    #[inline]
    pub fn moves(&self) -> bool {
        self.origin != self.destination
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest {
    request: MoveRequest,
    plan: MovePlan,
}

impl ValidatedRequest {
    #[inline]
    pub fn request(&self) -> &MoveRequest {
        &self.request
    }

    #[inline]
    pub fn plan(&self) -> &MovePlan {
        &self.plan
    }
}

pub fn validate(board: &Board, request: &MoveRequest, context: &ValidationContext) -> Validation {
    // 1. actor
    let actor = board
        .piece(request.actor())
        .filter(|p| p.is_on_board())
        .ok_or(ErrorKind::NullActor {
            actor: request.actor(),
        })?;
    let origin = actor
        .position()
        .ok_or(ErrorKind::NullActor { actor: actor.id() })?;

    // 2. turn
    if let Some(expected) = context.mover_of_record {
        if actor.team() != expected {
            return Err(ErrorKind::WrongTurn {
                expected,
                actual: actor.team(),
            });
        }
    }

    // 3. bounds
    let destination = resolve_destination(board, request)?;
    if !board.contains(destination) {
        return Err(ErrorKind::OutOfBounds { at: destination });
    }

    // 4. reachability, except for in-place promotion
    let in_place_promotion = matches!(request.kind(), RequestKind::Promote { .. }) && destination == origin;
    if !in_place_promotion && !can_reach(board, actor, destination)? {
        return Err(unreachable_reason(board, actor, origin, destination));
    }

    // 5. occupant
    let occupant = if in_place_promotion {
        None
    } else {
        board.occupant_piece_at(destination)
    };
    let captured = match request.kind() {
        RequestKind::Attack { target } => match occupant {
            Some(enemy) if enemy.is_enemy_of(actor) => Some(capturable(enemy, destination)?),
            _ => return Err(ErrorKind::NoAttackTarget { target }),
        },
        RequestKind::Occupy { .. } => match occupant {
            None => None,
            Some(_) => return Err(ErrorKind::OccupiedByEnemy { at: destination }),
        },
        RequestKind::Promote { .. } => match occupant {
            Some(enemy) if enemy.is_enemy_of(actor) => Some(capturable(enemy, destination)?),
            _ => None,
        },
    };

    // 6. promotion
    let promotion = match request.kind() {
        RequestKind::Promote { rank, .. } => {
            check_promotion(board, actor, destination, rank)?;
            Some(rank)
        }
        _ => {
            if actor.rank().is_promotion_eligible() && destination.row == actor.team().far_row(board.size()) {
                return Err(ErrorKind::InvalidPromotion {
                    rank: actor.rank(),
                    reason: "arriving on the far row requires a promotion request",
                });
            }
            None
        }
    };

    Ok(ValidatedRequest {
        request: *request,
        plan: MovePlan {
            actor: actor.id(),
            team: actor.team(),
            origin,
            destination,
            captured,
            promotion,
        },
    })
}

fn resolve_destination(board: &Board, request: &MoveRequest) -> Result<Coordinate, ErrorKind> {
    match request.kind() {
        RequestKind::Occupy { to } | RequestKind::Promote { to, .. } => Ok(to),
        RequestKind::Attack {
            target: AttackTarget::Square(at),
        } => Ok(at),
        RequestKind::Attack {
            target: target @ AttackTarget::Piece(id),
        } => board
            .piece(id)
            .and_then(Piece::position)
            .ok_or(ErrorKind::NoAttackTarget { target }),
    }
}

fn unreachable_reason(board: &Board, actor: &Piece, origin: Coordinate, destination: Coordinate) -> ErrorKind {
    match board.occupant_piece_at(destination) {
        Some(p) if p.team() == actor.team() => ErrorKind::OccupiedByFriend { at: destination },
        _ => ErrorKind::UnreachableDestination {
            from: origin,
            to: destination,
        },
    }
}

fn capturable(enemy: &Piece, at: Coordinate) -> Result<PieceId, ErrorKind> {
    if enemy.rank() == Rank::King {
        return Err(ErrorKind::AttackOnKing { at });
    }
    Ok(enemy.id())
}

fn check_promotion(board: &Board, actor: &Piece, destination: Coordinate, rank: Rank) -> Result<(), ErrorKind> {
    if !actor.rank().is_promotion_eligible() {
        return Err(ErrorKind::InvalidPromotion {
            rank: actor.rank(),
            reason: "rank is not eligible for promotion",
        });
    }
    if !rank.is_promotion_target() {
        return Err(ErrorKind::InvalidPromotion {
            rank,
            reason: "not a promotion target",
        });
    }
    if destination.row != actor.team().far_row(board.size()) {
        return Err(ErrorKind::InvalidPromotion {
            rank: actor.rank(),
            reason: "promotion requires arriving on the far row",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_view::BoardView;
    use crate::ids::RequestId;

    fn c(row: i8, col: i8) -> Coordinate {
        Coordinate::new(row, col)
    }

    fn setup(pieces: &[(u64, Team, Rank, Coordinate)]) -> Board {
        let mut board = Board::default();
        for &(id, team, rank, at) in pieces {
            board
                .setup_piece(PieceId(id), team, rank, at)
                .expect("setup should succeed");
        }
        board
    }

    const FREE: ValidationContext = ValidationContext { mover_of_record: None };

    #[test]
    fn unknown_actor_is_null() {
        let board = Board::default();
        let r = MoveRequest::occupy(RequestId(1), PieceId(9), c(0, 0));
        assert_eq!(
            validate(&board, &r, &FREE).err(),
            Some(ErrorKind::NullActor { actor: PieceId(9) })
        );
    }

    #[test]
    fn wrong_team_is_rejected_before_geometry() {
        let board = setup(&[(1, Team::Dark, Rank::Rook, c(7, 0))]);
        let ctx = ValidationContext {
            mover_of_record: Some(Team::Light),
        };
        let r = MoveRequest::occupy(RequestId(1), PieceId(1), c(20, 0));
        assert_eq!(
            validate(&board, &r, &ctx).err(),
            Some(ErrorKind::WrongTurn {
                expected: Team::Light,
                actual: Team::Dark
            })
        );
    }

    #[test]
    fn out_of_bounds_destination() {
        let board = setup(&[(1, Team::Light, Rank::Rook, c(0, 0))]);
        let r = MoveRequest::occupy(RequestId(1), PieceId(1), c(0, 8));
        assert_eq!(
            validate(&board, &r, &FREE).err(),
            Some(ErrorKind::OutOfBounds { at: c(0, 8) })
        );
    }

    #[test]
    fn friendly_destination_is_reported_as_such() {
        let board = setup(&[
            (1, Team::Light, Rank::King, c(4, 4)),
            (2, Team::Light, Rank::Pawn, c(4, 5)),
        ]);
        let r = MoveRequest::occupy(RequestId(1), PieceId(1), c(4, 5));
        assert_eq!(
            validate(&board, &r, &FREE).err(),
            Some(ErrorKind::OccupiedByFriend { at: c(4, 5) })
        );
    }

    #[test]
    fn blocked_slide_is_unreachable() {
        let board = setup(&[
            (1, Team::Light, Rank::Rook, c(0, 0)),
            (2, Team::Dark, Rank::Pawn, c(3, 0)),
        ]);
        let r = MoveRequest::occupy(RequestId(1), PieceId(1), c(5, 0));
        assert_eq!(
            validate(&board, &r, &FREE).err(),
            Some(ErrorKind::UnreachableDestination {
                from: c(0, 0),
                to: c(5, 0)
            })
        );
    }

    #[test]
    fn attack_on_king_is_its_own_error_and_board_is_untouched() {
        let board = setup(&[
            (1, Team::Light, Rank::Queen, c(0, 3)),
            (2, Team::Dark, Rank::King, c(7, 3)),
        ]);
        let before = BoardView::capture(&board);
        let r = MoveRequest::attack(RequestId(1), PieceId(1), PieceId(2));
        assert_eq!(
            validate(&board, &r, &FREE).err(),
            Some(ErrorKind::AttackOnKing { at: c(7, 3) })
        );
        assert_eq!(BoardView::capture(&board), before);
    }

    #[test]
    fn attack_needs_an_enemy() {
        let board = setup(&[(1, Team::Light, Rank::Rook, c(0, 0))]);
        let r = MoveRequest::attack(RequestId(1), PieceId(1), c(0, 5));
        assert_eq!(
            validate(&board, &r, &FREE).err(),
            Some(ErrorKind::NoAttackTarget {
                target: AttackTarget::Square(c(0, 5))
            })
        );
    }

    #[test]
    fn occupy_onto_enemy_must_be_an_attack() {
        let board = setup(&[
            (1, Team::Light, Rank::Rook, c(0, 0)),
            (2, Team::Dark, Rank::Knight, c(0, 5)),
        ]);
        let occupy = MoveRequest::occupy(RequestId(1), PieceId(1), c(0, 5));
        assert_eq!(
            validate(&board, &occupy, &FREE).err(),
            Some(ErrorKind::OccupiedByEnemy { at: c(0, 5) })
        );

        let attack = MoveRequest::attack(RequestId(2), PieceId(1), c(0, 5));
        let plan = *validate(&board, &attack, &FREE).expect("attack is legal").plan();
        assert_eq!(plan.captured, Some(PieceId(2)));
        assert_eq!(plan.destination, c(0, 5));
    }

    #[test]
    fn in_place_promotion_on_far_row() {
        let board = setup(&[(1, Team::Light, Rank::Pawn, c(7, 2))]);
        let r = MoveRequest::promote(RequestId(1), PieceId(1), c(7, 2), Rank::Queen).expect("queen is a target");
        let plan = *validate(&board, &r, &FREE).expect("promotion is legal").plan();
        assert!(!plan.moves());
        assert_eq!(plan.promotion, Some(Rank::Queen));
        assert_eq!(plan.captured, None);
    }

    #[test]
    fn promotion_away_from_far_row_is_invalid() {
        let board = setup(&[(1, Team::Light, Rank::Pawn, c(5, 2))]);
        let r = MoveRequest::promote(RequestId(1), PieceId(1), c(5, 2), Rank::Rook).expect("rook is a target");
        assert!(matches!(
            validate(&board, &r, &FREE),
            Err(ErrorKind::InvalidPromotion { .. })
        ));
    }

    #[test]
    fn non_pawn_cannot_promote() {
        let board = setup(&[(1, Team::Dark, Rank::Knight, c(0, 2))]);
        let r = MoveRequest::promote(RequestId(1), PieceId(1), c(0, 2), Rank::Queen).expect("queen is a target");
        assert_eq!(
            validate(&board, &r, &FREE).err(),
            Some(ErrorKind::InvalidPromotion {
                rank: Rank::Knight,
                reason: "rank is not eligible for promotion"
            })
        );
    }

    #[test]
    fn pawn_reaching_far_row_must_promote() {
        let board = setup(&[(1, Team::Dark, Rank::Pawn, c(1, 4))]);
        let occupy = MoveRequest::occupy(RequestId(1), PieceId(1), c(0, 4));
        assert!(matches!(
            validate(&board, &occupy, &FREE),
            Err(ErrorKind::InvalidPromotion { rank: Rank::Pawn, .. })
        ));

        let promote = MoveRequest::promote(RequestId(2), PieceId(1), c(0, 4), Rank::Knight).expect("knight is a target");
        let plan = *validate(&board, &promote, &FREE).expect("promotion on arrival").plan();
        assert!(plan.moves());
        assert_eq!(plan.promotion, Some(Rank::Knight));
    }

    #[test]
    fn capture_promotion_resolves_the_victim() {
        let board = setup(&[
            (1, Team::Light, Rank::Pawn, c(6, 4)),
            (2, Team::Dark, Rank::Rook, c(7, 5)),
        ]);
        let r = MoveRequest::promote(RequestId(1), PieceId(1), c(7, 5), Rank::Queen).expect("queen is a target");
        let plan = *validate(&board, &r, &FREE).expect("capture promotion").plan();
        assert_eq!(plan.captured, Some(PieceId(2)));
    }
}
