use std::ops::{Mul, Neg};

/// Direction / step vector between two coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub d_row: i8,
    pub d_col: i8,
}

impl Delta {
    #[inline]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    /// Largest absolute component (king distance).
    #[inline]
    pub const fn chebyshev_norm(self) -> i8 {
        let r = self.d_row.abs();
        let c = self.d_col.abs();
        if r > c {
            r
        } else {
            c
        }
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.d_row == 0 && self.d_col == 0
    }
}

impl Neg for Delta {
    type Output = Delta;

    #[inline]
    fn neg(self) -> Self::Output {
        Delta::new(-self.d_row, -self.d_col)
    }
}

impl Mul<i8> for Delta {
    type Output = Delta;

    #[inline]
    fn mul(self, rhs: i8) -> Delta {
        Delta::new(self.d_row * rhs, self.d_col * rhs)
    }
}

pub const ORTHOGONAL_STEPS: [Delta; 4] = [
    Delta { d_row: 1, d_col: 0 },
    Delta { d_row: -1, d_col: 0 },
    Delta { d_row: 0, d_col: 1 },
    Delta { d_row: 0, d_col: -1 },
];

pub const DIAGONAL_STEPS: [Delta; 4] = [
    Delta { d_row: 1, d_col: 1 },
    Delta { d_row: 1, d_col: -1 },
    Delta { d_row: -1, d_col: 1 },
    Delta { d_row: -1, d_col: -1 },
];

/// The 8 king steps around the origin.
pub const KING_STEPS: [Delta; 8] = [
    Delta { d_row: 1, d_col: 0 },
    Delta { d_row: -1, d_col: 0 },
    Delta { d_row: 0, d_col: 1 },
    Delta { d_row: 0, d_col: -1 },
    Delta { d_row: 1, d_col: 1 },
    Delta { d_row: 1, d_col: -1 },
    Delta { d_row: -1, d_col: 1 },
    Delta { d_row: -1, d_col: -1 },
];

pub const KNIGHT_JUMPS: [Delta; 8] = [
    Delta { d_row: 2, d_col: 1 },
    Delta { d_row: 1, d_col: 2 },
    Delta { d_row: -1, d_col: 2 },
    Delta { d_row: -2, d_col: 1 },
    Delta { d_row: -2, d_col: -1 },
    Delta { d_row: -1, d_col: -2 },
    Delta { d_row: 1, d_col: -2 },
    Delta { d_row: 2, d_col: -1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_steps_are_all_unit_distance() {
        assert!(KING_STEPS.iter().all(|d| d.chebyshev_norm() == 1));
    }

    #[test]
    fn scaling_and_negation() {
        let d = Delta::new(1, -1) * 3;
        assert_eq!(d, Delta::new(3, -3));
        assert_eq!(-d, Delta::new(-3, 3));
        assert!(!d.is_zero());
    }
}
