//! Board record
//!
//! A board only knows how many fasteners it needs and how many it holds.
//! Tools change `current`; nothing else does. Counts are signed so a tool
//! used past zero leaves a negative count instead of wrapping.

use std::fmt;

/// Surface being worked on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    /// Fasteners the board should end up with
    pub required: i32,
    /// Fasteners currently driven into the board
    pub current: i32,
}

/// Where a board stands relative to its requirement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardState {
    /// `current < required`
    NeedsDriving,
    /// `current > required`
    NeedsRemoving,
    /// `current == required`
    Satisfied,
}

impl Board {
    pub fn new(required: i32, current: i32) -> Self {
        Self { required, current }
    }

    /// New board with nothing driven in yet
    pub fn fresh(required: i32) -> Self {
        Self::new(required, 0)
    }

    /// Old board whose fasteners all have to come out
    pub fn worn(current: i32) -> Self {
        Self::new(0, current)
    }

    pub fn state(&self) -> BoardState {
        use std::cmp::Ordering;

        match self.current.cmp(&self.required) {
            Ordering::Less => BoardState::NeedsDriving,
            Ordering::Greater => BoardState::NeedsRemoving,
            Ordering::Equal => BoardState::Satisfied,
        }
    }

    #[inline]
    pub fn is_satisfied(&self) -> bool {
        self.current == self.required
    }

    /// Number of unit operations left before the board is satisfied
    #[inline]
    pub fn gap(&self) -> u32 {
        self.current.abs_diff(self.required)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{required:{} current:{}}}", self.required, self.current)
    }
}
