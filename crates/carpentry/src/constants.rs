//! Workshop scenario constants

use crate::domain::board::Board;

// =============================================================================
// Toolbox
// =============================================================================

/// Spare fasteners the toolbox starts with
pub const INITIAL_SUPPLY: i32 = 10;

// =============================================================================
// Boards
// =============================================================================

/// Starting (required, current) pairs, processed in this order
///
/// The first three are old boards to strip, the last three are new boards
/// to assemble.
pub const STARTING_BOARDS: [(i32, i32); 6] = [(0, 3), (0, 1), (0, 6), (6, 0), (9, 0), (4, 0)];

/// Build the fixed starting board sequence
pub fn starting_boards() -> Vec<Board> {
    STARTING_BOARDS
        .iter()
        .map(|&(required, current)| Board::new(required, current))
        .collect()
}
