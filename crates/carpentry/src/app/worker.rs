//! Board reconciliation workflow
//!
//! A worker holds no state. Every call brings a board's `current` count to
//! its `required` count one fastener at a time, using whatever capability it
//! is handed.

use crate::domain::board::{Board, BoardState};
use crate::domain::toolbox::Toolbox;
use crate::domain::tools::{Drive, Remove, Rework};
use crate::error::WorkshopError;
use std::io::Write;

/// Unit operations performed during one pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkTally {
    /// Boards inspected
    pub inspected: usize,
    /// Fasteners driven in
    pub driven: u32,
    /// Fasteners pulled out
    pub removed: u32,
}

impl WorkTally {
    /// Net change applied to the supply (`removed - driven`)
    pub fn supply_delta(&self) -> i64 {
        i64::from(self.removed) - i64::from(self.driven)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Worker;

impl Worker {
    /// Drive fasteners until the board holds as many as it requires
    ///
    /// Returns the number of fasteners driven.
    pub fn assemble<D>(
        &self,
        driver: &D,
        supply: &mut i32,
        board: &mut Board,
        out: &mut dyn Write,
    ) -> Result<u32, WorkshopError>
    where
        D: Drive + ?Sized,
    {
        let mut driven = 0;
        while board.current < board.required {
            driver.drive(supply, board, out)?;
            driven += 1;
        }
        Ok(driven)
    }

    /// Pull fasteners until the board holds no more than it requires
    ///
    /// Returns the number of fasteners removed.
    pub fn disassemble<R>(
        &self,
        remover: &R,
        supply: &mut i32,
        board: &mut Board,
        out: &mut dyn Write,
    ) -> Result<u32, WorkshopError>
    where
        R: Remove + ?Sized,
    {
        let mut removed = 0;
        while board.current > board.required {
            remover.remove(supply, board, out)?;
            removed += 1;
        }
        Ok(removed)
    }

    /// Inspect every board in order and bring each one to its requirement
    pub fn process_all<T>(
        &self,
        tools: &T,
        supply: &mut i32,
        boards: &mut [Board],
        out: &mut dyn Write,
    ) -> Result<WorkTally, WorkshopError>
    where
        T: Rework + ?Sized,
    {
        let mut tally = WorkTally::default();

        for (i, board) in boards.iter_mut().enumerate() {
            writeln!(out, "inspecting board #{}: {}", i + 1, board)?;
            tally.inspected += 1;

            match board.state() {
                BoardState::NeedsDriving => {
                    tally.driven += self.assemble(tools, supply, board, out)?;
                }
                BoardState::NeedsRemoving => {
                    tally.removed += self.disassemble(tools, supply, board, out)?;
                }
                BoardState::Satisfied => {}
            }

            tracing::info!(board = i + 1, supply = *supply, "board satisfied");
        }

        tracing::info!(
            inspected = tally.inspected,
            driven = tally.driven,
            removed = tally.removed,
            supply = *supply,
            "pass complete"
        );
        Ok(tally)
    }

    /// Process boards against a toolbox's own tools and supply
    pub fn process_toolbox(
        &self,
        toolbox: &mut Toolbox,
        boards: &mut [Board],
        out: &mut dyn Write,
    ) -> Result<WorkTally, WorkshopError> {
        let (tools, supply) = toolbox.split_mut();
        self.process_all(tools, supply, boards, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tools::{Driver, Remover};
    use std::io;

    #[test]
    fn test_assemble_fills_board() {
        let mut supply = 10;
        let mut board = Board::fresh(4);

        let driven = Worker
            .assemble(&Driver, &mut supply, &mut board, &mut io::sink())
            .unwrap();

        assert_eq!(driven, 4);
        assert_eq!(supply, 6);
        assert!(board.is_satisfied());
    }

    #[test]
    fn test_disassemble_strips_board() {
        let mut supply = 0;
        let mut board = Board::worn(3);

        let removed = Worker
            .disassemble(&Remover, &mut supply, &mut board, &mut io::sink())
            .unwrap();

        assert_eq!(removed, 3);
        assert_eq!(supply, 3);
        assert!(board.is_satisfied());
    }

    #[test]
    fn test_assemble_ignores_overfull_board() {
        let mut supply = 1;
        let mut board = Board::new(1, 3);

        let driven = Worker
            .assemble(&Driver, &mut supply, &mut board, &mut io::sink())
            .unwrap();

        assert_eq!(driven, 0);
        assert_eq!(board.current, 3);
        assert_eq!(supply, 1);
    }

    #[test]
    fn test_disassemble_ignores_underfull_board() {
        let mut supply = 1;
        let mut board = Board::new(3, 1);

        let removed = Worker
            .disassemble(&Remover, &mut supply, &mut board, &mut io::sink())
            .unwrap();

        assert_eq!(removed, 0);
        assert_eq!(board.current, 1);
        assert_eq!(supply, 1);
    }

    #[test]
    fn test_process_all_writes_inspection_lines() {
        let mut toolbox = Toolbox::standard();
        let mut boards = [Board::new(1, 1), Board::fresh(1)];
        let mut out = Vec::new();

        let tally = Worker
            .process_toolbox(&mut toolbox, &mut boards, &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "inspecting board #1: {required:1 current:1}",
                "inspecting board #2: {required:1 current:0}",
                "driver: struck a fastener and drove it into the board.",
            ]
        );
        assert_eq!(
            tally,
            WorkTally {
                inspected: 2,
                driven: 1,
                removed: 0
            }
        );
        assert_eq!(toolbox.supply(), 9);
    }

    #[test]
    fn test_supply_delta() {
        let tally = WorkTally {
            inspected: 6,
            driven: 19,
            removed: 10,
        };
        assert_eq!(tally.supply_delta(), -9);
    }
}
