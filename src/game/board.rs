use std::fmt;

use super::player::Player;

pub const PITS_PER_SIDE: usize = 6;
pub const CELLS: usize = 14;
pub const STORE_A: usize = 6;
pub const STORE_B: usize = 13;
pub const SEEDS_PER_PIT: u8 = 4;
pub const TOTAL_SEEDS: u32 = 2 * PITS_PER_SIDE as u32 * SEEDS_PER_PIT as u32;

/// The 14-cell linear board.
///
/// Cells 0-5 are A's pits, 6 is A's store, 7-12 are B's pits and 13 is B's
/// store. Sowing runs in increasing index order and wraps from 13 to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// Create the starting board: four seeds in every pit, empty stores
    pub fn new() -> Self {
        let mut cells = [SEEDS_PER_PIT; CELLS];
        cells[STORE_A] = 0;
        cells[STORE_B] = 0;
        Board { cells }
    }

    /// Build a board from raw cell counts
    pub fn from_cells(cells: [u8; CELLS]) -> Self {
        Board { cells }
    }

    /// Get the seed count at a cell
    pub fn get(&self, index: usize) -> u8 {
        self.cells[index]
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Seeds in `player`'s store
    pub fn store(&self, player: Player) -> u8 {
        self.cells[player.store()]
    }

    /// Seeds still in play on `player`'s side
    pub fn pit_total(&self, player: Player) -> u32 {
        player.pits().map(|i| u32::from(self.cells[i])).sum()
    }

    /// Whether all six of `player`'s pits are empty
    pub fn side_empty(&self, player: Player) -> bool {
        player.pits().all(|i| self.cells[i] == 0)
    }

    /// Total seeds on the board
    pub fn total(&self) -> u32 {
        self.cells.iter().map(|&c| u32::from(c)).sum()
    }

    /// Lift every seed from `pit` and sow them one per cell for `mover`,
    /// skipping the opponent's store. Returns the index of the last sown cell.
    ///
    /// The caller guarantees `pit` holds at least one seed.
    pub(crate) fn sow(&mut self, pit: usize, mover: Player) -> usize {
        let skip = mover.other().store();
        let mut seeds = self.cells[pit];
        self.cells[pit] = 0;

        let mut pos = pit;
        while seeds > 0 {
            pos = (pos + 1) % CELLS;
            if pos == skip {
                continue;
            }
            self.cells[pos] += 1;
            seeds -= 1;
        }
        pos
    }

    /// Move the landing seed and everything opposite it into `mover`'s store.
    /// Returns the number of seeds captured, or 0 when the capture rule does
    /// not apply.
    pub(crate) fn capture(&mut self, last: usize, mover: Player) -> u8 {
        if !mover.owns(last) || self.cells[last] != 1 {
            return 0;
        }
        let opposite = opposite(last);
        if self.cells[opposite] == 0 {
            return 0;
        }
        let captured = self.cells[opposite] + 1;
        self.cells[last] = 0;
        self.cells[opposite] = 0;
        self.cells[mover.store()] += captured;
        captured
    }

    /// Sweep each side's remaining pits into its own store
    pub(crate) fn sweep(&mut self) {
        for player in [Player::A, Player::B] {
            let remaining: u8 = player.pits().map(|i| self.cells[i]).sum();
            for i in player.pits() {
                self.cells[i] = 0;
            }
            self.cells[player.store()] += remaining;
        }
    }
}

/// The pit directly across the board from `pit`
pub fn opposite(pit: usize) -> usize {
    2 * PITS_PER_SIDE - pit
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+----+")?;
        for _ in 0..PITS_PER_SIDE {
            write!(f, "----+")?;
        }
        writeln!(f, "----+")?;

        write!(f, "|    |")?;
        for pit in Player::B.pits().rev() {
            write!(f, " {:>2} |", self.cells[pit])?;
        }
        writeln!(f, "    |")?;

        write!(f, "| {:>2} +", self.cells[STORE_B])?;
        for _ in 0..PITS_PER_SIDE {
            write!(f, "----+")?;
        }
        writeln!(f, " {:>2} |", self.cells[STORE_A])?;

        write!(f, "|    |")?;
        for pit in Player::A.pits() {
            write!(f, " {:>2} |", self.cells[pit])?;
        }
        writeln!(f, "    |")?;

        write!(f, "+----+")?;
        for _ in 0..PITS_PER_SIDE {
            write!(f, "----+")?;
        }
        write!(f, "----+")
    }
}
