//! The memory tape: a growable array of byte cells and a data pointer.

/// A growable sequence of `u8` cells addressed by a single data pointer.
///
/// The tape starts as one zeroed cell with the pointer on it. It grows by a
/// single zeroed cell whenever the pointer advances past the current end and
/// never shrinks, so a cell index obtained during a run stays valid for the
/// rest of that run. Moving left from cell 0 is a silent no-op: the pointer
/// is clamped at 0, never wrapped and never an error.
#[derive(Debug, Clone)]
pub struct Tape {
    cells: Vec<u8>,
    pointer: usize,
}

impl Tape {
    /// Create a tape holding a single zeroed cell.
    pub fn new() -> Self {
        Self {
            cells: vec![0],
            pointer: 0,
        }
    }

    /// Add 1 to the cell under the pointer, wrapping 255 back to 0.
    pub fn increment_cell(&mut self) {
        self.cells[self.pointer] = self.cells[self.pointer].wrapping_add(1);
    }

    /// Subtract 1 from the cell under the pointer, wrapping 0 back to 255.
    pub fn decrement_cell(&mut self) {
        self.cells[self.pointer] = self.cells[self.pointer].wrapping_sub(1);
    }

    /// Move the pointer one cell to the right, appending a zeroed cell when
    /// it steps past the end of the tape.
    pub fn advance_pointer(&mut self) {
        self.pointer += 1;
        if self.pointer == self.cells.len() {
            self.cells.push(0);
        }
    }

    /// Move the pointer one cell to the left. At cell 0 this is a no-op.
    pub fn retreat_pointer(&mut self) {
        self.pointer = self.pointer.saturating_sub(1);
    }

    /// Value of the cell under the pointer.
    pub fn current(&self) -> u8 {
        self.cells[self.pointer]
    }

    /// Overwrite the cell under the pointer.
    pub fn set_current(&mut self, value: u8) {
        self.cells[self.pointer] = value;
    }

    /// Value of the cell at `index`. Loop continuation conditions re-read the
    /// cell captured at loop entry through this.
    pub fn cell(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Current pointer position.
    pub fn position(&self) -> usize {
        self.pointer
    }

    /// Every cell visited so far.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_single_zeroed_cell() {
        let tape = Tape::new();
        assert_eq!(tape.cells(), &[0]);
        assert_eq!(tape.position(), 0);
    }

    #[test]
    fn increment_wraps_255_to_0() {
        let mut tape = Tape::new();
        tape.set_current(255);
        tape.increment_cell();
        assert_eq!(tape.current(), 0);
    }

    #[test]
    fn decrement_wraps_0_to_255() {
        let mut tape = Tape::new();
        tape.decrement_cell();
        assert_eq!(tape.current(), 255);
    }

    #[test]
    fn advance_appends_one_zeroed_cell_at_the_end() {
        let mut tape = Tape::new();
        tape.set_current(7);
        tape.advance_pointer();
        assert_eq!(tape.position(), 1);
        assert_eq!(tape.cells(), &[7, 0]);
    }

    #[test]
    fn advance_over_visited_cells_does_not_grow() {
        let mut tape = Tape::new();
        tape.advance_pointer();
        tape.retreat_pointer();
        tape.advance_pointer();
        assert_eq!(tape.cells().len(), 2);
    }

    #[test]
    fn retreat_clamps_at_cell_zero() {
        let mut tape = Tape::new();
        tape.retreat_pointer();
        tape.retreat_pointer();
        assert_eq!(tape.position(), 0);
    }

    #[test]
    fn retreat_returns_to_previous_cell() {
        let mut tape = Tape::new();
        tape.increment_cell();
        tape.advance_pointer();
        tape.retreat_pointer();
        assert_eq!(tape.position(), 0);
        assert_eq!(tape.current(), 1);
    }
}
