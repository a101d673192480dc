//! Zig-zag module placement order

/// Visits every module outside the vertical timing column in codeword
/// placement order.
///
/// Columns are walked in pairs from the right edge, bottom-up in the first
/// pair and alternating direction afterwards. Within a row the right column
/// comes first. Column 6 is skipped, so the pairs left of it are (5, 4),
/// (3, 2) and (1, 0).
#[derive(Debug, Clone)]
pub struct ZigZag {
    size: usize,
    /// Right column of the current pair
    column: usize,
    row: usize,
    upward: bool,
    on_left: bool,
    done: bool,
}

impl ZigZag {
    /// Start at the bottom-right module of a `size` × `size` symbol
    pub fn new(size: usize) -> Self {
        Self {
            size,
            column: size.saturating_sub(1),
            row: size.saturating_sub(1),
            upward: true,
            on_left: false,
            done: size < 2,
        }
    }

    fn advance(&mut self) {
        if !self.on_left {
            self.on_left = true;
            return;
        }
        self.on_left = false;

        let at_edge = if self.upward {
            self.row == 0
        } else {
            self.row + 1 == self.size
        };
        if !at_edge {
            if self.upward {
                self.row -= 1;
            } else {
                self.row += 1;
            }
            return;
        }

        self.upward = !self.upward;
        if self.column < 3 {
            self.done = true;
            return;
        }
        self.column -= 2;
        if self.column == 6 {
            self.column = 5;
        }
    }
}

impl Iterator for ZigZag {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let x = if self.on_left {
            self.column - 1
        } else {
            self.column
        };
        let item = (x, self.row);
        self.advance();
        Some(item)
    }
}
