/// Square grid of sampled QR modules, packed one bit per module
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row, both starting
/// at the top-left module. `true` means dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ModuleGrid {
    /// Create an all-light grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height).div_ceil(8)],
        }
    }

    /// Build a grid from row-major rows; rows shorter than the first are padded light
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &dark) in row.as_ref().iter().enumerate().take(width) {
                grid.set(x, y, dark);
            }
        }
        grid
    }

    /// Grid width in modules
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in modules
    pub fn height(&self) -> usize {
        self.height
    }

    /// Side length, if the grid is square
    pub fn side(&self) -> Option<usize> {
        (self.width == self.height).then_some(self.width)
    }

    /// Module at (x, y); out-of-range reads are light
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set module at (x, y); out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        if dark {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Flip module at (x, y)
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        self.data[index / 8] ^= 1 << (index % 8);
    }

    /// Number of dark modules
    pub fn count_dark(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Render rows as `#` (dark) and `_` (light), one line per row
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if self.get(x, y) { '#' } else { '_' });
            }
            out.push('\n');
        }
        out
    }
}

impl Default for ModuleGrid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
