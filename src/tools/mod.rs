//! Grid acquisition helpers
//!
//! The acquirer only handles clean, upright, pixel-aligned renderings: the
//! first dark pixel is the symbol's top-left corner, the shortest dark run on
//! the corner's row and column is one module, and the version follows from
//! the measured width. There is no detection or perspective correction.

use crate::models::{ModuleGrid, Version};
use image::GrayImage;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Pixels darker than this are dark modules
const LUMA_THRESHOLD: u8 = 128;

/// Errors raised while turning an image or text into a module grid
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to read grid file: {0}")]
    Io(#[from] std::io::Error),
    #[error("image has no dark pixels")]
    Blank,
    #[error("module size must be at least one pixel")]
    ZeroModuleSize,
    #[error("measured width of {modules:.2} modules is not a QR symbol size")]
    AmbiguousVersion { modules: f64 },
    #[error("unknown QR version {0} (expected 1-40)")]
    UnknownVersion(u8),
    #[error("symbol of {side} modules at {module_size}px does not fit the image")]
    OutOfBounds { side: usize, module_size: u32 },
    #[error("line {line}, column {column}: unexpected character {ch:?}")]
    InvalidCharacter {
        line: usize,
        column: usize,
        ch: char,
    },
    #[error("line {line} has {found} modules, expected {expected}")]
    RaggedRows {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid text is empty")]
    EmptyGrid,
}

pub type Result<T> = std::result::Result<T, AcquireError>;

/// Overrides for values the acquirer would otherwise measure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcquireOptions {
    /// Module size in pixels
    pub module_size: Option<u32>,
    /// Symbol version
    pub version: Option<u8>,
}

/// A sampled grid and the geometry it was sampled with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquiredGrid {
    pub grid: ModuleGrid,
    pub version: Version,
    /// Top-left corner of the symbol in pixels
    pub origin: (u32, u32),
    pub module_size: u32,
}

fn is_dark(image: &GrayImage, x: u32, y: u32) -> bool {
    image.get_pixel(x, y).0[0] < LUMA_THRESHOLD
}

/// First dark pixel in row-major order
fn find_origin(image: &GrayImage) -> Option<(u32, u32)> {
    (0..image.height())
        .flat_map(|y| (0..image.width()).map(move |x| (x, y)))
        .find(|&(x, y)| is_dark(image, x, y))
}

/// Shortest run of `true` in `pixels`
fn shortest_dark_run(pixels: impl Iterator<Item = bool>) -> Option<u32> {
    let mut shortest: Option<u32> = None;
    let mut run = 0u32;
    for dark in pixels.chain(std::iter::once(false)) {
        if dark {
            run += 1;
        } else if run > 0 {
            shortest = Some(shortest.map_or(run, |s| s.min(run)));
            run = 0;
        }
    }
    shortest
}

fn measure_module_size(image: &GrayImage, (ox, oy): (u32, u32)) -> Option<u32> {
    let row = shortest_dark_run((ox..image.width()).map(|x| is_dark(image, x, oy)));
    let column = shortest_dark_run((oy..image.height()).map(|y| is_dark(image, ox, y)));
    match (row, column) {
        (Some(r), Some(c)) => Some(r.min(c)),
        (r, c) => r.or(c),
    }
}

/// Version whose side best matches the symbol width on the origin row
fn measure_version(image: &GrayImage, (ox, oy): (u32, u32), module_size: u32) -> Result<Version> {
    let last_dark = (ox..image.width())
        .rev()
        .find(|&x| is_dark(image, x, oy))
        .unwrap_or(ox);
    let modules = f64::from(last_dark - ox + 1) / f64::from(module_size);
    let rounded = modules.round() as usize;

    [rounded, rounded.saturating_sub(1), rounded + 1]
        .into_iter()
        .find_map(Version::from_side)
        .ok_or(AcquireError::AmbiguousVersion { modules })
}

/// Sample a module grid from a grayscale rendering
pub fn acquire_grid(image: &GrayImage, options: &AcquireOptions) -> Result<AcquiredGrid> {
    let origin = find_origin(image).ok_or(AcquireError::Blank)?;

    let module_size = match options.module_size {
        Some(size) => size,
        None => measure_module_size(image, origin).ok_or(AcquireError::Blank)?,
    };
    if module_size == 0 {
        return Err(AcquireError::ZeroModuleSize);
    }

    let version = match options.version {
        Some(n) => Version::new(n).ok_or(AcquireError::UnknownVersion(n))?,
        None => measure_version(image, origin, module_size)?,
    };
    let side = version.size();

    let span = side as u64 * u64::from(module_size);
    if u64::from(origin.0) + span > u64::from(image.width())
        || u64::from(origin.1) + span > u64::from(image.height())
    {
        return Err(AcquireError::OutOfBounds { side, module_size });
    }

    let mut grid = ModuleGrid::new(side, side);
    let centre = module_size / 2;
    for y in 0..side {
        for x in 0..side {
            let px = origin.0 + x as u32 * module_size + centre;
            let py = origin.1 + y as u32 * module_size + centre;
            grid.set(x, y, is_dark(image, px, py));
        }
    }

    debug!(
        origin = ?origin,
        module_size,
        %version,
        dark = grid.count_dark(),
        "grid acquired"
    );
    Ok(AcquiredGrid {
        grid,
        version,
        origin,
        module_size,
    })
}

/// Load an image from disk and sample its module grid
pub fn load_grid<P: AsRef<Path>>(path: P, options: &AcquireOptions) -> Result<AcquiredGrid> {
    let img = image::open(path)?;
    acquire_grid(&img.to_luma8(), options)
}

/// Draw a grid as a grayscale image with a light quiet zone
pub fn render_grid(grid: &ModuleGrid, module_size: u32, quiet_zone: u32) -> GrayImage {
    let width = (grid.width() as u32 + 2 * quiet_zone) * module_size;
    let height = (grid.height() as u32 + 2 * quiet_zone) * module_size;
    GrayImage::from_fn(width, height, |px, py| {
        let x = (px / module_size).checked_sub(quiet_zone);
        let y = (py / module_size).checked_sub(quiet_zone);
        let dark = match (x, y) {
            (Some(x), Some(y)) => grid.get(x as usize, y as usize),
            _ => false,
        };
        image::Luma([if dark { 0 } else { 255 }])
    })
}

/// Parse a text grid, one row per line
///
/// `#`, `1` and `X` are dark; `_`, `0` and `.` are light. Whitespace is
/// ignored and blank lines are skipped.
pub fn parse_grid(text: &str) -> Result<ModuleGrid> {
    let mut rows: Vec<Vec<bool>> = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        let mut row = Vec::new();
        for (column, ch) in line.chars().enumerate() {
            match ch {
                '#' | '1' | 'X' => row.push(true),
                '_' | '0' | '.' => row.push(false),
                c if c.is_whitespace() => {}
                ch => {
                    return Err(AcquireError::InvalidCharacter {
                        line: line_idx + 1,
                        column: column + 1,
                        ch,
                    });
                }
            }
        }
        if row.is_empty() {
            continue;
        }
        let expected = rows.first().map_or(row.len(), Vec::len);
        if row.len() != expected {
            return Err(AcquireError::RaggedRows {
                line: line_idx + 1,
                expected,
                found: row.len(),
            });
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(AcquireError::EmptyGrid);
    }
    Ok(ModuleGrid::from_rows(&rows))
}

/// Read and parse a text grid file
pub fn read_grid_file<P: AsRef<Path>>(path: P) -> Result<ModuleGrid> {
    parse_grid(&fs::read_to_string(path)?)
}
