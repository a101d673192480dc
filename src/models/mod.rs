pub mod matrix;
pub mod segment;
pub mod symbol;

pub use matrix::ModuleGrid;
pub use segment::{Mode, Segment, Termination};
pub use symbol::{ECLevel, MaskPattern, Version};
