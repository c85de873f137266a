//! Styled text model.
//!
//! Converts raw text with embedded SGR color sequences into styled
//! segments, ready for the marquee to draw:
//! - `color`: RGB to 256-color quantization
//! - `registry`: (fg, bg) pair deduplication into handles
//! - `parser`: one raw line into a `MarqueeLine`
//! - `block`: a whole buffer into a `TextBlock`

pub mod block;
pub mod color;
pub mod parser;
pub mod registry;
pub mod types;

pub use block::{build_block, split_lines};
pub use color::quantize;
pub use parser::parse_line;
pub use registry::{ColorPair, ColorPairRegistry};
pub use types::{CapacityPolicy, ColorHandle, Limits, MarqueeLine, TextBlock, TextSegment};
