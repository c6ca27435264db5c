pub mod color;
pub mod merge;
pub mod schema;

pub use color::{parse_hex, unpack_rgb};
pub use merge::{merge, WaveOptions};
pub use schema::WaveConfig;
