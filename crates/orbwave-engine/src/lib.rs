pub mod camera;
pub mod clock;
pub mod engine;
pub mod grid;
pub mod input;
pub mod listeners;
pub mod math;
pub mod render;

pub use camera::WaveCamera;
pub use clock::{FrameClock, FrameLoop};
pub use engine::{EngineError, WaveEngine};
pub use grid::OrbGrid;
pub use input::{PointerState, TouchPoint};
pub use render::{GpuSpriteRenderer, NullSpriteRenderer, RenderError, SpriteInstance, SpriteRenderer};
