//! Wave field configuration.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the documented defaults.

use serde::{Deserialize, Serialize};

/// Options for the orb wave field.
///
/// `separation`, `amount_x`, and `amount_y` are fixed once an engine is
/// built from this config; the grid is never rebuilt. The remaining
/// options are read live each frame and may change at any time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WaveConfig {
    /// Sprite tint as packed 0xRRGGBB.
    pub color: u32,
    /// Grid spacing between adjacent orbs along X and Z.
    pub separation: f64,
    /// Amplitude of the column-driven height term.
    pub height: f64,
    /// Number of grid columns.
    pub amount_x: u32,
    /// Number of grid rows.
    pub amount_y: u32,
    /// Multiplier applied to the frame-counter increment.
    pub speed: f64,
    /// Amplitude of the row-driven pulse term.
    pub scale: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            separation: 100.0,
            height: 50.0,
            amount_x: 50,
            amount_y: 50,
            speed: 1.0,
            scale: 4.0,
        }
    }
}

impl WaveConfig {
    /// Total number of orbs in the grid this config describes.
    pub fn orb_count(&self) -> usize {
        self.amount_x as usize * self.amount_y as usize
    }
}

// =============================================================================
// Tests
// =============================================================================
