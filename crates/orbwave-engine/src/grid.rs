//! The orb grid and its per-frame wave pass.

use orbwave_config::WaveConfig;

use crate::render::SpriteInstance;

/// Phase step per column index.
const COLUMN_PHASE: f64 = 0.3;
/// Phase step per row index.
const ROW_PHASE: f64 = 0.5;
/// Fixed amplitude of the row-driven height term.
const ROW_HEIGHT: f64 = 50.0;
/// Fixed gain of the column-driven pulse term.
const COLUMN_PULSE: f64 = 4.0;

/// A single orb: planar position fixed at construction, height and scale
/// rewritten every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub scale: f64,
}

/// Row-major flattened grid of `amount_x * amount_y` orbs, centered on the
/// origin in the XZ plane.
///
/// Index `i = ix * amount_y + iy`. The wave pass walks the exact traversal
/// order of construction, so an index maps to the same grid cell for the
/// grid's whole life.
pub struct OrbGrid {
    orbs: Vec<Orb>,
    amount_x: u32,
    amount_y: u32,
}

impl OrbGrid {
    /// Build the grid and apply the phase-zero wave pass so heights and
    /// scales are meaningful immediately.
    pub fn new(config: &WaveConfig) -> Self {
        let sep = config.separation;
        let span_x = config.amount_x as f64 * sep / 2.0;
        let span_z = config.amount_y as f64 * sep / 2.0;

        let mut orbs = Vec::with_capacity(config.orb_count());
        for ix in 0..config.amount_x {
            for iy in 0..config.amount_y {
                orbs.push(Orb {
                    x: ix as f64 * sep - span_x,
                    y: 0.0,
                    z: iy as f64 * sep - span_z,
                    scale: 0.0,
                });
            }
        }

        let mut grid = Self {
            orbs,
            amount_x: config.amount_x,
            amount_y: config.amount_y,
        };
        grid.update(0.0, config.height, config.scale);
        grid
    }

    /// Apply one wave pass for the given clock phase.
    ///
    /// Two independent sine terms, one phased by column and one by row,
    /// produce the diagonal traveling wave.
    pub fn update(&mut self, count: f64, height: f64, scale: f64) {
        let mut i = 0;
        for ix in 0..self.amount_x {
            for iy in 0..self.amount_y {
                let col = ((ix as f64 + count) * COLUMN_PHASE).sin();
                let row = ((iy as f64 + count) * ROW_PHASE).sin();
                let orb = &mut self.orbs[i];
                orb.y = col * height + row * ROW_HEIGHT;
                orb.scale = (col + 1.0) * COLUMN_PULSE + (row + 1.0) * scale;
                i += 1;
            }
        }
    }

    /// Rewrite `out` with one sprite per orb, in construction order.
    pub fn write_instances(&self, out: &mut Vec<SpriteInstance>) {
        out.clear();
        out.extend(self.orbs.iter().map(|orb| SpriteInstance {
            center: [orb.x as f32, orb.y as f32, orb.z as f32],
            size: orb.scale as f32,
        }));
    }

    /// The orb at grid cell `(ix, iy)`, if in bounds.
    pub fn orb(&self, ix: u32, iy: u32) -> Option<&Orb> {
        if ix >= self.amount_x || iy >= self.amount_y {
            return None;
        }
        self.orbs.get((ix * self.amount_y + iy) as usize)
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn len(&self) -> usize {
        self.orbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbs.is_empty()
    }

    /// Drop every orb. Only teardown calls this.
    pub fn clear(&mut self) {
        self.orbs.clear();
    }
}

// =============================================================================
// Tests
// =============================================================================
