use clap::Parser;

use orbwave_config::{parse_hex, WaveOptions};

/// orbwave — an animated wave of orbs rendered over a transparent window.
#[derive(Parser, Debug)]
#[command(name = "orbwave", version, about)]
pub struct Args {
    /// Sprite tint as a hex color, e.g. "#4caf50" or "#fff" (the UI
    /// slider ran 0x000000–0xffffff).
    #[arg(long)]
    pub color: Option<String>,

    /// Grid spacing between adjacent orbs. Fixed for the window's life.
    #[arg(long)]
    pub separation: Option<f64>,

    /// Wave amplitude along the column axis (the UI slider ran 1–1000).
    #[arg(long)]
    pub height: Option<f64>,

    /// Number of grid columns. Fixed for the window's life.
    #[arg(long)]
    pub amount_x: Option<u32>,

    /// Number of grid rows. Fixed for the window's life.
    #[arg(long)]
    pub amount_y: Option<u32>,

    /// Wave speed multiplier (the UI slider ran 1–5).
    #[arg(long)]
    pub speed: Option<f64>,

    /// Orb pulse gain (the UI slider ran 1–50).
    #[arg(long)]
    pub scale: Option<f64>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Collect the flags into a partial option set; unset flags stay absent
    /// so the engine defaults win.
    pub fn wave_options(&self) -> WaveOptions {
        let color = self.color.as_deref().and_then(|s| {
            let parsed = parse_hex(s);
            if parsed.is_none() {
                tracing::warn!("ignoring unparseable --color value {s:?}");
            }
            parsed
        });

        WaveOptions {
            color,
            separation: self.separation,
            height: self.height,
            amount_x: self.amount_x,
            amount_y: self.amount_y,
            speed: self.speed,
            scale: self.scale,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_all_defaults() {
        let args = Args::parse_from(["orbwave"]);
        assert_eq!(args.wave_options(), WaveOptions::default());
    }

    #[test]
    fn flags_land_in_the_option_set() {
        let args = Args::parse_from([
            "orbwave",
            "--color",
            "#ff8800",
            "--speed",
            "2.5",
            "--amount-x",
            "20",
        ]);
        let opts = args.wave_options();
        assert_eq!(opts.color, Some(0xff8800));
        assert_eq!(opts.speed, Some(2.5));
        assert_eq!(opts.amount_x, Some(20));
        assert_eq!(opts.height, None);
    }

    #[test]
    fn bad_color_is_dropped_not_fatal() {
        let args = Args::parse_from(["orbwave", "--color", "chartreuse"]);
        assert_eq!(args.wave_options().color, None);
    }
}
