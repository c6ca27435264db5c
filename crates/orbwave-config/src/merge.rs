//! Partial option updates.
//!
//! A [`WaveOptions`] carries only the fields the caller wants to change;
//! [`merge`] folds it over a full [`WaveConfig`]. A field left `None` keeps
//! its current value — it never falls back to the default.

use serde::{Deserialize, Serialize};

use crate::schema::WaveConfig;

/// A partial set of wave options. Every field is optional.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WaveOptions {
    pub color: Option<u32>,
    pub separation: Option<f64>,
    pub height: Option<f64>,
    pub amount_x: Option<u32>,
    pub amount_y: Option<u32>,
    pub speed: Option<f64>,
    pub scale: Option<f64>,
}

/// Merge a partial update over the current config.
///
/// Pure and total over the key set: a supplied value wins, an absent one
/// keeps the current value.
pub fn merge(current: WaveConfig, partial: &WaveOptions) -> WaveConfig {
    WaveConfig {
        color: partial.color.unwrap_or(current.color),
        separation: partial.separation.unwrap_or(current.separation),
        height: partial.height.unwrap_or(current.height),
        amount_x: partial.amount_x.unwrap_or(current.amount_x),
        amount_y: partial.amount_y.unwrap_or(current.amount_y),
        speed: partial.speed.unwrap_or(current.speed),
        scale: partial.scale.unwrap_or(current.scale),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_partial_changes_nothing() {
        let current = WaveConfig {
            height: 120.0,
            speed: 3.0,
            ..Default::default()
        };
        let next = merge(current, &WaveOptions::default());
        assert_eq!(next, current);
    }

    #[test]
    fn single_field_merge_touches_only_that_field() {
        let current = WaveConfig::default();
        let next = merge(
            current,
            &WaveOptions {
                height: Some(10.0),
                ..Default::default()
            },
        );
        assert_eq!(next.height, 10.0);
        assert_eq!(next.color, current.color);
        assert_eq!(next.separation, current.separation);
        assert_eq!(next.amount_x, current.amount_x);
        assert_eq!(next.amount_y, current.amount_y);
        assert_eq!(next.speed, current.speed);
        assert_eq!(next.scale, current.scale);
    }

    #[test]
    fn absent_field_keeps_current_value_not_default() {
        // height already diverged from the default; an unrelated update
        // must not reset it.
        let current = WaveConfig {
            height: 999.0,
            ..Default::default()
        };
        let next = merge(
            current,
            &WaveOptions {
                speed: Some(2.0),
                ..Default::default()
            },
        );
        assert_eq!(next.height, 999.0);
        assert_eq!(next.speed, 2.0);
    }

    #[test]
    fn full_partial_replaces_everything() {
        let partial = WaveOptions {
            color: Some(0x123456),
            separation: Some(25.0),
            height: Some(1.0),
            amount_x: Some(2),
            amount_y: Some(3),
            speed: Some(0.5),
            scale: Some(9.0),
        };
        let next = merge(WaveConfig::default(), &partial);
        assert_eq!(next.color, 0x123456);
        assert_eq!(next.separation, 25.0);
        assert_eq!(next.height, 1.0);
        assert_eq!(next.amount_x, 2);
        assert_eq!(next.amount_y, 3);
        assert_eq!(next.speed, 0.5);
        assert_eq!(next.scale, 9.0);
    }

    #[test]
    fn options_survive_a_serde_round_trip() {
        let opts = WaveOptions {
            color: Some(0xff8800),
            speed: Some(2.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&opts).unwrap();
        let back: WaveOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opts);

        // Absent fields stay absent through the trip.
        assert!(back.height.is_none());
        assert!(back.amount_x.is_none());
    }

    #[test]
    fn options_default_is_all_none() {
        let opts = WaveOptions::default();
        assert!(opts.color.is_none());
        assert!(opts.separation.is_none());
        assert!(opts.height.is_none());
        assert!(opts.amount_x.is_none());
        assert!(opts.amount_y.is_none());
        assert!(opts.speed.is_none());
        assert!(opts.scale.is_none());
    }
}
