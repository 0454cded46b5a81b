// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Heart-rate zone tables and time-in-zone distributions.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Number of training zones in a table.
pub const ZONE_COUNT: usize = 5;

/// Inclusive BPM bounds of a single zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct ZoneBounds {
    pub min: u32,
    pub max: u32,
}

impl ZoneBounds {
    /// Whether `bpm` falls inside this band (both ends inclusive).
    pub fn contains(&self, bpm: u32) -> bool {
        self.min <= bpm && bpm <= self.max
    }
}

/// Five-zone heart-rate table derived from HRmax.
///
/// Serialized as `{zone1: {min, max}, ..., zone5: {min, max}}`, the shape the
/// mobile client keeps in its stored user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct ZoneTable {
    pub zone1: ZoneBounds,
    pub zone2: ZoneBounds,
    pub zone3: ZoneBounds,
    pub zone4: ZoneBounds,
    pub zone5: ZoneBounds,
}

impl ZoneTable {
    /// Get the bounds for a zone number (1-5).
    pub fn get(&self, zone: u8) -> Option<&ZoneBounds> {
        match zone {
            1 => Some(&self.zone1),
            2 => Some(&self.zone2),
            3 => Some(&self.zone3),
            4 => Some(&self.zone4),
            5 => Some(&self.zone5),
            _ => None,
        }
    }

    /// All zones paired with their 1-based index, lowest intensity first.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &ZoneBounds)> {
        [
            &self.zone1,
            &self.zone2,
            &self.zone3,
            &self.zone4,
            &self.zone5,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, bounds)| (i as u8 + 1, bounds))
    }

    /// True when every zone starts one BPM above the previous zone's max.
    pub fn is_contiguous(&self) -> bool {
        let bounds: Vec<&ZoneBounds> = self.iter().map(|(_, b)| b).collect();
        bounds.windows(2).all(|w| w[1].min == w[0].max + 1)
    }
}

/// Time spent in one zone during an activity.
///
/// Zone 0 means the reading was outside every band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct ZoneTimeSample {
    pub zone: u8,
    pub seconds: f64,
}

/// One zone's share of the total in-zone time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct ZoneShare {
    pub zone: u8,
    /// Share of in-zone time, 0-100
    pub percentage: f64,
    /// Exact seconds spent in the zone
    pub time: f64,
}

/// Time-in-zone breakdown for zones 1-5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/lib/generated/")
)]
pub struct ZoneDistribution {
    /// Always five entries, zone 1 first
    pub zones: Vec<ZoneShare>,
    /// Sum of time across zones 1-5
    pub total_seconds: f64,
    /// Time recorded outside every zone (zone 0)
    pub outside_seconds: f64,
}

impl ZoneDistribution {
    /// Get a zone's share by number (1-5).
    pub fn zone(&self, zone: u8) -> Option<&ZoneShare> {
        self.zones.iter().find(|s| s.zone == zone)
    }

    /// Sum of all zone percentages.
    pub fn total_percentage(&self) -> f64 {
        self.zones.iter().map(|s| s.percentage).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ZoneTable {
        ZoneTable {
            zone1: ZoneBounds { min: 94, max: 112 },
            zone2: ZoneBounds { min: 113, max: 131 },
            zone3: ZoneBounds { min: 132, max: 150 },
            zone4: ZoneBounds { min: 151, max: 168 },
            zone5: ZoneBounds { min: 169, max: 187 },
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let zones = table();
        assert!(zones.get(0).is_none());
        assert!(zones.get(6).is_none());
        assert_eq!(zones.get(3), Some(&ZoneBounds { min: 132, max: 150 }));
    }

    #[test]
    fn test_iter_is_ordered() {
        let indices: Vec<u8> = table().iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_contiguity_check() {
        let mut zones = table();
        assert!(zones.is_contiguous());

        zones.zone3.min = 133;
        assert!(!zones.is_contiguous());
    }

    #[test]
    fn test_table_json_shape() {
        let json = serde_json::to_value(table()).unwrap();
        assert_eq!(json["zone1"]["min"], 94);
        assert_eq!(json["zone5"]["max"], 187);
    }
}
