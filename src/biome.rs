//! Biome catalog and classification
//!
//! Maps a per-cell (elevation, temperature, humidity) triple in [0,1]^3 to
//! exactly one biome. Classification is first-match-wins and total: every
//! point in the unit cube lands on a defined branch, with swamp as the
//! guaranteed wettest fallback.

// Elevation bands
const MOUNTAIN_LEVEL: f64 = 0.8;
const ALPINE_LEVEL: f64 = 0.6;
const BEACH_LEVEL: f64 = 0.35;
const SEA_LEVEL: f64 = 0.3;

// Temperature bands
const FREEZING_TEMP: f64 = 0.2;
const COLD_TEMP: f64 = 0.4;
const HOT_TEMP: f64 = 0.8;

// Humidity bands
const ARID_HUMIDITY: f64 = 0.2;
const DRY_HUMIDITY: f64 = 0.4;
const FROZEN_SPLIT_HUMIDITY: f64 = 0.5;
const WET_HUMIDITY: f64 = 0.8;

/// Terrain biome category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Biome {
    FrozenDesert,
    Tundra,
    Taiga,
    Alpine,
    Desert,
    Savanna,
    Grassland,
    TemperateForest,
    TropicalForest,
    Rainforest,
    Swamp,
    Ocean,
    Beach,
    SnowPeak,
    RockyMountain,
}

impl Biome {
    pub fn all() -> &'static [Self] {
        &[
            Self::FrozenDesert,
            Self::Tundra,
            Self::Taiga,
            Self::Alpine,
            Self::Desert,
            Self::Savanna,
            Self::Grassland,
            Self::TemperateForest,
            Self::TropicalForest,
            Self::Rainforest,
            Self::Swamp,
            Self::Ocean,
            Self::Beach,
            Self::SnowPeak,
            Self::RockyMountain,
        ]
    }

    /// Classify a cell from its normalized channel triple.
    ///
    /// Branch order is load-bearing: extreme elevation overrides the
    /// temperature/humidity categories entirely, and the water/beach bands
    /// come before any climate split.
    pub fn classify(elevation: f64, temperature: f64, humidity: f64) -> Biome {
        match elevation {
            e if e > MOUNTAIN_LEVEL => {
                if temperature < FREEZING_TEMP {
                    Biome::SnowPeak
                } else {
                    Biome::RockyMountain
                }
            }
            e if e < SEA_LEVEL => Biome::Ocean,
            e if e < BEACH_LEVEL => Biome::Beach,
            _ => Self::classify_inland(elevation, temperature, humidity),
        }
    }

    /// Climate split for mid-elevation land cells.
    fn classify_inland(elevation: f64, temperature: f64, humidity: f64) -> Biome {
        match (temperature, humidity) {
            // Frozen band
            (t, h) if t < FREEZING_TEMP => {
                if h < FROZEN_SPLIT_HUMIDITY {
                    Biome::FrozenDesert
                } else {
                    Biome::Tundra
                }
            }

            // Cold band
            (t, _) if t < COLD_TEMP => Biome::Taiga,

            // High ground in moderate-to-hot climates is bare rock
            _ if elevation > ALPINE_LEVEL => Biome::Alpine,

            // Hot band, driest to wettest
            (t, h) if t > HOT_TEMP => {
                if h < ARID_HUMIDITY {
                    Biome::Desert
                } else if h < DRY_HUMIDITY {
                    Biome::Savanna
                } else if h > WET_HUMIDITY {
                    Biome::Rainforest
                } else {
                    Biome::TropicalForest
                }
            }

            // Temperate band, driest to wettest; swamp is the fallback leaf
            (_, h) if h < DRY_HUMIDITY => Biome::Grassland,
            (_, h) if h < WET_HUMIDITY => Biome::TemperateForest,
            _ => Biome::Swamp,
        }
    }

    /// Display name for legends and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Biome::FrozenDesert => "Frozen Desert",
            Biome::Tundra => "Tundra",
            Biome::Taiga => "Taiga",
            Biome::Alpine => "Alpine",
            Biome::Desert => "Desert",
            Biome::Savanna => "Savanna",
            Biome::Grassland => "Grassland",
            Biome::TemperateForest => "Temperate Forest",
            Biome::TropicalForest => "Tropical Forest",
            Biome::Rainforest => "Rainforest",
            Biome::Swamp => "Swamp",
            Biome::Ocean => "Ocean",
            Biome::Beach => "Beach",
            Biome::SnowPeak => "Snow Peak",
            Biome::RockyMountain => "Rocky Mountain",
        }
    }

    /// Get RGB color for rendering. Metadata for the compositor, never read
    /// back by classification.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Biome::FrozenDesert => (232, 232, 232),
            Biome::Tundra => (221, 221, 221),
            Biome::Taiga => (204, 212, 188),
            Biome::Alpine => (108, 108, 108),
            Biome::Desert => (228, 213, 167),
            Biome::Savanna => (197, 182, 141),
            Biome::Grassland => (144, 175, 125),
            Biome::TemperateForest => (75, 115, 55),
            Biome::TropicalForest => (45, 79, 30),
            Biome::Rainforest => (27, 51, 18),
            Biome::Swamp => (75, 79, 58),
            Biome::Ocean => (30, 77, 109),
            Biome::Beach => (230, 217, 173),
            Biome::SnowPeak => (255, 255, 255),
            Biome::RockyMountain => (122, 122, 122),
        }
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
