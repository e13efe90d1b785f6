//! Terrain generation orchestration
//!
//! Drives three independent fractal noise channels (elevation, temperature,
//! humidity) and classifies every grid cell into a biome. Generation is a
//! pure function of (seed, dimensions): the same inputs always produce a
//! bit-identical grid.

use rayon::prelude::*;
use thiserror::Error;

use crate::biome::Biome;
use crate::fractal::{FractalParams, FractalSampler};
use crate::grid::Grid;

/// Per-channel noise scales, in pixels per noise unit. Lower values produce
/// higher-frequency terrain. The three channels use different scales so
/// their features do not align even before the seed offsets decorrelate
/// them.
#[derive(Clone, Copy, Debug)]
pub struct ChannelScales {
    pub elevation: f64,
    pub temperature: f64,
    pub humidity: f64,
}

impl Default for ChannelScales {
    fn default() -> Self {
        Self {
            elevation: 150.0,
            temperature: 200.0,
            humidity: 180.0,
        }
    }
}

/// Full generation configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeneratorConfig {
    pub scales: ChannelScales,
    pub fractal: FractalParams,
}

/// The normalized channel values for one grid cell, each in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChannelTriple {
    pub elevation: f64,
    pub temperature: f64,
    pub humidity: f64,
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid grid dimensions {width}x{height}: both must be non-zero")]
    InvalidDimensions { width: usize, height: usize },
}

/// Seeded terrain generator.
///
/// Channel seeds are derived as seed, seed+1, seed+2 so the three noise
/// fields stay statistically independent. Any integer is a valid seed,
/// including zero and negative values.
pub struct TerrainGenerator {
    elevation: FractalSampler,
    temperature: FractalSampler,
    humidity: FractalSampler,
    scales: ChannelScales,
}

impl TerrainGenerator {
    pub fn new(seed: i64) -> Self {
        Self::with_config(seed, GeneratorConfig::default())
    }

    pub fn with_config(seed: i64, config: GeneratorConfig) -> Self {
        Self {
            elevation: FractalSampler::with_params(seed as u64, config.fractal),
            temperature: FractalSampler::with_params(seed.wrapping_add(1) as u64, config.fractal),
            humidity: FractalSampler::with_params(seed.wrapping_add(2) as u64, config.fractal),
            scales: config.scales,
        }
    }

    /// Sample all three channels at a continuous coordinate.
    ///
    /// The sampling convention is raw pixel coordinates divided by the
    /// per-channel scale; grid dimensions never enter the math, so the same
    /// cell has the same triple regardless of map size.
    pub fn sample_cell(&self, x: f64, y: f64) -> ChannelTriple {
        ChannelTriple {
            elevation: self.elevation.sample(x, y, self.scales.elevation),
            temperature: self.temperature.sample(x, y, self.scales.temperature),
            humidity: self.humidity.sample(x, y, self.scales.humidity),
        }
    }

    /// Generate the classified biome grid, row-major.
    pub fn generate(&self, width: usize, height: usize) -> Result<Grid<Biome>, GeneratorError> {
        self.fill_grid(width, height, |triple| {
            Biome::classify(triple.elevation, triple.temperature, triple.humidity)
        })
    }

    /// Generate the raw channel triples without classifying, for callers
    /// that post-process or classify separately.
    pub fn generate_channels(
        &self,
        width: usize,
        height: usize,
    ) -> Result<Grid<ChannelTriple>, GeneratorError> {
        self.fill_grid(width, height, |triple| triple)
    }

    /// Fill a grid by sampling every cell. Rows are processed in parallel;
    /// each cell depends only on its own coordinates and the immutable
    /// permutation tables, so no synchronization is needed beyond the
    /// final collect.
    fn fill_grid<T, F>(&self, width: usize, height: usize, f: F) -> Result<Grid<T>, GeneratorError>
    where
        T: Send,
        F: Fn(ChannelTriple) -> T + Sync,
    {
        if width == 0 || height == 0 {
            return Err(GeneratorError::InvalidDimensions { width, height });
        }

        let data: Vec<T> = (0..height)
            .into_par_iter()
            .flat_map_iter(|y| {
                let f = &f;
                (0..width).map(move |x| f(self.sample_cell(x as f64, y as f64)))
            })
            .collect();

        Ok(Grid::from_raw(width, height, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let gen = TerrainGenerator::new(1337);
        let a = gen.generate(64, 48).unwrap();
        let b = gen.generate(64, 48).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());

        // A fresh generator with the same seed agrees too
        let c = TerrainGenerator::new(1337).generate(64, 48).unwrap();
        assert_eq!(a.as_slice(), c.as_slice());
    }

    #[test]
    fn test_different_seeds_produce_different_maps() {
        let a = TerrainGenerator::new(1).generate(32, 32).unwrap();
        let b = TerrainGenerator::new(2).generate(32, 32).unwrap();
        assert_ne!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_negative_and_zero_seeds_accepted() {
        for seed in [0i64, -1, i64::MIN, i64::MAX] {
            let grid = TerrainGenerator::new(seed).generate(16, 16).unwrap();
            assert_eq!(grid.as_slice().len(), 256);
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let gen = TerrainGenerator::new(5);
        assert!(matches!(
            gen.generate(0, 10),
            Err(GeneratorError::InvalidDimensions {
                width: 0,
                height: 10
            })
        ));
        assert!(gen.generate(10, 0).is_err());
        assert!(gen.generate(0, 0).is_err());
    }

    #[test]
    fn test_channels_stay_in_unit_range() {
        let gen = TerrainGenerator::new(99);
        let channels = gen.generate_channels(40, 30).unwrap();

        for (_, _, triple) in channels.iter() {
            assert!((0.0..=1.0).contains(&triple.elevation));
            assert!((0.0..=1.0).contains(&triple.temperature));
            assert!((0.0..=1.0).contains(&triple.humidity));
        }
    }

    #[test]
    fn test_channels_are_decorrelated() {
        let gen = TerrainGenerator::new(4242);
        let channels = gen.generate_channels(64, 64).unwrap();

        let mut identical = 0usize;
        for (_, _, triple) in channels.iter() {
            if triple.elevation == triple.temperature || triple.temperature == triple.humidity {
                identical += 1;
            }
        }
        // Distinct channel seeds and scales: the fields should virtually
        // never coincide cell-for-cell.
        assert!(identical < 10, "{} cells have matching channels", identical);
    }

    #[test]
    fn test_classification_matches_raw_channels() {
        let gen = TerrainGenerator::new(808);
        let biomes = gen.generate(32, 24).unwrap();
        let channels = gen.generate_channels(32, 24).unwrap();

        for (x, y, triple) in channels.iter() {
            let expected = Biome::classify(triple.elevation, triple.temperature, triple.humidity);
            assert_eq!(*biomes.get(x, y), expected);
        }
    }

    #[test]
    fn test_sample_cell_is_dimension_independent() {
        let gen = TerrainGenerator::new(55);
        let small = gen.generate_channels(16, 16).unwrap();
        let large = gen.generate_channels(48, 48).unwrap();

        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(small.get(x, y), large.get(x, y));
            }
        }
    }
}
