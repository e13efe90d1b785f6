//! Deterministic biome map generation library
//!
//! Re-exports modules for use by the binary and external callers.

pub mod biome;
pub mod export;
pub mod fractal;
pub mod generator;
pub mod grid;
pub mod noise;

pub use biome::Biome;
pub use fractal::{FractalParams, FractalSampler};
pub use generator::{ChannelScales, ChannelTriple, GeneratorConfig, GeneratorError, TerrainGenerator};
pub use grid::Grid;
pub use noise::SimplexNoise;
