//! PNG and JSON export of generated maps

use std::fs::File;
use std::io::{self, BufWriter};

use image::{ImageBuffer, Rgb, RgbImage};

use crate::biome::Biome;
use crate::generator::ChannelTriple;
use crate::grid::Grid;

/// Which scalar field of a channel grid to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Elevation,
    Temperature,
    Humidity,
}

impl Channel {
    pub fn all() -> &'static [Self] {
        &[Self::Elevation, Self::Temperature, Self::Humidity]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Elevation => "elevation",
            Channel::Temperature => "temperature",
            Channel::Humidity => "humidity",
        }
    }

    fn extract(&self, triple: &ChannelTriple) -> f64 {
        match self {
            Channel::Elevation => triple.elevation,
            Channel::Temperature => triple.temperature,
            Channel::Humidity => triple.humidity,
        }
    }
}

/// Export a biome grid as a colored PNG, one pixel per cell.
pub fn export_biome_map(grid: &Grid<Biome>, path: &str) -> Result<(), image::ImageError> {
    let mut img: RgbImage = ImageBuffer::new(grid.width as u32, grid.height as u32);

    for (x, y, biome) in grid.iter() {
        let (r, g, b) = biome.color();
        img.put_pixel(x as u32, y as u32, Rgb([r, g, b]));
    }

    img.save(path)
}

/// Export one scalar channel using a spectral colormap.
/// Values are expected to be normalized (0.0-1.0).
pub fn export_channel_map(
    grid: &Grid<ChannelTriple>,
    channel: Channel,
    path: &str,
) -> Result<(), image::ImageError> {
    let mut img: RgbImage = ImageBuffer::new(grid.width as u32, grid.height as u32);

    for (x, y, triple) in grid.iter() {
        let val = channel.extract(triple) as f32;
        let color = spectral_colormap(val.clamp(0.0, 1.0));
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }

    img.save(path)
}

/// Dump the raw channel triples as JSON (array of rows), for callers that
/// want to classify or post-process separately.
pub fn export_channels_json(grid: &Grid<ChannelTriple>, path: &str) -> io::Result<()> {
    let rows: Vec<&[ChannelTriple]> = grid.as_slice().chunks(grid.width).collect();
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(writer, &rows).map_err(io::Error::other)
}

/// Spectral colormap (matplotlib style): dark blue -> teal -> green ->
/// yellow -> orange -> red
fn spectral_colormap(t: f32) -> [u8; 3] {
    let colors: [[f32; 3]; 11] = [
        [0.37, 0.31, 0.64], // Dark blue/purple (low)
        [0.20, 0.53, 0.74], // Blue
        [0.40, 0.76, 0.65], // Teal
        [0.67, 0.87, 0.64], // Light green
        [0.90, 0.96, 0.60], // Yellow-green
        [1.00, 1.00, 0.75], // Light yellow / white
        [1.00, 0.88, 0.55], // Yellow
        [0.99, 0.68, 0.38], // Light orange
        [0.96, 0.43, 0.26], // Orange
        [0.84, 0.24, 0.31], // Red
        [0.62, 0.00, 0.26], // Dark red (high)
    ];

    let t_scaled = t * 10.0;
    let idx = (t_scaled as usize).min(9);
    let frac = t_scaled - idx as f32;

    let c1 = colors[idx];
    let c2 = colors[idx + 1];

    [
        ((c1[0] + (c2[0] - c1[0]) * frac) * 255.0) as u8,
        ((c1[1] + (c2[1] - c1[1]) * frac) * 255.0) as u8,
        ((c1[2] + (c2[2] - c1[2]) * frac) * 255.0) as u8,
    ]
}
