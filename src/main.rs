use clap::Parser;

use biomegen::export::{self, Channel};
use biomegen::{Biome, TerrainGenerator};

#[derive(Parser, Debug)]
#[command(name = "biomegen")]
#[command(about = "Generate deterministic biome maps from an integer seed")]
struct Args {
    /// Width of the map in pixels
    #[arg(short = 'W', long, default_value = "1200")]
    width: usize,

    /// Height of the map in pixels
    #[arg(short = 'H', long, default_value = "800")]
    height: usize,

    /// Generation seed (uses a random seed if not specified)
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Output path for the biome map PNG
    #[arg(short, long, default_value = "biomes.png")]
    output: String,

    /// Also export the elevation/temperature/humidity channel maps
    /// (written next to the biome map as <output>.<channel>.png)
    #[arg(long)]
    channels: bool,

    /// Export the raw channel triples as JSON
    #[arg(long)]
    json: Option<String>,
}

fn main() {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::random());

    println!("Generating biome map with seed: {}", seed);
    println!("Map size: {}x{}", args.width, args.height);

    let generator = TerrainGenerator::new(seed);

    let biomes = match generator.generate(args.width, args.height) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            std::process::exit(1);
        }
    };

    print_biome_census(&biomes);

    println!("Writing biome map to {}", args.output);
    if let Err(e) = export::export_biome_map(&biomes, &args.output) {
        eprintln!("Failed to write biome map: {}", e);
        std::process::exit(1);
    }

    if args.channels || args.json.is_some() {
        println!("Sampling raw channels...");
        // Dimensions already validated by the first generate call
        let channels = generator
            .generate_channels(args.width, args.height)
            .expect("dimensions validated above");

        if args.channels {
            for &channel in Channel::all() {
                let path = format!("{}.{}.png", args.output, channel.label());
                println!("Writing {} map to {}", channel.label(), path);
                if let Err(e) = export::export_channel_map(&channels, channel, &path) {
                    eprintln!("Failed to write {} map: {}", channel.label(), e);
                }
            }
        }

        if let Some(ref json_path) = args.json {
            println!("Writing channel triples to {}", json_path);
            if let Err(e) = export::export_channels_json(&channels, json_path) {
                eprintln!("Failed to write JSON: {}", e);
            }
        }
    }

    println!("Done.");
}

/// Print per-biome coverage percentages, largest first.
fn print_biome_census(grid: &biomegen::Grid<Biome>) {
    let total = (grid.width * grid.height) as f64;
    let mut counts: Vec<(Biome, usize)> = Biome::all().iter().map(|&b| (b, 0)).collect();

    for (_, _, &biome) in grid.iter() {
        if let Some(entry) = counts.iter_mut().find(|(b, _)| *b == biome) {
            entry.1 += 1;
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));

    println!("Biome coverage:");
    for (biome, count) in counts.iter().filter(|(_, c)| *c > 0) {
        println!(
            "  {:<18} {:>6.2}%",
            biome.name(),
            100.0 * *count as f64 / total
        );
    }
}
