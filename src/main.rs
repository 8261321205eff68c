//! Pattern preview
//!
//! Prints one 32-step cycle per part for each clock resolution, first from the
//! drum map and then from the Euclidean generator.
//!
//! Usage: drumgen [settings.json]
//! Without a settings file the map position, densities and chaos are random.

use std::env;
use std::path::Path;

use drumgen_lib::{
    trigger_bit, ClockResolution, GeneratorSettings, OutputMode, Part, PatternGenerator,
    NUM_PARTS, STEPS_PER_PATTERN,
};

fn random_settings() -> GeneratorSettings {
    GeneratorSettings {
        x: fastrand::i32(0..=255),
        y: fastrand::i32(0..=255),
        density: [
            fastrand::i32(0..=255),
            fastrand::i32(0..=255),
            fastrand::i32(0..=255),
        ],
        randomness: fastrand::i32(0..=255),
        ..Default::default()
    }
}

/// Run one full cycle at the generator's resolution and draw a row per part
fn render_rows(generator: &mut PatternGenerator) -> [String; NUM_PARTS] {
    let pulses_per_step = generator.clock_resolution().pulses_per_step();
    let mut rows: [String; NUM_PARTS] = Default::default();

    for _ in 0..STEPS_PER_PATTERN as u32 * pulses_per_step {
        let output = generator.output();
        if output != 0 {
            for part in Part::ALL {
                let cell = if output & trigger_bit(part) != 0 { '*' } else { '-' };
                rows[part.index()].push(cell);
            }
        }
        generator.tick_clock();
    }
    rows
}

fn print_rows(title: &str, rows: &[String; NUM_PARTS]) {
    println!("\n{}:", title);
    for part in Part::ALL {
        println!("{}: {}", part, rows[part.index()]);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    let settings = match args.get(1) {
        Some(path) => GeneratorSettings::load(Path::new(path))?,
        None => random_settings(),
    };

    println!(
        "x: {}, y: {}, density: {:?}, randomness: {}",
        settings.x, settings.y, settings.density, settings.randomness
    );

    let mut generator = PatternGenerator::from_settings(&settings);
    for resolution in ClockResolution::ALL {
        generator.set_clock_resolution(resolution);
        let name = format!("{} PPQN", resolution.ppqn());

        generator.set_output_mode(OutputMode::Grids);
        generator.reset();
        print_rows(&format!("Drum pattern ({})", name), &render_rows(&mut generator));

        generator.set_output_mode(OutputMode::Euclidean);
        generator.reset();
        print_rows(&format!("Euclidean pattern ({})", name), &render_rows(&mut generator));
    }

    log::info!("Rendered {} resolutions", ClockResolution::ALL.len());
    Ok(())
}
