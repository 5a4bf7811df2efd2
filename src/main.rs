use std::env;

use anyhow::{anyhow, Result};

use scope_shape_lut::cli::{GeneratorArgs, GENERATOR_USAGE};
use scope_shape_lut::{generate_table, render_table};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }

    let mut generator = GeneratorArgs::default();
    let mut i = 1;
    while i < args.len() {
        if !generator.take_flag(&args, &mut i)? {
            return Err(anyhow!("unknown arg: {}", args[i]));
        }
        i += 1;
    }

    let vertices = generator.vertices()?;
    let config = generator.config()?;

    log::info!("Generating shape table:");
    log::info!("  VERTICES:  {}", vertices.len());
    log::info!("  DENSITY:   {} points per edge", config.density);
    log::info!("  MAX_SCALE: {}", config.max_scale);
    log::info!("  OFFSET:    {}", config.offset);
    log::info!("  OVERFLOW:  {:?}", config.overflow);

    let table = generate_table(&vertices, &config)?;
    print!("{}", render_table(&table, config.format));

    log::info!("Sanity checks:");
    log::info!(
        "  NUM_POINTS: {} (expected: {})",
        table.len(),
        vertices.len().saturating_mul(config.density)
    );
    log::info!("  norm_max:   {}", table.norm_max);
    if let (Some(lo), Some(hi)) = (table.xs.iter().min(), table.xs.iter().max()) {
        log::info!("  xs range:   {}..={}", lo, hi);
    }
    if let (Some(lo), Some(hi)) = (table.ys.iter().min(), table.ys.iter().max()) {
        log::info!("  ys range:   {}..={}", lo, hi);
    }

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: scope-shape-lut {}", GENERATOR_USAGE);
    eprintln!();
    eprintln!("Prints NUM_POINTS and the xs/ys lookup tables (uint8 and float) to stdout.");
    eprintln!("Without --shape the built-in wireframe cube is used.");
}
