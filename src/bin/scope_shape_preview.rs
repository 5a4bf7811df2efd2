use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use scope_shape_lut::cli::{GeneratorArgs, GENERATOR_USAGE};
use scope_shape_lut::diagnostics::{plot_fft, plot_signal, repeat_signal, PngPlotter, DEFAULT_PLOT_DIR};
use scope_shape_lut::generate_table;
use scope_shape_lut::xy_wav::{write_xy_wav, XyWavConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }

    let mut generator = GeneratorArgs::default();
    let mut out_dir = PathBuf::from(DEFAULT_PLOT_DIR);
    let mut rate = None;
    let mut repeat = 3usize;
    let mut wav = None;
    let mut wav_config = XyWavConfig::default();

    let mut i = 1;
    while i < args.len() {
        if generator.take_flag(&args, &mut i)? {
            i += 1;
            continue;
        }
        match args[i].as_str() {
            "--out-dir" => {
                i += 1;
                out_dir = args.get(i).ok_or_else(|| anyhow!("missing out dir"))?.into();
            }
            "--rate" => {
                i += 1;
                rate = Some(
                    args.get(i)
                        .ok_or_else(|| anyhow!("missing rate"))?
                        .parse::<f64>()?,
                );
            }
            "--repeat" => {
                i += 1;
                repeat = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing repeat count"))?
                    .parse::<usize>()?;
            }
            "--wav" => {
                i += 1;
                wav = Some(PathBuf::from(args.get(i).ok_or_else(|| anyhow!("missing wav path"))?));
            }
            "--wav-rate" => {
                i += 1;
                wav_config.sample_rate = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing wav rate"))?
                    .parse::<u32>()?;
            }
            "--duration" => {
                i += 1;
                wav_config.duration_secs = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing duration"))?
                    .parse::<f32>()?;
            }
            other => {
                return Err(anyhow!("unknown arg: {}", other));
            }
        }
        i += 1;
    }

    let vertices = generator.vertices()?;
    let config = generator.config()?;
    let table = generate_table(&vertices, &config)?;

    let xs: Vec<f64> = table.xs.iter().map(|&v| f64::from(v)).collect();
    let ys: Vec<f64> = table.ys.iter().map(|&v| f64::from(v)).collect();
    // One table pass per second unless told otherwise.
    let rate = rate.unwrap_or(table.len() as f64);

    let mut plotter = PngPlotter::new(&out_dir)?;
    plot_fft(&mut plotter, "xs spectrum", &xs, rate)?;
    plot_fft(&mut plotter, "ys spectrum", &ys, rate)?;
    plot_signal(&mut plotter, "xs signal", &repeat_signal(&xs, repeat))?;
    plot_signal(&mut plotter, "ys signal", &repeat_signal(&ys, repeat))?;
    log::info!("{} plots in {}", plotter.written().len(), out_dir.display());

    if let Some(path) = wav {
        let mut last_report = 0.0f32;
        let frames = write_xy_wav(&table, &wav_config, &path, |p| {
            if p - last_report >= 0.25 || p >= 1.0 {
                log::info!("  wav export {:>3.0}%", p * 100.0);
                last_report = p;
            }
        })?;
        log::info!(
            "wrote {} ({} frames at {} Hz)",
            path.display(),
            frames,
            wav_config.sample_rate
        );
    }

    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage: scope-shape-preview {} [--out-dir dir] [--rate hz] [--repeat n] [--wav xy.wav] [--wav-rate hz] [--duration secs]",
        GENERATOR_USAGE
    );
}
