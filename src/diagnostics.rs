//! Optional visual checks of a generated table.
//!
//! Nothing here feeds back into the emitted arrays. Plots are handed to a
//! [`Plotter`], so headless runs and tests can swap the PNG renderer for
//! [`RecordingPlotter`].

use std::fs;
use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::ShapeError;

pub const DEFAULT_PLOT_DIR: &str = "shape-plots";

const PLOT_WIDTH: u32 = 960;
const PLOT_HEIGHT: u32 = 360;
const PLOT_MARGIN: u32 = 12;
const GRID_ROWS: u32 = 6;

const BACKGROUND: Rgba<u8> = Rgba([22, 22, 26, 255]);
const GRID: Rgba<u8> = Rgba([60, 30, 70, 255]);
const SIGNAL_TRACE: Rgba<u8> = Rgba([0, 190, 255, 255]);
const SPECTRUM_TRACE: Rgba<u8> = Rgba([255, 120, 0, 255]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotKind {
    /// Sample value against sample index.
    Signal,
    /// DFT magnitude against frequency in Hz.
    Spectrum,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Plot {
    pub title: String,
    pub kind: PlotKind,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

pub trait Plotter {
    fn plot(&mut self, plot: &Plot) -> Result<(), ShapeError>;
}

/// Keeps every plot in memory.
#[derive(Debug, Default)]
pub struct RecordingPlotter {
    pub plots: Vec<Plot>,
}

impl Plotter for RecordingPlotter {
    fn plot(&mut self, plot: &Plot) -> Result<(), ShapeError> {
        self.plots.push(plot.clone());
        Ok(())
    }
}

/// Writes each plot as `<title>.png` under `dir`.
pub struct PngPlotter {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngPlotter {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, ShapeError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(PngPlotter {
            dir,
            written: Vec::new(),
        })
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn file_for(&self, title: &str) -> PathBuf {
        let stem: String = title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();
        self.dir.join(format!("{}.png", stem))
    }
}

impl Plotter for PngPlotter {
    fn plot(&mut self, plot: &Plot) -> Result<(), ShapeError> {
        let path = self.file_for(&plot.title);
        render_png(plot).save(&path)?;
        log::info!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

fn render_png(plot: &Plot) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(PLOT_WIDTH, PLOT_HEIGHT, BACKGROUND);

    for row in 0..=GRID_ROWS {
        let y = PLOT_MARGIN + (PLOT_HEIGHT - 2 * PLOT_MARGIN) * row / GRID_ROWS;
        for x in PLOT_MARGIN..PLOT_WIDTH - PLOT_MARGIN {
            img.put_pixel(x, y, GRID);
        }
    }

    if plot.xs.len() < 2 {
        return img;
    }

    let color = match plot.kind {
        PlotKind::Signal => SIGNAL_TRACE,
        PlotKind::Spectrum => SPECTRUM_TRACE,
    };
    let (x_min, x_max) = bounds(&plot.xs);
    let (y_min, y_max) = bounds(&plot.ys);
    let inner_w = (PLOT_WIDTH - 2 * PLOT_MARGIN - 1) as f64;
    let inner_h = (PLOT_HEIGHT - 2 * PLOT_MARGIN - 1) as f64;

    let to_pixel = |x: f64, y: f64| -> (i64, i64) {
        let px = PLOT_MARGIN as f64 + unit(x, x_min, x_max) * inner_w;
        let py = (PLOT_HEIGHT - PLOT_MARGIN - 1) as f64 - unit(y, y_min, y_max) * inner_h;
        (px.round() as i64, py.round() as i64)
    };

    let mut prev = to_pixel(plot.xs[0], plot.ys[0]);
    for (&x, &y) in plot.xs.iter().zip(&plot.ys).skip(1) {
        let next = to_pixel(x, y);
        draw_line(&mut img, prev, next, color);
        prev = next;
    }

    img
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

fn unit(v: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        ((v - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    }
}

// Bresenham; pixels outside the image are skipped.
fn draw_line(img: &mut RgbaImage, (x0, y0): (i64, i64), (x1, y1): (i64, i64), color: Rgba<u8>) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, color);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Bin frequencies for an `n`-point DFT, in FFT output order: DC and positive
/// bins first, then the negative bins.
pub fn fft_frequencies(n: usize, sample_rate: f64) -> Vec<f64> {
    let positive = n.div_ceil(2);
    (0..n)
        .map(|i| {
            let k = if i < positive { i as f64 } else { i as f64 - n as f64 };
            k * sample_rate / n as f64
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    pub fn compute(signal: &[f64], sample_rate: f64) -> Self {
        let mut buf: Vec<Complex<f64>> = signal.iter().map(|&v| Complex::new(v, 0.0)).collect();
        if !buf.is_empty() {
            let mut planner = FftPlanner::<f64>::new();
            planner.plan_fft_forward(buf.len()).process(&mut buf);
        }

        Spectrum {
            frequencies: fft_frequencies(signal.len(), sample_rate),
            magnitudes: buf.iter().map(|c| c.norm()).collect(),
        }
    }

    /// Pairs ordered by ascending frequency.
    pub fn sorted(&self) -> Vec<(f64, f64)> {
        let mut pairs: Vec<(f64, f64)> = self
            .frequencies
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        pairs
    }
}

pub fn repeat_signal(signal: &[f64], times: usize) -> Vec<f64> {
    signal.repeat(times)
}

pub fn plot_signal(plotter: &mut dyn Plotter, title: &str, signal: &[f64]) -> Result<(), ShapeError> {
    plotter.plot(&Plot {
        title: title.to_string(),
        kind: PlotKind::Signal,
        xs: (0..signal.len()).map(|i| i as f64).collect(),
        ys: signal.to_vec(),
    })
}

pub fn plot_fft(
    plotter: &mut dyn Plotter,
    title: &str,
    signal: &[f64],
    sample_rate: f64,
) -> Result<(), ShapeError> {
    let (xs, ys) = Spectrum::compute(signal, sample_rate).sorted().into_iter().unzip();
    plotter.plot(&Plot {
        title: title.to_string(),
        kind: PlotKind::Spectrum,
        xs,
        ys,
    })
}
