use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::ShapeError;
use crate::pipeline::ShapeTable;

const CHUNK_FRAMES: usize = 2048;

#[derive(Clone, Debug)]
pub struct XyWavConfig {
    pub sample_rate: u32,
    pub duration_secs: f32,
}

impl Default for XyWavConfig {
    fn default() -> Self {
        XyWavConfig {
            sample_rate: 48_000,
            duration_secs: 2.0,
        }
    }
}

/// Maps an 8-bit deflection value onto `[-1.0, 1.0]`.
pub fn byte_to_sample(value: u8) -> f32 {
    value as f32 / 127.5 - 1.0
}

/// Writes the table as a stereo float WAV for an XY scope view: x on the left
/// channel, y on the right, looping over the table until the duration is filled.
pub fn write_xy_wav<F>(
    table: &ShapeTable,
    config: &XyWavConfig,
    output_path: &Path,
    mut progress: F,
) -> Result<usize, ShapeError>
where
    F: FnMut(f32),
{
    let spec = WavSpec {
        channels: 2,
        sample_rate: config.sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let total_frames = if table.is_empty() {
        0
    } else {
        (config.duration_secs.max(0.0) * config.sample_rate as f32) as usize
    };

    let mut writer = WavWriter::create(output_path, spec)?;
    let mut generated = 0usize;

    while generated < total_frames {
        let len = (total_frames - generated).min(CHUNK_FRAMES);
        for frame in generated..generated + len {
            let index = frame % table.len();
            writer.write_sample(byte_to_sample(table.xs[index]))?;
            writer.write_sample(byte_to_sample(table.ys[index]))?;
        }

        generated += len;
        progress(generated as f32 / total_frames as f32);
    }

    writer.finalize()?;
    Ok(total_frames)
}
