use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::pipeline::{GenerateConfig, OutputFormat};
use crate::quantize::OverflowPolicy;
use crate::shape::VertexList;

pub const GENERATOR_USAGE: &str = "[--shape shape.json] [--config config.json] [--density N] [--max-scale X] [--offset X] [--overflow reject|clamp|wrap] [--format c|rust]";

/// Table-generation flags shared by both binaries. A `--config` file is read
/// first and individual flags override it, whatever their order.
#[derive(Clone, Debug, Default)]
pub struct GeneratorArgs {
    pub shape_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub density: Option<usize>,
    pub max_scale: Option<f64>,
    pub offset: Option<f64>,
    pub overflow: Option<OverflowPolicy>,
    pub format: Option<OutputFormat>,
}

impl GeneratorArgs {
    /// Consumes `args[*i]` (and its value) if it is a generator flag.
    pub fn take_flag(&mut self, args: &[String], i: &mut usize) -> Result<bool> {
        match args[*i].as_str() {
            "--shape" => {
                *i += 1;
                self.shape_path = Some(value(args, *i, "shape path")?.into());
            }
            "--config" => {
                *i += 1;
                self.config_path = Some(value(args, *i, "config path")?.into());
            }
            "--density" => {
                *i += 1;
                self.density = Some(value(args, *i, "density")?.parse::<usize>()?);
            }
            "--max-scale" => {
                *i += 1;
                self.max_scale = Some(value(args, *i, "max scale")?.parse::<f64>()?);
            }
            "--offset" => {
                *i += 1;
                self.offset = Some(value(args, *i, "offset")?.parse::<f64>()?);
            }
            "--overflow" => {
                *i += 1;
                let raw = value(args, *i, "overflow policy")?;
                self.overflow = Some(raw.parse::<OverflowPolicy>().map_err(|e| anyhow!(e))?);
            }
            "--format" => {
                *i += 1;
                let raw = value(args, *i, "format")?;
                self.format = Some(raw.parse::<OutputFormat>().map_err(|e| anyhow!(e))?);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub fn config(&self) -> Result<GenerateConfig> {
        let mut config = match &self.config_path {
            Some(path) => {
                let data = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str::<GenerateConfig>(&data)
                    .with_context(|| format!("failed to parse config {}", path.display()))?
            }
            None => GenerateConfig::default(),
        };

        if let Some(density) = self.density {
            config.density = density;
        }
        if let Some(max_scale) = self.max_scale {
            config.max_scale = max_scale;
        }
        if let Some(offset) = self.offset {
            config.offset = offset;
        }
        if let Some(overflow) = self.overflow {
            config.overflow = overflow;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        Ok(config)
    }

    pub fn vertices(&self) -> Result<VertexList> {
        match &self.shape_path {
            Some(path) => Ok(VertexList::load(path)?),
            None => Ok(VertexList::builtin()),
        }
    }
}

fn value<'a>(args: &'a [String], i: usize, what: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing {}", what))
}
