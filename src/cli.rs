use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "spherecast")]
#[command(about = "A minimal ray casting renderer in Rust")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Final image width in pixels
    #[arg(long, default_value = "640", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Final image height in pixels
    #[arg(long, default_value = "480", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Field of view in degrees, strictly between 0 and 180
    #[arg(long, default_value = "60.0", value_parser = parse_fov)]
    pub fov: f32,

    /// Antialiasing levels; the scene renders at width*2^n x height*2^n and
    /// is box-filtered back down n times
    #[arg(long, short = 'a', default_value = "2", value_parser = clap::value_parser!(u32).range(0..=12))]
    pub aa_levels: u32,

    /// Output file path (.png)
    #[arg(short, long, default_value = "out.png")]
    pub output: String,

    /// Sphere center in world coordinates
    #[arg(
        long,
        num_args = 3,
        action = clap::ArgAction::Set,
        overrides_with = "sphere_center",
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true,
        default_values_t = vec![0.0, 0.0, -9.0]
    )]
    pub sphere_center: Vec<f32>,

    /// Sphere radius
    #[arg(long, default_value = "4.0", value_parser = parse_radius)]
    pub sphere_radius: f32,

    /// Sphere flat color as 8-bit RGB
    #[arg(
        long,
        num_args = 3,
        action = clap::ArgAction::Set,
        overrides_with = "sphere_color",
        value_names = ["R", "G", "B"],
        default_values_t = vec![240u8, 0, 0]
    )]
    pub sphere_color: Vec<u8>,
}

/// Parse a field of view and reject values outside the open (0, 180) range
fn parse_fov(s: &str) -> Result<f32, String> {
    let fov: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if fov > 0.0 && fov < 180.0 {
        Ok(fov)
    } else {
        Err(format!("field of view must be in (0, 180), got {fov}"))
    }
}

/// Parse a sphere radius and reject non-positive values
fn parse_radius(s: &str) -> Result<f32, String> {
    let radius: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if radius > 0.0 {
        Ok(radius)
    } else {
        Err(format!("sphere radius must be positive, got {radius}"))
    }
}
