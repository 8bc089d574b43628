use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mesh-forge")]
#[command(about = "Procedural mesh generator and OBJ exporter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a uv sphere
    Sphere {
        #[arg(long, default_value_t = 1.0)]
        radius: f32,
        #[arg(long, default_value_t = 16)]
        segments: u32,
        #[arg(long, default_value = "sphere.obj")]
        out: PathBuf,
    },
    /// Generate a capped cylinder
    Cylinder {
        #[arg(long, default_value_t = 1.0)]
        height: f32,
        #[arg(long, default_value_t = 0.75)]
        radius: f32,
        #[arg(long, default_value_t = 16)]
        segments: u32,
        #[arg(long, default_value = "cylinder.obj")]
        out: PathBuf,
    },
    /// Generate a subdivided plane
    Plane {
        #[arg(long, default_value_t = 1.0)]
        size: f32,
        #[arg(long, default_value_t = 8)]
        subdivisions: u32,
        #[arg(long, default_value = "plane.obj")]
        out: PathBuf,
    },
    /// Generate a cube
    Cube {
        #[arg(long, default_value_t = 1.0)]
        size: f32,
        #[arg(long, default_value = "cube.obj")]
        out: PathBuf,
    },
    /// Generate a torus
    Torus {
        #[arg(long, default_value_t = 1.0)]
        major_radius: f32,
        #[arg(long, default_value_t = 0.25)]
        minor_radius: f32,
        #[arg(long, default_value_t = 24)]
        major_segments: u32,
        #[arg(long, default_value_t = 12)]
        minor_segments: u32,
        #[arg(long, default_value = "torus.obj")]
        out: PathBuf,
    },
    /// Generate every shape listed in a JSON config file
    Config {
        path: PathBuf,
        /// Directory receiving one OBJ per entry
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}
