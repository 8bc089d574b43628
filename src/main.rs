use anyhow::{Context, Result};
use clap::Parser;
use mesh_forge::cli::{Cli, Command};
use mesh_forge::export::{load_config, save_obj};
use mesh_forge::mesh::MeshData;
use mesh_forge::shapes::{create_cube, create_cylinder, create_plane, create_sphere, create_torus};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Sphere {
            radius,
            segments,
            out,
        } => export(create_sphere(radius, segments)?, "sphere", &out),
        Command::Cylinder {
            height,
            radius,
            segments,
            out,
        } => export(create_cylinder(height, radius, segments)?, "cylinder", &out),
        Command::Plane {
            size,
            subdivisions,
            out,
        } => export(create_plane(size, subdivisions)?, "plane", &out),
        Command::Cube { size, out } => export(create_cube(size)?, "cube", &out),
        Command::Torus {
            major_radius,
            minor_radius,
            major_segments,
            minor_segments,
            out,
        } => export(
            create_torus(major_radius, minor_radius, major_segments, minor_segments)?,
            "torus",
            &out,
        ),
        Command::Config { path, out_dir } => run_config(&path, &out_dir),
    }
}

fn export(mesh: MeshData, name: &str, out: &Path) -> Result<()> {
    save_obj(&mesh, name, out)?;
    println!(
        "{}: {} vertices, {} triangles -> {:?}",
        name,
        mesh.vertices.len(),
        mesh.triangle_count(),
        out
    );
    Ok(())
}

fn run_config(path: &Path, out_dir: &Path) -> Result<()> {
    let entries = load_config(path)?;
    std::fs::create_dir_all(out_dir)
        .context(format!("failed to create output directory {:?}", out_dir))?;
    log::info!("generating {} shapes from {:?}", entries.len(), path);

    for entry in &entries {
        let mesh = entry
            .config
            .mesh()
            .context(format!("failed to generate shape {:?}", entry.name))?;
        let out = out_dir.join(format!("{}.obj", entry.name));
        export(mesh, &entry.name, &out)?;
    }
    Ok(())
}
