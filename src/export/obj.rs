use crate::mesh::MeshData;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Write a mesh as Wavefront OBJ. Every vertex emits matching v/vt/vn
/// lines, so face triples share one index.
pub fn write_obj(mesh: &MeshData, name: &str, out: &mut impl Write) -> Result<()> {
    mesh.validate()?;

    writeln!(out, "o {}", name)?;
    for v in &mesh.vertices {
        let p = v.position;
        writeln!(out, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for v in &mesh.vertices {
        writeln!(out, "vt {} {}", v.uv[0], v.uv[1])?;
    }
    for v in &mesh.vertices {
        let n = v.normal;
        writeln!(out, "vn {} {} {}", n[0], n[1], n[2])?;
    }
    for tri in mesh.indices.chunks_exact(3) {
        // OBJ indices are 1-based
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    Ok(())
}

pub fn save_obj(mesh: &MeshData, name: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .context(format!("failed to create obj file {:?}", path))?;
    let mut writer = std::io::BufWriter::new(file);
    write_obj(mesh, name, &mut writer)?;
    writer.flush()?;
    log::info!("wrote {:?}", path);
    Ok(())
}
