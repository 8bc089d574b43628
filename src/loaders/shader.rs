use anyhow::{bail, Context, Result};
use std::path::Path;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn extension(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
        }
    }
}

/// Read shader source text from a file. Empty files are rejected so a
/// truncated asset fails here instead of at compile time on the device.
pub fn load_shader_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .context(format!("failed to read shader source {:?}", path))?;
    if source.trim().is_empty() {
        bail!("shader source {:?} is empty", path);
    }
    Ok(source)
}

/// Vertex and fragment sources for one program.
#[derive(Clone, Debug)]
pub struct ShaderProgramSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderProgramSource {
    pub fn load(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            vertex: load_shader_source(vertex_path)?,
            fragment: load_shader_source(fragment_path)?,
        })
    }
}
