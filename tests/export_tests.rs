use mesh_forge::export::{load_config, save_obj, write_obj};
use mesh_forge::{create_sphere, create_torus};
use std::path::PathBuf;

#[cfg(test)]
mod export_tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mesh_forge_export_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_obj_text_counts_match_mesh() {
        let mesh = create_sphere(1.0, 8).unwrap();
        let mut out = Vec::new();
        write_obj(&mesh, "sphere", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let positions = text.lines().filter(|l| l.starts_with("v ")).count();
        let faces = text.lines().filter(|l| l.starts_with("f ")).count();
        assert_eq!(positions, mesh.vertices.len());
        assert_eq!(faces, mesh.triangle_count());
    }

    #[test]
    fn test_obj_faces_reference_valid_vertices() {
        let mesh = create_torus(1.0, 0.25, 8, 6).unwrap();
        let mut out = Vec::new();
        write_obj(&mesh, "torus", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let vertex_count = mesh.vertices.len();
        for line in text.lines().filter(|l| l.starts_with("f ")) {
            for corner in line.split_whitespace().skip(1) {
                let index: usize = corner.split('/').next().unwrap().parse().unwrap();
                assert!(index >= 1 && index <= vertex_count, "bad face line {:?}", line);
            }
        }
    }

    #[test]
    fn test_save_obj_writes_file() {
        let path = temp_path("sphere.obj");
        let mesh = create_sphere(1.0, 4).unwrap();
        save_obj(&mesh, "sphere", &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("o sphere"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_config_file_drives_generation() {
        let path = temp_path("shapes.json");
        std::fs::write(
            &path,
            r#"[
                {"name": "ball", "shape": "sphere", "radius": 1.5, "segments": 12},
                {"name": "ground", "shape": "plane", "size": 10.0, "subdivisions": 4,
                 "transform": {"position": [0.0, -1.0, 0.0]}},
                {"name": "donut", "shape": "torus"}
            ]"#,
        )
        .unwrap();

        let entries = load_config(&path).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "ball");

        let ground = entries[1].config.mesh().unwrap();
        let bounds = ground.bounds().unwrap();
        assert!((bounds.min.y + 1.0).abs() < 1e-5);

        for entry in &entries {
            assert!(entry.config.mesh().unwrap().validate().is_ok());
        }
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_config_with_bad_json_errors() {
        let path = temp_path("broken.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(load_config(&path).is_err());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_config_missing_file_errors() {
        assert!(load_config("/nonexistent/shapes.json").is_err());
    }
}
