//! Startup resource readers.
//!
//! Each reader loads one file fully into memory and attaches the path to any
//! error. Nothing is cached or watched; resources are read once at load.

pub mod spirv;

use std::path::Path;

use anyhow::{Context, Result};
use codoxel_obj::ObjMesh;
use image::RgbaImage;

/// Reads and validates a SPIR-V shader binary.
pub fn read_spirv(path: impl AsRef<Path>) -> Result<Vec<u32>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read shader binary {}", path.display()))?;
    let words = spirv::words_from_bytes(&bytes)
        .with_context(|| format!("invalid shader binary {}", path.display()))?;

    log::debug!("loaded {} ({} words)", path.display(), words.len());
    Ok(words)
}

/// Decodes an image file into 8-bit RGBA.
pub fn load_rgba(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let image = image::open(path)
        .with_context(|| format!("failed to decode image {}", path.display()))?
        .to_rgba8();

    log::debug!("loaded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(image)
}

/// Reads and parses an OBJ model.
pub fn load_obj(path: impl AsRef<Path>) -> Result<ObjMesh> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model {}", path.display()))?;
    let mesh = codoxel_obj::parse_str(&src)
        .with_context(|| format!("failed to parse model {}", path.display()))?;

    log::debug!(
        "loaded {}: {} positions, {} uvs, {} triangles",
        path.display(),
        mesh.positions_count,
        mesh.uvs_count,
        mesh.triangle_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    /// Writes `contents` to a per-process scratch file and returns its path.
    fn scratch(name: &str, contents: &[u8]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("codoxel-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = read_spirv("does/not/exist.spv").unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.spv"));

        let err = load_obj("does/not/exist.obj").unwrap_err();
        assert!(format!("{err:#}").contains("failed to read model"));
    }

    #[test]
    fn reads_valid_spirv() {
        let bytes: Vec<u8> = [spirv::SPIRV_MAGIC, 0x0001_0000, 0, 1, 0]
            .iter()
            .flat_map(|w| w.to_le_bytes())
            .collect();
        let path = scratch("valid.spv", &bytes);
        assert_eq!(read_spirv(&path).unwrap()[0], spirv::SPIRV_MAGIC);
    }

    #[test]
    fn rejects_text_posing_as_spirv() {
        let path = scratch("glsl.spv", b"#version 450\nvoid main() {}\n\0\0\0");
        let err = read_spirv(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid shader binary"));
    }

    #[test]
    fn parse_errors_carry_the_path_and_line() {
        let path = scratch("broken.obj", b"v 0 0 0\nvt 0 0\nf 1/1 1/1\n");
        let msg = format!("{:#}", load_obj(&path).unwrap_err());
        assert!(msg.contains("broken.obj"));
        assert!(msg.contains("at 3:1"));
    }

    #[test]
    fn decodes_png_to_rgba() {
        let mut png = Vec::new();
        RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        let path = scratch("tiny.png", &png);

        let image = load_rgba(&path).unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1), &image::Rgba([10, 20, 30, 255]));
    }
}
