//! Paths of the files each variant reads at load.

use std::path::{Path, PathBuf};

use anyhow::Result;
use codoxel_engine::assets;

use crate::config::Variant;

/// Resources root, usually `Resources/` next to the working directory.
#[derive(Debug, Clone)]
pub struct Resources {
    root: PathBuf,
}

/// Both shader stages of one variant, as SPIR-V words.
pub struct ShaderBinaries {
    pub vertex: Vec<u32>,
    pub fragment: Vec<u32>,
}

impl Resources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `(vertex, fragment)` shader binary paths.
    pub fn shader_paths(&self, variant: Variant) -> (PathBuf, PathBuf) {
        let stem = match variant {
            Variant::Quad => "Quad",
            Variant::Cube => "Simple",
        };
        let dir = self.root.join("Shaders");
        (
            dir.join(format!("{stem}.vert.spv")),
            dir.join(format!("{stem}.frag.spv")),
        )
    }

    pub fn texture_path(&self) -> PathBuf {
        self.root.join("Images").join("BrickAlbedo.png")
    }

    pub fn model_path(&self) -> PathBuf {
        self.root.join("Models").join("Cube.obj")
    }

    pub fn load_shaders(&self, variant: Variant) -> Result<ShaderBinaries> {
        let (vertex, fragment) = self.shader_paths(variant);
        Ok(ShaderBinaries {
            vertex: assets::read_spirv(vertex)?,
            fragment: assets::read_spirv(fragment)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use codoxel_engine::assets::spirv::SPIRV_MAGIC;

    use super::*;

    #[test]
    fn paths_are_relative_to_root() {
        let res = Resources::new("Resources");
        assert_eq!(
            res.shader_paths(Variant::Cube),
            (
                PathBuf::from("Resources/Shaders/Simple.vert.spv"),
                PathBuf::from("Resources/Shaders/Simple.frag.spv"),
            )
        );
        assert_eq!(res.texture_path(), PathBuf::from("Resources/Images/BrickAlbedo.png"));
        assert_eq!(res.model_path(), PathBuf::from("Resources/Models/Cube.obj"));
    }

    #[test]
    fn quad_has_its_own_shaders() {
        let (vert, frag) = Resources::new("r").shader_paths(Variant::Quad);
        assert!(vert.ends_with("Shaders/Quad.vert.spv"));
        assert!(frag.ends_with("Shaders/Quad.frag.spv"));
    }

    #[test]
    fn shipped_shaders_load_for_both_variants() {
        let res = Resources::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("../../Resources"));
        for variant in [Variant::Quad, Variant::Cube] {
            let shaders = res.load_shaders(variant).unwrap();
            assert_eq!(shaders.vertex[0], SPIRV_MAGIC, "{variant} vertex stage");
            assert_eq!(shaders.fragment[0], SPIRV_MAGIC, "{variant} fragment stage");
        }
    }

    #[test]
    fn missing_shader_names_the_file() {
        let res = Resources::new("definitely/not/here");
        let err = res.load_shaders(Variant::Quad).err().unwrap();
        assert!(format!("{err:#}").contains("Quad.vert.spv"));
    }
}
