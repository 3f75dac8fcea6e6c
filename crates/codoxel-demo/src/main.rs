//! Codoxel demo: a sine-animated quad or a textured, rotating OBJ cube.

mod config;
mod cube;
mod quad;
mod resources;

use std::process::ExitCode;

use anyhow::Result;
use codoxel_engine::device::GpuInit;
use codoxel_engine::logging::{init_logging, LoggingConfig};
use codoxel_engine::window::Runtime;

use crate::config::{DemoConfig, Variant};
use crate::cube::CubeScene;
use crate::quad::QuadScene;
use crate::resources::Resources;

fn main() -> ExitCode {
    let config = match DemoConfig::from_env() {
        Ok(config) => config,
        Err(usage) => {
            eprintln!("{usage}");
            return ExitCode::from(2);
        }
    };

    let gpu_init = config.gpu_init();
    init_logging(LoggingConfig {
        gpu_diagnostics: gpu_init.debug,
        ..LoggingConfig::default()
    });

    match run(&config, gpu_init) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("codoxel-demo: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &DemoConfig, gpu_init: GpuInit) -> Result<()> {
    let resources = Resources::new(config.resources.clone());
    log::info!(
        "running {} variant, resources at {}",
        config.variant,
        resources.root().display()
    );

    let runtime = config.runtime_config();

    match config.variant {
        Variant::Quad => Runtime::run(runtime, gpu_init, move || QuadScene::new(resources.clone())),
        Variant::Cube => Runtime::run(runtime, gpu_init, move || CubeScene::new(resources.clone())),
    }
}
