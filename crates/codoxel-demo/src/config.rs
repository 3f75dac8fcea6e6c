use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use codoxel_engine::device::GpuInit;
use codoxel_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Overrides the resources root.
pub const RESOURCES_ENV: &str = "CODOXEL_RESOURCES";

pub const DEFAULT_RESOURCES: &str = "Resources";

pub const USAGE: &str = "usage: codoxel-demo [quad|cube]";

/// Which program variant to run.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Variant {
    /// Vertex-colored quad, sine uniform, no depth buffer.
    Quad,
    /// Textured OBJ cube with rotation, depth buffer and perspective.
    #[default]
    Cube,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Quad => "quad",
            Variant::Cube => "cube",
        }
    }

    /// Depth precision requested for the window; the quad draws without one.
    pub fn depth_bits(self) -> Option<u8> {
        match self {
            Variant::Quad => None,
            Variant::Cube => Some(24),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quad" => Ok(Variant::Quad),
            "cube" => Ok(Variant::Cube),
            other => Err(UsageError(format!("unknown variant {other:?}"))),
        }
    }
}

/// Bad command line; reported with [`USAGE`] and exit status 2.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UsageError(pub String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{USAGE}", self.0)
    }
}

impl std::error::Error for UsageError {}

/// Startup configuration built from the command line and environment.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub variant: Variant,
    pub resources: PathBuf,
}

impl DemoConfig {
    /// Reads `std::env::args()` and [`RESOURCES_ENV`].
    pub fn from_env() -> Result<Self, UsageError> {
        Self::parse(std::env::args().skip(1), std::env::var_os(RESOURCES_ENV))
    }

    /// `args` excludes the program name.
    pub fn parse<I>(args: I, resources: Option<OsString>) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        let variant = match args.next() {
            None => Variant::default(),
            Some(arg) => arg.parse()?,
        };

        if let Some(extra) = args.next() {
            return Err(UsageError(format!("unexpected argument {extra:?}")));
        }

        let resources = resources
            .filter(|r| !r.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCES));

        Ok(Self { variant, resources })
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: format!("Codoxel ({})", self.variant),
            initial_size: LogicalSize::new(800.0, 600.0),
            ..RuntimeConfig::default()
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        GpuInit {
            depth_bits: self.variant.depth_bits(),
            ..GpuInit::default()
        }
    }
}
