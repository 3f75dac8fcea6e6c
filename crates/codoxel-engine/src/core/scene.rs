use anyhow::Result;
use winit::dpi::PhysicalSize;

use crate::render::RenderCtx;

use super::ctx::FrameCtx;

/// Control directive returned by [`Scene::on_render`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    /// Close the window this scene renders into.
    CloseWindow,
    /// Stop the event loop; every open window is closed.
    Exit,
    /// Unrecoverable failure; stop the event loop with a non-zero exit status.
    Fatal,
}

/// Per-window scene driven by the runtime.
///
/// Hooks are invoked in a strict order (see [`SceneState`](super::SceneState)):
/// `on_load` once, then any number of `on_render`/`on_resize`, then `on_close`
/// once. Nothing is called after `on_close`.
pub trait Scene {
    /// Creates GPU resources. Called once after the window and its GPU context exist.
    ///
    /// An error closes the window and makes the runtime report failure.
    fn on_load(&mut self, ctx: &RenderCtx<'_>) -> Result<()>;

    /// Called once per frame.
    fn on_render(&mut self, frame: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called after the surface was reconfigured for a new, non-zero size.
    fn on_resize(&mut self, ctx: &RenderCtx<'_>, size: PhysicalSize<u32>) {
        let _ = (ctx, size);
    }

    /// Called once when the window is destroyed.
    fn on_close(&mut self) {}
}
