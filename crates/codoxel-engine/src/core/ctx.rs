use winit::window::Window;

use crate::device::{Gpu, SurfaceErrorAction};
use crate::render::RenderCtx;
use crate::time::FrameTime;

use super::scene::AppControl;

/// Per-frame context passed to [`Scene::on_render`](super::Scene::on_render).
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Renders one frame: acquires the surface texture, begins a single render
    /// pass that clears color to `clear` (and depth to 1.0 when the window has a
    /// depth buffer), calls `draw` inside that pass, then submits and presents.
    ///
    /// With multisampling the pass renders into the MSAA target and resolves
    /// into the surface texture.
    ///
    /// Surface errors skip the frame; only an out-of-memory surface returns
    /// [`AppControl::Fatal`].
    pub fn render<F>(&mut self, clear: wgpu::Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut wgpu::RenderPass<'_>),
    {
        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                log::debug!("surface error: {err}");
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => {
                        log::error!("surface out of memory");
                        AppControl::Fatal
                    }
                    _ => AppControl::Continue,
                };
            }
        };

        // The pass borrows frame.encoder and is dropped before submit() takes frame.
        {
            let targets = self.gpu.targets();

            let (view, resolve_target, store) = match targets.msaa_view() {
                Some(msaa) => (msaa, Some(&frame.view), wgpu::StoreOp::Discard),
                None => (&frame.view, None, wgpu::StoreOp::Store),
            };

            let depth_stencil_attachment =
                targets
                    .depth_view()
                    .map(|view| wgpu::RenderPassDepthStencilAttachment {
                        view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Discard,
                        }),
                        stencil_ops: None,
                    });

            let mut pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("codoxel frame"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            let rctx = RenderCtx::new(self.gpu);
            draw(&rctx, &mut pass);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}

/// Converts an 8-bit sRGB color to a clear color.
pub fn clear_color_rgb8(r: u8, g: u8, b: u8) -> wgpu::Color {
    wgpu::Color {
        r: r as f64 / 255.0,
        g: g as f64 / 255.0,
        b: b as f64 / 255.0,
        a: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_clear_color_is_normalized() {
        let c = clear_color_rgb8(100, 149, 237);
        assert!((c.r - 100.0 / 255.0).abs() < 1e-12);
        assert!((c.g - 149.0 / 255.0).abs() < 1e-12);
        assert!((c.b - 237.0 / 255.0).abs() < 1e-12);
        assert_eq!(c.a, 1.0);

        let white = clear_color_rgb8(255, 255, 255);
        assert_eq!((white.r, white.g, white.b), (1.0, 1.0, 1.0));
    }
}
