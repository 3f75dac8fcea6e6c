use anyhow::{anyhow, ensure, Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{AppControl, FrameCtx, Scene, SceneState};
use crate::device::{Gpu, GpuInit};
use crate::input::{platform, Action, KeyBindings};
use crate::render::RenderCtx;
use crate::time::FrameClock;

use super::registry::{Closed, WindowRegistry};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,

    /// Number of windows opened at startup, each with its own scene.
    pub window_count: usize,

    pub key_bindings: KeyBindings,
}

impl RuntimeConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.window_count > 0, "window_count must be at least 1");
        Ok(())
    }

    /// Title of the `index`-th window; numbered only when several are open.
    pub fn window_title(&self, index: usize) -> String {
        if self.window_count > 1 {
            format!("{} ({})", self.title, index + 1)
        } else {
            self.title.clone()
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "codoxel".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            window_count: 1,
            key_bindings: KeyBindings::default(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the configured windows, calling `factory` once per window for its
    /// scene, and runs the event loop until the last window closes.
    ///
    /// Returns an error if any window failed to start or a scene reported a
    /// fatal failure; details are logged as they happen.
    pub fn run<S, F>(config: RuntimeConfig, gpu_init: GpuInit, factory: F) -> Result<()>
    where
        S: Scene + 'static,
        F: FnMut() -> S + 'static,
    {
        config.validate()?;

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, factory);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failures {
            0 => Ok(()),
            1 => Err(anyhow!("a window failed; see the log for details")),
            n => Err(anyhow!("{n} windows failed; see the log for details")),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    scene: Box<dyn Scene>,
    state: SceneState,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// Fires `on_close` unless the scene is already closed.
fn close_scene(entry: &mut WindowEntry) {
    entry.with_mut(|fields| {
        if fields.state.close() {
            fields.scene.on_close();
        }
    });
}

struct AppState<F> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    factory: F,

    windows: WindowRegistry<WindowId, WindowEntry>,
    started: bool,
    failures: usize,
}

impl<S, F> AppState<F>
where
    S: Scene + 'static,
    F: FnMut() -> S,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, factory: F) -> Self {
        Self {
            config,
            gpu_init,
            factory,
            windows: WindowRegistry::new(),
            started: false,
            failures: 0,
        }
    }

    fn fail(&mut self, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failures += 1;
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop, index: usize) -> Result<WindowId> {
        let attrs = Window::default_attributes()
            .with_title(self.config.window_title(index))
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let id = window.id();
        let gpu_init = self.gpu_init.clone();

        let scene: Box<dyn Scene> = Box::new((self.factory)());

        let mut entry = WindowEntryTryBuilder {
            scene,
            state: SceneState::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed for window")
            },
        }
        .try_build()?;

        let loaded = entry.with_mut(|fields| -> Result<()> {
            let ctx = RenderCtx::new(fields.gpu);
            fields.scene.on_load(&ctx)?;
            fields.state.loaded();
            Ok(())
        });

        if let Err(err) = loaded {
            close_scene(&mut entry);
            return Err(err.context("scene failed to load"));
        }

        log::debug!("window {id:?} ready");
        self.windows.insert(id, entry);
        Ok(id)
    }

    fn close_window(&mut self, event_loop: &ActiveEventLoop, id: WindowId) {
        let Some(Closed { mut entry, stop }) = self.windows.close(&id) else {
            return;
        };

        close_scene(&mut entry);
        drop(entry);
        log::debug!("window {id:?} closed");

        if stop {
            log::info!("last window closed");
            event_loop.exit();
        }
    }

    fn resize_window(&mut self, id: WindowId, new_size: PhysicalSize<u32>) {
        let Some(entry) = self.windows.get_mut(&id) else {
            return;
        };

        entry.with_mut(|fields| {
            if !fields.gpu.resize(new_size) {
                log::debug!("window {id:?} minimized; resize deferred");
                return;
            }
            log::debug!("window {id:?} resized to {}x{}", new_size.width, new_size.height);

            if fields.state.accepts_resize() {
                let ctx = RenderCtx::new(fields.gpu);
                fields.scene.on_resize(&ctx, new_size);
            }
            fields.window.request_redraw();
        });
    }

    fn redraw_window(&mut self, event_loop: &ActiveEventLoop, id: WindowId) {
        let Some(entry) = self.windows.get_mut(&id) else {
            return;
        };

        let mut control = AppControl::Continue;
        entry.with_mut(|fields| {
            if !fields.state.begin_frame() {
                return;
            }

            let mut ctx = FrameCtx {
                window: fields.window,
                gpu: fields.gpu,
                time: fields.clock.tick(),
            };
            control = fields.scene.on_render(&mut ctx);

            fields.state.end_frame();
        });

        match control {
            AppControl::Continue => {}
            AppControl::CloseWindow => self.close_window(event_loop, id),
            AppControl::Exit => event_loop.exit(),
            AppControl::Fatal => {
                self.fail(anyhow!("window {id:?} stopped rendering"));
                event_loop.exit();
            }
        }
    }

    /// Bound action for a keyboard event, if any.
    fn key_action(&self, event: &WindowEvent) -> Option<Action> {
        let key_event = platform::translate_key_event(event)?;
        self.config.key_bindings.action_for(&key_event)
    }
}

impl<S, F> ApplicationHandler for AppState<F>
where
    S: Scene + 'static,
    F: FnMut() -> S,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;

        for index in 0..self.config.window_count {
            if let Err(e) = self.create_window_entry(event_loop, index) {
                self.fail(e);
            }
        }

        if self.windows.is_empty() {
            // Every creation failure is already counted; validate() rules out
            // an empty request.
            self.windows.raise_stop();
            log::error!("no window could be opened");
            event_loop.exit();
            return;
        }

        for entry in self.windows.values() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.windows.stopped() {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: every scene animates.
        for entry in self.windows.values() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.key_action(&event) == Some(Action::CloseWindow) {
            self.close_window(event_loop, window_id);
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.close_window(event_loop, window_id),

            WindowEvent::Resized(new_size) => self.resize_window(window_id, new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let Some(entry) = self.windows.get_mut(&window_id) else {
                    return;
                };
                let new_size = entry.with_window(|w| w.inner_size());
                self.resize_window(window_id, new_size);
            }

            WindowEvent::RedrawRequested => self.redraw_window(event_loop, window_id),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        for (id, mut entry) in self.windows.drain() {
            close_scene(&mut entry);
            log::debug!("window {id:?} closed on exit");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_numbered_for_several_windows() {
        let single = RuntimeConfig::default();
        assert_eq!(single.window_title(0), "codoxel");

        let many = RuntimeConfig {
            title: "demo".into(),
            window_count: 2,
            ..RuntimeConfig::default()
        };
        assert_eq!(many.window_title(0), "demo (1)");
        assert_eq!(many.window_title(1), "demo (2)");
    }

    #[test]
    fn zero_windows_is_rejected() {
        let config = RuntimeConfig {
            window_count: 0,
            ..RuntimeConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("window_count"));

        assert!(RuntimeConfig::default().validate().is_ok());
    }

    #[test]
    fn default_opens_one_window_with_escape_bound() {
        use crate::input::{Key, KeyEvent};

        let config = RuntimeConfig::default();
        assert_eq!(config.window_count, 1);
        assert_eq!(
            config.key_bindings.action_for(&KeyEvent::pressed(Key::Escape)),
            Some(Action::CloseWindow)
        );
    }
}
