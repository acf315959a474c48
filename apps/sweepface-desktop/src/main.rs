//! Desktop shell for the analogue clock.
//!
//! Thin platform binding: window and surface creation, event polling,
//! fixed-interval frame pacing, and process exit. Everything that draws
//! lives in `sweepface-render-wgpu`; this binary only wires it to winit.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use sweepface_render_wgpu::ClockRenderer;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const WINDOW_TITLE: &str = "Analogue Clock";
const WINDOW_SIZE: f64 = 600.0;

/// Fixed inter-frame delay. Not derived from elapsed time: a 10 Hz cadence
/// is plenty for a clock, and sweep smoothness rides on the sub-second
/// time sampling, not the frame rate.
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Everything acquired at startup, in acquisition order. Dropping this
/// struct releases the resources in reverse.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: ClockRenderer,
}

fn init_gpu(event_loop: &ActiveEventLoop) -> Result<Gpu> {
    let attrs = Window::default_attributes()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(WINDOW_SIZE, WINDOW_SIZE))
        .with_resizable(false);
    let window = Arc::new(
        event_loop
            .create_window(attrs)
            .context("failed to create window")?,
    );

    // Device pixel density, read once. Layout constants never track live
    // DPI changes.
    let scale_factor = window.scale_factor() as f32;

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let surface = instance
        .create_surface(window.clone())
        .context("failed to create surface")?;

    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::HighPerformance,
        compatible_surface: Some(&surface),
        force_fallback_adapter: false,
    }))
    .context("no suitable GPU adapter")?;

    let (device, queue) = pollster::block_on(adapter.request_device(
        &wgpu::DeviceDescriptor {
            label: Some("sweepface_device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: Default::default(),
        },
        None,
    ))
    .context("failed to create device")?;

    let size = window.inner_size();
    let surface_caps = surface.get_capabilities(&adapter);
    let surface_format = surface_caps
        .formats
        .iter()
        .find(|f| f.is_srgb())
        .copied()
        .unwrap_or(surface_caps.formats[0]);

    let config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode: surface_caps.alpha_modes[0],
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    let renderer =
        ClockRenderer::new(&device, surface_format, size.width, size.height, scale_factor);

    tracing::info!(
        "GPU initialized with {} backend, scale factor {scale_factor}",
        adapter.get_info().backend.to_str()
    );

    Ok(Gpu {
        window,
        surface,
        device,
        queue,
        config,
        renderer,
    })
}

struct ClockApp {
    gpu: Option<Gpu>,
    next_frame: Instant,
    fatal: Option<anyhow::Error>,
}

impl ClockApp {
    fn new() -> Self {
        Self {
            gpu: None,
            next_frame: Instant::now(),
            fatal: None,
        }
    }

    fn reconfigure(&mut self, width: u32, height: u32) {
        if let Some(gpu) = &mut self.gpu {
            gpu.config.width = width.max(1);
            gpu.config.height = height.max(1);
            gpu.surface.configure(&gpu.device, &gpu.config);
            gpu.renderer
                .resize(&gpu.device, gpu.config.width, gpu.config.height);
        }
    }
}

impl ApplicationHandler for ClockApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        match init_gpu(event_loop) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => {
                // Partial acquisitions unwind with the dropped locals.
                tracing::error!("startup failed: {e:#}");
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.reconfigure(new_size.width, new_size.height);
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = match &self.gpu {
                    Some(gpu) => gpu.window.inner_size(),
                    None => return,
                };
                self.reconfigure(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                let Some(gpu) = &mut self.gpu else {
                    return;
                };

                let frame = match gpu.surface.get_current_texture() {
                    Ok(frame) => frame,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu.surface.configure(&gpu.device, &gpu.config);
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };
                let view = frame
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Err(e) = gpu.renderer.render(&gpu.device, &gpu.queue, &view) {
                    // No time base, no hand positions: terminate.
                    tracing::error!("time source unreadable: {e}");
                    self.fatal = Some(e.into());
                    event_loop.exit();
                    return;
                }

                frame.present();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_frame {
            self.next_frame = now + FRAME_INTERVAL;
            if let Some(gpu) = &self.gpu {
                gpu.window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("sweepface starting");

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = ClockApp::new();
    event_loop.run_app(&mut app).context("event loop error")?;

    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
