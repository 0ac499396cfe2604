//! Sky Trail entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use sky_trail::consts::REFERENCE_FPS;
    use sky_trail::renderer::{RenderState, build_scene};
    use sky_trail::sim::{ArrowKey, INSTRUCTIONS, Legend, Viewport};
    use sky_trail::stats::FpsCounter;
    use sky_trail::{Assets, FrameDriver, FrameView, RenderSurface, Settings, StartupError};

    /// Longest frame gap fed to the simulation (seconds)
    const MAX_FRAME_GAP: f64 = 0.1;

    /// Canvas + DOM HUD
    struct WebSurface {
        canvas: HtmlCanvasElement,
        document: Document,
        render_state: RenderState,
        assets: Assets,
        settings: Settings,
        shown_legend: Option<Legend>,
        fps: u32,
    }

    impl WebSurface {
        /// Keep the GPU surface matched to the canvas' on-screen size
        fn sync_size(&mut self) {
            let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
            let width = (self.canvas.client_width() as f64 * dpr) as u32;
            let height = (self.canvas.client_height() as f64 * dpr) as u32;
            if width > 0 && height > 0 && (width, height) != self.render_state.size {
                self.canvas.set_width(width);
                self.canvas.set_height(height);
                self.render_state.resize(width, height);
            }
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn update_hud(&mut self, legend: &Legend) {
            if self.shown_legend.as_ref() != Some(legend) {
                self.set_text("hud-speed", &legend.speed);
                self.set_text("hud-yaw", &legend.heading);
                self.shown_legend = Some(legend.clone());
            }
            if self.settings.show_fps {
                self.set_text("hud-fps", &format!("{} fps", self.fps));
            }
        }
    }

    impl RenderSurface for WebSurface {
        fn viewport(&self) -> Viewport {
            // Zero-sized layouts would make the wrap divide by zero
            Viewport::new(
                self.canvas.client_width().max(1) as f64,
                self.canvas.client_height().max(1) as f64,
            )
        }

        fn present(&mut self, frame: &FrameView<'_>) {
            self.sync_size();
            let viewport = self.viewport();
            let vertices = build_scene(frame, &self.assets, &self.settings, viewport);

            match self.render_state.render(&vertices, viewport) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                    self.render_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }

            self.update_hud(frame.legend);
        }
    }

    struct App {
        driver: FrameDriver,
        surface: WebSurface,
        fps: FpsCounter,
        last_time: f64,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            // Frame gap in 60 Hz frame units
            let delta_frames = if self.last_time > 0.0 {
                let gap = ((time - self.last_time) / 1000.0).min(MAX_FRAME_GAP);
                gap * REFERENCE_FPS
            } else {
                1.0
            };
            self.last_time = time;

            self.surface.fps = self.fps.record(time);
            self.driver.on_frame(&mut self.surface, delta_frames);
        }
    }

    pub async fn run() -> Result<(), StartupError> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Sky Trail starting...");

        let window = web_sys::window().ok_or(StartupError::MissingElement("window"))?;
        let document = window
            .document()
            .ok_or(StartupError::MissingElement("document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into().ok())
            .ok_or(StartupError::MissingElement("canvas"))?;

        let settings = Settings::load();
        let assets = Assets::load(settings.quality)?;

        let dpr = window.device_pixel_ratio();
        let width = ((canvas.client_width() as f64 * dpr) as u32).max(1);
        let height = ((canvas.client_height() as f64 * dpr) as u32).max(1);
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| StartupError::Graphics(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| StartupError::Graphics(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| StartupError::Graphics(e.to_string()))?;

        if let Some(el) = document.get_element_by_id("hud-instructions") {
            el.set_text_content(Some(INSTRUCTIONS));
            if !settings.show_instructions {
                let _ = el.set_attribute("class", "hidden");
            }
        }
        if let Some(el) = document.get_element_by_id("hud-fps") {
            if !settings.show_fps {
                let _ = el.set_attribute("class", "hidden");
            }
        }

        let mut surface = WebSurface {
            canvas,
            document,
            render_state,
            assets,
            settings,
            shown_legend: None,
            fps: 0,
        };
        let driver = FrameDriver::new(surface.viewport());
        // Placeholder text until the first frame
        surface.update_hud(driver.legend());

        let app = Rc::new(RefCell::new(App {
            driver,
            surface,
            fps: FpsCounter::new(),
            last_time: 0.0,
        }));

        setup_keyboard(app.clone());
        request_animation_frame(app);

        log::info!("Sky Trail running!");
        Ok(())
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down - latch the arrow
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if ArrowKey::from_code(&code).is_some() {
                    // Keep arrows from scrolling the page
                    event.prevent_default();
                }
                app.borrow_mut().driver.on_key_down(&code);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up - any release clears the latch
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().driver.on_key_up(&event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_app::run().await {
        log::error!("Startup failed: {}", e);
        panic!("Startup failed: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), sky_trail::StartupError> {
    env_logger::init();
    log::info!("Sky Trail (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    let settings = sky_trail::Settings::load();
    sky_trail::Assets::load(settings.quality)?;

    fly_demo();
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted headless flight, logging the legend after each leg
#[cfg(not(target_arch = "wasm32"))]
fn fly_demo() {
    use sky_trail::FrameDriver;
    use sky_trail::headless::HeadlessSurface;
    use sky_trail::sim::{ArrowKey, Viewport};

    let viewport = Viewport::new(800.0, 600.0);
    let mut driver = FrameDriver::new(viewport);
    let mut surface = HeadlessSurface::new(viewport);

    let legs: [(Option<ArrowKey>, u32); 5] = [
        (Some(ArrowKey::Up), 60),
        (Some(ArrowKey::Right), 16),
        (None, 120),
        (Some(ArrowKey::Left), 32),
        (Some(ArrowKey::Down), 30),
    ];

    for (key, frames) in legs {
        match key {
            Some(key) => driver.on_key_down(key.as_code()),
            None => driver.on_key_up(""),
        }
        for _ in 0..frames {
            driver.on_frame(&mut surface, 1.0);
        }
        let legend = driver.legend();
        log::info!(
            "{} | {} | {} clouds",
            legend.speed,
            legend.heading,
            driver.state().trail.len()
        );
    }

    match serde_json::to_string(driver.state()) {
        Ok(json) => log::debug!("Final state: {}", json),
        Err(e) => log::warn!("Could not serialize state: {}", e),
    }

    println!("Flew {} frames", surface.frames_presented());
}
