//! Velocity Lab entry point
//!
//! Handles platform-specific initialization and runs the widget loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_widget {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlButtonElement, HtmlCanvasElement, HtmlInputElement, KeyboardEvent,
                  MouseEvent};

    use velocity_lab::consts::*;
    use velocity_lab::renderer::{RenderState, frame_vertices};
    use velocity_lab::settings::Settings;
    use velocity_lab::sim::{RunParameters, RunPhase, SimState, tick};

    /// Widget instance holding all state
    struct Widget {
        state: SimState,
        settings: Settings,
        render_state: Option<RenderState>,
        /// Unconsumed frame time; zeroed on every Start/Reset so no
        /// integration carries across runs
        accumulator: f32,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Widget {
        fn new() -> Self {
            Self {
                state: SimState::new(),
                settings: Settings::load(),
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks while a run is active
        fn update(&mut self, dt: f32, time: f64) {
            if self.state.phase == RunPhase::Running {
                let dt = dt.min(0.1);
                self.accumulator += dt;

                let mut substeps = 0;
                while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
                    tick(&mut self.state, TICK_DT);
                    self.accumulator -= TICK_DT;
                    substeps += 1;
                }
            } else {
                // Leaving Running always releases pending frame time
                self.accumulator = 0.0;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = frame_vertices(&self.state, &self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Snapshot the sliders and begin a run
        fn start_run(&mut self) {
            let params = RunParameters {
                speed: input_value("speed-slider").unwrap_or(10.0),
                angle_deg: input_value("angle-slider").unwrap_or(0.0),
                duration: input_value("duration-slider").unwrap_or(5.0),
            };
            if self.state.start(params) {
                self.accumulator = 0.0;
                set_input_text("answer-input", "");
            }
        }

        /// Cancel any active run and return to Idle
        fn reset(&mut self) {
            self.state.reset();
            self.accumulator = 0.0;
            set_input_text("answer-input", "");
        }

        /// Judge the quiz answer field against this run's reference
        fn check_answer(&mut self) {
            if let Some(input) = input_element("answer-input") {
                let feedback = self.state.submit_answer(&input.value());
                if let Some(feedback) = feedback {
                    log::info!("quiz answer judged: correct={}", feedback.is_correct());
                }
            }
        }

        /// Update HUD elements in DOM: pure read projections of sim state
        fn update_hud(&self) {
            let document = web_sys::window().unwrap().document().unwrap();
            let running = self.state.phase == RunPhase::Running;

            // Parameter labels track the sliders; the displayed velocity
            // reflects the captured snapshot, not the slider being dragged
            set_text(&document, "field-vx", &format!("{:.2}", self.state.velocity.vx));
            set_text(&document, "field-vy", &format!("{:.2}", self.state.velocity.vy));

            let pos = self.state.physical_position();
            set_text(
                &document,
                "field-pos",
                &format!("({:.2}, {:.2})", pos.x, pos.y),
            );
            set_text(
                &document,
                "field-elapsed",
                &format!("{:.2}s", self.state.elapsed),
            );

            // Boundary notice
            if let Some(el) = document.get_element_by_id("boundary-note") {
                let class = if self.state.hit_boundary {
                    "note"
                } else {
                    "note hidden"
                };
                let _ = el.set_attribute("class", class);
            }

            // Controls lock while a run is active
            for id in ["speed-slider", "angle-slider", "duration-slider"] {
                if let Some(input) = input_element(id) {
                    input.set_disabled(running);
                }
            }
            if let Some(btn) = button_element("start-btn") {
                btn.set_disabled(running);
            }

            // Quiz panel opens only on a stopped run with time on the clock
            if let Some(el) = document.get_element_by_id("quiz-panel") {
                if self.state.quiz_available() {
                    let _ = el.set_attribute("class", "quiz");
                    set_text(
                        &document,
                        "quiz-distance",
                        &format!("{:.2}", self.state.distance_from_origin()),
                    );
                    set_text(
                        &document,
                        "quiz-time",
                        &format!("{:.2}", self.state.elapsed),
                    );
                } else {
                    let _ = el.set_attribute("class", "quiz hidden");
                }
            }

            // Quiz feedback line
            if let Some(el) = document.get_element_by_id("feedback") {
                match &self.state.quiz_feedback {
                    Some(feedback) => {
                        el.set_text_content(Some(&feedback.message()));
                        let class = if feedback.is_correct() {
                            "feedback correct"
                        } else {
                            "feedback retry"
                        };
                        let _ = el.set_attribute("class", class);
                    }
                    None => {
                        el.set_text_content(None);
                        let _ = el.set_attribute("class", "feedback hidden");
                    }
                }
            }

            // FPS counter
            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&self.fps.to_string()));
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    fn input_element(id: &str) -> Option<HtmlInputElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into()
            .ok()
    }

    fn button_element(id: &str) -> Option<HtmlButtonElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into()
            .ok()
    }

    fn input_value(id: &str) -> Option<f32> {
        input_element(id)?.value().trim().parse().ok()
    }

    fn set_input_text(id: &str, text: &str) {
        if let Some(input) = input_element(id) {
            input.set_value(text);
        }
    }

    fn set_text(document: &web_sys::Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Mirror a slider's live value into its label
    fn sync_slider_label(slider_id: &str, label_id: &str, suffix: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(input) = input_element(slider_id) {
            set_text(&document, label_id, &format!("{}{}", input.value(), suffix));
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Velocity Lab starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("chart-canvas")
            .expect("no chart canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let widget = Rc::new(RefCell::new(Widget::new()));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        widget.borrow_mut().render_state = Some(render_state);

        setup_controls(widget.clone());

        // Initialize slider labels
        sync_slider_label("speed-slider", "speed-value", " m/s");
        sync_slider_label("angle-slider", "angle-value", "°");
        sync_slider_label("duration-slider", "duration-value", "s");

        // Start widget loop
        request_animation_frame(widget);

        log::info!("Velocity Lab running");
    }

    fn setup_controls(widget: Rc<RefCell<Widget>>) {
        // Start button
        if let Some(btn) = button_element("start-btn") {
            let widget = widget.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                widget.borrow_mut().start_run();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Reset button
        if let Some(btn) = button_element("reset-btn") {
            let widget = widget.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                widget.borrow_mut().reset();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Check Answer button
        if let Some(btn) = button_element("check-btn") {
            let widget = widget.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                widget.borrow_mut().check_answer();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Enter in the answer field submits too
        if let Some(input) = input_element("answer-input") {
            let widget = widget.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "Enter" {
                    widget.borrow_mut().check_answer();
                }
            });
            let _ =
                input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Grid checkbox - persisted display preference
        if let Some(input) = input_element("grid-toggle") {
            let widget = widget.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if let Some(input) = input_element("grid-toggle") {
                    let mut w = widget.borrow_mut();
                    w.settings.show_grid = input.checked();
                    w.settings.save();
                }
            });
            let _ =
                input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // FPS counter checkbox
        if let Some(input) = input_element("fps-toggle") {
            let widget = widget.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if let Some(input) = input_element("fps-toggle") {
                    let mut w = widget.borrow_mut();
                    w.settings.show_fps = input.checked();
                    w.settings.save();
                }
            });
            let _ =
                input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Sliders only update their labels live; values are snapshotted
        // by start_run, so dragging can never affect an active run
        for (slider_id, label_id, suffix) in [
            ("speed-slider", "speed-value", " m/s"),
            ("angle-slider", "angle-value", "°"),
            ("duration-slider", "duration-value", "s"),
        ] {
            if let Some(input) = input_element(slider_id) {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    sync_slider_label(slider_id, label_id, suffix);
                });
                let _ = input
                    .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(widget: Rc<RefCell<Widget>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            widget_loop(widget, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn widget_loop(widget: Rc<RefCell<Widget>>, time: f64) {
        {
            let mut w = widget.borrow_mut();

            let dt = if w.last_time > 0.0 {
                ((time - w.last_time) / 1000.0) as f32
            } else {
                TICK_DT
            };
            w.last_time = time;

            w.update(dt, time);
            w.render();
            w.update_hud();
        }

        request_animation_frame(widget);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_widget::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use velocity_lab::consts::TICK_DT;
    use velocity_lab::sim::{RunParameters, RunPhase, SimState, reference_velocity, tick};

    env_logger::init();
    log::info!("Velocity Lab (native) starting...");
    log::info!("Native mode runs a headless demo - use `trunk serve` for the web widget");

    let mut state = SimState::new();
    state.start(RunParameters {
        speed: 10.0,
        angle_deg: 30.0,
        duration: 5.0,
    });

    while state.phase == RunPhase::Running {
        tick(&mut state, TICK_DT);
    }

    let pos = state.physical_position();
    println!(
        "Run finished after {:.2}s at ({:.2}, {:.2}){}",
        state.elapsed,
        pos.x,
        pos.y,
        if state.hit_boundary {
            " - hit the boundary"
        } else {
            ""
        }
    );
    println!("Trajectory samples logged: {}", state.trajectory().len());
    println!(
        "Average velocity: {:.2} m/s",
        reference_velocity(state.distance_from_origin(), state.elapsed)
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
