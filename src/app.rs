/*
 * Application Module
 *
 * This module defines the main application model and logic for the
 * double-slit simulation. It wires the simulation context, the quantum
 * clock and its ticker task, the observer signal and the control panel
 * into nannou's model/update/view loop, and keeps the clock ticker's
 * lifecycle in lockstep with the run controls.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::clock::{ClockTicker, QuantumClock, SharedClock};
use crate::geometry::Geometry;
use crate::observer::ObserverSignal;
use crate::params::SimulationParams;
use crate::renderer;
use crate::sim::Simulation;
use crate::ui;
use crate::FRAME_RATE;

// Main model for the application
pub struct Model {
    pub params: SimulationParams,
    pub geometry: Geometry,
    pub sim: Simulation,
    pub observer: ObserverSignal,
    pub clock: SharedClock,
    pub ticker: Option<ClockTicker>,
    pub egui: Egui,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Double-Slit Experiment")
        .size(window_width as u32, window_height as u32)
        .view(view)
        .resized(window_resized)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Match the original sketch's frame pacing
    app.set_loop_mode(LoopMode::rate_fps(FRAME_RATE as f64));

    Model {
        params: SimulationParams::default(),
        geometry: Geometry::from_canvas(window_width, window_height),
        sim: Simulation::new(),
        observer: ObserverSignal::new(),
        clock: Arc::new(Mutex::new(QuantumClock::new())),
        ticker: None,
        egui,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, _update: Update) {
    let clock_seconds = model.clock.lock().unwrap().elapsed_seconds();

    // Update UI and collect run-control clicks
    let (start_clicked, pause_clicked, stop_clicked) = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &model.observer,
        &model.sim,
        clock_seconds,
        app.fps(),
    );

    apply_run_controls(model, start_clicked, pause_clicked, stop_clicked);

    // Advance one animation frame; a paused or stopped simulation ignores this
    let observer_active = model.observer.is_active();
    let mut rng = rand::thread_rng();
    model
        .sim
        .advance(&model.params, &model.geometry, observer_active, &mut rng);
}

// Apply start/pause/stop clicks to the simulation and keep the clock and
// its ticker task in lockstep
fn apply_run_controls(model: &mut Model, start_clicked: bool, pause_clicked: bool, stop_clicked: bool) {
    let now = Instant::now();

    if start_clicked {
        let was_running = model.sim.running;
        let was_paused = model.sim.paused;
        model.sim.start();
        if !was_running {
            model.clock.lock().unwrap().start(now);
            restart_ticker(model);
        } else if was_paused {
            model.clock.lock().unwrap().resume(now);
            restart_ticker(model);
        }
    }

    if pause_clicked && model.sim.running {
        model.sim.toggle_pause();
        if model.sim.paused {
            model.clock.lock().unwrap().pause();
            cancel_ticker(model);
        } else {
            model.clock.lock().unwrap().resume(now);
            restart_ticker(model);
        }
    }

    if stop_clicked {
        model.sim.stop();
        model.clock.lock().unwrap().stop();
        cancel_ticker(model);
    }
}

fn restart_ticker(model: &mut Model) {
    cancel_ticker(model);
    model.ticker = Some(ClockTicker::start(Arc::clone(&model.clock)));
}

fn cancel_ticker(model: &mut Model) {
    if let Some(ticker) = model.ticker.take() {
        ticker.cancel();
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    // The scene is only drawn while animating; paused and stopped frames
    // show the background and the control panel alone
    if model.sim.is_animating() {
        renderer::draw_simulation(
            &draw,
            &model.sim,
            &model.params,
            &model.geometry,
            model.observer.is_active(),
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}

// Window resize handler: recompute the apparatus layout, keep entities alive
pub fn window_resized(_app: &App, model: &mut Model, dim: Vec2) {
    model.geometry = Geometry::from_canvas(dim.x, dim.y);
    log::debug!("canvas resized to {}x{}", dim.x, dim.y);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Pass events to egui
    model.egui.handle_raw_event(event);
}
