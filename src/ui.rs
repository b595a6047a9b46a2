/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides the parameter sliders, the observer toggle
 * standing in for the webcam detector, the run controls and the readouts.
 */

use nannou_egui::{egui, Egui};

use crate::observer::ObserverSignal;
use crate::params::SimulationParams;
use crate::sim::Simulation;

// Update the UI and return which run controls were clicked as
// (start, pause, stop)
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    observer: &ObserverSignal,
    sim: &Simulation,
    clock_seconds: f64,
    fps: f32,
) -> (bool, bool, bool) {
    let mut start_clicked = false;
    let mut pause_clicked = false;
    let mut stop_clicked = false;

    let observer_active = observer.is_active();
    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Beam Parameters", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.wavelength_nm, SimulationParams::get_wavelength_range())
                        .text("Wavelength (nm)"),
                );
                ui.add(
                    egui::Slider::new(&mut params.slit_width, SimulationParams::get_slit_width_range())
                        .text("Slit Width"),
                );
                ui.add(
                    egui::Slider::new(&mut params.slit_separation, SimulationParams::get_slit_separation_range())
                        .text("Slit Separation"),
                );
            });

            ui.collapsing("Observer", |ui| {
                let mut active = observer_active;
                if ui.checkbox(&mut active, "Observer active").changed() {
                    observer.set_active(active);
                }
                if active {
                    ui.colored_label(egui::Color32::RED, "ON (particles)");
                } else {
                    ui.colored_label(egui::Color32::GREEN, "OFF (waves)");
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Start").clicked() {
                    start_clicked = true;
                }
                let pause_label = if sim.paused { "Resume" } else { "Pause" };
                if ui.button(pause_label).clicked() {
                    pause_clicked = true;
                }
                if ui.button("Stop").clicked() {
                    stop_clicked = true;
                }
            });

            ui.separator();

            ui.label(format!("Quantum clock: {:.2} s", clock_seconds));
            ui.label(format!("Detections: {}", sim.detections));
            ui.label(format!("FPS: {:.1}", fps));

            let status = if !sim.running {
                "Stopped"
            } else if sim.paused {
                "Paused"
            } else if observer_active {
                "Running (particle mode)"
            } else {
                "Running (wave mode)"
            };
            ui.label(format!("Status: {}", status));
        });

    (start_clicked, pause_clicked, stop_clicked)
}
