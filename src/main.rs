/*
 * Double-Slit Experiment Simulation
 * 
 * Entry point: initializes logging and hands control to the nannou app
 * defined in the app module.
 */

use double_slit::app;

fn main() {
    env_logger::init();
    nannou::app(app::model).update(app::update).run();
}
