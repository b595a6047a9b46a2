/*
 * Renderer Module
 *
 * This module draws the simulation scene: the static apparatus (source,
 * slit barrier, detection screen), the interference overlay in wave mode,
 * and every live entity. Layering matches that order so entities always
 * paint over the apparatus.
 */

use nannou::prelude::*;

use crate::geometry::Geometry;
use crate::interference;
use crate::params::SimulationParams;
use crate::sim::Simulation;

// Thickness of the slit barrier, in pixels
const BARRIER_THICKNESS: f32 = 10.0;
// Thickness of the detection screen band, in pixels
const SCREEN_THICKNESS: f32 = 5.0;
// Diameter of the photon source marker
const SOURCE_DIAMETER: f32 = 20.0;

// Render one frame of the running simulation
pub fn draw_simulation(
    draw: &Draw,
    sim: &Simulation,
    params: &SimulationParams,
    geometry: &Geometry,
    observer_active: bool,
) {
    draw_apparatus(draw, geometry, params);

    // The fringe overlay belongs to wave mode only; it tracks the current
    // observer signal, not whatever entities happen to be in flight
    if !observer_active {
        interference::draw_pattern(draw, geometry, params);
    }

    for entity in &sim.entities {
        entity.draw(draw, geometry);
    }
}

// Draw the static apparatus: source marker, barrier with two slit gaps,
// and the detection screen band
fn draw_apparatus(draw: &Draw, geometry: &Geometry, params: &SimulationParams) {
    let mid = geometry.mid_y();

    // Photon source
    draw.ellipse()
        .xy(geometry.to_window(geometry.source))
        .w_h(SOURCE_DIAMETER, SOURCE_DIAMETER)
        .color(YELLOW);

    // Barrier wall
    draw.rect()
        .xy(geometry.to_window(pt2(geometry.slit_x, mid)))
        .w_h(BARRIER_THICKNESS, geometry.height)
        .color(rgb8(100, 100, 100));

    // Cut the two slit openings out of the barrier
    let slit_gap = params.slit_gap();
    let (upper, lower) = geometry.slit_centers(params.slit_offset());
    for slit in [upper, lower] {
        draw.rect()
            .xy(geometry.to_window(slit))
            .w_h(BARRIER_THICKNESS, slit_gap)
            .color(BLACK);
    }

    // Detection screen
    draw.rect()
        .xy(geometry.to_window(pt2(geometry.screen_x + SCREEN_THICKNESS / 2.0, mid)))
        .w_h(SCREEN_THICKNESS, geometry.height)
        .color(rgb8(50, 50, 50));
}
