/*
 * Interference Module
 *
 * Computes the two-slit fringe pattern painted onto the detection screen.
 * The pattern is recomputed from geometry and wavelength every frame; it is
 * not accumulated from the wave entities.
 */

use nannou::prelude::*;
use std::f32::consts::TAU;

use crate::geometry::Geometry;
use crate::params::SimulationParams;

// Display-space divisor applied to the wavelength slider value when turning
// a path difference into a phase. The slider reads in nm while distances are
// in pixels; this constant sets the on-screen fringe spacing.
const FRINGE_SCALE: f32 = 50.0;
// Thickness of the painted screen band, in pixels
const SCREEN_DEPTH: f32 = 5.0;

// Fringe intensity in [0, 1] for one screen row: path difference between the
// two slits converted to a phase, then the standard cos^2 two-slit formula
pub fn intensity_at(y: f32, slit_a: Point2, slit_b: Point2, screen_x: f32, wavelength: f32) -> f32 {
    let point = pt2(screen_x, y);
    let path_difference = slit_b.distance(point) - slit_a.distance(point);
    let phase = TAU * path_difference / (wavelength / FRINGE_SCALE);
    (phase / 2.0).cos().powi(2)
}

// Paint every vertical pixel row of the detection screen at the brightness
// given by its fringe intensity
pub fn draw_pattern(draw: &Draw, geometry: &Geometry, params: &SimulationParams) {
    let (slit_a, slit_b) = geometry.slit_centers(params.slit_offset());
    let rows = geometry.height.max(0.0) as u32;

    for row in 0..rows {
        let y = row as f32;
        let intensity = intensity_at(y, slit_a, slit_b, geometry.screen_x, params.wavelength_nm);
        let brightness = (intensity * 255.0) as u8;
        draw.line()
            .start(geometry.to_window(pt2(geometry.screen_x, y)))
            .end(geometry.to_window(pt2(geometry.screen_x + SCREEN_DEPTH, y)))
            .weight(1.0)
            .color(rgb8(brightness, brightness, brightness));
    }
}
