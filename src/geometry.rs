/*
 * Geometry Module
 *
 * This module defines the apparatus layout derived from the canvas size:
 * photon source, slit barrier and detection screen positions. All simulation
 * math runs in canvas coordinates (origin top-left, y down); to_window
 * converts to nannou's centered window space at draw time.
 */

use nannou::prelude::*;

// X position of the photon source, in pixels from the left edge
const SOURCE_X: f32 = 50.0;
// Barrier and screen positions as fractions of the canvas width
const SLIT_FRACTION: f32 = 0.3;
const SCREEN_FRACTION: f32 = 0.8;

#[derive(Clone, Copy, Debug)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    pub source: Point2,
    pub slit_x: f32,
    pub screen_x: f32,
}

impl Geometry {
    // Derive the apparatus layout from the canvas size. Recomputed on
    // resize; degenerate sizes yield degenerate (but valid) layouts.
    pub fn from_canvas(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            source: pt2(SOURCE_X, height / 2.0),
            slit_x: width * SLIT_FRACTION,
            screen_x: width * SCREEN_FRACTION,
        }
    }

    // Vertical midline of the canvas
    pub fn mid_y(&self) -> f32 {
        self.height / 2.0
    }

    // Point on the detection screen level with the canvas midline
    pub fn screen_mid(&self) -> Point2 {
        pt2(self.screen_x, self.mid_y())
    }

    // Centers of the upper and lower slit openings for a given offset
    pub fn slit_centers(&self, slit_offset: f32) -> (Point2, Point2) {
        let mid = self.mid_y();
        (
            pt2(self.slit_x, mid - slit_offset),
            pt2(self.slit_x, mid + slit_offset),
        )
    }

    // Convert a canvas-space point to nannou's centered window space
    pub fn to_window(&self, p: Point2) -> Point2 {
        pt2(p.x - self.width / 2.0, self.height / 2.0 - p.y)
    }
}
