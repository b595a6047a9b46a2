/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains the
 * adjustable parameters for the double-slit simulation. These parameters
 * can be modified through the UI at any time and are read fresh each frame.
 */

use crate::SLIT_SCALE;

// Parameters for the simulation that can be adjusted via UI
#[derive(Clone, Copy, Debug)]
pub struct SimulationParams {
    pub wavelength_nm: f32,
    pub slit_width: f32,
    pub slit_separation: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            wavelength_nm: 550.0, // Green, near the middle of the visible band
            slit_width: 0.2,
            slit_separation: 0.5,
        }
    }
}

impl SimulationParams {
    // Half-distance between the two slit centers, in pixels
    pub fn slit_offset(&self) -> f32 {
        self.slit_separation * SLIT_SCALE
    }

    // Height of each slit opening, in pixels
    pub fn slit_gap(&self) -> f32 {
        self.slit_width * SLIT_SCALE
    }

    // Get parameter ranges for UI sliders
    pub fn get_wavelength_range() -> std::ops::RangeInclusive<f32> {
        380.0..=780.0
    }

    pub fn get_slit_width_range() -> std::ops::RangeInclusive<f32> {
        0.05..=0.5
    }

    pub fn get_slit_separation_range() -> std::ops::RangeInclusive<f32> {
        0.1..=1.5
    }
}
