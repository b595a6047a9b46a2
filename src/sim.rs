/*
 * Simulation Module
 *
 * This module owns all mutable loop state: the live entity collection, the
 * run/pause flags, the per-run frame counter driving spawn cadence and the
 * detection counter. One advance() call is one animation frame; rendering
 * reads the same state separately.
 */

use rand::Rng;

use crate::entity::{Entity, Particle, WavePacket};
use crate::geometry::Geometry;
use crate::params::SimulationParams;
use crate::{MAX_ENTITY_AGE, PARTICLE_SPAWN_PERIOD, WAVE_SPAWN_PERIOD};

#[derive(Debug)]
pub struct Simulation {
    pub entities: Vec<Entity>,
    pub running: bool,
    pub paused: bool,
    pub frame_count: u64,
    pub detections: u32,
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            running: false,
            paused: false,
            frame_count: 0,
            detections: 0,
        }
    }

    // Start a fresh run, or resume if currently paused
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.paused = false;
            self.entities.clear();
            self.frame_count = 0;
            self.detections = 0;
            log::debug!("simulation started");
        } else if self.paused {
            self.paused = false;
            log::debug!("simulation resumed");
        }
    }

    // Toggle pause; meaningless unless running
    pub fn toggle_pause(&mut self) {
        if self.running {
            self.paused = !self.paused;
            log::debug!("simulation {}", if self.paused { "paused" } else { "unpaused" });
        }
    }

    // Stop the run and discard its entities and counters
    pub fn stop(&mut self) {
        self.running = false;
        self.paused = false;
        self.entities.clear();
        self.frame_count = 0;
        self.detections = 0;
        log::debug!("simulation stopped");
    }

    pub fn is_animating(&self) -> bool {
        self.running && !self.paused
    }

    // Advance one frame: spawn on cadence, update every entity, remove the
    // ones that reached the screen or aged out
    pub fn advance<R: Rng>(
        &mut self,
        params: &SimulationParams,
        geometry: &Geometry,
        observer_active: bool,
        rng: &mut R,
    ) {
        if !self.is_animating() {
            return;
        }

        self.frame_count += 1;

        // The observer signal picks the path for newly spawned entities
        // only; in-flight entities keep their own behavior to completion
        if observer_active {
            if self.frame_count % PARTICLE_SPAWN_PERIOD == 0 {
                self.spawn_particle(params, geometry, rng);
            }
        } else if self.frame_count % WAVE_SPAWN_PERIOD == 0 {
            self.spawn_wave_pair(params, geometry);
        }

        // Update in place; each entity is examined and removed at most once
        let mut index = 0;
        while index < self.entities.len() {
            self.entities[index].update(geometry, rng);

            let remove = if self.entities[index].reached_screen(geometry) {
                if self.entities[index].is_particle() {
                    self.detections += 1;
                }
                true
            } else {
                self.entities[index].age() > MAX_ENTITY_AGE
            };

            if remove {
                self.entities.remove(index);
            } else {
                index += 1;
            }
        }
    }

    // One wave packet per slit, sharing the current wavelength
    fn spawn_wave_pair(&mut self, params: &SimulationParams, geometry: &Geometry) {
        let (upper, lower) = geometry.slit_centers(params.slit_offset());
        self.entities
            .push(Entity::Wave(WavePacket::new(geometry.source, upper, params.wavelength_nm)));
        self.entities
            .push(Entity::Wave(WavePacket::new(geometry.source, lower, params.wavelength_nm)));
    }

    // One particle aimed at a uniformly chosen slit
    fn spawn_particle<R: Rng>(
        &mut self,
        params: &SimulationParams,
        geometry: &Geometry,
        rng: &mut R,
    ) {
        let (upper, lower) = geometry.slit_centers(params.slit_offset());
        let target = if rng.gen_bool(0.5) { upper } else { lower };
        self.entities
            .push(Entity::Particle(Particle::new(geometry.source, target, params.wavelength_nm)));
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
