/*
 * Entity Module
 *
 * This module defines the two kinds of moving entity in the simulation and
 * their per-frame state machines:
 * - WavePacket: travels from the source to a slit, then expands as fading
 *   concentric wavefronts until the front passes the screen.
 * - Particle: flies to a slit, picks up a random vertical deflection while
 *   passing through, then continues straight until it hits the screen.
 * Dispatch between the two is a plain enum match.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::color::wavelength_to_color;
use crate::geometry::Geometry;

// Random vertical deflection picked up while passing a slit, in pixels
const DEFLECTION_RANGE: f32 = 50.0;
// Post-slit targets stay this far away from the top/bottom canvas edges
const EDGE_MARGIN: f32 = 50.0;
// Number of concentric wavefront rings drawn while expanding
const RING_COUNT: u32 = 3;

// A moving entity is either a wave packet or a particle; in-flight entities
// keep their variant for life even if the spawn mode switches under them.
#[derive(Clone, Debug)]
pub enum Entity {
    Wave(WavePacket),
    Particle(Particle),
}

impl Entity {
    pub fn update<R: Rng>(&mut self, geometry: &Geometry, rng: &mut R) {
        match self {
            Entity::Wave(wave) => wave.update(),
            Entity::Particle(particle) => particle.update(geometry, rng),
        }
    }

    pub fn draw(&self, draw: &Draw, geometry: &Geometry) {
        match self {
            Entity::Wave(wave) => wave.draw(draw, geometry),
            Entity::Particle(particle) => particle.draw(draw, geometry),
        }
    }

    pub fn reached_screen(&self, geometry: &Geometry) -> bool {
        match self {
            Entity::Wave(wave) => wave.reached_screen(geometry),
            Entity::Particle(particle) => particle.reached_screen(geometry),
        }
    }

    pub fn age(&self) -> u32 {
        match self {
            Entity::Wave(wave) => wave.age,
            Entity::Particle(particle) => particle.age,
        }
    }

    pub fn is_particle(&self) -> bool {
        matches!(self, Entity::Particle(_))
    }
}

#[derive(Clone, Debug)]
pub struct WavePacket {
    pub source: Point2,
    pub target: Point2,
    pub progress: f32,
    pub speed: f32,
    pub wavelength: f32,
    pub color: Rgb<u8>,
    pub age: u32,
    pub amplitude: f32,
    pub phase: f32,
    pub reached_slit: bool,
    pub circle_radius: f32,
}

impl WavePacket {
    pub fn new(source: Point2, target: Point2, wavelength_nm: f32) -> Self {
        Self {
            source,
            target,
            progress: 0.0,
            // Shorter wavelengths travel slower in progress units per frame
            speed: map_range(wavelength_nm, 400.0, 700.0, 0.01, 0.03),
            wavelength: wavelength_nm,
            color: wavelength_to_color(wavelength_nm),
            age: 0,
            amplitude: 1.0,
            phase: 0.0,
            reached_slit: false,
            circle_radius: 0.0,
        }
    }

    pub fn update(&mut self) {
        if !self.reached_slit {
            // Advance toward the slit; the oscillation phase drives the
            // pulsing marker size
            self.progress += self.speed;
            self.phase += 0.2;
            if self.progress >= 1.0 {
                self.reached_slit = true;
            }
        } else {
            // Expand from the slit while the wave energy fades
            self.circle_radius += self.speed * 50.0;
            self.amplitude *= 0.99;
        }
        self.age += 1;
    }

    pub fn draw(&self, draw: &Draw, geometry: &Geometry) {
        if !self.reached_slit {
            // Pulsing marker interpolated between source and slit
            let position = self.source.lerp(self.target, self.progress);
            let wave_size = 10.0 + 5.0 * self.phase.sin();
            draw.ellipse()
                .xy(geometry.to_window(position))
                .w_h(wave_size, wave_size)
                .no_fill()
                .stroke(self.color)
                .stroke_weight(1.0);
        } else {
            // Concentric wavefronts centered on the slit, fading with amplitude
            let center = geometry.to_window(self.target);
            let alpha = (self.amplitude * 255.0) as u8;
            let stroke = rgba8(self.color.red, self.color.green, self.color.blue, alpha);
            for ring in 0..RING_COUNT {
                let radius = self.circle_radius - ring as f32 * (self.wavelength / 30.0);
                if radius > 0.0 {
                    draw.ellipse()
                        .xy(center)
                        .w_h(radius * 2.0, radius * 2.0)
                        .no_fill()
                        .stroke(stroke)
                        .stroke_weight(1.0);
                }
            }
        }
    }

    pub fn reached_screen(&self, geometry: &Geometry) -> bool {
        self.reached_slit && self.circle_radius > self.target.distance(geometry.screen_mid())
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Point2,
    pub target: Point2,
    pub speed: f32,
    pub velocity: Vec2,
    pub color: Rgb<u8>,
    pub age: u32,
    pub passed_slit: bool,
    pub final_y: f32,
}

impl Particle {
    pub fn new(source: Point2, target: Point2, wavelength_nm: f32) -> Self {
        let speed = map_range(wavelength_nm, 400.0, 700.0, 5.0, 10.0);
        let angle = (target.y - source.y).atan2(target.x - source.x);
        Self {
            position: source,
            target,
            speed,
            velocity: vec2(speed * angle.cos(), speed * angle.sin()),
            color: wavelength_to_color(wavelength_nm),
            age: 0,
            passed_slit: false,
            final_y: target.y,
        }
    }

    pub fn update<R: Rng>(&mut self, geometry: &Geometry, rng: &mut R) {
        self.position += self.velocity;

        if !self.passed_slit && self.position.x >= self.target.x {
            self.passed_slit = true;

            // Random deflection while passing through the slit, clamped away
            // from the canvas edges; the upper bound must not drop below the
            // margin on tiny canvases
            let max_y = (geometry.height - EDGE_MARGIN).max(EDGE_MARGIN);
            let deflected = self.position.y + rng.gen_range(-DEFLECTION_RANGE..DEFLECTION_RANGE);
            self.final_y = deflected.clamp(EDGE_MARGIN, max_y);

            // Re-aim at the screen with the same speed
            let angle = (self.final_y - self.position.y).atan2(geometry.screen_x - self.position.x);
            self.velocity = vec2(self.speed * angle.cos(), self.speed * angle.sin());
        }

        self.age += 1;
    }

    pub fn draw(&self, draw: &Draw, geometry: &Geometry) {
        draw.ellipse()
            .xy(geometry.to_window(self.position))
            .w_h(8.0, 8.0)
            .color(self.color);
    }

    pub fn reached_screen(&self, geometry: &Geometry) -> bool {
        self.position.x >= geometry.screen_x
    }
}
