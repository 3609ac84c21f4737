use std::f64::consts::PI;

use rand::Rng;

use super::geometry::{Point, Size};
use super::palette::Color;
use super::toolbox;

const SPAWN_HEIGHT: f64 = 500.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiParticle {
    pub position: Point,
    pub velocity: Point,
    pub size: f64,
    pub color: Color,
    pub rotation: f64,
    pub rotation_speed: f64,
}

impl ConfettiParticle {
    pub fn spawn<R: Rng + ?Sized>(surface: Size, rng: &mut R) -> Self {
        let x = toolbox::unit(rng) * surface.width;
        let y = toolbox::unit(rng) * -SPAWN_HEIGHT;
        let size = toolbox::unit(rng) * 5.0 + 2.0;
        let color = Color::from_hsl(toolbox::unit(rng) * 360.0, 1.0, 0.5);
        let speed_y = toolbox::unit(rng) * 2.0 + 1.0;
        let speed_x = toolbox::centered_unit(rng) * 2.0;
        let rotation = toolbox::unit(rng) * 2.0 * PI;
        let rotation_speed = toolbox::centered_unit(rng) * 0.02;
        ConfettiParticle {
            position: Point::new(x, y),
            velocity: Point::new(speed_x, speed_y),
            size,
            color,
            rotation,
            rotation_speed,
        }
    }

    pub fn has_left(&self, surface: Size) -> bool {
        self.position.y > surface.height + self.size
            || self.position.x < -self.size
            || self.position.x > surface.width + self.size
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, surface: Size, rng: &mut R) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        self.rotation += self.rotation_speed;
        if self.has_left(surface) {
            *self = ConfettiParticle::spawn(surface, rng);
            self.position.y = -self.size;
        }
    }

    /// Rhombus corners relative to the particle center, before rotation.
    pub fn outline(&self) -> [Point; 4] {
        let half = self.size / 2.0;
        [
            Point::new(0.0, -half),
            Point::new(half, 0.0),
            Point::new(0.0, half),
            Point::new(-half, 0.0),
        ]
    }
}

#[derive(Clone, Debug, Default)]
pub struct Confetti {
    pub particles: Vec<ConfettiParticle>,
    pub active: bool,
}

impl Confetti {
    pub fn start<R: Rng + ?Sized>(&mut self, count: usize, surface: Size, rng: &mut R) {
        self.particles = (0..count)
            .map(|_| ConfettiParticle::spawn(surface, rng))
            .collect();
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, surface: Size, rng: &mut R) {
        if !self.active {
            return;
        }
        for particle in &mut self.particles {
            particle.advance(surface, rng);
        }
    }
}
