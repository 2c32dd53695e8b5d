//! Starfield physics: the per-frame state behind the background canvas.
//!
//! Pure and browser-free so the update rule can be tested natively. The
//! animation loop owns a [`Starfield`], feeds it pointer and resize events,
//! calls [`Starfield::step`] once per display refresh, and hands the result
//! to [`crate::render`].
//!
//! Each frame, a star inside the repel radius is pushed directly away from
//! the pointer by a distance proportional to how deep inside the radius it
//! sits. Every other star eases toward its own fixed base point. Radii are
//! re-rolled every frame for a flicker effect.

#[cfg(test)]
#[path = "starfield_test.rs"]
mod starfield_test;

use std::f64::consts::TAU;

use rand::Rng;

use crate::config::PageConfig;
use crate::consts::{
    STAR_ACCENT_COLOR, STAR_RADIUS_MIN, STAR_RADIUS_SPAN, STAR_SPEED_MIN, STAR_SPEED_SPAN, STAR_WHITE_COLOR,
};

/// A point in canvas space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarColor {
    Accent,
    White,
}

impl StarColor {
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Accent => STAR_ACCENT_COLOR,
            Self::White => STAR_WHITE_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Point,
    pub base: Point,
    pub radius: f64,
    pub color: StarColor,
    /// Carried for drift effects; the current update rule does not read it.
    pub speed: f64,
    /// Radians in `[0, 2π)`.
    pub direction: f64,
}

/// Motion parameters lifted out of [`PageConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub repel_radius: f64,
    pub repel_divisor: f64,
    pub ease_rate: f64,
    pub accent_probability: f64,
}

impl From<&PageConfig> for Motion {
    fn from(config: &PageConfig) -> Self {
        Self {
            repel_radius: config.repel_radius,
            repel_divisor: config.repel_divisor,
            ease_rate: config.ease_rate,
            accent_probability: config.accent_probability,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    width: f64,
    height: f64,
    pointer: Point,
    motion: Motion,
}

fn random_radius<R: Rng>(rng: &mut R) -> f64 {
    rng.random::<f64>() * STAR_RADIUS_SPAN + STAR_RADIUS_MIN
}

impl Starfield {
    /// Scatter `config.star_count` stars over a `width` x `height` canvas.
    ///
    /// The pointer starts at the canvas center.
    pub fn new<R: Rng>(width: f64, height: f64, config: &PageConfig, rng: &mut R) -> Self {
        let motion = Motion::from(config);
        let stars = (0..config.star_count)
            .map(|_| {
                let pos = Point::new(rng.random::<f64>() * width, rng.random::<f64>() * height);
                let radius = random_radius(rng);
                let color = if rng.random::<f64>() < motion.accent_probability {
                    StarColor::Accent
                } else {
                    StarColor::White
                };
                let speed = rng.random::<f64>() * STAR_SPEED_SPAN + STAR_SPEED_MIN;
                let direction = rng.random::<f64>() * TAU;
                let base = Point::new(rng.random::<f64>() * width, rng.random::<f64>() * height);
                Star { pos, base, radius, color, speed, direction }
            })
            .collect();
        Self { stars, width, height, pointer: Point::new(width * 0.5, height * 0.5), motion }
    }

    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Point::new(x, y);
    }

    /// Track a canvas resize. Stars and base points keep their coordinates.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance every star by one frame.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        let pointer = self.pointer;
        let motion = self.motion;
        for star in &mut self.stars {
            advance(star, pointer, motion);
            star.radius = random_radius(rng);
        }
    }
}

fn advance(star: &mut Star, pointer: Point, motion: Motion) {
    let dx = pointer.x - star.pos.x;
    let dy = pointer.y - star.pos.y;
    let dist = dx.hypot(dy);
    if dist < motion.repel_radius {
        let angle = dy.atan2(dx);
        let push = (motion.repel_radius - dist) / motion.repel_divisor;
        star.pos.x -= angle.cos() * push;
        star.pos.y -= angle.sin() * push;
    } else {
        star.pos.x += (star.base.x - star.pos.x) * motion.ease_rate;
        star.pos.y += (star.base.y - star.pos.y) * motion.ease_rate;
    }
}
