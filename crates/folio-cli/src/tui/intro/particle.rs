//! Dissolve particles for the intro canvas
//!
//! Particles live in virtual pixel space (see `canvas`), age one frame at a
//! time, and die on the exact frame their age reaches their lifespan. A
//! fresh particle is a fresh allocation; there is no pooling.

use rand::Rng;

/// Maximum draw alpha; particles never fully erase a cell in one frame
pub const MAX_ALPHA: f32 = 0.8;

/// Lifespan range in frames, half-open
pub const LIFESPAN_FRAMES: std::ops::Range<u32> = 60..120;

/// Draw radius range in virtual pixels, half-open, rolled per frame
pub const RADIUS_PX: std::ops::Range<f32> = 4.0..12.0;

/// Axis-aligned spawn region in virtual pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnBox {
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Frames survived so far
    pub age: u32,
    /// Fixed at creation; the particle dies when age reaches this
    pub lifespan: u32,
}

impl Particle {
    /// Spawn uniformly at random inside the label's bounding box
    pub fn spawn(bbox: &SpawnBox) -> Self {
        let mut rng = rand::thread_rng();

        Self {
            x: bbox.center_x + rng.gen_range(-0.5..0.5) * bbox.width,
            y: bbox.center_y + rng.gen_range(-0.5..0.5) * bbox.height,
            vx: rng.gen_range(-1.0..1.0),
            vy: rng.gen_range(1.0..4.0),
            age: 0,
            lifespan: rng.gen_range(LIFESPAN_FRAMES),
        }
    }

    /// Advance one frame: drift by velocity, grow older
    pub fn tick(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.age += 1;
    }

    pub fn expired(&self) -> bool {
        self.age >= self.lifespan
    }

    /// Erase strength for this frame, fading linearly over the lifespan
    pub fn alpha(&self) -> f32 {
        (1.0 - self.age as f32 / self.lifespan as f32).max(0.0) * MAX_ALPHA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BBOX: SpawnBox = SpawnBox {
        center_x: 400.0,
        center_y: 200.0,
        width: 300.0,
        height: 48.0,
    };

    #[test]
    fn test_spawn_within_bbox_and_ranges() {
        for _ in 0..200 {
            let p = Particle::spawn(&BBOX);
            assert!(p.x >= 250.0 && p.x < 550.0, "x out of bbox: {}", p.x);
            assert!(p.y >= 176.0 && p.y < 224.0, "y out of bbox: {}", p.y);
            assert!(p.vx >= -1.0 && p.vx < 1.0);
            assert!(p.vy >= 1.0 && p.vy < 4.0);
            assert!(p.lifespan >= 60 && p.lifespan < 120);
            assert_eq!(p.age, 0);
        }
    }

    #[test]
    fn test_age_increments_and_expires_exactly_at_lifespan() {
        let mut p = Particle::spawn(&BBOX);
        p.lifespan = 3;
        for expected_age in 1..3 {
            p.tick();
            assert_eq!(p.age, expected_age);
            assert!(!p.expired());
        }
        p.tick();
        assert_eq!(p.age, 3);
        assert!(p.expired());
    }

    #[test]
    fn test_alpha_fades_to_zero() {
        let mut p = Particle::spawn(&BBOX);
        p.lifespan = 4;
        let mut last = p.alpha();
        assert!((last - MAX_ALPHA).abs() < f32::EPSILON);
        while !p.expired() {
            p.tick();
            let alpha = p.alpha();
            assert!(alpha <= last);
            last = alpha;
        }
        assert_eq!(p.alpha(), 0.0);
    }

    #[test]
    fn test_tick_applies_velocity() {
        let mut p = Particle::spawn(&BBOX);
        let (x, y) = (p.x, p.y);
        p.tick();
        assert!((p.x - x - p.vx).abs() < 1e-5);
        assert!((p.y - y - p.vy).abs() < 1e-5);
    }
}
