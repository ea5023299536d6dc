use std::time::Duration;

use rand::{Rng, rngs::StdRng};

use crate::domain::weather::Scene;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub glyph: char,
}

/// Particle field in normalized `0.0..1.0` coordinates.
#[derive(Debug)]
pub struct ParticleEngine {
    reduced_motion: bool,
    drift: f32,
    pub particles: Vec<Particle>,
    accumulator: f32,
}

impl ParticleEngine {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            reduced_motion,
            drift: 0.0,
            particles: Vec::new(),
            accumulator: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.particles.clear();
        self.accumulator = 0.0;
    }

    /// Wind pushes particles sideways; the sign follows the compass bearing.
    pub fn set_wind(&mut self, speed_kmh: f32, direction_deg: Option<f32>) {
        let base = (speed_kmh / 40.0).clamp(0.0, 1.0);
        let sign = direction_deg
            .filter(|deg| deg.is_finite())
            .map_or(1.0, |deg| deg.to_radians().sin().signum());
        self.drift = base * sign;
    }

    pub fn update(&mut self, scene: Scene, dt: Duration, rng: &mut StdRng) {
        let dt = dt.as_secs_f32().clamp(0.0, 0.25);
        self.accumulator += dt;

        let density = if self.reduced_motion { 4 } else { 14 };

        if self.accumulator >= 0.04 {
            self.accumulator = 0.0;
            for _ in 0..density {
                if let Some(p) = spawn_particle(scene, self.drift, rng) {
                    self.particles.push(p);
                }
            }
        }

        let step = dt * 60.0;
        for p in &mut self.particles {
            p.x += p.vx * step;
            p.y += p.vy * step;
        }
        self.particles
            .retain(|p| p.y < 1.2 && p.x > -0.2 && p.x < 1.2);
    }
}

fn spawn_particle(scene: Scene, drift: f32, rng: &mut StdRng) -> Option<Particle> {
    let x = rng.random_range(0.0..1.0);

    match scene {
        Scene::Rain => Some(Particle {
            x,
            y: 0.0,
            vx: (drift * 0.002) + rng.random_range(-0.0005..0.0005),
            vy: rng.random_range(0.008..0.015),
            glyph: '│',
        }),
        Scene::Snow => Some(Particle {
            x,
            y: 0.0,
            vx: (drift * 0.001) + rng.random_range(-0.0015..0.0015),
            vy: rng.random_range(0.002..0.006),
            glyph: '•',
        }),
        Scene::Fog => Some(Particle {
            x,
            y: rng.random_range(0.2..0.8),
            vx: (drift * 0.001) + rng.random_range(0.0003..0.0012),
            vy: rng.random_range(-0.0003..0.0003),
            glyph: '·',
        }),
        Scene::Thunderstorm => Some(Particle {
            x,
            y: 0.0,
            vx: (drift * 0.0022) + rng.random_range(-0.0006..0.0006),
            vy: rng.random_range(0.01..0.018),
            glyph: '│',
        }),
        Scene::Sunny | Scene::Cloudy => None,
    }
}
