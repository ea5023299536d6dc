//! Backdrop scene state: one active scene at a time, with a lightning timer
//! armed for rain and thunderstorms.

use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{config::MotionSetting, domain::weather::Scene, ui::particles::{Particle, ParticleEngine}};

const LIGHTNING_INTERVAL: Duration = Duration::from_secs(3);
const LIGHTNING_CHANCE: f64 = 0.3;
const FLASH_DURATION: Duration = Duration::from_millis(300);

/// Rolls for a flash once per interval while armed.
#[derive(Debug, Clone)]
pub struct LightningTimer {
    interval: Duration,
    chance: f64,
    flash_len: Duration,
    elapsed: Duration,
    flash_left: Duration,
}

impl Default for LightningTimer {
    fn default() -> Self {
        Self::new(LIGHTNING_INTERVAL, LIGHTNING_CHANCE, FLASH_DURATION)
    }
}

impl LightningTimer {
    #[must_use]
    pub fn new(interval: Duration, chance: f64, flash_len: Duration) -> Self {
        Self {
            interval,
            chance: if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) },
            flash_len,
            elapsed: Duration::ZERO,
            flash_left: Duration::ZERO,
        }
    }

    /// Returns `true` when a new flash starts on this tick.
    pub fn tick(&mut self, dt: Duration, rng: &mut impl Rng) -> bool {
        self.flash_left = self.flash_left.saturating_sub(dt);
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return false;
        }

        self.elapsed -= self.interval;
        if rng.random_bool(self.chance) {
            self.flash_left = self.flash_len;
            return true;
        }
        false
    }

    #[must_use]
    pub fn flashing(&self) -> bool {
        !self.flash_left.is_zero()
    }
}

/// Something that can draw a scene behind the weather panels.
pub trait Backdrop: std::fmt::Debug + Send {
    fn show(&mut self, scene: Scene);
    fn clear(&mut self);
    fn set_wind(&mut self, speed_kmh: f32, direction_deg: Option<f32>);
    fn advance(&mut self, dt: Duration, rng: &mut StdRng);
    fn particles(&self) -> &[Particle];
}

#[derive(Debug)]
pub struct AnimatedBackdrop {
    scene: Option<Scene>,
    engine: ParticleEngine,
}

impl AnimatedBackdrop {
    #[must_use]
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            scene: None,
            engine: ParticleEngine::new(reduced_motion),
        }
    }
}

impl Backdrop for AnimatedBackdrop {
    fn show(&mut self, scene: Scene) {
        self.engine.reset();
        self.scene = Some(scene);
    }

    fn clear(&mut self) {
        self.engine.reset();
        self.scene = None;
    }

    fn set_wind(&mut self, speed_kmh: f32, direction_deg: Option<f32>) {
        self.engine.set_wind(speed_kmh, direction_deg);
    }

    fn advance(&mut self, dt: Duration, rng: &mut StdRng) {
        if let Some(scene) = self.scene {
            self.engine.update(scene, dt, rng);
        }
    }

    fn particles(&self) -> &[Particle] {
        &self.engine.particles
    }
}

/// Draws nothing; used with `--no-animation`.
#[derive(Debug, Default)]
pub struct StillBackdrop;

impl Backdrop for StillBackdrop {
    fn show(&mut self, _scene: Scene) {}
    fn clear(&mut self) {}
    fn set_wind(&mut self, _speed_kmh: f32, _direction_deg: Option<f32>) {}
    fn advance(&mut self, _dt: Duration, _rng: &mut StdRng) {}

    fn particles(&self) -> &[Particle] {
        &[]
    }
}

#[derive(Debug)]
pub struct SceneController {
    active: Option<Scene>,
    backdrop: Box<dyn Backdrop>,
    lightning: Option<LightningTimer>,
    timer_template: LightningTimer,
    no_flash: bool,
    rng: StdRng,
}

impl SceneController {
    #[must_use]
    pub fn new(backdrop: Box<dyn Backdrop>, no_flash: bool) -> Self {
        Self::with_parts(backdrop, LightningTimer::default(), no_flash, StdRng::from_os_rng())
    }

    #[must_use]
    pub fn with_parts(
        backdrop: Box<dyn Backdrop>,
        timer: LightningTimer,
        no_flash: bool,
        rng: StdRng,
    ) -> Self {
        Self {
            active: None,
            backdrop,
            lightning: None,
            timer_template: timer,
            no_flash,
            rng,
        }
    }

    #[must_use]
    pub fn for_motion(motion: MotionSetting, no_flash: bool) -> Self {
        let backdrop: Box<dyn Backdrop> = match motion {
            MotionSetting::Full => Box::new(AnimatedBackdrop::new(false)),
            MotionSetting::Reduced => Box::new(AnimatedBackdrop::new(true)),
            MotionSetting::Off => Box::new(StillBackdrop),
        };
        Self::new(backdrop, no_flash)
    }

    pub fn activate(&mut self, scene: Scene) {
        self.deactivate_all();
        self.backdrop.show(scene);
        if scene.has_lightning() {
            self.lightning = Some(self.timer_template.clone());
        }
        self.active = Some(scene);
        debug!(scene = scene.id(), "scene activated");
    }

    pub fn deactivate_all(&mut self) {
        self.lightning = None;
        self.backdrop.clear();
        self.active = None;
    }

    pub fn set_wind(&mut self, speed_kmh: f32, direction_deg: Option<f32>) {
        self.backdrop.set_wind(speed_kmh, direction_deg);
    }

    pub fn tick(&mut self, dt: Duration) {
        if self.active.is_none() {
            return;
        }
        self.backdrop.advance(dt, &mut self.rng);
        if let Some(timer) = self.lightning.as_mut() {
            timer.tick(dt, &mut self.rng);
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<Scene> {
        self.active
    }

    #[must_use]
    pub fn flash_active(&self) -> bool {
        !self.no_flash && self.lightning.as_ref().is_some_and(LightningTimer::flashing)
    }

    #[must_use]
    pub fn lightning_armed(&self) -> bool {
        self.lightning.is_some()
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        self.backdrop.particles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(chance: f64, no_flash: bool) -> SceneController {
        SceneController::with_parts(
            Box::new(AnimatedBackdrop::new(false)),
            LightningTimer::new(LIGHTNING_INTERVAL, chance, FLASH_DURATION),
            no_flash,
            StdRng::seed_from_u64(11),
        )
    }

    #[test]
    fn only_one_scene_is_active() {
        let mut scenes = controller(0.0, false);
        scenes.activate(Scene::Snow);
        scenes.activate(Scene::Fog);

        assert_eq!(scenes.active(), Some(Scene::Fog));
    }

    #[test]
    fn rain_and_thunder_arm_lightning() {
        let mut scenes = controller(0.0, false);
        for scene in Scene::ALL {
            scenes.activate(scene);
            assert_eq!(scenes.lightning_armed(), scene.has_lightning(), "{scene:?}");
        }
    }

    #[test]
    fn deactivate_all_clears_scene_particles_and_timer() {
        let mut scenes = controller(1.0, false);
        scenes.activate(Scene::Thunderstorm);
        scenes.tick(Duration::from_millis(100));
        assert!(!scenes.particles().is_empty());

        scenes.deactivate_all();

        assert_eq!(scenes.active(), None);
        assert!(!scenes.lightning_armed());
        assert!(scenes.particles().is_empty());
    }

    #[test]
    fn certain_lightning_flashes_after_the_interval() {
        let mut scenes = controller(1.0, false);
        scenes.activate(Scene::Rain);

        scenes.tick(Duration::from_millis(2_900));
        assert!(!scenes.flash_active());

        scenes.tick(Duration::from_millis(100));
        assert!(scenes.flash_active());

        scenes.tick(Duration::from_millis(300));
        assert!(!scenes.flash_active());
    }

    #[test]
    fn zero_chance_never_flashes() {
        let mut scenes = controller(0.0, false);
        scenes.activate(Scene::Thunderstorm);
        for _ in 0..20 {
            scenes.tick(Duration::from_secs(3));
            assert!(!scenes.flash_active());
        }
    }

    #[test]
    fn no_flash_hides_flashes_but_keeps_the_timer() {
        let mut scenes = controller(1.0, true);
        scenes.activate(Scene::Rain);
        scenes.tick(Duration::from_secs(3));

        assert!(scenes.lightning_armed());
        assert!(!scenes.flash_active());
    }

    #[test]
    fn switching_away_from_rain_cancels_a_flash() {
        let mut scenes = controller(1.0, false);
        scenes.activate(Scene::Rain);
        scenes.tick(Duration::from_secs(3));
        assert!(scenes.flash_active());

        scenes.activate(Scene::Sunny);
        assert!(!scenes.flash_active());
    }

    #[test]
    fn still_backdrop_never_draws_particles() {
        let mut scenes = SceneController::with_parts(
            Box::new(StillBackdrop),
            LightningTimer::default(),
            false,
            StdRng::seed_from_u64(3),
        );
        scenes.activate(Scene::Snow);
        scenes.tick(Duration::from_millis(200));

        assert_eq!(scenes.active(), Some(Scene::Snow));
        assert!(scenes.particles().is_empty());
    }

    #[test]
    fn timer_chance_is_clamped() {
        let mut timer = LightningTimer::new(Duration::from_secs(1), 4.0, FLASH_DURATION);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(timer.tick(Duration::from_secs(1), &mut rng));
    }
}
