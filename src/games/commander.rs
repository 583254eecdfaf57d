//! Missile Commander: defend the cities with interceptor blasts

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_HEIGHT_I, SCREEN_WIDTH_I};
use crate::impl_slot;
use crate::sim::{
    Game, GameKind, GamePhase, GameRng, MouseButton, PhaseStep, Pool, Rect, TickInput,
    advance_phase, point_in_circle, point_in_rect,
};

pub const MAX_MISSILES: usize = 100;
pub const MAX_INTERCEPTORS: usize = 30;
pub const MAX_EXPLOSIONS: usize = 100;
pub const LAUNCHERS_AMOUNT: usize = 3;
pub const BUILDINGS_AMOUNT: usize = 6;

pub const LAUNCHER_SIZE: f32 = 80.0;
pub const BUILDING_SIZE: f32 = 60.0;
pub const EXPLOSION_RADIUS: f32 = 40.0;

pub const MISSILE_SPEED: f32 = 1.0;
pub const MISSILE_LAUNCH_FRAMES: u32 = 80;
pub const INTERCEPTOR_SPEED: f32 = 10.0;
/// Frames an explosion spends growing, then the frame it vanishes on
pub const EXPLOSION_INCREASE_TIME: u32 = 90;
pub const EXPLOSION_TOTAL_TIME: u32 = 210;

const INTERCEPT_POINTS: u64 = 100;

/// Straight-line projectile from `origin` toward `objective`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub origin: Vec2,
    pub position: Vec2,
    pub objective: Vec2,
    pub speed: Vec2,
    pub active: bool,
}

impl Projectile {
    fn idle() -> Self {
        Self {
            origin: Vec2::ZERO,
            position: Vec2::ZERO,
            objective: Vec2::ZERO,
            speed: Vec2::ZERO,
            active: false,
        }
    }

    fn launch(&mut self, origin: Vec2, objective: Vec2, speed: f32) {
        self.origin = origin;
        self.position = origin;
        self.objective = objective;
        let delta = objective - origin;
        let module = delta.length();
        self.speed = if module > 0.0 {
            delta * speed / module
        } else {
            Vec2::ZERO
        };
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub position: Vec2,
    /// Fraction of `EXPLOSION_RADIUS` currently covered
    pub radius_multiplier: f32,
    pub frame: u32,
    pub active: bool,
}

impl Explosion {
    fn idle() -> Self {
        Self {
            position: Vec2::ZERO,
            radius_multiplier: 0.0,
            frame: 0,
            active: false,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        EXPLOSION_RADIUS * self.radius_multiplier
    }
}

impl_slot!(Projectile, Explosion);

/// Launcher or building standing on the ground
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    /// Centre of the square
    pub position: Vec2,
    pub size: f32,
    pub active: bool,
}

impl Structure {
    pub fn rect(&self) -> Rect {
        Rect::centered(self.position, self.size, self.size)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commander {
    pub phase: GamePhase,
    rng: GameRng,
    pub frames: u32,
    pub score: u64,
    pub missiles: Pool<Projectile>,
    pub interceptors: Pool<Projectile>,
    pub explosions: Pool<Explosion>,
    pub launchers: Vec<Structure>,
    pub buildings: Vec<Structure>,
}

impl Commander {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            phase: GamePhase::Playing,
            rng: GameRng::new(seed),
            frames: 0,
            score: 0,
            missiles: Pool::new(MAX_MISSILES, |_| Projectile::idle()),
            interceptors: Pool::new(MAX_INTERCEPTORS, |_| Projectile::idle()),
            explosions: Pool::new(MAX_EXPLOSIONS, |_| Explosion::idle()),
            launchers: Vec::with_capacity(LAUNCHERS_AMOUNT),
            buildings: Vec::with_capacity(BUILDINGS_AMOUNT),
        };
        game.init();
        game
    }

    fn init(&mut self) {
        self.phase = GamePhase::Playing;
        self.frames = 0;
        self.score = 0;
        self.missiles.reset(|_| Projectile::idle());
        self.interceptors.reset(|_| Projectile::idle());
        self.explosions.reset(|_| Explosion::idle());

        // Nine evenly spaced slots: launcher, 3 buildings, launcher, 3 buildings, launcher
        let spacing = (SCREEN_WIDTH_I / (LAUNCHERS_AMOUNT + BUILDINGS_AMOUNT + 1) as i32) as f32;
        let ground = |size: f32| SCREEN_HEIGHT_I as f32 - size / 2.0;

        self.launchers = [1.0, 5.0, 9.0]
            .into_iter()
            .map(|slot| Structure {
                position: Vec2::new(slot * spacing, ground(LAUNCHER_SIZE)),
                size: LAUNCHER_SIZE,
                active: true,
            })
            .collect();
        self.buildings = [2.0, 3.0, 4.0, 6.0, 7.0, 8.0]
            .into_iter()
            .map(|slot| Structure {
                position: Vec2::new(slot * spacing, ground(BUILDING_SIZE)),
                size: BUILDING_SIZE,
                active: true,
            })
            .collect();
    }

    fn update(&mut self, input: &TickInput) {
        self.frames += 1;

        self.update_interceptors();
        self.update_missiles();
        self.update_explosions();

        self.outgoing_fire(input);
        self.incoming_fire();

        let launchers_gone = self.launchers.iter().all(|l| !l.active);
        let buildings_gone = self.buildings.iter().all(|b| !b.active);
        if launchers_gone || buildings_gone {
            log::info!("commander: defences lost, score {}", self.score);
            self.phase = GamePhase::GameOver;
        }
    }

    fn explode_at(&mut self, position: Vec2) {
        let Some(idx) = self.explosions.spawn_round_robin() else {
            return;
        };
        let e = &mut self.explosions[idx];
        e.position = position;
        e.frame = 0;
        e.radius_multiplier = 0.0;
    }

    /// Only one interceptor may detonate per frame
    fn update_interceptors(&mut self) {
        let mut detonation = None;
        for (i, it) in self.interceptors.iter_mut().enumerate() {
            if !it.active {
                continue;
            }
            it.position += it.speed;
            if it.position.distance(it.objective) < INTERCEPTOR_SPEED {
                detonation = Some((i, it.position));
                break;
            }
        }
        if let Some((i, position)) = detonation {
            self.interceptors.despawn(i);
            self.explode_at(position);
        }
    }

    /// Each missile is checked against launchers, then buildings, then
    /// explosions; the first thing it touches is the only thing it affects.
    fn update_missiles(&mut self) {
        for i in 0..self.missiles.capacity() {
            if !self.missiles[i].active {
                continue;
            }
            let m = &mut self.missiles[i];
            m.position += m.speed;
            let pos = m.position;

            if pos.y > SCREEN_HEIGHT {
                self.missiles.despawn(i);
                continue;
            }

            let struck = self
                .launchers
                .iter_mut()
                .chain(self.buildings.iter_mut())
                .find(|s| s.active && point_in_rect(pos, &s.rect()));
            if let Some(target) = struck {
                target.active = false;
                log::debug!("commander: structure at x={} destroyed", target.position.x);
                self.missiles.despawn(i);
                self.explode_at(pos);
                continue;
            }

            if self
                .explosions
                .any_active(|e| point_in_circle(pos, e.position, e.radius()))
            {
                self.missiles.despawn(i);
                self.score += INTERCEPT_POINTS;
                self.explode_at(pos);
            }
        }
    }

    fn update_explosions(&mut self) {
        for e in self.explosions.iter_active_mut() {
            e.frame += 1;
            if e.frame <= EXPLOSION_INCREASE_TIME {
                e.radius_multiplier = e.frame as f32 / EXPLOSION_INCREASE_TIME as f32;
            } else if e.frame <= EXPLOSION_TOTAL_TIME {
                e.radius_multiplier = 1.0
                    - (e.frame - EXPLOSION_INCREASE_TIME) as f32 / EXPLOSION_TOTAL_TIME as f32;
            } else {
                e.frame = 0;
                e.active = false;
            }
        }
    }

    /// Left, middle and right mouse buttons fire from launchers 1, 2 and 3
    fn outgoing_fire(&mut self, input: &TickInput) {
        let mut shooting = None;
        if input.clicked(MouseButton::Left) {
            shooting = Some(0);
        }
        if input.clicked(MouseButton::Middle) {
            shooting = Some(1);
        }
        if input.clicked(MouseButton::Right) {
            shooting = Some(2);
        }
        let Some(launcher) = shooting else {
            return;
        };
        if !self.launchers[launcher].active {
            return;
        }

        let origin = self.launchers[launcher].position;
        if let Some(idx) = self.interceptors.spawn_round_robin() {
            self.interceptors[idx].launch(origin, input.mouse, INTERCEPTOR_SPEED);
        }
    }

    fn incoming_fire(&mut self) {
        if self.frames % MISSILE_LAUNCH_FRAMES != 0 {
            return;
        }
        let origin = Vec2::new(self.rng.value_f32(20, SCREEN_WIDTH_I - 20), -10.0);
        let objective = Vec2::new(
            self.rng.value_f32(20, SCREEN_WIDTH_I - 20),
            SCREEN_HEIGHT + 10.0,
        );
        if let Some(idx) = self.missiles.spawn_round_robin() {
            self.missiles[idx].launch(origin, objective, MISSILE_SPEED);
        }
    }
}

impl Game for Commander {
    fn kind(&self) -> GameKind {
        GameKind::Commander
    }

    fn reset(&mut self) {
        self.init();
    }

    fn tick(&mut self, input: &TickInput) {
        match advance_phase(&mut self.phase, input) {
            PhaseStep::Run => self.update(input),
            PhaseStep::Halted => {}
            PhaseStep::Restart => self.init(),
        }
    }

    fn phase(&self) -> GamePhase {
        self.phase
    }

    fn score(&self) -> u64 {
        self.score
    }
}
