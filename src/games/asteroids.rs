//! Asteroids: shoot every meteor, splitting big ones into smaller ones

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ship::{COLLIDER_RADIUS, METEORS_SPEED, Meteor, PLAYER_SPEED, Ship};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{
    Game, GameKind, GamePhase, GameRng, Key, PhaseStep, Pool, TickInput, advance_phase,
    circle_circle,
};
use crate::{heading, impl_slot};

pub const PLAYER_MAX_SHOOTS: usize = 10;
pub const MAX_BIG_METEORS: usize = 4;
pub const MAX_MEDIUM_METEORS: usize = 8;
pub const MAX_SMALL_METEORS: usize = 16;
pub const TOTAL_METEORS: u32 = (MAX_BIG_METEORS + MAX_MEDIUM_METEORS + MAX_SMALL_METEORS) as u32;

const SHOT_RADIUS: f32 = 2.0;
const SHOT_LIFESPAN: u32 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    pub position: Vec2,
    pub speed: Vec2,
    pub radius: f32,
    /// Ship heading at fire time, steers any fragments this shot creates
    pub rotation: f32,
    pub life: u32,
    pub active: bool,
}

impl_slot!(Shot);

impl Shot {
    fn idle() -> Self {
        Self {
            position: Vec2::ZERO,
            speed: Vec2::ZERO,
            radius: SHOT_RADIUS,
            rotation: 0.0,
            life: 0,
            active: false,
        }
    }
}

/// Which meteor pool a shot hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hit {
    Big(usize),
    Medium(usize),
    Small(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroids {
    pub phase: GamePhase,
    rng: GameRng,
    pub ship: Ship,
    pub shots: Pool<Shot>,
    pub big: Pool<Meteor>,
    pub medium: Pool<Meteor>,
    pub small: Pool<Meteor>,
    /// Fragments spawned so far per size; parity picks the fragment direction
    pub medium_splits: u32,
    pub small_splits: u32,
    pub destroyed: u32,
}

impl Asteroids {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            phase: GamePhase::Playing,
            rng: GameRng::new(seed),
            ship: Ship::new(),
            shots: Pool::new(PLAYER_MAX_SHOOTS, |_| Shot::idle()),
            big: Pool::new(MAX_BIG_METEORS, |_| Meteor::parked(40.0)),
            medium: Pool::new(MAX_MEDIUM_METEORS, |_| Meteor::parked(20.0)),
            small: Pool::new(MAX_SMALL_METEORS, |_| Meteor::parked(10.0)),
            medium_splits: 0,
            small_splits: 0,
            destroyed: 0,
        };
        game.init();
        game
    }

    fn init(&mut self) {
        self.phase = GamePhase::Playing;
        self.ship = Ship::new();
        self.shots.reset(|_| Shot::idle());

        let rng = &mut self.rng;
        self.big = Pool::new_active(MAX_BIG_METEORS, |_| Meteor::random(rng, 40.0));
        self.medium.reset(|_| Meteor::parked(20.0));
        self.small.reset(|_| Meteor::parked(10.0));

        self.medium_splits = 0;
        self.small_splits = 0;
        self.destroyed = 0;
    }

    fn update(&mut self, input: &TickInput) {
        self.ship.steer(input);

        if input.pressed(Key::Space) {
            self.fire();
        }
        self.advance_shots();

        self.ship.update_collider();
        let hit_player = [&self.big, &self.medium, &self.small].iter().any(|pool| {
            pool.any_active(|m| {
                circle_circle(self.ship.collider, COLLIDER_RADIUS, m.position, m.radius)
            })
        });

        for m in self
            .big
            .iter_active_mut()
            .chain(self.medium.iter_active_mut())
            .chain(self.small.iter_active_mut())
        {
            m.advance();
        }

        self.resolve_shot_hits();

        if hit_player {
            log::info!("asteroids: ship destroyed, {} meteors down", self.destroyed);
            self.phase = GamePhase::GameOver;
        } else if self.destroyed == TOTAL_METEORS {
            log::info!("asteroids: field cleared");
            self.phase = GamePhase::Victory;
        }
    }

    fn fire(&mut self) {
        let Some(i) = self.shots.spawn() else {
            return;
        };
        let dir = heading(self.ship.rotation);
        let shot = &mut self.shots[i];
        shot.position = self.ship.nose();
        shot.speed = dir * 1.5 * PLAYER_SPEED;
        shot.rotation = self.ship.rotation;
        shot.life = 0;
    }

    fn advance_shots(&mut self) {
        for shot in self.shots.iter_active_mut() {
            shot.life += 1;
            shot.position.x += shot.speed.x;
            shot.position.y -= shot.speed.y;

            let r = shot.radius;
            let p = shot.position;
            if p.x > SCREEN_WIDTH + r || p.x < -r || p.y > SCREEN_HEIGHT + r || p.y < -r {
                shot.active = false;
                shot.life = 0;
            }

            if shot.life >= SHOT_LIFESPAN {
                *shot = Shot::idle();
            }
        }
    }

    /// Each shot stops at the first meteor it touches (big, then medium, then small)
    fn resolve_shot_hits(&mut self) {
        for i in 0..self.shots.capacity() {
            let shot = &self.shots[i];
            if !shot.active {
                continue;
            }
            let (pos, r) = (shot.position, shot.radius);
            let rotation = shot.rotation;

            let find = |pool: &Pool<Meteor>| {
                pool.iter()
                    .position(|m| m.active && circle_circle(pos, r, m.position, m.radius))
            };
            let hit = find(&self.big)
                .map(Hit::Big)
                .or_else(|| find(&self.medium).map(Hit::Medium))
                .or_else(|| find(&self.small).map(Hit::Small));
            let Some(hit) = hit else {
                continue;
            };

            self.shots[i].active = false;
            self.shots[i].life = 0;
            self.destroyed += 1;

            match hit {
                Hit::Big(a) => {
                    self.big.despawn(a);
                    let origin = self.big[a].position;
                    split(&mut self.medium, &mut self.medium_splits, origin, rotation);
                }
                Hit::Medium(b) => {
                    self.medium.despawn(b);
                    let origin = self.medium[b].position;
                    split(&mut self.small, &mut self.small_splits, origin, rotation);
                }
                Hit::Small(c) => self.small.despawn(c),
            }
        }
    }
}

/// Spawn two fragments at `origin`, direction sign alternating with the
/// running split counter.
fn split(pool: &mut Pool<Meteor>, counter: &mut u32, origin: Vec2, rotation: f32) {
    let rad = rotation.to_radians();
    let dir = Vec2::new(rad.cos(), rad.sin()) * METEORS_SPEED as f32;
    for _ in 0..2 {
        let Some(idx) = pool.spawn() else {
            return;
        };
        let m = &mut pool[idx];
        m.position = origin;
        m.speed = if *counter % 2 == 0 { -dir } else { dir };
        *counter += 1;
    }
}

impl Game for Asteroids {
    fn kind(&self) -> GameKind {
        GameKind::Asteroids
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
        self.destroyed as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::KeyState;

    fn space() -> TickInput {
        TickInput::new().with_key(Key::Space, KeyState::Pressed)
    }

    /// Park every meteor so nothing interferes with a scripted scenario
    fn cleared(seed: u64) -> Asteroids {
        let mut game = Asteroids::new(seed);
        for i in 0..MAX_BIG_METEORS {
            game.big.despawn(i);
        }
        game
    }

    #[test]
    fn test_init() {
        let game = Asteroids::new(1);
        assert_eq!(game.big.active_count(), 4);
        assert_eq!(game.medium.active_count(), 0);
        assert_eq!(game.small.active_count(), 0);
        for m in game.big.iter() {
            assert!(m.position.x <= 250.0 || m.position.x >= 550.0);
            assert!(m.position.y <= 75.0 || m.position.y >= 375.0);
            assert!(m.speed != Vec2::ZERO);
        }
    }

    #[test]
    fn test_fire_uses_first_free_shot() {
        let mut game = cleared(2);
        game.tick(&space());
        game.tick(&TickInput::new());
        game.tick(&space());
        assert_eq!(game.shots.active_count(), 2);
        assert!(game.shots[0].active && game.shots[1].active);
        // Heading up: shots travel toward y = 0
        assert!(game.shots[0].position.y < game.ship.position.y);
    }

    #[test]
    fn test_shot_expires() {
        let mut game = cleared(3);
        // Face right so the shot stays on screen long enough to time out
        game.ship.rotation = 90.0;
        game.ship.position = Vec2::new(10.0, 225.0);
        game.tick(&space());
        for _ in 0..58 {
            game.tick(&TickInput::new());
        }
        assert_eq!(game.shots.active_count(), 1);
        game.tick(&TickInput::new());
        assert_eq!(game.shots.active_count(), 0);
        assert_eq!(game.shots[0].position, Vec2::ZERO);
    }

    #[test]
    fn test_shot_leaves_field() {
        let mut game = cleared(4);
        game.tick(&space());
        for _ in 0..30 {
            game.tick(&TickInput::new());
        }
        assert_eq!(game.shots.active_count(), 0);
    }

    #[test]
    fn test_big_split_symmetry() {
        let mut game = cleared(5);
        // Shot heading straight right, big meteor dead ahead
        game.ship.rotation = 90.0;
        game.ship.position = Vec2::new(100.0, 100.0);
        game.big[0] = Meteor {
            position: Vec2::new(170.0, 100.0),
            speed: Vec2::ZERO,
            radius: 40.0,
            active: true,
        };
        game.tick(&space());

        assert!(!game.big[0].active);
        assert_eq!(game.destroyed, 1);
        assert_eq!(game.medium.active_count(), 2);
        assert_eq!(game.medium_splits, 2);

        let a = game.medium[0].speed;
        let b = game.medium[1].speed;
        // Heading 90: fragment velocity is ±(cos 90, sin 90) * 2, parity 0 is negative
        assert!(a.y < 0.0 && b.y > 0.0);
        assert!((a + b).length() < 1e-5);
    }

    #[test]
    fn test_split_parity_continues_across_splits() {
        let mut pool = Pool::new(8, |_| Meteor::parked(20.0));
        let mut counter = 0;
        split(&mut pool, &mut counter, Vec2::ZERO, 0.0);
        split(&mut pool, &mut counter, Vec2::ZERO, 0.0);
        assert_eq!(counter, 4);
        assert_eq!(pool[0].speed.x, -2.0);
        assert_eq!(pool[1].speed.x, 2.0);
        assert_eq!(pool[2].speed.x, -2.0);
        assert_eq!(pool[3].speed.x, 2.0);
    }

    #[test]
    fn test_shot_hits_only_first_meteor() {
        let mut game = cleared(6);
        game.ship.rotation = 90.0;
        game.ship.position = Vec2::new(100.0, 100.0);
        game.big[0] = Meteor {
            position: Vec2::new(170.0, 100.0),
            speed: Vec2::ZERO,
            radius: 40.0,
            active: true,
        };
        game.small[0] = Meteor {
            position: Vec2::new(140.0, 100.0),
            speed: Vec2::ZERO,
            radius: 10.0,
            active: true,
        };
        game.tick(&space());
        assert_eq!(game.destroyed, 1);
        assert!(game.small[0].active);
    }

    #[test]
    fn test_meteor_contact_is_game_over() {
        let mut game = cleared(7);
        game.ship.update_collider();
        game.small[0] = Meteor {
            position: game.ship.collider,
            speed: Vec2::ZERO,
            radius: 10.0,
            active: true,
        };
        game.tick(&TickInput::new());
        assert_eq!(game.phase, GamePhase::GameOver);

        game.tick(&TickInput::new().with_key(Key::Enter, KeyState::Pressed));
        assert_eq!(game.phase, GamePhase::Playing);
        assert_eq!(game.destroyed, 0);
        assert_eq!(game.big.active_count(), 4);
        assert_eq!(game.small.active_count(), 0);
    }

    #[test]
    fn test_last_meteor_is_victory() {
        let mut game = cleared(8);
        game.destroyed = TOTAL_METEORS - 1;
        game.ship.rotation = 90.0;
        game.ship.position = Vec2::new(100.0, 100.0);
        game.small[3] = Meteor {
            position: Vec2::new(140.0, 100.0),
            speed: Vec2::ZERO,
            radius: 10.0,
            active: true,
        };
        game.tick(&space());
        assert_eq!(game.phase, GamePhase::Victory);
        assert_eq!(game.score(), TOTAL_METEORS as u64);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Asteroids::new(42);
        let mut b = Asteroids::new(42);
        let script = [
            TickInput::new().with_key(Key::Up, KeyState::Held),
            space(),
            TickInput::new().with_key(Key::Left, KeyState::Held),
        ];
        for frame in 0..300 {
            let input = &script[frame % script.len()];
            a.tick(input);
            b.tick(input);
        }
        assert_eq!(a.ship.position, b.ship.position);
        assert_eq!(a.destroyed, b.destroyed);
        assert_eq!(a.phase, b.phase);
        for (ma, mb) in a.big.iter().zip(b.big.iter()) {
            assert_eq!(ma.position, mb.position);
        }
    }
}
