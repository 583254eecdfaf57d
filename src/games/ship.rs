//! Ship and meteor pieces shared by the two Asteroids variants

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_HEIGHT_I, SCREEN_WIDTH, SCREEN_WIDTH_I};
use crate::sim::{GameRng, Key, TickInput};
use crate::{heading, impl_slot, ship_height};

pub const PLAYER_BASE_SIZE: f32 = 20.0;
pub const PLAYER_SPEED: f32 = 6.0;
pub const METEORS_SPEED: i32 = 2;
pub const COLLIDER_RADIUS: f32 = 12.0;

/// Half-size of the keep-out box around the screen centre for initial meteors
const SPAWN_CLEARANCE: i32 = 150;

/// Rotating, thrusting ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub position: Vec2,
    /// Heading in degrees, 0 = up
    pub rotation: f32,
    /// Thrust scalar in [0, 1]
    pub acceleration: f32,
    /// Hit circle ahead of the ship's centre
    pub collider: Vec2,
}

impl Ship {
    pub fn new() -> Self {
        let height = ship_height(PLAYER_BASE_SIZE);
        let position = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 - height / 2.0);
        let mut ship = Self {
            position,
            rotation: 0.0,
            acceleration: 0.0,
            collider: position,
        };
        ship.update_collider();
        ship
    }

    #[inline]
    pub fn height() -> f32 {
        ship_height(PLAYER_BASE_SIZE)
    }

    /// Rotation, thrust, movement and screen wrap for one frame
    pub fn steer(&mut self, input: &TickInput) {
        if input.held(Key::Left) {
            self.rotation -= 5.0;
        }
        if input.held(Key::Right) {
            self.rotation += 5.0;
        }

        if input.held(Key::Up) {
            if self.acceleration < 1.0 {
                self.acceleration += 0.04;
            }
        } else if self.acceleration > 0.0 {
            self.acceleration -= 0.02;
        } else if self.acceleration < 0.0 {
            self.acceleration = 0.0;
        }
        if input.held(Key::Down) {
            if self.acceleration > 0.0 {
                self.acceleration -= 0.04;
            } else if self.acceleration < 0.0 {
                self.acceleration = 0.0;
            }
        }

        let speed = heading(self.rotation) * PLAYER_SPEED;
        self.position.x += speed.x * self.acceleration;
        self.position.y -= speed.y * self.acceleration;

        let h = Self::height();
        if self.position.x > SCREEN_WIDTH + h {
            self.position.x = -h;
        } else if self.position.x < -h {
            self.position.x = SCREEN_WIDTH + h;
        }
        if self.position.y > SCREEN_HEIGHT + h {
            self.position.y = -h;
        } else if self.position.y < -h {
            self.position.y = SCREEN_HEIGHT + h;
        }
    }

    /// Recompute the hit circle from the current pose
    pub fn update_collider(&mut self) {
        let dir = heading(self.rotation);
        let offset = Self::height() / 2.5;
        self.collider = Vec2::new(
            self.position.x + dir.x * offset,
            self.position.y - dir.y * offset,
        );
    }

    /// Tip of the ship, where shots leave from
    pub fn nose(&self) -> Vec2 {
        let dir = heading(self.rotation);
        let h = Self::height();
        Vec2::new(self.position.x + dir.x * h, self.position.y - dir.y * h)
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meteor {
    pub position: Vec2,
    pub speed: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl_slot!(Meteor);

impl Meteor {
    /// Parked meteor of the given size (off screen, not moving)
    pub fn parked(radius: f32) -> Self {
        Self {
            position: Vec2::new(-100.0, -100.0),
            speed: Vec2::ZERO,
            radius,
            active: false,
        }
    }

    /// Meteor placed away from the screen centre with a non-zero velocity.
    ///
    /// Both the position and the velocity are resampled until valid.
    pub fn random(rng: &mut GameRng, radius: f32) -> Self {
        let mut x = rng.value(0, SCREEN_WIDTH_I);
        while x > SCREEN_WIDTH_I / 2 - SPAWN_CLEARANCE && x < SCREEN_WIDTH_I / 2 + SPAWN_CLEARANCE {
            x = rng.value(0, SCREEN_WIDTH_I);
        }
        let mut y = rng.value(0, SCREEN_HEIGHT_I);
        while y > SCREEN_HEIGHT_I / 2 - SPAWN_CLEARANCE
            && y < SCREEN_HEIGHT_I / 2 + SPAWN_CLEARANCE
        {
            y = rng.value(0, SCREEN_HEIGHT_I);
        }

        let mut vx = rng.value(-METEORS_SPEED, METEORS_SPEED);
        let mut vy = rng.value(-METEORS_SPEED, METEORS_SPEED);
        while vx == 0 && vy == 0 {
            vx = rng.value(-METEORS_SPEED, METEORS_SPEED);
            vy = rng.value(-METEORS_SPEED, METEORS_SPEED);
        }

        Self {
            position: Vec2::new(x as f32, y as f32),
            speed: Vec2::new(vx as f32, vy as f32),
            radius,
            active: true,
        }
    }

    /// Move one frame and wrap to the opposite edge once fully off screen
    pub fn advance(&mut self) {
        self.position += self.speed;

        let r = self.radius;
        if self.position.x > SCREEN_WIDTH + r {
            self.position.x = -r;
        } else if self.position.x < -r {
            self.position.x = SCREEN_WIDTH + r;
        }
        if self.position.y > SCREEN_HEIGHT + r {
            self.position.y = -r;
        } else if self.position.y < -r {
            self.position.y = SCREEN_HEIGHT + r;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::KeyState;

    #[test]
    fn test_meteor_wraps_exactly() {
        let mut m = Meteor::parked(20.0);
        m.active = true;
        m.position = Vec2::new(SCREEN_WIDTH + 19.0, 100.0);
        m.speed = Vec2::new(2.0, 0.0);
        m.advance();
        assert_eq!(m.position.x, -20.0);

        m.position = Vec2::new(100.0, -19.0);
        m.speed = Vec2::new(0.0, -2.0);
        m.advance();
        assert_eq!(m.position.y, SCREEN_HEIGHT + 20.0);
    }

    #[test]
    fn test_random_meteor_outside_centre() {
        let mut rng = GameRng::new(99);
        for _ in 0..200 {
            let m = Meteor::random(&mut rng, 40.0);
            assert!(m.position.x <= 250.0 || m.position.x >= 550.0);
            assert!(m.position.y <= 75.0 || m.position.y >= 375.0);
            assert!(m.speed != Vec2::ZERO);
            assert!(m.active);
        }
    }

    #[test]
    fn test_thrust_and_decay() {
        let mut ship = Ship::new();
        let up = TickInput::new().with_key(Key::Up, KeyState::Held);
        let start = ship.position;
        for _ in 0..10 {
            ship.steer(&up);
        }
        assert!((ship.acceleration - 0.4).abs() < 1e-4);
        assert!(ship.position.y < start.y);
        assert_eq!(ship.position.x, start.x);

        ship.steer(&TickInput::new());
        assert!((ship.acceleration - 0.38).abs() < 1e-4);
    }

    #[test]
    fn test_rotation() {
        let mut ship = Ship::new();
        let right = TickInput::new().with_key(Key::Right, KeyState::Held);
        for _ in 0..18 {
            ship.steer(&right);
        }
        assert_eq!(ship.rotation, 90.0);
        ship.update_collider();
        assert!((ship.collider.x - (ship.position.x + Ship::height() / 2.5)).abs() < 1e-3);
    }
}
