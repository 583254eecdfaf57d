//! Gorilas: two teams take turns lobbing a ball across a random skyline
//!
//! Each turn goes Aiming → InFlight → resolved. The ball ends a turn when it
//! leaves the field, hits an opposing player, or hits a building outside an
//! existing crater.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_HEIGHT_I, SCREEN_WIDTH, SCREEN_WIDTH_I, TICK_RATE_HZ};
use crate::impl_slot;
use crate::sim::{
    Game, GameKind, GamePhase, GameRng, MouseButton, PhaseStep, Pool, Rect, TickInput,
    advance_phase, circle_circle, circle_rect,
};

pub const MAX_BUILDINGS: usize = 15;
pub const MAX_EXPLOSIONS: usize = 200;
pub const MAX_PLAYERS: usize = 2;

/// Building width spread, in percent of the mean width
const BUILDING_RELATIVE_ERROR: i32 = 30;
/// Building heights, in percent of the screen height
const BUILDING_MIN_RELATIVE_HEIGHT: i32 = 20;
const BUILDING_MAX_RELATIVE_HEIGHT: i32 = 60;
/// Player distance from its own screen edge, in percent of the width
const MIN_PLAYER_POSITION: i32 = 5;
const MAX_PLAYER_POSITION: i32 = 20;

const PLAYER_SIZE: f32 = 40.0;
const BALL_RADIUS: f32 = 10.0;
const EXPLOSION_RADIUS: f32 = 30.0;
const GRAVITY: f32 = 9.81;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gorilla {
    /// Centre of the player square
    pub position: Vec2,
    pub team: Team,
    pub alive: bool,
    /// Live aim from the mouse
    pub aiming_point: Vec2,
    pub aiming_angle: i32,
    pub aiming_power: i32,
    /// Aim of the last throw
    pub previous_point: Vec2,
    pub previous_angle: i32,
    pub previous_power: i32,
    pub impact_point: Vec2,
}

impl Gorilla {
    pub fn rect(&self) -> Rect {
        Rect::centered(self.position, PLAYER_SIZE, PLAYER_SIZE)
    }

    fn clear_aim(&mut self) {
        self.aiming_point = self.position;
        self.aiming_power = 0;
        self.aiming_angle = 0;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crater {
    pub position: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl_slot!(Crater);

impl Crater {
    fn idle() -> Self {
        Self {
            position: Vec2::ZERO,
            radius: EXPLOSION_RADIUS,
            active: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    pub speed: Vec2,
    pub active: bool,
}

/// Where the current turn is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Aiming,
    InFlight,
}

/// How a flight step ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flight {
    Flying,
    Landed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gorilas {
    pub phase: GamePhase,
    rng: GameRng,
    pub buildings: Vec<Rect>,
    pub players: Vec<Gorilla>,
    pub craters: Pool<Crater>,
    pub ball: Ball,
    /// Index of the player whose turn it is
    pub player_turn: usize,
    pub turn: Turn,
    pub winner: Option<Team>,
}

impl Gorilas {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            phase: GamePhase::Playing,
            rng: GameRng::new(seed),
            buildings: Vec::with_capacity(MAX_BUILDINGS),
            players: Vec::with_capacity(MAX_PLAYERS),
            craters: Pool::new(MAX_EXPLOSIONS, |_| Crater::idle()),
            ball: Ball {
                position: Vec2::ZERO,
                speed: Vec2::ZERO,
                active: false,
            },
            player_turn: 0,
            turn: Turn::Aiming,
            winner: None,
        };
        game.init();
        game
    }

    fn init(&mut self) {
        self.phase = GamePhase::Playing;
        self.ball = Ball {
            position: Vec2::ZERO,
            speed: Vec2::ZERO,
            active: false,
        };
        self.player_turn = 0;
        self.turn = Turn::Aiming;
        self.winner = None;
        self.init_buildings();
        self.init_players();
        self.craters.reset(|_| Crater::idle());
    }

    /// Random widths around the mean, left to right, with random heights
    fn init_buildings(&mut self) {
        let relative_width = (100 / (100 - BUILDING_RELATIVE_ERROR)) as f32;
        let mean = SCREEN_WIDTH * relative_width / MAX_BUILDINGS as f32 + 1.0;
        let min_width = (mean * (100 - BUILDING_RELATIVE_ERROR / 2) as f32 / 100.0 + 1.0) as i32;
        let max_width = (mean * (100 + BUILDING_RELATIVE_ERROR) as f32 / 100.0) as i32;

        self.buildings.clear();
        let mut x = 0;
        for _ in 0..MAX_BUILDINGS {
            let width = self.rng.value(min_width, max_width);
            let percent = self
                .rng
                .value(BUILDING_MIN_RELATIVE_HEIGHT, BUILDING_MAX_RELATIVE_HEIGHT);
            let height = SCREEN_HEIGHT_I * percent / 100;
            self.buildings.push(Rect::new(
                x as f32,
                (SCREEN_HEIGHT_I - height) as f32,
                width as f32,
                (height + 1) as f32,
            ));
            x += width;
        }
    }

    /// Even players on the left team, odd on the right, each standing on the
    /// roof of the building under its random x
    fn init_players(&mut self) {
        self.players.clear();
        for i in 0..MAX_PLAYERS {
            let team = if i % 2 == 0 { Team::Left } else { Team::Right };
            let offset = self.rng.value(
                SCREEN_WIDTH_I * MIN_PLAYER_POSITION / 100,
                SCREEN_WIDTH_I * MAX_PLAYER_POSITION / 100,
            ) as f32;
            let x = match team {
                Team::Left => offset,
                Team::Right => SCREEN_WIDTH - offset,
            };

            // Building under x; past the last building's left edge, use the last one
            let roof = self
                .buildings
                .iter()
                .position(|b| b.x > x)
                .map(|j| j.saturating_sub(1))
                .unwrap_or(self.buildings.len() - 1);
            let b = self.buildings[roof];
            let position = Vec2::new(b.x + b.width / 2.0, b.y - PLAYER_SIZE / 2.0);

            self.players.push(Gorilla {
                position,
                team,
                alive: true,
                aiming_point: position,
                aiming_angle: 0,
                aiming_power: 0,
                previous_point: position,
                previous_angle: 0,
                previous_power: 0,
                impact_point: Vec2::new(-100.0, -100.0),
            });
        }
    }

    fn update(&mut self, input: &TickInput) {
        match self.turn {
            Turn::Aiming => {
                if self.aim(input) {
                    self.turn = Turn::InFlight;
                }
            }
            Turn::InFlight => {
                if self.fly() == Flight::Landed {
                    self.resolve_turn();
                }
            }
        }
    }

    /// Track the mouse in the firing quadrant; a left click throws.
    /// Returns true when the ball was thrown.
    fn aim(&mut self, input: &TickInput) -> bool {
        let turn = self.player_turn;
        let mouse = input.mouse;
        let p = &mut self.players[turn];
        let in_quadrant = mouse.y <= p.position.y
            && match p.team {
                Team::Left => mouse.x >= p.position.x,
                Team::Right => mouse.x <= p.position.x,
            };
        if !in_quadrant {
            p.clear_aim();
            return false;
        }

        p.aiming_power = p.position.distance(mouse) as i32;
        p.aiming_angle = if p.aiming_power > 0 {
            ((p.position.y - mouse.y) / p.aiming_power as f32)
                .clamp(-1.0, 1.0)
                .asin()
                .to_degrees() as i32
        } else {
            0
        };
        p.aiming_point = mouse;

        if !input.clicked(MouseButton::Left) {
            return false;
        }
        p.previous_point = p.aiming_point;
        p.previous_power = p.aiming_power;
        p.previous_angle = p.aiming_angle;
        self.ball.position = p.position;
        log::debug!(
            "gorilas: player {} throws at {} degrees, power {}",
            turn,
            p.previous_angle,
            p.previous_power
        );
        true
    }

    fn fly(&mut self) -> Flight {
        let turn = self.player_turn;
        let fps = TICK_RATE_HZ as f32;

        if !self.ball.active {
            let p = &self.players[turn];
            let angle = (p.previous_angle as f32).to_radians();
            let power = p.previous_power as f32;
            let sx = angle.cos() * power * 3.0 / fps;
            self.ball.speed = Vec2::new(
                match p.team {
                    Team::Left => sx,
                    Team::Right => -sx,
                },
                -angle.sin() * power * 3.0 / fps,
            );
            self.ball.active = true;
        }

        self.ball.position += self.ball.speed;
        self.ball.speed.y += GRAVITY / fps;

        let pos = self.ball.position;
        if pos.x + BALL_RADIUS < 0.0
            || pos.x - BALL_RADIUS > SCREEN_WIDTH
            || pos.y - BALL_RADIUS > SCREEN_HEIGHT
        {
            return Flight::Landed;
        }

        for i in 0..self.players.len() {
            if !self.players[i].alive || !circle_rect(pos, BALL_RADIUS, &self.players[i].rect()) {
                continue;
            }
            // Passing through the thrower's own square
            if i == turn {
                return Flight::Flying;
            }
            self.players[turn].impact_point = Vec2::new(pos.x, pos.y + BALL_RADIUS);
            self.players[i].alive = false;
            log::info!("gorilas: player {} hit player {}", turn, i);
            return Flight::Landed;
        }

        // Inside a crater the ball flies through what used to be building
        let shielded = self.craters.any_active(|c| {
            circle_circle(pos, BALL_RADIUS, c.position, (c.radius - BALL_RADIUS).max(0.0))
        });
        if shielded {
            return Flight::Flying;
        }

        if self
            .buildings
            .iter()
            .any(|b| circle_rect(pos, BALL_RADIUS, b))
        {
            let impact = Vec2::new(pos.x, pos.y + BALL_RADIUS);
            self.players[turn].impact_point = impact;
            if let Some(idx) = self.craters.spawn_round_robin() {
                self.craters[idx].position = impact;
            }
            return Flight::Landed;
        }

        Flight::Flying
    }

    fn resolve_turn(&mut self) {
        let alive = |team| self.players.iter().any(|p| p.alive && p.team == team);
        let left = alive(Team::Left);
        let right = alive(Team::Right);

        if left && right {
            self.turn = Turn::Aiming;
            self.ball.active = false;
            self.player_turn = (self.player_turn + 1) % self.players.len();
        } else {
            self.winner = match (left, right) {
                (true, false) => Some(Team::Left),
                (false, true) => Some(Team::Right),
                _ => None,
            };
            log::info!("gorilas: game over, winner {:?}", self.winner);
            self.phase = GamePhase::GameOver;
        }
    }
}

impl Game for Gorilas {
    fn kind(&self) -> GameKind {
        GameKind::Gorilas
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

    /// A duel has no points
    fn score(&self) -> u64 {
        0
    }
}
