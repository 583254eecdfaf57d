//! Gold Fever: grab the gold and bring it home without getting caught

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_HEIGHT_I, SCREEN_WIDTH, SCREEN_WIDTH_I};
use crate::sim::{
    Game, GameKind, GamePhase, GameRng, Key, PhaseStep, Rect, TickInput, advance_phase,
    circle_circle, circle_rect,
};

const PLAYER_RADIUS: f32 = 20.0;
const PLAYER_SPEED: f32 = 5.0;
const ENEMY_RADIUS: f32 = 20.0;
/// Radius of the patch the enemy guards; entering it starts a chase
const ENEMY_BOUNDS: f32 = 150.0;
const ENEMY_SPEED: f32 = 3.0;
const ENEMY_SPEEDUP: f32 = 0.5;
const GOLD_RADIUS: i32 = 10;
const GOLD_VALUE: u64 = 100;
const HOME_SIZE: i32 = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub position: Vec2,
    pub speed: Vec2,
    pub move_right: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gold {
    pub position: Vec2,
    /// Lying on the field; false while the player carries it
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Home {
    pub rect: Rect,
    /// Shown once gold has been picked up
    pub active: bool,
    /// Player is inside, the enemy cannot touch them
    pub save: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldFever {
    pub phase: GamePhase,
    rng: GameRng,
    pub player: Vec2,
    pub enemy: Enemy,
    pub gold: Gold,
    pub home: Home,
    /// Enemy chases regardless of distance
    pub follow: bool,
    pub score: u64,
}

impl GoldFever {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            phase: GamePhase::Playing,
            rng: GameRng::new(seed),
            player: Vec2::ZERO,
            enemy: Enemy {
                position: Vec2::ZERO,
                speed: Vec2::ZERO,
                move_right: true,
            },
            gold: Gold {
                position: Vec2::ZERO,
                active: false,
            },
            home: Home {
                rect: Rect::default(),
                active: false,
                save: false,
            },
            follow: false,
            score: 0,
        };
        game.init();
        game
    }

    fn init(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.player = Vec2::new(50.0, 50.0);
        self.enemy = Enemy {
            position: Vec2::new(SCREEN_WIDTH - 50.0, (SCREEN_HEIGHT_I / 2) as f32),
            speed: Vec2::splat(ENEMY_SPEED),
            move_right: true,
        };
        self.follow = false;

        self.gold = Gold {
            position: self.random_gold_position(),
            active: true,
        };

        let x = self.rng.value_f32(0, SCREEN_WIDTH_I - HOME_SIZE);
        let y = self.rng.value_f32(0, SCREEN_HEIGHT_I - HOME_SIZE);
        self.home = Home {
            rect: Rect::new(x, y, HOME_SIZE as f32, HOME_SIZE as f32),
            active: false,
            save: false,
        };
    }

    fn random_gold_position(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.value_f32(GOLD_RADIUS, SCREEN_WIDTH_I - GOLD_RADIUS),
            self.rng.value_f32(GOLD_RADIUS, SCREEN_HEIGHT_I - GOLD_RADIUS),
        )
    }

    fn update(&mut self, input: &TickInput) {
        self.move_player(input);
        self.move_enemy();

        if self.gold.active
            && circle_circle(self.player, PLAYER_RADIUS, self.gold.position, GOLD_RADIUS as f32)
        {
            self.follow = true;
            self.gold.active = false;
            self.home.active = true;
            log::debug!("gold-fever: gold picked up");
        }

        if !self.home.save
            && circle_circle(self.player, PLAYER_RADIUS, self.enemy.position, ENEMY_RADIUS)
        {
            log::info!("gold-fever: caught with {} points", self.score);
            self.phase = GamePhase::GameOver;
        }

        if circle_rect(self.player, PLAYER_RADIUS, &self.home.rect) {
            self.follow = false;
            if !self.gold.active {
                self.score += GOLD_VALUE;
                self.gold.active = true;
                self.enemy.speed += Vec2::splat(ENEMY_SPEEDUP);
                self.gold.position = self.random_gold_position();
            }
            self.home.save = true;
        } else {
            self.home.save = false;
        }
    }

    fn move_player(&mut self, input: &TickInput) {
        let p = &mut self.player;
        if input.held(Key::Right) {
            p.x += PLAYER_SPEED;
        }
        if input.held(Key::Left) {
            p.x -= PLAYER_SPEED;
        }
        if input.held(Key::Up) {
            p.y -= PLAYER_SPEED;
        }
        if input.held(Key::Down) {
            p.y += PLAYER_SPEED;
        }

        if p.x - PLAYER_RADIUS <= 0.0 {
            p.x = PLAYER_RADIUS;
        }
        if p.x + PLAYER_RADIUS >= SCREEN_WIDTH {
            p.x = SCREEN_WIDTH - PLAYER_RADIUS;
        }
        if p.y - PLAYER_RADIUS <= 0.0 {
            p.y = PLAYER_RADIUS;
        }
        if p.y + PLAYER_RADIUS >= SCREEN_HEIGHT {
            p.y = SCREEN_HEIGHT - PLAYER_RADIUS;
        }
    }

    /// Chase the player when alerted, otherwise patrol left and right
    fn move_enemy(&mut self) {
        let player = self.player;
        let e = &mut self.enemy;
        let alerted = self.follow || circle_circle(player, PLAYER_RADIUS, e.position, ENEMY_BOUNDS);

        if alerted && !self.home.save {
            if player.x > e.position.x {
                e.position.x += e.speed.x;
            }
            if player.x < e.position.x {
                e.position.x -= e.speed.x;
            }
            if player.y > e.position.y {
                e.position.y += e.speed.y;
            }
            if player.y < e.position.y {
                e.position.y -= e.speed.y;
            }
        } else if e.move_right {
            e.position.x += e.speed.x;
        } else {
            e.position.x -= e.speed.x;
        }

        if e.position.x - ENEMY_RADIUS <= 0.0 {
            e.move_right = true;
        }
        if e.position.x + ENEMY_RADIUS >= SCREEN_WIDTH {
            e.move_right = false;
        }

        e.position.x = e.position.x.clamp(ENEMY_RADIUS, SCREEN_WIDTH - ENEMY_RADIUS);
        e.position.y = e.position.y.clamp(ENEMY_RADIUS, SCREEN_HEIGHT - ENEMY_RADIUS);
    }
}

impl Game for GoldFever {
    fn kind(&self) -> GameKind {
        GameKind::GoldFever
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
