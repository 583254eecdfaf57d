//! Space Invaders, side-scrolling: survive three waves of enemies flying in
//! from the right and shoot enough of them to clear each wave

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_HEIGHT_I, SCREEN_WIDTH, SCREEN_WIDTH_I};
use crate::impl_slot;
use crate::sim::{
    Game, GameKind, GamePhase, GameRng, Key, PhaseStep, Pool, Rect, TickInput, advance_phase,
    rect_rect,
};

pub const NUM_SHOOTS: usize = 50;
pub const NUM_MAX_ENEMIES: usize = 50;

const PLAYER_SIZE: f32 = 20.0;
const PLAYER_SPEED: f32 = 5.0;
const ENEMY_SIZE: i32 = 10;
const ENEMY_SPEED: f32 = 5.0;
/// Enemies enter somewhere in this band past the right edge
const ENEMY_SPAWN_DEPTH: i32 = 1000;
const SHOT_SPEED: f32 = 7.0;
/// Holding Space adds this each frame; a shot leaves on multiples of `SHOT_RATE_PERIOD`
const SHOT_RATE_STEP: u32 = 5;
const SHOT_RATE_PERIOD: u32 = 20;
const KILL_POINTS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wave {
    First,
    Second,
    Third,
}

impl Wave {
    /// Enemies in play (and kills needed) during this wave
    pub fn size(self) -> usize {
        match self {
            Wave::First => 10,
            Wave::Second => 20,
            Wave::Third => 50,
        }
    }

    fn next(self) -> Option<Wave> {
        match self {
            Wave::First => Some(Wave::Second),
            Wave::Second => Some(Wave::Third),
            Wave::Third => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    pub speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    pub rect: Rect,
    pub active: bool,
}

impl_slot!(Shot);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invaders {
    pub phase: GamePhase,
    rng: GameRng,
    pub player: Rect,
    pub enemies: Vec<Enemy>,
    pub shots: Pool<Shot>,
    pub wave: Wave,
    /// Kills in the current wave
    pub kills: usize,
    pub shoot_rate: u32,
    pub score: u64,
}

impl Invaders {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            phase: GamePhase::Playing,
            rng: GameRng::new(seed),
            player: Rect::default(),
            enemies: Vec::with_capacity(NUM_MAX_ENEMIES),
            shots: Pool::new(NUM_SHOOTS, |_| Shot {
                rect: Rect::default(),
                active: false,
            }),
            wave: Wave::First,
            kills: 0,
            shoot_rate: 0,
            score: 0,
        };
        game.init();
        game
    }

    fn init(&mut self) {
        self.phase = GamePhase::Playing;
        self.wave = Wave::First;
        self.kills = 0;
        self.shoot_rate = 0;
        self.score = 0;
        self.player = Rect::new(20.0, 50.0, PLAYER_SIZE, PLAYER_SIZE);

        self.enemies.clear();
        for _ in 0..NUM_MAX_ENEMIES {
            let rect = Rect::new(0.0, 0.0, ENEMY_SIZE as f32, ENEMY_SIZE as f32);
            let mut enemy = Enemy {
                rect,
                speed: ENEMY_SPEED,
            };
            respawn(&mut self.rng, &mut enemy);
            self.enemies.push(enemy);
        }

        let player = self.player;
        self.shots.reset(|_| Shot {
            rect: shot_rect(&player),
            active: false,
        });
    }

    fn update(&mut self, input: &TickInput) {
        if self.kills >= self.wave.size() {
            match self.wave.next() {
                Some(next) => {
                    log::info!("invaders: {:?} wave cleared, {:?} incoming", self.wave, next);
                    self.wave = next;
                    self.kills = 0;
                }
                None => {
                    log::info!("invaders: all waves cleared with {} points", self.score);
                    self.phase = GamePhase::Victory;
                    return;
                }
            }
        }
        let in_play = self.wave.size();

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

        let player = self.player;
        let crashed = self.enemies[..in_play]
            .iter()
            .any(|e| rect_rect(&player, &e.rect));

        for enemy in self.enemies[..in_play].iter_mut() {
            enemy.rect.x -= enemy.speed;
            if enemy.rect.x < 0.0 {
                respawn(&mut self.rng, enemy);
            }
        }

        let p = &mut self.player;
        p.x = p.x.clamp(0.0, SCREEN_WIDTH - p.width);
        p.y = p.y.clamp(0.0, SCREEN_HEIGHT - p.height);

        if input.held(Key::Space) {
            self.shoot_rate += SHOT_RATE_STEP;
            if self.shoot_rate % SHOT_RATE_PERIOD == 0 {
                let rect = shot_rect(&self.player);
                if let Some(i) = self.shots.spawn() {
                    self.shots[i].rect = rect;
                }
            }
        }

        self.advance_shots(in_play);

        if crashed {
            log::info!("invaders: player hit with {} points", self.score);
            self.phase = GamePhase::GameOver;
        }
    }

    /// Move shots right; each one stops at the first enemy it overlaps
    fn advance_shots(&mut self, in_play: usize) {
        for shot in self.shots.iter_active_mut() {
            shot.rect.x += SHOT_SPEED;

            if let Some(enemy) = self.enemies[..in_play]
                .iter_mut()
                .find(|e| rect_rect(&shot.rect, &e.rect))
            {
                shot.active = false;
                respawn(&mut self.rng, enemy);
                self.shoot_rate = 0;
                self.kills += 1;
                self.score += KILL_POINTS;
            }

            if shot.rect.right() >= SCREEN_WIDTH {
                shot.active = false;
                self.shoot_rate = 0;
            }
        }
    }

    /// Frames between shots while Space is held
    pub fn fire_interval() -> u32 {
        SHOT_RATE_PERIOD / SHOT_RATE_STEP
    }
}

/// Put an enemy back somewhere past the right edge
fn respawn(rng: &mut GameRng, enemy: &mut Enemy) {
    enemy.rect.x = rng.value_f32(SCREEN_WIDTH_I, SCREEN_WIDTH_I + ENEMY_SPAWN_DEPTH);
    enemy.rect.y = rng.value_f32(0, SCREEN_HEIGHT_I - ENEMY_SIZE);
}

fn shot_rect(player: &Rect) -> Rect {
    Rect::new(player.x, player.y + player.height / 4.0, 10.0, 5.0)
}

impl Game for Invaders {
    fn kind(&self) -> GameKind {
        GameKind::Invaders
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
