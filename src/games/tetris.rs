//! Tetris on a 12×20 cell grid
//!
//! The grid is the single source of truth: the falling piece lives in it as
//! `Moving` cells, landed blocks as `Full`, the walls and floor as `Block`.
//! Alongside it the game keeps the piece's 4×4 mask and its top-left offset
//! so it can be rotated.
//!
//! Piece lifecycle:
//! ```text
//! Spawning → Falling → (lands) ─┬─> Spawning
//!                               └─> LinesFading (33 frames) → Spawning
//! ```
//! While falling, four frame counters throttle gravity, sideways moves,
//! turning and fast fall independently of key edges.

use serde::{Deserialize, Serialize};

use crate::sim::{Game, GameKind, GamePhase, GameRng, Key, PhaseStep, TickInput, advance_phase};

pub const GRID_HORIZONTAL_SIZE: usize = 12;
pub const GRID_VERTICAL_SIZE: usize = 20;
/// Frames a completed line flashes before it is removed
pub const FADING_TIME: u32 = 33;

const LATERAL_SPEED: u32 = 10;
const TURNING_SPEED: u32 = 12;
/// Frames after a spawn before holding Down speeds up the fall
const FAST_FALL_AWAIT_COUNTER: u32 = 30;
/// Frames per gravity step
const GRAVITY_SPEED: u32 = 30;
/// Column of the 4×4 box's left edge for a new piece
const SPAWN_X: i32 = ((GRID_HORIZONTAL_SIZE - 4) / 2) as i32;

/// Piece mask indexed `[column][row]`
pub type PieceMask = [[bool; 4]; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Part of the falling piece
    Moving,
    /// Landed block
    Full,
    /// Wall or floor, never changes
    Block,
    /// Completed line waiting to be removed
    Fading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tetromino {
    Square,
    L,
    InvertedL,
    Straight,
    T,
    S,
    InvertedS,
}

impl Tetromino {
    pub const ALL: [Tetromino; 7] = [
        Tetromino::Square,
        Tetromino::L,
        Tetromino::InvertedL,
        Tetromino::Straight,
        Tetromino::T,
        Tetromino::S,
        Tetromino::InvertedS,
    ];

    /// Occupied `(column, row)` cells of the spawn orientation
    pub fn cells(self) -> [(usize, usize); 4] {
        match self {
            Tetromino::Square => [(1, 1), (2, 1), (1, 2), (2, 2)],
            Tetromino::L => [(1, 0), (1, 1), (1, 2), (2, 2)],
            Tetromino::InvertedL => [(1, 2), (2, 0), (2, 1), (2, 2)],
            Tetromino::Straight => [(0, 1), (1, 1), (2, 1), (3, 1)],
            Tetromino::T => [(1, 0), (1, 1), (1, 2), (2, 1)],
            Tetromino::S => [(1, 1), (2, 1), (2, 2), (3, 2)],
            Tetromino::InvertedS => [(1, 2), (2, 2), (2, 1), (3, 1)],
        }
    }

    pub fn mask(self) -> PieceMask {
        let mut mask = [[false; 4]; 4];
        for (i, j) in self.cells() {
            mask[i][j] = true;
        }
        mask
    }
}

/// Quarter turn of a 4×4 mask: the cell at `(a, b)` moves to `(b, 3 - a)`
pub fn rotated(piece: &PieceMask) -> PieceMask {
    let mut out = [[false; 4]; 4];
    for (i, column) in out.iter_mut().enumerate() {
        for (j, cell) in column.iter_mut().enumerate() {
            *cell = piece[3 - j][i];
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceState {
    /// No piece in the grid; the next frame brings in the incoming one
    Spawning,
    Falling,
    /// Completed lines are flashing; `frames` counts up to `FADING_TIME`
    LinesFading { frames: u32 },
}

type Grid = [[Cell; GRID_VERTICAL_SIZE]; GRID_HORIZONTAL_SIZE];

/// Grid positions of the falling piece; a piece never covers more than four
#[derive(Debug, Clone, Copy, Default)]
struct PieceCells {
    cells: [(usize, usize); 4],
    len: usize,
}

impl PieceCells {
    fn push(&mut self, i: usize, j: usize) {
        if self.len < self.cells.len() {
            self.cells[self.len] = (i, j);
            self.len += 1;
        }
    }

    fn iter(&self) -> std::slice::Iter<'_, (usize, usize)> {
        self.cells[..self.len].iter()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tetris {
    pub phase: GamePhase,
    rng: GameRng,
    /// Indexed `[column][row]`, row 0 at the top
    pub grid: Grid,
    pub piece: PieceMask,
    /// Top-left of the piece's 4×4 box in grid cells
    pub piece_x: i32,
    pub piece_y: i32,
    /// One-piece lookahead
    pub incoming: Tetromino,
    pub state: PieceState,
    gravity_counter: u32,
    lateral_counter: u32,
    turn_counter: u32,
    fast_fall_counter: u32,
    /// Rows removed this session
    pub lines: u64,
    /// Starts at 1 and never advances; gravity speed does not depend on it
    pub level: u32,
}

impl Tetris {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            phase: GamePhase::Playing,
            rng: GameRng::new(seed),
            grid: [[Cell::Empty; GRID_VERTICAL_SIZE]; GRID_HORIZONTAL_SIZE],
            piece: [[false; 4]; 4],
            piece_x: 0,
            piece_y: 0,
            incoming: Tetromino::Square,
            state: PieceState::Spawning,
            gravity_counter: 0,
            lateral_counter: 0,
            turn_counter: 0,
            fast_fall_counter: 0,
            lines: 0,
            level: 1,
        };
        game.init();
        game
    }

    fn init(&mut self) {
        self.phase = GamePhase::Playing;
        self.lines = 0;
        self.level = 1;
        self.piece_x = 0;
        self.piece_y = 0;
        self.piece = [[false; 4]; 4];
        self.state = PieceState::Spawning;
        self.gravity_counter = 0;
        self.lateral_counter = 0;
        self.turn_counter = 0;
        self.fast_fall_counter = 0;

        for (i, column) in self.grid.iter_mut().enumerate() {
            for (j, cell) in column.iter_mut().enumerate() {
                *cell = if j == GRID_VERTICAL_SIZE - 1 || i == 0 || i == GRID_HORIZONTAL_SIZE - 1 {
                    Cell::Block
                } else {
                    Cell::Empty
                };
            }
        }

        self.incoming = self.random_tetromino();
    }

    /// Cell at signed coordinates; anything outside the grid reads as wall
    pub fn at(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x >= GRID_HORIZONTAL_SIZE as i32 || y >= GRID_VERTICAL_SIZE as i32 {
            return Cell::Block;
        }
        self.grid[x as usize][y as usize]
    }

    fn random_tetromino(&mut self) -> Tetromino {
        Tetromino::ALL[self.rng.value(0, 6) as usize]
    }

    /// Interior cells holding the falling piece, bottom row first
    fn moving_cells(&self) -> PieceCells {
        let mut cells = PieceCells::default();
        for j in (0..GRID_VERTICAL_SIZE - 1).rev() {
            for i in 1..GRID_HORIZONTAL_SIZE - 1 {
                if self.grid[i][j] == Cell::Moving {
                    cells.push(i, j);
                }
            }
        }
        cells
    }

    /// Stamp the piece mask into the grid at its offset
    fn draw_piece(&mut self) {
        for i in 0..4 {
            for j in 0..4 {
                if !self.piece[i][j] {
                    continue;
                }
                let x = self.piece_x + i as i32;
                let y = self.piece_y + j as i32;
                if self.at(x, y) != Cell::Block {
                    self.grid[x as usize][y as usize] = Cell::Moving;
                }
            }
        }
    }

    fn update(&mut self, input: &TickInput) {
        match self.state {
            PieceState::LinesFading { frames } => {
                let frames = frames + 1;
                if frames >= FADING_TIME {
                    let cleared = self.delete_complete_lines();
                    self.lines += cleared;
                    log::info!("tetris: {} line(s) cleared, {} total", cleared, self.lines);
                    self.state = PieceState::Spawning;
                } else {
                    self.state = PieceState::LinesFading { frames };
                }
                return;
            }
            PieceState::Spawning => {
                self.spawn_piece();
                self.fast_fall_counter = 0;
            }
            PieceState::Falling => self.fall(input),
        }

        let top_reached = (0..2).any(|j| {
            (1..GRID_HORIZONTAL_SIZE - 1).any(|i| self.grid[i][j] == Cell::Full)
        });
        if top_reached {
            log::info!("tetris: stack reached the top after {} lines", self.lines);
            self.phase = GamePhase::GameOver;
        }
    }

    fn spawn_piece(&mut self) {
        self.piece_x = SPAWN_X;
        self.piece_y = 0;
        self.piece = self.incoming.mask();
        self.incoming = self.random_tetromino();
        self.draw_piece();
        self.state = PieceState::Falling;
    }

    fn fall(&mut self, input: &TickInput) {
        self.fast_fall_counter += 1;
        self.gravity_counter += 1;
        self.lateral_counter += 1;
        self.turn_counter += 1;

        // A released key always acts this frame
        if input.released(Key::Left) || input.released(Key::Right) {
            self.lateral_counter = LATERAL_SPEED;
        }
        if input.released(Key::Up) {
            self.turn_counter = TURNING_SPEED;
        }

        if input.held(Key::Down) && self.fast_fall_counter >= FAST_FALL_AWAIT_COUNTER {
            self.gravity_counter += GRAVITY_SPEED;
        }

        if self.gravity_counter >= GRAVITY_SPEED {
            if self.landed() {
                self.commit_piece();
            } else {
                self.step_down();
            }
            if self.mark_complete_lines() {
                self.state = PieceState::LinesFading { frames: 0 };
            }
            self.gravity_counter = 0;
        }

        if self.lateral_counter >= LATERAL_SPEED && !self.move_sideways(input) {
            self.lateral_counter = 0;
        }

        if self.turn_counter >= TURNING_SPEED && self.turn(input) {
            self.turn_counter = 0;
        }
    }

    /// Any piece cell resting on a landed block or the floor
    fn landed(&self) -> bool {
        self.moving_cells()
            .iter()
            .any(|&(i, j)| matches!(self.grid[i][j + 1], Cell::Full | Cell::Block))
    }

    fn commit_piece(&mut self) {
        for &(i, j) in self.moving_cells().iter() {
            self.grid[i][j] = Cell::Full;
        }
        self.state = PieceState::Spawning;
    }

    fn step_down(&mut self) {
        for &(i, j) in self.moving_cells().iter() {
            self.grid[i][j + 1] = Cell::Moving;
            self.grid[i][j] = Cell::Empty;
        }
        self.piece_y += 1;
    }

    /// Shift the piece one column on a Left/Right release.
    ///
    /// Returns true when the move was blocked by a wall or a landed block.
    fn move_sideways(&mut self, input: &TickInput) -> bool {
        let dir: i32 = if input.released(Key::Left) {
            -1
        } else if input.released(Key::Right) {
            1
        } else {
            return false;
        };

        let cells = self.moving_cells();
        let blocked = cells.iter().any(|&(i, j)| {
            let x = i as i32 + dir;
            x == 0 || x == GRID_HORIZONTAL_SIZE as i32 - 1 || self.grid[x as usize][j] == Cell::Full
        });
        if blocked {
            return true;
        }

        for &(i, j) in cells.iter() {
            self.grid[i][j] = Cell::Empty;
        }
        for &(i, j) in cells.iter() {
            self.grid[(i as i32 + dir) as usize][j] = Cell::Moving;
        }
        self.piece_x += dir;
        false
    }

    /// Every piece cell must land on an Empty or Moving cell after the
    /// quarter turn; one check per cell of the 4×4 box.
    fn can_rotate(&self) -> bool {
        let (px, py) = (self.piece_x, self.piece_y);
        for a in 0..4 {
            for b in 0..4 {
                if self.at(px + a, py + b) != Cell::Moving {
                    continue;
                }
                if !matches!(self.at(px + b, py + 3 - a), Cell::Empty | Cell::Moving) {
                    return false;
                }
            }
        }
        true
    }

    /// Rotate while Up is held. Returns true when Up was held, whether or
    /// not the turn was legal.
    fn turn(&mut self, input: &TickInput) -> bool {
        if !input.held(Key::Up) {
            return false;
        }

        if self.can_rotate() {
            self.piece = rotated(&self.piece);
        }

        for &(i, j) in self.moving_cells().iter() {
            self.grid[i][j] = Cell::Empty;
        }
        self.draw_piece();
        true
    }

    /// Flag every interior row made entirely of landed blocks
    fn mark_complete_lines(&mut self) -> bool {
        let mut found = false;
        for j in 0..GRID_VERTICAL_SIZE - 1 {
            let full = (1..GRID_HORIZONTAL_SIZE - 1).all(|i| self.grid[i][j] == Cell::Full);
            if full {
                for i in 1..GRID_HORIZONTAL_SIZE - 1 {
                    self.grid[i][j] = Cell::Fading;
                }
                found = true;
            }
        }
        found
    }

    /// Remove fading rows, pulling everything above down. Returns rows removed.
    fn delete_complete_lines(&mut self) -> u64 {
        let mut cleared = 0;
        for j in (0..GRID_VERTICAL_SIZE - 1).rev() {
            while self.grid[1][j] == Cell::Fading {
                for i in 1..GRID_HORIZONTAL_SIZE - 1 {
                    self.grid[i][j] = Cell::Empty;
                }
                for j2 in (0..j).rev() {
                    for i in 1..GRID_HORIZONTAL_SIZE - 1 {
                        let cell = self.grid[i][j2];
                        if matches!(cell, Cell::Full | Cell::Fading) {
                            self.grid[i][j2 + 1] = cell;
                            self.grid[i][j2] = Cell::Empty;
                        }
                    }
                }
                cleared += 1;
            }
        }
        cleared
    }
}

impl Game for Tetris {
    fn kind(&self) -> GameKind {
        GameKind::Tetris
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

    /// Lines cleared
    fn score(&self) -> u64 {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::KeyState;

    fn key(key: Key, state: KeyState) -> TickInput {
        TickInput::new().with_key(key, state)
    }

    /// Replace the falling piece with `kind` at box offset (`x`, `y`)
    fn place(game: &mut Tetris, kind: Tetromino, x: i32, y: i32) {
        for column in game.grid.iter_mut() {
            for cell in column.iter_mut() {
                if *cell == Cell::Moving {
                    *cell = Cell::Empty;
                }
            }
        }
        game.piece = kind.mask();
        game.piece_x = x;
        game.piece_y = y;
        game.draw_piece();
        game.state = PieceState::Falling;
    }

    fn moving(game: &Tetris) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = game.moving_cells().iter().copied().collect();
        cells.sort();
        cells
    }

    fn snapshot(game: &Tetris) -> Grid {
        game.grid
    }

    #[test]
    fn test_border_is_block() {
        let game = Tetris::new(1);
        for i in 0..GRID_HORIZONTAL_SIZE {
            for j in 0..GRID_VERTICAL_SIZE {
                let border = i == 0 || i == GRID_HORIZONTAL_SIZE - 1 || j == GRID_VERTICAL_SIZE - 1;
                let expected = if border { Cell::Block } else { Cell::Empty };
                assert_eq!(game.grid[i][j], expected);
            }
        }
        assert_eq!(game.state, PieceState::Spawning);
    }

    #[test]
    fn test_spawn_uses_incoming_piece() {
        let mut game = Tetris::new(2);
        let queued = game.incoming;
        game.tick(&TickInput::new());
        assert_eq!(game.state, PieceState::Falling);
        assert_eq!(game.piece, queued.mask());
        assert_eq!(game.piece_x, 4);
        let expected: Vec<_> = {
            let mut v: Vec<_> = queued.cells().iter().map(|&(i, j)| (i + 4, j)).collect();
            v.sort();
            v
        };
        assert_eq!(moving(&game), expected);
    }

    #[test]
    fn test_piece_cells_bottom_row_first() {
        let mut game = Tetris::new(13);
        place(&mut game, Tetromino::Straight, 3, 5);
        let cells: Vec<_> = game.moving_cells().iter().copied().collect();
        assert_eq!(cells.len(), 4);
        assert!(cells.windows(2).all(|w| w[0].1 >= w[1].1));

        // Never more than four, whatever the grid holds
        let mut cells = PieceCells::default();
        for i in 0..6 {
            cells.push(i, 0);
        }
        assert_eq!(cells.iter().count(), 4);
        assert_eq!(cells.iter().last(), Some(&(3, 0)));
    }

    #[test]
    fn test_rotation_cycles_every_shape() {
        for kind in Tetromino::ALL {
            let mask = kind.mask();
            let mut m = mask;
            for _ in 0..4 {
                m = rotated(&m);
            }
            assert_eq!(m, mask);
        }
        // Horizontal bar turns vertical in column 1
        let bar = rotated(&Tetromino::Straight.mask());
        assert!((0..4).all(|j| bar[1][j]));
    }

    #[test]
    fn test_gravity_every_thirty_frames() {
        let mut game = Tetris::new(3);
        place(&mut game, Tetromino::Square, 4, 0);
        for _ in 0..29 {
            game.tick(&TickInput::new());
        }
        assert_eq!(moving(&game), vec![(5, 1), (5, 2), (6, 1), (6, 2)]);
        game.tick(&TickInput::new());
        assert_eq!(moving(&game), vec![(5, 2), (5, 3), (6, 2), (6, 3)]);
        assert_eq!(game.piece_y, 1);
    }

    #[test]
    fn test_fast_fall_after_wait() {
        let mut game = Tetris::new(4);
        place(&mut game, Tetromino::Square, 4, 0);
        let down = key(Key::Down, KeyState::Held);
        for _ in 0..35 {
            game.tick(&down);
        }
        // One normal step at frame 30, then one per frame
        assert_eq!(game.piece_y, 6);
    }

    #[test]
    fn test_lateral_move_on_release_only() {
        let mut game = Tetris::new(5);
        place(&mut game, Tetromino::Square, 4, 0);
        game.tick(&key(Key::Left, KeyState::Held));
        assert_eq!(game.piece_x, 4);
        game.tick(&key(Key::Left, KeyState::Released));
        assert_eq!(game.piece_x, 3);
        assert_eq!(moving(&game), vec![(4, 1), (4, 2), (5, 1), (5, 2)]);
        game.tick(&key(Key::Right, KeyState::Released));
        assert_eq!(game.piece_x, 4);
    }

    #[test]
    fn test_lateral_move_blocked_by_wall_and_stack() {
        let mut game = Tetris::new(6);
        place(&mut game, Tetromino::Square, 0, 0);
        let before = snapshot(&game);
        game.tick(&key(Key::Left, KeyState::Released));
        assert_eq!(game.grid, before);

        place(&mut game, Tetromino::Square, 4, 0);
        game.grid[7][2] = Cell::Full;
        game.tick(&key(Key::Right, KeyState::Released));
        assert_eq!(game.piece_x, 4);
    }

    #[test]
    fn test_rotation_against_left_wall_is_rejected() {
        let mut game = Tetris::new(7);
        // Vertical bar in column 1, its turn would reach into the wall
        place(&mut game, Tetromino::Straight, 0, 5);
        game.piece = rotated(&Tetromino::Straight.mask());
        for column in game.grid.iter_mut() {
            for cell in column.iter_mut() {
                if *cell == Cell::Moving {
                    *cell = Cell::Empty;
                }
            }
        }
        game.draw_piece();
        assert_eq!(moving(&game), vec![(1, 5), (1, 6), (1, 7), (1, 8)]);

        let before = snapshot(&game);
        let piece = game.piece;
        game.turn_counter = TURNING_SPEED;
        game.tick(&key(Key::Up, KeyState::Held));
        assert_eq!(game.grid, before);
        assert_eq!(game.piece, piece);
    }

    #[test]
    fn test_rotation_in_open_space() {
        let mut game = Tetris::new(8);
        place(&mut game, Tetromino::Straight, 3, 5);
        assert_eq!(moving(&game), vec![(3, 6), (4, 6), (5, 6), (6, 6)]);
        game.turn_counter = TURNING_SPEED;
        game.tick(&key(Key::Up, KeyState::Held));
        assert_eq!(moving(&game), vec![(4, 5), (4, 6), (4, 7), (4, 8)]);

        // Turning repeats only every TURNING_SPEED frames while held
        for _ in 0..TURNING_SPEED - 1 {
            game.tick(&key(Key::Up, KeyState::Held));
        }
        assert_eq!(moving(&game), vec![(4, 5), (4, 6), (4, 7), (4, 8)]);
    }

    #[test]
    fn test_landing_commits_piece() {
        let mut game = Tetris::new(9);
        place(&mut game, Tetromino::Square, 4, 16);
        game.gravity_counter = GRAVITY_SPEED - 1;
        game.tick(&TickInput::new());
        assert!(moving(&game).is_empty());
        for (i, j) in [(5, 17), (6, 17), (5, 18), (6, 18)] {
            assert_eq!(game.grid[i][j], Cell::Full);
        }
        assert_eq!(game.state, PieceState::Spawning);
        game.tick(&TickInput::new());
        assert_eq!(game.state, PieceState::Falling);
    }

    #[test]
    fn test_line_clear_after_fade() {
        let mut game = Tetris::new(10);
        for i in 1..GRID_HORIZONTAL_SIZE - 1 {
            if i != 5 && i != 6 {
                game.grid[i][18] = Cell::Full;
            }
        }
        game.grid[1][10] = Cell::Full;
        place(&mut game, Tetromino::Square, 4, 16);
        game.gravity_counter = GRAVITY_SPEED - 1;

        game.tick(&TickInput::new());
        assert_eq!(game.state, PieceState::LinesFading { frames: 0 });
        assert!((1..11).all(|i| game.grid[i][18] == Cell::Fading));

        for _ in 0..FADING_TIME - 1 {
            game.tick(&TickInput::new());
        }
        assert_eq!(game.lines, 0);
        game.tick(&TickInput::new());

        assert_eq!(game.lines, 1);
        assert_eq!(game.score(), 1);
        assert_eq!(game.state, PieceState::Spawning);
        for i in 1..GRID_HORIZONTAL_SIZE - 1 {
            let expected = if i == 5 || i == 6 { Cell::Full } else { Cell::Empty };
            assert_eq!(game.grid[i][18], expected);
            assert_eq!(game.grid[i][17], Cell::Empty);
        }
        assert_eq!(game.grid[1][11], Cell::Full);
        assert_eq!(game.grid[1][10], Cell::Empty);
    }

    #[test]
    fn test_two_lines_count_twice() {
        let mut game = Tetris::new(11);
        for j in [17, 18] {
            for i in 1..GRID_HORIZONTAL_SIZE - 1 {
                if i != 5 && i != 6 {
                    game.grid[i][j] = Cell::Full;
                }
            }
        }
        place(&mut game, Tetromino::Square, 4, 16);
        game.gravity_counter = GRAVITY_SPEED - 1;
        for _ in 0..=FADING_TIME {
            game.tick(&TickInput::new());
        }
        assert_eq!(game.lines, 2);
        assert!((1..11).all(|i| game.grid[i][18] == Cell::Empty));
    }

    #[test]
    fn test_stack_at_top_ends_game_and_restart() {
        let mut game = Tetris::new(12);
        assert_eq!(game.level, 1);
        game.tick(&TickInput::new());
        game.grid[1][1] = Cell::Full;
        game.level = 4;
        game.tick(&TickInput::new());
        assert_eq!(game.phase, GamePhase::GameOver);

        game.tick(&key(Key::Enter, KeyState::Pressed));
        assert_eq!(game.phase, GamePhase::Playing);
        assert_eq!(game.grid[1][1], Cell::Empty);
        assert_eq!(game.state, PieceState::Spawning);
        assert_eq!(game.lines, 0);
        assert_eq!(game.level, 1);
    }
}
