//! Headless arcade runner
//!
//! Plays a game with a scripted input pattern at a fixed 60 Hz host rate and
//! prints the results. `RUST_LOG=info` shows session events.
//!
//! Usage: `arcade-sim [GAME] [--frames N] [--seed N] [--config PATH]`

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use arcade_sim::consts::SIM_DT;
use arcade_sim::sim::{Key, KeyState, MouseButton};
use arcade_sim::{Arcade, GameKind, GamePhase, Settings, TickInput};

const DEFAULT_FRAMES: u64 = 3600;
const DEFAULT_CONFIG: &str = "arcade-sim.json";

struct Args {
    game: Option<GameKind>,
    frames: u64,
    seed: Option<u64>,
    config: String,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        game: None,
        frames: DEFAULT_FRAMES,
        seed: None,
        config: DEFAULT_CONFIG.to_string(),
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--frames" => {
                let v = iter.next().ok_or("--frames needs a value")?;
                args.frames = v.parse().map_err(|_| format!("bad frame count: {}", v))?;
            }
            "--seed" => {
                let v = iter.next().ok_or("--seed needs a value")?;
                args.seed = Some(v.parse().map_err(|_| format!("bad seed: {}", v))?);
            }
            "--config" => {
                args.config = iter.next().ok_or("--config needs a path")?;
            }
            name => {
                let kind = GameKind::from_str(name).ok_or_else(|| format!("unknown game: {}", name))?;
                args.game = Some(kind);
            }
        }
    }
    Ok(args)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Input for host frame `frame`: sweep left and right, tap the action keys,
/// and restart whenever the game has ended
fn scripted_input(frame: u64, phase: GamePhase) -> TickInput {
    if phase.is_terminal() {
        return TickInput::new().with_key(Key::Enter, KeyState::Pressed);
    }

    let sweep = if (frame / 90) % 2 == 0 { Key::Right } else { Key::Left };
    let mut input = TickInput::new()
        .with_key(sweep, KeyState::Held)
        .with_mouse(((frame * 7) % 800) as f32, ((frame * 3) % 300) as f32);

    match frame % 30 {
        0 => {
            input.set_key(Key::Space, KeyState::Pressed);
            input.set_key(Key::Up, KeyState::Pressed);
            input.set_button(MouseButton::Left, KeyState::Pressed);
        }
        1..=10 => {
            input.set_key(Key::Space, KeyState::Held);
            input.set_key(Key::Up, KeyState::Held);
        }
        11 => {
            input.set_key(Key::Space, KeyState::Released);
            input.set_key(Key::Up, KeyState::Released);
        }
        _ => {}
    }
    input
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: arcade-sim [GAME] [--frames N] [--seed N] [--config PATH]");
            let names: Vec<_> = GameKind::ALL.iter().map(|k| k.as_str()).collect();
            eprintln!("games: {}", names.join(", "));
            return ExitCode::FAILURE;
        }
    };

    let settings = Settings::load_or_default(&args.config);
    let seed = args.seed.or(settings.seed).unwrap_or_else(clock_seed);
    let kind = args.game.unwrap_or(settings.default_game);

    log::info!("Arcade Sim (headless) starting...");
    let mut arcade = Arcade::with_game(&settings, kind, seed);

    let mut endings = 0;
    for frame in 0..args.frames {
        let input = scripted_input(frame, arcade.phase());
        let before = arcade.phase();
        arcade.frame(SIM_DT, &input);
        if !before.is_terminal() && arcade.phase().is_terminal() {
            endings += 1;
        }
    }

    println!("{} (seed {})", kind.as_str(), seed);
    println!("  ticks:   {}", arcade.ticks());
    println!("  phase:   {:?}", arcade.phase());
    println!("  score:   {}", arcade.score());
    println!("  endings: {}", endings);
    match arcade.high_scores().best(kind) {
        Some(best) => println!("  best:    {}", best),
        None => println!("  best:    -"),
    }
    ExitCode::SUCCESS
}
