//! Pipe Twist entry point
//!
//! Thin terminal front end: draws the board as box-drawing glyphs and maps
//! stdin commands onto the session controller. All game logic lives in the
//! library.

use std::io::{self, BufRead, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use pipe_twist::GameSession;
use pipe_twist::consts::DEFAULT_GRID_SIZE;
use pipe_twist::engine::Cell;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let size = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(DEFAULT_GRID_SIZE)
        .max(2);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    log::info!("Pipe Twist starting (size {}, seed {})", size, seed);

    let mut session = GameSession::new(size, seed);
    println!("Pipe Twist - connect the top-left corner to the bottom-right.");
    println!("Commands: r <row> <col> (rotate), new, quit");
    render(&session);

    let stdin = io::stdin();
    let mut last_input = Instant::now();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };

        // Wall-clock gap since the previous command, in whole seconds
        let now = Instant::now();
        for _ in 0..now.duration_since(last_input).as_secs() {
            session.tick_second();
        }
        last_input = now;

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["r" | "rotate", row, col] => {
                let (Ok(row), Ok(col)) = (row.parse(), col.parse()) else {
                    println!("Usage: r <row> <col>");
                    continue;
                };
                let was_active = session.is_active();
                session.rotate(Cell::new(row, col));
                render(&session);
                if was_active && !session.is_active() {
                    println!(
                        "You win! Time: {}s, Rotations: {}",
                        session.elapsed_secs(),
                        session.rotation_count()
                    );
                }
            }
            ["new"] => {
                session.new_game();
                render(&session);
            }
            ["dump"] => {
                // Debug aid: full board state as JSON
                match serde_json::to_string_pretty(session.grid()) {
                    Ok(json) => println!("{}", json),
                    Err(e) => log::error!("Serialize failed: {}", e),
                }
            }
            ["q" | "quit" | "exit"] => break,
            [] => render(&session),
            _ => println!("Commands: r <row> <col> (rotate), new, dump, quit"),
        }
        let _ = io::stdout().flush();
    }

    log::info!("Pipe Twist exiting");
}

/// Draw the board plus the status line
fn render(session: &GameSession) {
    let grid = session.grid();
    let winning = &session.last_solve().path;

    print!("   ");
    for col in 0..grid.size() {
        print!(" {} ", col);
    }
    println!();
    for row in 0..grid.size() {
        print!("{}  ", row);
        for col in 0..grid.size() {
            let cell = Cell::new(row, col);
            let glyph = glyph(grid.tile(cell).ports());
            if winning.contains(&cell) {
                print!("[{}]", glyph);
            } else {
                print!(" {} ", glyph);
            }
        }
        println!();
    }
    print!(
        "time {}s | rotations {}",
        session.elapsed_secs(),
        session.rotation_count()
    );
    match session.best() {
        Some(best) => println!(" | best {}s/{} rot", best.time_secs, best.rotations),
        None => println!(" | best --"),
    }
}

/// Box-drawing glyph for an open-port vector [up, right, down, left]
fn glyph(ports: [bool; 4]) -> char {
    match ports {
        [true, false, true, false] => '│',
        [false, true, false, true] => '─',
        [true, true, false, false] => '└',
        [false, true, true, false] => '┌',
        [false, false, true, true] => '┐',
        [true, false, false, true] => '┘',
        [true, true, true, false] => '├',
        [false, true, true, true] => '┬',
        [true, false, true, true] => '┤',
        [true, true, false, true] => '┴',
        [true, true, true, true] => '┼',
        _ => '·',
    }
}
