use std::io::{self, BufRead, Write};

use chess_arbiter::chess_errors::ChessError;
use chess_arbiter::move_generation::game_status::{DrawReason, GameStatus};
use chess_arbiter::session::config::SessionConfig;
use chess_arbiter::session::game_session::{GameSession, TurnOutcome};

const BANNER: &str = "Use long algebraic notation for your moves (e2e4, Ng1f3, Pe4xd5, O-O).\n\
                      Type 'save' to save the game, 'load' to resume the saved one, 'new' to restart.";

fn main() -> Result<(), String> {
    let config = SessionConfig::from_env()?;
    let quiet = config.quiet;
    let mut session = GameSession::new(config);

    if !quiet {
        println!("{BANNER}");
    }
    println!("{}", session.board());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if report_status(session.status()) {
            break;
        }

        print!("{}, enter your move: ", capitalize(&session.board().side_to_move().to_string()));
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            // stdin closed
            break;
        };
        let line = line.map_err(|e| e.to_string())?;

        match session.submit(&line) {
            Ok(TurnOutcome::Saved(path)) => eprintln!("game saved to {}", path.display()),
            Ok(TurnOutcome::Loaded(path)) => {
                eprintln!("game loaded from {}", path.display());
                println!("{}", session.board());
            }
            Ok(TurnOutcome::NewGame) => println!("{}", session.board()),
            Ok(TurnOutcome::Moved { .. }) => {
                if !quiet {
                    println!("{}", session.board());
                }
            }
            Err(ChessError::SaveLoad(e)) => eprintln!("{e}"),
            Err(ChessError::Notation(e)) => println!("Move not valid ({e}), retry\n"),
            Err(ChessError::Move(e)) => println!("Move not possible ({e}), retry\n"),
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}

/// Prints the status line; true when the game is over.
fn report_status(status: GameStatus) -> bool {
    match status {
        GameStatus::Ongoing => false,
        GameStatus::Check(color) => {
            println!("Check on {color}'s king");
            false
        }
        GameStatus::Checkmate { loser } => {
            println!("{} loses by checkmate!", capitalize(&loser.to_string()));
            true
        }
        GameStatus::Draw(reason) => {
            let why = match reason {
                DrawReason::BareKings => "only the kings are left",
                DrawReason::Stalemate => "stalemate",
                DrawReason::NoCaptureLimit => "no capture in the last 50 moves",
            };
            println!("It's a draw: {why}!");
            true
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
