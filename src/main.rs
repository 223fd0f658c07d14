#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleships::{
    countdown, init_logging, place_fleet, print_boards, print_round, prompt_attack, Board,
    GameEngine, RoundOutcome,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Place your ships randomly instead of interactively")]
        auto_place: bool,
        #[arg(long, help = "Reveal the computer's ships (debugging aid)")]
        reveal: bool,
        #[arg(long, help = "Skip the pre-game countdown")]
        skip_countdown: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            auto_place,
            reveal,
            skip_countdown,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            let mut computer_board = Board::new();
            computer_board
                .place_all_random(&mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;

            let mut player_board = Board::new();
            if auto_place {
                player_board
                    .place_all_random(&mut rng)
                    .map_err(|e| anyhow::anyhow!(e))?;
                println!("Your ships have been placed randomly.");
            } else {
                place_fleet(&mut rng, &mut player_board).map_err(|e| anyhow::anyhow!(e))?;
            }

            if !skip_countdown {
                countdown();
            }

            let mut engine = GameEngine::new(player_board, computer_board);
            loop {
                print_boards(engine.player_board(), engine.computer_board(), reveal);
                let (r, c) = prompt_attack(engine.computer_board());
                let report = engine.attack(r, c).map_err(|e| anyhow::anyhow!(e))?;
                print_round(&report);

                match report.outcome {
                    RoundOutcome::Continue => {}
                    RoundOutcome::PlayerWins => {
                        print_boards(engine.player_board(), engine.computer_board(), true);
                        println!("\n🎉 YOU WIN 🎉");
                        println!("You have sunk all enemy ships!");
                        break;
                    }
                    RoundOutcome::ComputerWins => {
                        print_boards(engine.player_board(), engine.computer_board(), true);
                        println!("\n💀 YOU LOSE 💀");
                        println!("All your ships have been destroyed.");
                        break;
                    }
                }
            }
        }
    }
    Ok(())
}
