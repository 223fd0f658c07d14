#![cfg(feature = "std")]

//! Terminal front end: coordinate entry, board rendering, placement phase.
//!
//! Resolved cells get distinct glyphs so hits, sinks and misses stay
//! readable at a glance.

use std::io::{self, Write};
use std::string::String;
use std::thread;
use std::time::Duration;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{AttackResult, BoardError, Observation};
use crate::config::{BOARD_SIZE, NUM_SHIPS, SHIPS};
use crate::game::RoundReport;
use crate::ship::Orientation;

/// Render a coordinate as the column-letter/row-number form players type.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse an `A5`-style coordinate into (row, col).
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1, col))
}

fn observation_glyph(observation: Observation) -> char {
    match observation {
        Observation::Unknown => '.',
        Observation::Empty => 'o',
        Observation::Hit => 'X',
        Observation::Destroyed => '#',
    }
}

fn print_header() {
    print!("    ║  ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        print!(" {}", ch);
    }
    println!(" ║");
}

/// Print a board. With `reveal`, unattacked ship cells show as `S`; without
/// it only the attacker's observations are drawn.
pub fn print_board(board: &Board, reveal: bool) {
    println!("    ╔═══════════════════════╗");
    print_header();
    println!("    ╠═══════════════════════╣");
    for r in 0..BOARD_SIZE {
        print!("    ║ {:2}", r + 1);
        for c in 0..BOARD_SIZE {
            let observation = board.observation(r, c).unwrap_or(Observation::Unknown);
            let ch = if observation == Observation::Unknown
                && reveal
                && board.ship_map().get(r, c).unwrap_or(false)
            {
                'S'
            } else {
                observation_glyph(observation)
            };
            print!(" {}", ch);
        }
        println!(" ║");
    }
    println!("    ╚═══════════════════════╝");
    if reveal {
        println!("    Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water");
    } else {
        println!("    Legend: X=Hit  #=Sunk  o=Miss  .=Unknown");
    }
}

/// Display the computer's board (as known) above the player's own board.
pub fn print_boards(player_board: &Board, computer_board: &Board, reveal_computer: bool) {
    println!("Computer board:");
    print_board(computer_board, reveal_computer);
    println!("\nYour board:");
    print_board(player_board, true);
    println!(
        "\n    Ships afloat - you: {}, computer: {}",
        player_board.ships_remaining(),
        computer_board.ships_remaining()
    );
}

/// Interactive placement of the whole fleet; ENTER places the current ship
/// randomly.
pub fn place_fleet(rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
    println!("\n════════════════════════════════════════════════════════════");
    println!("                    SHIP PLACEMENT PHASE");
    println!("════════════════════════════════════════════════════════════");
    println!("\nInstructions:");
    println!("  • Enter coordinates and orientation (e.g., A5 H or A5 V)");
    println!("  • H = Horizontal, V = Vertical");
    println!("  • Valid columns: A-J, Valid rows: 1-10");
    println!("  • Press ENTER for random placement\n");

    for i in 0..NUM_SHIPS {
        let def = SHIPS[i];
        loop {
            print_board(board, true);
            println!(
                "\nShip {}/{}: {} (length {})",
                i + 1,
                NUM_SHIPS,
                def.name(),
                def.length()
            );
            print!("Enter placement (or ENTER for random): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap();
            let line = line.trim();

            if line.is_empty() {
                let (r, c, o) = board.random_placement(rng, i)?;
                board.place(i, r, c, o)?;
                println!("✓ {} randomly placed at {}", def.name(), coord_to_string(r, c));
                break;
            }

            let mut parts = line.split_whitespace();
            let coord_str = match parts.next() {
                Some(s) => s,
                None => continue,
            };
            let (r, c) = match parse_coord(coord_str) {
                Ok(coord) => coord,
                Err(e) => {
                    println!("✗ Error: {}", e);
                    continue;
                }
            };
            let orient_ch = parts
                .next()
                .and_then(|s| s.chars().next())
                .unwrap_or('H')
                .to_ascii_uppercase();
            let o = match orient_ch {
                'H' => Orientation::Horizontal,
                'V' => Orientation::Vertical,
                other => {
                    println!("✗ Error: Invalid orientation '{}' - use H or V", other);
                    continue;
                }
            };

            match board.place(i, r, c, o) {
                Ok(()) => {
                    println!("✓ {} placed at {}", def.name(), coord_to_string(r, c));
                    break;
                }
                Err(e) => {
                    println!("✗ Error: {}", e);
                    println!("   Hint: Make sure the ship fits and doesn't overlap with others.");
                }
            }
        }
    }
    println!("\n✓ All ships placed! Ready to begin battle.\n");
    Ok(())
}

/// Prompt for the next attack until an unattacked coordinate is entered.
pub fn prompt_attack(computer_board: &Board) -> (usize, usize) {
    loop {
        print!("\nEnter target coordinates (e.g., A5): ");
        io::stdout().flush().unwrap();
        let mut line = String::new();
        io::stdin().read_line(&mut line).unwrap();
        let line = line.trim();

        match parse_coord(line) {
            Ok((r, c)) => {
                match computer_board.observation(r, c) {
                    Ok(Observation::Unknown) => return (r, c),
                    Ok(_) => println!("✗ You already attacked {}! Choose another target.", line),
                    Err(e) => println!("✗ {}", e),
                }
            }
            Err(e) => {
                println!("✗ Invalid coordinate: {}", e);
                println!("   Example: A5, B10, J1");
            }
        }
    }
}

/// Cosmetic pre-game countdown, sequenced strictly before the attack phase.
pub fn countdown() {
    for i in (0..=3).rev() {
        thread::sleep(Duration::from_millis(1200));
        if i > 0 {
            println!("        {}", i);
        } else {
            println!("        GO!");
        }
    }
}

/// Print what happened in one resolved round.
pub fn print_round(report: &RoundReport) {
    match report.player_shot {
        AttackResult::Miss => println!("\n💧 Miss. Your shot hit only water."),
        AttackResult::Hit => println!("\n🎯 HIT! Your shot struck an enemy ship!"),
        AttackResult::Sunk(name) => println!("\n💥 SUNK! You destroyed the computer's {}!", name),
    }
    if let Some(((r, c), result)) = report.computer_shot {
        match result {
            AttackResult::Miss => {
                println!("✓ Computer missed at {}", coord_to_string(r, c));
            }
            AttackResult::Hit => {
                println!("⚠️  ENEMY HIT! The computer struck your ship at {}", coord_to_string(r, c));
            }
            AttackResult::Sunk(name) => {
                println!(
                    "💀 SHIP LOST! The computer destroyed your {} at {}",
                    name,
                    coord_to_string(r, c)
                );
            }
        }
    }
}
