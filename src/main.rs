#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use flotilla::{
    announce_events, coord_label, init_logging, parse_coord, parse_facing, print_board, Facing,
    Game, GameError, Side, SHIP_KINDS,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Write};

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
    /// Play a battle against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play both seats.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run a batch of automatic games and summarize shot counts.
    Stats {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long, help = "Base seed; game i runs with seed + i")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed } => play(make_rng(seed)),
        Commands::Auto { seed } => auto(make_rng(seed)),
        Commands::Stats { games, seed } => stats(games, seed),
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn play(mut rng: SmallRng) -> anyhow::Result<()> {
    let mut game = Game::new();
    game.player_mut(Side::Enemy)
        .auto_deploy(&mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;

    println!("Deploy your fleet, e.g. `B4 e` places the head at B4 running east.");
    println!("Press enter to auto-deploy the rest, or `undo B4` to pick a ship back up.");
    while !game.player(Side::User).is_fleet_deployed() {
        print_board(game.player(Side::User).board(), true);
        let Some(kind) = SHIP_KINDS
            .iter()
            .copied()
            .find(|&k| !game.player(Side::User).board().ship(k).is_deployed())
        else {
            break;
        };
        print!("Place {} (size {}): ", kind, kind.size());
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        let line = line.trim();
        if line.is_empty() {
            game.player_mut(Side::User)
                .auto_deploy(&mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            continue;
        }
        if let Some(rest) = line.strip_prefix("undo") {
            match parse_coord(rest).and_then(|c| game.player_mut(Side::User).undeploy_at(c)) {
                Some(kind) => println!("{} picked back up", kind),
                None => println!("No ship there"),
            }
            continue;
        }
        let mut parts = line.split_whitespace();
        let head = parts.next().and_then(parse_coord);
        let facing = parts.next().and_then(parse_facing).unwrap_or(Facing::East);
        match head {
            Some(head) => {
                if let Err(e) = game.player_mut(Side::User).try_deploy(kind, head, facing) {
                    println!("Error: {}", e);
                }
            }
            None => println!("Invalid input"),
        }
    }
    game.drain_events(Side::User).for_each(drop);

    game.start_battle(&mut rng);
    println!("\nBattle stations. Fire with a coordinate like D5.");
    let winner = loop {
        println!("\nEnemy waters:");
        print_board(game.player(Side::Enemy).board(), false);
        println!("Your fleet:");
        print_board(game.player(Side::User).board(), true);

        let outcome = loop {
            print!("Target: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            let Some(coord) = parse_coord(line.trim()) else {
                println!("Invalid coordinate");
                continue;
            };
            match game.attack(Side::User, coord, &mut rng) {
                Ok(outcome) => break outcome,
                Err(e) => println!("Error: {}", e),
            }
        };
        if let Some(kind) = outcome.sunk() {
            println!("You sank the enemy {}!", kind);
        } else if outcome.is_hit() {
            println!("A hit!");
        } else {
            println!("You missed.");
        }
        announce_events("Enemy", game.drain_events(Side::Enemy));
        if let Some(winner) = game.victor() {
            break winner;
        }

        let (target, outcome) = game
            .auto_attack(Side::Enemy, &mut rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        if let Some(kind) = outcome.sunk() {
            println!("Enemy fire at {} sank your {}!", coord_label(target), kind);
        } else if outcome.is_hit() {
            println!("Enemy fire at {} struck your fleet.", coord_label(target));
        } else {
            println!("Enemy fire at {} missed.", coord_label(target));
        }
        announce_events("Your", game.drain_events(Side::User));
        if let Some(winner) = game.victor() {
            break winner;
        }
    };

    println!("\nFinal boards.");
    println!("Enemy fleet:");
    print_board(game.player(Side::Enemy).board(), true);
    println!("Your fleet:");
    print_board(game.player(Side::User).board(), true);
    match winner {
        Side::User => println!("\nVICTORY! You sank the entire enemy fleet."),
        Side::Enemy => println!("\nDEFEAT. All your ships have been destroyed."),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn auto(mut rng: SmallRng) -> anyhow::Result<()> {
    let mut game = Game::new();
    game.player_mut(Side::User)
        .auto_deploy(&mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    game.player_mut(Side::Enemy)
        .auto_deploy(&mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    game.start_battle(&mut rng);

    let mut side = Side::User;
    let mut shots = 0u32;
    let winner = loop {
        let (target, outcome) = game
            .auto_attack(side, &mut rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        shots += 1;
        println!(
            "{} fires at {} -> {:?}",
            side_name(side),
            coord_label(target),
            outcome
        );
        game.drain_events(side.opponent()).for_each(drop);
        if let Some(winner) = game.victor() {
            break winner;
        }
        side = side.opponent();
    };

    println!("\n{} wins after {} shots overall.", side_name(winner), shots);
    println!("\n{} board:", side_name(Side::User));
    print_board(game.player(Side::User).board(), true);
    println!("\n{} board:", side_name(Side::Enemy));
    print_board(game.player(Side::Enemy).board(), true);
    Ok(())
}

#[cfg(feature = "std")]
fn stats(games: u32, seed: Option<u64>) -> anyhow::Result<()> {
    if games == 0 {
        return Err(anyhow::anyhow!("need at least one game"));
    }
    let mut min = u32::MAX;
    let mut max = 0u32;
    let mut total = 0u64;
    let mut first_seat_wins = 0u32;
    for i in 0..games {
        let mut rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s.wrapping_add(i as u64)),
            None => make_rng(None),
        };
        let (winner, shots) = run_one(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
        min = min.min(shots);
        max = max.max(shots);
        total += shots as u64;
        if winner == Side::User {
            first_seat_wins += 1;
        }
    }
    println!("{} games", games);
    println!(
        "shots per game: min {}, avg {:.1}, max {}",
        min,
        total as f64 / games as f64,
        max
    );
    println!(
        "first seat won {} ({:.1}%)",
        first_seat_wins,
        100.0 * first_seat_wins as f64 / games as f64
    );
    Ok(())
}

#[cfg(feature = "std")]
fn run_one(rng: &mut SmallRng) -> Result<(Side, u32), GameError> {
    let mut game = Game::new();
    game.player_mut(Side::User).auto_deploy(rng)?;
    game.player_mut(Side::Enemy).auto_deploy(rng)?;
    game.start_battle(rng);
    let mut side = Side::User;
    let mut shots = 0u32;
    loop {
        game.auto_attack(side, rng)?;
        shots += 1;
        game.drain_events(side.opponent()).for_each(drop);
        if let Some(winner) = game.victor() {
            return Ok((winner, shots));
        }
        side = side.opponent();
    }
}

#[cfg(feature = "std")]
fn side_name(side: Side) -> &'static str {
    match side {
        Side::User => "Player 1",
        Side::Enemy => "Player 2",
    }
}
