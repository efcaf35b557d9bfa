#![deny(warnings)]

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use mahjong_app::logging;
use mahjong_app::session::{Advice, GameSession};
use mahjong_core::catalog::TileCatalog;
use mahjong_core::eval;

/// Mahjong reaction advisor: for each revealed tile it enumerates the legal
/// calls, simulates them one step ahead, and recommends the best reaction.
#[derive(Debug, Parser)]
#[command(
    name = "mjadvisor",
    author,
    version,
    about = "Mahjong call/discard advisor"
)]
struct Cli {
    /// Path to a custom tile-code resource (JSON mapping code -> [suit, rank]).
    #[arg(long, value_name = "FILE", global = true)]
    tiles: Option<PathBuf>,

    /// Emit per-decision telemetry on stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Advise a single decision point and exit.
    Advise {
        /// The advised player's concealed hand as space-separated codes.
        #[arg(long, value_name = "CODES")]
        hand: String,

        /// Tile the advised player just drew.
        #[arg(long, value_name = "CODE", conflicts_with_all = ["discard", "from"])]
        draw: Option<String>,

        /// Tile an opponent just discarded.
        #[arg(long, value_name = "CODE", requires = "from")]
        discard: Option<String>,

        /// Seat index (1-3, clockwise from the advised player) of the
        /// discarding opponent.
        #[arg(long, value_name = "SEAT", requires = "discard")]
        from: Option<usize>,

        /// Emit the advice as JSON instead of prose.
        #[arg(long)]
        json: bool,
    },
    /// Run an interactive advising session on stdin.
    Play,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let catalog = match &cli.tiles {
        Some(path) => TileCatalog::load(path)
            .with_context(|| format!("loading tile resource {}", path.display()))?,
        None => TileCatalog::standard(),
    };

    match cli.command {
        Command::Advise {
            hand,
            draw,
            discard,
            from,
            json,
        } => advise(catalog, &hand, draw, discard, from, json),
        Command::Play => play(catalog),
    }
}

fn advise(
    catalog: TileCatalog,
    hand: &str,
    draw: Option<String>,
    discard: Option<String>,
    from: Option<usize>,
    json: bool,
) -> Result<()> {
    let codes: Vec<&str> = hand.split_whitespace().collect();
    if codes.is_empty() {
        bail!("--hand must list at least one tile code");
    }

    let mut session = GameSession::new(catalog);
    session.deal(&codes)?;

    let advice = match (draw, discard, from) {
        (Some(code), None, None) => session.self_draw(&code)?,
        (None, Some(code), Some(seat)) => session.opponent_discard(seat, &code)?,
        _ => bail!("provide either --draw CODE or --discard CODE --from SEAT"),
    };

    if json {
        let hand = session.table().viewer_player().hand();
        let value = serde_json::json!({
            "action": advice.action,
            "follow_up": advice.follow_up,
            "won": session.finished(),
            "distance_to_win": eval::distance_to_win(hand),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        report(&session, advice);
    }
    Ok(())
}

fn report(session: &GameSession, advice: Advice) {
    println!("advice: {}", session.describe(advice.action));
    if let Some(follow_up) = advice.follow_up {
        println!("then: {}", session.describe(follow_up));
    }
    if session.finished() {
        println!("the hand is complete");
        return;
    }

    let hand = session.table().viewer_player().hand();
    let distance = eval::distance_to_win(hand);
    println!("distance to win: {distance}");
    if distance == 0 {
        let waits: Vec<String> = eval::waiting_tiles(hand)
            .into_iter()
            .map(|tile| {
                session
                    .catalog()
                    .code(tile)
                    .map(str::to_string)
                    .unwrap_or_else(|_| tile.to_string())
            })
            .collect();
        if !waits.is_empty() {
            println!("waiting on: {}", waits.join(" "));
        }
    }
}

fn play(catalog: TileCatalog) -> Result<()> {
    println!("mjadvisor interactive session");
    println!("commands:");
    println!("  hand <codes...>     seed the advised player's hand");
    println!("  draw [code]         the advised player draws a tile (random if omitted)");
    println!("  disc <seat> <code>  an opponent (1-3) discards a tile");
    println!("  save <file>         snapshot the table as JSON");
    println!("  load <file>         restore a table snapshot");
    println!("  show                print the table");
    println!("  quit                leave");

    let mut session = GameSession::new(catalog);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush().ok();
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading stdin")?;
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            continue;
        };
        let rest: Vec<&str> = parts.collect();

        let outcome = match verb {
            "hand" => session.deal(&rest).map(|()| None),
            "draw" => match rest.as_slice() {
                [code] => session.self_draw(code).map(Some),
                [] => session
                    .random_self_draw(&mut rand::thread_rng())
                    .map(|(tile, advice)| {
                        println!("drew {tile}");
                        Some(advice)
                    }),
                _ => {
                    eprintln!("usage: draw [code]");
                    continue;
                }
            },
            "disc" => match rest.as_slice() {
                [seat, code] => match seat.parse::<usize>() {
                    Ok(seat) => session.opponent_discard(seat, code).map(Some),
                    Err(_) => {
                        eprintln!("usage: disc <seat 1-3> <code>");
                        continue;
                    }
                },
                _ => {
                    eprintln!("usage: disc <seat 1-3> <code>");
                    continue;
                }
            },
            "save" => match rest.as_slice() {
                [path] => session.save(Path::new(path)).map(|()| None),
                _ => {
                    eprintln!("usage: save <file>");
                    continue;
                }
            },
            "load" => match rest.as_slice() {
                [path] => session.load(Path::new(path)).map(|()| None),
                _ => {
                    eprintln!("usage: load <file>");
                    continue;
                }
            },
            "show" => {
                println!("{}", session.render());
                continue;
            }
            "quit" | "exit" => break,
            _ => {
                eprintln!("unknown command '{verb}'");
                continue;
            }
        };

        match outcome {
            Ok(Some(advice)) => {
                report(&session, advice);
                if session.finished() {
                    break;
                }
            }
            Ok(None) => println!("{}", session.render()),
            Err(err) => eprintln!("error: {err:#}"),
        }
    }

    Ok(())
}
