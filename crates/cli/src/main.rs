//! Line-driven driver for a single pattern-matching level.
//!
//! Commands come from stdin or, with `--script`, from a file replayed line
//! by line. Game output goes to stdout, logs to stderr.

mod command;
mod render;

use anyhow::Context;
use cardpattern_core::{EventBus, GameState, RngState};
use cardpattern_data::{load_level_or_default, resume_session, save_snapshot};
use clap::Parser;
use command::{parse_command, Command};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardpattern")]
#[command(about = "Play a card pattern-matching level from the terminal")]
struct Args {
    /// Level definition (JSON). Uses the built-in default level when omitted
    #[arg(long)]
    level: Option<PathBuf>,

    /// Seed for the deck shuffle; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Resume a session written by `save`
    #[arg(long, conflicts_with = "level")]
    resume: Option<PathBuf>,

    /// Replay commands from a file instead of reading stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log);

    let mut state = build_session(&args)?;
    let mut events = EventBus::default();
    if state.hand().is_empty() {
        state.deal_initial_hand(&mut events);
        events.drain().for_each(drop);
    }

    render::print_status(&state);
    render::print_goals(&state);
    render::print_hand(&state);

    match &args.script {
        Some(path) => {
            let body =
                fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            for line in body.lines() {
                println!("> {line}");
                if execute_line(&mut state, &mut events, line) == Flow::Quit {
                    break;
                }
            }
        }
        None => run_interactive(&mut state, &mut events)?,
    }
    Ok(())
}

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn build_session(args: &Args) -> anyhow::Result<GameState> {
    if let Some(path) = &args.resume {
        if args.seed.is_some() {
            warn!("--seed is ignored when resuming a saved session");
        }
        let state = resume_session(path)?;
        info!(path = %path.display(), level = %state.level_name(), "session resumed");
        return Ok(state);
    }
    let level = load_level_or_default(args.level.as_deref())?;
    let rng = match args.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    GameState::new(&level, rng).with_context(|| format!("start level {:?}", level.name))
}

fn run_interactive(state: &mut GameState, events: &mut EventBus) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("[{} moves | score {}] > ", state.moves_remaining(), state.score());
        io::stdout().flush().context("flush stdout")?;
        line.clear();
        if input.read_line(&mut line).context("read stdin")? == 0 {
            println!();
            return Ok(());
        }
        if execute_line(state, events, &line) == Flow::Quit {
            return Ok(());
        }
    }
}

fn execute_line(state: &mut GameState, events: &mut EventBus, line: &str) -> Flow {
    match parse_command(line) {
        Ok(Some(command)) => execute(state, events, command),
        Ok(None) => Flow::Continue,
        Err(err) => {
            println!("error: {err}");
            Flow::Continue
        }
    }
}

fn execute(state: &mut GameState, events: &mut EventBus, command: Command) -> Flow {
    if command.mutates() && state.status().is_terminal() {
        println!("the level is over; save, check status or quit");
        return Flow::Continue;
    }
    match command {
        Command::Help => render::print_help(),
        Command::Hand => render::print_hand(state),
        Command::Goals => render::print_goals(state),
        Command::Status => render::print_status(state),
        Command::Draw(count) => {
            let drawn = if count == 1 {
                state.draw_from_stock(true, events)
            } else {
                state.draw_cards(count, false, events)
            };
            report(drawn, "cannot draw now", state, events);
        }
        Command::Take => {
            let taken = state.draw_from_discard(true, events);
            report(taken, "cannot take from the discard pile", state, events);
        }
        Command::Discard(indices) => {
            let discarded = state.discard_selection(&indices, events);
            report(discarded, "cannot discard that selection", state, events);
        }
        Command::Play { indices, pattern } => {
            let played = match pattern {
                Some(pattern) => state.play_selection_as(&indices, &pattern, events),
                None => state.play_selection(&indices, events).is_some(),
            };
            report(played, "those cards do not form a playable pattern", state, events);
        }
        Command::Detect(indices) => match state.resolve_selection(&indices) {
            Some(cards) => {
                let found = state.catalog().detect_patterns(&cards);
                if found.is_empty() {
                    println!("no pattern");
                }
                for pattern in found {
                    render::print_breakdown(&pattern.score_breakdown(&cards));
                }
            }
            None => println!("error: invalid selection"),
        },
        Command::Hint => render::print_hints(state, &state.hints(5)),
        Command::Tier(tier) => {
            if !state.advance_rule_tier(tier, events) {
                println!("rule tier is already {:?}", state.rule_tier());
            }
            render::drain_events(events);
        }
        Command::Save(path) => match save_snapshot(&path, state) {
            Ok(()) => println!("saved to {}", path.display()),
            Err(err) => println!("error: {err:#}"),
        },
        Command::Quit => return Flow::Quit,
    }
    Flow::Continue
}

fn report(ok: bool, failure: &str, state: &GameState, events: &mut EventBus) {
    if !ok {
        println!("error: {failure}");
        return;
    }
    render::drain_events(events);
    render::print_hand(state);
}
