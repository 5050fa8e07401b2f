use anyhow::{Context, Result};
use clap::Parser;
use keycalc::config::Config;
use keycalc::keypad::{is_quit_command, parse_key_line};
use keycalc::session::Session;
use keycalc::ui::{DisplaySize, render_display, render_keypad};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about = "Keypad-driven four-function calculator")]
struct Cli {
    /// Key lines to apply in order, e.g. `7+3=` or `AC 12 × 3 =`.
    /// Starts an interactive session when omitted.
    keys: Vec<String>,

    /// Print the final engine state as JSON instead of the display.
    #[arg(long)]
    json: bool,

    /// Path to a config file.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log every key press.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    keycalc::logging::init(level)?;

    let mut session = Session::new();

    if cli.keys.is_empty() {
        run_interactive(&mut session, &config, cli.json)
    } else {
        for line in &cli.keys {
            let keys = parse_key_line(line).with_context(|| format!("Invalid keys {:?}", line))?;
            session.press_all(keys);
        }
        if cli.json {
            print_json(&session)
        } else {
            println!("{}", session.display());
            Ok(())
        }
    }
}

fn run_interactive(session: &mut Session, config: &Config, json: bool) -> Result<()> {
    info!("starting interactive session");

    if config.keypad.show_on_start {
        println!("{}\n", render_keypad());
    }
    print_result(session, config, json)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if is_quit_command(&line) {
            break;
        }

        match parse_key_line(&line) {
            Ok(keys) => {
                session.press_all(keys);
                print_result(session, config, json)?;
            }
            Err(err) => {
                warn!(%err, "ignoring input line");
                eprintln!("{}", err);
            }
        }
    }

    Ok(())
}

fn print_result(session: &Session, config: &Config, json: bool) -> Result<()> {
    if json {
        return print_json(session);
    }

    let mut out = io::stdout().lock();
    if config.display.show_size_tier {
        let size = DisplaySize::for_display(session.display());
        writeln!(
            out,
            "{}  ({})",
            render_display(session.state(), config.display.width),
            size.name()
        )?;
    } else {
        writeln!(
            out,
            "{}",
            render_display(session.state(), config.display.width)
        )?;
    }

    Ok(())
}

fn print_json(session: &Session) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer(&mut out, session.state())?;
    writeln!(out)?;
    Ok(())
}
