//! Live modular exponentiation calculator.
//!
//! `powmod eval` runs a single pass; `powmod session` keeps the three
//! parameters alive and recomputes after every `<name>=<text>` line on stdin.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use powmod::core::types::Inputs;
use powmod::exit_codes;
use powmod::io::config::{DEFAULT_CONFIG_PATH, PowmodConfig, load_config, write_config};
use powmod::io::render::{OutputFormat, render};
use powmod::logging;
use powmod::pipeline::UpdatePipeline;
use powmod::session::run_session;

#[derive(Parser)]
#[command(
    name = "powmod",
    version,
    about = "Live modular exponentiation over arbitrary-precision integers"
)]
struct Cli {
    /// Path to the TOML config file (missing file means defaults).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one pass over the given raw texts and print the result.
    Eval {
        #[arg(long, allow_hyphen_values = true)]
        base: String,
        #[arg(long, allow_hyphen_values = true)]
        exponent: String,
        #[arg(long, visible_alias = "mod", allow_hyphen_values = true)]
        modulus: String,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Read `<name>=<text>` lines from stdin and print the result after each.
    Session {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    // clap exits with 2 on usage errors, which is UNAVAILABLE here.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Eval {
            base,
            exponent,
            modulus,
            json,
        } => {
            let cfg = load_config(&cli.config)?;
            let format = output_format(&cfg, json);
            cmd_eval(&cfg, &Inputs::new(base, exponent, modulus), format)
        }
        Command::Session { json } => {
            let cfg = load_config(&cli.config)?;
            let format = output_format(&cfg, json);
            cmd_session(&cfg, format)
        }
        Command::Init { force } => cmd_init(&cli.config, force),
    }
}

fn output_format(cfg: &PowmodConfig, json: bool) -> OutputFormat {
    if json { OutputFormat::Json } else { cfg.output }
}

fn cmd_eval(cfg: &PowmodConfig, inputs: &Inputs, format: OutputFormat) -> Result<i32> {
    let mut pipeline = UpdatePipeline::new(cfg.engine);
    let computed = pipeline.recompute(inputs).is_computed();
    println!("{}", render(&pipeline.snapshot(), format)?);
    debug!(engine = cfg.engine.name(), computed, "eval finished");
    Ok(if computed {
        exit_codes::OK
    } else {
        exit_codes::UNAVAILABLE
    })
}

fn cmd_session(cfg: &PowmodConfig, format: OutputFormat) -> Result<i32> {
    info!(engine = cfg.engine.name(), "starting session");
    let mut pipeline = UpdatePipeline::new(cfg.engine);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        &mut pipeline,
        cfg.initial.inputs(),
        stdin.lock(),
        stdout.lock(),
        format,
    )?;
    Ok(exit_codes::OK)
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if !force && path.exists() {
        println!("init: kept existing {}", path.display());
        return Ok(exit_codes::OK);
    }
    write_config(path, &PowmodConfig::default())?;
    println!("init: wrote {}", path.display());
    Ok(exit_codes::OK)
}
