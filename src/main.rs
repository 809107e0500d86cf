mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, OutputArgs};
use scorecalc::config::{self, OutputFormat};
use scorecalc::core::{Request, SatRequest, UkRequest};
use std::time::Duration;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Sat(args) => run_request(
            Request::Sat(SatRequest {
                reading_writing: args.reading_writing,
                math: args.math,
                math_no_calc: args.no_calc,
                math_calc: args.calc,
                mode: args.mode,
                difficulty: args.difficulty,
            }),
            &args.output,
        ),
        Commands::Lsat(args) => run_request(
            Request::Lsat {
                raw: args.raw,
                what_if: args.what_if,
            },
            &args.output,
        ),
        Commands::Uk(args) => run_request(
            Request::Uk(UkRequest {
                specs: args.modules,
                file: args.file,
            }),
            &args.output,
        ),
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!(
                    "warning: --config is ignored by `scorecalc init`; writing ./{}",
                    config::CONFIG_FILE_NAME
                );
            }

            let path = std::env::current_dir()?.join(config::CONFIG_FILE_NAME);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn run_request(request: Request, output: &OutputArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(output.config.as_deref(), &cwd)?;
    if let Some(source) = &loaded.source {
        log::debug!("using config {}", source.display());
    }
    let cfg = &loaded.config;

    if !cfg.general.color {
        colored::control::set_override(false);
    }

    let outcome = scorecalc::core::run(&request, cfg)?;
    let format = output.resolve_format(cfg.general.format);

    if format == OutputFormat::Human && cfg.general.processing_delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(cfg.general.processing_delay_ms));
    }
    scorecalc::core::render(&outcome, format)?;

    Ok(outcome.exit_code())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
