mod repl;

use std::env;
use std::fs;
use std::io::Read;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use forscan::{check, Config, LexDiagnostic};

const USAGE: &str = "\
Usage: forscan [--json] [--no-tokens] [--max-input N] <file|->
       forscan tokens <file|->   # list tokens only
       forscan repl              # interactive";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

enum Command {
    Check,
    Tokens,
}

/// Returns whether the input was accepted.
fn run() -> Result<bool> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = Config::from_env()?;
    let positional = config.apply_args(&args)?;

    let (command, target) = match positional.as_slice() {
        [cmd] if cmd == "repl" => {
            repl::run_repl(&config)?;
            return Ok(true);
        }
        [cmd, ..] if cmd == "repl" => bail!("repl takes no file\n{}", USAGE),
        [path] => ("check", path.as_str()),
        [cmd, path] => (cmd.as_str(), path.as_str()),
        _ => {
            eprintln!("{}", USAGE);
            bail!("expected a command and a file");
        }
    };

    let command = match command {
        "check" => Command::Check,
        "tokens" => Command::Tokens,
        other => bail!("unknown command '{}'\n{}", other, USAGE),
    };

    let source = read_source(target)?;

    match command {
        Command::Check => {
            let report = check(&source, &config)?;
            print_diagnostics(&report.diagnostics);
            if config.json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report.to_text(config.show_tokens));
            }
            Ok(report.success)
        }
        Command::Tokens => {
            if source.len() > config.max_input_len {
                bail!(forscan::InputTooLong { len: source.len(), limit: config.max_input_len });
            }
            let (tokens, diagnostics) = forscan::tokenize_with_diagnostics(&source);
            print_diagnostics(&diagnostics);
            if config.json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                for t in &tokens {
                    println!("{}", t);
                }
            }
            Ok(true)
        }
    }
}

fn read_source(target: &str) -> Result<String> {
    if target == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("cannot read stdin")?;
        Ok(source)
    } else {
        fs::read_to_string(target).with_context(|| format!("cannot read '{}'", target))
    }
}

pub(crate) fn print_diagnostics(diagnostics: &[LexDiagnostic]) {
    for d in diagnostics {
        eprintln!("{} at line {}", d, d.line);
    }
}
