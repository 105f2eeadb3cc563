/// Interactive loop: collect lines until a blank one, then check them as one input.

use std::io::{self, BufRead, Write};
use forscan::{check, Config};
use anyhow::Result;

use crate::print_diagnostics;

pub fn run_repl(config: &Config) -> Result<()> {
    println!("forscan REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Enter a for loop, then an empty line to check it. Use 'exit' or Ctrl-D to quit.\n");

    let stdin = io::stdin();
    let mut lines = String::new();

    loop {
        if lines.is_empty() {
            eprint!(">>> ");
        } else {
            eprint!("... ");
        }
        io::stderr().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            eprintln!();
            if !lines.is_empty() {
                eval_repl_input(config, &lines);
            }
            break;
        }

        let trimmed = line.trim();

        if lines.is_empty() && (trimmed == "exit" || trimmed == "quit") {
            break;
        }

        if trimmed.is_empty() {
            if !lines.is_empty() {
                eval_repl_input(config, &lines);
                lines.clear();
            }
            continue;
        }

        lines.push_str(&line);
    }

    Ok(())
}

fn eval_repl_input(config: &Config, input: &str) {
    match check(input, config) {
        Ok(report) => {
            print_diagnostics(&report.diagnostics);
            print!("{}", report.to_text(config.show_tokens));
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}
