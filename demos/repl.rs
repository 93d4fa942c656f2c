//! Dotted-pair REPL.
//!
//! Interactive:     `RUST_LOG=debug cargo run --example repl`.
//! Evaluate a file: `cargo run --example repl -- exprs.txt`.
//!
//! Expressions may span lines; whitespace is dropped before evaluation.

use clap::{App, Arg};
use log::{info, LevelFilter};
use std::fs;

use dotlisp::interpreter::{Interpreter, Ret};
use dotlisp::options::{AtomPolicyKind, EvalOptions};
use dotlisp::printer::print_value;
use dotlisp::stream::cli_stream::CliStream;
use dotlisp::stream::read_exprs;


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = App::new("dotlisp REPL")
        .version("0.1")
        .about("Evaluates CAR/CDR/CONS/EQ/COND over dotted pairs")
        .arg(
            Arg::new("file")
                .index(1)
                .help("Evaluate every expression in this file instead of prompting"),
        )
        .arg(
            Arg::new("paper")
                .short('p')
                .long("paper")
                .help("Only accept atoms of capital letters and digits"),
        )
        .arg(
            Arg::new("separator")
                .short('s')
                .long("separator")
                .takes_value(true)
                .help("Pair separator character (default '.')"),
        )
        .get_matches();

    let mut options = EvalOptions::default();
    if matches.is_present("paper") {
        options = options.with_atoms(AtomPolicyKind::Paper);
    }
    if let Some(s) = matches.value_of("separator") {
        let mut chars = s.chars();
        let separator = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(format!("Separator must be one character, given \"{}\"", s)),
        };
        options = options.with_separator(separator).map_err(|e| e.to_string())?;
    }
    info!("Evaluating with {:?}", options);
    let interpreter = Interpreter::new(options);

    match matches.value_of("file") {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
            let exprs = read_exprs(text).map_err(|e| e.to_string())?;
            for expr in &exprs {
                println!("> {}", expr);
                print_result(&interpreter.eval(expr));
            }
        }
        None => {
            for expr in CliStream::new() {
                print_result(&interpreter.eval(&expr));
            }
        }
    }

    Ok(())
}

fn print_result(result: &Ret) {
    match result {
        Ok(val) => {
            print!("-> ");
            print_value(val);
            println!();
        }
        Err(err) => {
            print_value(&err.reify());
            println!();
            println!(" {}", err);
        }
    };
    println!();
}
