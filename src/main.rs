use std::{fs, process::ExitCode};

use clap::Parser;
use serde::Serialize;
use stepcalc::{
    engine::{driver::Engine, expression::Evaluation},
    util::num::format_number,
};

/// stepcalc evaluates arithmetic expressions one parenthesised block at a time.
///
/// Variables are bound with a JSON suffix after the first comma, for example
/// `20*a+(50/44),{"a":6}`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stepcalc to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints every reduction step instead of only the result.
    #[arg(short, long)]
    steps: bool,

    /// Prints the parse outcome and the evaluations as JSON, one per line.
    #[arg(short, long)]
    json: bool,

    contents: String,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let input = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(text) => text.trim().to_string(),
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    let mut engine = Engine::new();
    let outcome = engine.parse(&input);
    if args.json {
        print_json(&outcome);
    }
    if !outcome.success {
        eprintln!("Parser error: {}", outcome.message);
        return ExitCode::FAILURE;
    }

    loop {
        let evaluation = match engine.evaluate_next() {
            Ok(evaluation) => evaluation,
            Err(e) => {
                eprintln!("Evaluation error: {e}");
                return ExitCode::FAILURE;
            },
        };

        report(&args, &evaluation);
        if evaluation.complete {
            return ExitCode::SUCCESS;
        }
    }
}

fn report(args: &Args, evaluation: &Evaluation) {
    if args.json {
        if args.steps || evaluation.complete {
            print_json(evaluation);
        }
    } else if args.steps {
        println!("{:<12} {}", format_number(evaluation.value), evaluation.render());
    } else if evaluation.complete {
        println!("{}", format_number(evaluation.value));
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to serialize output: {e}"),
    }
}
