//! CLI wrapper that plays the annotated notes script.
//!
//! Usage:
//!   gist                # Run the notes in sloppy mode
//!   gist --strict       # Run the notes in strict mode

use gist::notes;
use gist::runner::api::JsRunner;
use gist::runner::ds::realm::EvalMode;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let eval_mode = match args.len() {
        1 => EvalMode::Sloppy,
        2 => {
            let arg = &args[1];
            if arg == "-h" || arg == "--help" {
                print_usage();
                process::exit(0);
            }
            if arg == "--strict" {
                EvalMode::Strict
            } else {
                print_usage();
                process::exit(1);
            }
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    };

    let mut runner = JsRunner::new(eval_mode);
    if let Err(e) = notes::run_all(&mut runner) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("gist - annotated notes runtime");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  gist                Run the notes (non-strict evaluation mode)");
    eprintln!("  gist --strict       Run the notes in strict evaluation mode");
}
