use std::path::PathBuf;

use clap::Parser;
use doorlang::{
    interpreter::{lexer::tokenize, source::Source},
    parse_source, run,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// doorlang runs programs written in a small imperative scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token stream instead of running the program.
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree instead of running the program.
    #[arg(long, conflicts_with = "tokens")]
    ast: bool,

    /// Path to the program's source file.
    path: PathBuf,
}

/// Installs a stderr log subscriber when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let source = Source::from_path(&args.path).unwrap_or_else(|_| {
                                                   eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                             args.path.display());
                                                   std::process::exit(1);
                                               });

    if args.tokens {
        let lexed = tokenize(&source);
        for error in &lexed.errors {
            eprintln!("{error}");
        }
        for (token, line) in &lexed.tokens {
            println!("{line}\t{token:?}");
        }
        return;
    }

    if args.ast {
        match parse_source(&source) {
            Ok(program) => println!("{program:#?}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = run(&source) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
