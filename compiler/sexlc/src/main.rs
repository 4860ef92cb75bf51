//! Sexl CLI

use sexlc::commands::{eval_source, lex_source, parse_source, read_source, CliError, RunOptions};

fn main() {
    sexlc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let result = match command {
        "lex" | "parse" | "run" if args.len() < 3 => Err(usage(&format!("{command} <file|->"))),
        "eval" if args.len() < 3 => Err(usage("eval <expr>")),
        "lex" => read_source(&args[2]).and_then(|source| lex_source(&source)),
        "parse" => read_source(&args[2]).and_then(|source| parse_source(&source)),
        "run" => RunOptions::parse(&args[3..]).and_then(|options| {
            let source = read_source(&args[2])?;
            eval_source(&source, &options)
        }),
        "eval" => RunOptions::parse(&args[3..]).and_then(|options| eval_source(&args[2], &options)),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("sexl {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => Err(CliError::Usage(format!("unknown command: {command}"))),
    };

    match result {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn usage(form: &str) -> CliError {
    CliError::Usage(format!("missing argument; usage: sexl {form}"))
}

fn print_usage() {
    println!("Sexl expression evaluator");
    println!();
    println!("Usage: sexl <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file|->         Tokenize and print one token per line");
    println!("  parse <file|->       Parse and print the canonical form");
    println!("  run <file|->         Evaluate a file (`-` reads stdin)");
    println!("  eval <expr>          Evaluate an inline expression");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run/eval options:");
    println!("  --arg <json>         Append a host argument (read by getArg)");
    println!("  --json               Print the result as JSON");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=<filter>    Enable tracing output on stderr");
    println!("  SEXL_LOG_TREE=1      Render tracing output as a span tree");
    println!();
    println!("Examples:");
    println!("  sexl eval '(concat, \"Hello, \", (getArg, 0))' --arg '\"world\"'");
    println!("  sexl run greeting.sexl --arg 42 --json");
}
