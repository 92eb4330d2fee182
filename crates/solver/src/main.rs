use std::env;
use std::io::{self, BufRead, Write};
use std::process;
use std::time::Duration;

use chess_core::SearchLimits;
use solver::{SolveReport, create_engine, solve};

/// Default search depth when no budget is given.
const DEFAULT_DEPTH: u8 = 5;

fn print_usage() {
    eprintln!("solver - single-position chess solver (FEN in, move out)");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  solver -i <FEN> [options]     answer one position and exit");
    eprintln!("  solver --stdin [options]      answer one FEN per input line until EOF");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -i, --fen <FEN>       position to solve");
    eprintln!("  -d, --depth <N>       maximum search depth in plies (default {DEFAULT_DEPTH})");
    eprintln!("  -t, --movetime <MS>   time budget in milliseconds");
    eprintln!("  -e, --engine <SPEC>   classical | random | external:<path> (default classical)");
    eprintln!("      --json            print a JSON report instead of the bare move");
    eprintln!("      --stdin           line-per-request mode");
    eprintln!();
    eprintln!("Output is exactly one line per request: the move in coordinate");
    eprintln!("notation (e.g. e1e8), or (none) when the position is terminal.");
}

struct Args {
    fen: Option<String>,
    stdin_mode: bool,
    depth: u8,
    movetime: Option<u64>,
    engine: String,
    json: bool,
}

fn parse_args(argv: &[String]) -> Result<Args, String> {
    let mut args = Args {
        fen: None,
        stdin_mode: false,
        depth: DEFAULT_DEPTH,
        movetime: None,
        engine: "classical".to_string(),
        json: false,
    };

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "-i" | "--fen" => {
                i += 1;
                let fen = argv.get(i).ok_or("missing value for --fen")?;
                args.fen = Some(fen.clone());
            }
            "-d" | "--depth" => {
                i += 1;
                let raw = argv.get(i).ok_or("missing value for --depth")?;
                args.depth = raw
                    .parse()
                    .map_err(|_| format!("invalid depth '{raw}'"))?;
                if args.depth == 0 {
                    return Err("depth must be at least 1".to_string());
                }
            }
            "-t" | "--movetime" => {
                i += 1;
                let raw = argv.get(i).ok_or("missing value for --movetime")?;
                let ms: u64 = raw
                    .parse()
                    .map_err(|_| format!("invalid movetime '{raw}'"))?;
                args.movetime = Some(ms);
            }
            "-e" | "--engine" => {
                i += 1;
                let spec = argv.get(i).ok_or("missing value for --engine")?;
                args.engine = spec.clone();
            }
            "--json" => args.json = true,
            "--stdin" => args.stdin_mode = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
        i += 1;
    }

    if args.fen.is_none() && !args.stdin_mode {
        return Err("either -i <FEN> or --stdin is required".to_string());
    }
    if args.fen.is_some() && args.stdin_mode {
        return Err("-i and --stdin are mutually exclusive".to_string());
    }

    Ok(args)
}

fn build_limits(args: &Args) -> SearchLimits {
    match args.movetime {
        Some(ms) => SearchLimits::depth_and_time(args.depth, Duration::from_millis(ms)),
        None => SearchLimits::depth(args.depth),
    }
}

fn output_line(report: &SolveReport, json: bool) -> Result<String, serde_json::Error> {
    if json {
        report.to_json()
    } else {
        Ok(report.move_line().to_string())
    }
}

fn main() {
    let argv: Vec<String> = env::args().skip(1).collect();

    if argv.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return;
    }

    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("error: {msg}");
            print_usage();
            process::exit(2);
        }
    };

    let mut engine = match create_engine(&args.engine) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    };

    if args.stdin_mode {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            let request = line.trim();
            if request.is_empty() {
                continue;
            }

            match solve(engine.as_mut(), request, build_limits(&args)) {
                Ok(report) => match output_line(&report, args.json) {
                    Ok(out) => {
                        writeln!(stdout, "{out}").ok();
                        stdout.flush().ok();
                    }
                    Err(e) => {
                        eprintln!("error: {e}");
                        process::exit(1);
                    }
                },
                Err(e) => {
                    stdout.flush().ok();
                    eprintln!("error: {e}");
                    process::exit(e.exit_code());
                }
            }
        }
        return;
    }

    let fen = args.fen.as_deref().unwrap_or_default();
    match solve(engine.as_mut(), fen, build_limits(&args)) {
        Ok(report) => {
            eprintln!("{}", report.info_line());
            match output_line(&report, args.json) {
                Ok(out) => println!("{out}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(e.exit_code());
        }
    }
}
