//! Converts an infix expression into Polish notations and calculates it.
//!
//! Run with: `cargo run --example polish -- "2 + 3 * 4"`
//! Without an argument the expression is read from standard input.
//!
//! Exit codes: 0 when fully calculated, 1 on a malformed expression,
//! 2 when the expression could only be calculated partially.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use polish_rs::config::{Associativity, ParseConfig};
use polish_rs::error::ParseError;
use polish_rs::eval::Step;
use polish_rs::number::format_number;
use polish_rs::parser::parse_with_config;
use polish_rs::report::Report;

#[derive(Parser, Debug)]
#[command(name = "polish")]
#[command(about = "Convert infix expressions to Polish notation and calculate them")]
struct Args {
    /// Expression to convert (read from stdin if omitted)
    expression: Option<String>,

    /// Group operators of equal priority right to left
    #[arg(long)]
    right_assoc: bool,

    /// Maximum depth of the expression tree (capped at 2048)
    #[arg(long, default_value_t = ParseConfig::default().max_depth)]
    max_depth: usize,

    /// Print the expression tree in DOT format
    #[arg(long)]
    dot: bool,

    /// Print every calculation step
    #[arg(long)]
    steps: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn read_expression() -> io::Result<String> {
    print!("input expression: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn print_steps(expression: &str, config: &ParseConfig) -> Result<(), ParseError> {
    let mut tree = parse_with_config(expression, config)?;
    tree.calculate_with(|step| match step {
        Step::Reduced {
            operator,
            left,
            right,
            result,
        } => println!(
            "  {} {} {} = {}",
            format_number(*left),
            operator,
            format_number(*right),
            format_number(*result)
        ),
        Step::Deferred { expression } => println!("  {} (not calculated)", expression),
    });
    Ok(())
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();

    let level = if args.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Warn
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let input = match args.expression {
        Some(expression) => expression,
        None => read_expression()?,
    };
    if input.trim().is_empty() {
        return Ok(ExitCode::from(ParseError::EXIT_CODE as u8));
    }

    let config = ParseConfig {
        associativity: if args.right_assoc {
            Associativity::Right
        } else {
            Associativity::Left
        },
        max_depth: args.max_depth,
    };

    let report = match Report::generate(&input, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::from(ParseError::EXIT_CODE as u8));
        }
    };
    print!("{}", report);

    if args.steps {
        println!("calculation steps:");
        print_steps(&report.expression, &config)?;
    }

    if args.dot {
        let tree = parse_with_config(&report.expression, &config)?;
        print!("{}", tree.to_dot()?);
    }

    Ok(ExitCode::from(report.exit_code() as u8))
}
