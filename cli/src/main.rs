//! Command-line front end for the adder library.
//!
//! # Usage
//!
//! ```bash
//! # Add two integers (wraps on overflow)
//! adder 2 2
//!
//! # Fail with an error instead of wrapping
//! adder --checked 9223372036854775807 1
//! ```

use adder::{checked_add, Adder, Calculator};
use anyhow::{bail, Result};
use clap::Parser;
use log::debug;

/// Adds two integers and prints the sum
#[derive(Parser)]
#[command(name = "adder")]
#[command(version = "0.1.0")]
#[command(about = "Adds two integers and prints the sum")]
struct Cli {
    /// First operand
    first: i64,

    /// Second operand
    second: i64,

    /// Report overflow as an error instead of wrapping
    #[arg(long)]
    checked: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<i64> {
    if cli.checked {
        match checked_add(cli.first, cli.second) {
            Some(sum) => Ok(sum),
            None => bail!("{} + {} overflows i64", cli.first, cli.second),
        }
    } else {
        let calc: &dyn Adder = &Calculator;
        Ok(calc.add(cli.first, cli.second))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let sum = run(&cli)?;
    debug!("{} + {} = {}", cli.first, cli.second, sum);
    println!("{sum}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_operands() {
        let cli = parse(&["adder", "--", "-1", "1"]);
        assert_eq!((cli.first, cli.second), (-1, 1));
        assert_eq!(run(&cli).unwrap(), 0);
    }

    #[test]
    fn wraps_by_default() {
        let cli = parse(&["adder", "9223372036854775807", "1"]);
        assert_eq!(run(&cli).unwrap(), i64::MIN);
    }

    #[test]
    fn checked_mode_errors_on_overflow() {
        let cli = parse(&["adder", "--checked", "9223372036854775807", "1"]);
        assert!(run(&cli).is_err());
    }
}
