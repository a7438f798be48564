//! The interactive exercise script.
//!
//! Prompts run in a fixed order, one input line each. The first invalid
//! answer prints a message and stops the whole script; the caller turns
//! that into a failing exit status.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::debug;

use numkit_core::{
    check_dimensions, fibonacci_first, fibonacci_to, prime_factors, tile_cost, Approximator,
    GaussLegendre, Precision, PrimeStream, TaylorSeries, MAX_FIBONACCI_COUNT,
};

use crate::config::Config;

const INVALID_INPUT: &str = "Invalid input";
const WRONG_INPUT: &str = "Wrong input";
const NEGATIVE_DIMENSIONS: &str = "All numbers must be positive";

/// How a script run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Input was rejected; carries the message shown to the user.
    Rejected(&'static str),
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub max_digits: u32,
    pub currency: String,
}

impl Settings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            max_digits: cfg.max_digits(),
            currency: cfg.output.currency.clone(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub struct Script<R, W> {
    input: R,
    output: W,
    settings: Settings,
}

impl<R: BufRead, W: Write> Script<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Run every step in order. I/O failures are errors; bad answers are an
    /// `Outcome::Rejected`.
    pub fn run(&mut self) -> Result<Outcome> {
        let approximators: [&dyn Approximator; 2] = [&GaussLegendre, &TaylorSeries];
        for approximator in approximators {
            let Some(precision) = self.read_precision()? else {
                return self.reject(INVALID_INPUT);
            };
            let value = approximator.approximate(precision);
            writeln!(
                self.output,
                "{} = {}",
                approximator.name(),
                precision.format(value)
            )?;
        }

        let Some(bound) = self.prompt::<i64>("Enter the limit: ")? else {
            return self.reject(INVALID_INPUT);
        };
        writeln!(
            self.output,
            "Fibonacci sequence: {}",
            format_terms(&fibonacci_to(bound))
        )?;

        let Some(count) = self
            .prompt::<usize>("Enter the number of elements: ")?
            .filter(|&c| c <= MAX_FIBONACCI_COUNT)
        else {
            return self.reject(INVALID_INPUT);
        };
        writeln!(
            self.output,
            "Fibonacci sequence: {}",
            format_terms(&fibonacci_first(count)?)
        )?;

        let Some(n) = self
            .prompt::<u64>("Enter a number of at least 2: ")?
            .filter(|&n| n >= 2)
        else {
            return self.reject(INVALID_INPUT);
        };
        writeln!(self.output, "Prime factors: {}", format_terms(&prime_factors(n)?))?;

        self.run_prime_stream()?;

        self.run_tile_cost()
    }

    fn read_precision(&mut self) -> Result<Option<Precision>> {
        let max = self.settings.max_digits;
        let digits = self
            .prompt::<u32>("Enter the number of decimal places: ")?
            .filter(|&d| d <= max);
        Ok(digits.and_then(|d| Precision::new(d).ok()))
    }

    /// Primes one at a time. Only an answer starting with `n` or `N` asks
    /// for the next one; anything else, or end of input, stops the stream.
    fn run_prime_stream(&mut self) -> Result<()> {
        writeln!(self.output, "Press 'n' for next prime, any other key to quit")?;

        let mut stream = PrimeStream::new();
        while let Some(prime) = stream.advance() {
            write!(self.output, "{prime} is prime, continue? ")?;
            self.output.flush()?;

            let answer = self.read_line()?;
            let next = answer
                .as_deref()
                .and_then(|line| line.chars().next())
                .is_some_and(|c| c.eq_ignore_ascii_case(&'n'));
            if !next {
                break;
            }
        }
        debug!(cursor = stream.cursor(), "prime stream stopped");

        writeln!(self.output)?;
        writeln!(self.output, "Prime number generation stopped")?;
        Ok(())
    }

    fn run_tile_cost(&mut self) -> Result<Outcome> {
        self.write_prompt("Enter width, height and cost: ")?;
        let Some(dims) = self.read_line()?.and_then(|line| parse_dimensions(&line)) else {
            return self.reject(WRONG_INPUT);
        };
        let [width, height, cost] = dims;
        if let Err(e) = check_dimensions(width, height, cost) {
            debug!(error = %e, "tile dimensions rejected");
            return self.reject(NEGATIVE_DIMENSIONS);
        }

        writeln!(
            self.output,
            "Tile cost: {:.2}{}",
            tile_cost(width, height, cost),
            self.settings.currency
        )?;
        Ok(Outcome::Completed)
    }

    /// Prompt and parse one value. `None` on end of input or a parse failure.
    fn prompt<T: FromStr>(&mut self, text: &str) -> Result<Option<T>> {
        self.write_prompt(text)?;
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        let parsed = line.trim().parse::<T>().ok();
        if parsed.is_none() {
            debug!(input = %line, "unparseable answer");
        }
        Ok(parsed)
    }

    fn write_prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let read = self.input.read_line(&mut buf).context("reading input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn reject(&mut self, message: &'static str) -> Result<Outcome> {
        debug!(reason = message, "script input rejected");
        writeln!(self.output)?;
        writeln!(self.output, "{message}")?;
        Ok(Outcome::Rejected(message))
    }
}

/// Exactly three whitespace-separated reals.
fn parse_dimensions(line: &str) -> Option<[f64; 3]> {
    let values: Vec<f64> = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    values.try_into().ok()
}

/// Space-separated terms, as printed by every sequence step.
pub fn format_terms(terms: &[u64]) -> String {
    terms
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use numkit_core::MAX_DIGITS;
    use std::io::Cursor;

    fn run(input: &str) -> (Outcome, String) {
        run_with(input, Settings::default())
    }

    fn run_with(input: &str, settings: Settings) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = Script::new(Cursor::new(input.as_bytes()), &mut out, settings)
            .run()
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_session_transcript() {
        let (outcome, out) = run("4\n5\n10\n7\n360\nn\nN\nq\n3 4 2.5\n");
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(
            out,
            "Enter the number of decimal places: Pi = 3.1416\n\
             Enter the number of decimal places: E = 2.71828\n\
             Enter the limit: Fibonacci sequence: 0 1 1 2 3 5 8\n\
             Enter the number of elements: Fibonacci sequence: 0 1 1 2 3 5 8\n\
             Enter a number of at least 2: Prime factors: 2 2 2 3 3 5\n\
             Press 'n' for next prime, any other key to quit\n\
             2 is prime, continue? 3 is prime, continue? 5 is prime, continue? \n\
             Prime number generation stopped\n\
             Enter width, height and cost: Tile cost: 30.00$\n"
        );
    }

    #[test]
    fn test_zero_digits_and_empty_sequences() {
        let (outcome, out) = run("0\n0\n-1\n0\n2\ny\n0 0 0\n");
        assert_eq!(outcome, Outcome::Completed);
        assert!(out.contains("Pi = 3\n"));
        assert!(out.contains("E = 3\n"));
        assert!(out.contains("Enter the limit: Fibonacci sequence: \n"));
        assert!(out.contains("Prime factors: 2\n"));
        assert!(out.contains("2 is prime, continue? \nPrime number generation stopped"));
        assert!(out.ends_with("Tile cost: 0.00$\n"));
    }

    #[test]
    fn test_precision_above_bound_rejected() {
        let (outcome, out) = run("15\n");
        assert_eq!(outcome, Outcome::Rejected(INVALID_INPUT));
        assert!(out.ends_with("Invalid input\n"));
        assert!(!out.contains("Pi ="));
    }

    #[test]
    fn test_configured_bound_is_enforced() {
        let settings = Settings {
            max_digits: 3,
            currency: "$".into(),
        };
        let (outcome, _) = run_with("4\n", settings);
        assert_eq!(outcome, Outcome::Rejected(INVALID_INPUT));
    }

    #[test]
    fn test_parse_failure_stops_remaining_steps() {
        let (outcome, out) = run("2\nabc\n10\n");
        assert_eq!(outcome, Outcome::Rejected(INVALID_INPUT));
        assert!(out.contains("Pi = 3.14\n"));
        assert!(!out.contains("E ="));
        assert!(!out.contains("Enter the limit"));
    }

    #[test]
    fn test_factor_below_two_rejected() {
        let (outcome, out) = run("1\n1\n5\n3\n1\n");
        assert_eq!(outcome, Outcome::Rejected(INVALID_INPUT));
        assert!(!out.contains("Prime factors"));
    }

    #[test]
    fn test_end_of_input_rejected() {
        let (outcome, _) = run("");
        assert_eq!(outcome, Outcome::Rejected(INVALID_INPUT));
    }

    #[test]
    fn test_prime_stream_stops_at_end_of_input() {
        // the tile prompt then sees end of input as well
        let (outcome, out) = run("1\n1\n1\n1\n2\nn\n");
        assert_eq!(outcome, Outcome::Rejected(WRONG_INPUT));
        assert!(out.contains("2 is prime, continue? 3 is prime, continue? \n"));
    }

    #[test]
    fn test_continue_matches_first_char_only() {
        let (_, out) = run("1\n1\n1\n1\n2\nno\nnext\nstop\n1 1 1\n");
        assert!(out.contains("5 is prime, continue? \nPrime number generation stopped"));
    }

    #[test]
    fn test_tile_wrong_input() {
        let (outcome, out) = run("1\n1\n1\n1\n2\nq\n3 4\n");
        assert_eq!(outcome, Outcome::Rejected(WRONG_INPUT));
        assert!(out.ends_with("Wrong input\n"));
    }

    #[test]
    fn test_tile_negative_rejected() {
        let (outcome, out) = run("1\n1\n1\n1\n2\nq\n3 -4 2\n");
        assert_eq!(outcome, Outcome::Rejected(NEGATIVE_DIMENSIONS));
        assert!(!out.contains("Tile cost"));
    }

    #[test]
    fn test_tile_nan_and_infinity_rejected() {
        for dims in ["NaN 1 1", "1 inf 1", "1 1 -inf"] {
            let input = format!("1\n1\n1\n1\n2\nq\n{dims}\n");
            let (outcome, out) = run(&input);
            assert_eq!(outcome, Outcome::Rejected(NEGATIVE_DIMENSIONS), "{dims}");
            assert!(!out.contains("Tile cost"));
        }
    }

    #[test]
    fn test_currency_suffix() {
        let settings = Settings {
            max_digits: MAX_DIGITS,
            currency: " EUR".into(),
        };
        let (_, out) = run_with("1\n1\n1\n1\n2\nq\n2 2 1.255\n", settings);
        assert!(out.ends_with("Tile cost: 5.02 EUR\n"));
    }

    #[test]
    fn test_format_terms() {
        assert_eq!(format_terms(&[]), "");
        assert_eq!(format_terms(&[2, 2, 5]), "2 2 5");
    }
}
