mod config;
mod script;

use std::io;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};

use numkit_core::{
    apply_tax, check_dimensions, collatz_steps, convert, factorial_loop, factorial_recursive,
    fibonacci_first, fibonacci_to, luhn_valid, make_change, monthly_payment, payback_time,
    prime_factors, sieve_of_eratosthenes, tile_cost, Approximator, GaussLegendre, Interval,
    Precision, PrimeStream, Quantity, TaylorSeries,
};

use crate::config::Config;
use crate::script::{format_terms, Outcome, Script, Settings};

#[derive(Parser)]
#[command(
    name = "numkit",
    version,
    about = "Numeric exercises: pi, e, Fibonacci, primes and everyday money math"
)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Defaults to the interactive script
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive exercise script
    Script,

    /// Pi to N decimal places (Gauss-Legendre)
    Pi {
        /// Decimal places
        digits: u32,
    },

    /// e to N decimal places (series of 1/k!)
    E {
        /// Decimal places
        digits: u32,
    },

    /// Fibonacci terms not exceeding a bound
    Fib {
        /// Upper bound (negative gives an empty sequence)
        #[arg(allow_negative_numbers = true)]
        bound: i64,
    },

    /// The first N Fibonacci terms
    FibN {
        /// Number of terms
        count: usize,
    },

    /// Prime factors of a number
    Factor {
        /// Number to factorize (at least 2)
        n: u64,
    },

    /// The first primes in increasing order
    Primes {
        /// How many primes to print
        #[arg(short, long, default_value = "10")]
        count: usize,
    },

    /// Cost of tiling a W x H floor
    Tile {
        #[arg(allow_negative_numbers = true)]
        width: f64,
        #[arg(allow_negative_numbers = true)]
        height: f64,
        /// Cost per unit area
        #[arg(allow_negative_numbers = true)]
        cost: f64,
    },

    /// Payment per period of a fixed-term mortgage
    Mortgage {
        /// Loan amount
        principal: f64,

        /// Annual interest rate as a decimal (0.05 for 5%)
        #[arg(short, long)]
        rate: f64,

        /// Loan term in years
        #[arg(short, long)]
        years: u32,

        /// Compounding interval (default from config)
        #[arg(short, long)]
        interval: Option<CliInterval>,
    },

    /// How long a loan takes to pay back at a fixed payment
    Payback {
        /// Loan amount
        principal: f64,

        /// Annual interest rate as a decimal (0.05 for 5%)
        #[arg(short, long)]
        rate: f64,

        /// Payment per period
        #[arg(short, long)]
        payment: f64,

        /// Compounding interval (default from config)
        #[arg(short, long)]
        interval: Option<CliInterval>,
    },

    /// Bills and coins for an amount of change
    Change {
        /// Amount in dollars
        amount: f64,
    },

    /// Collatz steps needed to reach 1
    Collatz {
        /// Starting value (greater than 1)
        n: u64,
    },

    /// All primes up to N (sieve of Eratosthenes)
    Sieve {
        /// Inclusive upper bound (greater than 1)
        n: u64,
    },

    /// Convert between units of length, temperature, area or volume
    Convert {
        quantity: CliQuantity,

        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Source unit symbol (m, ft, c, gal, ...)
        from: String,

        /// Target unit symbol
        to: String,
    },

    /// Check a card number with the Luhn checksum
    Luhn {
        /// 13 to 19 digits, no separators
        number: String,
    },

    /// Sales tax and total for a cost
    Tax {
        cost: f64,

        /// Tax rate as a decimal (0.08 for 8%)
        #[arg(short, long)]
        rate: f64,
    },

    /// n! (at most 20!)
    Factorial {
        n: u32,

        /// Use the recursive implementation
        #[arg(long)]
        recursive: bool,
    },

    /// Show current configuration
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliInterval {
    Monthly,
    Weekly,
    Daily,
}

impl From<CliInterval> for Interval {
    fn from(val: CliInterval) -> Self {
        match val {
            CliInterval::Monthly => Interval::Monthly,
            CliInterval::Weekly => Interval::Weekly,
            CliInterval::Daily => Interval::Daily,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CliQuantity {
    Length,
    Temperature,
    Area,
    Volume,
}

impl From<CliQuantity> for Quantity {
    fn from(val: CliQuantity) -> Self {
        match val {
            CliQuantity::Length => Quantity::Length,
            CliQuantity::Temperature => Quantity::Temperature,
            CliQuantity::Area => Quantity::Area,
            CliQuantity::Volume => Quantity::Volume,
        }
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;
    let json = cli.json;

    let result = match cli.command.unwrap_or(Commands::Script) {
        Commands::Script => return cmd_script(&cfg),
        Commands::Pi { digits } => cmd_constant(&cfg, &GaussLegendre, digits, json),
        Commands::E { digits } => cmd_constant(&cfg, &TaylorSeries, digits, json),
        Commands::Fib { bound } => cmd_fib(bound, json),
        Commands::FibN { count } => cmd_fib_n(count, json),
        Commands::Factor { n } => cmd_factor(n, json),
        Commands::Primes { count } => cmd_primes(count, json),
        Commands::Tile {
            width,
            height,
            cost,
        } => cmd_tile(&cfg, width, height, cost, json),
        Commands::Mortgage {
            principal,
            rate,
            years,
            interval,
        } => {
            let interval = interval.map_or(cfg.mortgage.interval, Interval::from);
            cmd_mortgage(&cfg, principal, rate, years, interval, json)
        }
        Commands::Payback {
            principal,
            rate,
            payment,
            interval,
        } => {
            let interval = interval.map_or(cfg.mortgage.interval, Interval::from);
            cmd_payback(principal, rate, payment, interval, json)
        }
        Commands::Change { amount } => cmd_change(amount, json),
        Commands::Collatz { n } => cmd_collatz(n, json),
        Commands::Sieve { n } => cmd_sieve(n, json),
        Commands::Convert {
            quantity,
            value,
            from,
            to,
        } => cmd_convert(quantity.into(), value, &from, &to, json),
        Commands::Luhn { number } => cmd_luhn(&number, json),
        Commands::Tax { cost, rate } => cmd_tax(&cfg, cost, rate, json),
        Commands::Factorial { n, recursive } => cmd_factorial(n, recursive, json),
        Commands::Config => cmd_config(&cfg),
    };

    result.map(|()| ExitCode::SUCCESS)
}

// ---------------------------------------------------------------------------
// Interactive script
// ---------------------------------------------------------------------------

fn cmd_script(cfg: &Config) -> Result<ExitCode> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut script = Script::new(stdin.lock(), stdout.lock(), Settings::from_config(cfg));

    match script.run()? {
        Outcome::Completed => Ok(ExitCode::SUCCESS),
        Outcome::Rejected(reason) => {
            tracing::debug!(reason, "script aborted");
            Ok(ExitCode::FAILURE)
        }
    }
}

// ---------------------------------------------------------------------------
// One-shot commands
// ---------------------------------------------------------------------------

fn cmd_constant(
    cfg: &Config,
    approximator: &dyn Approximator,
    digits: u32,
    json: bool,
) -> Result<()> {
    let precision = checked_precision(cfg, digits)?;
    let value = approximator.approximate(precision);
    let formatted = precision.format(value);

    emit(
        json,
        json!({
            "constant": approximator.name(),
            "digits": precision,
            "value": value,
            "formatted": formatted,
        }),
        format!("{} = {formatted}", approximator.name()),
    )
}

fn cmd_fib(bound: i64, json: bool) -> Result<()> {
    let terms = fibonacci_to(bound);
    emit(
        json,
        json!({ "bound": bound, "terms": terms }),
        format!("Fibonacci sequence: {}", format_terms(&terms)),
    )
}

fn cmd_fib_n(count: usize, json: bool) -> Result<()> {
    let terms = fibonacci_first(count)?;
    emit(
        json,
        json!({ "count": count, "terms": terms }),
        format!("Fibonacci sequence: {}", format_terms(&terms)),
    )
}

fn cmd_factor(n: u64, json: bool) -> Result<()> {
    let factors = prime_factors(n)?;
    emit(
        json,
        json!({ "n": n, "factors": factors }),
        format!("Prime factors: {}", format_terms(&factors)),
    )
}

fn cmd_primes(count: usize, json: bool) -> Result<()> {
    let primes: Vec<u64> = PrimeStream::new().take(count).collect();
    emit(
        json,
        json!({ "primes": primes }),
        format!("Primes: {}", format_terms(&primes)),
    )
}

/// Digits within the configured bound, which may be tighter than `MAX_DIGITS`.
fn checked_precision(cfg: &Config, digits: u32) -> Result<Precision> {
    let max = cfg.max_digits();
    if digits > max {
        bail!("decimal places must be between 0 and {max}");
    }
    Ok(Precision::new(digits)?)
}

fn checked_tile_cost(width: f64, height: f64, cost: f64) -> Result<f64> {
    check_dimensions(width, height, cost).context("All numbers must be positive")?;
    Ok(tile_cost(width, height, cost))
}

fn cmd_tile(cfg: &Config, width: f64, height: f64, cost: f64, json: bool) -> Result<()> {
    let total = checked_tile_cost(width, height, cost)?;
    emit(
        json,
        json!({ "width": width, "height": height, "unit_cost": cost, "cost": total }),
        format!("Tile cost: {total:.2}{}", cfg.output.currency),
    )
}

fn cmd_mortgage(
    cfg: &Config,
    principal: f64,
    rate: f64,
    years: u32,
    interval: Interval,
    json: bool,
) -> Result<()> {
    let payment = monthly_payment(principal, rate, years, interval)?;
    emit(
        json,
        json!({
            "principal": principal,
            "annual_rate": rate,
            "years": years,
            "interval": interval,
            "payment": payment,
        }),
        format!(
            "Payment per period ({interval}): {payment:.2}{}",
            cfg.output.currency
        ),
    )
}

fn cmd_payback(
    principal: f64,
    rate: f64,
    payment: f64,
    interval: Interval,
    json: bool,
) -> Result<()> {
    let payback = payback_time(principal, rate, payment, interval)?;
    emit(
        json,
        json!({
            "periods": payback.periods,
            "interval": payback.interval,
            "years": payback.years(),
        }),
        format!(
            "Payback time: {:.1} {interval} periods ({:.2} years)",
            payback.periods,
            payback.years()
        ),
    )
}

fn cmd_change(amount: f64, json: bool) -> Result<()> {
    let items = make_change(amount)?;
    let text = if items.is_empty() {
        "No change due.".to_string()
    } else {
        items
            .iter()
            .map(|item| format!("{}: {}", item.name, item.count))
            .collect::<Vec<_>>()
            .join("\n")
    };
    emit(json, json!({ "amount": amount, "change": items }), text)
}

fn cmd_collatz(n: u64, json: bool) -> Result<()> {
    let steps = collatz_steps(n)?;
    emit(
        json,
        json!({ "n": n, "steps": steps }),
        format!("Collatz steps for {n}: {steps}"),
    )
}

fn cmd_sieve(n: u64, json: bool) -> Result<()> {
    let primes = sieve_of_eratosthenes(n)?;
    emit(
        json,
        json!({ "n": n, "primes": primes }),
        format!("Primes up to {n}: {}", format_terms(&primes)),
    )
}

fn cmd_convert(quantity: Quantity, value: f64, from: &str, to: &str, json: bool) -> Result<()> {
    let converted = convert(quantity, value, from, to).with_context(|| {
        format!(
            "converting {quantity} (units: {})",
            quantity.units().join(", ")
        )
    })?;
    emit(
        json,
        json!({
            "quantity": quantity,
            "value": value,
            "from": from,
            "to": to,
            "result": converted,
        }),
        format!("{value} {from} = {converted} {to}"),
    )
}

fn cmd_luhn(number: &str, json: bool) -> Result<()> {
    let valid = luhn_valid(number)?;
    emit(
        json,
        json!({ "number": number, "valid": valid }),
        format!("{number} is {}", if valid { "valid" } else { "invalid" }),
    )
}

fn cmd_tax(cfg: &Config, cost: f64, rate: f64, json: bool) -> Result<()> {
    let breakdown = apply_tax(cost, rate)?;
    let currency = &cfg.output.currency;
    emit(
        json,
        json!(breakdown),
        format!(
            "Tax: {:.2}{currency}\nTotal: {:.2}{currency}",
            breakdown.tax, breakdown.total
        ),
    )
}

fn cmd_factorial(n: u32, recursive: bool, json: bool) -> Result<()> {
    let value = if recursive {
        factorial_recursive(n)?
    } else {
        factorial_loop(n)?
    };
    emit(
        json,
        json!({ "n": n, "factorial": value }),
        format!("{n}! = {value}"),
    )
}

fn cmd_config(cfg: &Config) -> Result<()> {
    println!("Config: {}", config::show_config_path());
    println!();
    println!("[precision]");
    println!("  max_digits = {}", cfg.precision.max_digits);
    if cfg.max_digits() != cfg.precision.max_digits {
        println!("  (effective: {})", cfg.max_digits());
    }
    println!();
    println!("[output]");
    println!("  currency = {:?}", cfg.output.currency);
    println!();
    println!("[mortgage]");
    println!("  interval = {}", cfg.mortgage.interval);
    Ok(())
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

fn emit(json: bool, value: Value, text: String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{text}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use numkit_core::MAX_DIGITS;

    #[test]
    fn test_checked_precision_default_bound() {
        let cfg = Config::default();
        assert_eq!(checked_precision(&cfg, 0).unwrap().digits(), 0);
        assert_eq!(checked_precision(&cfg, MAX_DIGITS).unwrap().digits(), MAX_DIGITS);
        let err = checked_precision(&cfg, MAX_DIGITS + 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("decimal places must be between 0 and {MAX_DIGITS}")
        );
    }

    #[test]
    fn test_checked_precision_configured_bound() {
        let cfg: Config = toml::from_str("[precision]\nmax_digits = 3\n").unwrap();
        assert!(checked_precision(&cfg, 3).is_ok());
        assert!(checked_precision(&cfg, 4).is_err());
    }

    #[test]
    fn test_checked_tile_cost() {
        assert_eq!(checked_tile_cost(3.0, 4.0, 2.5).unwrap(), 30.0);
        assert_eq!(checked_tile_cost(0.0, 4.0, 2.5).unwrap(), 0.0);
    }

    #[test]
    fn test_checked_tile_cost_rejects_bad_dimensions() {
        for (w, h, c) in [
            (3.0, -4.0, 2.0),
            (f64::NAN, 1.0, 1.0),
            (1.0, f64::INFINITY, 1.0),
            (1.0, 1.0, -0.01),
        ] {
            let err = checked_tile_cost(w, h, c).unwrap_err();
            assert_eq!(err.to_string(), "All numbers must be positive", "{w} {h} {c}");
        }
    }

    #[test]
    fn test_cli_parses_new_subcommands() {
        let cli =
            Cli::try_parse_from(["numkit", "convert", "temperature", "-40", "c", "f"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Convert { value, .. }) if value == -40.0
        ));
        let cli = Cli::try_parse_from(["numkit", "factorial", "5", "--recursive"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Factorial { n: 5, recursive: true })
        ));
        assert!(Cli::try_parse_from(["numkit", "convert", "speed", "1", "m", "km"]).is_err());
    }
}
