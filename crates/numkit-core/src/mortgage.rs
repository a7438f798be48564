//! Fixed-term loan math: periodic payment and payback time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{NumError, NumResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Monthly,
    Weekly,
    Daily,
}

impl Interval {
    pub fn periods_per_year(self) -> u32 {
        match self {
            Self::Monthly => 12,
            Self::Weekly => 52,
            Self::Daily => 365,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Weekly => write!(f, "weekly"),
            Self::Daily => write!(f, "daily"),
        }
    }
}

impl std::str::FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "weekly" => Ok(Self::Weekly),
            "daily" => Ok(Self::Daily),
            _ => Err(format!(
                "invalid compounding interval: {s} (choose monthly, weekly or daily)"
            )),
        }
    }
}

/// Result of a payback-time calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Payback {
    pub periods: f64,
    pub interval: Interval,
}

impl Payback {
    pub fn years(&self) -> f64 {
        self.periods / f64::from(self.interval.periods_per_year())
    }
}

fn ensure_non_negative(value: f64, what: &'static str) -> NumResult<()> {
    if value < 0.0 || value.is_nan() {
        return Err(NumError::NegativeInput(what));
    }
    Ok(())
}

/// Payment due each period to retire `principal` over `years`, rounded to cents.
pub fn monthly_payment(
    principal: f64,
    annual_rate: f64,
    years: u32,
    interval: Interval,
) -> NumResult<f64> {
    ensure_non_negative(principal, "principal")?;
    ensure_non_negative(annual_rate, "annual rate")?;

    let periods = years
        .checked_mul(interval.periods_per_year())
        .ok_or_else(|| NumError::Overflow(format!("{years} years of {interval} periods")))?;
    if periods == 0 {
        return Err(NumError::InvalidArgument(
            "loan term must be at least one year".into(),
        ));
    }

    let n = f64::from(periods);
    let r = annual_rate / f64::from(interval.periods_per_year());
    let payment = if r == 0.0 {
        principal / n
    } else {
        let growth = (1.0 + r).powf(n);
        principal * (r * growth) / (growth - 1.0)
    };

    Ok((payment * 100.0).round() / 100.0)
}

/// Number of periods of `payment` needed to repay `principal`.
pub fn payback_time(
    principal: f64,
    annual_rate: f64,
    payment: f64,
    interval: Interval,
) -> NumResult<Payback> {
    ensure_non_negative(principal, "principal")?;
    ensure_non_negative(annual_rate, "annual rate")?;
    ensure_non_negative(payment, "payment")?;
    if payment == 0.0 {
        return Err(NumError::InvalidArgument("payment must be positive".into()));
    }

    let r = annual_rate / f64::from(interval.periods_per_year());
    let periods = if r == 0.0 {
        principal / payment
    } else {
        let interest = r * principal;
        if payment <= interest {
            return Err(NumError::InvalidArgument(format!(
                "payment {payment:.2} never covers the {interest:.2} interest per period"
            )));
        }
        (payment / (payment - interest)).ln() / (1.0 + r).ln()
    };

    Ok(Payback { periods, interval })
}
