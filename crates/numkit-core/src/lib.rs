pub mod approximator;
pub mod change;
pub mod collatz;
pub mod convert;
pub mod error;
pub mod euler;
pub mod factorial;
pub mod factorize;
pub mod fibonacci;
pub mod luhn;
pub mod mortgage;
pub mod pi;
pub mod precision;
pub mod primes;
pub mod tax;
pub mod tile;

pub use approximator::Approximator;
pub use change::{make_change, ChangeItem, DENOMINATIONS};
pub use collatz::collatz_steps;
pub use convert::{convert, Quantity};
pub use error::{NumError, NumResult};
pub use euler::{find_e, TaylorSeries};
pub use factorial::{factorial_loop, factorial_recursive};
pub use factorize::prime_factors;
pub use fibonacci::{fibonacci_first, fibonacci_to, MAX_FIBONACCI_COUNT};
pub use luhn::{luhn_valid, CARD_LENGTHS};
pub use mortgage::{monthly_payment, payback_time, Interval, Payback};
pub use pi::{find_pi, GaussLegendre};
pub use precision::{Precision, MAX_DIGITS};
pub use primes::{is_prime, sieve_of_eratosthenes, PrimeStream, MAX_SIEVE_BOUND};
pub use tax::{apply_tax, TaxBreakdown};
pub use tile::{check_dimensions, tile_cost};
