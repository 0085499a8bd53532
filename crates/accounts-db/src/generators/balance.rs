//! Random account balance generation.

use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits every balance carries.
pub const BALANCE_SCALE: u32 = 2;

/// Exclusive upper bound, in cents, of generated balances.
pub const MAX_BALANCE_CENTS: i64 = 10_000_000;

/// Rounds a value to two decimal places, midpoints away from zero, and pads
/// the result so its scale is exactly two.
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(BALANCE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(BALANCE_SCALE);
    rounded
}

/// Configuration for balance generation.
#[derive(Debug, Clone)]
pub struct BalanceGenConfig {
    /// Exclusive upper bound in cents.
    pub max_cents: i64,
}

impl Default for BalanceGenConfig {
    fn default() -> Self {
        Self {
            max_cents: MAX_BALANCE_CENTS,
        }
    }
}

/// Generates uniformly distributed balances in `[0.00, max_cents / 100)`.
pub struct BalanceGenerator {
    config: BalanceGenConfig,
}

impl BalanceGenerator {
    pub fn new() -> Self {
        Self::with_config(BalanceGenConfig::default())
    }

    /// Creates a generator. A `max_cents` below 1 is raised to 1, so the
    /// range always holds at least 0.00.
    pub fn with_config(config: BalanceGenConfig) -> Self {
        Self {
            config: BalanceGenConfig {
                max_cents: config.max_cents.max(1),
            },
        }
    }

    /// Draws one balance. Every call is independent of the previous ones.
    pub fn generate(&self, rng: &mut impl Rng) -> Decimal {
        let cents = rng.gen_range(0..self.config.max_cents);
        round_half_up(Decimal::new(cents, BALANCE_SCALE))
    }
}

impl Default for BalanceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::str::FromStr;

    #[test]
    fn test_generate_in_range_with_scale() {
        let balance_gen = BalanceGenerator::new();
        let mut rng = rand::thread_rng();
        let max = Decimal::new(MAX_BALANCE_CENTS, BALANCE_SCALE);

        for _ in 0..1_000 {
            let balance = balance_gen.generate(&mut rng);
            assert!(balance >= Decimal::ZERO);
            assert!(balance < max);
            assert_eq!(balance.scale(), BALANCE_SCALE);
        }
    }

    #[test]
    fn test_same_seed_same_balances() {
        let balance_gen = BalanceGenerator::new();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        let first: Vec<_> = (0..20).map(|_| balance_gen.generate(&mut a)).collect();
        let second: Vec<_> = (0..20).map(|_| balance_gen.generate(&mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_cent_range() {
        let balance_gen = BalanceGenerator::with_config(BalanceGenConfig { max_cents: 1 });
        let mut rng = rand::thread_rng();
        assert_eq!(balance_gen.generate(&mut rng).to_string(), "0.00");
    }

    #[test]
    fn test_non_positive_max_is_clamped() {
        let mut rng = rand::thread_rng();
        for max_cents in [0, -5] {
            let balance_gen = BalanceGenerator::with_config(BalanceGenConfig { max_cents });
            assert_eq!(balance_gen.generate(&mut rng).to_string(), "0.00");
        }
    }

    #[test]
    fn test_round_half_up() {
        let cases = [
            ("1.005", "1.01"),
            ("1.004", "1.00"),
            ("2.5", "2.50"),
            ("0", "0.00"),
            ("99999.995", "100000.00"),
            ("-1.005", "-1.01"),
        ];
        for (input, expected) in cases {
            let rounded = round_half_up(Decimal::from_str(input).unwrap());
            assert_eq!(rounded.to_string(), expected, "rounding {input}");
        }
    }
}
