//! Exact-amount and percentage splits.
//!
//! Percentage splits use the Largest Remainder Method:
//! 1. Calculate exact allocations
//! 2. Round each one down to the minor unit
//! 3. Give the leftover minor units, one each, to the entries with the
//!    largest fractional parts (earlier entries win ties)

use evensplit_shared::types::{Money, UserId};
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::SplitError;
use super::types::{SplitAllocation, ensure_unique};

/// Allocates `total` using explicit per-participant amounts.
///
/// Each amount must be non-negative, no finer than the currency's minor
/// unit, and together they must equal the rounded total exactly.
pub fn allocate_exact(
    total: Money,
    amounts: &[(UserId, Decimal)],
) -> Result<SplitAllocation, SplitError> {
    let total_units = validate(total, amounts)?;
    let exponent = total.currency.minor_unit_exponent();

    let units = amounts
        .iter()
        .map(|(participant, amount)| {
            let too_fine = amount.round_dp(exponent) != *amount;
            if (amount.is_sign_negative() && !amount.is_zero()) || too_fine {
                return Err(SplitError::InvalidShare {
                    participant: *participant,
                    value: *amount,
                });
            }
            Money::new(*amount, total.currency)
                .to_minor_units()
                .map(|units| (*participant, units))
                .ok_or(SplitError::InvalidShare {
                    participant: *participant,
                    value: *amount,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let actual = checked_sum(amounts)?;
    let sum: i128 = units.iter().map(|(_, units)| units).sum();
    if sum != total_units {
        return Err(SplitError::ExactSumMismatch {
            expected: total.rounded().amount,
            actual,
        });
    }

    SplitAllocation::from_minor_units(total.currency, units)
}

/// Allocates `total` by percentages that must add up to exactly 100.
///
/// # Example
///
/// ```
/// use evensplit_core::split::allocate_by_percentage;
/// use evensplit_shared::types::{Currency, Money, UserId};
/// use rust_decimal_macros::dec;
///
/// let (a, b) = (UserId::new(), UserId::new());
/// let split = allocate_by_percentage(
///     Money::new(dec!(100), Currency::Usd),
///     &[(a, dec!(70)), (b, dec!(30))],
/// )
/// .unwrap();
/// assert_eq!(split.get(a).unwrap().amount, dec!(70.00));
/// ```
pub fn allocate_by_percentage(
    total: Money,
    percentages: &[(UserId, Decimal)],
) -> Result<SplitAllocation, SplitError> {
    let total_units = validate(total, percentages)?;
    let exponent = total.currency.minor_unit_exponent();
    let hundred = Decimal::ONE_HUNDRED;

    if let Some((participant, value)) = percentages
        .iter()
        .find(|(_, pct)| pct.is_sign_negative() && !pct.is_zero())
    {
        return Err(SplitError::InvalidShare {
            participant: *participant,
            value: *value,
        });
    }

    let pct_sum = checked_sum(percentages)?;
    if pct_sum != hundred {
        return Err(SplitError::PercentageSumMismatch(pct_sum));
    }

    let total_rounded = total.rounded().amount;

    // Calculate exact allocations
    let exact = percentages
        .iter()
        .map(|(_, pct)| {
            total_rounded
                .checked_mul(*pct)
                .map(|scaled| scaled / hundred)
                .ok_or(SplitError::InvalidAmount)
        })
        .collect::<Result<Vec<Decimal>, _>>()?;

    // Round down each
    let floors: Vec<Decimal> = exact
        .iter()
        .map(|a| a.round_dp_with_strategy(exponent, RoundingStrategy::ToZero))
        .collect();

    let mut units = floors
        .iter()
        .map(|floor| {
            Money::new(*floor, total.currency)
                .to_minor_units()
                .ok_or(SplitError::InvalidAmount)
        })
        .collect::<Result<Vec<i128>, _>>()?;

    let allocated: i128 = units.iter().sum();
    let leftover = usize::try_from(total_units - allocated).unwrap_or(0);

    if leftover > 0 {
        let mut remainders: Vec<(usize, Decimal)> = exact
            .iter()
            .zip(floors.iter())
            .enumerate()
            .map(|(i, (e, f))| (i, *e - *f))
            .collect();

        // Largest fractional part first; stable sort keeps input order on ties
        remainders.sort_by(|a, b| b.1.cmp(&a.1));

        for (idx, _) in remainders.iter().take(leftover) {
            units[*idx] += 1;
        }
    }

    SplitAllocation::from_minor_units(
        total.currency,
        percentages
            .iter()
            .map(|(participant, _)| *participant)
            .zip(units),
    )
}

/// Adds up the supplied values; the entry that overflows `Decimal` is rejected.
fn checked_sum(entries: &[(UserId, Decimal)]) -> Result<Decimal, SplitError> {
    entries
        .iter()
        .try_fold(Decimal::ZERO, |acc, (participant, value)| {
            acc.checked_add(*value).ok_or(SplitError::InvalidShare {
                participant: *participant,
                value: *value,
            })
        })
}

/// Checks the total and participant list; returns the total in minor units.
fn validate(total: Money, entries: &[(UserId, Decimal)]) -> Result<i128, SplitError> {
    if !total.is_positive() {
        return Err(SplitError::InvalidAmount);
    }
    if entries.is_empty() {
        return Err(SplitError::EmptyParticipants);
    }
    ensure_unique(entries.iter().map(|(participant, _)| *participant))?;

    total
        .to_minor_units()
        .filter(|units| *units > 0)
        .ok_or(SplitError::InvalidAmount)
}
