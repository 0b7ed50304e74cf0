//! Numeric utilities: sequence maximum, parity, iterative factorial, mean
//!
//! Every function here is pure and total over its documented domain; the
//! only fallible operation is [`factorial`], which reports overflow instead
//! of wrapping.

use thiserror::Error;

/// Errors that can occur when computing a factorial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FactorialError {
    /// The product no longer fits in `u128` (first happens at n = 35)
    #[error("factorial of {n} does not fit in u128")]
    Overflow { n: u32 },
}

/// Find the greatest element of a sequence by its natural ordering.
///
/// Consumes the sequence in a single pass and returns `None` for an empty
/// sequence. On ties any maximal value may be returned; equal values are
/// indistinguishable. When two items are incomparable (float `NaN`), the
/// current candidate is kept — sequences containing such items are outside
/// the documented domain.
///
/// # Examples
///
/// ```
/// use textkit::maximum;
///
/// assert_eq!(maximum([1, 2, 3]), Some(3));
/// assert_eq!(maximum([-5, -2, -10]), Some(-2));
/// assert_eq!(maximum(Vec::<i32>::new()), None);
/// assert_eq!(maximum([1.0, 2.5, 2.0]), Some(2.5));
/// ```
pub fn maximum<I>(items: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    items.into_iter().fold(None, |best, item| match best {
        None => Some(item),
        Some(current) => {
            if item > current {
                Some(item)
            } else {
                Some(current)
            }
        }
    })
}

/// Check whether an integer is even.
///
/// Correct for negative integers: Rust's truncated remainder gives
/// `-4 % 2 == 0`.
///
/// # Examples
///
/// ```
/// use textkit::is_even;
///
/// assert!(is_even(0));
/// assert!(!is_even(7));
/// assert!(is_even(-4));
/// ```
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Compute `n!` by iterative accumulation.
///
/// `factorial(0)` and `factorial(1)` are both 1. The accumulator is a
/// `u128` multiplied with `checked_mul`; once the product no longer fits
/// (n ≥ 35) the function returns [`FactorialError::Overflow`] rather than
/// wrapping or saturating. Negative input is unrepresentable in the
/// parameter type.
///
/// # Examples
///
/// ```
/// use textkit::factorial;
///
/// assert_eq!(factorial(0), Ok(1));
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(35).is_err());
/// ```
pub fn factorial(n: u32) -> Result<u128, FactorialError> {
    let mut product: u128 = 1;
    for k in 2..=u128::from(n) {
        product = match product.checked_mul(k) {
            Some(next) => next,
            None => {
                tracing::trace!(n, at = k as u32, "factorial overflowed u128");
                return Err(FactorialError::Overflow { n });
            }
        };
    }
    Ok(product)
}

/// Arithmetic mean of a sequence, or `None` for an empty sequence.
///
/// # Examples
///
/// ```
/// use textkit::mean;
///
/// assert_eq!(mean([1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean([]), None);
/// ```
pub fn mean<I>(items: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count: usize = 0;
    for value in items {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}
