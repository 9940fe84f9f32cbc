//! # Integer addition behind a capability interface
//!
//! The [`Adder`] trait is the capability: callers hold `&dyn Adder` (or a
//! generic bound) and depend on the operation's contract rather than a
//! concrete type. [`Calculator`] is the sole implementation.
//!
//! The core operation wraps on overflow (two's-complement), so debug and
//! release builds agree. [`checked_add`] is the guarded companion: it carries
//! a Verus contract relating its result to the unbounded mathematical sum and
//! reports overflow as `None`.
//!
//! The crate works with both:
//! - `cargo build/test` - specs stripped, compiles as pure Rust
//! - `verus` - full verification

use verus_builtin_macros::verus;

verus! {

/// Spec-level sum over unbounded integers. No runtime code - exists purely
/// for the contracts below.
pub open spec fn sum_of(first: i64, second: i64) -> int {
    first + second
}

/// Addition guarded against overflow.
///
/// Returns `None` exactly when the mathematical sum of the operands falls
/// outside `i64`. The intermediate widening to `i128` cannot itself overflow.
pub fn checked_add(first: i64, second: i64) -> (result: Option<i64>)
    ensures
        match result {
            Some(sum) => sum as int == sum_of(first, second),
            None => sum_of(first, second) > i64::MAX as int
                || sum_of(first, second) < i64::MIN as int,
        },
{
    let wide = first as i128 + second as i128;
    if i64::MIN as i128 <= wide && wide <= i64::MAX as i128 {
        Some(wide as i64)
    } else {
        None
    }
}

} // verus!

/// Capability interface for the addition operation.
pub trait Adder {
    /// Returns the sum of `first` and `second`.
    ///
    /// Overflow wraps (two's-complement); the operation is pure and never
    /// fails. Callers that need overflow reported use [`checked_add`].
    fn add(&self, first: i64, second: i64) -> i64;
}

/// The single conforming implementation of [`Adder`]. Stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Adder for Calculator {
    fn add(&self, first: i64, second: i64) -> i64 {
        first.wrapping_add(second)
    }
}

// ============================================================================
// TESTS - Run with `cargo test`
// ============================================================================
