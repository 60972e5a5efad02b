use crate::{KernelError, Result};

/// Greatest common divisor by repeated subtraction.
///
/// While the operands differ the smaller one is subtracted from the larger;
/// once they are equal that value is the divisor. Both operands must be
/// strictly positive, otherwise the subtraction never converges.
///
/// This takes up to `max(a, b) / min(a, b)` steps, so `gcd(1, i64::MAX)`
/// will not finish in practice. The runner bounds the
/// operands with `Config::max_gcd_operand`.
pub fn gcd(a: i64, b: i64) -> Result<u64> {
    if a <= 0 || b <= 0 {
        return Err(KernelError::invalid("gcd", "operands must be positive"));
    }

    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while a != b {
        if a > b {
            a -= b;
        } else {
            b -= a;
        }
    }

    Ok(a)
}
