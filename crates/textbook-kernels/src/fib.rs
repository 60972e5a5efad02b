use crate::{KernelError, Result};

/// The `n`-th Fibonacci number, 0-indexed (`fib(0) == 0`, `fib(1) == 1`).
///
/// Computed by naive double recursion, so the running time grows
/// exponentially with `n`.
pub fn fib(n: i64) -> Result<u64> {
    if n < 0 {
        return Err(KernelError::invalid("fib", "index must not be negative"));
    }

    fib_recursive(n.unsigned_abs())
}

fn fib_recursive(n: u64) -> Result<u64> {
    if n <= 1 {
        return Ok(n);
    }

    let a = fib_recursive(n - 1)?;
    let b = fib_recursive(n - 2)?;
    a.checked_add(b).ok_or(KernelError::overflow("fib"))
}
