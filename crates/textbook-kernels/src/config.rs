use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::{KernelError, Result};

/// How the runner schedules a program's tasks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One after another on the calling thread.
    #[default]
    Sequential,
    /// Each task on its own thread.
    Threaded,
}

impl ExecutionMode {
    fn name(self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Threaded => "threaded",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExecutionMode {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sequential" => Ok(ExecutionMode::Sequential),
            "threaded" => Ok(ExecutionMode::Threaded),
            _ => Err(KernelError::InvalidConfig(format!("unknown execution mode: '{s}'"))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    execution: ExecutionMode,
    max_fib_index: i64,
    max_hanoi_disks: i64,
    max_gcd_operand: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn env_var(name: &str) -> Option<String> {
    let value = std::env::var(name).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.into())
    }
}

fn env_integer(name: &str) -> Result<Option<i64>> {
    let Some(value) = env_var(name) else {
        return Ok(None);
    };

    value
        .parse()
        .map(Some)
        .map_err(|_| KernelError::InvalidConfig(format!("{name} is not an integer: '{value}'")))
}

impl Config {
    pub const ENV_EXECUTION: &'static str = "KERNELS_EXECUTION";
    pub const ENV_MAX_FIB_INDEX: &'static str = "KERNELS_MAX_FIB_INDEX";
    pub const ENV_MAX_HANOI_DISKS: &'static str = "KERNELS_MAX_HANOI_DISKS";
    pub const ENV_MAX_GCD_OPERAND: &'static str = "KERNELS_MAX_GCD_OPERAND";

    /// The largest Fibonacci index accepted by default.
    pub const DEFAULT_MAX_FIB_INDEX: i64 = 40;

    /// The largest Hanoi disk count accepted by default.
    pub const DEFAULT_MAX_HANOI_DISKS: i64 = 25;

    /// The largest GCD operand accepted by default.
    pub const DEFAULT_MAX_GCD_OPERAND: i64 = 100_000_000;

    pub fn new() -> Self {
        Config {
            execution: ExecutionMode::Sequential,
            max_fib_index: Self::DEFAULT_MAX_FIB_INDEX,
            max_hanoi_disks: Self::DEFAULT_MAX_HANOI_DISKS,
            max_gcd_operand: Self::DEFAULT_MAX_GCD_OPERAND,
        }
    }

    /// Creates a new default configuration and applies any overrides from the environment.
    ///
    /// Variables which are unset, empty or only whitespace are ignored.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();
        if let Some(value) = env_var(Self::ENV_EXECUTION) {
            config.execution = value.parse()?;
        }

        if let Some(value) = env_integer(Self::ENV_MAX_FIB_INDEX)? {
            config.max_fib_index = value;
        }

        if let Some(value) = env_integer(Self::ENV_MAX_HANOI_DISKS)? {
            config.max_hanoi_disks = value;
        }

        if let Some(value) = env_integer(Self::ENV_MAX_GCD_OPERAND)? {
            config.max_gcd_operand = value;
        }

        log::debug!(
            "Configuration: execution={}, max_fib_index={}, max_hanoi_disks={}, max_gcd_operand={}",
            config.execution,
            config.max_fib_index,
            config.max_hanoi_disks,
            config.max_gcd_operand
        );
        Ok(config)
    }

    pub fn set_execution(&mut self, execution: ExecutionMode) -> &mut Self {
        self.execution = execution;
        self
    }

    pub fn execution(&self) -> ExecutionMode {
        self.execution
    }

    /// Sets the largest Fibonacci index the runner will evaluate.
    ///
    /// The naive recursion makes every extra index roughly 1.6 times slower.
    pub fn set_max_fib_index(&mut self, max_fib_index: i64) -> &mut Self {
        self.max_fib_index = max_fib_index;
        self
    }

    pub fn max_fib_index(&self) -> i64 {
        self.max_fib_index
    }

    /// Sets the largest disk count the runner will count moves for.
    ///
    /// Every extra disk doubles the running time.
    pub fn set_max_hanoi_disks(&mut self, max_hanoi_disks: i64) -> &mut Self {
        self.max_hanoi_disks = max_hanoi_disks;
        self
    }

    pub fn max_hanoi_disks(&self) -> i64 {
        self.max_hanoi_disks
    }

    /// Sets the largest operand the runner will hand to the subtraction GCD,
    /// which takes up to `max(a, b) / min(a, b)` steps.
    pub fn set_max_gcd_operand(&mut self, max_gcd_operand: i64) -> &mut Self {
        self.max_gcd_operand = max_gcd_operand;
        self
    }

    pub fn max_gcd_operand(&self) -> i64 {
        self.max_gcd_operand
    }
}
