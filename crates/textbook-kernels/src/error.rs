use alloc::string::String;
use core::fmt;

/// Errors reported by the kernels and the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// An operand is outside the kernel's domain
    InvalidArgument { kernel: &'static str, reason: &'static str },
    /// The result does not fit in the output integer type
    Overflow { kernel: &'static str },
    /// A configuration value could not be parsed
    InvalidConfig(String),
    /// The thread running a task panicked
    TaskPanicked { kernel: &'static str },
}

impl KernelError {
    pub(crate) const fn invalid(kernel: &'static str, reason: &'static str) -> Self {
        KernelError::InvalidArgument { kernel, reason }
    }

    pub(crate) const fn overflow(kernel: &'static str) -> Self {
        KernelError::Overflow { kernel }
    }
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidArgument { kernel, reason } => write!(f, "invalid argument to '{kernel}': {reason}"),
            KernelError::Overflow { kernel } => write!(f, "result of '{kernel}' overflowed"),
            KernelError::InvalidConfig(message) => write!(f, "invalid configuration: {message}"),
            KernelError::TaskPanicked { kernel } => write!(f, "task '{kernel}' panicked"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KernelError {}

/// Result type for kernel operations
pub type Result<T> = core::result::Result<T, KernelError>;
