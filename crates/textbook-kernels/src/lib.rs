#![cfg_attr(not(feature = "std"), no_std)]

//! Classic textbook algorithm kernels: subtraction GCD, naive Fibonacci,
//! bubble sort, recursive binary search, Tower of Hanoi and two counting
//! scans, plus the small demonstration programs which pair them up into
//! independent workloads.

extern crate alloc;

pub mod count;
pub mod error;
pub mod fib;
pub mod gcd;
pub mod hanoi;
pub mod program;
pub mod search;
pub mod sort;

#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
pub mod runner;

pub use count::{count_char, count_occurrences, sum_sequence};
pub use error::{KernelError, Result};
pub use fib::fib;
pub use gcd::gcd;
pub use hanoi::{hanoi_moves, hanoi_solve, Move, Peg, MAX_DISKS, MAX_RECORDED_DISKS};
pub use program::{Outcome, Program, Task};
pub use search::{binary_search, NOT_FOUND};
pub use sort::bubble_sort;

#[cfg(feature = "std")]
pub use config::{Config, ExecutionMode};
#[cfg(feature = "std")]
pub use runner::{Report, Runner, TaskReport};

#[cfg(test)]
mod tests;
