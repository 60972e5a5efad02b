use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::hanoi::Peg;
use crate::search::NOT_FOUND;
use crate::{binary_search, bubble_sort, count_char, fib, gcd, hanoi_moves, sum_sequence, KernelError, Result};

/// A single kernel invocation with its inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Task {
    Gcd { a: i64, b: i64 },
    Fib { n: i64 },
    /// Sorts `data` and then searches it for `item`.
    SortSearch { data: Vec<i64>, item: i64 },
    Hanoi { disks: i64, src: Peg, aux: Peg, dest: Peg },
    Sum { data: Vec<i64> },
    CountChar { data: Vec<char>, target: char },
}

/// The value produced by a [`Task`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Value(u64),
    Index(Option<usize>),
    Total(i64),
    Count(usize),
}

impl Outcome {
    /// The outcome as a signed integer; a missing index is [`NOT_FOUND`].
    pub fn sentinel(self) -> Result<i64> {
        let value = match self {
            Outcome::Value(value) => i64::try_from(value).ok(),
            Outcome::Index(Some(index)) => i64::try_from(index).ok(),
            Outcome::Index(None) => Some(NOT_FOUND),
            Outcome::Total(total) => Some(total),
            Outcome::Count(count) => i64::try_from(count).ok(),
        };

        value.ok_or(KernelError::overflow("sentinel"))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Value(value) => fmt::Display::fmt(&value, f),
            Outcome::Index(Some(index)) => fmt::Display::fmt(&index, f),
            Outcome::Index(None) => fmt::Display::fmt(&NOT_FOUND, f),
            Outcome::Total(total) => fmt::Display::fmt(&total, f),
            Outcome::Count(count) => fmt::Display::fmt(&count, f),
        }
    }
}

impl Task {
    pub fn name(&self) -> &'static str {
        match self {
            Task::Gcd { .. } => "gcd",
            Task::Fib { .. } => "fib",
            Task::SortSearch { .. } => "sort-search",
            Task::Hanoi { .. } => "hanoi",
            Task::Sum { .. } => "sum",
            Task::CountChar { .. } => "count-char",
        }
    }

    pub fn run(&self) -> Result<Outcome> {
        match self {
            Task::Gcd { a, b } => gcd(*a, *b).map(Outcome::Value),
            Task::Fib { n } => fib(*n).map(Outcome::Value),
            Task::SortSearch { data, item } => {
                let mut data = data.clone();
                bubble_sort(&mut data);
                Ok(Outcome::Index(binary_search(&data, item)))
            }
            Task::Hanoi { disks, src, aux, dest } => hanoi_moves(*disks, *src, *aux, *dest).map(Outcome::Value),
            Task::Sum { data } => sum_sequence(data).map(Outcome::Total),
            Task::CountChar { data, target } => Ok(Outcome::Count(count_char(data, *target))),
        }
    }
}

/// The demonstration programs, each a fixed set of independent tasks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Program {
    /// `gcd(1989, 867)` alongside `fib(18)`.
    FibonacciGcd,
    /// Sort-then-search for 7 alongside a 4-disk Hanoi count.
    BinarySearchHanoi,
    /// Sort-then-search for 9 alongside a sum and a character count.
    BinarySumCount,
}

const SEARCH_DATA: [i64; 8] = [0, 6, 8, 4, 3, 9, 7, 5];

impl Program {
    pub const ALL: [Program; 3] = [Program::FibonacciGcd, Program::BinarySearchHanoi, Program::BinarySumCount];

    pub fn name(self) -> &'static str {
        match self {
            Program::FibonacciGcd => "fibonacci-gcd",
            Program::BinarySearchHanoi => "binary-search-hanoi",
            Program::BinarySumCount => "binary-sum-count",
        }
    }

    pub fn tasks(self) -> Vec<Task> {
        match self {
            Program::FibonacciGcd => vec![Task::Gcd { a: 1989, b: 867 }, Task::Fib { n: 18 }],
            Program::BinarySearchHanoi => vec![
                Task::SortSearch {
                    data: SEARCH_DATA.to_vec(),
                    item: 7,
                },
                Task::Hanoi {
                    disks: 4,
                    src: Peg(1),
                    aux: Peg(2),
                    dest: Peg(3),
                },
            ],
            Program::BinarySumCount => vec![
                Task::SortSearch {
                    data: SEARCH_DATA.to_vec(),
                    item: 9,
                },
                Task::Sum { data: vec![9, 2, 3, 4, 1] },
                Task::CountChar {
                    data: vec!['h', 'e', 'l', 'l', 'l', 'l', 'l', 'l', 'o', 'o'],
                    target: 'l',
                },
            ],
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Program {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        Program::ALL
            .into_iter()
            .find(|program| program.name() == s)
            .ok_or_else(|| KernelError::InvalidConfig(alloc::format!("unknown program: '{s}'")))
    }
}
