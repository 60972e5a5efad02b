use alloc::vec::Vec;
use core::fmt;

use crate::{KernelError, Result};

/// The largest disk count whose move count fits in a `u64`.
pub const MAX_DISKS: i64 = 63;

/// The largest disk count for which [`hanoi_solve`] will record moves.
pub const MAX_RECORDED_DISKS: i64 = 20;

/// An opaque peg label. The counter never inspects it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Peg(pub i64);

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single-disk move; disks are numbered from 1 (the smallest).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub disk: u32,
    pub from: Peg,
    pub to: Peg,
}

fn check_disks(disks: i64, limit: i64) -> Result<u32> {
    if disks < 0 {
        return Err(KernelError::invalid("hanoi", "disk count must not be negative"));
    }

    if disks > limit {
        return Err(KernelError::invalid("hanoi", "too many disks"));
    }

    u32::try_from(disks).map_err(|_| KernelError::invalid("hanoi", "too many disks"))
}

/// Counts the moves needed to carry `disks` disks from `src` to `dest`
/// using `aux` as the spare peg. Always `2^disks - 1`; zero disks take zero
/// moves.
///
/// The count is computed by the exponential recursion, so anything much
/// beyond 30 disks will not finish in practice; the runner bounds it with
/// `Config::max_hanoi_disks`.
pub fn hanoi_moves(disks: i64, src: Peg, aux: Peg, dest: Peg) -> Result<u64> {
    let disks = check_disks(disks, MAX_DISKS)?;
    Ok(count_moves(disks, src, aux, dest))
}

fn count_moves(disks: u32, src: Peg, aux: Peg, dest: Peg) -> u64 {
    match disks {
        0 => 0,
        1 => 1,
        _ => count_moves(disks - 1, src, dest, aux) + count_moves(1, src, aux, dest) + count_moves(disks - 1, aux, src, dest),
    }
}

/// Records the moves [`hanoi_moves`] counts, in the order they are made.
pub fn hanoi_solve(disks: i64, src: Peg, aux: Peg, dest: Peg) -> Result<Vec<Move>> {
    let disks = check_disks(disks, MAX_RECORDED_DISKS)?;
    let mut moves = Vec::with_capacity((1_usize << disks) - 1);
    record_moves(disks, src, aux, dest, &mut moves);
    Ok(moves)
}

fn record_moves(disks: u32, src: Peg, aux: Peg, dest: Peg, moves: &mut Vec<Move>) {
    if disks == 0 {
        return;
    }

    record_moves(disks - 1, src, dest, aux, moves);
    moves.push(Move { disk: disks, from: src, to: dest });
    record_moves(disks - 1, aux, src, dest, moves);
}
