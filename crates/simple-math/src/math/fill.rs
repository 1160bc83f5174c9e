//! Bulk fill of index ranges from a generator function.
//!
//! `RangeFill` writes every index of a 1D or 2D range exactly once and
//! returns only after all writes are done. Depending on the strategy the
//! work is spread over the rayon global pool; no ordering between indices
//! is promised, so generators must not depend on one.

use std::ops::Range;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::math::grid::Grid;

/// How a `RangeFill` distributes work.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FillStrategy {
    /// Always run on the calling thread.
    Sequential,
    /// Always use the rayon pool.
    Parallel,
    /// Parallel once the region reaches the configured threshold.
    #[default]
    Auto,
}

impl FromStr for FillStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(FillStrategy::Sequential),
            "parallel" => Ok(FillStrategy::Parallel),
            "auto" => Ok(FillStrategy::Auto),
            _ => Err(format!(
                "Unknown fill strategy: {}. Expected one of sequential, parallel, auto",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFill {
    strategy: FillStrategy,
    parallel_threshold: usize,
}

impl RangeFill {
    /// Region size at which `FillStrategy::Auto` switches to rayon.
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

    pub fn new(strategy: FillStrategy, parallel_threshold: usize) -> Self {
        Self {
            strategy,
            parallel_threshold,
        }
    }

    pub fn sequential() -> Self {
        Self::new(FillStrategy::Sequential, Self::DEFAULT_PARALLEL_THRESHOLD)
    }

    pub fn parallel() -> Self {
        Self::new(FillStrategy::Parallel, Self::DEFAULT_PARALLEL_THRESHOLD)
    }

    pub fn strategy(&self) -> FillStrategy {
        self.strategy
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    fn use_parallel(&self, len: usize) -> bool {
        match self.strategy {
            FillStrategy::Sequential => false,
            FillStrategy::Parallel => true,
            FillStrategy::Auto => len >= self.parallel_threshold,
        }
    }

    /// Write `f(i)` into `target[i]` for every `i` in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` does not lie inside `target`.
    pub fn fill_1d<T, F>(&self, target: &mut [T], range: Range<usize>, f: F)
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        assert!(
            range.start <= range.end && range.end <= target.len(),
            "fill range {:?} outside target of length {}",
            range,
            target.len()
        );
        let start = range.start;
        let region = &mut target[range];
        if self.use_parallel(region.len()) {
            log::trace!("parallel 1d fill of {} elements", region.len());
            region
                .par_iter_mut()
                .enumerate()
                .for_each(|(k, slot)| *slot = f(start + k));
        } else {
            for (k, slot) in region.iter_mut().enumerate() {
                *slot = f(start + k);
            }
        }
    }

    /// Allocate a vector of `len` elements where element `i` is `f(i)`.
    pub fn generate_1d<T, F>(&self, len: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        if self.use_parallel(len) {
            log::trace!("parallel 1d generate of {} elements", len);
            (0..len).into_par_iter().map(f).collect()
        } else {
            (0..len).map(f).collect()
        }
    }

    /// Write `f(r, c)` into `target[(r, c)]` for every `r` in `rows` and `c`
    /// in `cols`. Indices outside the region are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the region does not lie inside `target`.
    pub fn fill_2d<T, F>(
        &self,
        target: &mut Grid<T>,
        rows: Range<usize>,
        cols: Range<usize>,
        f: F,
    ) where
        T: Send,
        F: Fn(usize, usize) -> T + Sync + Send,
    {
        let (nrows, ncols) = target.shape();
        assert!(
            rows.start <= rows.end && rows.end <= nrows,
            "fill rows {:?} outside target with {} rows",
            rows,
            nrows
        );
        assert!(
            cols.start <= cols.end && cols.end <= ncols,
            "fill columns {:?} outside target with {} columns",
            cols,
            ncols
        );
        if rows.is_empty() || cols.is_empty() {
            return;
        }

        let first_row = rows.start;
        let band = &mut target.as_mut_slice()[rows.start * ncols..rows.end * ncols];
        let fill_row = |(k, row): (usize, &mut [T])| {
            let r = first_row + k;
            for c in cols.clone() {
                row[c] = f(r, c);
            }
        };

        if self.use_parallel(rows.len() * cols.len()) {
            log::trace!("parallel 2d fill of rows {:?} x columns {:?}", rows, cols);
            band.par_chunks_mut(ncols).enumerate().for_each(fill_row);
        } else {
            band.chunks_mut(ncols).enumerate().for_each(fill_row);
        }
    }
}

impl Default for RangeFill {
    fn default() -> Self {
        Self::new(FillStrategy::Auto, Self::DEFAULT_PARALLEL_THRESHOLD)
    }
}
