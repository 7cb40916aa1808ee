//! Batch execution strategies.

use rayon::prelude::*;

/// How a batch of polygons is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingMode {
    /// Single-threaded processing
    Sequential,
    /// Parallel processing on the global rayon pool
    #[default]
    Parallel,
    /// Parallel processing on a dedicated pool with this many threads
    ParallelWith(usize),
}

impl ProcessingMode {
    /// Maps `f` over `0..len`, returning results in index order.
    ///
    /// If a dedicated pool cannot be built the global pool is used.
    pub fn par_map<T, F>(&self, len: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        match self {
            ProcessingMode::Sequential => (0..len).map(f).collect(),
            ProcessingMode::Parallel => (0..len).into_par_iter().map(f).collect(),
            ProcessingMode::ParallelWith(threads) => {
                match rayon::ThreadPoolBuilder::new().num_threads(*threads).build() {
                    Ok(pool) => pool.install(|| (0..len).into_par_iter().map(f).collect()),
                    Err(e) => {
                        log::warn!("Failed to build {}-thread pool, using global pool: {}", threads, e);
                        (0..len).into_par_iter().map(f).collect()
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_agree_and_keep_order() {
        let square = |i: usize| i * i;
        let expected: Vec<usize> = (0..100).map(square).collect();

        for mode in [
            ProcessingMode::Sequential,
            ProcessingMode::Parallel,
            ProcessingMode::ParallelWith(3),
        ] {
            assert_eq!(mode.par_map(100, square), expected, "{:?}", mode);
        }
    }

    #[test]
    fn test_default_is_parallel() {
        assert_eq!(ProcessingMode::default(), ProcessingMode::Parallel);
    }
}
