//! Worker pool for combination scoring

use std::fmt;

use rayon::{ThreadPool, ThreadPoolBuilder};

use super::error::{HellwigError, HellwigResult};

/// How scoring work is distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parallelism {
    /// Plain sequential fold on the calling thread
    Sequential,
    /// Dedicated rayon pool with this many workers
    Threads(usize),
    /// Global rayon pool (one worker per core)
    #[default]
    Auto,
}

impl Parallelism {
    /// Map CLI flags: `--sequential` wins, `--threads 0` means auto.
    pub fn from_flags(threads: usize, sequential: bool) -> Self {
        match (sequential, threads) {
            (true, _) => Parallelism::Sequential,
            (false, 0) => Parallelism::Auto,
            (false, n) => Parallelism::Threads(n),
        }
    }
}

impl fmt::Display for Parallelism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parallelism::Sequential => write!(f, "sequential"),
            Parallelism::Threads(n) => write!(f, "{} threads", n),
            Parallelism::Auto => write!(f, "auto ({} threads)", rayon::current_num_threads()),
        }
    }
}

/// Runs search work according to a [`Parallelism`] setting.
pub struct Executor {
    parallelism: Parallelism,
    pool: Option<ThreadPool>,
}

impl Executor {
    pub fn new(parallelism: Parallelism) -> HellwigResult<Self> {
        let pool = match parallelism {
            Parallelism::Threads(n) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("hellwig-worker-{}", i))
                    .build()
                    .map_err(|e| {
                        HellwigError::config(format!("failed to start {} worker threads: {}", n, e))
                    })?,
            ),
            Parallelism::Sequential | Parallelism::Auto => None,
        };
        Ok(Self { parallelism, pool })
    }

    /// Whether scoring should use parallel iterators.
    pub fn is_parallel(&self) -> bool {
        self.parallelism != Parallelism::Sequential
    }

    /// Run `op` inside the dedicated pool, if any.
    pub fn install<R, OP>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}
