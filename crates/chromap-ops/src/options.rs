//! Execution options for whole-image sweeps.
//!
//! # Example
//!
//! ```rust
//! use chromap_ops::{Execution, MapOptions};
//!
//! let opts = MapOptions::default()
//!     .with_execution(Execution::Auto)
//!     .with_parallel_threshold(4096);
//! assert_eq!(opts.parallel_threshold, 4096);
//! ```

/// How a sweep distributes work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Execution {
    /// Always run on the calling thread.
    Sequential,
    /// Always split rows across the rayon pool.
    Parallel,
    /// Go parallel once the image reaches
    /// [`MapOptions::parallel_threshold`] pixels.
    #[default]
    Auto,
}

/// Options shared by the pixel mapper and the grayscale routine.
///
/// Without the `parallel` feature every mode runs sequentially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapOptions {
    /// Execution mode.
    pub execution: Execution,
    /// Minimum pixel count before [`Execution::Auto`] goes parallel.
    pub parallel_threshold: usize,
}

impl MapOptions {
    /// Default pixel count at which [`Execution::Auto`] switches to parallel.
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 128 * 128;

    /// Options that never leave the calling thread.
    pub fn sequential() -> Self {
        Self::default().with_execution(Execution::Sequential)
    }

    /// Sets the execution mode.
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Sets the [`Execution::Auto`] threshold, in pixels.
    pub fn with_parallel_threshold(mut self, pixels: usize) -> Self {
        self.parallel_threshold = pixels;
        self
    }

    /// Whether a sweep over `pixels` pixels runs in parallel.
    pub fn runs_parallel(&self, pixels: usize) -> bool {
        if !cfg!(feature = "parallel") {
            return false;
        }
        match self.execution {
            Execution::Sequential => false,
            Execution::Parallel => true,
            Execution::Auto => pixels >= self.parallel_threshold,
        }
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            execution: Execution::Auto,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
