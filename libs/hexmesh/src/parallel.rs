//! Conditionally parallel iteration over a phase's outer loop.
//!
//! Call sites import `rayon::prelude::*` under the `parallel` feature. Both
//! branches yield an indexed iterator, so `collect` keeps index order and
//! first-seen deduplication stays deterministic.

/// Conditionally parallel iterator over a range.
macro_rules! maybe_par_range {
    ($range:expr) => {{
        #[cfg(feature = "parallel")]
        {
            ($range).into_par_iter()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $range
        }
    }};
}

pub(crate) use maybe_par_range;
