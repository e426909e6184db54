// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Scanning many independent sources at once.
//!
//! Each source gets its own [`Scanner`](crate::lexer::Scanner); the only
//! thing shared between threads is the read-only keyword table.
//!
//! # Example
//!
//! ```
//! use bugsy_lexer::parallel::scan_all;
//!
//! let outputs = scan_all(&["print 1;", "print \"two\";"]);
//! assert_eq!(outputs.len(), 2);
//! assert!(outputs.iter().all(|o| !o.has_errors()));
//! ```

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::lexer::{tokenize, ScanOutput};

/// Scans every source on the global rayon pool.
///
/// Outputs are returned in the same order as `sources`.
pub fn scan_all<'src>(sources: &[&'src str]) -> Vec<ScanOutput<'src>> {
    sources.par_iter().map(|source| tokenize(*source)).collect()
}

/// Scans sources on a dedicated thread pool.
pub struct ParallelScanner {
    /// Thread pool for CPU-bound work
    pool: ThreadPool,
}

impl ParallelScanner {
    /// Creates a scanner pool with the default number of threads.
    pub fn new() -> Result<Self, ThreadPoolBuildError> {
        Ok(Self {
            pool: ThreadPoolBuilder::new().build()?,
        })
    }

    /// Creates a scanner pool with a specific number of threads.
    pub fn with_threads(num_threads: usize) -> Result<Self, ThreadPoolBuildError> {
        Ok(Self {
            pool: ThreadPoolBuilder::new().num_threads(num_threads).build()?,
        })
    }

    /// Number of worker threads in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Scans every source in parallel, preserving input order.
    pub fn scan_all<'src>(&self, sources: &[&'src str]) -> Vec<ScanOutput<'src>> {
        self.pool.install(|| scan_all(sources))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCES: [&str; 4] = [
        "var a = 1;",
        "fun f(x) { return x * 2; }",
        "\"unterminated",
        "if (a != b) print a; // done",
    ];

    #[test]
    fn test_matches_sequential_scan() {
        let outputs = scan_all(&SOURCES);
        assert_eq!(outputs.len(), SOURCES.len());
        for (source, output) in SOURCES.iter().zip(&outputs) {
            assert_eq!(*output, tokenize(source));
        }
    }

    #[test]
    fn test_diagnostics_stay_with_their_source() {
        let outputs = scan_all(&SOURCES);
        let failing: Vec<_> = outputs.iter().map(|o| o.has_errors()).collect();
        assert_eq!(failing, vec![false, false, true, false]);
    }

    #[test]
    fn test_dedicated_pool() {
        let scanner = ParallelScanner::with_threads(2).unwrap();
        assert_eq!(scanner.threads(), 2);

        let outputs = scanner.scan_all(&SOURCES);
        assert_eq!(outputs, scan_all(&SOURCES));
    }

    #[test]
    fn test_empty_batch() {
        assert!(scan_all(&[]).is_empty());
    }
}
