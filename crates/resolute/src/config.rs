//! Prover configuration types.

use std::time::Duration;

/// Configuration for the saturation loop.
///
/// The three budgets (`max_iterations`, `max_clauses`, `timeout`) are
/// independent; whichever is hit first ends the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProverConfig {
    /// Given-clause iterations before giving up (0 means no limit)
    pub max_iterations: usize,
    /// Clauses in the store before giving up (0 means no limit)
    pub max_clauses: usize,
    /// Resolvents with more literals than this are discarded (0 means no limit)
    pub max_clause_size: usize,
    /// Wall-clock budget (zero means no limit)
    pub timeout: Duration,
    /// Threads used to evaluate clause pairs; 1 keeps everything on the caller's thread
    pub workers: usize,
}

impl Default for ProverConfig {
    fn default() -> Self {
        ProverConfig {
            max_iterations: 0, // 0 means no limit
            max_clauses: 0,    // 0 means no limit
            max_clause_size: 100,
            timeout: Duration::from_secs(60),
            workers: 1,
        }
    }
}

impl ProverConfig {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_max_clauses(mut self, max_clauses: usize) -> Self {
        self.max_clauses = max_clauses;
        self
    }

    pub fn with_max_clause_size(mut self, max_clause_size: usize) -> Self {
        self.max_clause_size = max_clause_size;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// At least one worker is always used
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProverConfig::default();
        assert_eq!(config.max_iterations, 0);
        assert_eq!(config.max_clauses, 0);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.workers, 1);
    }

    #[test]
    fn test_builder() {
        let config = ProverConfig::default()
            .with_max_iterations(50)
            .with_timeout(Duration::from_millis(10))
            .with_workers(0);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.timeout, Duration::from_millis(10));
        assert_eq!(config.workers, 1);
    }
}
