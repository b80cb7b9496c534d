//! Batch allocation.
//!
//! Independent requests share no state, so a batch is allocated with rayon
//! according to [`BatchThreadCount`]. Results keep request order and each
//! request fails or succeeds on its own.

use allocforge_config::{AllocatorConfig, BatchThreadCount};
use allocforge_core::{AllocForgeError, AllocationRequest, AllocationResult, Result};
use rayon::prelude::*;
use tracing::info;

use crate::greedy::GreedyAllocator;


/// Allocates many independent requests, in parallel where configured.
///
/// # Example
///
/// ```
/// use allocforge_config::{AllocatorConfig, BatchThreadCount};
/// use allocforge_core::{AllocationRequest, Item};
/// use allocforge_solver::BatchAllocator;
///
/// let batch = BatchAllocator::new(
///     AllocatorConfig::default().with_batch_thread_count(BatchThreadCount::None),
/// );
/// let requests = vec![
///     AllocationRequest::new(5.0, vec![Item::new(10.0, 60.0)]),
///     AllocationRequest::new(-1.0, vec![Item::new(10.0, 60.0)]),
/// ];
///
/// let results = batch.allocate_batch(&requests).unwrap();
/// assert!(results[0].is_ok());
/// assert!(results[1].as_ref().unwrap_err().is_invalid_input());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchAllocator {
    allocator: GreedyAllocator,
}

impl BatchAllocator {
    pub fn new(config: AllocatorConfig) -> Self {
        Self {
            allocator: GreedyAllocator::new(config),
        }
    }

    pub fn thread_count(&self) -> BatchThreadCount {
        self.allocator.config().batch_thread_count
    }

    /// Allocates every request, returning one result per request in order.
    ///
    /// # Errors
    ///
    /// The outer `Result` fails only if a dedicated thread pool cannot be
    /// built. Per-request failures are reported in the inner results.
    pub fn allocate_batch(
        &self,
        requests: &[AllocationRequest],
    ) -> Result<Vec<Result<AllocationResult>>> {
        let thread_count = self.thread_count();
        info!(
            event = "batch_start",
            request_count = requests.len() as u64,
            thread_count = ?thread_count,
        );

        let results: Vec<Result<AllocationResult>> = match thread_count {
            BatchThreadCount::None => requests
                .iter()
                .map(|r| self.allocator.allocate_request(r))
                .collect(),
            BatchThreadCount::Auto => self.allocate_par(requests),
            BatchThreadCount::Count(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| {
                        AllocForgeError::Internal(format!("failed to build thread pool: {}", e))
                    })?;
                pool.install(|| self.allocate_par(requests))
            }
        };

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(
            event = "batch_end",
            request_count = requests.len() as u64,
            failed_count = failed as u64,
        );
        Ok(results)
    }

    fn allocate_par(&self, requests: &[AllocationRequest]) -> Vec<Result<AllocationResult>> {
        requests
            .par_iter()
            .map(|r| self.allocator.allocate_request(r))
            .collect()
    }
}
