//! Fixed-size worker pool for independent tool invocations.

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::domain::{AppError, BatchReport, JobOutcome, JobStatus, ToolInvocation};
use crate::ports::ToolRunner;

/// Worker count: `requested` when non-zero, otherwise one per available core.
pub fn worker_count(requested: usize) -> usize {
    if requested > 0 {
        return requested;
    }
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// Run every invocation on a pool of `workers` threads.
///
/// Each job prints `input -> output` when it starts. A failing invocation does
/// not stop the others; its error is recorded in the report. Outcomes keep the
/// order of `invocations`.
pub fn run_batch<R: ToolRunner>(
    runner: &R,
    invocations: &[ToolInvocation],
    workers: usize,
) -> Result<BatchReport, AppError> {
    if invocations.is_empty() {
        return Ok(BatchReport::default());
    }

    let pool = ThreadPoolBuilder::new().num_threads(workers.max(1)).build()?;
    log::info!("running {} job(s) on {} worker(s)", invocations.len(), workers.max(1));

    let outcomes = pool.install(|| {
        invocations
            .par_iter()
            .map(|invocation| {
                println!("{} -> {}", invocation.input.display(), invocation.output.display());
                let status = match runner.run(invocation) {
                    Ok(()) => JobStatus::Succeeded,
                    Err(e) => {
                        log::warn!("{}: {}", invocation.input.display(), e);
                        JobStatus::Failed(e.to_string())
                    }
                };
                JobOutcome {
                    input: invocation.input.clone(),
                    output: invocation.output.clone(),
                    status,
                }
            })
            .collect::<Vec<_>>()
    });

    Ok(BatchReport::new(outcomes))
}
