//! Execution strategies for independent status queries.
//!
//! Every query spends nearly all of its time waiting on a `git` subprocess, so
//! overlapping them shortens wall-clock time roughly by the number of
//! repositories found. Callers hand over a list of futures and get their
//! outputs back; ordering of the outputs is strategy-specific and must not be
//! relied upon.

use futures::stream::{self, StreamExt};
use std::future::Future;
use std::num::NonZeroUsize;

/// How a batch of query futures is driven to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Await one task at a time, in the order given.
    #[default]
    Sequential,
    /// Keep up to `max_in_flight` tasks polled at once on the current
    /// execution context; outputs arrive in completion order.
    Concurrent { max_in_flight: NonZeroUsize },
}

impl ExecutionStrategy {
    /// One job means sequential; anything larger bounds concurrency.
    pub fn from_jobs(jobs: NonZeroUsize) -> Self {
        if jobs.get() == 1 {
            ExecutionStrategy::Sequential
        } else {
            ExecutionStrategy::Concurrent {
                max_in_flight: jobs,
            }
        }
    }

    /// Run every task and collect the outputs.
    pub async fn run_all<F, T>(&self, tasks: Vec<F>) -> Vec<T>
    where
        F: Future<Output = T>,
    {
        match *self {
            ExecutionStrategy::Sequential => {
                let mut outputs = Vec::with_capacity(tasks.len());
                for task in tasks {
                    outputs.push(task.await);
                }
                outputs
            }
            ExecutionStrategy::Concurrent { max_in_flight } => {
                stream::iter(tasks)
                    .buffer_unordered(max_in_flight.get())
                    .collect()
                    .await
            }
        }
    }
}
