//! Plan manager that runs each search on its own worker thread.
//!
//! A panic or a runaway search in one request cannot take down the caller:
//! the worker reports its result over a oneshot channel, can be cancelled
//! through a shared flag and is given a deadline by the caller.

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use goapforge_config::PlannerConfig;
use goapforge_core::{GoapError, Goal, Model, Result, WorldState};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::plan::ActionPlan;
use crate::planner::Planner;

/// Poll interval while waiting on a deadline.
const DEADLINE_POLL: Duration = Duration::from_millis(1);

/// Everything one planning request needs, owned so it can move to a worker.
#[derive(Debug, Clone)]
pub struct PlanJob {
    pub model: Model,
    pub initial_state: WorldState,
    pub goal: Goal,
    pub behavior: Option<String>,
}

/// Starts planning requests on worker threads.
#[derive(Debug, Clone, Default)]
pub struct PlanManager {
    config: PlannerConfig,
}

impl PlanManager {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Spawns a worker for `job` and returns immediately.
    pub fn submit(&self, job: PlanJob) -> Result<PlanHandle> {
        let plan_id = Uuid::new_v4();
        let terminate_flag = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = oneshot::channel();

        let config = self.config.clone();
        let flag = Arc::clone(&terminate_flag);
        let handle = thread::Builder::new()
            .name(format!("goap-plan-{}", plan_id))
            .spawn(move || {
                let result = run_job(job, config, flag, plan_id);
                // The receiver may already be gone; the result is then discarded.
                let _ = sender.send(result);
            })
            .map_err(|e| GoapError::Worker(e.to_string()))?;

        debug!(event = "plan_submitted", plan_id = %plan_id);
        Ok(PlanHandle {
            plan_id,
            terminate_flag,
            receiver,
            handle,
        })
    }
}

fn run_job(
    job: PlanJob,
    config: PlannerConfig,
    flag: Arc<AtomicBool>,
    plan_id: Uuid,
) -> Result<Option<ActionPlan>> {
    let mut planner = Planner::new(&job.model)
        .with_config(config)
        .with_terminate(flag)
        .with_plan_id(plan_id);
    if let Some(behavior) = job.behavior.as_deref() {
        planner = planner.with_behavior(behavior)?;
    }
    Ok(planner.plan(&job.initial_state, &job.goal)?)
}

/// A running planning request.
#[derive(Debug)]
pub struct PlanHandle {
    plan_id: Uuid,
    terminate_flag: Arc<AtomicBool>,
    receiver: oneshot::Receiver<Result<Option<ActionPlan>>>,
    handle: JoinHandle<()>,
}

impl PlanHandle {
    pub fn plan_id(&self) -> Uuid {
        self.plan_id
    }

    /// Asks the search to stop; it then returns its partial plan.
    pub fn terminate(&self) {
        self.terminate_flag.store(true, Ordering::SeqCst);
    }

    pub fn is_terminating(&self) -> bool {
        self.terminate_flag.load(Ordering::SeqCst)
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks until the worker delivers its result.
    ///
    /// Must not be called from within an async runtime; use [`wait`](Self::wait) there.
    pub fn join(self) -> Result<Option<ActionPlan>> {
        match self.receiver.blocking_recv() {
            Ok(result) => {
                let _ = self.handle.join();
                result
            }
            Err(_) => Err(worker_failure(self.plan_id, self.handle)),
        }
    }

    /// Blocks until the worker delivers its result or `deadline` passes.
    ///
    /// At the deadline the search is cancelled and its partial plan returned.
    pub fn join_with_deadline(mut self, deadline: Duration) -> Result<Option<ActionPlan>> {
        let started = Instant::now();
        loop {
            match self.receiver.try_recv() {
                Ok(result) => {
                    let _ = self.handle.join();
                    return result;
                }
                Err(TryRecvError::Closed) => return Err(worker_failure(self.plan_id, self.handle)),
                Err(TryRecvError::Empty) if started.elapsed() >= deadline => {
                    warn!(
                        event = "plan_deadline",
                        plan_id = %self.plan_id,
                        deadline_ms = u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX),
                    );
                    self.terminate();
                    return self.join();
                }
                Err(TryRecvError::Empty) => thread::sleep(DEADLINE_POLL),
            }
        }
    }

    /// Waits asynchronously for the worker's result.
    pub async fn wait(self) -> Result<Option<ActionPlan>> {
        match self.receiver.await {
            Ok(result) => result,
            Err(_) => Err(worker_failure(self.plan_id, self.handle)),
        }
    }
}

/// The worker dropped its sender without a result; collect its panic message.
fn worker_failure(plan_id: Uuid, handle: JoinHandle<()>) -> GoapError {
    let message = match handle.join() {
        Err(payload) => panic_message(payload.as_ref()),
        Ok(()) => "worker exited without a result".to_string(),
    };
    warn!(event = "worker_failed", plan_id = %plan_id, message = %message);
    GoapError::Worker(message)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
