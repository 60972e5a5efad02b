use alloc::vec::Vec;
use core::time::Duration;
use std::time::Instant;

use log::{debug, warn};

use crate::{Config, ExecutionMode, KernelError, Outcome, Program, Result, Task};

/// The result of one task.
#[derive(Clone, Debug)]
pub struct TaskReport {
    pub name: &'static str,
    pub outcome: Result<Outcome>,
    pub elapsed: Duration,
}

/// The results of a run, in task order.
#[derive(Clone, Debug)]
pub struct Report {
    pub execution: ExecutionMode,
    pub tasks: Vec<TaskReport>,
}

impl Report {
    pub fn outcomes(&self) -> impl Iterator<Item = &Result<Outcome>> + '_ {
        self.tasks.iter().map(|task| &task.outcome)
    }

    pub fn is_success(&self) -> bool {
        self.tasks.iter().all(|task| task.outcome.is_ok())
    }
}

pub struct Runner {
    config: Config,
}

impl Runner {
    pub fn new(config: Config) -> Self {
        Runner { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run_program(&self, program: Program) -> Report {
        debug!("Running program '{program}'");
        self.run(&program.tasks())
    }

    /// Runs independent tasks. In threaded mode every task gets its own
    /// thread; they share no mutable state.
    pub fn run(&self, tasks: &[Task]) -> Report {
        let execution = self.config.execution();
        let tasks = match execution {
            ExecutionMode::Sequential => tasks.iter().map(|task| self.run_task(task)).collect(),
            ExecutionMode::Threaded => std::thread::scope(|scope| {
                let handles: Vec<_> = tasks.iter().map(|task| scope.spawn(move || self.run_task(task))).collect();
                handles
                    .into_iter()
                    .zip(tasks)
                    .map(|(handle, task)| handle.join().unwrap_or_else(|_| panicked(task)))
                    .collect()
            }),
        };

        Report { execution, tasks }
    }

    fn check(&self, task: &Task) -> Result<()> {
        match *task {
            Task::Fib { n } if n > self.config.max_fib_index() => {
                Err(KernelError::invalid("fib", "index exceeds the configured maximum"))
            }
            Task::Hanoi { disks, .. } if disks > self.config.max_hanoi_disks() => {
                Err(KernelError::invalid("hanoi", "disk count exceeds the configured maximum"))
            }
            Task::Gcd { a, b } if a.max(b) > self.config.max_gcd_operand() => {
                Err(KernelError::invalid("gcd", "operand exceeds the configured maximum"))
            }
            _ => Ok(()),
        }
    }

    fn run_task(&self, task: &Task) -> TaskReport {
        let name = task.name();
        let timestamp = Instant::now();
        let outcome = self.check(task).and_then(|()| task.run());
        let elapsed = timestamp.elapsed();

        match &outcome {
            Ok(value) => debug!("  {name}: {value} ({:.3}ms)", elapsed.as_secs_f64() * 1000.0),
            Err(error) => warn!("  {name}: {error}"),
        }

        TaskReport { name, outcome, elapsed }
    }
}

fn panicked(task: &Task) -> TaskReport {
    let name = task.name();
    warn!("  {name}: panicked");
    TaskReport {
        name,
        outcome: Err(KernelError::TaskPanicked { kernel: name }),
        elapsed: Duration::ZERO,
    }
}
