#![cfg(test)]

use alloc::vec;
use alloc::vec::Vec;

use crate::{Config, ExecutionMode, KernelError, Outcome, Peg, Program, Result, Runner, Task};

fn outcomes(program: Program) -> Vec<Result<Outcome>> {
    program.tasks().iter().map(Task::run).collect()
}

#[test]
fn test_fibonacci_gcd_program() {
    assert_eq!(outcomes(Program::FibonacciGcd), vec![Ok(Outcome::Value(51)), Ok(Outcome::Value(2584))]);
}

#[test]
fn test_binary_search_hanoi_program() {
    assert_eq!(
        outcomes(Program::BinarySearchHanoi),
        vec![Ok(Outcome::Index(Some(5))), Ok(Outcome::Value(15))]
    );
}

#[test]
fn test_binary_sum_count_program() {
    assert_eq!(
        outcomes(Program::BinarySumCount),
        vec![Ok(Outcome::Index(Some(7))), Ok(Outcome::Total(19)), Ok(Outcome::Count(6))]
    );
}

#[test]
fn test_program_names_round_trip() {
    for program in Program::ALL {
        assert_eq!(program.name().parse::<Program>(), Ok(program));
    }

    assert!(matches!("towers".parse::<Program>(), Err(KernelError::InvalidConfig(_))));
}

#[test]
fn test_missing_item_reports_sentinel() {
    let task = Task::SortSearch {
        data: vec![4, 2, 8],
        item: 5,
    };

    let outcome = task.run().unwrap();
    assert_eq!(outcome, Outcome::Index(None));
    assert_eq!(outcome.sentinel(), Ok(-1));
    assert_eq!(alloc::format!("{outcome}"), "-1");
}

#[test]
fn test_sentinel_rejects_values_beyond_i64() {
    assert_eq!(Outcome::Value(i64::MAX as u64).sentinel(), Ok(i64::MAX));
    assert_eq!(
        Outcome::Value(u64::MAX).sentinel(),
        Err(KernelError::Overflow { kernel: "sentinel" })
    );
    assert_eq!(Outcome::Total(-7).sentinel(), Ok(-7));
    assert_eq!(Outcome::Index(Some(5)).sentinel(), Ok(5));
    assert_eq!(alloc::format!("{}", Outcome::Value(u64::MAX)), "18446744073709551615");
}

#[test]
fn test_sort_search_leaves_input_untouched() {
    let task = Task::SortSearch {
        data: vec![3, 1, 2],
        item: 3,
    };

    assert_eq!(task.run(), Ok(Outcome::Index(Some(2))));
    assert_eq!(
        task,
        Task::SortSearch {
            data: vec![3, 1, 2],
            item: 3
        }
    );
}

#[test]
fn test_threaded_matches_sequential() {
    let mut config = Config::new();
    let sequential = Runner::new(config.clone());
    config.set_execution(ExecutionMode::Threaded);
    let threaded = Runner::new(config);

    for program in Program::ALL {
        let a = sequential.run_program(program);
        let b = threaded.run_program(program);
        assert_eq!(a.execution, ExecutionMode::Sequential);
        assert_eq!(b.execution, ExecutionMode::Threaded);
        assert!(a.is_success());
        assert!(a.outcomes().eq(b.outcomes()));

        let names: Vec<_> = b.tasks.iter().map(|task| task.name).collect();
        let expected: Vec<_> = program.tasks().iter().map(Task::name).collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn test_runner_reports_failures_per_task() {
    let runner = Runner::new(Config::new());
    let report = runner.run(&[
        Task::Gcd { a: 0, b: 3 },
        Task::Hanoi {
            disks: 3,
            src: Peg(1),
            aux: Peg(2),
            dest: Peg(3),
        },
    ]);

    assert!(!report.is_success());
    assert!(matches!(report.tasks[0].outcome, Err(KernelError::InvalidArgument { kernel: "gcd", .. })));
    assert_eq!(report.tasks[1].outcome, Ok(Outcome::Value(7)));
}

#[test]
fn test_runner_enforces_fib_limit() {
    let mut config = Config::new();
    config.set_max_fib_index(10);
    let runner = Runner::new(config);

    let report = runner.run(&[Task::Fib { n: 10 }, Task::Fib { n: 11 }]);
    assert_eq!(report.tasks[0].outcome, Ok(Outcome::Value(55)));
    assert!(matches!(report.tasks[1].outcome, Err(KernelError::InvalidArgument { kernel: "fib", .. })));
}

#[test]
fn test_runner_enforces_hanoi_limit() {
    let mut config = Config::new();
    config.set_max_hanoi_disks(12);
    let runner = Runner::new(config);

    let hanoi = |disks| Task::Hanoi {
        disks,
        src: Peg(1),
        aux: Peg(2),
        dest: Peg(3),
    };

    let report = runner.run(&[hanoi(12), hanoi(13), hanoi(63)]);
    assert_eq!(report.tasks[0].outcome, Ok(Outcome::Value(4095)));
    assert!(matches!(report.tasks[1].outcome, Err(KernelError::InvalidArgument { kernel: "hanoi", .. })));
    assert!(matches!(report.tasks[2].outcome, Err(KernelError::InvalidArgument { kernel: "hanoi", .. })));
}

#[test]
fn test_runner_default_rejects_unbounded_hanoi() {
    let runner = Runner::new(Config::new());
    let report = runner.run(&[Task::Hanoi {
        disks: Config::DEFAULT_MAX_HANOI_DISKS + 1,
        src: Peg(1),
        aux: Peg(2),
        dest: Peg(3),
    }]);

    assert!(matches!(report.tasks[0].outcome, Err(KernelError::InvalidArgument { kernel: "hanoi", .. })));
}

#[test]
fn test_runner_enforces_gcd_limit() {
    let mut config = Config::new();
    config.set_max_gcd_operand(1000);
    let runner = Runner::new(config);

    let report = runner.run(&[Task::Gcd { a: 1000, b: 1 }, Task::Gcd { a: 1, b: 1001 }, Task::Gcd { a: 1, b: i64::MAX }]);
    assert_eq!(report.tasks[0].outcome, Ok(Outcome::Value(1)));
    assert!(matches!(report.tasks[1].outcome, Err(KernelError::InvalidArgument { kernel: "gcd", .. })));
    assert!(matches!(report.tasks[2].outcome, Err(KernelError::InvalidArgument { kernel: "gcd", .. })));
}
