#![allow(clippy::exit)]
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use std::path::PathBuf;

use clap::Parser;
use textbook_kernels::{Config, ExecutionMode, KernelError, Outcome, Peg, Program, Runner, Task};


#[derive(Parser, Debug)]
#[clap(version)]
enum Args {
    /// Greatest common divisor of two positive integers.
    Gcd {
        #[clap(allow_negative_numbers = true)]
        a: i64,
        #[clap(allow_negative_numbers = true)]
        b: i64,
    },

    /// The n-th Fibonacci number.
    Fib {
        #[clap(allow_negative_numbers = true)]
        n: i64,
    },

    /// Bubble sorts the given values.
    Sort {
        #[clap(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Sorts the given values and binary searches them for ITEM.
    Search {
        #[clap(allow_negative_numbers = true)]
        item: i64,
        #[clap(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Counts the moves of a Tower of Hanoi.
    Hanoi {
        #[clap(allow_negative_numbers = true)]
        disks: i64,
        #[clap(long, default_value_t = 1, allow_negative_numbers = true)]
        src: i64,
        #[clap(long, default_value_t = 2, allow_negative_numbers = true)]
        aux: i64,
        #[clap(long, default_value_t = 3, allow_negative_numbers = true)]
        dest: i64,
        /// Print every move instead of only the count.
        #[clap(long)]
        moves: bool,
    },

    /// Sums the given values.
    Sum {
        #[clap(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Counts the occurrences of TARGET in TEXT.
    Count { target: char, text: String },

    /// Runs one of the demonstration programs.
    Run {
        program: Program,
        /// Run each task on its own thread.
        #[clap(long)]
        threaded: bool,
        /// Print the report as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Runs JSON test cases.
    Test { files: Vec<PathBuf> },
}

#[derive(serde::Serialize)]
#[serde(rename_all = "kebab-case")]
struct ReportJson {
    program: String,
    execution: String,
    tasks: Vec<TaskReportJson>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "kebab-case")]
struct TaskReportJson {
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    elapsed_us: u128,
}

fn run_program(program: Program, threaded: bool, json: bool) -> Result<(), String> {
    let mut config = Config::from_env().map_err(|error| error.to_string())?;
    if threaded {
        config.set_execution(ExecutionMode::Threaded);
    }

    let report = Runner::new(config).run_program(program);
    if json {
        let output = ReportJson {
            program: program.to_string(),
            execution: report.execution.to_string(),
            tasks: report
                .tasks
                .iter()
                .map(|task| {
                    let result = task.outcome.clone().and_then(Outcome::sentinel);
                    TaskReportJson {
                        name: task.name,
                        result: result.as_ref().ok().copied(),
                        error: result.err().map(|error| error.to_string()),
                        elapsed_us: task.elapsed.as_micros(),
                    }
                })
                .collect(),
        };

        let output = serde_json::to_string_pretty(&output).map_err(|error| error.to_string())?;
        println!("{output}");
    } else {
        for (index, task) in report.tasks.iter().enumerate() {
            match &task.outcome {
                Ok(outcome) => println!("task {index} ({}): {outcome}", task.name),
                Err(error) => println!("task {index} ({}): error: {error}", task.name),
            }
        }
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(format!("program '{program}' failed"))
    }
}

// Runs a single task with the configured limits applied.
fn run_task(task: Task) -> Result<(), String> {
    let config = Config::from_env().map_err(|error| error.to_string())?;
    let report = Runner::new(config).run(&[task]);
    match report.tasks.into_iter().next() {
        Some(task) => print_outcome(task.outcome),
        None => Err("no task was run".into()),
    }
}

fn print_outcome(outcome: Result<Outcome, KernelError>) -> Result<(), String> {
    let outcome = outcome.map_err(|error| error.to_string())?;
    println!("{outcome}");
    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let result = match args {
        Args::Gcd { a, b } => run_task(Task::Gcd { a, b }),
        Args::Fib { n } => run_task(Task::Fib { n }),
        Args::Sort { mut values } => {
            textbook_kernels::bubble_sort(&mut values);
            let values: Vec<String> = values.iter().map(ToString::to_string).collect();
            println!("{}", values.join(" "));
            Ok(())
        }
        Args::Search { item, mut values } => {
            textbook_kernels::bubble_sort(&mut values);
            print_outcome(Ok(Outcome::Index(textbook_kernels::binary_search(&values, &item))))
        }
        Args::Hanoi {
            disks,
            src,
            aux,
            dest,
            moves: false,
        } => run_task(Task::Hanoi {
            disks,
            src: Peg(src),
            aux: Peg(aux),
            dest: Peg(dest),
        }),
        Args::Hanoi {
            disks,
            src,
            aux,
            dest,
            moves: true,
        } => textbook_kernels::hanoi_solve(disks, Peg(src), Peg(aux), Peg(dest))
            .map(|moves| {
                for step in moves {
                    println!("disk {}: {} -> {}", step.disk, step.from, step.to);
                }
            })
            .map_err(|error| error.to_string()),
        Args::Sum { values } => print_outcome(textbook_kernels::sum_sequence(&values).map(Outcome::Total)),
        Args::Count { target, text } => {
            let data: Vec<char> = text.chars().collect();
            print_outcome(Ok(Outcome::Count(textbook_kernels::count_char(&data, target))))
        }
        Args::Run { program, threaded, json } => run_program(program, threaded, json),
        Args::Test { files } => test::main(files),
    };

    if let Err(error) = result {
        eprintln!("ERROR: {error}");
        std::process::exit(1);
    }
}
