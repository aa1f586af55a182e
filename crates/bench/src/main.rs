use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};

use matserve_bench::fixtures::{self, TasksFile};
use matserve_bench::runner;
use matserve_bench::verify::{self, Verdict};
use matserve_core::task::MATRIX_MULTIPLICATION;

/// Benchmark driver for the matserve compute service.
#[derive(Parser)]
#[command(name = "matserve-bench", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Append a random task fixture to the tasks file.
    AddTask {
        /// Task name (only `matrix_multiplication` is supported).
        task_name: String,
        /// Operand size as RxC, e.g. `100x100`. A is RxC, B is CxR.
        size: String,
        /// Fixture file to append to.
        #[arg(long, default_value = "tasks.json")]
        tasks_file: PathBuf,
    },
    /// Replay the tasks file against a running server and report timings.
    Run {
        /// Server URL.
        #[arg(long, default_value = "http://localhost:3000")]
        url: String,
        /// Fixture file to replay.
        #[arg(long, default_value = "tasks.json")]
        tasks_file: PathBuf,
    },
    /// Recompute a server-written results file and report per-entry verdicts.
    Verify {
        /// Results file written by the server.
        results_file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matserve_bench=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::AddTask {
            task_name,
            size,
            tasks_file,
        } => {
            if task_name != MATRIX_MULTIPLICATION {
                bail!("unknown task: {task_name}");
            }
            let (rows, cols) = fixtures::parse_size(&size)?;

            let mut file = TasksFile::load(&tasks_file)?;
            file.tasks
                .push(fixtures::random_multiplication_task(rows, cols));
            file.save(&tasks_file)?;

            println!(
                "Added task '{task_name}' with matrices of dimensions [{rows}x{cols}] and [{cols}x{rows}]"
            );
        }

        Command::Run { url, tasks_file } => {
            let file = TasksFile::load(&tasks_file)?;
            if file.tasks.is_empty() {
                bail!("no tasks in {}", tasks_file.display());
            }

            let reports = runner::run_tasks(&url, &file.tasks).await;
            for report in &reports {
                println!(
                    "Task: {}, Time: {} ms, Status: {}",
                    report.task_name, report.elapsed_ms, report.status
                );
            }
        }

        Command::Verify { results_file } => {
            let verdicts = verify::verify_file(&results_file)?;
            let mut failures = 0usize;
            for (i, verdict) in verdicts.iter().enumerate() {
                match verdict {
                    Verdict::Correct => {
                        println!("Entry #{i}: multiplication result is correct.")
                    }
                    Verdict::Incorrect => {
                        failures += 1;
                        println!("Entry #{i}: ERROR - multiplication result is incorrect.")
                    }
                    Verdict::UnknownTask => {
                        println!("Entry #{i}: unknown task type, skipped.")
                    }
                }
            }
            if failures > 0 {
                bail!("{failures} incorrect entries");
            }
        }
    }

    Ok(())
}
