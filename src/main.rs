use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cpu_sched::models::Algorithm;
use cpu_sched::report::{ComparisonTable, GanttChart, ResultsTable, TraceView};
use cpu_sched::runner::compare;
use cpu_sched::workload::{RandomSpec, Workload};

/// Compare SPN, SRN and HRRN CPU scheduling on a process set.
#[derive(Debug, Parser)]
#[command(name = "cpu-sched", version)]
struct Args {
    /// JSON workload file (defaults to the built-in five-process sample).
    #[arg(short, long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Algorithms to run, in order (spn, srn, hrrn). Defaults to all three.
    #[arg(short, long = "algorithm", value_name = "NAME")]
    algorithms: Vec<Algorithm>,

    /// Generate a random workload with this many processes.
    #[arg(long, value_name = "COUNT")]
    random: Option<u32>,

    /// Seed for --random.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Latest arrival time for --random.
    #[arg(long, default_value_t = RandomSpec::default().max_arrival)]
    max_arrival: i64,

    /// Longest burst time for --random.
    #[arg(long, default_value_t = RandomSpec::default().max_burst)]
    max_burst: i64,

    /// Print a Gantt chart for each run.
    #[arg(long)]
    gantt: bool,

    /// Skip the per-event trace.
    #[arg(long)]
    no_trace: bool,

    /// Emit schedules, summary and KPIs as JSON instead of text.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn workload(&self) -> anyhow::Result<Workload> {
        if let Some(path) = &self.input {
            return Workload::from_path(path)
                .with_context(|| format!("failed to load workload from {}", path.display()));
        }
        if let Some(count) = self.random {
            let spec = RandomSpec {
                max_arrival: self.max_arrival,
                max_burst: self.max_burst,
            };
            return Ok(Workload::random(count, &spec, self.seed));
        }
        Ok(Workload::sample())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let workload = args.workload()?;
    let algorithms = if args.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        args.algorithms.clone()
    };

    let comparison = compare(&workload, &algorithms).context("simulation failed")?;

    if args.json {
        println!("{}", comparison.to_json()?);
        return Ok(());
    }

    for schedule in &comparison.schedules {
        if !args.no_trace {
            println!("{}", TraceView(schedule));
        }
        println!("{}", ResultsTable(schedule));
        if args.gantt {
            println!("{}", GanttChart(schedule));
        }
        println!("{}", "=".repeat(60));
    }
    print!("{}", ComparisonTable(&comparison));

    Ok(())
}
