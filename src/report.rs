//! Human-readable presentation of schedules.
//!
//! Everything here is a pure consumer of [`Schedule`] / [`Comparison`]
//! data; nothing in the simulation depends on it. Each view implements
//! `Display`, so callers can `print!` it or `to_string()` it.

use std::fmt::{self, Display, Formatter};

use crate::models::{EventKind, Schedule, TraceEvent};
use crate::runner::Comparison;
use crate::scheduler::ScheduleKpi;

/// Event trace, one line per event.
pub struct TraceView<'a>(pub &'a Schedule);

/// Per-process results with averages, utilization and occupancy.
pub struct ResultsTable<'a>(pub &'a Schedule);

/// ASCII Gantt chart of the timeline.
pub struct GanttChart<'a>(pub &'a Schedule);

/// One line per algorithm: average turnaround and waiting time.
pub struct ComparisonTable<'a>(pub &'a Comparison);

/// Describes a single event, without its timestamp.
pub fn describe(event: &TraceEvent) -> String {
    match event.kind {
        EventKind::Arrive { pid } => format!("P{pid} arrives"),
        EventKind::Start { pid } => format!("P{pid} starts"),
        EventKind::Resume { pid } => format!("P{pid} resumes"),
        EventKind::Preempt { pid, by } => format!("P{pid} preempted by P{by}"),
        EventKind::Complete { pid } => format!("P{pid} completes"),
        EventKind::Idle => "CPU idle".to_string(),
        EventKind::RatioEvaluated { pid, waited, ratio } => {
            format!("P{pid} response ratio (waited {waited}) = {ratio:.2}")
        }
    }
}

impl Display for TraceView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let schedule = self.0;
        writeln!(
            f,
            "=== {} ({}) ===",
            schedule.algorithm,
            schedule.algorithm.description()
        )?;
        writeln!(f, "{:>5}  Event", "Time")?;
        for event in &schedule.trace {
            writeln!(f, "{:>5}  {}", event.time, describe(event))?;
        }
        Ok(())
    }
}

impl Display for ResultsTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let schedule = self.0;
        let kpi = ScheduleKpi::calculate(schedule);

        writeln!(f, "=== {} Results ===", schedule.algorithm)?;
        writeln!(
            f,
            "{:<5} {:>4} {:>4} {:>4} {:>4} {:>4}",
            "PID", "AT", "BT", "CT", "TAT", "WT"
        )?;
        for p in schedule.processes_by_id() {
            writeln!(
                f,
                "{:<5} {:>4} {:>4} {:>4} {:>4} {:>4}",
                format!("P{}", p.id),
                p.arrival_time,
                p.burst_time,
                opt(p.completion_time),
                opt(p.turnaround_time),
                opt(p.waiting_time),
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Average TAT: {:.2}", kpi.avg_turnaround)?;
        writeln!(f, "Average WT: {:.2}", kpi.avg_waiting)?;
        writeln!(f, "Average RT: {:.2}", kpi.avg_response)?;
        writeln!(f, "CPU Utilization: {:.0}%", kpi.cpu_utilization * 100.0)?;
        writeln!(f, "CPU Occupancy: {:.2}%", kpi.occupancy * 100.0)?;
        if schedule.algorithm.is_preemptive() {
            writeln!(f, "Preemptions: {}", kpi.preemptions)?;
        }
        Ok(())
    }
}

fn opt(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

impl Display for GanttChart<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let segments = self.0.timeline.segments();
        if segments.is_empty() {
            return writeln!(f, "(empty)");
        }

        let mut bar = String::from("|");
        let mut axis = String::new();
        for seg in segments {
            let label = match seg.pid {
                Some(pid) => format!("P{pid}"),
                None => "--".to_string(),
            };
            let width = (seg.duration() as usize * 2).max(label.len() + 2);
            bar.push_str(&format!("{label:^width$}|"));

            let tick = seg.start.to_string();
            axis.push_str(&format!("{tick:<w$}", w = width + 1));
        }
        axis.push_str(&self.0.makespan.to_string());

        writeln!(f, "{bar}")?;
        writeln!(f, "{}", axis.trim_end())
    }
}

impl Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "SUMMARY COMPARISON")?;
        for row in self.0.summary() {
            writeln!(
                f,
                "{:<6} | Avg TAT: {:>6.2} | Avg WT: {:>6.2}",
                row.algorithm.name(),
                row.avg_turnaround,
                row.avg_waiting
            )?;
        }
        Ok(())
    }
}
