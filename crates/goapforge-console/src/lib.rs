//! Colorful console output for planner events.
//!
//! Provides a custom `tracing` layer that formats planner events with colors.
//! Output goes to stderr so that plans printed on stdout stay machine readable.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (plan start/end)
//! - **WARN**: Searches that stopped early or found no plan
//! - **DEBUG**: Node expansions
//! - **TRACE**: Disabled transitions and per-iteration bookkeeping

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static PLAN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crates whose events the console layer renders.
const TARGETS: [&str; 3] = ["goapforge_planner", "goapforge_core", "goapforge"];

/// Initializes the planner console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default `goapforge_planner=info` directive.
pub fn init() {
    init_with_level(LevelFilter::INFO);
}

/// Like [`init`], with an explicit default level for the planner crates.
pub fn init_with_level(level: LevelFilter) {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(directive("goapforge_planner", level))
            .from_env_lossy()
            .add_directive(directive("goapforge", level));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlannerConsoleLayer)
            .try_init();
    });
}

fn directive(target: &str, level: LevelFilter) -> Directive {
    // A target plus a level filter always forms a valid directive.
    format!("{}={}", target, level)
        .parse()
        .unwrap_or_else(|_| Directive::from(level))
}

// Marks the start of a search for elapsed time tracking.
fn mark_plan_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    PLAN_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since the last search started.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = PLAN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
  ____  ___    _    ____  _____
 / ___|/ _ \  / \  |  _ \|  ___|__  _ __ __ _  ___
| |  _| | | |/ _ \ | |_) | |_ / _ \| '__/ _` |/ _ \
| |_| | |_| / ___ \|  __/|  _| (_) | | | (_| |  __/
 \____|\___/_/   \_\_|   |_|  \___/|_|  \__, |\___|
                                        |___/
"#;

    let version_line = format!(
        "                v{} - Goal-Oriented Action Planner\n",
        VERSION
    );

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats planner events with colors.
pub struct PlannerConsoleLayer;

impl<S: Subscriber> Layer<S> for PlannerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !is_planner_target(metadata.target()) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

fn is_planner_target(target: &str) -> bool {
    TARGETS.iter().any(|prefix| {
        target == *prefix
            || target
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with("::"))
    })
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    plan_id: Option<String>,
    goal: Option<String>,
    status: Option<String>,
    reason: Option<String>,
    transition: Option<String>,
    condition: Option<String>,
    variable_count: Option<u64>,
    transition_count: Option<u64>,
    iteration_limit: Option<u64>,
    iteration: Option<u64>,
    iterations: Option<u64>,
    expanded: Option<u64>,
    generated: Option<u64>,
    node: Option<u64>,
    open: Option<u64>,
    total_steps: Option<u64>,
    duration_ms: Option<u64>,
    deadline_ms: Option<u64>,
    total_cost: Option<f64>,
    cost: Option<f64>,
    heuristic: Option<f64>,
    distance: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "variable_count" => self.variable_count = Some(value),
            "transition_count" => self.transition_count = Some(value),
            "iteration_limit" => self.iteration_limit = Some(value),
            "iteration" => self.iteration = Some(value),
            "iterations" => self.iterations = Some(value),
            "expanded" => self.expanded = Some(value),
            "generated" => self.generated = Some(value),
            "node" => self.node = Some(value),
            "open" => self.open = Some(value),
            "total_steps" => self.total_steps = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "deadline_ms" => self.deadline_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "total_cost" => self.total_cost = Some(value),
            "cost" => self.cost = Some(value),
            "heuristic" => self.heuristic = Some(value),
            "distance" => self.distance = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let slot = match field.name() {
            "event" => &mut self.event,
            "plan_id" => &mut self.plan_id,
            "goal" => &mut self.goal,
            "status" => &mut self.status,
            "reason" => &mut self.reason,
            "transition" => &mut self.transition,
            "condition" => &mut self.condition,
            _ => return,
        };
        *slot = Some(value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "plan_start" => format_plan_start(v),
        "plan_end" => format_plan_end(v),
        "converge_failed" => format_converge_failed(v),
        "no_plan" => format_no_plan(v),
        "plan_deadline" => format_deadline(v),
        "node_expanded" => format_node_expanded(v, level),
        "transition_disabled" => format_transition_disabled(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn short_id(plan_id: Option<&str>) -> &str {
    let id = plan_id.unwrap_or("-");
    id.get(..8).unwrap_or(id)
}

fn format_plan_start(v: &EventVisitor) -> String {
    mark_plan_start();

    let mut output = format!(
        "{} {} Planning {} │ {} variables │ {} transitions",
        format_elapsed(),
        "▶".bright_green().bold(),
        short_id(v.plan_id.as_deref()).bright_black(),
        format_count(v.variable_count.unwrap_or(0)).bright_yellow(),
        format_count(v.transition_count.unwrap_or(0)).bright_yellow(),
    );

    if let Some(limit) = v.iteration_limit {
        output.push_str(&format!(
            " │ {} iteration limit",
            format_count(limit).bright_yellow()
        ));
    }

    if let Some(goal) = v.goal.as_deref() {
        output.push_str(&format!(" │ goal {}", goal.bright_magenta()));
    }

    output
}

fn format_plan_end(v: &EventVisitor) -> String {
    let status = v.status.as_deref().unwrap_or("UNKNOWN");
    let solved = status == "SOLVED";
    let status_colored = if solved {
        status.bright_green().bold().to_string()
    } else {
        status.bright_yellow().bold().to_string()
    };

    format!(
        "{} {} Planning complete │ {} │ {} steps │ cost {} │ {} iterations │ {} expanded │ {} generated │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        status_colored,
        format_count(v.total_steps.unwrap_or(0)).white(),
        format_cost(v.total_cost.unwrap_or(0.0)),
        format_count(v.iterations.unwrap_or(0)).white(),
        format_count(v.expanded.unwrap_or(0)).white(),
        format_count(v.generated.unwrap_or(0)).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_converge_failed(v: &EventVisitor) -> String {
    format!(
        "{} {} Search stopped │ {} │ {} iterations",
        format_elapsed(),
        "◆".bright_yellow().bold(),
        v.reason.as_deref().unwrap_or("UNKNOWN").bright_yellow(),
        format_count(v.iterations.unwrap_or(0)).white(),
    )
}

fn format_no_plan(v: &EventVisitor) -> String {
    format!(
        "{} {} No plan │ search space exhausted after {} iterations │ {} expanded │ {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        format_count(v.iterations.unwrap_or(0)).white(),
        format_count(v.expanded.unwrap_or(0)).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_deadline(v: &EventVisitor) -> String {
    format!(
        "{} {} Deadline reached for {} after {}, cancelling",
        format_elapsed(),
        "⏱".bright_red(),
        short_id(v.plan_id.as_deref()).bright_black(),
        format_duration_ms(v.deadline_ms.unwrap_or(0)).yellow(),
    )
}

fn format_node_expanded(v: &EventVisitor, level: Level) -> String {
    if level < Level::DEBUG {
        return String::new();
    }

    format!(
        "{} {} Iteration {:>8} │ node {:>8} │ cost {} │ h {} │ {} open",
        format_elapsed(),
        "→".bright_blue(),
        format_count(v.iteration.unwrap_or(0)).bright_black(),
        format_count(v.node.unwrap_or(0)).bright_black(),
        format_cost(v.cost.unwrap_or(0.0)),
        format_cost(v.heuristic.unwrap_or(0.0)),
        format_count(v.open.unwrap_or(0)).bright_black(),
    )
}

fn format_transition_disabled(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} {} disabled │ {} │ distance {}",
        format_elapsed(),
        "·".bright_black(),
        v.transition.as_deref().unwrap_or("?").bright_black(),
        v.condition.as_deref().unwrap_or("?").bright_black(),
        format_cost(v.distance.unwrap_or(0.0)).bright_black(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_cost(cost: f64) -> String {
    if cost.is_infinite() {
        return "∞".bright_red().to_string();
    }
    let text = if cost.fract() == 0.0 && cost.abs() < 1e15 {
        format!("{}", cost as i64)
    } else {
        format!("{:.3}", cost)
    };
    text.bright_white().to_string()
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
