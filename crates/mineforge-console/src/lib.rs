//! Colorful console output for enumeration events.
//!
//! Provides a custom `tracing` layer that formats enumerator events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (enumeration and island start/end)
//! - **WARN**: Aborted runs
//! - **DEBUG**: One line per processed layer
//! - **TRACE**: Individual pruned branches

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static RUN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target prefix of the events the console layer renders.
const TARGET: &str = "mineforge_solver";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the MineForge banner and sets up tracing. `RUST_LOG` overrides
/// the default `mineforge_solver=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let mut builder = EnvFilter::builder();
        if let Ok(directive) = "mineforge_solver=info".parse::<Directive>() {
            builder = builder.with_default_directive(directive);
        }
        let filter = builder.from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(EnumerationConsoleLayer)
            .try_init();
    });
}

// Marks the start of a run for elapsed time tracking.
fn mark_run_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    RUN_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = RUN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 __  __ _            _____
|  \/  (_)_ __   ___|  ___|__  _ __ __ _  ___
| |\/| | | '_ \ / _ \ |_ / _ \| '__/ _` |/ _ \
| |  | | | | | |  __/  _| (_) | | | (_| |  __/
|_|  |_|_|_| |_|\___|_|  \___/|_|  \__, |\___|
                                   |___/
"#;

    let version_line = format!(
        "              v{} - Minefield Configuration Enumerator\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

fn renders_target(target: &str) -> bool {
    target.starts_with(TARGET)
}

/// A tracing layer that formats enumeration events with colors.
pub struct EnumerationConsoleLayer;

impl<S: Subscriber> Layer<S> for EnumerationConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !renders_target(metadata.target()) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    reason: Option<String>,
    groups: Option<u64>,
    numbers: Option<u64>,
    threads: Option<u64>,
    split_islands: Option<bool>,
    layer: Option<u64>,
    width: Option<u64>,
    kept: Option<u64>,
    pruned: Option<u64>,
    spawned: Option<u64>,
    branch: Option<u64>,
    branches: Option<u64>,
    island: Option<u64>,
    configurations: Option<u64>,
    peak_frontier: Option<u64>,
    duration_ms: Option<u64>,
    speed: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "reason" => self.reason = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "groups" => self.groups = Some(value),
            "numbers" => self.numbers = Some(value),
            "threads" => self.threads = Some(value),
            "layer" => self.layer = Some(value),
            "width" => self.width = Some(value),
            "kept" => self.kept = Some(value),
            "pruned" => self.pruned = Some(value),
            "spawned" => self.spawned = Some(value),
            "branch" => self.branch = Some(value),
            "branches" => self.branches = Some(value),
            "island" => self.island = Some(value),
            "configurations" => self.configurations = Some(value),
            "peak_frontier" => self.peak_frontier = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "speed" => self.speed = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "split_islands" {
            self.split_islands = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "enumeration_start" => format_enumeration_start(v),
        "enumeration_end" => format_enumeration_end(v),
        "enumeration_aborted" => format_enumeration_aborted(v),
        "island_start" => format_island_start(v),
        "island_end" => format_island_end(v),
        "layer_end" => format_layer_end(v),
        "branch_pruned" => format_branch_pruned(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_enumeration_start(v: &EventVisitor) -> String {
    mark_run_start();
    let mut output = format!(
        "{} {} Enumerating │ {} groups │ {} numbers │ {} threads",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.groups).bright_yellow(),
        count(v.numbers).bright_yellow(),
        count(v.threads).bright_yellow(),
    );
    if v.split_islands == Some(true) {
        output.push_str(&format!(" │ {}", "islands".bright_magenta()));
    }
    output
}

fn format_enumeration_end(v: &EventVisitor) -> String {
    let configurations = v.configurations.unwrap_or(0);
    let found = if configurations > 0 {
        count(v.configurations).bright_green().bold().to_string()
    } else {
        "0".bright_red().bold().to_string()
    };

    format!(
        "{} {} Enumeration complete │ {} │ {} configurations │ {} branches │ {} pruned │ peak {} │ {} branches/s",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        found,
        count(v.branches).white(),
        count(v.pruned).white(),
        count(v.peak_frontier).white(),
        count(v.speed).bright_magenta().bold(),
    )
}

fn format_enumeration_aborted(v: &EventVisitor) -> String {
    let reason = v.reason.as_deref().unwrap_or("unknown");
    format!(
        "{} {} Enumeration aborted at layer {} │ {} │ {} live │ {} branches",
        format_elapsed(),
        "✗".bright_red().bold(),
        count(v.layer).white(),
        reason.bright_red(),
        count(v.width).white(),
        count(v.branches).white(),
    )
}

fn format_island_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Island {} started │ {} groups",
        format_elapsed(),
        "▶".bright_blue(),
        count(v.island).white().bold(),
        count(v.groups).bright_yellow(),
    )
}

fn format_island_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Island {} ended │ {} configurations",
        format_elapsed(),
        "◀".bright_blue(),
        count(v.island).white().bold(),
        count(v.configurations).bright_green(),
    )
}

fn format_layer_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Layer {:>4} │ {:>12} live │ {:>10} kept │ {:>10} pruned │ {:>10} spawned",
        format_elapsed(),
        "⚡".bright_cyan(),
        count(v.layer).white(),
        count(v.width).bright_magenta().bold(),
        count(v.kept).white(),
        count(v.pruned).bright_red(),
        count(v.spawned).bright_green(),
    )
}

fn format_branch_pruned(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }
    format!(
        "{} {} Layer {:>4} │ Branch {:>10} pruned",
        format_elapsed(),
        "✗".bright_red(),
        count(v.layer).bright_black(),
        count(v.branch).bright_black(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_only_solver_targets_render() {
        assert!(renders_target("mineforge_solver"));
        assert!(renders_target("mineforge_solver::engine"));
        assert!(!renders_target("mineforge_native"));
        assert!(!renders_target("mineforge::find"));
        assert!(!renders_target("rayon_core"));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let v = EventVisitor {
            event: Some("something_else".to_string()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_pruned_only_at_trace() {
        let v = EventVisitor {
            event: Some("branch_pruned".to_string()),
            layer: Some(2),
            branch: Some(7),
            ..Default::default()
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert!(format_event(&v, Level::TRACE).contains("pruned"));
    }

    #[test]
    fn test_end_reports_counts() {
        let v = EventVisitor {
            event: Some("enumeration_end".to_string()),
            configurations: Some(12_345),
            branches: Some(1_000_000),
            ..Default::default()
        };
        let output = format_event(&v, Level::INFO);
        assert!(output.contains("12,345"));
        assert!(output.contains("1,000,000"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
