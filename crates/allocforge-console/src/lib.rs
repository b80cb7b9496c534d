//! Colorful console output for allocator events.
//!
//! Provides a custom `tracing` layer that formats allocator events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Allocation and batch start/end
//! - **DEBUG**: Each item taken
//! - **TRACE**: Fill order and early termination

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "allocforge_solver=info";

/// Initializes the allocator console output.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
pub fn init() {
    init_with_directive(DEFAULT_DIRECTIVE);
}

/// Initializes console output with a specific default directive.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init_with_directive(directive: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(directive));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(AllocatorConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats allocator events with colors.
pub struct AllocatorConsoleLayer;

impl<S: Subscriber> Layer<S> for AllocatorConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("allocforge") {
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

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    item_count: Option<u64>,
    request_count: Option<u64>,
    failed_count: Option<u64>,
    items_whole: Option<u64>,
    items_partial: Option<u64>,
    items_skipped: Option<u64>,
    duration_us: Option<u64>,
    step: Option<u64>,
    item: Option<u64>,
    capacity: Option<f64>,
    total_value: Option<f64>,
    remaining_capacity: Option<f64>,
    taken: Option<f64>,
    fraction: Option<f64>,
    tie_break: Option<String>,
    thread_count: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s.trim_matches('"').to_string()),
            "tie_break" => self.tie_break = Some(s),
            "thread_count" => self.thread_count = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "item_count" => self.item_count = Some(value),
            "request_count" => self.request_count = Some(value),
            "failed_count" => self.failed_count = Some(value),
            "items_whole" => self.items_whole = Some(value),
            "items_partial" => self.items_partial = Some(value),
            "items_skipped" => self.items_skipped = Some(value),
            "duration_us" => self.duration_us = Some(value),
            "step" => self.step = Some(value),
            "item" => self.item = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "capacity" => self.capacity = Some(value),
            "total_value" => self.total_value = Some(value),
            "remaining_capacity" => self.remaining_capacity = Some(value),
            "taken" => self.taken = Some(value),
            "fraction" => self.fraction = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "allocation_start" => format_allocation_start(v),
        "allocation_end" => format_allocation_end(v),
        "item_taken" => format_item_taken(v),
        "capacity_exhausted" if level == Level::TRACE => format_capacity_exhausted(v),
        "batch_start" => format_batch_start(v),
        "batch_end" => format_batch_end(v),
        "postcondition_failed" => format_postcondition_failed(v),
        _ => String::new(),
    }
}

fn format_allocation_start(v: &EventVisitor) -> String {
    let items = v.item_count.unwrap_or(0);
    let capacity = v.capacity.unwrap_or(0.0);
    let tie_break = v.tie_break.as_deref().unwrap_or("InputOrder");

    format!(
        "{} {} Allocating │ {} items │ capacity {} │ ties {}",
        "INFO".bright_green(),
        "▶".bright_green().bold(),
        items.to_formatted_string(&Locale::en).bright_yellow(),
        format_number(capacity).bright_yellow(),
        tie_break.white()
    )
}

fn format_allocation_end(v: &EventVisitor) -> String {
    let total = v.total_value.unwrap_or(0.0);
    let whole = v.items_whole.unwrap_or(0);
    let partial = v.items_partial.unwrap_or(0);
    let skipped = v.items_skipped.unwrap_or(0);
    let remaining = v.remaining_capacity.unwrap_or(0.0);

    format!(
        "{} {} Allocated │ value {} │ {} whole, {} partial, {} skipped │ {} left │ {}",
        "INFO".bright_green(),
        "■".bright_cyan().bold(),
        format_number(total).bright_green().bold(),
        whole.to_formatted_string(&Locale::en).white(),
        partial.to_formatted_string(&Locale::en).white(),
        skipped.to_formatted_string(&Locale::en).white(),
        format_number(remaining).yellow(),
        format_duration_us(v.duration_us.unwrap_or(0)).bright_black()
    )
}

fn format_item_taken(v: &EventVisitor) -> String {
    let step = v.step.unwrap_or(0);
    let item = v.item.unwrap_or(0);
    let taken = v.taken.unwrap_or(0.0);
    let fraction = v.fraction.unwrap_or(0.0);

    format!(
        "    {} Step {:>5} │ item {:>5} │ took {} ({})",
        "->".bright_blue(),
        step.to_formatted_string(&Locale::en).white(),
        item.to_formatted_string(&Locale::en).white(),
        format_number(taken).yellow(),
        format_percent(fraction).bright_magenta()
    )
}

fn format_capacity_exhausted(v: &EventVisitor) -> String {
    format!(
        "    {} Capacity exhausted at step {}",
        "·".bright_black(),
        v.step.unwrap_or(0)
    )
}

fn format_batch_start(v: &EventVisitor) -> String {
    let requests = v.request_count.unwrap_or(0);
    let threads = v.thread_count.as_deref().unwrap_or("Auto");

    format!(
        "{} {} Batch │ {} requests │ threads {}",
        "INFO".bright_green(),
        "▶".bright_blue(),
        requests.to_formatted_string(&Locale::en).bright_yellow(),
        threads.white()
    )
}

fn format_batch_end(v: &EventVisitor) -> String {
    let requests = v.request_count.unwrap_or(0);
    let failed = v.failed_count.unwrap_or(0);

    let failed_str = if failed > 0 {
        failed.to_formatted_string(&Locale::en).bright_red().to_string()
    } else {
        failed.to_formatted_string(&Locale::en).bright_green().to_string()
    };

    format!(
        "{} {} Batch complete │ {} requests │ {} failed",
        "INFO".bright_green(),
        "◀".bright_blue(),
        requests.to_formatted_string(&Locale::en).white(),
        failed_str
    )
}

fn format_postcondition_failed(v: &EventVisitor) -> String {
    format!(
        "{} {} {}",
        "WARN".bright_red(),
        "Post-condition failed:".bright_red().bold(),
        v.message.as_deref().unwrap_or("")
    )
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        (n as i64).to_formatted_string(&Locale::en)
    } else {
        format!("{:.4}", n)
    }
}

fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn format_duration_us(us: u64) -> String {
    if us < 1_000 {
        format!("{}µs", us)
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1_000.0)
    } else {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(240.0), "240");
        assert_eq!(format_number(1_234_567.0), "1,234,567");
        assert_eq!(format_number(2.5), "2.5000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.5), "50.0%");
        assert_eq!(format_percent(1.0), "100.0%");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_us(250), "250µs");
        assert_eq!(format_duration_us(2_500), "2.50ms");
        assert_eq!(format_duration_us(3_000_000), "3.00s");
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
    fn test_allocation_end_mentions_counts() {
        let v = EventVisitor {
            event: Some("allocation_end".to_string()),
            total_value: Some(240.0),
            items_whole: Some(2),
            items_partial: Some(1),
            items_skipped: Some(0),
            ..Default::default()
        };
        let out = format_event(&v, Level::INFO);
        assert!(out.contains("240"));
        assert!(out.contains("partial"));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
    }
}
