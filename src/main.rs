use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

use scheduler_state::config::SchedulerProps;
use scheduler_state::logging::init_tracing;
use scheduler_state::ui::scheduler::{
    EventAction, ProcessedEvent, SchedulerContext, SchedulerProvider,
};

/// Print the state a scheduler widget derives from its configuration.
#[derive(Debug, Parser)]
#[command(name = "scheduler-state", version)]
struct Cli {
    /// Configuration file (default: ~/.config/scheduler-state/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Upsert an event given as JSON; edits if its id exists, creates otherwise
    #[arg(long = "event", value_name = "JSON")]
    events: Vec<String>,

    /// Turn the busy indicator on
    #[arg(long)]
    loading: bool,

    /// Navigate to this day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    goto_day: Option<NaiveDate>,

    /// Pretty-print the snapshot
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let props = match &cli.config {
        Some(path) => SchedulerProps::load_from(path),
        None => SchedulerProps::load(),
    }
    .context("Failed to load scheduler configuration")?;

    let mut provider = SchedulerProvider::new(&props)?;
    provider.sync(&props)?;

    for raw in &cli.events {
        let event: ProcessedEvent = serde_json::from_str(raw)
            .with_context(|| format!("Invalid event JSON: {}", raw))?;
        let action = if provider.state().event(&event.event_id).is_some() {
            EventAction::Edit
        } else {
            EventAction::Create
        };
        provider.confirm_event(event, action)?;
    }

    if cli.loading {
        provider.trigger_loading(true);
    }

    if let Some(day) = cli.goto_day {
        provider.handle_goto_day(day);
    }

    let snapshot = provider.snapshot();
    let json = if cli.pretty {
        serde_json::to_string_pretty(&*snapshot)?
    } else {
        serde_json::to_string(&*snapshot)?
    };
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["scheduler-state"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.events.is_empty());
        assert!(cli.goto_day.is_none());
        assert!(!cli.loading);
    }

    #[test]
    fn parse_goto_day_and_events() {
        let cli = Cli::try_parse_from([
            "scheduler-state",
            "--goto-day",
            "2026-10-20",
            "--event",
            "{}",
            "--event",
            "[]",
        ])
        .unwrap();
        assert_eq!(
            cli.goto_day,
            chrono::NaiveDate::from_ymd_opt(2026, 10, 20)
        );
        assert_eq!(cli.events.len(), 2);
    }

    #[test]
    fn parse_rejects_bad_date() {
        assert!(Cli::try_parse_from(["scheduler-state", "--goto-day", "tomorrow"]).is_err());
    }
}
