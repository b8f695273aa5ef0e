//! Task board demo binary
//!
//! Drives a board through a short session and prints the view after each
//! intent, the way a presentation layer would render it.
//!
//! ```text
//! TASKBOARD_VARIANT=minimal RUST_LOG=taskboard=debug cargo run --bin taskboard-demo
//! ```

use taskboard::{
    new_store, view, BoardAction, BoardConfig, BoardStore, Priority, PriorityFilter,
    StatusFilter, TaskId,
};
use taskboard_runtime::metrics::MetricsRecorder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=info,taskboard_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut metrics = MetricsRecorder::new();
    metrics.start()?;

    let config = BoardConfig::from_env();
    tracing::info!(
        variant = %config.variant,
        default_priority = %config.default_priority,
        "Starting task board"
    );

    println!("=== Task Board ({} variant) ===\n", config.variant);

    let mut store = new_store(config);
    show(&store, "Initial board")?;

    let session = [
        BoardAction::SetPendingTitle {
            text: "Buy milk".to_string(),
        },
        BoardAction::SubmitAdd,
        BoardAction::SetPendingTitle {
            text: "   ".to_string(),
        },
        BoardAction::SubmitAdd,
        BoardAction::AddTask {
            title: "Dentist".to_string(),
            priority: Some(Priority::High),
        },
        BoardAction::AddTask {
            title: "Call plumber".to_string(),
            priority: Some(Priority::Low),
        },
        BoardAction::ToggleCompletion { id: TaskId::new(1) },
        BoardAction::SetPriorityFilter {
            filter: PriorityFilter::High,
        },
        BoardAction::SetPriorityFilter {
            filter: PriorityFilter::All,
        },
        BoardAction::SetStatusFilter {
            filter: StatusFilter::Completed,
        },
        BoardAction::SetStatusFilter {
            filter: StatusFilter::All,
        },
        BoardAction::ChangePriority {
            id: TaskId::new(3),
            priority: Priority::Medium,
        },
        BoardAction::RemoveTask { id: TaskId::new(3) },
        BoardAction::AddTask {
            title: "Renew passport".to_string(),
            priority: None,
        },
    ];

    for action in session {
        let label = format!("{action:?}");
        store.send(action)?;
        show(&store, &label)?;
    }

    if let Some(rendered) = metrics.render() {
        println!("=== Metrics ===\n");
        println!("{rendered}");
    }

    Ok(())
}

fn show(store: &BoardStore, label: &str) -> anyhow::Result<()> {
    println!(">>> {label}");
    println!("{}\n", serde_json::to_string_pretty(&view(store))?);
    Ok(())
}
