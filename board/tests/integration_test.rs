//! Integration tests driving a board through the store.
#![allow(clippy::unwrap_used)]

use taskboard::{
    new_store, view, BoardAction, BoardConfig, BoardState, BoardStore, Priority, PriorityFilter,
    StatusFilter, Task, TaskId, Variant,
};
use taskboard_runtime::StoreError;

fn add(store: &mut BoardStore, title: &str) -> Result<(), StoreError> {
    store.send(BoardAction::AddTask {
        title: title.to_string(),
        priority: None,
    })
}

fn add_with(store: &mut BoardStore, title: &str, priority: Priority) -> Result<(), StoreError> {
    store.send(BoardAction::AddTask {
        title: title.to_string(),
        priority: Some(priority),
    })
}

fn minimal() -> BoardConfig {
    BoardConfig {
        variant: Variant::Minimal,
        ..BoardConfig::default()
    }
}

#[test]
fn buy_milk_lifecycle() -> Result<(), StoreError> {
    taskboard_testing::init_test_tracing();
    let mut store = new_store(minimal());

    add(&mut store, "Buy milk")?;
    assert_eq!(
        serde_json::to_value(&view(&store).tasks).unwrap(),
        serde_json::json!([{"id": 1, "title": "Buy milk", "completed": false}])
    );

    add(&mut store, "")?;
    assert_eq!(view(&store).ids(), vec![1]);

    store.send(BoardAction::ToggleCompletion { id: TaskId::new(1) })?;
    assert!(view(&store).tasks[0].completed);

    store.send(BoardAction::RemoveTask { id: TaskId::new(1) })?;
    assert!(view(&store).tasks.is_empty());

    Ok(())
}

#[test]
fn appointment_filters() -> Result<(), StoreError> {
    let mut store = new_store(BoardConfig::default());

    add_with(&mut store, "A", Priority::High)?;
    add_with(&mut store, "B", Priority::Medium)?;
    add_with(&mut store, "C", Priority::Low)?;
    assert_eq!(view(&store).ids(), vec![1, 2, 3]);

    store.send(BoardAction::SetPriorityFilter {
        filter: PriorityFilter::High,
    })?;
    assert_eq!(view(&store).ids(), vec![1]);

    store.send(BoardAction::ToggleCompletion { id: TaskId::new(2) })?;
    store.send(BoardAction::SetStatusFilter {
        filter: StatusFilter::Completed,
    })?;
    store.send(BoardAction::SetPriorityFilter {
        filter: PriorityFilter::All,
    })?;
    assert_eq!(view(&store).ids(), vec![2]);

    // Filters never touch the collection
    let view = view(&store);
    assert_eq!(view.total, 3);
    assert_eq!(view.completed, 1);
    assert_eq!(view.active, 2);

    Ok(())
}

#[test]
fn delete_middle_then_add() -> Result<(), StoreError> {
    let mut store = new_store(BoardConfig::default());

    for title in ["One", "Two", "Three"] {
        add(&mut store, title)?;
    }
    store.send(BoardAction::RemoveTask { id: TaskId::new(2) })?;
    assert_eq!(view(&store).ids(), vec![1, 3]);

    add(&mut store, "Four")?;
    assert_eq!(view(&store).ids(), vec![1, 3, 4]);

    Ok(())
}

#[test]
fn deleting_highest_id_does_not_reuse_it() -> Result<(), StoreError> {
    let mut store = new_store(BoardConfig::default());

    add(&mut store, "One")?;
    add(&mut store, "Two")?;
    store.send(BoardAction::RemoveTask { id: TaskId::new(2) })?;
    add(&mut store, "Three")?;

    assert_eq!(view(&store).ids(), vec![1, 3]);
    Ok(())
}

#[test]
fn replaying_a_deleted_id_is_ignored() -> Result<(), StoreError> {
    let mut store = new_store(BoardConfig::default());

    for title in ["One", "Two", "Three"] {
        add(&mut store, title)?;
    }
    store.send(BoardAction::RemoveTask { id: TaskId::new(2) })?;
    store.send(BoardAction::TaskAdded {
        task: Task::new(TaskId::new(2), "Ghost".to_string(), None),
    })?;
    assert_eq!(view(&store).ids(), vec![1, 3]);

    add(&mut store, "Four")?;
    assert_eq!(view(&store).ids(), vec![1, 3, 4]);
    Ok(())
}

#[test]
fn add_after_highest_possible_id_is_ignored() -> Result<(), StoreError> {
    let mut store = new_store(BoardConfig::default());

    store.send(BoardAction::TaskAdded {
        task: Task::new(TaskId::new(u64::MAX), "Last".to_string(), None),
    })?;
    add(&mut store, "Next")?;

    assert_eq!(view(&store).ids(), vec![u64::MAX]);
    assert_eq!(store.state(BoardState::last_id), u64::MAX);
    Ok(())
}

#[test]
fn submit_add_uses_pending_input() -> Result<(), StoreError> {
    let mut store = new_store(BoardConfig::default());

    store.send(BoardAction::SetPendingTitle {
        text: "  Dentist  ".to_string(),
    })?;
    store.send(BoardAction::SetPendingPriority {
        priority: Priority::High,
    })?;
    assert!(view(&store).can_submit);

    store.send(BoardAction::SubmitAdd)?;

    let view = view(&store);
    assert_eq!(view.tasks.len(), 1);
    assert_eq!(view.tasks[0].title, "Dentist");
    assert_eq!(view.tasks[0].priority, Some(Priority::High));
    assert_eq!(view.pending_title, "");
    assert_eq!(view.pending_priority, Some(Priority::Medium));
    assert!(!view.can_submit);

    Ok(())
}

#[test]
fn blank_submit_keeps_pending_input() -> Result<(), StoreError> {
    let mut store = new_store(BoardConfig::default());

    store.send(BoardAction::SetPendingTitle {
        text: "   ".to_string(),
    })?;
    store.send(BoardAction::SetPendingPriority {
        priority: Priority::Low,
    })?;
    store.send(BoardAction::SubmitAdd)?;

    let view = view(&store);
    assert!(view.tasks.is_empty());
    assert_eq!(view.pending_title, "   ");
    assert_eq!(view.pending_priority, Some(Priority::Low));

    Ok(())
}

#[test]
fn configured_defaults_apply() -> Result<(), StoreError> {
    let config = BoardConfig {
        default_priority: Priority::Low,
        default_status_filter: StatusFilter::Active,
        ..BoardConfig::default()
    };
    let mut store = new_store(config);

    add(&mut store, "Errand")?;
    add(&mut store, "Chore")?;
    store.send(BoardAction::ToggleCompletion { id: TaskId::new(1) })?;

    let view = view(&store);
    assert_eq!(view.ids(), vec![2]);
    assert_eq!(view.tasks[0].priority, Some(Priority::Low));
    assert_eq!(view.pending_priority, Some(Priority::Low));

    Ok(())
}

#[test]
fn minimal_board_ignores_priorities_and_filters() -> Result<(), StoreError> {
    let mut store = new_store(minimal());

    add_with(&mut store, "Buy milk", Priority::High)?;
    add(&mut store, "Walk dog")?;
    store.send(BoardAction::ToggleCompletion { id: TaskId::new(2) })?;
    store.send(BoardAction::ChangePriority {
        id: TaskId::new(1),
        priority: Priority::Low,
    })?;
    store.send(BoardAction::SetStatusFilter {
        filter: StatusFilter::Completed,
    })?;

    let view = view(&store);
    assert_eq!(view.ids(), vec![1, 2]);
    assert!(view.tasks.iter().all(|t| t.priority.is_none()));
    assert_eq!(view.pending_priority, None);
    assert_eq!(view.filter, None);

    let json = serde_json::to_value(&view).unwrap();
    assert!(json.get("filter").is_none());
    assert!(json["tasks"][0].get("priority").is_none());

    Ok(())
}

#[test]
fn unknown_ids_leave_state_unchanged() -> Result<(), StoreError> {
    let mut store = new_store(BoardConfig::default());
    add(&mut store, "Only")?;
    let before = store.state(Clone::clone);

    store.send(BoardAction::ToggleCompletion { id: TaskId::new(9) })?;
    store.send(BoardAction::RemoveTask { id: TaskId::new(9) })?;
    store.send(BoardAction::ChangePriority {
        id: TaskId::new(9),
        priority: Priority::High,
    })?;

    assert_eq!(store.state(Clone::clone), before);
    Ok(())
}

#[test]
fn final_state_serializes() -> Result<(), StoreError> {
    let mut store = new_store(BoardConfig::default());
    add_with(&mut store, "Dentist", Priority::High)?;

    let state = store.into_state();
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["last_id"], 1);
    assert_eq!(
        json["tasks"],
        serde_json::json!([{"id": 1, "title": "Dentist", "completed": false, "priority": "high"}])
    );
    Ok(())
}
