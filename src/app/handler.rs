use crate::app::action::Action;
use crate::app::event::{AppEvent, Decision};
use crate::app::state::*;
use crate::dialog::{DialogConfig, DialogError, DialogHandle};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

const HELP_TEXT: &str = "↑/↓ select · a add · e edit · d delete · Tab/Shift+Tab step · q quit";

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::DialogAnswered { decision, result } => {
            state.dirty = true;
            handle_answer(state, decision, result)
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);

    if state.status_message.is_some()
        && state.tick_count.wrapping_sub(state.status_set_at) >= STATUS_TTL_TICKS
    {
        state.status_message = None;
        state.dirty = true;
    }

    vec![]
}

fn handle_answer(
    state: &mut AppState,
    decision: Decision,
    result: Result<bool, DialogError>,
) -> Vec<Action> {
    debug!(?decision, ?result, "dialog answered");
    let confirmed = match result {
        Ok(confirmed) => confirmed,
        Err(e) => {
            state.set_status(format!("Dialog closed: {}", e));
            return vec![];
        }
    };

    match decision {
        Decision::DeleteTask { id } if confirmed => {
            if let Some(task) = state.remove_task(id) {
                info!(id, "task deleted");
                state.set_status(format!("Deleted \"{}\"", task.text));
            }
            vec![]
        }
        Decision::DeleteTask { .. } => {
            state.set_status("Kept the task".to_string());
            vec![]
        }
        Decision::Quit | Decision::Finish if confirmed => vec![Action::Quit],
        Decision::Quit | Decision::Finish | Decision::Acknowledge => vec![],
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The dialog captures all input while it is on screen
    if state.dialogs.state().visible {
        handle_dialog_key(state, key);
        return vec![];
    }

    if state.editing.is_some() {
        handle_edit_key(state, key);
        return vec![];
    }

    match key.code {
        KeyCode::Tab => {
            if let Some(change) = state.wizard.next() {
                debug!(from = change.from, to = change.to, "wizard step changed");
            }
            vec![]
        }
        KeyCode::BackTab => {
            state.wizard.previous();
            vec![]
        }
        KeyCode::Char('q') => {
            let handle = state.dialogs.alert("Quit?", "Leave the task list?", "Quit", "Stay");
            await_dialog(Decision::Quit, handle)
        }
        KeyCode::Char('?') => {
            let handle = state
                .dialogs
                .show(DialogConfig::new("Keys", HELP_TEXT).without_secondary());
            await_dialog(Decision::Acknowledge, handle)
        }
        _ => match state.wizard.active_index() {
            STEP_TASKS => handle_tasks_key(state, key),
            STEP_FINISH => handle_finish_key(state, key),
            _ => vec![],
        },
    }
}

fn handle_tasks_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Char('a') => state.begin_new_task(),
        KeyCode::Char('e') | KeyCode::Enter => state.begin_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => {
            let Some(task) = state.selected_task() else {
                return vec![];
            };
            let id = task.id;
            let message = format!("\"{}\" will be removed. This cannot be undone.", task.text);
            let handle = state
                .dialogs
                .alert("Delete task?", &message, "Delete", "Cancel");
            return await_dialog(Decision::DeleteTask { id }, handle);
        }
        _ => {}
    }
    vec![]
}

fn handle_finish_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code != KeyCode::Enter {
        return vec![];
    }
    let message = format!("{} task(s) on the list. Close now?", state.tasks.len());
    let handle = state.dialogs.alert("All set", &message, "Close", "Back");
    await_dialog(Decision::Finish, handle)
}

fn handle_edit_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => state.commit_edit(),
        KeyCode::Esc => state.cancel_edit(),
        KeyCode::Backspace => state.input.delete_back(),
        KeyCode::Delete => state.input.delete_forward(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_home(),
        KeyCode::End => state.input.move_end(),
        KeyCode::Char(c) => state.input.insert_char(c),
        _ => {}
    }
}

/// Keyboard side of the dialog surface: Enter answers with the focused
/// button, `y`/`n` answer directly, Esc dismisses.
fn handle_dialog_key(state: &mut AppState, key: KeyEvent) {
    let shows_secondary = state.dialogs.state().config.shows_secondary();
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab if shows_secondary => {
            state.dialog_focus = state.dialog_focus.toggle();
            return;
        }
        KeyCode::Enter => match state.dialog_focus {
            DialogFocus::Primary => state.dialogs.handle_primary(),
            DialogFocus::Secondary => state.dialogs.handle_secondary(),
        },
        KeyCode::Char('y') => state.dialogs.handle_primary(),
        KeyCode::Char('n') | KeyCode::Esc => state.dialogs.handle_secondary(),
        _ => return,
    }
    state.dialog_focus = DialogFocus::Primary;
}

fn await_dialog(decision: Decision, handle: DialogHandle) -> Vec<Action> {
    vec![Action::AwaitDialog { decision, handle }]
}
