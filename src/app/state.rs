use crate::app::event::TaskId;
use crate::components::WizardNavigation;
use crate::config::AppConfig;
use crate::dialog::DialogCoordinator;
use crate::todo::{Task, TaskFromFetch};

/// Status messages disappear after this many ticks.
pub const STATUS_TTL_TICKS: u64 = 12;

pub const STEP_TASKS: usize = 0;
pub const STEP_REVIEW: usize = 1;
pub const STEP_FINISH: usize = 2;

#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    /// Cursor position in characters, for placing the terminal cursor.
    pub fn cursor_chars(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }
}

/// Which dialog button has keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogFocus {
    #[default]
    Primary,
    Secondary,
}

impl DialogFocus {
    pub fn toggle(self) -> Self {
        match self {
            DialogFocus::Primary => DialogFocus::Secondary,
            DialogFocus::Secondary => DialogFocus::Primary,
        }
    }
}

/// An edit in progress. `original` is `None` for a task that was just added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: TaskId,
    pub original: Option<String>,
}

/// Turn fetched tasks into local ones. Finished tasks are left out.
pub fn local_tasks(fetched: &[TaskFromFetch], first_id: TaskId) -> Vec<Task> {
    fetched
        .iter()
        .filter(|t| !t.done)
        .zip(first_id..)
        .map(|(t, id)| {
            let text = if t.description.is_empty() {
                t.name.clone()
            } else {
                format!("{}: {}", t.name, t.description)
            };
            Task::new(id, text)
        })
        .collect()
}

pub struct AppState {
    pub config: AppConfig,
    pub tasks: Vec<Task>,
    pub selected: usize,
    pub next_task_id: TaskId,
    pub input: InputState,
    pub editing: Option<EditSession>,
    pub dialogs: DialogCoordinator,
    pub dialog_focus: DialogFocus,
    pub wizard: WizardNavigation,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    pub status_set_at: u64,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let tasks = local_tasks(&config.tasks, 1);
        let next_task_id = tasks.len() as TaskId + 1;
        let dialogs = DialogCoordinator::new(config.dialog.overlap);
        Self {
            config,
            tasks,
            selected: 0,
            next_task_id,
            input: InputState::new(),
            editing: None,
            dialogs,
            dialog_focus: DialogFocus::Primary,
            wizard: WizardNavigation::from_titles(["Tasks", "Review", "Finish"]),
            should_quit: false,
            dirty: true,
            status_message: None,
            status_set_at: 0,
            tick_count: 0,
        }
    }

    pub fn allocate_task_id(&mut self) -> TaskId {
        let id = self.next_task_id;
        self.next_task_id += 1;
        id
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected)
    }

    pub fn get_task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
            self.dirty = true;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.dirty = true;
        }
    }

    /// Append an empty task and start editing it.
    pub fn begin_new_task(&mut self) {
        let id = self.allocate_task_id();
        let mut task = Task::new(id, "");
        task.editing = true;
        self.tasks.push(task);
        self.selected = self.tasks.len() - 1;
        self.input.set("");
        self.editing = Some(EditSession { id, original: None });
        self.dirty = true;
    }

    pub fn begin_edit_selected(&mut self) {
        let Some(task) = self.tasks.get_mut(self.selected) else {
            return;
        };
        task.editing = true;
        let session = EditSession {
            id: task.id,
            original: Some(task.text.clone()),
        };
        self.input.set(&task.text);
        self.editing = Some(session);
        self.dirty = true;
    }

    /// Save the edited text. An empty new task is discarded; an empty edit
    /// of an existing task keeps the old text.
    pub fn commit_edit(&mut self) {
        let Some(session) = self.editing.take() else {
            return;
        };
        let text = self.input.take_text().trim().to_string();
        match (text.is_empty(), session.original) {
            (true, None) => {
                self.remove_task(session.id);
            }
            (true, Some(original)) => self.finish_edit(session.id, original),
            (false, _) => self.finish_edit(session.id, text),
        }
        self.dirty = true;
    }

    pub fn cancel_edit(&mut self) {
        let Some(session) = self.editing.take() else {
            return;
        };
        self.input.take_text();
        match session.original {
            Some(original) => self.finish_edit(session.id, original),
            None => {
                self.remove_task(session.id);
            }
        }
        self.dirty = true;
    }

    fn finish_edit(&mut self, id: TaskId, text: String) {
        if let Some(task) = self.get_task_mut(id) {
            task.text = text;
            task.editing = false;
        }
    }

    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(idx);
        if self.selected >= self.tasks.len() {
            self.selected = self.tasks.len().saturating_sub(1);
        }
        self.dirty = true;
        Some(task)
    }

    pub fn set_status(&mut self, text: String) {
        self.status_message = Some(text);
        self.status_set_at = self.tick_count;
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let mut s = format!("Tasks: {}", self.tasks.len());
        if self.dialogs.queued() > 0 {
            s.push_str(&format!(" | Dialogs waiting: {}", self.dialogs.queued()));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched(id: &str, name: &str, description: &str, done: bool) -> TaskFromFetch {
        TaskFromFetch {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            done,
        }
    }

    #[test]
    fn test_local_tasks_skip_done_and_number_from_first_id() {
        let tasks = local_tasks(
            &[
                fetched("x", "Call mum", "", false),
                fetched("y", "Old", "", true),
                fetched("z", "Taxes", "before April", false),
            ],
            10,
        );
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0], Task::new(10, "Call mum"));
        assert_eq!(tasks[1], Task::new(11, "Taxes: before April"));
    }

    #[test]
    fn test_new_task_commit_and_cancel() {
        let mut state = AppState::new(AppConfig::default());
        let before = state.tasks.len();

        state.begin_new_task();
        assert!(state.tasks.last().unwrap().editing);
        for c in "Buy bread".chars() {
            state.input.insert_char(c);
        }
        state.commit_edit();
        assert_eq!(state.tasks.len(), before + 1);
        assert_eq!(state.tasks.last().unwrap().text, "Buy bread");
        assert!(!state.tasks.last().unwrap().editing);

        state.begin_new_task();
        state.cancel_edit();
        assert_eq!(state.tasks.len(), before + 1);
    }

    #[test]
    fn test_empty_edit_keeps_original_text() {
        let mut state = AppState::new(AppConfig::default());
        let original = state.tasks[0].text.clone();
        state.begin_edit_selected();
        state.input.take_text();
        state.commit_edit();
        assert_eq!(state.tasks[0].text, original);
    }

    #[test]
    fn test_remove_last_task_clamps_selection() {
        let mut state = AppState::new(AppConfig::default());
        state.select_next();
        let id = state.tasks[1].id;
        state.remove_task(id);
        assert_eq!(state.selected, 0);
        assert_eq!(state.remove_task(id), None);
    }

    #[test]
    fn test_input_handles_multibyte() {
        let mut input = InputState::new();
        input.set("añb");
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "ab");
        assert_eq!(input.cursor_chars(), 1);
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "b");
    }
}
