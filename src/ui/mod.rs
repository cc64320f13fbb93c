mod button;
pub mod dialog;
mod input_box;
mod layout;
mod status_bar;
mod task_list;
pub mod theme;
mod wizard_bar;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.config.ui.show_wizard_bar);

    if state.config.ui.show_wizard_bar {
        wizard_bar::render(frame, app_layout.wizard_bar, &state.wizard);
    }
    task_list::render(frame, app_layout.body, state);
    input_box::render(frame, app_layout.input_box, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Drawn last so it sits on top
    dialog::render(frame, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_full_frame_shows_tasks_and_dialog() {
        let mut state = AppState::new(AppConfig::default());
        let first = state.tasks[0].text.clone();
        let _handle = state.dialogs.confirm("Quit?", "Leave now");

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains(&first));
        assert!(text.contains("Quit?"));
        assert!(text.contains("[DIALOG]"));
        assert!(text.contains("Tasks"));
    }
}
