//! Popup surface for the dialog coordinator.
//!
//! Draws nothing unless the coordinator's state is visible. Answers come back
//! through the key handler, which calls `handle_primary`/`handle_secondary`.

use crate::app::state::{AppState, DialogFocus};
use crate::components::{ButtonProps, ButtonSeverity, ButtonVariant};
use crate::dialog::DialogState;
use crate::ui::button;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    let dialog = state.dialogs.state();
    if !dialog.visible {
        return;
    }
    let area = popup_area(
        frame.area(),
        state.config.ui.popup_width_percent,
        dialog.message(),
    );
    render_popup(frame, area, dialog, state.dialog_focus);
}

/// Centered rect sized for the message, clamped to the terminal.
pub fn popup_area(area: Rect, width_percent: u16, message: &str) -> Rect {
    let popup_w = (area.width * width_percent.clamp(10, 100) / 100)
        .max(30)
        .min(area.width);
    let text_w = popup_w.saturating_sub(4).max(1) as usize;
    let message_lines: usize = message
        .lines()
        .map(|l| l.chars().count().max(1).div_ceil(text_w))
        .sum::<usize>()
        .max(1);
    // borders + blank + message + blank + buttons
    let popup_h = (message_lines as u16 + 5).min(area.height);
    let popup_x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    Rect::new(popup_x, popup_y, popup_w, popup_h)
}

pub fn buttons(dialog: &DialogState) -> (ButtonProps, Option<ButtonProps>) {
    let config = &dialog.config;
    let primary = ButtonProps::new(config.primary_label()).severity(ButtonSeverity::Info);
    let secondary = config.shows_secondary().then(|| {
        ButtonProps::new(config.secondary_label())
            .severity(ButtonSeverity::Neutral)
            .variant(ButtonVariant::Outlined)
    });
    (primary, secondary)
}

fn render_popup(frame: &mut Frame, area: Rect, dialog: &DialogState, focus: DialogFocus) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", dialog.title()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let message_area = Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(3),
    );
    let message = Paragraph::new(dialog.message())
        .style(Theme::message_text())
        .wrap(Wrap { trim: true });
    frame.render_widget(message, message_area);

    let (primary, secondary) = buttons(dialog);
    let mut spans = Vec::new();
    if let Some(ref secondary) = secondary {
        spans.push(button::span(secondary, focus == DialogFocus::Secondary));
        spans.push(Span::raw("  "));
    }
    spans.push(button::span(&primary, focus == DialogFocus::Primary));

    let buttons_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        buttons_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::dialog::DialogConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_title_message_and_labels() {
        let mut state = AppState::new(AppConfig::default());
        let _handle = state.dialogs.alert("Delete?", "This cannot be undone", "Delete", "Cancel");

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("Delete?"));
        assert!(text.contains("This cannot be undone"));
        assert!(text.contains("[ Delete ]"));
        assert!(text.contains("[ Cancel ]"));
    }

    #[test]
    fn test_hidden_dialog_draws_nothing() {
        let state = AppState::new(AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
        assert!(screen_text(&terminal).trim().is_empty());
    }

    #[test]
    fn test_single_button_when_secondary_hidden() {
        let mut state = AppState::new(AppConfig::default());
        let _handle = state
            .dialogs
            .show(DialogConfig::new("Saved", "Your changes are stored").without_secondary());
        let (_, secondary) = buttons(state.dialogs.state());
        assert!(secondary.is_none());

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("[ OK ]"));
        assert!(!text.contains("Cancel"));
    }

    #[test]
    fn test_popup_area_fits_small_terminal() {
        let area = Rect::new(0, 0, 20, 4);
        let popup = popup_area(area, 50, "a long message that would wrap many times");
        assert!(popup.width <= 20);
        assert!(popup.height <= 4);
    }
}
