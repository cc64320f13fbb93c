use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let editing = state.editing.is_some();
    let border_style = if editing {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let title = match state.editing {
        Some(ref session) if session.original.is_none() => " New task ",
        Some(_) => " Edit task ",
        None => " Input ",
    };

    let block = Block::default()
        .title(title)
        .title_style(if editing { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !editing {
        let hint = Paragraph::new(Span::styled(
            "Press ? for keys",
            Style::default().fg(Theme::TEXT_MUTED),
        ));
        frame.render_widget(hint, inner);
        return;
    }

    // Prompt chevron + input text
    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
        Span::styled(state.input.text.as_str(), Theme::input_text()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    // Hide the text cursor while the dialog owns the keyboard
    if !state.dialogs.state().visible && inner.width > 0 {
        let prompt_offset = 2u16;
        let cursor_x = inner.x + prompt_offset + state.input.cursor_chars() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}
