use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1))
}

/// Body of the active wizard step.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.wizard.active_index() {
        STEP_TASKS => render_tasks(frame, area, state),
        STEP_REVIEW => render_review(frame, area, state),
        _ => render_finish(frame, area, state),
    }
}

fn render_tasks(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel(" Tasks ");

    if state.tasks.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No tasks. Press a to add one.",
            Style::default().fg(Theme::TEXT_MUTED),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .tasks
        .iter()
        .map(|task| {
            let (text, style) = if task.editing {
                (format!("✎ {}", state.input.text), Theme::task_editing())
            } else {
                (format!("• {}", task.text), Theme::task_normal())
            };
            ListItem::new(Span::styled(text, style))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::task_selected())
        .highlight_symbol("❯ ");
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_review(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} task(s) on the list", state.tasks.len()),
            Theme::title(),
        )),
        Line::default(),
    ];
    for (i, task) in state.tasks.iter().enumerate() {
        lines.push(Line::from(format!("{:>3}. {}", i + 1, task.text)));
    }
    let paragraph = Paragraph::new(lines)
        .block(panel(" Review "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_finish(frame: &mut Frame, area: Rect, _state: &AppState) {
    let paragraph = Paragraph::new(vec![
        Line::from("Everything is in place."),
        Line::default(),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Theme::ACCENT_AMBER).add_modifier(Modifier::BOLD)),
            Span::raw(" finish  "),
            Span::styled("Shift+Tab", Style::default().fg(Theme::ACCENT_AMBER).add_modifier(Modifier::BOLD)),
            Span::raw(" go back"),
        ]),
    ])
    .block(panel(" Finish "));
    frame.render_widget(paragraph, area);
}
