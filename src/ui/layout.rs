use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub wizard_bar: Rect,
    pub body: Rect,
    pub input_box: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_wizard_bar: bool) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if show_wizard_bar { 1 } else { 0 }), // Wizard steps
            Constraint::Min(3),                                      // Step body
            Constraint::Length(3),                                   // Input box
            Constraint::Length(1),                                   // Status bar
        ])
        .split(area);

    AppLayout {
        wizard_bar: chunks[0],
        body: chunks[1],
        input_box: chunks[2],
        status_bar: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_wizard_bar() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.wizard_bar.height, 0);
        assert_eq!(layout.body.height, 20);
        assert_eq!(layout.status_bar.y, 23);
    }
}
