use crate::components::{WizardNavigation, WizardStepStatus};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

fn badge(status: WizardStepStatus, index: usize) -> String {
    match status {
        WizardStepStatus::Complete => "✓".to_string(),
        WizardStepStatus::Active | WizardStepStatus::Upcoming => (index + 1).to_string(),
    }
}

pub fn line(wizard: &WizardNavigation) -> Line<'static> {
    let header = wizard.header_props();
    let mut spans = Vec::new();
    for (i, step) in header.steps.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ── ", Theme::border()));
        }
        let Some(props) = wizard.badge_props(i) else {
            continue;
        };
        let mut style = Theme::step(props.status);
        if step.disabled {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        spans.push(Span::styled(
            format!("({}) {}", badge(props.status, i), step.title),
            style,
        ));
    }
    Line::from(spans)
}

pub fn render(frame: &mut Frame, area: Rect, wizard: &WizardNavigation) {
    frame.render_widget(Paragraph::new(line(wizard)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_marks_completed_steps() {
        let mut wizard = WizardNavigation::from_titles(["Tasks", "Review", "Finish"]);
        wizard.next();
        let text: String = line(&wizard)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "(✓) Tasks ── (2) Review ── (3) Finish");
    }
}
