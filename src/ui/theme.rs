use crate::components::{ButtonSeverity, ButtonVariant, WizardStepStatus};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(94, 196, 182);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const BG_SURFACE: Color = Color::Rgb(30, 32, 40);
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_MUTED: Color = Color::DarkGray;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn message_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn task_normal() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn task_selected() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn task_editing() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn step(status: WizardStepStatus) -> Style {
        match status {
            WizardStepStatus::Complete => Style::default().fg(Color::Green),
            WizardStepStatus::Active => Style::default()
                .fg(Self::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
            WizardStepStatus::Upcoming => Style::default().fg(Self::TEXT_MUTED),
        }
    }

    pub fn severity_color(severity: ButtonSeverity) -> Color {
        match severity {
            ButtonSeverity::Neutral => Color::Gray,
            ButtonSeverity::Info => Color::Cyan,
            ButtonSeverity::Success => Color::Green,
            ButtonSeverity::Warning => Self::ACCENT_AMBER,
            ButtonSeverity::Danger => Color::Red,
            ButtonSeverity::Contrast => Color::White,
        }
    }

    pub fn button(severity: ButtonSeverity, variant: ButtonVariant, focused: bool) -> Style {
        let color = Self::severity_color(severity);
        let style = match variant {
            ButtonVariant::Solid => Style::default().fg(Color::Black).bg(color),
            ButtonVariant::Outlined | ButtonVariant::Text => Style::default().fg(color),
        };
        if focused {
            style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            style
        }
    }
}
