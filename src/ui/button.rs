use crate::components::{ButtonProps, ButtonVariant};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::style::Modifier;

/// One-line button: `[ Label ]` for solid/outlined, bare label for text.
pub fn span(props: &ButtonProps, focused: bool) -> Span<'static> {
    let pad = " ".repeat(props.size.padding());
    let content = props.content();
    let text = match props.variant {
        ButtonVariant::Text => format!("{pad}{content}{pad}"),
        ButtonVariant::Solid | ButtonVariant::Outlined => format!("[{pad}{content}{pad}]"),
    };
    let mut style = Theme::button(props.severity, props.variant, focused);
    if props.disabled {
        style = style.add_modifier(Modifier::DIM);
    }
    Span::styled(text, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ButtonSize;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_span_width_matches_props() {
        for props in [
            ButtonProps::new("OK"),
            ButtonProps::new("Delete").size(ButtonSize::Lg),
            ButtonProps::new("Skip").variant(ButtonVariant::Text),
            ButtonProps::new("Next").icon("→", true),
        ] {
            assert_eq!(span(&props, false).content.width(), props.display_width());
        }
    }
}
