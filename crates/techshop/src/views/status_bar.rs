//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `[timestamp] emoji message                     [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 || area.width < 2 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let mut x = area.x + 1;

        if !vm.timestamp.is_empty() {
            let ts = format!("[{}] ", vm.timestamp);
            buf.set_string(x, area.y, &ts, vm.metadata_style);
            x += ts.chars().count() as u16;
        }

        // Emoji render two cells wide, plus a space
        buf.set_string(x, area.y, vm.emoji, vm.message_style);
        x += 3;

        let source = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}]", vm.source)
        };
        let source_width = source.chars().count() as u16;

        let available = area
            .width
            .saturating_sub(x - area.x)
            .saturating_sub(source_width + 2) as usize;

        if vm.message.chars().count() > available {
            let truncated: String = vm
                .message
                .chars()
                .take(available.saturating_sub(1))
                .collect();
            buf.set_string(x, area.y, format!("{}…", truncated), vm.message_style);
        } else {
            buf.set_string(x, area.y, &vm.message, vm.message_style);
        }

        if !source.is_empty() && area.width > source_width + 1 {
            let source_x = area.x + area.width - source_width - 1;
            buf.set_string(source_x, area.y, &source, vm.metadata_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[test]
    fn test_renders_welcome_message() {
        let state = AppState::default();
        let vm = StatusBarViewModel::from_state(&state);

        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget(&vm).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(row.contains("Welcome to TechShop"));
    }
}
