//! Notice toasts stacked in the top-right corner

use super::dialog::{dialog_size, render_dialog_at, DialogConfig};
use crate::state::{NoticeVariant, Notices};
use ratatui::{layout::Rect, style::Color, Frame};

const TOAST_WIDTH: u16 = 40;

/// Render live notices, newest on top
pub fn render_notices(frame: &mut Frame, notices: &Notices) {
    let area = frame.area();
    let max_width = TOAST_WIDTH.min(area.width);
    let mut y = area.y + 1;

    for notice in notices.iter() {
        let color = match notice.variant {
            NoticeVariant::Default => Color::Magenta,
            NoticeVariant::Destructive => Color::Red,
        };
        let config = DialogConfig {
            title: &notice.title,
            title_color: color,
            border_color: color,
            message: &notice.description,
            hint: None,
            max_width,
        };
        let (_, height, _) = dialog_size(&config, max_width);
        let bottom = area.y + area.height.saturating_sub(1);
        if y + height > bottom {
            break;
        }

        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(max_width + 1),
            y,
            width: max_width,
            height,
        };
        render_dialog_at(frame, toast_area, config);
        y += height;
    }
}
