//! 抽取按钮

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::texts;
use crate::view::theme::{colors, Styles};

/// 控件宽度（含边框）
pub fn width() -> u16 {
    let label = format!("  {}  ", texts::DRAW_BUTTON).width();
    u16::try_from(label).unwrap_or(u16::MAX).saturating_add(2)
}

/// 渲染抽取按钮；抽取进行中时变灰
pub fn render(frame: &mut Frame, area: Rect, enabled: bool, focused: bool) {
    let c = colors();

    let style = match (enabled, focused) {
        (false, _) => Styles::disabled(),
        (true, true) => Style::default()
            .bg(c.highlight)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
    };

    let border_style = if enabled {
        Styles::border(focused)
    } else {
        Styles::disabled()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(format!("  {}  ", texts::DRAW_BUTTON))
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
