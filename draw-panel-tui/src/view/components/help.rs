//! 帮助弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::texts;
use crate::view::theme::{colors, Styles};

/// 计算居中区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染帮助弹窗
pub fn render(frame: &mut Frame) {
    let c = colors();

    let key_width = texts::HELP_LINES
        .iter()
        .map(|(key, _)| key.width())
        .max()
        .unwrap_or(0);
    let line_width = texts::HELP_LINES
        .iter()
        .map(|(_, desc)| key_width + 2 + desc.width())
        .max()
        .unwrap_or(0);

    let width = u16::try_from(line_width + 6).unwrap_or(u16::MAX);
    let height = u16::try_from(texts::HELP_LINES.len() + 4).unwrap_or(u16::MAX);
    let area = centered_rect(width, height, frame.area());

    // 清除背景
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for (key, desc) in texts::HELP_LINES {
        let padding = " ".repeat(key_width - key.width() + 2);
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(*key, Styles::hint_key()),
            Span::raw(padding),
            Span::styled(*desc, Style::default().fg(c.fg)),
        ]));
    }

    let block = Block::default()
        .title(format!(" {} ", texts::HELP_TITLE))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
