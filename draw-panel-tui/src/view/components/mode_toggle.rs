//! 模式切换按钮

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use draw_panel_core::DrawMode;

use crate::texts;
use crate::view::theme::{colors, Styles};

/// 单个模式图标两侧各留一格空白
fn segment(mode: DrawMode) -> String {
    format!(" {} ", texts::mode_icon(mode))
}

/// 控件宽度（含边框）
pub fn width() -> u16 {
    let inner: usize = DrawMode::all().iter().map(|m| segment(*m).width()).sum();
    u16::try_from(inner).unwrap_or(u16::MAX).saturating_add(2)
}

/// 渲染模式切换按钮：当前模式高亮
pub fn render(frame: &mut Frame, area: Rect, current: DrawMode, focused: bool) {
    let c = colors();
    let spans: Vec<Span> = DrawMode::all()
        .iter()
        .map(|mode| {
            let style = if *mode == current {
                Styles::selected()
            } else {
                Style::default().fg(c.muted)
            };
            Span::styled(segment(*mode), style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
