//! 数字输入框

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use draw_panel_core::SpinnerSpec;

use crate::model::NumberSpinner;
use crate::view::theme::{colors, Styles};

/// 数值区域宽度：五位数字 + 两侧的 ▾▴
const VALUE_WIDTH: usize = 9;

/// 控件宽度（含边框），标题较长时以标题为准
pub fn width(spec: &SpinnerSpec) -> u16 {
    let title = format!(" {} ", spec.label).width();
    u16::try_from(title.max(VALUE_WIDTH)).unwrap_or(u16::MAX).saturating_add(2)
}

/// 渲染输入框
///
/// 编辑中显示缓冲区和光标，否则显示已提交的值。
pub fn render(
    frame: &mut Frame,
    area: Rect,
    spec: &SpinnerSpec,
    editing: Option<&NumberSpinner>,
    focused: bool,
) {
    let c = colors();

    let value = match editing {
        Some(editing) => Span::styled(
            format!("{}_", editing.buffer),
            Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(spec.value.to_string(), Style::default().fg(c.fg)),
    };

    let arrow_style = if focused {
        Style::default().fg(c.highlight)
    } else {
        Style::default().fg(c.muted)
    };

    let line = Line::from(vec![
        Span::styled("▾ ", arrow_style),
        value,
        Span::styled(" ▴", arrow_style),
    ]);

    let block = Block::default()
        .title(format!(" {} ", spec.label))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(block);
    frame.render_widget(paragraph, area);
}
