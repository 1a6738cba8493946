//! 结果与错误展示

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use draw_panel_core::{DrawDisplay, DrawPhase};

use crate::texts;
use crate::view::theme::colors;

/// 渲染错误提示条（只在抽取失败后出现）
pub fn render_banner(frame: &mut Frame, area: Rect, banner: &str) {
    let c = colors();
    let block = Block::default()
        .title(format!(" {} ", texts::ERROR_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error));

    let paragraph = Paragraph::new(banner.to_string())
        .style(Style::default().fg(c.error))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

/// 渲染结果框
pub fn render_result(frame: &mut Frame, area: Rect, display: &DrawDisplay, phase: &DrawPhase) {
    let c = colors();

    let fg = match phase {
        DrawPhase::Idle | DrawPhase::InFlight => c.muted,
        DrawPhase::Succeeded(_) => c.success,
        DrawPhase::Failed(_) => c.error,
    };

    let block = Block::default()
        .title(format!(" {} ", texts::RESULT_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    // 结果垂直居中
    let inner_height = area.height.saturating_sub(2);
    let mut lines = vec![Line::from(""); usize::from(inner_height.saturating_sub(1) / 2)];
    lines.push(Line::styled(
        display.status_line.clone(),
        Style::default().fg(fg).add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
