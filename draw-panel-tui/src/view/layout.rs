//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use draw_panel_core::RangeField;

use crate::model::{App, FocusField};
use crate::texts;

use super::components;
use super::theme::{colors, Styles};

/// 控件行高度（含边框）
const CONTROL_HEIGHT: u16 = 3;
/// 错误提示条高度
const BANNER_HEIGHT: u16 = 3;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_panel(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 帮助弹窗在最上层
    if app.show_help {
        components::help::render(frame);
    }
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = format!(
        " {} · {}",
        texts::APP_TITLE,
        texts::mode_name(app.panel.mode())
    );
    let paragraph = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(paragraph, area);
}

/// 渲染抽取面板：控件行 + 错误提示 + 结果框
fn render_panel(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let display = app.panel.display();
    let banner_height = if display.error_banner.is_some() {
        BANNER_HEIGHT
    } else {
        0
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CONTROL_HEIGHT), // 控件行
            Constraint::Length(1),              // 间隔
            Constraint::Length(banner_height),  // 错误提示
            Constraint::Min(3),                 // 结果框
        ])
        .split(inner);

    render_controls(app, frame, rows[0], display.trigger_enabled);

    if let Some(banner) = &display.error_banner {
        components::result::render_banner(frame, rows[2], banner);
    }
    components::result::render_result(frame, rows[3], &display, app.panel.phase());
}

/// 渲染控件行：模式: [☺ #] [最小学号] [最大学号] [抽！]
fn render_controls(app: &App, frame: &mut Frame, area: Rect, trigger_enabled: bool) {
    let range = app.panel.active_range();
    let lower = range.lower_spinner();
    let upper = range.upper_spinner();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7), // " 模式: "
            Constraint::Length(components::mode_toggle::width()),
            Constraint::Length(1),
            Constraint::Length(components::spinner::width(&lower)),
            Constraint::Length(1),
            Constraint::Length(components::spinner::width(&upper)),
            Constraint::Length(2),
            Constraint::Length(components::button::width()),
            Constraint::Min(0),
        ])
        .split(area);

    // 标签与控件文字对齐（控件有上边框）
    let label_area = Rect {
        y: area.y + 1,
        height: 1,
        ..columns[0]
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {} ", texts::MODE_LABEL), Styles::title())),
        label_area,
    );

    components::mode_toggle::render(
        frame,
        columns[1],
        app.panel.mode(),
        app.focus == FocusField::ModeToggle,
    );

    let editing_for = |field: RangeField| app.editing.as_ref().filter(|e| e.field == field);
    components::spinner::render(
        frame,
        columns[3],
        &lower,
        editing_for(RangeField::Lower),
        app.focus == FocusField::Lower,
    );
    components::spinner::render(
        frame,
        columns[5],
        &upper,
        editing_for(RangeField::Upper),
        app.focus == FocusField::Upper,
    );

    components::button::render(
        frame,
        columns[7],
        trigger_enabled,
        app.focus == FocusField::DrawButton,
    );
}
