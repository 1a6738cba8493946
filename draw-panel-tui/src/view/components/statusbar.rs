//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusField};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors().border)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(colors().border)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(colors().warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "切换焦点")];

    match app.focus {
        FocusField::ModeToggle => {
            hints.push(("←→", "选择模式"));
        }
        FocusField::Lower | FocusField::Upper => {
            if app.editing.is_some() {
                hints.push(("Enter", "确定"));
                hints.push(("Esc", "取消"));
            } else {
                hints.push(("↑↓", "调整"));
                hints.push(("0-9", "输入"));
            }
        }
        FocusField::DrawButton => {
            hints.push(("Enter", "抽取"));
        }
    }

    if app.focus != FocusField::DrawButton {
        hints.push(("d", "抽取"));
    }
    hints.push(("m", "切换模式"));
    hints.push(("?", "帮助"));
    hints.push(("q", "退出"));

    hints
}
