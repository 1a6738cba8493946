//! 面板控件消息处理

use draw_panel_core::PanelEvent;

use super::Command;
use crate::message::PanelMessage;
use crate::model::{App, NumberSpinner};
use crate::texts;

/// 处理面板控件消息
pub fn update(app: &mut App, msg: PanelMessage) -> Option<Command> {
    match msg {
        PanelMessage::ToggleMode => {
            commit_editing(app);
            let mode = app.panel.toggle_mode();
            app.set_status(texts::mode_changed(mode));
            None
        }

        PanelMessage::SelectMode(mode) => {
            commit_editing(app);
            if app.panel.set_mode(mode) {
                app.set_status(texts::mode_changed(app.panel.mode()));
            }
            None
        }

        PanelMessage::StepUp | PanelMessage::StepDown => {
            // 步进以已提交的值为准，先丢弃未提交的缓冲区
            app.editing = None;
            let field = app.focus.range_field()?;
            let spec = app.panel.active_range().spinner(field);
            let value = if msg == PanelMessage::StepUp {
                spec.step_up()
            } else {
                spec.step_down()
            };
            app.panel.apply(PanelEvent::SetRange(field, value));
            None
        }

        PanelMessage::InputDigit(ch) => {
            let field = app.focus.range_field()?;
            if !matches!(&app.editing, Some(editing) if editing.field == field) {
                app.editing = Some(NumberSpinner::begin(field));
            }
            if let Some(editing) = app.editing.as_mut() {
                editing.push_digit(ch);
            }
            None
        }

        PanelMessage::Backspace => {
            if let Some(editing) = app.editing.as_mut() {
                editing.pop();
            }
            None
        }

        PanelMessage::CommitInput => {
            commit_editing(app);
            None
        }

        PanelMessage::CancelInput => {
            app.editing = None;
            None
        }

        PanelMessage::Draw => {
            commit_editing(app);
            app.panel.apply(PanelEvent::ClickDraw).map(Command::Draw)
        }
    }
}

/// 提交正在编辑的输入框（若有）
///
/// 缓冲区中的内容按输入框当前的上下限校验后上报；不合法时上报 None，
/// 区间保持不变。
pub fn commit_editing(app: &mut App) {
    let Some(editing) = app.editing.take() else {
        return;
    };
    let spec = app.panel.active_range().spinner(editing.field);
    let value = editing.commit(&spec);
    app.panel.apply(PanelEvent::SetRange(editing.field, value));
}
