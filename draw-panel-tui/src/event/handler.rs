//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use draw_panel_core::DrawMode;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, PanelMessage};
use crate::model::{App, FocusField};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 窗口大小改变时下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.show_help {
        return handle_help_keys(&key);
    }

    // Tab / Shift+Tab: 移动焦点
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }
    if key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }

    // 输入框的按键优先（数字、退格、Esc）
    if let Some(msg) = handle_spinner_keys(&key, app) {
        return msg;
    }

    // 全局快捷键
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::TOGGLE_MODE.matches(&key) {
        return AppMessage::Panel(PanelMessage::ToggleMode);
    }
    if DefaultKeymap::DRAW.matches(&key) {
        return AppMessage::Panel(PanelMessage::Draw);
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearStatus;
    }

    match app.focus {
        FocusField::ModeToggle => handle_toggle_keys(&key, app),
        FocusField::DrawButton => handle_button_keys(&key),
        FocusField::Lower | FocusField::Upper => AppMessage::Noop,
    }
}

/// 帮助弹窗打开时的按键
fn handle_help_keys(key: &KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(key)
        || DefaultKeymap::HELP.matches(key)
        || DefaultKeymap::CONFIRM.matches(key)
        || DefaultKeymap::QUIT.matches(key)
    {
        AppMessage::CloseHelp
    } else {
        AppMessage::Noop
    }
}

/// 焦点在输入框上时的按键
fn handle_spinner_keys(key: &KeyEvent, app: &App) -> Option<AppMessage> {
    if !app.focus.is_spinner() {
        return None;
    }

    let msg = match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() => PanelMessage::InputDigit(ch),
        _ if DefaultKeymap::STEP_UP.matches(key) => PanelMessage::StepUp,
        _ if DefaultKeymap::STEP_DOWN.matches(key) => PanelMessage::StepDown,
        _ if DefaultKeymap::DELETE.matches(key) => PanelMessage::Backspace,
        _ if DefaultKeymap::CONFIRM.matches(key) => PanelMessage::CommitInput,
        _ if DefaultKeymap::BACK.matches(key) && app.editing.is_some() => PanelMessage::CancelInput,
        _ => return None,
    };
    Some(AppMessage::Panel(msg))
}

/// 焦点在模式按钮上时的按键
///
/// ← / → 相当于点击左 / 右两个模式按钮；点击已选中的按钮上报 None。
fn handle_toggle_keys(key: &KeyEvent, app: &App) -> AppMessage {
    let clicked = if DefaultKeymap::PICK_LEFT.matches(key) {
        DrawMode::IdMode
    } else if DefaultKeymap::PICK_RIGHT.matches(key) {
        DrawMode::PlaneMode
    } else if DefaultKeymap::PRESS.matches(key) || DefaultKeymap::CONFIRM.matches(key) {
        return AppMessage::Panel(PanelMessage::ToggleMode);
    } else {
        return AppMessage::Noop;
    };

    let selected = (clicked != app.panel.mode()).then_some(clicked);
    AppMessage::Panel(PanelMessage::SelectMode(selected))
}

/// 焦点在抽取按钮上时的按键
fn handle_button_keys(key: &KeyEvent) -> AppMessage {
    if DefaultKeymap::PRESS.matches(key) || DefaultKeymap::CONFIRM.matches(key) {
        AppMessage::Panel(PanelMessage::Draw)
    } else {
        AppMessage::Noop
    }
}
