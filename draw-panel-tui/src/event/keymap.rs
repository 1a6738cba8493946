//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift（部分终端输入 `?` 时会带上 Shift）。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        match self.code {
            KeyCode::Char(_) if self.modifiers == KeyModifiers::NONE => {
                key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
            }
            _ => key.modifiers == self.modifiers,
        }
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 焦点
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 面板操作
    pub const TOGGLE_MODE: KeyBinding = KeyBinding::key(KeyCode::Char('m'));
    pub const DRAW: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const PRESS: KeyBinding = KeyBinding::key(KeyCode::Char(' '));

    // 输入框
    pub const STEP_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const STEP_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const DELETE: KeyBinding = KeyBinding::key(KeyCode::Backspace);

    // 模式按钮
    pub const PICK_LEFT: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const PICK_RIGHT: KeyBinding = KeyBinding::key(KeyCode::Right);
}
