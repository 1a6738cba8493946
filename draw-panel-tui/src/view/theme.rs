//! 主题和样式定义

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 设置主题（通过索引值）
/// 定义索引值 0 = Dark, 1 = Light
pub fn set_theme_index(index: u8) {
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 对应 `set_theme_index` 的索引值
    pub fn index(self) -> u8 {
        match self {
            Theme::Dark => 0,
            Theme::Light => 1,
        }
    }
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题：暖红高亮
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(28, 24, 24),
            fg: Color::Rgb(232, 222, 214),
            border: Color::Rgb(78, 66, 64),
            border_focused: Color::Rgb(226, 92, 72),
            highlight: Color::Rgb(196, 58, 48),
            selected_bg: Color::Rgb(120, 40, 36),
            selected_fg: Color::Rgb(255, 246, 232),
            success: Color::Rgb(244, 196, 84),
            warning: Color::Rgb(240, 160, 96),
            error: Color::Rgb(255, 110, 110),
            muted: Color::Rgb(140, 128, 122),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(252, 247, 240),
            fg: Color::Rgb(58, 44, 40),
            border: Color::Rgb(214, 200, 190),
            border_focused: Color::Rgb(190, 52, 40),
            highlight: Color::Rgb(178, 40, 32),
            selected_bg: Color::Rgb(250, 214, 200),
            selected_fg: Color::Rgb(70, 20, 16),
            success: Color::Rgb(176, 112, 0),
            warning: Color::Rgb(196, 100, 20),
            error: Color::Rgb(200, 30, 50),
            muted: Color::Rgb(150, 136, 128),
        }
    }
}

/// 常用样式（跟随当前主题）
pub struct Styles;

impl Styles {
    /// 边框样式
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    /// 不可用控件样式
    pub fn disabled() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().success)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(colors().muted)
    }
}
