//! 界面文案
//!
//! 面板只有一套中文界面，文案集中放在这里。

use draw_panel_core::DrawMode;

pub const APP_TITLE: &str = "随机抽取";
pub const MODE_LABEL: &str = "模式:";
pub const DRAW_BUTTON: &str = "抽！";
pub const HELP_TITLE: &str = "帮助";
pub const ERROR_TITLE: &str = "错误";
pub const RESULT_TITLE: &str = "结果";

/// 模式按钮上的图标
pub fn mode_icon(mode: DrawMode) -> &'static str {
    match mode {
        DrawMode::IdMode => "☺",
        DrawMode::PlaneMode => "#",
    }
}

/// 模式名称
pub fn mode_name(mode: DrawMode) -> &'static str {
    match mode {
        DrawMode::IdMode => "学号抽取",
        DrawMode::PlaneMode => "座位抽取",
    }
}

/// 切换模式后的状态栏提示
pub fn mode_changed(mode: DrawMode) -> String {
    format!("模式: {}", mode_name(mode))
}

/// 帮助弹窗中的按键说明
pub const HELP_LINES: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "切换焦点"),
    ("m", "切换抽取模式"),
    ("← / →", "选择模式（焦点在模式按钮上）"),
    ("↑ / ↓", "输入框加一 / 减一"),
    ("0-9", "在输入框中键入数字"),
    ("Enter", "提交输入 / 抽取"),
    ("Esc", "放弃输入 / 关闭帮助"),
    ("d", "抽取"),
    ("?", "显示帮助"),
    ("q / Ctrl+C", "退出"),
];
