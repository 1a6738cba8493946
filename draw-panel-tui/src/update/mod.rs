//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod panel;              // 面板控件子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {...}
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 副作用（Command）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Update 层不直接调用后台服务。
//!     需要异步执行的操作以 Command 的形式返回给主循环：
//!
//!         AppMessage::Panel(PanelMessage::Draw)
//!             ↓
//!         DrawPanel 进入 “抽取中” 状态，返回 DrawRequest
//!             ↓
//!         update() 返回 Some(Command::Draw(request))
//!             ↓
//!         app.rs 交给 DrawDispatcher 在 tokio 运行时中执行
//!             ↓
//!         结果通过通道返回，下一轮循环包装成 AppMessage::DrawFinished
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 输入框提交时机
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     正在编辑的输入框会在以下时刻提交：
//!         - 按 Enter
//!         - 焦点离开（Tab / Shift+Tab）
//!         - 切换模式之前
//!         - 开始抽取之前（保证抽取使用的是屏幕上看到的值）
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod panel;

use draw_panel_core::{DrawRequest, PanelEvent};

use crate::message::AppMessage;
use crate::model::App;

/// Update 层交给主循环执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 向抽取服务发起一次抽取
    Draw(DrawRequest),
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::FocusNext => {
            panel::commit_editing(app);
            app.focus = app.focus.next();
        }

        AppMessage::FocusPrev => {
            panel::commit_editing(app);
            app.focus = app.focus.prev();
        }

        AppMessage::Panel(panel_msg) => {
            return panel::update(app, panel_msg);
        }

        AppMessage::DrawFinished(outcome) => {
            app.panel.apply(PanelEvent::DrawFinished(outcome));
        }

        AppMessage::ShowHelp => {
            app.show_help = true;
        }

        AppMessage::CloseHelp => {
            app.show_help = false;
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use draw_panel_core::{DrawError, DrawMode, DrawPhase};

    use super::*;
    use crate::message::PanelMessage;
    use crate::model::FocusField;

    fn send(app: &mut App, msg: PanelMessage) -> Option<Command> {
        update(app, AppMessage::Panel(msg))
    }

    fn type_number(app: &mut App, digits: &str) {
        for ch in digits.chars() {
            send(app, PanelMessage::InputDigit(ch));
        }
    }

    fn focus(app: &mut App, target: FocusField) {
        while app.focus != target {
            update(app, AppMessage::FocusNext);
        }
    }

    #[test]
    fn id_draw_success_shows_result() {
        let mut app = App::new();

        let command = send(&mut app, PanelMessage::Draw);
        assert_eq!(
            command,
            Some(Command::Draw(DrawRequest::Id { min_id: 1, max_id: 50 }))
        );
        assert_eq!(app.panel.display().status_line, "抽取中...");
        assert!(!app.panel.trigger_enabled());

        update(&mut app, AppMessage::DrawFinished(Ok("17".into())));
        let shown = app.panel.display();
        assert_eq!(shown.status_line, "结果: 17");
        assert_eq!(shown.error_banner, None);
        assert!(shown.trigger_enabled);
    }

    #[test]
    fn typing_lower_past_upper_repairs_upper_on_commit() {
        let mut app = App::new();
        focus(&mut app, FocusField::Lower);
        type_number(&mut app, "60");
        send(&mut app, PanelMessage::CommitInput);

        assert_eq!(app.panel.id_range().lower(), 60);
        assert_eq!(app.panel.id_range().upper(), 61);
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn leaving_the_field_commits_the_buffer() {
        let mut app = App::new();
        focus(&mut app, FocusField::Lower);
        type_number(&mut app, "50");
        update(&mut app, AppMessage::FocusNext);

        assert_eq!(app.focus, FocusField::Upper);
        assert_eq!(app.editing, None);
        assert_eq!(
            (app.panel.id_range().lower(), app.panel.id_range().upper()),
            (50, 51)
        );
    }

    #[test]
    fn plane_draw_failure_shows_banner() {
        let mut app = App::new();
        send(&mut app, PanelMessage::ToggleMode);
        assert_eq!(app.panel.mode(), DrawMode::PlaneMode);
        assert_eq!(app.status_message.as_deref(), Some("模式: 座位抽取"));

        let command = send(&mut app, PanelMessage::Draw);
        assert_eq!(
            command,
            Some(Command::Draw(DrawRequest::Plane { row_num: 6, col_num: 8 }))
        );

        update(
            &mut app,
            AppMessage::DrawFinished(Err(DrawError::Remote("network unreachable".into()))),
        );
        let shown = app.panel.display();
        assert_eq!(shown.status_line, "抽取失败");
        assert_eq!(shown.error_banner.as_deref(), Some("错误: network unreachable"));
        assert!(shown.trigger_enabled);
    }

    #[test]
    fn second_draw_while_in_flight_is_ignored() {
        let mut app = App::new();
        assert!(send(&mut app, PanelMessage::Draw).is_some());
        assert_eq!(send(&mut app, PanelMessage::Draw), None);
        assert_eq!(*app.panel.phase(), DrawPhase::InFlight);

        update(&mut app, AppMessage::DrawFinished(Ok("3".into())));
        assert!(send(&mut app, PanelMessage::Draw).is_some());
    }

    #[test]
    fn stepping_lower_onto_upper_repairs_upper() {
        let mut app = App::new();
        focus(&mut app, FocusField::Lower);
        type_number(&mut app, "49");
        send(&mut app, PanelMessage::CommitInput);
        send(&mut app, PanelMessage::StepUp);

        let range = app.panel.id_range();
        assert_eq!((range.lower(), range.upper()), (50, 51));
    }

    #[test]
    fn stepping_stops_at_live_bounds() {
        let mut app = App::new();
        focus(&mut app, FocusField::Lower);
        send(&mut app, PanelMessage::StepDown);
        assert_eq!(app.panel.id_range().lower(), 1);

        // 上限输入框的最小值是下限 + 1
        send(&mut app, PanelMessage::ToggleMode);
        focus(&mut app, FocusField::Upper);
        for _ in 0..5 {
            send(&mut app, PanelMessage::StepDown);
        }
        let plane = app.panel.plane_range();
        assert_eq!((plane.lower(), plane.upper()), (6, 7));
    }

    #[test]
    fn invalid_input_is_ignored() {
        let mut app = App::new();
        focus(&mut app, FocusField::Lower);
        type_number(&mut app, "0");
        send(&mut app, PanelMessage::CommitInput);
        assert_eq!(app.panel.id_range().lower(), 1);

        type_number(&mut app, "7");
        send(&mut app, PanelMessage::CancelInput);
        assert_eq!(app.panel.id_range().lower(), 1);
        assert_eq!(app.editing, None);
    }

    #[test]
    fn pending_edit_is_committed_before_drawing() {
        let mut app = App::new();
        focus(&mut app, FocusField::Upper);
        type_number(&mut app, "30");

        let command = send(&mut app, PanelMessage::Draw);
        assert_eq!(
            command,
            Some(Command::Draw(DrawRequest::Id { min_id: 1, max_id: 30 }))
        );
    }

    #[test]
    fn reselecting_the_active_mode_keeps_it() {
        let mut app = App::new();
        send(&mut app, PanelMessage::SelectMode(None));
        assert_eq!(app.panel.mode(), DrawMode::IdMode);
        assert_eq!(app.status_message, None);

        send(&mut app, PanelMessage::SelectMode(Some(DrawMode::PlaneMode)));
        send(&mut app, PanelMessage::SelectMode(Some(DrawMode::IdMode)));
        assert_eq!(app.panel.mode(), DrawMode::IdMode);
        assert_eq!(app.status_message.as_deref(), Some("模式: 学号抽取"));
    }

    #[test]
    fn modes_keep_independent_ranges() {
        let mut app = App::new();
        focus(&mut app, FocusField::Lower);
        type_number(&mut app, "20");
        send(&mut app, PanelMessage::ToggleMode);
        send(&mut app, PanelMessage::ToggleMode);

        assert_eq!(app.panel.id_range().lower(), 20);
        assert_eq!(app.panel.plane_range().lower(), 6);
    }

    #[test]
    fn help_and_quit() {
        let mut app = App::new();
        update(&mut app, AppMessage::ShowHelp);
        assert!(app.show_help);
        update(&mut app, AppMessage::CloseHelp);
        assert!(!app.show_help);
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}
