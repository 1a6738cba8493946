//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!     should_quit: false,
//!     focus: FocusField::ModeToggle,                  // 焦点在模式按钮上
//!     panel: DrawPanel {
//!         mode: IdMode,                                   // 默认学号抽取
//!         id_range: (1, 50),
//!         plane_range: (6, 8),
//!         phase: Idle,                                    // “等待抽取...”
//!     },
//!     editing: None,
//!     status_message: None,
//!     show_help: false,
//! }
//!
//!
//! 主循环大约每 50 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     while let Some(outcome) = dispatcher.try_recv() {
//!         update(app, AppMessage::DrawFinished(outcome))  // 收取后台抽取结果
//!     }
//!     if let Some(event) = poll_event() {             // 轮询输入，最多等待 50ms
//!         let msg = handle_event(event, &app);            // 翻译为消息
//!         if let Some(cmd) = update(&mut app, msg) {      // 更新状态
//!             dispatcher.dispatch(..)                     // 执行副作用
//!         }
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::DrawDispatcher;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update::{self, Command};
use crate::util::Term;
use crate::view;

/// 事件轮询间隔；抽取结果最迟在一个间隔后显示
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, dispatcher: &mut DrawDispatcher) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 收取已完成的抽取结果
        while let Some(outcome) = dispatcher.try_recv() {
            update::update(app, AppMessage::DrawFinished(outcome));
        }

        // 4. 轮询事件
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态，执行副作用
            if let Some(command) = update::update(app, msg) {
                execute(command, dispatcher);
            }
        }
    }

    Ok(())
}

/// 执行 Update 层返回的副作用
fn execute(command: Command, dispatcher: &mut DrawDispatcher) {
    match command {
        Command::Draw(request) => dispatcher.dispatch(request),
    }
}
