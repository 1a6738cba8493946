//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每轮主循环都会根据最新的 App 重新绘制整个界面。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局
//!         mod components;         // 模式按钮、输入框、抽取按钮、结果框、状态栏、帮助弹窗
//!         pub mod theme;          // 主题颜色与常用样式
//!
//!
//!     布局：
//!         ┌──────────────────────────────────────────────────────────┐
//!         │ 随机抽取 · 学号抽取                                          │  标题栏
//!         ├──────────────────────────────────────────────────────────┤
//!         │         ┌─────┐┌最小学号─┐┌最大学号─┐  ┌──────┐              │
//!         │  模式:  │ ☺ # ││ ▾ 1 ▴  ││ ▾ 50 ▴ │  │  抽！  │              │  控件行
//!         │         └─────┘└────────┘└────────┘  └──────┘              │
//!         │ ┌错误───────────────────────────────────────────────────┐ │  只在失败后出现
//!         │ │ 错误: network unreachable                              │ │
//!         │ └───────────────────────────────────────────────────────┘ │
//!         │ ┌结果───────────────────────────────────────────────────┐ │
//!         │ │                       结果: 17                          │ │
//!         │ └───────────────────────────────────────────────────────┘ │
//!         ├──────────────────────────────────────────────────────────┤
//!         │ Tab 切换焦点 │ ←→ 选择模式 │ d 抽取 │ ...                     │  状态栏
//!         └──────────────────────────────────────────────────────────┘
//!
//!     结果框与错误提示的文字来自 DrawPanel::display()，
//!     抽取进行中时 “抽！” 按钮变灰。
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
