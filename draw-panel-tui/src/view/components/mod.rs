//! 界面组件

pub mod button;
pub mod help;
pub mod mode_toggle;
pub mod result;
pub mod spinner;
pub mod statusbar;
