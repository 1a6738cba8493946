//! 数字输入框状态
//!
//! 输入框只负责编辑与校验：用户键入的内容先进入缓冲区，
//! 提交时按 `SpinnerSpec` 的上下限校验，合法则上报 `Some(v)`，
//! 否则上报 `None`（区间协调器会忽略）。

use draw_panel_core::{RangeField, SpinnerSpec};

/// 最多允许输入的位数（10001 为五位）
const MAX_DIGITS: usize = 5;

/// 正在编辑的输入框
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberSpinner {
    /// 编辑的是区间的哪一端
    pub field: RangeField,
    /// 编辑缓冲区
    pub buffer: String,
}

impl NumberSpinner {
    /// 开始编辑
    pub fn begin(field: RangeField) -> Self {
        Self {
            field,
            buffer: String::new(),
        }
    }

    /// 追加一位数字，非数字或超长时忽略
    pub fn push_digit(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() || self.buffer.len() >= MAX_DIGITS {
            return false;
        }
        self.buffer.push(ch);
        true
    }

    /// 删除最后一位
    pub fn pop(&mut self) {
        self.buffer.pop();
    }

    /// 提交：返回要上报给区间协调器的值
    pub fn commit(&self, spec: &SpinnerSpec) -> Option<u32> {
        let reported = spec.accept_text(&self.buffer);
        if reported.is_none() {
            log::debug!("{} rejected input {:?}", spec.name, self.buffer);
        }
        reported
    }
}
