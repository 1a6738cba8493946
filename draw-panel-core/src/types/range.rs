//! Range coordinator
//!
//! A [`RangePair`] holds the (lower, upper) pair for one draw mode and keeps
//! `lower < upper` by repairing the upper value whenever the lower value is
//! raised onto or past it.

use crate::input::SpinnerSpec;

/// Which half of a range pair an input event targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeField {
    Lower,
    Upper,
}

/// Static bounds and labels of one range pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeLimits {
    pub lower_name: &'static str,
    pub lower_label: &'static str,
    pub upper_name: &'static str,
    pub upper_label: &'static str,
    /// Smallest accepted lower value
    pub lower_min: u32,
    /// Largest accepted lower value
    pub lower_max: u32,
    /// Largest accepted upper value
    pub upper_max: u32,
}

impl RangeLimits {
    /// 学号区间
    pub const ID: RangeLimits = RangeLimits {
        lower_name: "minId",
        lower_label: "最小学号",
        upper_name: "maxId",
        upper_label: "最大学号",
        lower_min: 1,
        lower_max: 10_000,
        upper_max: 10_001,
    };

    /// 座位网格
    ///
    /// `rowNum = 100` is rejected on purpose: repairing it would push `colNum` to 101.
    pub const PLANE: RangeLimits = RangeLimits {
        lower_name: "rowNum",
        lower_label: "行",
        upper_name: "colNum",
        upper_label: "列",
        lower_min: 1,
        lower_max: 99,
        upper_max: 100,
    };
}

/// Lower/upper pair with the strict-inequality repair rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangePair {
    lower: u32,
    upper: u32,
    limits: RangeLimits,
}

impl RangePair {
    pub fn new(limits: RangeLimits, lower: u32, upper: u32) -> Self {
        Self {
            lower,
            upper,
            limits,
        }
    }

    /// `minId = 1, maxId = 50`
    pub fn id_default() -> Self {
        Self::new(RangeLimits::ID, 1, 50)
    }

    /// `rowNum = 6, colNum = 8`
    pub fn plane_default() -> Self {
        Self::new(RangeLimits::PLANE, 6, 8)
    }

    pub fn lower(&self) -> u32 {
        self.lower
    }

    pub fn upper(&self) -> u32 {
        self.upper
    }

    /// Set the lower value.
    ///
    /// `None` and out-of-bounds values are ignored. When the current upper
    /// value is no longer strictly greater, it becomes `lower + 1`.
    /// Returns `true` when the value was accepted.
    pub fn set_lower(&mut self, value: Option<u32>) -> bool {
        let Some(v) = value else {
            return false;
        };
        if !(self.limits.lower_min..=self.limits.lower_max).contains(&v) {
            log::debug!("Ignoring {} = {v}: out of bounds", self.limits.lower_name);
            return false;
        }

        self.lower = v;
        if self.upper <= v {
            self.upper = v + 1;
        }
        true
    }

    /// Set the upper value as delivered by its input.
    ///
    /// The upper input is configured with a live minimum of `lower + 1`, so an
    /// out-of-order value only comes from a misbehaving input. It is stored
    /// anyway and stays until the next lower-bound change repairs it.
    pub fn set_upper(&mut self, value: Option<u32>) -> bool {
        let Some(v) = value else {
            return false;
        };
        if !(1..=self.limits.upper_max).contains(&v) {
            log::debug!("Ignoring {} = {v}: out of bounds", self.limits.upper_name);
            return false;
        }

        self.upper = v;
        if v <= self.lower {
            log::warn!(
                "{} = {v} is not above {} = {}; keeping it until the next {} change",
                self.limits.upper_name,
                self.limits.lower_name,
                self.lower,
                self.limits.lower_name
            );
        }
        true
    }

    /// Route a change to the targeted half
    pub fn set(&mut self, field: RangeField, value: Option<u32>) -> bool {
        match field {
            RangeField::Lower => self.set_lower(value),
            RangeField::Upper => self.set_upper(value),
        }
    }

    /// `lower < upper`
    pub fn is_consistent(&self) -> bool {
        self.lower < self.upper
    }

    /// Input description for the lower value
    pub fn lower_spinner(&self) -> SpinnerSpec {
        SpinnerSpec {
            name: self.limits.lower_name,
            label: self.limits.lower_label,
            min: self.limits.lower_min,
            max: self.limits.lower_max,
            value: self.lower,
        }
    }

    /// Input description for the upper value; its minimum follows `lower + 1`
    pub fn upper_spinner(&self) -> SpinnerSpec {
        SpinnerSpec {
            name: self.limits.upper_name,
            label: self.limits.upper_label,
            min: self.lower + 1,
            max: self.limits.upper_max,
            value: self.upper,
        }
    }

    /// Input description for either half
    pub fn spinner(&self, field: RangeField) -> SpinnerSpec {
        match field {
            RangeField::Lower => self.lower_spinner(),
            RangeField::Upper => self.upper_spinner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let id = RangePair::id_default();
        assert_eq!((id.lower(), id.upper()), (1, 50));
        let plane = RangePair::plane_default();
        assert_eq!((plane.lower(), plane.upper()), (6, 8));
    }

    #[test]
    fn raising_lower_past_upper_repairs_upper() {
        let mut id = RangePair::id_default();
        assert!(id.set_lower(Some(60)));
        assert_eq!((id.lower(), id.upper()), (60, 61));
    }

    #[test]
    fn lower_equal_to_upper_is_repaired() {
        let mut id = RangePair::id_default();
        assert!(id.set_lower(Some(50)));
        assert_eq!(id.upper(), 51);
        assert_ne!(id.lower(), id.upper());
    }

    #[test]
    fn lower_below_upper_leaves_upper_alone() {
        let mut plane = RangePair::plane_default();
        assert!(plane.set_lower(Some(3)));
        assert_eq!((plane.lower(), plane.upper()), (3, 8));
    }

    #[test]
    fn every_accepted_lower_keeps_strict_order() {
        let mut id = RangePair::id_default();
        for v in [1, 49, 50, 51, 500, 9_999, 10_000, 2, 10_000] {
            assert!(id.set_lower(Some(v)));
            assert!(id.upper() > id.lower());
            assert!(id.upper() <= RangeLimits::ID.upper_max);
        }

        let mut plane = RangePair::plane_default();
        for v in 1..=99 {
            assert!(plane.set_lower(Some(v)));
            assert!(plane.upper() > plane.lower());
            assert!(plane.upper() <= RangeLimits::PLANE.upper_max);
        }
    }

    #[test]
    fn none_and_out_of_bounds_are_ignored() {
        let mut id = RangePair::id_default();
        assert!(!id.set_lower(None));
        assert!(!id.set_lower(Some(0)));
        assert!(!id.set_lower(Some(10_001)));
        assert!(!id.set_upper(None));
        assert!(!id.set_upper(Some(10_002)));
        assert_eq!(id, RangePair::id_default());

        let mut plane = RangePair::plane_default();
        assert!(!plane.set_lower(Some(100)));
        assert!(!plane.set_upper(Some(101)));
        assert_eq!(plane, RangePair::plane_default());
    }

    #[test]
    fn out_of_order_upper_is_tolerated_until_next_lower_change() {
        let mut id = RangePair::id_default();
        id.set_lower(Some(10));
        assert!(id.set_upper(Some(5)));
        assert_eq!(id.upper(), 5);
        assert!(!id.is_consistent());

        id.set_lower(Some(10));
        assert_eq!(id.upper(), 11);
        assert!(id.is_consistent());
    }

    #[test]
    fn upper_spinner_follows_lower() {
        let mut id = RangePair::id_default();
        id.set_lower(Some(20));
        let spec = id.upper_spinner();
        assert_eq!((spec.name, spec.min, spec.max, spec.value), ("maxId", 21, 10_001, 50));

        let lower = RangePair::plane_default().spinner(RangeField::Lower);
        assert_eq!((lower.label, lower.min, lower.max), ("行", 1, 99));
    }
}
