//! Bounded integer input contract
//!
//! The panel never talks to a concrete spinner widget. Each range pair
//! describes the two inputs it needs as a [`SpinnerSpec`]; any front end that
//! honours [`SpinnerSpec::accept`] can drive the range coordinator.

/// Description of one bounded integer input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerSpec {
    /// Field name (`minId`, `maxId`, `rowNum`, `colNum`)
    pub name: &'static str,
    /// Label shown next to the input
    pub label: &'static str,
    /// Smallest value the input may report
    pub min: u32,
    /// Largest value the input may report
    pub max: u32,
    /// Current value
    pub value: u32,
}

impl SpinnerSpec {
    /// Validate a candidate entry.
    ///
    /// Returns `Some(v)` only for integers inside `[min, max]`; anything else
    /// means "no valid value currently" and must be reported as `None`.
    pub fn accept(&self, candidate: i64) -> Option<u32> {
        u32::try_from(candidate)
            .ok()
            .filter(|v| (self.min..=self.max).contains(v))
    }

    /// Parse raw text typed into the input, then validate it
    pub fn accept_text(&self, raw: &str) -> Option<u32> {
        raw.trim().parse::<i64>().ok().and_then(|v| self.accept(v))
    }

    /// One step up, if still inside the bounds
    pub fn step_up(&self) -> Option<u32> {
        self.accept(i64::from(self.value) + 1)
    }

    /// One step down, if still inside the bounds
    pub fn step_down(&self) -> Option<u32> {
        self.accept(i64::from(self.value) - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(min: u32, max: u32, value: u32) -> SpinnerSpec {
        SpinnerSpec {
            name: "minId",
            label: "最小学号",
            min,
            max,
            value,
        }
    }

    #[test]
    fn accepts_only_values_inside_bounds() {
        let s = spec(1, 10_000, 1);
        assert_eq!(s.accept(1), Some(1));
        assert_eq!(s.accept(10_000), Some(10_000));
        assert_eq!(s.accept(0), None);
        assert_eq!(s.accept(10_001), None);
        assert_eq!(s.accept(-3), None);
    }

    #[test]
    fn text_must_be_an_integer() {
        let s = spec(1, 100, 6);
        assert_eq!(s.accept_text(" 42 "), Some(42));
        assert_eq!(s.accept_text("4.2"), None);
        assert_eq!(s.accept_text(""), None);
        assert_eq!(s.accept_text("abc"), None);
    }

    #[test]
    fn steps_stop_at_bounds() {
        assert_eq!(spec(1, 100, 100).step_up(), None);
        assert_eq!(spec(1, 100, 1).step_down(), None);
        assert_eq!(spec(1, 100, 6).step_up(), Some(7));
        assert_eq!(spec(1, 100, 6).step_down(), Some(5));
    }
}
