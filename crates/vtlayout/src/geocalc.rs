//! [`GeoCalculator`]: a sizing rule for one axis position.
//!
//! `call(axis_total, remaining)` runs a small two-stage pipeline: first a
//! raw value is derived from `base_spec` (plus an optional adjustment and
//! range clamp/step), then the `remain_compare` program picks the final
//! size from `{raw, remaining, 0}`.

use std::fmt;
use std::sync::Arc;

/// How a calculator derives its raw size before the `remain_compare` program runs.
#[derive(Clone)]
pub enum BaseSpec {
    /// A constant number of cells.
    Fixed(i64),
    /// A fraction of `axis_total` (not `remaining`).
    Fraction(f64),
    /// Consume whatever is left: raw value is `axis_total` itself, relying
    /// on a `remain_compare` program (typically `if val>remain:use remain`)
    /// to cap it.
    Remaining,
    /// A user function computing the size directly from
    /// `(axis_total, remaining)`. Delegates entirely: adjustment, the range
    /// rule, and `remain_compare` are all bypassed, same as the original's
    /// callable `base_spec`.
    Function(Arc<dyn Fn(i64, i64) -> i64 + Send + Sync>),
}

impl fmt::Debug for BaseSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseSpec::Fixed(n) => write!(f, "Fixed({n})"),
            BaseSpec::Fraction(x) => write!(f, "Fraction({x})"),
            BaseSpec::Remaining => write!(f, "Remaining"),
            BaseSpec::Function(_) => write!(f, "Function(..)"),
        }
    }
}

/// Clamp to `[start, end)`, then round to the nearest multiple of `step`'s
/// absolute value -- down for a positive step, or down-then-`+abs(step)`
/// (i.e. up) for a negative step. `step == 0` disables rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeRule {
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub step: i64,
}

impl RangeRule {
    #[must_use]
    pub fn apply(&self, raw: i64) -> i64 {
        if let Some(end) = self.end {
            if raw > end - 1 {
                return end - 1;
            }
        }
        if let Some(start) = self.start {
            if raw < start {
                return start;
            }
        }
        if self.step > 0 {
            raw - raw.rem_euclid(self.step)
        } else if self.step < 0 {
            let step_abs = self.step.abs();
            (raw - raw.rem_euclid(step_abs)) + step_abs
        } else {
            raw
        }
    }
}

/// A `remain_compare` predicate. `RemainLessEqZero`, wherever declared, is
/// always evaluated first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Always,
    ValGreaterThanRemain,
    ValLessThanRemain,
    ValEqualsRemain,
    RemainLessEqZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    UseVal,
    UseRemain,
    SetZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainCompareRule(pub Predicate, pub Action);

/// A sizing rule for one axis position (one grid column or row).
#[derive(Clone)]
pub struct GeoCalculator {
    base_spec: BaseSpec,
    range_rule: Option<RangeRule>,
    adjustment: i64,
    remain_compare: Vec<RemainCompareRule>,
    size: Option<i64>,
    grid_char_range: Option<(i64, i64)>,
}

impl GeoCalculator {
    #[must_use]
    pub fn new(base_spec: BaseSpec) -> Self {
        Self {
            base_spec,
            range_rule: None,
            adjustment: 0,
            remain_compare: Vec::new(),
            size: None,
            grid_char_range: None,
        }
    }

    #[must_use]
    pub fn fixed(n: i64) -> Self {
        Self::new(BaseSpec::Fixed(n))
    }

    #[must_use]
    pub fn percent(fraction: f64) -> Self {
        Self::new(BaseSpec::Fraction(fraction))
    }

    #[must_use]
    pub fn remaining() -> Self {
        Self::new(BaseSpec::Remaining).with_remain_compare(vec![RemainCompareRule(
            Predicate::ValGreaterThanRemain,
            Action::UseRemain,
        )])
    }

    #[must_use]
    pub fn with_range_rule(mut self, rule: RangeRule) -> Self {
        self.range_rule = Some(rule);
        self
    }

    #[must_use]
    pub fn with_adjustment(mut self, adjustment: i64) -> Self {
        self.adjustment = adjustment;
        self
    }

    #[must_use]
    pub fn with_remain_compare(mut self, program: Vec<RemainCompareRule>) -> Self {
        self.remain_compare = program;
        self
    }

    pub fn set_base_spec(&mut self, base_spec: BaseSpec) {
        self.base_spec = base_spec;
    }

    pub fn set_range_rule(&mut self, rule: Option<RangeRule>) {
        self.range_rule = rule;
    }

    pub fn set_adjustment(&mut self, adjustment: i64) {
        self.adjustment = adjustment;
    }

    pub fn set_remain_compare(&mut self, program: Vec<RemainCompareRule>) {
        self.remain_compare = program;
    }

    #[must_use]
    pub fn size(&self) -> Option<i64> {
        self.size
    }

    #[must_use]
    pub fn grid_char_range(&self) -> Option<(i64, i64)> {
        self.grid_char_range
    }

    /// Stamp the `(start, end)` printable-column range this calculator
    /// occupies within its axis, after priority-ordered evaluation.
    pub fn stamp_range(&mut self, start: i64, end: i64) {
        self.grid_char_range = Some((start, end));
    }

    fn remain_compare_run(&self, val: i64, remain: i64) -> i64 {
        let has_remain_zero = self
            .remain_compare
            .iter()
            .find(|r| r.0 == Predicate::RemainLessEqZero);
        let rest = self.remain_compare.iter().filter(|r| r.0 != Predicate::RemainLessEqZero);
        let ordered = has_remain_zero.into_iter().chain(rest);
        for rule in ordered {
            let matched = match rule.0 {
                Predicate::Always => true,
                Predicate::ValGreaterThanRemain => val > remain,
                Predicate::ValLessThanRemain => val < remain,
                Predicate::ValEqualsRemain => val == remain,
                Predicate::RemainLessEqZero => remain <= 0,
            };
            if matched {
                return match rule.1 {
                    Action::UseVal => val,
                    Action::UseRemain => remain,
                    Action::SetZero => 0,
                };
            }
        }
        val
    }

    /// Evaluate this calculator against `(axis_total, remaining)`, caching
    /// and returning the resulting size.
    pub fn call(&mut self, axis_total: i64, remaining: i64) -> i64 {
        if let BaseSpec::Function(f) = &self.base_spec {
            let v = f(axis_total, remaining);
            self.size = Some(v);
            return v;
        }
        let raw = match &self.base_spec {
            BaseSpec::Fixed(n) => *n,
            BaseSpec::Fraction(frac) => (axis_total as f64).mul_add(*frac, 0.5).floor() as i64,
            BaseSpec::Remaining => axis_total,
            BaseSpec::Function(_) => unreachable!("handled above"),
        };
        let mut raw = raw + self.adjustment;
        if let Some(rule) = &self.range_rule {
            raw = rule.apply(raw);
        }
        let result = self.remain_compare_run(raw, remaining);
        self.size = Some(result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ignores_axis_total() {
        let mut c = GeoCalculator::fixed(10);
        assert_eq!(c.call(80, 80), 10);
    }

    #[test]
    fn fraction_rounds_to_nearest() {
        let mut c = GeoCalculator::percent(0.5);
        assert_eq!(c.call(80, 70), 40);
    }

    #[test]
    fn remaining_caps_to_remain_when_over() {
        let mut c = GeoCalculator::remaining();
        assert_eq!(c.call(80, 30), 30);
    }

    #[test]
    fn remain_le_zero_runs_before_other_clauses_regardless_of_order() {
        let mut c = GeoCalculator::fixed(10).with_remain_compare(vec![
            RemainCompareRule(Predicate::Always, Action::UseVal),
            RemainCompareRule(Predicate::RemainLessEqZero, Action::SetZero),
        ]);
        assert_eq!(c.call(80, 0), 0);
    }

    #[test]
    fn range_rule_clamps_over_and_under() {
        let rule = RangeRule { start: Some(2), end: Some(10), step: 0 };
        assert_eq!(rule.apply(20), 9);
        assert_eq!(rule.apply(0), 2);
        assert_eq!(rule.apply(5), 5);
    }

    #[test]
    fn positive_step_rounds_down_negative_step_rounds_up() {
        let down = RangeRule { start: None, end: None, step: 5 };
        assert_eq!(down.apply(12), 10);
        let up = RangeRule { start: None, end: None, step: -5 };
        assert_eq!(up.apply(12), 15);
    }
}
