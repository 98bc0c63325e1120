//! Process-wide tri-state switches gating style and DEC-private-mode output.

use std::sync::atomic::{AtomicU8, Ordering};

const ENABLED: u8 = 0;
const DISABLED: u8 = 1;
const PERMANENTLY_DISABLED: u8 = 2;

/// A tri-state gate: `enabled` (default) | `disabled` | `permanently_disabled`.
/// Disabling permanently is one-way -- once set, `enable()` is a no-op.
pub struct Gate(AtomicU8);

impl Gate {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU8::new(ENABLED))
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Relaxed) == ENABLED
    }

    pub fn disable(&self) {
        self.0
            .compare_exchange(ENABLED, DISABLED, Ordering::Relaxed, Ordering::Relaxed)
            .ok();
    }

    pub fn enable(&self) {
        self.0
            .compare_exchange(DISABLED, ENABLED, Ordering::Relaxed, Ordering::Relaxed)
            .ok();
    }

    /// One-way: no later `enable()` call can undo this.
    pub fn disable_permanently(&self) {
        self.0.store(PERMANENTLY_DISABLED, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_permanently_disabled(&self) -> bool {
        self.0.load(Ordering::Relaxed) == PERMANENTLY_DISABLED
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

/// Disables color/style SGR output. When disabled, SGR constructors return
/// an empty [`vtesc::EscSegment`].
pub static STYLE_GATE: Gate = Gate::new();

/// Disables DECSET/DECRST output. When disabled, `DecPrivateMode::high`/`low`
/// return an empty [`vtesc::EscSegment`].
pub static DECPM_GATE: Gate = Gate::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permanent_disable_rejects_later_enable() {
        let gate = Gate::new();
        gate.disable_permanently();
        gate.enable();
        assert!(gate.is_permanently_disabled());
        assert!(!gate.is_enabled());
    }

    #[test]
    fn disable_then_enable_round_trips() {
        let gate = Gate::new();
        gate.disable();
        assert!(!gate.is_enabled());
        gate.enable();
        assert!(gate.is_enabled());
    }
}
