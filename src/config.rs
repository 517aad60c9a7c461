use core::sync::atomic::{AtomicBool, Ordering};

static REMOVE_NULL_VALUES_ON_DISPLAY: AtomicBool = AtomicBool::new(true);

pub fn is_remove_null_values_on_display() -> bool {
    REMOVE_NULL_VALUES_ON_DISPLAY.load(Ordering::Relaxed)
}

/// When disabled, sum chains render every stored node, including
/// zero-multiplier monomials.
pub fn set_remove_null_values_on_display(val: bool) {
    REMOVE_NULL_VALUES_ON_DISPLAY.store(val, Ordering::Relaxed)
}
