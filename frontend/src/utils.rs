/// Delay between consecutive items of a staggered reveal.
pub const STAGGER_STEP_MS: u32 = 150;

/// Wall-clock time in milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// Wall-clock time in milliseconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

/// Inline style that delays the reveal animation of item `index`.
pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {}ms;", index as u32 * STAGGER_STEP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_style(0), "animation-delay: 0ms;");
        assert_eq!(stagger_style(3), "animation-delay: 450ms;");
    }

    #[test]
    fn clock_is_past_epoch() {
        assert!(now_millis() > 0);
    }
}
