use core::time::Duration;
use mochi_snake_core::Turn;

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Rotation keys, matched on `KeyboardEvent.key`.
pub(crate) fn turn_for_key(key: &str) -> Option<Turn> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(Turn::Left),
        "ArrowRight" | "d" | "D" => Some(Turn::Right),
        _ => None,
    }
}

/// Timeout length for gloo, which takes whole milliseconds.
pub(crate) fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
