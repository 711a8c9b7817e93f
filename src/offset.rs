//! Offset computations from the `onefile` subject module. Both functions are
//! pure and total; they are the worked example the mock generator's test
//! fixtures describe.

/// Base value plus a flag-dependent offset: 95 + 20 when enabled, 95 + 10
/// otherwise.
pub fn conditional_offset(enable: bool) -> u32 {
    let offset = if enable { 20 } else { 10 };
    95 + offset
}

/// Base value minus a threshold-dependent offset: 95 - 20 above 10,
/// 95 - 10 at or below it.
pub fn threshold_offset(value: i32) -> u32 {
    let offset = if value > 10 { 20 } else { 10 };
    95 - offset
}
