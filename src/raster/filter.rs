//! 5-tap low-pass filter used by the subpixel downsamplers.
//!
//! Weights follow FreeType's default LCD filter: `A = 0x30`, `C = 0x20`, taps
//! `(A - C, A + C, 2A, A + C, A - C)`.

const FIR_WA: u32 = 0x30;
const FIR_WC: u32 = 0x20;

const W0: u32 = FIR_WA - FIR_WC;
const W1: u32 = FIR_WA + FIR_WC;
const W2: u32 = FIR_WA * 2;

/// Sum of all tap weights.
pub const FIR_WEIGHT_SUM: u32 = W0 + W1 + W2 + W1 + W0;

/// Weighted average of five consecutive samples, rounded half-up.
pub fn fir5(x: [u8; 5]) -> u8 {
    let acc = u32::from(x[0]) * W0
        + u32::from(x[1]) * W1
        + u32::from(x[2]) * W2
        + u32::from(x[3]) * W1
        + u32::from(x[4]) * W0;
    // Weights sum to the divisor, so in-range samples give an in-range result.
    ((acc + FIR_WEIGHT_SUM / 2) / FIR_WEIGHT_SUM) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/raster/filter.rs"]
mod tests;
