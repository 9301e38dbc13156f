use super::*;

#[test]
fn weights_match_freetype_default() {
    assert_eq!((W0, W1, W2), (0x10, 0x50, 0x60));
    assert_eq!(FIR_WEIGHT_SUM, 288);
}

#[test]
fn constant_input_passes_through() {
    for v in 0..=255u8 {
        assert_eq!(fir5([v; 5]), v);
    }
}

#[test]
fn output_stays_in_range() {
    assert_eq!(fir5([255, 255, 255, 255, 255]), 255);
    assert_eq!(fir5([0, 0, 0, 0, 0]), 0);
    // Deterministic sweep over mixed inputs.
    let mut s = 0x2545_f491u32;
    for _ in 0..10_000 {
        let mut x = [0u8; 5];
        for v in &mut x {
            s ^= s << 13;
            s ^= s >> 17;
            s ^= s << 5;
            *v = (s >> 24) as u8;
        }
        let out = fir5(x);
        let lo = *x.iter().min().unwrap();
        let hi = *x.iter().max().unwrap();
        assert!(out >= lo && out <= hi, "{x:?} -> {out}");
    }
}

#[test]
fn impulse_response_is_symmetric() {
    // A single bright sample at each tap position.
    let taps: Vec<u8> = (0..5)
        .map(|i| {
            let mut x = [0u8; 5];
            x[i] = 255;
            fir5(x)
        })
        .collect();
    assert_eq!(taps, vec![14, 71, 85, 71, 14]);
}

#[test]
fn rounds_half_up() {
    // 9 * 16 = 144 = W/2 exactly, which rounds up to 1.
    assert_eq!(fir5([9, 0, 0, 0, 0]), 1);
    // 8 * 16 = 128 < 144 rounds down.
    assert_eq!(fir5([8, 0, 0, 0, 0]), 0);
}
