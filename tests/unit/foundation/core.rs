use super::*;

#[test]
fn supersampling_triples_exactly_one_axis() {
    for order in SubpixelOrder::ALL {
        let s = Supersampling::for_order(Some(order));
        assert_eq!(s.x * s.y, 3, "{order}");
        if order.is_horizontal() {
            assert_eq!((s.x, s.y), (3, 1));
        } else {
            assert_eq!((s.x, s.y), (1, 3));
        }
    }
    assert_eq!(Supersampling::for_order(None), Supersampling::NONE);
}

#[test]
fn supersampling_apply_checks_overflow() {
    let s = Supersampling { x: 3, y: 1 };
    assert_eq!(s.apply(4, 5), Some((12, 5)));
    assert_eq!(s.apply(u32::MAX, 1), None);
}

#[test]
fn channel_offsets_reverse_for_bgr() {
    assert_eq!(SubpixelOrder::HorizontalRgb.channel_offsets(), [1, 0, -1]);
    assert_eq!(SubpixelOrder::VerticalRgb.channel_offsets(), [1, 0, -1]);
    assert_eq!(SubpixelOrder::HorizontalBgr.channel_offsets(), [-1, 0, 1]);
    assert_eq!(SubpixelOrder::VerticalBgr.channel_offsets(), [-1, 0, 1]);
}

#[test]
fn subpixel_order_parses_and_displays() {
    for order in SubpixelOrder::ALL {
        let parsed: SubpixelOrder = order.to_string().parse().unwrap();
        assert_eq!(parsed, order);
    }
    assert_eq!(
        " VBGR ".parse::<SubpixelOrder>().unwrap(),
        SubpixelOrder::VerticalBgr
    );
    assert!("diagonal".parse::<SubpixelOrder>().is_err());
}

#[test]
fn subpixel_order_serde_is_snake_case() {
    let s = serde_json::to_string(&SubpixelOrder::HorizontalBgr).unwrap();
    assert_eq!(s, "\"horizontal_bgr\"");
    let o: SubpixelOrder = serde_json::from_str("\"vertical_rgb\"").unwrap();
    assert_eq!(o, SubpixelOrder::VerticalRgb);
}

#[test]
fn fit_scales_each_axis_independently() {
    let s = ScaleFactors::fit(100.0, 200.0, 150, 250);
    assert_eq!(s.x, 1.5);
    assert_eq!(s.y, 1.25);
    assert!(s.is_valid());
}

#[test]
fn pixel_size_rounds_to_nearest() {
    let s = ScaleFactors::uniform(1.5);
    assert_eq!(s.pixel_size(3.0, 5.0).unwrap(), (5, 8));
    assert_eq!(ScaleFactors::uniform(0.5).pixel_size(3.0, 1.0).unwrap(), (2, 1));
    assert!(ScaleFactors::uniform(f64::NAN).pixel_size(1.0, 1.0).is_err());
    assert!(ScaleFactors::uniform(-2.0).pixel_size(1.0, 1.0).is_err());
}

#[test]
fn supersampled_scale_multiplies_axes() {
    let s = ScaleFactors { x: 2.0, y: 0.5 }.supersampled(Supersampling { x: 3, y: 1 });
    assert_eq!(s, ScaleFactors { x: 6.0, y: 0.5 });
    let a = s.to_affine().as_coeffs();
    assert_eq!(a, [6.0, 0.0, 0.0, 0.5, 0.0, 0.0]);
}

#[test]
fn invalid_scales_are_detected() {
    assert!(!ScaleFactors::uniform(0.0).is_valid());
    assert!(!ScaleFactors { x: 1.0, y: f64::INFINITY }.is_valid());
}
