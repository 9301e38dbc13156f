use super::*;

#[test]
fn strides_are_four_byte_aligned() {
    assert_eq!(SurfaceFormat::Argb32.stride_for_width(3), Some(12));
    assert_eq!(SurfaceFormat::A8.stride_for_width(5), Some(8));
    assert_eq!(SurfaceFormat::A8.stride_for_width(8), Some(8));
}

#[test]
fn new_color_surface_exposes_plane() {
    let s = Surface::new(SurfaceFormat::Rgb24, 5, 3).unwrap();
    assert_eq!((s.width(), s.height(), s.stride()), (5, 3, 20));
    let plane = s.plane().unwrap();
    assert_eq!(plane.components(), 4);
    assert_eq!(s.data().len(), 60);
}

#[test]
fn mask_surface_is_not_renderable() {
    let mut s = Surface::new(SurfaceFormat::A8, 5, 2).unwrap();
    assert!(!s.format().is_renderable());
    assert!(s.plane().is_none());
    assert_eq!(s.stride(), 8);
    assert!(matches!(s.plane_mut(), Err(RenderError::Unknown(_))));
}

#[test]
fn from_data_validates_and_keeps_bytes() {
    let data: Vec<u8> = (0..32).collect();
    let s = Surface::from_data(SurfaceFormat::Argb32, 3, 2, 16, data.clone()).unwrap();
    assert_eq!(s.plane().unwrap().pixel(1, 1), &[20, 21, 22, 23]);
    assert_eq!(s.into_data(), data);

    assert!(Surface::from_data(SurfaceFormat::Argb32, 3, 2, 8, vec![0; 32]).is_err());
    assert!(Surface::from_data(SurfaceFormat::A8, 4, 2, 4, vec![0; 7]).is_err());
    assert!(Surface::from_data(SurfaceFormat::A8, 4, 2, 4, vec![0; 8]).is_ok());
}

#[test]
fn data_mut_writes_through() {
    let mut s = Surface::new(SurfaceFormat::Argb32, 1, 1).unwrap();
    s.data_mut()[3] = 0xFF;
    assert_eq!(s.plane().unwrap().pixel(0, 0), &[0, 0, 0, 0xFF]);
}
