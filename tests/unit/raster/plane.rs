use super::*;

#[test]
fn new_plane_is_tightly_packed() {
    let p = PixelPlane::new(5, 2, 3).unwrap();
    assert_eq!(p.row_stride(), 15);
    assert_eq!(p.data().len(), 30);
    assert!(p.data().iter().all(|&b| b == 0));
}

#[test]
fn with_stride_keeps_padding() {
    let p = PixelPlane::with_stride(3, 2, 4, 16, 0xFF).unwrap();
    assert_eq!(p.row_stride(), 16);
    assert_eq!(p.data().len(), 32);
    assert_eq!(p.row(1).len(), 12);
}

#[test]
fn rejects_bad_geometry() {
    assert!(matches!(
        PixelPlane::new(2, 2, 2),
        Err(RenderError::InvalidArguments(_))
    ));
    assert!(matches!(
        PixelPlane::with_stride(4, 1, 3, 11, 0),
        Err(RenderError::InvalidArguments(_))
    ));
    assert!(matches!(
        PixelPlane::from_parts(2, 2, 3, 6, vec![0; 11]),
        Err(RenderError::InvalidArguments(_))
    ));
}

#[test]
fn huge_allocation_reports_out_of_memory_or_invalid() {
    let err = PixelPlane::new(u32::MAX, u32::MAX, 4).unwrap_err();
    assert!(matches!(
        err,
        RenderError::OutOfMemory(_) | RenderError::InvalidArguments(_)
    ));
}

#[test]
fn from_parts_allows_short_last_row() {
    // Two rows of 2 BGR pixels with an 8-byte stride; the last row has no padding.
    let p = PixelPlane::from_parts(2, 2, 3, 8, vec![0; 14]).unwrap();
    assert_eq!(p.row(1).len(), 6);
}

#[test]
fn pixel_accessors_follow_stride() {
    let mut data = vec![0u8; 2 * 10];
    data[10..13].copy_from_slice(&[1, 2, 3]);
    data[14..17].copy_from_slice(&[4, 5, 6]);
    let p = PixelPlane::from_parts(2, 2, 4, 10, data).unwrap();
    assert_eq!(p.bgr(0, 1), [1, 2, 3]);
    assert_eq!(p.pixel(1, 1), &[4, 5, 6, 0]);
}

#[test]
fn row_mut_writes_only_the_row() {
    let mut p = PixelPlane::with_stride(1, 3, 3, 4, 7).unwrap();
    p.row_mut(1).fill(9);
    assert_eq!(p.data(), &[7, 7, 7, 7, 9, 9, 9, 7, 7, 7, 7, 7]);
}
