use super::*;

#[test]
fn binarize_maps_any_nonzero_to_255() {
    let mut plane = vec![0u8, 1, 127, 255];
    binarize_in_place(&mut plane);
    assert_eq!(plane, vec![0, 255, 255, 255]);
}

#[test]
fn max_in_place_takes_pixelwise_max() {
    let mut dst = vec![0u8, 200, 10];
    max_in_place(&mut dst, &[100, 50, 10]).unwrap();
    assert_eq!(dst, vec![100, 200, 10]);

    assert!(max_in_place(&mut dst, &[1, 2]).is_err());
}

#[test]
fn fill_masked_scales_alpha_by_mask() {
    let mut dst = vec![0u8; 12];
    let mask = [0u8, 128, 255];
    let color = Rgba8::new(10, 20, 30, 200);

    fill_masked(&mut dst, &mask, color).unwrap();

    assert_eq!(&dst[0..4], &[0, 0, 0, 0], "zero mask leaves pixel untouched");
    assert_eq!(&dst[4..8], &[10, 20, 30, 100], "half mask halves alpha");
    assert_eq!(&dst[8..12], &[10, 20, 30, 200], "full mask keeps alpha");
}

#[test]
fn fill_masked_rejects_mismatched_mask() {
    let mut dst = vec![0u8; 8];
    assert!(fill_masked(&mut dst, &[255u8; 3], Rgba8::transparent()).is_err());
}

#[test]
fn copy_masked_copies_whole_pixels() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    let mut dst = vec![9u8; 8];
    copy_masked(&mut dst, &src, &[0, 30]).unwrap();
    assert_eq!(dst, vec![9, 9, 9, 9, 5, 6, 7, 8]);

    assert!(copy_masked(&mut dst, &src[0..4], &[0, 30]).is_err());
}
