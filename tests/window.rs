//! Block and search strip extraction

mod common;

use image::GrayImage;
use ncc_disparity::window::{extract_block, extract_strip};
use ncc_disparity::Error;

#[test]
fn block_is_centred_on_pixel() {
    let img = GrayImage::from_fn(10, 8, |x, y| image::Luma([(y * 10 + x) as u8]));

    let block = extract_block(&img, 4, 3, 3).unwrap();
    assert_eq!(block.origin(), (3, 2));
    assert_eq!(block.size(), 3);
    assert_eq!(block.row(0), &[23, 24, 25]);
    assert_eq!(block.row(1), &[33, 34, 35]);
    assert_eq!(block.row(2), &[43, 44, 45]);
}

#[test]
fn block_touching_edges_is_allowed() {
    let img = common::textured(5, 5);

    assert!(extract_block(&img, 2, 2, 5).is_ok());
    assert!(extract_block(&img, 0, 0, 1).is_ok());
    assert!(extract_block(&img, 4, 4, 1).is_ok());
}

#[test]
fn block_outside_image_is_out_of_bounds() {
    let img = common::textured(10, 10);

    for &(x, y) in &[(0, 5), (5, 0), (9, 5), (5, 9)] {
        match extract_block(&img, x, y, 3) {
            Err(Error::OutOfBounds { width: 3, height: 3, grid_width: 10, grid_height: 10, .. }) => (),
            other => panic!("expected OutOfBounds at ({}, {}), got {:?}", x, y, other)
        }
    }
}

#[test]
fn strip_spans_every_candidate() {
    let img = common::textured(40, 10);

    // w = 2, max_disp = 10, min_disp = 2
    let strip = extract_strip(&img, 20, 5, 5, 10, 2).unwrap();
    assert_eq!(strip.origin(), (8, 3));
    assert_eq!(strip.width(), 5 + 8);
    assert_eq!(strip.height(), 5);
    assert_eq!(strip.num_windows(), 9);

    // Window k corresponds to a shift of max_disp - k
    for k in 0..strip.num_windows() {
        let window = strip.window(k).unwrap();
        let shift = 10 - k;
        assert_eq!(window.origin(), (20 - 2 - shift, 3));
    }
    assert!(strip.window(9).is_none());
}

#[test]
fn strip_with_negative_disparities() {
    let img = common::textured(40, 10);

    let strip = extract_strip(&img, 10, 5, 3, 2, -4).unwrap();
    assert_eq!(strip.origin(), (7, 4));
    assert_eq!(strip.width(), 3 + 6);
    assert_eq!(strip.num_windows(), 7);
    // Last window lies right of the pixel
    assert_eq!(strip.window(6).unwrap().origin(), (13, 4));
}

#[test]
fn strip_outside_image_is_out_of_bounds() {
    let img = common::textured(20, 10);

    assert!(matches!(
        extract_strip(&img, 5, 5, 3, 8, 0),
        Err(Error::OutOfBounds { x: -4, .. })
    ));
    assert!(matches!(
        extract_strip(&img, 19, 5, 3, 8, -2),
        Err(Error::OutOfBounds { .. })
    ));
    assert!(matches!(
        extract_strip(&img, 10, 0, 3, 2, 0),
        Err(Error::OutOfBounds { .. })
    ));
}

#[test]
fn strip_with_inverted_range_is_rejected() {
    let img = common::textured(20, 10);

    assert!(matches!(
        extract_strip(&img, 10, 5, 3, 0, 2),
        Err(Error::InvalidParams(_))
    ));
}

#[test]
fn huge_windows_are_out_of_bounds() {
    let img = common::textured(20, 10);

    assert!(matches!(
        extract_block(&img, 10, 5, usize::MAX),
        Err(Error::OutOfBounds { width: usize::MAX, .. })
    ));
    assert!(matches!(
        extract_strip(&img, 10, 5, usize::MAX, 4, 0),
        Err(Error::OutOfBounds { .. })
    ));
    assert!(matches!(
        extract_strip(&img, 10, 5, 3, i64::MAX, i64::MIN),
        Err(Error::OutOfBounds { .. })
    ));
    assert!(matches!(
        extract_block(&img, usize::MAX, usize::MAX, 3),
        Err(Error::OutOfBounds { .. })
    ));
}
