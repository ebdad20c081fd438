//! Disparity map rendering

use image::{GrayImage, Rgb};
use ncc_disparity::prelude::*;
use ncc_disparity::render::{colourise, jet, normalise};

#[test]
fn normalise_stretches_to_full_range() {
    let img = GrayImage::from_fn(4, 1, |x, _| image::Luma([10 + 10 * x as u8]));
    let norm = normalise(&img);

    assert_eq!(norm.get_pixel(0, 0)[0], 0);
    assert_eq!(norm.get_pixel(3, 0)[0], 255);
    assert!(norm.get_pixel(1, 0)[0] < norm.get_pixel(2, 0)[0]);
}

#[test]
fn normalise_constant_image_is_zero() {
    let img = GrayImage::from_pixel(5, 5, image::Luma([42]));
    assert!(normalise(&img).pixels().all(|p| p[0] == 0));
}

#[test]
fn jet_endpoints() {
    assert_eq!(jet(0), Rgb([0, 0, 128]));
    assert_eq!(jet(255), Rgb([128, 0, 0]));

    // Middle of the map is green dominated
    let Rgb([r, g, b]) = jet(128);
    assert_eq!(g, 255);
    assert!(r > 100 && b > 100);
}

#[test]
fn colourise_unset_map() {
    let map = DisparityMap::new(8, 6);
    let rgb = colourise(map.as_luma());

    assert_eq!(rgb.dimensions(), (8, 6));
    assert!(rgb.pixels().all(|p| *p == Rgb([0, 0, 128])));
    assert_eq!(map.to_jet(), rgb);
}

#[test]
fn put_and_get_map_values() {
    let mut map = DisparityMap::new(3, 3);
    map.put(1, 2, 7);

    assert_eq!(map.get(1, 2), 7);
    assert_eq!(map.get(0, 0), UNSET);
    assert_eq!(map.written(), 0);
}
