use criterion::{black_box, criterion_group, criterion_main, Criterion};

use image::GrayImage;
use ncc_disparity::prelude::*;

fn texture(x: u32, y: u32) -> u8 {
    let h = (x.wrapping_mul(73_856_093) ^ y.wrapping_mul(19_349_663)).wrapping_mul(2_654_435_761);
    (h >> 24) as u8
}

fn block_matching_bench(c: &mut Criterion) {

    // Build a synthetic frame shifted by 12 pixels
    let left = GrayImage::from_fn(320, 240, |x, y| image::Luma([texture(x, y)]));
    let right = GrayImage::from_fn(320, 240, |x, y| image::Luma([texture(x + 12, y)]));
    let frame = StereoFrame::new(left, right);

    // Build disparity alg
    let mut disp = match BlockMatching::new(Params {
        min_disparity: 0,
        num_disparities: 32,
        block_size: 9,
        output: Output::Index
    }) {
        Ok(d) => d,
        Err(e) => panic!("invalid benchmark parameters: {}", e)
    };

    // Benchmark compute function
    c.bench_function("block_matching 320x240 d32 b9", |b| {
        b.iter(|| disp.compute(black_box(&frame)))
    });
}

criterion_group!(benches, block_matching_bench);
criterion_main!(benches);
