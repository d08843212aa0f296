use criterion::{criterion_group, criterion_main, Criterion};
use dcsteg_core::codec::{extract, imprint};
use dcsteg_core::media::{RgbImage, YCbCrImage};
use dcsteg_core::BitOrder;

pub fn image_unveiling(c: &mut Criterion) {
    c.bench_function("Image Unveiling", |b| {
        let plain_image = RgbImage::from_fn(512, 512, |x, y| {
            let g = (64 + (x / 8 + y / 8) % 64) as u8;
            [g, g, g]
        });
        let mut ymg = YCbCrImage::from(&plain_image);
        ymg.forward_transform();
        imprint(&mut ymg, b"Hello World!", BitOrder::default()).expect("Cannot hide secret message");

        b.iter(|| extract(&ymg, BitOrder::default()).expect("Cannot unveil secret message"))
    });
}

criterion_group!(benches, image_unveiling);
criterion_main!(benches);
