use criterion::{criterion_group, criterion_main, Criterion};
use dcsteg_core::codec::imprint;
use dcsteg_core::media::{RgbImage, YCbCrImage};
use dcsteg_core::BitOrder;

pub fn image_hiding(c: &mut Criterion) {
    let plain_image = RgbImage::from_fn(512, 512, |x, y| {
        let g = (64 + (x / 8 + y / 8) % 64) as u8;
        [g, g, g]
    });
    let secret_message = b"Hello World!";

    c.bench_function("Image Forward Transform", |b| {
        b.iter(|| {
            let mut ymg = YCbCrImage::from(&plain_image);
            ymg.forward_transform();
            ymg
        })
    });

    c.bench_function("Image Hiding", |b| {
        let mut ymg = YCbCrImage::from(&plain_image);
        ymg.forward_transform();

        b.iter(|| {
            imprint(&mut ymg, &secret_message[..], BitOrder::default())
                .expect("Cannot hide secret message");
        })
    });
}

criterion_group!(benches, image_hiding);
criterion_main!(benches);
