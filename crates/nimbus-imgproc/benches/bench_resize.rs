use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use nimbus_image::{Image, ImageSize};
use nimbus_imgproc::{interpolation::InterpolationMode, parallel::ExecutionStrategy, resize};

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resize");

    for (width, height) in [(640, 480), (1280, 960), (1920, 1080)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::new(
            image_size,
            (0..width * height * 3).map(|i| (i % 251) as u8).collect(),
        )
        .unwrap();
        let image_f32 = image.clone().cast::<f32>().unwrap();

        // panel cell size
        let new_size = ImageSize {
            width: 533,
            height: 450,
        };

        let out_f32 = Image::<f32, 3>::from_size_val(new_size, 0.0).unwrap();
        let out_u8 = Image::<u8, 3>::from_size_val(new_size, 0).unwrap();

        for strategy in [ExecutionStrategy::Serial, ExecutionStrategy::ParallelRows] {
            group.bench_with_input(
                BenchmarkId::new(format!("native_{strategy:?}"), &parameter_string),
                &(&image_f32, &out_f32),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| {
                        resize::resize_native(
                            black_box(src),
                            black_box(&mut dst),
                            black_box(InterpolationMode::Bilinear),
                            strategy,
                        )
                    })
                },
            );
        }

        group.bench_with_input(
            BenchmarkId::new("fast_resize_lib", &parameter_string),
            &(image, out_u8),
            |b, i| {
                let (src, mut dst) = (i.0.clone(), i.1.clone());
                b.iter(|| {
                    resize::resize_fast(
                        black_box(&src),
                        black_box(&mut dst),
                        black_box(InterpolationMode::Bilinear),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
