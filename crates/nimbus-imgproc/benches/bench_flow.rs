use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nimbus_image::{Image, ImageSize};
use nimbus_imgproc::flow::{calc_optical_flow_farneback, FarnebackParams};
use nimbus_imgproc::parallel::ExecutionStrategy;

fn random_frame(size: ImageSize, rng: &mut StdRng) -> Image<f32, 1> {
    let data = (0..size.area())
        .map(|_| rng.random_range(0.0..255.0))
        .collect();
    Image::new(size, data).unwrap()
}

fn bench_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("Farneback");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(42);
    let params = FarnebackParams::default();

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let size = ImageSize {
            width: *width,
            height: *height,
        };
        let prev = random_frame(size, &mut rng);
        let next = random_frame(size, &mut rng);
        let flow = Image::<f32, 2>::from_size_val(size, 0.0).unwrap();

        for strategy in [ExecutionStrategy::Serial, ExecutionStrategy::ParallelRows] {
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), &parameter_string),
                &(&prev, &next, &flow),
                |b, i| {
                    let (prev, next, mut flow) = (i.0, i.1, i.2.clone());
                    b.iter(|| {
                        black_box(calc_optical_flow_farneback(
                            prev,
                            next,
                            &mut flow,
                            &params,
                            strategy,
                        ))
                        .unwrap()
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_flow);
criterion_main!(benches);
