use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inertial_tracker_core::event::{AxesEvent, EventKind, SensorStats};
use inertial_tracker_core::filters::Statistics;
use inertial_tracker_core::pipeline::Stage;

fn feed_events(window: u64, count: usize) {
    let mut stats = SensorStats::new();
    let mut stage = Statistics::new(window, |s: &mut SensorStats| s);
    for i in 0..count {
        let event = AxesEvent::new(
            EventKind::Accelerometer,
            i as i64 * 10_000_000,
            [i as f64 * 0.001, 0.0, 9.81],
        );
        Stage::process(&mut stage, event, &mut stats, &mut |_, _| {});
    }
    black_box(stats);
}

fn benchmark_statistics_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics_window");
    for &window in &[16u64, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, &window| {
            b.iter(|| feed_events(window, 10_000));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_statistics_window);
criterion_main!(benches);
