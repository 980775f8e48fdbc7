#![allow(missing_docs, unused_results)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planetscape::animation::{HeadlessHost, SceneAnimator};
use planetscape::engine::SceneCommand;
use planetscape::scene::stars::scatter_stars;
use planetscape::{BackdropEngine, Options};

fn animator() -> SceneAnimator<HeadlessHost> {
    let mut options = Options::default();
    options.scene.star_seed = Some(7);
    SceneAnimator::new(HeadlessHost::from_options(&options), &options)
}

fn tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    let mut scroll = animator();
    let _ = scroll.host_mut().scene.attach_skybox();
    group.bench_function("scroll_mode", |b| b.iter(|| scroll.tick()));

    let mut debug = animator();
    debug.toggle_mode();
    group.bench_function("debug_mode", |b| b.iter(|| debug.tick()));

    group.finish();
}

fn scroll_benchmark(c: &mut Criterion) {
    let mut engine = BackdropEngine::headless(Options::default());
    let mut y = 0.0;
    c.bench_function("scroll_to", |b| {
        b.iter(|| {
            y = (y + 37.0) % 4000.0;
            engine.execute(black_box(SceneCommand::ScrollTo { scroll_y: y }));
        })
    });
}

fn starfield_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scatter_stars");
    for count in [700_u32, 5000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(scatter_stars(count, 400.0, Some(1))))
        });
    }
    group.finish();
}

criterion_group!(benches, tick_benchmark, scroll_benchmark, starfield_benchmark);
criterion_main!(benches);
