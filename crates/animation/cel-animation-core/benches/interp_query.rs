use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cel_animation_core::{
    sample, Bounds, Command, Dimension, KeyframeEditor, Position, Registry, Rgb, ShapeKind, State,
    TimelineEntity,
};

const SEGMENTS: u32 = 100;
const SEGMENT_TICKS: u32 = 10;

fn timeline() -> Registry {
    let mut reg = Registry::new(Bounds::new(0, 0, 1000, 1000).unwrap());
    let initial = State::new(
        0,
        Position::new(0.0, 0.0),
        Dimension::new(10.0, 10.0).unwrap(),
        Rgb::new(200, 40, 40),
        0,
    )
    .expect("valid initial state");
    reg.add_shape(ShapeKind::Rectangle, "runner", initial)
        .expect("fresh registry accepts the shape");

    for i in 0..SEGMENTS {
        let (t0, t1) = (i * SEGMENT_TICKS, (i + 1) * SEGMENT_TICKS);
        let step = Command::move_between(
            Position::new(f64::from(i), 0.0),
            Position::new(f64::from(i + 1), 0.0),
        );
        reg.command_shape("runner", t0, t1, &[step])
            .expect("contiguous segments never overlap");
    }
    reg
}

fn bench_motion_sampling(c: &mut Criterion) {
    let reg = timeline();
    let entity: TimelineEntity = reg.snapshot_shape("runner").expect("shape exists");
    let span = SEGMENTS * SEGMENT_TICKS;

    c.bench_function("sample_motion_history", |b| {
        let mut t = 0u32;
        b.iter(|| {
            t = (t + 7) % span;
            black_box(sample(black_box(&entity), t))
        })
    });
}

fn bench_keyframe_sampling(c: &mut Criterion) {
    let editor = KeyframeEditor::new(timeline());
    let entity = editor.get("runner").expect("shape exists").clone();
    let span = SEGMENTS * SEGMENT_TICKS;

    c.bench_function("sample_keyframe_history", |b| {
        let mut t = 0u32;
        b.iter(|| {
            t = (t + 7) % span;
            black_box(sample(black_box(&entity), t))
        })
    });
}

criterion_group!(benches, bench_motion_sampling, bench_keyframe_sampling);
criterion_main!(benches);
