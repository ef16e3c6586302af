use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sessionhop::codegen;
use sessionhop::preset::{builtins, Preset, Source};
use sessionhop::session::{capture, BrowserState};
use sessionhop::settings::SettingsData;

fn benchmark_generate(c: &mut Criterion) {
    let settings = SettingsData::default().codegen;
    let mut group = c.benchmark_group("codegen_generate");

    for preset in builtins() {
        group.bench_with_input(
            BenchmarkId::from_parameter(&preset.id),
            preset,
            |b, preset| {
                b.iter(|| codegen::generate(black_box(preset), &settings).unwrap());
            },
        );
    }

    group.finish();
}

fn benchmark_capture_all(c: &mut Criterion) {
    let all = Preset {
        id: "all".to_string(),
        display_name: "Everything".to_string(),
        source: Source::All,
        key: None,
        icon: None,
        description: None,
        is_custom: false,
        created_at: None,
    };

    let mut group = c.benchmark_group("session_capture_all");

    for size in [1usize, 50, 500].iter() {
        let mut state = BrowserState::new("https://app.example.com/");
        for i in 0..*size {
            state.local_set(format!("key-{}", i), format!("value-{}", i));
            state.set_cookie(format!("cookie-{}", i), format!("crumb {}", i));
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), &state, |b, state| {
            b.iter(|| capture(black_box(&all), state).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_generate, benchmark_capture_all);
criterion_main!(benches);
