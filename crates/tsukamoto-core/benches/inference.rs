use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tsukamoto_core::dataset::{parse_csv_str, AttendanceScale};
use tsukamoto_core::fuzzify::fuzzify_all;
use tsukamoto_core::{assess, infer, AcademicInputs};

fn bench_fuzzify(c: &mut Criterion) {
    let inputs = AcademicInputs::new(2.9, 72.0, 0.82, 73.0, 80.0);
    c.bench_function("fuzzify_all", |b| b.iter(|| fuzzify_all(black_box(&inputs))));
}

fn bench_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer");

    group.bench_function("single_rule", |b| {
        let inputs = AcademicInputs::new(3.5, 85.0, 0.95, 85.0, 90.0);
        b.iter(|| infer(black_box(&inputs)))
    });

    group.bench_function("overlapping_rules", |b| {
        let inputs = AcademicInputs::new(3.0, 72.0, 0.82, 73.0, 80.0);
        b.iter(|| infer(black_box(&inputs)))
    });

    group.bench_function("assess_validated", |b| {
        let inputs = AcademicInputs::new(2.0, 60.0, 0.70, 60.0, 65.0);
        b.iter(|| assess(black_box(&inputs)))
    });

    group.finish();
}

fn bench_dataset(c: &mut Criterion) {
    let mut csv = String::from("gpa,cca,attendance,midterm,final_exam,performance\n");
    for i in 0..1_000 {
        let t = i as f64 / 1_000.0;
        csv.push_str(&format!(
            "{:.2},{:.1},{:.2},{:.1},{:.1},Satisfactory\n",
            1.0 + 2.5 * t,
            30.0 + 55.0 * t,
            0.3 + 0.65 * t,
            30.0 + 55.0 * t,
            30.0 + 60.0 * t
        ));
    }

    c.bench_function("parse_csv_1000", |b| {
        b.iter(|| parse_csv_str(black_box(&csv), AttendanceScale::Fraction))
    });
}

criterion_group!(benches, bench_fuzzify, bench_inference, bench_dataset);
criterion_main!(benches);
