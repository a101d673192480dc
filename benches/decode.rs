use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qrgrid::tools::{AcquireOptions, acquire_grid, parse_grid, render_grid};
use qrgrid::{DecodeOptions, ModuleGrid, NumericRemainder, decode_batch, decode_with_options};

/// Version 1-M symbol encoding "4376471154038"
const SYMBOL_V1: &str = "\
#######_____#_#######
#_____#__#____#_____#
#_###_#___##__#_###_#
#_###_#___#___#_###_#
#_###_#__####_#_###_#
#_____#_#_#___#_____#
#######_#_#_#_#######
_________#___________
#__#_##_######_#_____
###_#__##__#_#_#_##__
#__#_####_##__###___#
__#_#__#____#####____
__#___##_#_#_###_##__
________#_#__####_##_
#######___###_#_####_
#_____#_#_____##____#
#_###_#__##_###__#_##
#_###_#_#_#__####__##
#_###_#__###_###_#__#
#_____#__####__##__#_
#######_###__#_###___
";

fn options() -> DecodeOptions {
    DecodeOptions::with_numeric_remainder(NumericRemainder::Standard)
}

fn bench_decode_version_1(c: &mut Criterion) {
    let grid = parse_grid(SYMBOL_V1).unwrap();
    let options = options();
    c.bench_function("decode_v1", |b| {
        b.iter(|| decode_with_options(black_box(&grid), 1, &options))
    });
}

fn bench_decode_version_40(c: &mut Criterion) {
    let size = 177;
    let mut grid = ModuleGrid::new(size, size);
    for y in 0..size {
        for x in 0..size {
            grid.set(x, y, (x * 13 + y * 7) % 3 == 0);
        }
    }
    let options = options();
    c.bench_function("decode_v40", |b| {
        b.iter(|| decode_with_options(black_box(&grid), 40, &options))
    });
}

fn bench_decode_batch(c: &mut Criterion) {
    let grid = parse_grid(SYMBOL_V1).unwrap();
    let symbols: Vec<(ModuleGrid, u8)> = (0..256).map(|_| (grid.clone(), 1)).collect();
    let options = options();
    c.bench_function("decode_batch_256_v1", |b| {
        b.iter(|| decode_batch(black_box(&symbols), &options))
    });
}

fn bench_acquire_version_1(c: &mut Criterion) {
    let grid = parse_grid(SYMBOL_V1).unwrap();
    let image = render_grid(&grid, 8, 4);
    let acquire = AcquireOptions::default();
    c.bench_function("acquire_v1_8px", |b| {
        b.iter(|| acquire_grid(black_box(&image), &acquire))
    });
}

criterion_group!(
    benches,
    bench_decode_version_1,
    bench_decode_version_40,
    bench_decode_batch,
    bench_acquire_version_1
);
criterion_main!(benches);
