use criterion::{Criterion, criterion_group, criterion_main};
use il_met_decode::{WeatherBulletin, decode_warning};
use std::hint::black_box;

const AIRMET: [&str; 2] = [
    "LLLL AIRMET 5 VALID 260800/261200 LLBD-",
    "LLLL TEL AVIV FIR MOD ICE FCST WI N3317 E03450 N3315 E03500 N3230 E03520 FL070/140 NC=",
];

fn warning_decoder_benchmark(c: &mut Criterion) {
    c.bench_function("warning_decoder", |b| {
        b.iter(|| decode_warning(black_box(&AIRMET)));
    });
}

fn bulletin_benchmark(c: &mut Criterion) {
    let json = std::fs::read("tests/fixtures/bulletin.json").unwrap();

    c.bench_function("bulletin_decode_all", |b| {
        b.iter(|| {
            let bulletin = WeatherBulletin::from_slice(black_box(&json)).unwrap();
            (bulletin.decoded_atis(), bulletin.decoded_warnings())
        });
    });
}

criterion_group!(benches, warning_decoder_benchmark, bulletin_benchmark);
criterion_main!(benches);
