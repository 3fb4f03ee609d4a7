use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phonenumber::{self as rlp, Mode};
use phonenumber_engine::{PhoneNumber, PhoneNumberFormat};

mod common;

fn formatting_benchmark(c: &mut Criterion) {
    let entities = common::sample_numbers();
    let util = common::phone_util();

    let rlp_numbers: Vec<rlp::PhoneNumber> = entities
        .iter()
        .filter_map(|(text, _, region_id)| rlp::parse(Some(*region_id), text).ok())
        .collect();
    let numbers: Vec<PhoneNumber> = entities
        .iter()
        .map(|(text, region, _)| util.parse(text, region).expect("sample numbers parse"))
        .collect();

    let mut group = c.benchmark_group("Formatting Comparison");

    let mut test = |format_a: PhoneNumberFormat, format_b: Mode| {
        group.bench_function(format!("phonenumber_engine: format({:?})", format_a), |b| {
            b.iter(|| {
                for number in &numbers {
                    util.format(black_box(number), black_box(format_a));
                }
            })
        });

        group.bench_function(format!("rust-phonenumber: format({:?})", format_b), |b| {
            b.iter(|| {
                for number in &rlp_numbers {
                    rlp::format(black_box(number)).mode(format_b).to_string();
                }
            })
        });
    };

    test(PhoneNumberFormat::E164, Mode::E164);
    test(PhoneNumberFormat::International, Mode::International);
    test(PhoneNumberFormat::National, Mode::National);

    group.bench_function("phonenumber_engine: format_out_of_country_calling_number(US)", |b| {
        b.iter(|| {
            for number in &numbers {
                util.format_out_of_country_calling_number(black_box(number), black_box("US"));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
