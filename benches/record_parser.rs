use criterion::{Criterion, black_box, criterion_group, criterion_main};
use range_filter::processor::StreamFilter;
use range_filter::{FilterConfig, parse_fields};

const VEHICLE_LINE: &str = r#"5YJ3E1EA7K,King,"Seattle, North",WA,98101,2019,TESLA,MODEL 3,Battery Electric Vehicle (BEV),Clean Alternative Fuel Vehicle Eligible,220,0,43,478093527,POINT (-122.34301 47.659185),CITY OF SEATTLE - (WA)|CITY OF TACOMA - (WA),53033004301"#;

fn bench_parse_fields(c: &mut Criterion) {
    c.bench_function("parse_fields", |b| {
        b.iter(|| parse_fields(black_box(VEHICLE_LINE)))
    });
}

fn bench_stream_filter(c: &mut Criterion) {
    let mut input = String::from("VIN,County,City,State,Electric Range\n");
    for i in 0..10_000 {
        input.push_str(&format!("VIN{},King,Seattle,WA,{}\n", i, i % 400));
    }
    let filter = StreamFilter::new(FilterConfig::default().with_progress_interval(0))
        .expect("default configuration is valid");

    c.bench_function("stream_filter_10k", |b| {
        b.iter(|| {
            let mut output = Vec::with_capacity(input.len());
            filter
                .run(black_box(input.as_bytes()), &mut output)
                .expect("filter run");
            output
        })
    });
}

criterion_group!(benches, bench_parse_fields, bench_stream_filter);
criterion_main!(benches);
