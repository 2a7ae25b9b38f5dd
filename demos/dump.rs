use svmlight_reader::{
    load_batch, parse_arguments, shuffle_records, split_data, FileLineSource, Record,
    SvmLightConfig, SvmLightReader,
};
use std::time::Instant;

fn print_record(record: &Record) {
    let values: Vec<String> = record.values().iter().map(|v| v.to_string()).collect();
    println!("{}", values.join(","));
}

fn main() {
    let start = Instant::now();

    let args = match parse_arguments() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .init();

    let config = match SvmLightConfig::from_configuration(&args.to_configuration()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let source = FileLineSource::new(args.inputs.clone());
    let mut reader = SvmLightReader::new(config, source);

    let limit = args.limit.unwrap_or(usize::MAX);
    let mut records = Vec::new();
    let mut skipped = 0;
    while records.len() < limit {
        match reader.has_next() {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
        match reader.next_record() {
            Ok((record, _)) => records.push(record),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed record");
                skipped += 1;
            }
        }
    }

    if args.shuffle {
        shuffle_records(&mut records, args.seed);
    }

    let (train, validation) = split_data(&records, args.validation_ratio);
    println!("=== Training records: {} ===", train.len());
    train.iter().for_each(print_record);
    if !validation.is_empty() {
        println!("\n=== Validation records: {} ===", validation.len());
        validation.iter().for_each(print_record);
    }

    if let Err(e) = reader.reset() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    let mut batches = 0;
    loop {
        match load_batch(&mut reader, args.batch_size) {
            Ok(Some(_)) => batches += 1,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "batching stopped");
                break;
            }
        }
    }

    println!("\nRecords read: {}", records.len());
    println!("Records skipped: {}", skipped);
    println!("Batches of {}: {}", args.batch_size, batches);
    println!("Total runtime: {:.2?}", start.elapsed());
}
