use std::{
    env,
    io::{self, BufWriter, Write},
    process,
};

use anyhow::Context;
use log::info;

use nn_util::{load_csv, to_numeric, Config, Normalizer};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <dataset.csv> [config.json]", args[0]);
        process::exit(1);
    }

    if let Err(e) = run(&args[1], args.get(2).map(String::as_str)) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(dataset_path: &str, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => Config::default(),
    };
    info!("using {config:?}");

    let records = load_csv(dataset_path, &config.loader)?;
    let mut rows = to_numeric(&records)
        .with_context(|| format!("dataset {dataset_path} is not numeric"))?;
    info!("loaded {} row(s) from {dataset_path}", rows.len());

    let ranges = Normalizer::new(config.normalize)
        .normalize(&mut rows)
        .with_context(|| format!("failed to normalize {dataset_path}"))?;
    info!("normalized {} column(s)", ranges.len());

    let mut out = BufWriter::new(io::stdout().lock());
    for row in &rows {
        let line: Vec<String> = row.iter().map(f64::to_string).collect();
        writeln!(out, "{}", line.join(","))?;
    }
    out.flush()?;

    Ok(())
}
