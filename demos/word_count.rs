use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use probe_hash::StringTable;
use probe_hash::Value;

#[derive(Parser, Debug)]
struct Args {
    /// Text file to read.
    path: PathBuf,

    /// How many of the most frequent words to print.
    #[arg(short = 'n', long = "top", default_value_t = 10)]
    top: usize,

    /// Print probe statistics after counting.
    #[arg(long = "stats")]
    stats: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let text = match std::fs::read_to_string(&args.path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: could not read {}: {err}", args.path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut counts: StringTable<Value> = StringTable::new();
    counts.set_collect_stats(args.stats);

    for word in text.split_whitespace() {
        let counter = counts
            .entry(Box::from(word.as_bytes()))
            .or_insert(Value::Int(0));
        if let Value::Int(count) = counter {
            *count += 1;
        }
    }

    let mut entries: Vec<(&[u8], i32)> = counts
        .iter()
        .map(|(key, value)| (&**key, value.as_int().unwrap_or(0)))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    println!("{} unique words", counts.len());
    for (word, count) in entries.iter().take(args.top) {
        println!("{count:>8}  {}", String::from_utf8_lossy(word));
    }

    if let Some(stats) = counts.stats() {
        println!();
        stats.print();
    }

    ExitCode::SUCCESS
}
