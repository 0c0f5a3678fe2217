use clap::Parser;
use probe_hash::HashFn;
use probe_hash::HashMap;
use probe_hash::IntTable;

#[derive(Parser, Debug)]
struct Args {
    /// Number of keys to insert.
    #[arg(short = 'c', long = "count", default_value_t = 10_000)]
    count: u32,

    /// Gap between consecutive keys.
    #[arg(short = 's', long = "stride", default_value_t = 1024)]
    stride: u32,

    /// Growth threshold in percent.
    #[arg(short = 'l', long = "load-factor", default_value_t = 70)]
    load_factor: u32,
}

/// Feeds the key straight through. Fine for dense keys, terrible once the
/// keys share their low bits.
struct Identity;

impl HashFn<u32> for Identity {
    fn hash(&self, key: &u32) -> u64 {
        u64::from(*key)
    }
}

fn report(name: &str, len: usize, capacity: usize, stats: &probe_hash::TableStats) {
    println!();
    println!("{name}:");
    println!(
        "  final load: {len}/{capacity} ({:.2}%)",
        len as f64 / capacity as f64 * 100.0
    );
    stats.print();
}

fn main() {
    let args = Args::parse();

    println!(
        "Inserting {} keys with stride {} (load factor {}%)",
        args.count, args.stride, args.load_factor
    );

    let mut mixed: IntTable<u32> = IntTable::with_capacity_and_load_factor(8, args.load_factor);
    mixed.set_collect_stats(true);
    for n in 0..args.count {
        let key = n.wrapping_mul(args.stride);
        mixed.insert(key, n);
    }

    let mut identity: HashMap<u32, u32, Identity> =
        HashMap::with_load_factor_and_hasher(8, args.load_factor, Identity);
    identity.set_collect_stats(true);
    for n in 0..args.count {
        let key = n.wrapping_mul(args.stride);
        identity.insert(key, n);
    }

    report(
        "avalanche mix (default)",
        mixed.len(),
        mixed.capacity(),
        mixed.stats().expect("stats enabled"),
    );
    report(
        "identity hash",
        identity.len(),
        identity.capacity(),
        identity.stats().expect("stats enabled"),
    );
}
