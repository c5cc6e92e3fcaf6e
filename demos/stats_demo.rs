use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

use clap::Parser;
use linprobe::Table;
use linprobe::strategy::IntEq;
use linprobe::strategy::ToOwnedAllocator;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "capacity", default_value_t = 1000)]
    capacity: usize,

    /// Percentage of slots to fill before printing statistics.
    #[arg(short = 'l', long = "load", default_value_t = 90)]
    load: usize,

    /// Percentage of inserted keys to remove again, leaving tombstones.
    #[arg(short = 'r', long = "remove", default_value_t = 10)]
    remove: usize,
}

fn hash_u64(value: &u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn main() {
    let args = Args::parse();

    let mut table: Table<u64, u64, _, _, _> =
        Table::new(args.capacity, hash_u64, IntEq, ToOwnedAllocator)
            .expect("capacity must be positive");

    let target = args.capacity * args.load.min(100) / 100;
    println!("Filling {} of {} slots...", target, table.capacity());

    let mut failures = 0;
    for i in 0..target as u64 {
        if !table.insert(&i, &i) {
            failures += 1;
        }
    }

    let removals = target * args.remove.min(100) / 100;
    for i in 0..removals as u64 {
        table.remove(&(i * 7 % target.max(1) as u64));
    }

    println!("Live entries: {}", table.len());
    println!("Failed inserts: {}", failures);
    table.probe_stats().print();

    println!("Compacting tombstones with a same-size resize...");
    table
        .resize(table.capacity())
        .expect("live entries always fit their own capacity");
    table.probe_stats().print();
}
