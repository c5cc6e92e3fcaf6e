use clap::Parser;
use linprobe::Table;
use linprobe::strategy::FnAllocator;
use linprobe::strategy::StrEq;
use linprobe::strategy::StrHash;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "capacity", default_value_t = 4)]
    capacity: usize,

    /// Words to count. Defaults to "A B C".
    words: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let words = if args.words.is_empty() {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    } else {
        args.words
    };

    // Keys are copied into boxed strings, values into boxed counters.
    let allocator = FnAllocator::new(
        |key: &str, value: &i32| (Box::<str>::from(key), Box::new(*value)),
        |_key: Box<str>, _value: Box<i32>| {},
    );

    let mut table: Table<str, i32, _, _, _> =
        match Table::new(args.capacity, StrHash, StrEq, allocator) {
            Ok(table) => table,
            Err(err) => {
                eprintln!("cannot create table: {err}");
                std::process::exit(1);
            }
        };

    for word in &words {
        let count = table.get(word.as_str()).copied().unwrap_or(0) + 1;
        if let Err(err) = table.try_insert(word, &count) {
            let grown = table.capacity() * 2;
            println!("{err}; resizing to {grown} slots");
            if let Err(err) = table.resize(grown) {
                eprintln!("resize failed: {err}");
                std::process::exit(1);
            }
            table.insert(word, &count);
        }
    }

    println!(
        "{}",
        table.dump(|f, word, count| write!(f, "[{word} -> {count}]"))
    );
    println!("{} distinct words in {} slots", table.len(), table.capacity());

    table.release_all();
}
