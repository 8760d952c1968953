use bst_explorer::{Insertion, Layout, LayoutConfig, Removal, Tree, TreeOps};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use std::process;
use std::time::{Duration, Instant};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KeyOrder {
    Ascending,
    Descending,
    Shuffled,
}

#[derive(Parser)]
#[command(name = "tree-benchmark")]
#[command(about = "A binary search tree performance testing tool")]
struct Args {
    /// Sorted orders degrade the tree into a list, making every operation linear
    #[arg(long, default_value = "100000")]
    size: i32,

    #[arg(long, value_enum, default_value = "shuffled")]
    order: KeyOrder,

    #[arg(long, default_value = "42")]
    seed: u64,

    /// Validate the tree structure after every phase
    #[arg(long)]
    check: bool,

    /// Debug level, repeat for more (-d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

struct Report {
    height: usize,
    layout: Layout,
    insert: Duration,
    search: Duration,
    remove: Duration,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    let keys = generate_keys(args.size, args.order, args.seed);
    println!(
        "Running with {:?} keys and {} node count",
        args.order,
        keys.len()
    );

    let report = match run(&keys, args.check) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "validation failed");
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    println!(
        "Height {}, layout {} x {}",
        report.height, report.layout.width, report.layout.height
    );
    println!("Inserts took {} seconds", report.insert.as_secs_f32());
    println!("Searches took {} seconds", report.search.as_secs_f32());
    println!("Removals took {} seconds", report.remove.as_secs_f32());
    println!(
        "Total {} seconds",
        (report.insert + report.search + report.remove).as_secs_f32()
    );
}

fn generate_keys(size: i32, order: KeyOrder, seed: u64) -> Vec<i32> {
    let mut keys: Vec<i32> = (0..size.max(0)).collect();
    match order {
        KeyOrder::Ascending => {}
        KeyOrder::Descending => keys.reverse(),
        KeyOrder::Shuffled => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            keys.shuffle(&mut rng);
        }
    }
    keys
}

fn run(keys: &[i32], check: bool) -> bst_explorer::Result<Report> {
    let mut tree = Tree::new();
    let start = Instant::now();
    for &key in keys {
        assert_eq!(tree.insert(key), Insertion::Inserted);
    }
    let inserted = Instant::now();
    if check {
        tree.validate()?;
        tracing::info!(len = tree.len(), "tree valid after insert");
    }

    for &key in keys {
        assert!(tree.search(&key).is_some());
    }
    let searched = Instant::now();

    let height = tree.height();
    let layout = LayoutConfig::default().estimate(height);

    for &key in keys {
        assert_eq!(tree.remove(&key), Removal::Removed);
    }
    let end = Instant::now();
    if check {
        tree.validate()?;
        tracing::info!(len = tree.len(), "tree valid after remove");
    }

    Ok(Report {
        height,
        layout,
        insert: inserted.saturating_duration_since(start),
        search: searched.saturating_duration_since(inserted),
        remove: end.saturating_duration_since(searched),
    })
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn sorted_orders_complete() {
        for order in [KeyOrder::Ascending, KeyOrder::Descending] {
            let keys = generate_keys(5_000, order, 0);
            let report = run(&keys, true).unwrap();
            assert_eq!(report.height, 5_000);
        }
    }

    #[test]
    fn shuffled_order_is_seeded() {
        let keys = generate_keys(1_000, KeyOrder::Shuffled, 7);
        assert_eq!(keys, generate_keys(1_000, KeyOrder::Shuffled, 7));
        assert_ne!(keys, generate_keys(1_000, KeyOrder::Ascending, 7));

        let report = run(&keys, true).unwrap();
        assert!(report.height < 1_000);
        assert_eq!(report.layout.height, report.height as f64 * 120.0);
    }
}
