use clap::Parser;
use ordered_tree::{OrderedCollection, OrderedTree};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Builds an ordered tree, prints it, removes one value and prints it again
#[derive(Parser, Debug)]
#[command(name = "ordered-tree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Values to insert, in order
    #[arg(value_name = "VALUES", allow_negative_numbers = true, default_values_t = [12_i64, 4, 20, 1, 23])]
    values: Vec<i64>,

    /// Value to remove after the first traversal
    #[arg(short, long, env = "ORDERED_TREE_REMOVE", default_value_t = 12)]
    remove: i64,

    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let mut tree: Box<dyn OrderedCollection<i64>> = Box::new(OrderedTree::new());
    for value in &cli.values {
        tree.insert(*value);
    }
    println!("{}", render(tree.as_ref()));

    match tree.remove(&cli.remove) {
        Some(removed) => tracing::info!(removed, "removed value"),
        None => tracing::warn!(value = cli.remove, "value not in tree, nothing removed"),
    }
    println!("{}", render(tree.as_ref()));

    match (tree.minimum(), tree.maximum()) {
        (Ok(min), Ok(max)) => println!("min: {}, max: {}", min, max),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Joins the in-order traversal with arrows, e.g. `1  -->  4  -->  12`.
fn render(tree: &dyn OrderedCollection<i64>) -> String {
    tree.traverse()
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join("  -->  ")
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_classic_demo() {
        let cli = Cli::try_parse_from(["ordered-tree"]).unwrap();
        assert_eq!(cli.values, vec![12, 4, 20, 1, 23]);
        assert_eq!(cli.remove, 12);
        assert_eq!(cli.debug, 0);
    }

    #[test]
    fn render_joins_with_arrows() {
        let tree: OrderedTree<i64> = [12, 4, 20, 1, 23].into_iter().collect();
        assert_eq!(render(&tree), "1  -->  4  -->  12  -->  20  -->  23");

        let empty = OrderedTree::<i64>::new();
        assert_eq!(render(&empty), "");
    }
}
