use std::process::ExitCode;

use chainmap::{ChainedTable, TableError};
use log::{error, info, warn};
use thiserror::Error;

#[derive(Error, Debug)]
enum CliError {
    #[error("expected at least 3 arguments, got {0}")]
    Usage(usize),

    #[error("every key needs a value, {0} is missing one")]
    DanglingKey(String),

    #[error("invalid capacity {0:?}: {1}")]
    Capacity(String, std::num::ParseIntError),

    #[error(transparent)]
    Table(#[from] TableError),
}

/// A parsed command line: table capacity followed by the pairs to insert
#[derive(Debug, PartialEq, Eq)]
struct Args {
    capacity: usize,
    pairs: Vec<(String, String)>,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, CliError> {
        let args: Vec<String> = args.into_iter().collect();
        if args.len() < 3 {
            return Err(CliError::Usage(args.len()));
        }

        let capacity = args[0]
            .parse::<usize>()
            .map_err(|e| CliError::Capacity(args[0].clone(), e))?;

        let mut pairs = Vec::with_capacity(args.len() / 2);
        let mut rest = args.into_iter().skip(1);
        while let Some(key) = rest.next() {
            let value = rest.next().ok_or_else(|| CliError::DanglingKey(key.clone()))?;
            pairs.push((key, value));
        }

        Ok(Self { capacity, pairs })
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <capacity> <key> <value> [<key> <value> ...]");
    eprintln!();
    eprintln!("Inserts every pair into a table with <capacity> slots, prints the");
    eprintln!("table and looks every key up again. Set RUST_LOG=debug to trace collisions.");
}

fn run(args: Args) -> Result<(), CliError> {
    let mut table = ChainedTable::new(args.capacity)?;

    for (key, value) in &args.pairs {
        match table.insert(key.as_str(), value.as_str()) {
            Ok(Some(old)) => info!("updated {key:?} (was {old:?})"),
            Ok(None) => {}
            Err(e @ TableError::TableFull { .. }) => warn!("{e}, {key:?} was not stored"),
            Err(e) => return Err(e.into()),
        }
    }

    println!("{}", table.view());
    for (key, _) in &args.pairs {
        println!("{}", table.search_view(key));
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let mut argv = std::env::args();
    let program = argv.next().unwrap_or_else(|| "chainmap".to_string());

    let result = Args::parse(argv).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            if matches!(e, CliError::Usage(_) | CliError::DanglingKey(_)) {
                print_usage(&program);
            } else {
                eprintln!("{program}: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
