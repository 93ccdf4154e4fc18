//! pqueue demo driver.
//!
//! Fills a queue with random uppercase letters at random priorities, then
//! drains it, printing `priority:letter` in extraction order.
//!
//! ## CLI Subcommands
//!
//! - `pqueue-demo` or `pqueue-demo run` - Run the demo (default)
//! - `pqueue-demo config` - Print effective configuration
//! - `pqueue-demo help` - Show usage
//! - `pqueue-demo version` - Show version

use std::process::ExitCode;

use rand::Rng;

use pqueue_core::config::{self as pq_config, EnvConfig};
use pqueue_core::telemetry::init_logging;
use pqueue_core::PriorityQueue;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("run");

    match command {
        "run" | "" => {
            let config = pq_config::load();
            if let Err(e) = init_logging(&config.log) {
                eprintln!("Logging setup failed: {}", e);
                return ExitCode::FAILURE;
            }
            match run_demo(&config) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Demo failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        "config" => {
            println!("{:#?}", pq_config::load().effective_config());
            ExitCode::SUCCESS
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("pqueue-demo {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn run_demo(config: &EnvConfig) -> Result<(), pqueue_core::QueueError> {
    let mut queue = PriorityQueue::with_destructor(config.queue.capacity, |letter: char| {
        tracing::info!(%letter, "released at teardown");
    })?;

    let mut rng = rand::thread_rng();
    for _ in 0..config.demo.items {
        let letter = char::from(rng.gen_range(b'A'..=b'Z'));
        let priority = rng.gen_range(0..config.demo.max_priority);
        match queue.insert(letter, priority) {
            Ok(()) => tracing::debug!(%letter, priority, "inserted"),
            Err(rejected) => {
                tracing::warn!(letter = %rejected.payload(), priority, "dropped: {}", rejected);
            }
        }
    }

    while !queue.is_empty() {
        queue.log_min();
        let entry = queue.extract_entry()?;
        println!("{}:{}", entry.priority, entry.payload);
    }

    queue.destroy();
    Ok(())
}

fn print_usage() {
    eprintln!(
        "pqueue-demo v{}

USAGE:
    pqueue-demo [COMMAND]

COMMANDS:
    run        Fill and drain a queue of random letters (default)
    config     Print effective configuration
    version    Show version information
    help       Show this help message

ENVIRONMENT:
    PQUEUE_CAPACITY           Queue capacity (default: 10)
    PQUEUE_DEMO_ITEMS         Letters to insert (default: 10)
    PQUEUE_DEMO_MAX_PRIORITY  Exclusive priority bound (default: 128)
    PQUEUE_LOG_LEVEL          Tracing filter (default: info)
    PQUEUE_LOG_FORMAT         json or pretty (default: pretty)
    PQUEUE_LOG_FILE           Log file path (default: stderr)
",
        env!("CARGO_PKG_VERSION")
    );
}
