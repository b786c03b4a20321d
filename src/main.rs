use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use rostermail::cli::{self, Command};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = match cli::parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", cli::USAGE);
            std::process::exit(1);
        }
    };

    if let Err(e) = cli::run(&options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
