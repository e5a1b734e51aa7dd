use clap::Parser;
use regcase::{Args, generate};
use tracing::info;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    // Initialize logging (stderr only; stdout carries generated code)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = args.to_generator_config();

    match generate(&config) {
        Ok(count) => info!("Generated {} register cases", count),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
