use clap::Parser;
use pogen_cli::{cli::Cli, generate, logging, output};

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let format = cli.format;

	if let Err(err) = generate::run(cli).await {
		output::print_error(&err, format);
		std::process::exit(1);
	}
}
