use clap::Parser;
use danni_watch::commandline::Commandline;
use danni_watch::error::DanniError;

#[tokio::main]
async fn main() -> Result<(), DanniError> {
	Commandline::parse().run().await
}
