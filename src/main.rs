use chaintable::cli::CLI;
use chaintable::common::exception::BenchError;

fn main() -> Result<(), BenchError> {
    let mut cli = CLI::new()?;
    cli.run()
}
