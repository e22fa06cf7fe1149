mod cli;

use clap::Parser;
use cli::Cli;
use pdfcollage::{CollageError, InputProperties, OutputProperties, PdflatexRenderer};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CollageError> {
    let input = InputProperties::probe(&cli.input, cli.layouts(), cli.reverse)?;
    let output = OutputProperties::from_spec(
        cli.output.clone(),
        cli.output_size.as_deref(),
        cli.margin,
    )?;
    pdfcollage::run(&input, &output, &PdflatexRenderer)
}
