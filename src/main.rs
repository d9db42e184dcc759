use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "icon-extractor",
    version,
    about = "Crop a logo to its graphical mark and emit padded square icons"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    icon_extractor::logging::init(cli.verbose)?;

    let output = icon_extractor::run(icon_extractor::Config::default())?;
    println!("{}", output);
    Ok(())
}
