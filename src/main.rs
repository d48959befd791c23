mod cli;

use anyhow::Result;
use clap::Parser;

use cli::CliArgs;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    codebox::tracing::init(args.log_file);

    let session = cli::Session::from_args(&args)?;
    let report = session.run(&args.keys)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}
