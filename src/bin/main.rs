use log::*;

use dotenv::dotenv;

use realworld_contracts::{app::*, error::*};

fn run() -> Result<()> {
  let cli = build_cli().get_matches();

  let config = AppConfig::new_clap(&cli)?;

  match cli.subcommand() {
    Some(("check", args)) => check::execute(&config, args)?,
    Some(("map", args)) => map::execute(&config, args)?,
    // default to listing contracts.
    _ => contracts::execute()?,
  }
  Ok(())
}

fn main() {
  dotenv().ok();
  env_logger::init();

  if let Err(err) = run() {
    match err {
      Error::SchemaViolation(ref violations) => {
        for violation in violations.iter() {
          eprintln!("{}", violation);
        }
      },
      ref err => {
        error!("{:?}", err);
        eprintln!("{}", err);
      },
    }
    std::process::exit(1);
  }
  debug!("Main finished");
}
