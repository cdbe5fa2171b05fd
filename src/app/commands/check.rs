use log::*;

use clap::ArgMatches;

use crate::error::*;
use crate::app::*;
use crate::schema::*;

pub fn execute(config: &AppConfig, cli: &ArgMatches) -> Result<()> {
  let kind: ContractKind = cli.value_of("contract").unwrap_or_default().parse()?;
  let registry = Registry::new(config.registry_options()?);
  debug!("check: contract={} options={:?}", kind, registry.options());

  let input = commands::read_input(cli.value_of("file"))?;
  let normalized = registry.validate(kind, &input)?;
  info!("check: {} accepted", kind);

  println!("{}", commands::render(config, &normalized)?);
  Ok(())
}
