use clap::{Arg, Command};

use crate::schema::ContractKind;

pub fn build_cli() -> Command<'static> {
  let contracts: Vec<&'static str> = ContractKind::ALL.iter().map(|kind| kind.name()).collect();

  Command::new("realworld-contracts")
    .version(env!("CARGO_PKG_VERSION"))
    .about("Validate and normalize RealWorld API payloads")
    .arg(Arg::new("config")
      .short('c')
      .long("config")
      .value_name("FILE")
      .takes_value(true)
      .help("Sets a custom config file"))
    .subcommand(Command::new("check")
      .about("Validate a JSON payload against a contract")
      .arg(Arg::new("contract")
        .required(true)
        .possible_values(contracts)
        .help("Contract name"))
      .arg(Arg::new("file")
        .help("JSON file to read, stdin when omitted")))
    .subcommand(Command::new("map")
      .about("Validate a payload and print the mapped entity")
      .arg(Arg::new("kind")
        .required(true)
        .possible_values(["article", "articles", "filter"])
        .help("Payload kind"))
      .arg(Arg::new("file")
        .help("JSON file to read, stdin when omitted")))
    .subcommand(Command::new("contracts")
      .about("List contract names"))
}
