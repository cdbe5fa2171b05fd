use crate::error::*;
use crate::schema::ContractKind;

pub fn execute() -> Result<()> {
  for kind in ContractKind::ALL.iter() {
    println!("{}", kind);
  }
  Ok(())
}
