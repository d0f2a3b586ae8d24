use crate::{comm_path, Environment, SearchPath};
use anyhow::Result;

pub fn execute() -> Result<()> {
    let env = Environment::capture();
    let path = comm_path::resolve(&env, &SearchPath)?;
    println!("{}", path.display());

    Ok(())
}
