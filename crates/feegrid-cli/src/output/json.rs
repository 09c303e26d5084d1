use feegrid_core::error::FeegridError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), FeegridError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
