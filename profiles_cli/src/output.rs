use anyhow::Result;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Compact,
}

pub fn render_json(value: &Value, format: &OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Compact => serde_json::to_string(value)?,
    })
}

pub fn print_json(value: &Value, format: &OutputFormat) -> Result<()> {
    println!("{}", render_json(value, format)?);
    Ok(())
}
