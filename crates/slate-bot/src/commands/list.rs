use slate_bot::SlateConfig;

pub fn run(config: &SlateConfig) -> Result<(), String> {
    let registry = super::registry(config).map_err(|e| e.to_string())?;
    println!("{}", registry.help(None));
    Ok(())
}
