use slate_bot::SlateConfig;

pub fn run(config: &SlateConfig, args: &[String]) -> Result<(), String> {
    let command = super::roll_command(config);
    println!("{}", command.roll(args));
    Ok(())
}
