use std::io::{self, BufRead};

use slate_bot::{BotResult, CommandContext, ConsoleSession, MessageEvent, Session, SlateConfig};

pub fn run(config: &SlateConfig, channel: &str, author: &str) -> Result<(), String> {
    serve(config, channel, author).map_err(|e| e.to_string())
}

fn serve(config: &SlateConfig, channel: &str, author: &str) -> BotResult<()> {
    let registry = super::registry(config)?;
    let mut session = ConsoleSession::new(io::stdout());
    session.add_handler(Box::new(|event: &MessageEvent| {
        tracing::trace!(author = %event.author_id, content = %event.content, "message received");
    }));
    session.open()?;

    let ctx = CommandContext::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event = MessageEvent::new(channel, author, line);
        session.emit(&event);
        registry.handle(&ctx, &mut session, &event);
    }

    session.close()?;
    Ok(())
}
