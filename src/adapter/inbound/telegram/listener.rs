//! Telegram command listener.
//!
//! Long-polls the Bot API through `teloxide::repl`, turns every text
//! message into a [`Subscriber`] plus command, and replies with whatever
//! the [`CommandHandler`] returns.
//!
//! Requires the `telegram` feature to be enabled.

use std::sync::Arc;

use teloxide::prelude::{respond, Bot, Message, Requester};
use teloxide::types::BotCommand;
use tracing::{error, info, warn};

use super::command::{bot_commands, command_response_for_message};
use crate::domain::{ChatId, Subscriber};
use crate::port::CommandHandler;

/// Run the command listener until the process receives Ctrl-C.
pub async fn run_listener(bot: Bot, handler: Arc<dyn CommandHandler>) {
    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!("Telegram command listener started");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let handler = Arc::clone(&handler);
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            let username = msg.from.as_ref().and_then(|user| user.username.as_deref());
            let subscriber = Subscriber::new(ChatId(msg.chat.id.0), username);

            if let Some(response) =
                command_response_for_message(handler.as_ref(), subscriber, text).await
            {
                if let Err(e) = bot.send_message(msg.chat.id, response).await {
                    error!(chat_id = msg.chat.id.0, error = %e, "Failed to send command response");
                }
            }

            respond(())
        }
    })
    .await;

    info!("Telegram command listener stopped");
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
