use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

mod application;
mod domain;
mod infrastructure;

use application::errors::{BotError, CommandError};
use application::pipeline::AwakenPipeline;
use domain::entities::{Command, CommandRegistry, Content, Message, User};
use domain::traits::Bot;
use infrastructure::adapters::console::ConsoleAdapter;
use infrastructure::adapters::telegram::TelegramAdapter;
use infrastructure::config::Config;
use infrastructure::jupiter::JupiterQuoteClient;
use infrastructure::solana::SolanaRpcClient;

#[derive(Parser)]
#[command(name = "awaken-bot")]
#[command(about = "Telegram bot that simulates devnet token buys", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_bot(cli.config, cli.token);
        }
        Commands::Version => {
            println!("awaken-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn run_bot(config_path: String, token_override: Option<String>) {
    // Load config
    let config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using environment", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    tracing::info!("Starting {}", config.bot.name);

    let timeout = Duration::from_secs(config.network.request_timeout_seconds);

    let chain = match SolanaRpcClient::new(&config.solana.rpc_url, timeout) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!("Failed to build RPC client: {}", e);
            return;
        }
    };
    let quotes = match JupiterQuoteClient::new(&config.jupiter.quote_url, timeout) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!("Failed to build quote client: {}", e);
            return;
        }
    };

    let pipeline = Arc::new(AwakenPipeline::new(chain, quotes, config.swap_settings()));
    let commands = Arc::new(build_registry());
    tracing::info!("Registered {} commands", commands.len());

    let rt = tokio::runtime::Runtime::new().unwrap();

    if let Some(token) = token_override.or_else(|| config.telegram_token()) {
        rt.block_on(async {
            let bot = TelegramAdapter::new(token);

            // Register bot commands with Telegram
            if let Err(e) = bot.register_commands().await {
                tracing::warn!("Failed to register commands: {}", e);
            }

            run_telegram_bot(bot, pipeline, commands).await;
        });
    } else {
        // Run console bot (dev mode)
        rt.block_on(async {
            let bot = ConsoleAdapter::new();
            run_console_bot(bot, pipeline, commands).await;
        });
    }
}

/// Static commands served straight from the registry; /awaken is listed
/// here for the help text but handled by the pipeline because it needs
/// the network collaborators.
fn build_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register(
        Command::new("awaken")
            .with_description("Simulate a 0.001 SOL buy on devnet")
            .with_usage("/awaken <TOKEN_MINT_ADDRESS>"),
    );

    registry.register(
        Command::new("start")
            .with_description("Start the bot")
            .with_handler(|msg| {
                let greeting = msg
                    .sender
                    .as_ref()
                    .map(|u| format!("👋 Hi {}!", u.display_name()))
                    .unwrap_or_else(|| "👋 Hi!".to_string());
                Ok(format!(
                    "{} Send /awaken <TOKEN_MINT_ADDRESS> to simulate a devnet buy.",
                    greeting
                ))
            }),
    );

    registry.register(
        Command::new("version")
            .with_description("Show bot version")
            .with_handler(|_| Ok(format!("awaken-bot v{}", env!("CARGO_PKG_VERSION")))),
    );

    // The help handler captures the rendered listing, so /help is registered
    // twice: first so it shows up in its own listing, then with the handler
    registry.register(Command::new("help").with_description("Show this message"));
    let help_text = render_help(&registry);
    registry.register(
        Command::new("help")
            .with_description("Show this message")
            .with_handler(move |_| Ok(help_text.clone())),
    );

    registry
}

/// Render the /help listing from the registered commands, preferring each
/// command's usage line over its bare name.
fn render_help(registry: &CommandRegistry) -> String {
    let mut commands: Vec<&Command> = registry.all().collect();
    commands.sort_by(|a, b| a.name.cmp(&b.name));

    let mut help = String::from("Available commands:");
    for cmd in commands {
        let invocation = match &cmd.usage {
            Some(usage) => usage.clone(),
            None => format!("/{}", cmd.name),
        };
        help.push_str(&format!(
            "\n{} - {}",
            invocation,
            cmd.description.as_deref().unwrap_or("")
        ));
    }
    help
}

/// Parse one incoming line into a domain message, splitting commands on
/// whitespace and stripping the @botname suffix Telegram appends in groups.
fn parse_incoming(chat_id: &str, text: &str, sender: Option<User>) -> Message {
    if let Some(trimmed) = text.strip_prefix('/') {
        let mut parts = trimmed.split_whitespace();
        let name = parts.next().unwrap_or("");
        let name = name.split('@').next().unwrap_or(name);
        let args: Vec<String> = parts.map(|s| s.to_string()).collect();
        Message::from_command(chat_id, name, args).with_sender_opt(sender)
    } else {
        Message::from_text(chat_id, text).with_sender_opt(sender)
    }
}

async fn run_telegram_bot(
    mut bot: TelegramAdapter,
    pipeline: Arc<AwakenPipeline>,
    commands: Arc<CommandRegistry>,
) {
    if let Err(e) = bot.start().await {
        tracing::error!("Failed to start bot: {}", e);
        return;
    }

    // Fetch bot info
    if let Err(e) = bot.fetch_bot_info().await {
        tracing::error!("Failed to fetch bot info: {}", e);
        return;
    }

    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    let bot = Arc::new(bot);
    let mut offset: i64 = 0;
    let timeout_seconds = 30;

    tracing::info!("Starting message loop...");

    loop {
        match bot.get_updates(offset, timeout_seconds).await {
            Ok(updates) => {
                if !updates.is_empty() {
                    offset = TelegramAdapter::get_next_offset(&updates);
                }
                for update in updates {
                    let Some(msg) = update.message else { continue };
                    let Some(text) = msg.text else { continue };

                    // Like the original bot, only commands get a reaction
                    if !text.starts_with('/') {
                        continue;
                    }

                    let chat_id = msg.chat.id.to_string();
                    let sender = msg.from.as_ref().map(|u| User {
                        id: u.id.to_string(),
                        username: u.username.clone(),
                        first_name: u.first_name.clone(),
                    });
                    let message = parse_incoming(&chat_id, &text, sender);

                    // Each command is its own task, so a slow RPC or quote
                    // round trip in one chat does not stall the others
                    let bot = bot.clone();
                    let pipeline = pipeline.clone();
                    let commands = commands.clone();
                    tokio::spawn(async move {
                        if let Err(e) =
                            dispatch(bot.as_ref(), &pipeline, &commands, message, &text).await
                        {
                            tracing::error!("Failed to handle command: {}", e);
                        }
                    });
                }
            }
            Err(e) => {
                tracing::error!("Failed to fetch updates: {}", e);
                tokio::time::sleep(Duration::from_secs(3)).await;
            }
        }
    }
}

async fn run_console_bot(
    bot: ConsoleAdapter,
    pipeline: Arc<AwakenPipeline>,
    commands: Arc<CommandRegistry>,
) {
    if let Err(e) = bot.start().await {
        tracing::error!("Failed to start bot: {}", e);
        return;
    }

    println!("awaken-bot console mode. Try /awaken <TOKEN_MINT_ADDRESS>, or 'exit' to quit.");

    loop {
        let Some(line) = bot.read_line("> ").await else {
            break;
        };
        if line == "exit" || line == "quit" {
            break;
        }
        if line.is_empty() {
            continue;
        }
        let message = parse_incoming("console", &line, Some(User::new("console")));
        if let Err(e) = dispatch(&bot, &pipeline, &commands, message, &line).await {
            tracing::error!("Failed to handle command: {}", e);
        }
    }
}

/// Route one incoming message either into the /awaken pipeline, to a static
/// registry handler, or to a hint for plain text.
async fn dispatch(
    bot: &dyn Bot,
    pipeline: &AwakenPipeline,
    commands: &CommandRegistry,
    message: Message,
    raw_text: &str,
) -> Result<(), BotError> {
    tracing::debug!(
        "Dispatching {} message {} in chat {}",
        message.message_type.as_str(),
        message.id,
        message.chat_id
    );

    match &message.content {
        Content::Command { name, .. } if name.eq_ignore_ascii_case("awaken") => {
            pipeline.handle(bot, &message.chat_id, raw_text).await
        }
        Content::Command { name, .. } => {
            let Some(cmd) = commands.find(name) else {
                let err = CommandError::NotFound(name.clone());
                bot.send_message(&message.chat_id, &err.to_string()).await?;
                return Ok(());
            };
            if let Some(handler) = &cmd.handler {
                let chat_id = message.chat_id.clone();
                match handler(message) {
                    Ok(response) => {
                        bot.send_message(&chat_id, &response).await?;
                    }
                    Err(e) => {
                        bot.send_message(&chat_id, &e.to_string()).await?;
                    }
                }
            }
            Ok(())
        }
        Content::Text(_) => {
            bot.send_message(&message.chat_id, "Commands start with '/'. Try /help.")
                .await?;
            Ok(())
        }
    }
}

fn init_config() {
    let path = "config.yaml";
    if std::path::Path::new(path).exists() {
        println!("{} already exists, not overwriting", path);
        return;
    }
    match std::fs::write(path, Config::default_yaml()) {
        Ok(()) => println!("Wrote default config to {}", path),
        Err(e) => eprintln!("Failed to write {}: {}", path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_incoming_splits_commands_and_strips_bot_suffix() {
        let msg = parse_incoming("42", "/awaken@awaken_bot ABC", None);
        match msg.content {
            Content::Command { name, args } => {
                assert_eq!(name, "awaken");
                assert_eq!(args, vec!["ABC".to_string()]);
            }
            other => panic!("expected command, got {:?}", other),
        }
    }

    #[test]
    fn parse_incoming_treats_plain_lines_as_text() {
        let msg = parse_incoming("42", "hello there", Some(User::new("7")));
        assert!(matches!(msg.content, Content::Text(_)));
        assert_eq!(msg.sender.unwrap().id, "7");
    }

    #[test]
    fn registry_help_lists_awaken_usage() {
        let registry = build_registry();
        assert!(!registry.is_empty());

        let help = registry.find("help").expect("help registered");
        let handler = help.handler.as_ref().expect("help has a handler");
        let reply = handler(Message::from_command("42", "help", vec![])).unwrap();

        assert!(reply.contains("/awaken <TOKEN_MINT_ADDRESS>"), "{}", reply);
        assert!(reply.contains("/version"), "{}", reply);
        assert!(reply.contains("/start"), "{}", reply);
        assert!(reply.contains("/help"), "{}", reply);
    }

    #[test]
    fn start_greets_the_sender_by_name() {
        let registry = build_registry();
        let start = registry.find("start").expect("start registered");
        let handler = start.handler.as_ref().expect("start has a handler");

        let mut user = User::new("7");
        user.username = Some("alice_dev".to_string());
        let msg = Message::from_command("42", "start", vec![]).with_sender(user);

        let reply = handler(msg).unwrap();
        assert!(reply.contains("alice_dev"), "{}", reply);

        let anonymous = handler(Message::from_command("42", "start", vec![])).unwrap();
        assert!(anonymous.contains("/awaken"), "{}", anonymous);
    }
}
