mod commands;
mod config;
mod gateway;
mod store;
mod tasks;
mod util;

use crate::config::Config;
use crate::gateway::Gateway;
use crate::store::ReminderStore;
use crate::tasks::task_handler;
use crate::util::now_local;
use chrono::NaiveDateTime;
use dotenvy::dotenv;
use poise::serenity_prelude as serenity;
use poise::serenity_prelude::ChannelId;
use regex::Regex;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const COMMAND_PREFIX: &str = "/";

pub struct Data {
    regex_cache: RegexCache,
    store: ReminderStore,
    owner_channel: ChannelId,
} // Shared by every command invocation and the reminder task
pub struct RegexCache {
    /// n minutes or n hours, e.g. 25m, 2h
    interval: Regex,
}

impl RegexCache {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(RegexCache { interval: Regex::new(r"^([+-]?\d+)([mh])$")? })
    }
}

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Arc<Data>, Error>;
pub type Command = poise::Command<Arc<Data>, Error>;

#[tokio::main]
async fn main() {
    let dotenv_result = dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    if let Err(e) = dotenv_result {
        tracing::debug!("no .env file loaded: {e}");
    }
    if let Err(e) = run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    tracing::info!("InMemoriamBot started.");

    let config = Config::from_env()?;
    let store = ReminderStore::open(&config.reminder_file)?;
    tracing::info!("Using reminder file {}", store.path().display());
    ::serenity::utils::validate_token(&config.token)?;

    let data = Arc::new(Data {
        regex_cache: RegexCache::new()?,
        store,
        owner_channel: config.owner_channel,
    });
    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let setup_data = data.clone();
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(COMMAND_PREFIX.into()),
                ..Default::default()
            },
            commands: commands::commands(),
            on_error: |error| Box::pin(commands::on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                let http = ctx.http.clone();
                let task_data = setup_data.clone();
                tokio::spawn(async move { task_handler(http, task_data).await });
                Ok(setup_data)
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await?;

    notify_owner(client.http.as_ref(), data.owner_channel, now_local()).await?;

    client.start().await?;
    Ok(())
}

pub fn startup_message(now: NaiveDateTime) -> String {
    format!("InMemoriamBot was started at {}", now.format("%d.%m.%Y (%a) at %H:%M:%S"))
}

/// Tells the owner the bot is up. Not being able to is fatal.
async fn notify_owner<G: Gateway + ?Sized>(
    gateway: &G, owner_channel: ChannelId, now: NaiveDateTime,
) -> Result<(), Error> {
    gateway.send(owner_channel, &startup_message(now)).await
}

#[cfg(test)]
impl Data {
    pub fn for_tests(dir: &std::path::Path) -> Self {
        Data {
            regex_cache: RegexCache::new().expect("regex"),
            store: ReminderStore::open(dir.join("reminders.csv")).expect("open store"),
            owner_channel: ChannelId::new(42),
        }
    }
}
