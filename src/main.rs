//! # Main Entry Point
//!
//! Wires the layers together:
//! - Domain: Configuration, Actions, Catalog and Types
//! - Infrastructure: Matrix
//! - Application: Router, Wizards, Request Store, Lifecycle, Notifications, Logging
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::lifecycle::LifecycleController;
use crate::application::notifier::NotificationDispatcher;
use crate::application::router::CommandRouter;
use crate::application::sessions::SessionStore;
use crate::application::store::RequestStore;
use crate::domain::config::AppConfig;
use crate::domain::types::UserRef;
use crate::infrastructure::matrix::{MatrixMessenger, MatrixService};
use crate::strings::logs;

#[derive(Parser, Debug)]
#[command(version, about = "Potolkoff customer request bot for Matrix")]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(long, default_value = "data/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&args.config)?;

    // 2. Logging Setup
    let _log_guard = crate::application::logging::init(&config.system.log_dir)?;
    tracing::info!("Starting Potolkoff bot...");
    tracing::info!("{}", logs::config_loaded(&config.services.matrix.username));
    config.validate()?;

    let password = config
        .services
        .matrix
        .credential()
        .context(logs::MISSING_CREDENTIAL)?;
    let admin = config.system.admin_id();

    // 3. Matrix Setup
    let client = Client::builder()
        .homeserver_url(&config.services.matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(&config.services.matrix.username, &password)
        .send()
        .await?;
    tracing::info!("{}", logs::LOGIN_SUCCESS);

    if let Some(name) = &config.services.matrix.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    // 4. Initialize Application Components
    let store = Arc::new(RequestStore::new(&config.system.requests_file));
    tracing::info!(
        "{}",
        logs::store_ready(&config.system.requests_file, store.load_all().len())
    );
    let messenger = Arc::new(MatrixMessenger::new(client.clone()));
    let notifier = Arc::new(NotificationDispatcher::new(messenger, admin.clone()));
    let lifecycle = Arc::new(LifecycleController::new(
        store.clone(),
        notifier.clone(),
        admin,
    ));
    let sessions = Arc::new(Mutex::new(SessionStore::new(config.system.session_ttl())));
    let router = Arc::new(CommandRouter::new(sessions, store, notifier, lifecycle));

    // 5. Event Handlers
    let start_time = std::time::SystemTime::now();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();

        async move {
            let Some(msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let ts = ev.origin_server_ts();
            let event_time =
                std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }

            let MessageType::Text(text_content) = &msg.content.msgtype else {
                return;
            };
            if msg.sender == room.own_user_id() {
                return;
            }

            let body = &text_content.body;
            tracing::info!("Received message from {}: \n{}", msg.sender, body);

            let sender = &msg.sender;
            let name = match room.get_member_no_sync(sender).await {
                Ok(Some(member)) => member.display_name().map(str::to_string),
                _ => None,
            }
            .unwrap_or_else(|| sender.localpart().to_string());
            let user = UserRef::new(sender.as_str(), name);

            let chat = MatrixService::new(room);
            if let Err(e) = router.route(&chat, &user, body).await {
                tracing::error!("Failed to route message: {:#}", e);
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
            match room.join().await {
                Ok(()) => tracing::info!("{}", logs::JOIN_INVITE_SUCCESS),
                Err(e) => tracing::error!("{}", logs::join_invite_fail(&e.to_string())),
            }
        }
    });

    // 6. Sync until Ctrl-C
    tracing::info!("{}", logs::SYNC_LOOP_START);
    tokio::select! {
        result = client.sync(SyncSettings::default()) => {
            if let Err(e) = result {
                tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
                return Err(e.into());
            }
        }
        signal = tokio::signal::ctrl_c() => {
            match signal {
                Ok(()) => tracing::info!("{}", logs::SHUTDOWN),
                Err(e) => tracing::error!("{}", logs::shutdown_fail(&e.to_string())),
            }
        }
    }

    Ok(())
}
