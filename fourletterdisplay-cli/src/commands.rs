//! Subcommand execution

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::Timelike;
use fourletterdisplay_core::services::{ConfigController, Dispatch, DotInput};
use fourletterdisplay_core::ServiceContext;
use fourletterdisplay_rpc::{CleepConfigStore, HttpTransport, RpcConfig};

use crate::cli::{Cli, Command};

pub async fn run(cli: Cli) -> Result<()> {
    let config = RpcConfig::new(&cli.url)?.with_timeout(Duration::from_secs(cli.timeout));
    let transport = Arc::new(HttpTransport::new(&config)?);
    tracing::debug!("Using endpoint {}", transport.command_url());

    let store = Arc::new(CleepConfigStore::new(transport.clone()));
    let ctx = ServiceContext::new(transport, store).with_module(cli.module.clone());
    let mut controller = ConfigController::multi_select(&ctx)?;

    match cli.command {
        Command::Message { text } => {
            controller.set_message(text);
            let Some(dispatch) = controller.display_message() else {
                bail!("Nothing to display: message is empty");
            };
            wait(dispatch).await
        }
        Command::Dots { indices } => {
            let indices: Vec<usize> = indices.into_iter().map(usize::from).collect();
            controller.dots_mut().select_indices(&indices)?;
            wait(controller.set_dots()).await
        }
        Command::Brightness { value } => {
            init_or_warn(&mut controller).await;
            controller.set_brightness(value).await?;
            print_status(&mut controller, false);
            Ok(())
        }
        Command::NightBrightness { value } => {
            init_or_warn(&mut controller).await;
            controller.set_night_mode_brightness(value).await?;
            print_status(&mut controller, false);
            Ok(())
        }
        Command::NightMode { enable } => {
            init_or_warn(&mut controller).await;
            controller.enable_night_mode(enable).await?;
            print_status(&mut controller, false);
            Ok(())
        }
        Command::Clear => wait(controller.clear_display()).await,
        Command::Time => {
            let now = chrono::Local::now();
            tracing::info!("Displaying {:02}:{:02}", now.hour(), now.minute());
            wait(controller.display_time(now.hour(), now.minute())).await
        }
        Command::Status { night } => {
            controller.init().await.context("Failed to load configuration")?;
            print_status(&mut controller, night);
            Ok(())
        }
    }
}

/// Acked commands reload the configuration themselves; a failed initial
/// fetch is only logged.
async fn init_or_warn<D: DotInput>(controller: &mut ConfigController<D>) {
    if let Err(e) = controller.init().await {
        tracing::warn!("Initial configuration fetch failed: {e}");
    }
}

/// The CLI exits right after dispatching, so fire-and-forget sends are joined here.
async fn wait(dispatch: Dispatch) -> Result<()> {
    dispatch.await.context("Command worker stopped")??;
    Ok(())
}

fn print_status<D: DotInput>(controller: &mut ConfigController<D>, is_night: bool) {
    controller.sync();
    if controller.config().is_empty() {
        println!("No configuration received");
        return;
    }

    let config = controller.config().to_display_config();
    println!("brightness:       {}", config.brightness);
    println!("night mode:       {}", if config.nightmode { "on" } else { "off" });
    println!("night brightness: {}", config.nightbrightness);
    println!(
        "effective:        {}{}",
        config.effective_brightness(is_night),
        if is_night { " (night)" } else { " (day)" }
    );

    let extra: Vec<String> = controller
        .config()
        .as_map()
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "brightness" | "nightmode" | "nightbrightness"))
        .map(|(key, value)| format!("{key}={}", serde_json::to_string(value).unwrap_or_default()))
        .collect();
    if !extra.is_empty() {
        println!("other:            {}", extra.join(", "));
    }
}
