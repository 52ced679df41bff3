//! Display configuration controller
//!
//! Holds the UI-side state of the configuration page (message being typed,
//! dot choice, mirror of the backend configuration) and turns user actions
//! into commands.
//!
//! Messages, dots and clear are fire-and-forget: they are queued to a
//! per-controller worker that sends them one at a time in call order. Queuing
//! never blocks and needs no runtime context, so these actions may be called
//! from synchronous UI callbacks. The returned [`Dispatch`] may be awaited or
//! dropped.
//! Brightness and night mode changes wait for the backend ack and then force
//! a configuration reload; the subscription alone is not relied upon there.

use std::sync::Arc;

use serde_json::Value;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};

use crate::error::{log_error, CoreError, CoreResult};
use crate::services::{
    CheckboxDots, DisplayCommandService, DotInput, MultiSelectDots, ServiceContext,
};
use crate::traits::{ConfigSnapshot, ConfigStore, ConfigSubscription};
use crate::types::{ConfigMirror, DisplayCommand};
use crate::utils::format_time_message;

/// Result of a fire-and-forget command, resolved once the worker has sent it
pub type Dispatch = oneshot::Receiver<CoreResult<Value>>;

/// Controller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No configuration observed yet
    Uninitialized,
    /// At least one non-empty configuration merged
    Synced,
}

/// What happens to the message field on submit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessagePolicy {
    /// Always send, keep the text afterwards
    #[default]
    Retain,
    /// Skip empty text; clear the field right after dispatch without waiting
    /// for the ack (the text is lost if the send fails)
    ClearAfterSend,
}

/// Commands queued by one fire-and-forget action
struct Job {
    commands: Vec<DisplayCommand>,
    reply: oneshot::Sender<CoreResult<Value>>,
}

/// Display configuration controller
pub struct ConfigController<D: DotInput> {
    commands: DisplayCommandService,
    config_store: Arc<dyn ConfigStore>,
    queue: mpsc::UnboundedSender<Job>,
    subscription: Option<ConfigSubscription>,
    config: ConfigMirror,
    state: ControllerState,
    message: String,
    message_policy: MessagePolicy,
    dots: D,
}

impl ConfigController<CheckboxDots> {
    /// Checkbox dots, message kept after sending
    pub fn checkbox(ctx: &ServiceContext) -> CoreResult<Self> {
        Self::new(ctx, CheckboxDots::new(), MessagePolicy::Retain)
    }
}

impl ConfigController<MultiSelectDots> {
    /// Multi-select dots, message cleared after sending
    pub fn multi_select(ctx: &ServiceContext) -> CoreResult<Self> {
        Self::new(ctx, MultiSelectDots::new(), MessagePolicy::ClearAfterSend)
    }
}

impl<D: DotInput> ConfigController<D> {
    /// Create a controller.
    ///
    /// Must be called within a tokio runtime: the command worker is started
    /// on it and lives as long as the controller.
    pub fn new(
        ctx: &ServiceContext,
        dots: D,
        message_policy: MessagePolicy,
    ) -> CoreResult<Self> {
        let handle =
            Handle::try_current().map_err(|e| CoreError::RuntimeUnavailable(e.to_string()))?;
        let commands = ctx.command_service();
        let queue = spawn_worker(&handle, commands.clone());

        Ok(Self {
            commands,
            config_store: Arc::clone(&ctx.config_store),
            queue,
            subscription: None,
            config: ConfigMirror::new(),
            state: ControllerState::Uninitialized,
            message: String::new(),
            message_policy,
            dots,
        })
    }

    // ===== Lifecycle =====

    /// Subscribe to configuration changes and request the current configuration.
    ///
    /// Does not wait for the configuration itself; it arrives through
    /// [`Self::sync`] or [`Self::next_change`].
    pub async fn init(&mut self) -> CoreResult<()> {
        let module = self.commands.module().to_string();
        if self.subscription.is_none() {
            self.subscription = Some(self.config_store.subscribe(&module).await);
        }
        self.config_store
            .get_module_config(&module)
            .await
            .inspect_err(|e| log_error(&format!("[{module}] config fetch failed"), e))
    }

    /// Merge every pending notification. Returns whether the mirror changed.
    pub fn sync(&mut self) -> bool {
        let mut pending = Vec::new();
        if let Some(subscription) = self.subscription.as_mut() {
            while let Some(snapshot) = subscription.try_next() {
                pending.push(snapshot);
            }
        }
        pending
            .iter()
            .fold(false, |changed, snapshot| self.apply(snapshot) || changed)
    }

    /// Wait for the next notification and merge it.
    ///
    /// Returns `None` when not initialized or once the store has gone away,
    /// otherwise whether the mirror changed.
    pub async fn next_change(&mut self) -> Option<bool> {
        let snapshot = self.subscription.as_mut()?.next().await?;
        Some(self.apply(&snapshot))
    }

    fn apply(&mut self, snapshot: &ConfigSnapshot) -> bool {
        if !self.config.merge(snapshot.as_ref()) {
            return false;
        }
        if self.state == ControllerState::Uninitialized {
            log::info!("[{}] configuration synced", self.commands.module());
            self.state = ControllerState::Synced;
        }
        true
    }

    // ===== Accessors =====

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn config(&self) -> &ConfigMirror {
        &self.config
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn dots(&self) -> &D {
        &self.dots
    }

    pub fn dots_mut(&mut self) -> &mut D {
        &mut self.dots
    }

    // ===== Fire-and-forget actions =====

    /// Display the current message.
    ///
    /// Returns `None` when nothing was sent (empty text under
    /// [`MessagePolicy::ClearAfterSend`]).
    pub fn display_message(&mut self) -> Option<Dispatch> {
        let message = match self.message_policy {
            MessagePolicy::ClearAfterSend if self.message.is_empty() => return None,
            MessagePolicy::ClearAfterSend => std::mem::take(&mut self.message),
            MessagePolicy::Retain => self.message.clone(),
        };
        Some(self.dispatch(vec![DisplayCommand::DisplayMessage { message }]))
    }

    /// Send the current dot selection
    pub fn set_dots(&mut self) -> Dispatch {
        let selection = self.dots.selection();
        self.dots.after_submit();
        self.dispatch(vec![DisplayCommand::SetDots(selection)])
    }

    /// Clear the display. Persisted configuration is unaffected, so no reload.
    pub fn clear_display(&self) -> Dispatch {
        self.dispatch(vec![DisplayCommand::Clear])
    }

    /// Show the time of day as `HHMM`
    pub fn display_time(&self, hour: u32, minute: u32) -> Dispatch {
        self.dispatch(vec![DisplayCommand::DisplayMessage {
            message: format_time_message(hour, minute),
        }])
    }

    /// Queue `commands` behind every earlier action of this controller.
    fn dispatch(&self, commands: Vec<DisplayCommand>) -> Dispatch {
        let (reply, dispatch) = oneshot::channel();
        if let Err(mpsc::error::SendError(job)) = self.queue.send(Job { commands, reply }) {
            let err = CoreError::RuntimeUnavailable("command worker stopped".to_string());
            log_error(&format!("[{}] dispatch failed", self.commands.module()), &err);
            let _ = job.reply.send(Err(err));
        }
        dispatch
    }

    // ===== Acknowledged actions =====

    /// Enable or disable night mode, then reload the configuration
    pub async fn enable_night_mode(&self, enable: bool) -> CoreResult<()> {
        self.send_then_reload(DisplayCommand::EnableNightMode { enable })
            .await
    }

    /// Set brightness, then reload the configuration
    pub async fn set_brightness(&self, brightness: i64) -> CoreResult<()> {
        self.send_then_reload(DisplayCommand::SetBrightness { brightness })
            .await
    }

    /// Set night mode brightness, then reload the configuration
    pub async fn set_night_mode_brightness(&self, brightness: i64) -> CoreResult<()> {
        self.send_then_reload(DisplayCommand::SetNightModeBrightness { brightness })
            .await
    }

    async fn send_then_reload(&self, command: DisplayCommand) -> CoreResult<()> {
        let module = self.commands.module();
        let name = command.name();
        self.commands
            .send(command)
            .await
            .inspect_err(|e| log_error(&format!("[{module}] {name} failed"), e))?;
        self.config_store
            .reload_module_config(module)
            .await
            .inspect_err(|e| log_error(&format!("[{module}] config reload failed"), e))
    }
}

/// Start the task sending queued jobs one at a time. It stops once the
/// controller (the only sender) is dropped.
fn spawn_worker(handle: &Handle, service: DisplayCommandService) -> mpsc::UnboundedSender<Job> {
    let (queue, mut jobs) = mpsc::unbounded_channel::<Job>();
    handle.spawn(async move {
        while let Some(job) = jobs.recv().await {
            let result = run_job(&service, job.commands).await;
            // Receiver may have been dropped
            let _ = job.reply.send(result);
        }
        log::debug!("[{}] command worker stopped", service.module());
    });
    queue
}

/// Sends `commands` in order, stopping at the first failure.
async fn run_job(
    service: &DisplayCommandService,
    commands: Vec<DisplayCommand>,
) -> CoreResult<Value> {
    let mut data = Value::Null;
    for command in commands {
        let name = command.name();
        data = service.send(command).await.inspect_err(|e| {
            log_error(&format!("[{}] {name} failed", service.module()), e);
        })?;
    }
    Ok(data)
}
