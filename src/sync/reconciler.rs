//! One sync invocation: initialize, push, or pull.
//!
//! ```text
//! no handle ──────────────► build payload ─► create ─► persist handle ─► Created
//! handle ─► choose ─┬─ Push ─► build payload ─► update ──────────────► Updated
//!                   ├─ Pull ─► fetch ─► confirm ─┬─ yes ─► write settings
//!                   │                            │        ─► install missing ─► Applied
//!                   │                            └─ no ──────────────────────► Cancelled
//!                   └─ dismissed ─────────────────────────────────────────────► Cancelled
//! ```
//!
//! Any error aborts the rest of the invocation. Nothing is retried.

use crate::core::CodesyncResult;
use crate::di::SyncContext;
use crate::local::{read_settings, write_settings};
use crate::package::InstallReport;
use crate::sync::{RemoteHandle, SyncPayload};
use chrono::Utc;
use std::fmt;
use tracing::info;

/// Which way data flows when a remote handle already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Remote → local
    Pull,
    /// Local → remote
    Push,
}

impl Direction {
    const ALL: [Direction; 2] = [Direction::Pull, Direction::Push];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Pull => write!(f, "Pull: apply settings and extensions from the gist"),
            Direction::Push => write!(f, "Push: upload this machine's settings and extensions"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Skip the direction prompt
    pub direction: Option<Direction>,
    /// Skip the confirmation before applying a pull
    pub assume_yes: bool,
}

/// Terminal state of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// First upload; the new handle has been persisted
    Created(RemoteHandle),
    Updated(RemoteHandle),
    Applied {
        settings_keys: usize,
        report: InstallReport,
    },
    Cancelled,
}

pub struct Reconciler<'a> {
    ctx: &'a SyncContext,
}

impl<'a> Reconciler<'a> {
    pub fn new(ctx: &'a SyncContext) -> Self {
        Self { ctx }
    }

    pub async fn run(&self, options: &SyncOptions) -> CodesyncResult<SyncOutcome> {
        let handle = match self.ctx.state.remote_handle()? {
            Some(handle) => handle,
            None => return self.initialize().await,
        };

        let direction = match options.direction {
            Some(direction) => direction,
            None => match self.choose_direction()? {
                Some(direction) => direction,
                None => {
                    info!("sync dismissed");
                    return Ok(SyncOutcome::Cancelled);
                }
            },
        };

        match direction {
            Direction::Push => self.push(handle).await,
            Direction::Pull => self.pull(&handle, options.assume_yes).await,
        }
    }

    fn choose_direction(&self) -> CodesyncResult<Option<Direction>> {
        let items: Vec<String> = Direction::ALL.iter().map(ToString::to_string).collect();
        let choice = self.ctx.prompt.select("Sync direction", &items)?;
        Ok(choice.and_then(|index| Direction::ALL.get(index).copied()))
    }

    /// Snapshot of local settings and extensions
    pub async fn build_payload(&self) -> CodesyncResult<SyncPayload> {
        let path = self.ctx.local.settings_path()?;
        let settings = read_settings(&path)?;
        let installed = self.ctx.local.installed_packages().await?;

        info!(
            path = %path.display(),
            settings = settings.len(),
            extensions = installed.len(),
            "read local state"
        );

        Ok(SyncPayload::build(
            settings,
            installed,
            self.ctx.local.environment_info(),
            Utc::now(),
        ))
    }

    async fn initialize(&self) -> CodesyncResult<SyncOutcome> {
        let payload = self.build_payload().await?;
        let handle = self.ctx.remote.create(&payload).await?;
        self.ctx.state.set_remote_handle(&handle)?;

        info!(gist_id = %handle, "initialized remote settings");
        Ok(SyncOutcome::Created(handle))
    }

    async fn push(&self, handle: RemoteHandle) -> CodesyncResult<SyncOutcome> {
        let payload = self.build_payload().await?;
        self.ctx.remote.update(&handle, &payload).await?;
        Ok(SyncOutcome::Updated(handle))
    }

    async fn pull(&self, handle: &RemoteHandle, assume_yes: bool) -> CodesyncResult<SyncOutcome> {
        let payload = self.ctx.remote.fetch(handle).await?;
        payload.validate()?;

        info!(
            gist_id = %handle,
            timestamp = %payload.timestamp,
            extensions = payload.extensions.len(),
            "fetched remote settings"
        );

        if !assume_yes {
            let question = format!(
                "Overwrite local settings and install missing extensions from {} extension(s) \
                 synced on {} ({})?",
                payload.extensions.len(),
                payload.timestamp,
                payload.environment.app_name
            );
            if !self.ctx.prompt.confirm(&question)? {
                info!("pull cancelled at confirmation");
                return Ok(SyncOutcome::Cancelled);
            }
        }

        let path = self.ctx.local.settings_path()?;
        write_settings(&path, &payload.settings)?;

        let report = self.ctx.installer().install_missing(&payload.extensions).await?;

        Ok(SyncOutcome::Applied {
            settings_keys: payload.settings.len(),
            report,
        })
    }
}
