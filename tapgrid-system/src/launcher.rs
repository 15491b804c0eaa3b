//! Starting applications as detached processes.

use crate::error::LaunchError;
use serde::Serialize;
use std::process::{Child, Command, Stdio};
use tracing::{debug, info, warn};

/// A process started by an [`ApplicationLauncher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessHandle {
    pub pid: u32,
}

pub trait ApplicationLauncher: Send {
    /// Starts `command` without waiting for it.
    fn launch(&mut self, command: &str) -> Result<ProcessHandle, LaunchError>;
}

/// Splits a command line on whitespace. Quoting is not interpreted.
pub fn split_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Spawns each command with null stdio in a process group of its own.
///
/// Children are never waited on. Finished ones are reaped with a
/// non-blocking check on every launch so they do not linger as zombies.
#[derive(Debug, Default)]
pub struct DetachedProcessLauncher {
    children: Vec<Child>,
}

impl DetachedProcessLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of launched processes not yet seen to exit.
    pub fn tracked_children(&self) -> usize {
        self.children.len()
    }

    /// Drops every child that has exited.
    pub fn reap(&mut self) {
        self.children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                debug!(pid = child.id(), %status, "Launched process exited");
                false
            }
            Ok(None) => true,
            Err(e) => {
                warn!(pid = child.id(), "Failed to poll launched process: {}", e);
                false
            }
        });
    }
}

impl ApplicationLauncher for DetachedProcessLauncher {
    fn launch(&mut self, command: &str) -> Result<ProcessHandle, LaunchError> {
        self.reap();

        let (program, args) = split_command(command).ok_or(LaunchError::EmptyCommand)?;
        let mut cmd = Command::new(program);
        cmd.args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        let child = cmd.spawn().map_err(|source| LaunchError::Spawn {
            command: command.to_string(),
            source,
        })?;
        let handle = ProcessHandle { pid: child.id() };
        info!(pid = handle.pid, "Launched '{}'", command);
        self.children.push(child);
        Ok(handle)
    }
}
