//! mpv playback engine.
//!
//! One mpv process per tuned channel.  The handle owns the child process:
//! dropping it kills mpv, so "dispose before start" is simply replacing the
//! `Option<MpvPlayer>` the App holds.  Pause/resume go over mpv's JSON IPC
//! socket as one-line `set_property` writes; there is no response matching —
//! the player surface here is start / pause / resume / dispose, nothing more.

use anyhow::Context;
use serde_json::json;
use tokio::process::{Child, Command};
use tracing::{debug, warn};

use zap_core::config::PlayerConfig;
use zap_core::platform;

#[cfg(unix)]
use std::path::PathBuf;

pub struct MpvPlayer {
    child: Child,
    #[cfg(unix)]
    socket_path: PathBuf,
    #[cfg(windows)]
    pipe_name: String,
}

impl MpvPlayer {
    /// Spawn the player for `url`.  The caller has already disposed the
    /// previous session.
    pub async fn start(config: &PlayerConfig, url: &str) -> anyhow::Result<Self> {
        #[cfg(unix)]
        let socket_path = PathBuf::from(platform::mpv_socket_name());
        #[cfg(unix)]
        let _ = tokio::fs::remove_file(&socket_path).await;

        debug!("player: spawning {} for {}", config.binary, url);
        let child = Command::new(&config.binary)
            .arg(platform::mpv_socket_arg())
            .arg("--quiet")
            .args(&config.extra_args)
            .arg(url)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn player '{}'", config.binary))?;
        debug!("player: spawned pid {:?}", child.id());

        Ok(Self {
            child,
            #[cfg(unix)]
            socket_path,
            #[cfg(windows)]
            pipe_name: platform::mpv_socket_name(),
        })
    }

    pub async fn resume(&self) {
        self.set_pause(false).await;
    }

    pub async fn pause(&self) {
        self.set_pause(true).await;
    }

    /// Playback failures are logged, never surfaced as user-visible errors.
    async fn set_pause(&self, paused: bool) {
        if let Err(e) = self.send(json!(["set_property", "pause", paused])).await {
            warn!("player: set pause={} failed: {}", paused, e);
        }
    }

    #[cfg(unix)]
    async fn send(&self, command: serde_json::Value) -> anyhow::Result<()> {
        use tokio::io::AsyncWriteExt;

        let mut stream = tokio::net::UnixStream::connect(&self.socket_path).await?;
        let mut line = serde_json::to_string(&json!({ "command": command }))?;
        line.push('\n');
        stream.write_all(line.as_bytes()).await?;
        Ok(())
    }

    #[cfg(windows)]
    async fn send(&self, command: serde_json::Value) -> anyhow::Result<()> {
        use tokio::io::AsyncWriteExt;
        use tokio::net::windows::named_pipe::ClientOptions;

        let pipe_path = format!(r"\\.\pipe\{}", self.pipe_name);
        let mut pipe = ClientOptions::new().open(&pipe_path)?;
        let mut line = serde_json::to_string(&json!({ "command": command }))?;
        line.push('\n');
        pipe.write_all(line.as_bytes()).await?;
        Ok(())
    }
}

impl Drop for MpvPlayer {
    fn drop(&mut self) {
        let _ = self.child.start_kill();
        #[cfg(unix)]
        let _ = std::fs::remove_file(&self.socket_path);
    }
}
