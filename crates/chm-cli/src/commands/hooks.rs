//! Post-create hooks

use std::path::Path;
use tokio::process::Command;

/// Run each post-create command through the shell in `root`.
///
/// Hooks are fire-and-report: failures are logged, never returned.
pub(crate) async fn run_post_create(commands: &[String], root: &Path) {
    for cmd in commands {
        log::debug!("Running post-create hook: {}", cmd);

        let status = shell(cmd).current_dir(root).status().await;
        match status {
            Ok(status) if status.success() => {}
            Ok(status) => log::warn!("Post-create hook '{}' exited with {}", cmd, status),
            Err(e) => log::warn!("Post-create hook '{}' failed to start: {}", cmd, e),
        }
    }
}

fn shell(cmd: &str) -> Command {
    if cfg!(windows) {
        let mut command = Command::new("cmd");
        command.arg("/C").arg(cmd);
        command
    } else {
        let mut command = Command::new("sh");
        command.arg("-c").arg(cmd);
        command
    }
}
