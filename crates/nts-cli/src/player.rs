//! Hand a stream URL to an external media player and wait for it.

use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::time::Duration;

use nts_proto::config::PlayerConfig;
use nts_proto::mixtape::random_pick;
use nts_proto::model::MixtapeEntry;
use nts_proto::platform::find_player_binary;
use ratatui::crossterm::style::Stylize;
use tokio::process::Command;
use tracing::{info, warn};

use crate::error::CliError;

/// A player killed by the terminal's SIGINT exits at about the same moment
/// our own Ctrl-C handler fires; wait this long before trusting its status.
const INTERRUPT_GRACE: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerExit {
    /// The player exited on its own with success.
    Finished,
    /// Ctrl-C; the player has been stopped.
    Interrupted,
}

pub async fn launch(player: &PlayerConfig, url: &str) -> Result<PlayerExit, CliError> {
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    launch_until(player, url, ctrl_c.as_mut()).await
}

/// Run the player until it exits or `interrupt` resolves. `interrupt` is
/// only polled again by the caller while it is still pending.
async fn launch_until<F: Future>(
    player: &PlayerConfig,
    url: &str,
    mut interrupt: Pin<&mut F>,
) -> Result<PlayerExit, CliError> {
    let missing = || CliError::PlayerMissing {
        program: player.program.clone(),
    };
    let binary = find_player_binary(&player.program).ok_or_else(missing)?;

    info!("player: {:?} {:?} {}", binary, player.args, url);
    let mut child = Command::new(&binary)
        .args(&player.args)
        .arg(url)
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => missing(),
            _ => CliError::Io(e),
        })?;

    let status = tokio::select! {
        _ = interrupt.as_mut() => {
            info!("player: interrupted");
            let _ = child.kill().await;
            return Ok(PlayerExit::Interrupted);
        }
        status = child.wait() => status?,
    };

    // Players that quit on SIGINT may exit 0 or not; either way the
    // interrupt decides.
    if tokio::time::timeout(INTERRUPT_GRACE, interrupt.as_mut())
        .await
        .is_ok()
    {
        info!("player: interrupted ({})", status);
        return Ok(PlayerExit::Interrupted);
    }
    if status.success() {
        info!("player: finished");
        return Ok(PlayerExit::Finished);
    }
    warn!("player: exited with {}", status);
    Err(CliError::PlayerFailed {
        program: player.program.clone(),
        code: status.code(),
    })
}

/// Play random mixtapes back to back until Ctrl-C.
pub async fn random_loop<W: Write>(
    catalog: &[MixtapeEntry],
    player: &PlayerConfig,
    color: bool,
    out: &mut W,
) -> Result<(), CliError> {
    // One listener for the whole loop, so a Ctrl-C between launches is kept.
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    random_loop_until(catalog, player, color, out, ctrl_c.as_mut()).await
}

async fn random_loop_until<W: Write, F: Future>(
    catalog: &[MixtapeEntry],
    player: &PlayerConfig,
    color: bool,
    out: &mut W,
    mut interrupt: Pin<&mut F>,
) -> Result<(), CliError> {
    let mut rng = rand::thread_rng();
    loop {
        let mixtape = random_pick(catalog, &mut rng).ok_or_else(|| CliError::NotFound {
            what: "any mixtape".to_string(),
        })?;
        announce(mixtape, color, out)?;
        let exit = launch_until(player, &mixtape.stream_url, interrupt.as_mut()).await?;
        if exit == PlayerExit::Interrupted {
            return Ok(());
        }
    }
}

/// `Now playing: Title (alias)`, title in bold when colored.
pub fn announce<W: Write>(mixtape: &MixtapeEntry, color: bool, out: &mut W) -> std::io::Result<()> {
    if color {
        writeln!(
            out,
            "Now playing: {} ({})",
            mixtape.title.as_str().bold(),
            mixtape.alias
        )?;
    } else {
        writeln!(out, "Now playing: {} ({})", mixtape.title, mixtape.alias)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(program: &str) -> PlayerConfig {
        PlayerConfig {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    fn mixtape(alias: &str) -> MixtapeEntry {
        MixtapeEntry {
            title: format!("Title {alias}"),
            subtitle: String::new(),
            description: String::new(),
            alias: alias.to_string(),
            stream_url: format!("https://example.invalid/{alias}"),
            credits: Vec::new(),
        }
    }

    #[tokio::test]
    async fn missing_player_is_reported() {
        let err = launch(&player("nts-test-no-such-player"), "http://x")
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::PlayerMissing { ref program } if program == "nts-test-no-such-player"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn exit_status_is_mapped() {
        assert_eq!(
            launch(&player("true"), "http://x").await.unwrap(),
            PlayerExit::Finished
        );
        let err = launch(&player("false"), "http://x").await.unwrap_err();
        assert!(matches!(err, CliError::PlayerFailed { code: Some(1), .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn random_loop_stops_on_player_failure() {
        let catalog = vec![mixtape("poolside")];
        let mut out = Vec::new();
        let err = random_loop(&catalog, &player("false"), false, &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::PlayerFailed { .. }));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Now playing: Title poolside (poolside)\n"
        );
    }

    /// `sh -c <script>`; the stream URL lands in `$0`.
    #[cfg(unix)]
    fn script_player(script: &str) -> PlayerConfig {
        PlayerConfig {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn clean_exit_during_interrupt_counts_as_interrupted() {
        let interrupt = tokio::time::sleep(Duration::from_millis(120));
        tokio::pin!(interrupt);
        let exit = launch_until(&script_player("sleep 0.1; exit 0"), "http://x", interrupt)
            .await
            .unwrap();
        assert_eq!(exit, PlayerExit::Interrupted);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn interrupt_stops_random_play_after_clean_exit() {
        let catalog = vec![mixtape("poolside")];
        let mut out = Vec::new();
        let interrupt = tokio::time::sleep(Duration::from_millis(120));
        tokio::pin!(interrupt);
        random_loop_until(
            &catalog,
            &script_player("sleep 0.1; exit 0"),
            false,
            &mut out,
            interrupt,
        )
        .await
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Now playing: Title poolside (poolside)\n"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn interrupt_kills_running_player() {
        let catalog = vec![mixtape("poolside")];
        let mut out = Vec::new();
        let interrupt = std::future::ready(());
        tokio::pin!(interrupt);
        random_loop_until(&catalog, &script_player("sleep 5"), false, &mut out, interrupt)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn one_interrupt_listener_spans_launches() {
        let catalog = vec![mixtape("poolside")];
        let mut out = Vec::new();
        let interrupt = tokio::time::sleep(Duration::from_millis(300));
        tokio::pin!(interrupt);
        let looped = tokio::time::timeout(
            Duration::from_secs(5),
            random_loop_until(&catalog, &script_player("exit 0"), false, &mut out, interrupt),
        )
        .await;
        assert!(matches!(looped, Ok(Ok(()))));
        assert!(String::from_utf8(out).unwrap().lines().count() >= 2);
    }

    #[tokio::test]
    async fn random_loop_needs_a_catalog() {
        let mut out = Vec::new();
        let err = random_loop(&[], &player("true"), false, &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::NotFound { .. }));
        assert!(out.is_empty());
    }
}
