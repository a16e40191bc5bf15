//! Command dispatch: fetch, shape, render, hand off to the player.
//!
//! Every command writes to the `out` it is given; nothing here touches the
//! process's stdout or exit code directly, see [`report`].

use std::io::Write;

use nts_proto::client::NtsClient;
use nts_proto::config::Config;
use nts_proto::mixtape;
use nts_proto::model::{BroadcastSlot, MixtapeEntry};
use nts_proto::streams::stream_url;
use ratatui::crossterm::style::Stylize;
use tracing::{info, warn};

use crate::art::CoverArt;
use crate::cli::{Command, MixtapeCommand};
use crate::components::art_panel::ArtPanel;
use crate::components::channel_panel::ChannelPanel;
use crate::components::info_panel::InfoPanel;
use crate::components::mixtape_panel::MixtapePanel;
use crate::components::mixtape_table::MixtapeTable;
use crate::components::now_view::{column_width, fit_art, ChannelColumn, NowView};
use crate::components::schedule_table::ScheduleTable;
use crate::error::{CliError, Disposition};
use crate::output::{write_component, RenderOptions};
use crate::player::{self, PlayerExit};

pub async fn run<W: Write>(
    command: &Command,
    config: &Config,
    options: RenderOptions,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        Command::Now {
            art,
            art_width,
            art_height,
        } => {
            let art_size = art.then(|| {
                (
                    art_width.unwrap_or(config.art.width),
                    art_height.unwrap_or(config.art.height),
                )
            });
            now(config, art_size, options, out).await
        }
        Command::Schedule => schedule(config, options, out).await,
        Command::Json => {
            let raw = NtsClient::new(&config.api)?.fetch_live_raw().await?;
            let pretty = serde_json::to_string_pretty(&raw).map_err(std::io::Error::from)?;
            writeln!(out, "{}", pretty)?;
            Ok(())
        }
        Command::Info => {
            write_component(&InfoPanel::new(&config.streams), options, out)?;
            Ok(())
        }
        Command::Stream { channel } => {
            writeln!(out, "{}", channel_stream(config, *channel)?)?;
            Ok(())
        }
        Command::Play { channel } => {
            let url = channel_stream(config, *channel)?;
            writeln!(out, "Playing NTS channel {}: {}", channel, url)?;
            out.flush()?;
            player::launch(&config.player, url).await?;
            Ok(())
        }
        Command::Mixtape(cmd) => mixtape(cmd, config, options, out).await,
    }
}

/// Print `err` the way its disposition asks for and tell `main` what to do next.
pub fn report<W: Write>(err: &CliError, color: bool, out: &mut W) -> Disposition {
    let disposition = err.disposition();
    let written = match disposition {
        Disposition::Recoverable => writeln!(out, "{}", err),
        Disposition::Failed if color => writeln!(out, "{} {}", "Error:".red().bold(), err),
        Disposition::Failed => writeln!(out, "Error: {}", err),
        Disposition::Fatal => Ok(()),
    };
    if let Err(e) = written {
        warn!("could not report error: {}", e);
    }
    disposition
}

fn channel_stream(config: &Config, channel: u8) -> Result<&str, CliError> {
    stream_url(&config.streams, channel).ok_or_else(|| CliError::NotFound {
        what: format!("stream URL for channel {}", channel),
    })
}

async fn now<W: Write>(
    config: &Config,
    art_size: Option<(u16, u16)>,
    options: RenderOptions,
    out: &mut W,
) -> Result<(), CliError> {
    let client = NtsClient::new(&config.api)?;
    let doc = client.fetch_live().await?;
    if doc.channels.is_empty() {
        writeln!(out, "Nothing on air right now.")?;
        return Ok(());
    }

    let column = column_width(options.width, doc.channels.len());
    let mut columns = Vec::with_capacity(doc.channels.len());
    for (i, channel) in doc.channels.iter().enumerate() {
        let panel = ChannelPanel::new(i + 1, channel)?;
        let art = match art_size {
            Some((w, h)) => {
                let (w, h) = fit_art(w, h, column);
                Some(load_art(&client, &channel.current, w, h, options.color).await)
            }
            None => None,
        };
        columns.push(ChannelColumn { art, panel });
    }

    write_component(&NowView::new(columns), options, out)?;
    Ok(())
}

/// Art failures never fail the command; they become an error panel.
async fn load_art(
    client: &NtsClient,
    slot: &BroadcastSlot,
    width: u16,
    height: u16,
    color: bool,
) -> ArtPanel {
    let Some(url) = slot.art_url() else {
        return ArtPanel::error("no artwork for this show");
    };
    let bytes = match client.fetch_bytes(url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("[art] {}", e);
            return ArtPanel::error(e);
        }
    };
    match CoverArt::decode(&bytes, width, height) {
        Ok(art) => ArtPanel::Image { art, color },
        Err(e) => {
            let e = CliError::Image(e.to_string());
            warn!("[art] {}: {}", url, e);
            ArtPanel::error(e)
        }
    }
}

async fn schedule<W: Write>(
    config: &Config,
    options: RenderOptions,
    out: &mut W,
) -> Result<(), CliError> {
    let doc = NtsClient::new(&config.api)?.fetch_live().await?;
    for (i, channel) in doc.channels.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_component(&ScheduleTable::new(i + 1, channel)?, options, out)?;
    }
    Ok(())
}

async fn mixtape<W: Write>(
    cmd: &MixtapeCommand,
    config: &Config,
    options: RenderOptions,
    out: &mut W,
) -> Result<(), CliError> {
    let catalog = NtsClient::new(&config.api)?.fetch_catalog().await?;
    match cmd {
        MixtapeCommand::List => {
            write_component(&MixtapeTable::new("MIXTAPES", &catalog), options, out)?;
        }
        MixtapeCommand::Search { query } => {
            let hits = mixtape::search(&catalog, query);
            info!("[mixtapes] {} match(es) for {:?}", hits.len(), query);
            if hits.is_empty() {
                writeln!(out, "No mixtapes match '{}'.", query)?;
            } else {
                let title = format!("MIXTAPES MATCHING '{}'", query);
                write_component(&MixtapeTable::new(title, hits), options, out)?;
            }
        }
        MixtapeCommand::Info { name } => {
            write_component(&MixtapePanel::new(resolve(&catalog, name)?), options, out)?;
        }
        MixtapeCommand::Play { name } => {
            let found = resolve(&catalog, name)?;
            player::announce(found, options.color, out)?;
            if player::launch(&config.player, &found.stream_url).await? == PlayerExit::Interrupted {
                info!("[mixtapes] stopped {}", found.alias);
            }
        }
        MixtapeCommand::Random => {
            player::random_loop(&catalog, &config.player, options.color, out).await?;
        }
    }
    Ok(())
}

fn resolve<'a>(catalog: &'a [MixtapeEntry], name: &str) -> Result<&'a MixtapeEntry, CliError> {
    mixtape::resolve(catalog, name).ok_or_else(|| CliError::NotFound {
        what: format!("mixtape '{}'", name),
    })
}
