// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! glint-sim
//!
//! Headless driver for the live color-table previewer: prints the hue cycle,
//! replays scripted hover sessions against an in-memory scene, and manages the
//! saved preview settings.
#![allow(clippy::print_stdout)]

mod demo;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use glint_app_core::{ConfigService, PreviewSettings, PREVIEW_SETTINGS_KEY};
use glint_config_fs::FsConfigStore;
use glint_port::RowKey;
use glint_preview::HueCycle;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::demo::Scenario;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Ignore saved settings and use the built-in defaults
    #[clap(long, global = true)]
    no_config: bool,

    /// Read and write settings under this directory instead of the user config dir
    #[clap(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Log at debug level (overridden by RUST_LOG)
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print highlight colors for a run of frames
    Hue {
        /// Hues per cycle (defaults to the saved setting)
        #[clap(long)]
        steps: Option<u32>,
        /// Frames each hue is held (defaults to the saved setting)
        #[clap(long)]
        frame_length: Option<u32>,
        /// First frame to print
        #[clap(long, default_value_t = 0)]
        start: u64,
        /// Number of frames to print
        #[clap(long, default_value_t = 16)]
        count: u64,
    },
    /// Replay a scripted hover session and check the table comes back intact
    Demo {
        /// Which script to run
        #[clap(long, value_enum, default_value_t = Scenario::A)]
        scenario: Scenario,
        /// Frames each row stays hovered
        #[clap(long, default_value_t = 3)]
        frames: u32,
    },
    /// Show the effective preview settings
    Config {
        /// Write the effective settings back to the store
        #[clap(long)]
        save: bool,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_store(args: &Args) -> Result<Option<ConfigService<FsConfigStore>>> {
    if args.no_config {
        return Ok(None);
    }
    let store = match &args.config_dir {
        Some(dir) => FsConfigStore::with_base(dir)
            .with_context(|| format!("opening config dir {}", dir.display()))?,
        None => match FsConfigStore::new() {
            Ok(store) => store,
            Err(err) => {
                warn!(%err, "no usable config dir, using defaults");
                return Ok(None);
            }
        },
    };
    debug!(base = %store.base().display(), "config store ready");
    Ok(Some(ConfigService::new(store)))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let service = open_store(&args)?;
    let settings = service
        .as_ref()
        .map_or_else(PreviewSettings::default, |s| {
            s.load_or_default::<PreviewSettings>(PREVIEW_SETTINGS_KEY)
        })
        .sanitized();

    match args.cmd {
        Command::Hue {
            steps,
            frame_length,
            start,
            count,
        } => {
            let cycle = HueCycle::new(
                steps.unwrap_or(settings.hue_steps),
                frame_length.unwrap_or(settings.frame_length),
            );
            print_hue(&cycle, start, count);
        }
        Command::Demo { scenario, frames } => {
            let report = demo::run(scenario, frames.max(1), &settings);
            print_demo(&report);
            if report.object_removed {
                info!("character removed mid-highlight; table left as last drawn");
                println!("lossy exit: character removed before restore, original table not written back");
            } else if report.restored {
                println!("restored: table is bit-identical to the original");
            } else {
                bail!("scenario {scenario:?} left the table modified");
            }
        }
        Command::Config { save } => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            if save {
                let Some(service) = service else {
                    bail!("--save needs a config store; drop --no-config");
                };
                service
                    .save(PREVIEW_SETTINGS_KEY, &settings)
                    .context("saving preview settings")?;
                info!(base = %service.store().base().display(), "settings saved");
            }
        }
    }
    Ok(())
}

fn print_hue(cycle: &HueCycle, start: u64, count: u64) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["frame", "hue", "r", "g", "b"]);
    for frame in start..start.saturating_add(count) {
        let [r, g, b] = cycle.color_at(frame);
        table.add_row(vec![
            frame.to_string(),
            format!("{:.4}", cycle.hue_at(frame)),
            format!("{r:.4}"),
            format!("{g:.4}"),
            format!("{b:.4}"),
        ]);
    }
    println!("{table}");
}

fn show_key(key: Option<RowKey>) -> String {
    key.map_or_else(|| "-".to_owned(), |k| k.to_string())
}

fn print_demo(report: &demo::DemoReport) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["frame", "hovered", "active", "dirty rows"]);
    for record in &report.frames {
        let dirty = if record.dirty_rows.is_empty() {
            "-".to_owned()
        } else {
            record
                .dirty_rows
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(",")
        };
        table.add_row(vec![
            record.frame.to_string(),
            show_key(record.hovered),
            show_key(record.active),
            dirty,
        ]);
    }
    println!("{table}");
}
