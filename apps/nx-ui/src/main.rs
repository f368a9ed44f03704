#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod figure_view;
mod params_panel;

use app::NumexApp;
use clap::Parser;
use nx_app::ViewSession;
use nx_io::LoaderRegistry;
use std::path::PathBuf;
use tracing::Level;

/// Interactive explorer for N-dimensional arrays.
#[derive(Parser, Debug)]
#[command(name = "numex", version)]
struct Args {
    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Array file to open (.npy, .cfl/.hdr). Synthetic data when omitted.
    #[arg(short, long = "in-filepath")]
    in_filepath: Option<PathBuf>,

    /// Plot mode: 1d, 2d_plot_xy or 2d_map.
    #[arg(short, long)]
    mode: Option<String>,
}

impl Args {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .init();

    let registry = LoaderRegistry::with_builtin_loaders();
    let mut warning = None;
    let (session, source) = match &args.in_filepath {
        Some(path) => match nx_app::load_array(&registry, path) {
            Ok(array) => (
                ViewSession::new(array, args.mode.as_deref()),
                Some(path.clone()),
            ),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "could not load array");
                warning = Some(format!("Could not import data from file!\n\n{e}"));
                (synthetic_session(args.mode.as_deref()), None)
            }
        },
        None => (synthetic_session(args.mode.as_deref()), None),
    };

    let title = match &source {
        Some(path) => format!("NumEx - {}", path.display()),
        None => "NumEx - synthetic data".to_string(),
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 600.0])
            .with_min_inner_size([320.0, 200.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        "NumEx",
        options,
        Box::new(|cc| Ok(Box::new(NumexApp::new(cc, registry, session, source, warning)))),
    )
}

/// Synthetic phantom, shown as x/y pairs unless a mode was requested.
fn synthetic_session(mode: Option<&str>) -> ViewSession {
    ViewSession::new(nx_app::synthetic_array(), Some(mode.unwrap_or("2d_plot_xy")))
}
