use clap::{Parser, Subcommand};
use nx_app::{AppError, AppResult, ViewSession};
use nx_core::{ArrayData, ParamDescriptor, PlotMode};
use nx_io::LoaderRegistry;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "nx-cli")]
#[command(about = "NumEx CLI - inspect and render N-dimensional arrays", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show shape, element kind and value range of an array file
    Inspect {
        /// Array file (.npy, .cfl, .hdr)
        path: PathBuf,
    },
    /// List the parameters a view of the array would offer
    Params {
        /// Array file
        path: PathBuf,
        /// Plot mode (1d, 2d_plot_xy, 2d_map); chosen from the shape if absent
        #[arg(short, long)]
        mode: Option<String>,
    },
    /// Write the default parameter document for an array
    ExportDefaults {
        /// Array file
        path: PathBuf,
        /// Output JSON file
        output: PathBuf,
        /// Plot mode
        #[arg(short, long)]
        mode: Option<String>,
    },
    /// Render an array and print the resulting figure
    Render {
        /// Array file; the synthetic phantom is used if absent
        path: Option<PathBuf>,
        /// Plot mode
        #[arg(short, long)]
        mode: Option<String>,
        /// Parameter document to apply before rendering
        #[arg(short, long)]
        params: Option<PathBuf>,
    },
    /// Convert an array file to CFL (or .npy, by output extension)
    Convert {
        /// Input array file
        input: PathBuf,
        /// Output path (.cfl/.hdr pair or .npy)
        output: PathBuf,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let registry = LoaderRegistry::with_builtin_loaders();

    match cli.command {
        Commands::Inspect { path } => cmd_inspect(&registry, &path),
        Commands::Params { path, mode } => cmd_params(&registry, &path, mode.as_deref()),
        Commands::ExportDefaults { path, output, mode } => {
            cmd_export_defaults(&registry, &path, &output, mode.as_deref())
        }
        Commands::Render { path, mode, params } => {
            cmd_render(&registry, path.as_deref(), mode.as_deref(), params.as_deref())
        }
        Commands::Convert { input, output } => cmd_convert(&registry, &input, &output),
    }
}

fn cmd_inspect(registry: &LoaderRegistry, path: &Path) -> AppResult<()> {
    let array = nx_app::load_array(registry, path)?;
    let summary = array.summary();
    println!("{}", path.display());
    println!("  {summary}");
    println!(
        "  Suggested mode: {}",
        nx_core::select(array.shape(), None).key()
    );
    Ok(())
}

fn cmd_params(registry: &LoaderRegistry, path: &Path, mode: Option<&str>) -> AppResult<()> {
    let array = nx_app::load_array(registry, path)?;
    let mode = nx_core::select(array.shape(), mode);
    let set = nx_core::build(mode, array.shape());

    println!("Mode: {} ({})", mode.key(), mode.title());
    for (name, descriptor) in &set {
        match descriptor {
            ParamDescriptor::Numeric(p) => println!(
                "  {name:<22} {:<20} {} in [{}, {}] step {}",
                p.label, p.default, p.start, p.stop, p.step
            ),
            ParamDescriptor::Enumerated(p) => println!(
                "  {name:<22} {:<20} {} of {} choices",
                p.label,
                p.default,
                p.values.len()
            ),
        }
    }
    Ok(())
}

fn cmd_export_defaults(
    registry: &LoaderRegistry,
    path: &Path,
    output: &Path,
    mode: Option<&str>,
) -> AppResult<()> {
    let array = nx_app::load_array(registry, path)?;
    let mut session = ViewSession::new(array, mode);
    session.export_json(output)?;
    println!(
        "✓ Wrote {} parameters for mode {} to {}",
        session.params().len(),
        session.mode().key(),
        output.display()
    );
    Ok(())
}

fn cmd_render(
    registry: &LoaderRegistry,
    path: Option<&Path>,
    mode: Option<&str>,
    params: Option<&Path>,
) -> AppResult<()> {
    let (array, mode) = match path {
        Some(path) => (nx_app::load_array(registry, path)?, mode),
        None => (
            nx_app::synthetic_array(),
            mode.or(Some(PlotMode::PlotXy.key())),
        ),
    };
    let mut session = ViewSession::new(array, mode);
    if let Some(params) = params {
        let report = session.import_json(params)?;
        if !report.ignored.is_empty() {
            tracing::warn!(ignored = ?report.ignored, "parameters not used by this mode");
        }
    }

    print!("{}", session.figure());
    if let Some(error) = session.figure().error_text() {
        eprintln!("{}", error.title);
    }
    Ok(())
}

fn cmd_convert(registry: &LoaderRegistry, input: &Path, output: &Path) -> AppResult<()> {
    let array = nx_app::load_array(registry, input)?;
    tracing::info!(input = %input.display(), output = %output.display(), "converting");
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("npy") => nx_io::write_npy(output, &array)?,
        Some("cfl") | Some("hdr") | None => nx_io::write_cfl(output, &array)?,
        Some(other) => {
            tracing::error!(extension = other, "no writer for output format");
            return Err(AppError::InvalidInput(format!(
                "cannot write `.{other}` files; use .cfl or .npy"
            )));
        }
    }
    print_converted(&array, output);
    Ok(())
}

fn print_converted(array: &Arc<ArrayData>, output: &Path) {
    println!(
        "✓ Wrote {} {} array {:?} to {}",
        array.len(),
        array.kind(),
        array.shape(),
        output.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_accepts_optional_path_and_params() {
        let cli = Cli::try_parse_from(["nx-cli", "render", "-m", "2d_map", "-p", "p.json"]).unwrap();
        match cli.command {
            Commands::Render { path, mode, params } => {
                assert_eq!(path, None);
                assert_eq!(mode.as_deref(), Some("2d_map"));
                assert_eq!(params, Some(PathBuf::from("p.json")));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn convert_rejects_unknown_output_format() {
        let dir = std::env::temp_dir().join(format!("nx-cli-tests-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("input.npy");
        let array = ArrayData::real_from_vec(&[2, 3], (0..6).map(f64::from).collect()).unwrap();
        nx_io::write_npy(&input, &array).unwrap();

        let registry = LoaderRegistry::with_builtin_loaders();
        let err = cmd_convert(&registry, &input, &dir.join("out.png")).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)), "{err}");

        let output = dir.join("out.cfl");
        cmd_convert(&registry, &input, &output).unwrap();
        let back = registry.load(&output).unwrap();
        assert_eq!(back.shape(), &[2, 3]);
    }
}
