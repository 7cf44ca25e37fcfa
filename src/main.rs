use clap::{Parser, Subcommand};
use splash_gallery::{config, render, report, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "splash-gallery")]
#[command(about = "Static HTML gallery generator for fbsplash theme repositories")]
#[command(long_about = "\
Static HTML gallery generator for fbsplash theme repositories

Your filesystem is the data source. Each subdirectory of the unpacked-themes
root is one theme package, described by its metadata.xml.

Repository structure:

  unpacked/                      # Theme packages (--root / gallery.toml)
  ├── emergence/
  │   └── metadata.xml           # Name, version, author, description, license
  └── livecd-2006.1/
      └── metadata.xml
  themes/                        # Published assets the gallery links to
  ├── shots/1024x768-emergence.png
  ├── shots/thumbs/300x225-emergence.jpg
  └── repo/emergence.tar.bz2

Themes with a missing or malformed metadata.xml are dropped from the gallery
without comment; run 'splash-gallery check' to see them. A descriptor that
parses but lacks a required field aborts the run.

Run 'splash-gallery gen-config' to generate a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Directory of unpacked theme packages (overrides gallery.toml)
    #[arg(long, global = true)]
    root: Option<String>,

    /// Directory containing gallery.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the gallery HTML table to stdout
    Render {
        /// Write the HTML to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Scan the theme repository and print the manifest as JSON
    Scan,
    /// Validate the repository, reporting valid and skipped themes
    Check,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render { ref output } => {
            let cfg = effective_config(&cli)?;
            let manifest = scan::scan(&cfg)?;
            match output {
                Some(path) => {
                    let mut file = std::fs::File::create(path)?;
                    render::write_gallery(&manifest, &mut file)?;
                    println!(
                        "Rendered {} themes to {}",
                        manifest.themes.len(),
                        path.display()
                    );
                }
                None => {
                    let stdout = std::io::stdout();
                    render::write_gallery(&manifest, &mut stdout.lock())?;
                }
            }
        }
        Command::Scan => {
            let cfg = effective_config(&cli)?;
            let manifest = scan::scan(&cfg)?;
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
        Command::Check => {
            let cfg = effective_config(&cli)?;
            let manifest = scan::scan(&cfg)?;
            report::print_check_output(&manifest);
            if !manifest.skipped.is_empty() {
                std::process::exit(1);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load gallery.toml from the config directory, then apply CLI overrides.
fn effective_config(cli: &Cli) -> Result<config::GalleryConfig, config::ConfigError> {
    let mut cfg = config::load_config(&cli.config)?;
    if let Some(root) = &cli.root {
        cfg.root = root.clone();
    }
    Ok(cfg)
}
