//! Command-line walkthrough of the showcase lifecycle
//!
//! Each positional argument is loaded in turn: local paths are uploaded,
//! `gallery:<name>` picks a catalog item, `sample` loads the sample model and
//! anything else is treated as an address. A console viewer host prints what
//! the external viewer would be configured with and replays a successful
//! load for every bound model.
//!
//! ```text
//! RUST_LOG=debug cargo run -p arshowcase-demos --bin showcase -- \
//!     gallery:Fox https://example.com/model.glb ./chair.glb
//! ```

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use arshowcase_core::ShowcaseConfig;
use arshowcase_io::{Catalog, SourceInput};
use arshowcase_visualization::{
    ClientSignals, Showcase, SubscriptionId, ViewerConfig, ViewerHost, ViewerNotification,
};

/// Load models into a showcase and print the resulting viewer state
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(version)]
struct Args {
    /// Models to load: file paths, addresses, `gallery:<name>` or `sample`
    sources: Vec<String>,

    /// JSON configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// JSON catalog replacing the built-in gallery
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// User agent fed to the capability probe
    #[arg(long, default_value = "")]
    user_agent: String,

    /// Environment preset name
    #[arg(long, short = 'e')]
    environment: Option<String>,

    /// Uniform model scale (clamped to 0.1..=5.0)
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Rotation around the vertical axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    rotate: f32,

    /// Print the gallery and exit
    #[arg(long)]
    list_gallery: bool,

    /// Finish by returning to the source picker
    #[arg(long)]
    deselect: bool,
}

/// Viewer host that prints configurations instead of rendering
#[derive(Default)]
struct ConsoleViewer {
    next: Cell<u64>,
}

impl ViewerHost for ConsoleViewer {
    fn configure(&self, config: &ViewerConfig) {
        match &config.src {
            Some(src) => println!("   viewer <- {}", src),
            None => println!("   viewer <- (no model)"),
        }
        for (name, value) in config.attributes() {
            log::debug!("   {}=\"{}\"", name, value);
        }
    }

    fn subscribe(&self) -> SubscriptionId {
        self.next.set(self.next.get() + 1);
        SubscriptionId(self.next.get())
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        log::debug!("unsubscribed {:?}", subscription);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ShowcaseConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ShowcaseConfig::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };

    if args.list_gallery {
        print_gallery(&catalog);
        return Ok(());
    }

    let host = Rc::new(ConsoleViewer::default());
    let mut showcase = Showcase::new(config, catalog, host)?;
    showcase.set_client_signals(ClientSignals::from_user_agent(&args.user_agent));
    if let Some(environment) = &args.environment {
        showcase.set_environment(environment)?;
    }

    println!("=== arshowcase ===\n");
    for source in &args.sources {
        println!("-> {}", source);
        let loaded = match source.strip_prefix("gallery:") {
            Some(name) => {
                let item = showcase
                    .catalog()
                    .find(name)
                    .cloned()
                    .ok_or_else(|| anyhow!("no gallery item named '{}'", name))?;
                Ok(showcase.load_catalog_item(&item))
            }
            None if source == "sample" => Ok(showcase.load_sample()),
            None => showcase.load(input_for(source)?),
        };

        match loaded {
            Ok(id) => {
                if let Some(ticket) = showcase.current_ticket() {
                    for fraction in [0.25, 0.5, 0.75, 1.0] {
                        showcase.handle(ticket, ViewerNotification::Progress(fraction));
                    }
                    showcase.handle(ticket, ViewerNotification::Loaded { has_animations: false });
                }
                println!("   added {} ({})", id, showcase.mode());
            }
            Err(err) => println!("   rejected: {}", err),
        }
    }

    showcase.set_scale(args.scale);
    showcase.set_rotation_y(args.rotate);

    if args.deselect {
        showcase.load_different_model();
    }

    println!("\nMode: {}", showcase.mode());
    println!("Models:");
    for entry in showcase.library().list() {
        let marker = if showcase.library().active_id() == Some(entry.id) { "*" } else { " " };
        println!(
            " {} {} {} [{}] {}",
            marker,
            entry.id,
            entry.name,
            entry.source,
            entry.created_at.format("%H:%M:%S")
        );
    }
    if let Some(report) = showcase.capabilities() {
        println!("Device: {:?}, browser: {:?}, AR: {:?}", report.device, report.browser, report.ar);
    }
    println!("Diagnostics:");
    for diagnostic in showcase.diagnostics().entries() {
        println!("  [{:?}] {}", diagnostic.severity, diagnostic.message);
    }

    Ok(())
}

/// Upload existing local files, treat everything else as an address
fn input_for(source: &str) -> Result<SourceInput> {
    let path = Path::new(source);
    if path.is_file() {
        let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(source)
            .to_string();
        return Ok(SourceInput::File { name, bytes });
    }
    Ok(SourceInput::Address(source.to_string()))
}

fn print_gallery(catalog: &Catalog) {
    for category in catalog.categories() {
        println!("{}", category.name);
        for item in &category.items {
            let source = item.attribution().map(|a| a.label).unwrap_or("custom");
            println!("  {} [{}]", item.display_name, source);
            println!("    model: {}", item.model_address);
            println!("    thumb: {}", item.resolved_thumbnail());
        }
    }
}
