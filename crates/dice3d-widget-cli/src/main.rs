//! Dice3D Widget CLI
//!
//! Render static preview pages for a die and simulate rolls on a headless die.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;

use dice3d_widget::widget::{
    DiceType, DieAttributes, DieConfig, DieController, DieError, HeadlessSurface,
};

/// Dice3D Widget - animated polyhedral dice for web pages
#[derive(Parser)]
#[command(name = "die3d")]
#[command(
    author,
    version,
    about = "Dice3D Widget - render and roll animated polyhedral dice"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Preset file to start from (.ron or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Standard die (d4, d6, d8, d10, d12, d20). Sets the range to 1..=faces.
    #[arg(short, long, global = true, value_parser = parse_dice_type)]
    die: Option<DiceType>,

    /// Widget attribute override, e.g. `-a maxrollvalue=6 -a bgcolor=teal`. Can specify multiple.
    #[arg(short, long = "attr", global = true, value_parser = parse_attribute)]
    attributes: Vec<(String, String)>,

    /// Log every roll and state change
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a static HTML preview of the die
    Render {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Face to show instead of the initial value
        #[arg(short, long)]
        face: Option<u32>,
    },

    /// Click a headless die and print each selection
    Roll {
        /// Number of clicks
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// Seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print the resolved configuration
    Config {
        #[arg(short, long, value_enum, default_value = "ron")]
        format: ConfigFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ConfigFormat {
    Json,
    Ron,
}

fn parse_dice_type(s: &str) -> Result<DiceType, String> {
    DiceType::parse(s).ok_or_else(|| {
        format!(
            "Unknown die type: {}. Valid: d4, d6, d8, d10, d12, d20",
            s
        )
    })
}

fn parse_attribute(s: &str) -> Result<(String, String), String> {
    let Some((name, value)) = s.split_once('=') else {
        return Err(format!(
            "Invalid attribute: {}. Use format like 'maxrollvalue=6'",
            s
        ));
    };
    let name = name.trim().to_lowercase();
    if !DieAttributes::NAMES.contains(&name.as_str()) {
        return Err(format!(
            "Unknown attribute: {}. Valid: {}",
            name,
            DieAttributes::NAMES.join(", ")
        ));
    }
    Ok((name, value.to_string()))
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let result = match &cli.command {
        Commands::Render { output, face } => render(&config, output.as_ref(), *face),
        Commands::Roll { count, seed } => roll(&config, *count, *seed),
        Commands::Config { format } => print_config(&config, *format),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Preset (or defaults), then `--die`, then `--attr` overrides, all parsed
/// through the same attribute boundary the browser uses.
fn resolve_config(cli: &Cli) -> Result<DieConfig, DieError> {
    let base = match &cli.config {
        Some(path) => DieConfig::load(path)?,
        None => DieConfig::default(),
    };

    let mut attributes = DieAttributes::from_config(&base);
    if let Some(dice) = cli.die {
        attributes.set("minrollvalue", "1");
        attributes.set("maxrollvalue", dice.max_value().to_string());
    }
    // A bgcolor override should repaint both faces, not lose to the preset's own
    if cli.attributes.iter().any(|(name, _)| name == "bgcolor") {
        attributes.bgcoloreven = None;
        attributes.bgcolorodd = None;
    }
    for (name, value) in &cli.attributes {
        attributes.set(name, value.as_str());
    }
    attributes.parse()
}

// ============================================================================
// Render
// ============================================================================

fn render(config: &DieConfig, output: Option<&PathBuf>, face: Option<u32>) -> Result<(), DieError> {
    let mut die = DieController::new(config.clone(), HeadlessSurface::new())?;
    die.connect();
    if face.is_some() {
        die.roll(face);
    }

    let page = preview_page(die.surface(), &die.shape().to_string());
    match output {
        Some(path) => {
            std::fs::write(path, page)?;
            println!(
                "{} {} preview written to {}",
                "Rendered".green().bold(),
                die.shape(),
                path.display()
            );
        }
        None => print!("{page}"),
    }
    Ok(())
}

/// Standalone page showing the surface's current face. The die subtree goes
/// into a declarative shadow root so it renders without any script.
fn preview_page(surface: &HeadlessSurface, title: &str) -> String {
    let host_style = surface
        .style
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut fragment = surface.fragment.clone();
    if let Some(face) = surface.face {
        fragment = fragment.replacen(
            "<div id=\"die\">",
            &format!("<div id=\"die\" data-face=\"{face}\">"),
            1,
        );
    }

    format!(
        "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<title>{title}</title>
<style>
body {{ display: flex; align-items: center; justify-content: center; min-height: 100vh; margin: 0; background: #1e1e1e; }}
.die-3d {{ width: 120px; height: 120px; }}
</style>
</head>
<body>
<div class=\"die-3d\" title=\"{face_title}\" style=\"{host_style}\">
<template shadowrootmode=\"open\">
{fragment}</template>
</div>
</body>
</html>
",
        face_title = surface.title.as_deref().unwrap_or_default(),
    )
}

// ============================================================================
// Roll
// ============================================================================

fn roll(config: &DieConfig, count: u32, seed: Option<u64>) -> Result<(), DieError> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut die = DieController::with_rng(config.clone(), HeadlessSurface::new(), rng)?;
    die.connect();

    println!("\n{}", "═══════════════════════════════════════".cyan());
    println!(
        "{} {} ({}..={})",
        "Die:".bold().white(),
        die.shape().to_string().bright_yellow().bold(),
        config.min_roll,
        config.max_roll
    );
    println!(
        "{} {}",
        "Allowed rolls:".bold().white(),
        die.rolls_remaining()
    );
    println!("{}", "═══════════════════════════════════════".cyan());

    let animation = Duration::from_millis(config.roll_time_millis());
    for n in 1..=count {
        match die.click() {
            Some(value) => {
                let value_str = if value == config.max_roll {
                    value.to_string().bright_green().bold()
                } else if value == config.min_roll {
                    value.to_string().bright_red().bold()
                } else {
                    value.to_string().bright_white().bold()
                };
                let offset = die
                    .surface()
                    .style_property("--total-rolls")
                    .unwrap_or_default()
                    .to_string();
                println!(
                    "{} {}  {} {}  {} {}",
                    format!("Roll #{n}:").bold().white(),
                    value_str,
                    "remaining".dimmed(),
                    die.rolls_remaining(),
                    "spin".dimmed(),
                    offset
                );
            }
            None => {
                println!(
                    "{} {}",
                    format!("Roll #{n}:").bold().white(),
                    "no roll, die is exhausted".yellow()
                );
            }
        }

        for token in die.surface_mut().advance(animation) {
            die.on_disable_timer(token);
        }
    }

    let selections: Vec<String> = die
        .surface_mut()
        .take_events()
        .iter()
        .map(|event| event.value().to_string())
        .collect();

    println!("{}", "═══════════════════════════════════════".cyan());
    println!(
        "{} {}",
        "Selections:".bold().white(),
        if selections.is_empty() {
            "none".dimmed().to_string()
        } else {
            selections.join(", ")
        }
    );
    if die.is_exhausted() {
        println!("{}", "Die exhausted: further clicks are ignored.".yellow().bold());
    }
    println!("{}", "═══════════════════════════════════════".cyan());
    Ok(())
}

// ============================================================================
// Config
// ============================================================================

fn print_config(config: &DieConfig, format: ConfigFormat) -> Result<(), DieError> {
    let text = match format {
        ConfigFormat::Json => config.to_json_string()?,
        ConfigFormat::Ron => config.to_ron_string()?,
    };
    println!("{text}");
    Ok(())
}
