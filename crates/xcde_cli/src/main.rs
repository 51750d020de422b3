use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use log::debug;
use xcde_core::character::character_name;
use xcde_core::core_api::{CoreError, SaveImage, path_with_suffix};
use xcde_core::layout::MODIFIED_SUFFIX;
use xcde_render::{render_arts_listing, render_character_ids, render_json, render_party_listing};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SAVE", required_unless_present = "list_characters")]
    path: Option<PathBuf>,
    /// Print the known character identifiers and exit
    #[arg(long = "list-characters")]
    list_characters: bool,
    /// Log backup creation and writes
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Show party member stats (default)
    Inspect {
        #[arg(long)]
        json: bool,
        /// Include the arts table
        #[arg(long)]
        arts: bool,
    },
    SetExperience {
        #[arg(allow_hyphen_values = true)]
        character_id: i64,
        xp: u32,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    SetLevel {
        #[arg(allow_hyphen_values = true)]
        character_id: i64,
        level: u32,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    SetAp {
        #[arg(allow_hyphen_values = true)]
        character_id: i64,
        ap: u32,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Set the level of main characters 1-15, skipping any that fail
    SetAllLevels {
        level: u32,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    SetAllArtLevels {
        #[arg(allow_hyphen_values = true)]
        level: i64,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Set the max unlock tier (0-3) of every art
    SetAllArtTiers {
        #[arg(allow_hyphen_values = true)]
        tier: i64,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    SetArtLevel {
        index: usize,
        #[arg(allow_hyphen_values = true)]
        level: i64,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    SetArtTier {
        index: usize,
        #[arg(allow_hyphen_values = true)]
        tier: i64,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

impl Command {
    fn output(&self) -> Option<&Path> {
        match self {
            Self::Inspect { .. } => None,
            Self::SetExperience { output, .. }
            | Self::SetLevel { output, .. }
            | Self::SetAp { output, .. }
            | Self::SetAllLevels { output, .. }
            | Self::SetAllArtLevels { output, .. }
            | Self::SetAllArtTiers { output, .. }
            | Self::SetArtLevel { output, .. }
            | Self::SetArtTier { output, .. } => output.as_deref(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_characters {
        print!("{}", render_character_ids());
        return;
    }

    let path = cli.path.as_ref().expect("required unless --list-characters");
    if !path.exists() {
        eprintln!("Error: Save file '{}' not found.", path.display());
        process::exit(1);
    }

    let mut image = SaveImage::open(path).unwrap_or_else(|e| {
        eprintln!("Error opening save file: {}", path.display());
        eprintln!("  {e}");
        process::exit(1);
    });

    let command = cli.command.unwrap_or(Command::Inspect {
        json: false,
        arts: false,
    });

    if let Command::Inspect { json, arts } = command {
        inspect(&image, json, arts).unwrap_or_else(|e| {
            eprintln!("Error reading save file: {e}");
            process::exit(1);
        });
        return;
    }

    let messages = apply_edit(&mut image, &command).unwrap_or_else(|e| {
        eprintln!("Error modifying save: {e}");
        process::exit(1);
    });

    let out_path = command
        .output()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| path_with_suffix(path, MODIFIED_SUFFIX));
    let written = image.write(Some(&out_path)).unwrap_or_else(|e| {
        eprintln!("Error writing {}: {e}", out_path.display());
        process::exit(1);
    });

    for message in messages {
        println!("{message}");
    }
    println!("Modified save written to: {}", written.display());
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn inspect(image: &SaveImage, json: bool, arts: bool) -> Result<(), CoreError> {
    if json {
        let value = render_json(image, arts)?;
        let rendered = serde_json::to_string_pretty(&value)
            .map_err(|e| CoreError::io(format!("failed to render JSON output: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    print!("{}", render_party_listing(image));
    if arts {
        print!("{}", render_arts_listing(image)?);
    }
    Ok(())
}

/// Applies one edit to the in-memory image and returns the lines to print
/// once the result has been written.
fn apply_edit(image: &mut SaveImage, command: &Command) -> Result<Vec<String>, CoreError> {
    debug!("applying {command:?}");
    let messages = match *command {
        Command::Inspect { .. } => Vec::new(),
        Command::SetExperience {
            character_id, xp, ..
        } => {
            let name = character_name(character_id);
            let old_xp = image.experience(character_id)?;
            let level = image.level(character_id)?;
            image.set_experience(character_id, xp)?;
            vec![
                format!("Modified {name}'s XP from {old_xp} to {xp}"),
                format!("Current level: {level}"),
                "Note: You may need to adjust the level separately if you want it to match the new XP value.".to_string(),
            ]
        }
        Command::SetLevel {
            character_id,
            level,
            ..
        } => {
            let name = character_name(character_id);
            let old_level = image.level(character_id)?;
            image.set_level(character_id, level)?;
            vec![format!("Modified {name}'s level from {old_level} to {level}")]
        }
        Command::SetAp {
            character_id, ap, ..
        } => {
            let name = character_name(character_id);
            let old_ap = image.ap(character_id)?;
            image.set_ap(character_id, ap)?;
            vec![format!("Modified {name}'s AP from {old_ap} to {ap}")]
        }
        Command::SetAllLevels { level, .. } => {
            let report = image.set_all_levels(level);
            let mut out = vec![format!("Set all characters to level {level}")];
            if !report.is_complete() {
                let skipped: Vec<String> =
                    report.failures.iter().map(|f| f.id.to_string()).collect();
                out.push(format!("Skipped characters: {}", skipped.join(", ")));
            }
            out
        }
        Command::SetAllArtLevels { level, .. } => {
            image.set_all_art_levels(level)?;
            vec![format!("Set all arts to level {level}")]
        }
        Command::SetAllArtTiers { tier, .. } => {
            image.set_all_art_tiers(tier)?;
            vec![format!("Set all arts to max unlock level {tier}")]
        }
        Command::SetArtLevel { index, level, .. } => {
            let old_level = image.art_level(index)?;
            image.set_art_level(index, level)?;
            vec![format!("Modified art {index} level from {old_level} to {level}")]
        }
        Command::SetArtTier { index, tier, .. } => {
            let old_tier = image.art_tier_raw(index)?;
            image.set_art_tier(index, tier)?;
            vec![format!(
                "Modified art {index} max unlock level from {old_tier} to {tier}"
            )]
        }
    };
    Ok(messages)
}
