use anyhow::Result;
use clap::{ArgGroup, Parser, ValueEnum};

mod config;
mod error;
mod manifest;
mod propagate;
mod ui;
mod version;

use manifest::Manifest;
use version::{BumpRequest, Version};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BumpPart {
    Major,
    Minor,
    Patch,
    Label,
}

#[derive(clap::Parser)]
#[command(
    name = "release-bump",
    about = "Set or bump the package version and propagate it across the project",
    group(ArgGroup::new("mode").required(true).args(["set_version", "bump_version"]))
)]
struct Args {
    #[arg(
        short = 'v',
        long,
        value_name = "VERSION",
        help = "Explicitly set the new version (e.g. 2.3.4-beta3)"
    )]
    set_version: Option<String>,

    #[arg(
        short = 'b',
        long,
        value_name = "PART",
        help = "Bump one part of the current version"
    )]
    bump_version: Option<BumpPart>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Skip the release notes prompt")]
    force: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    // Load the manifest and read the current version
    let mut manifest = match Manifest::load(&config.files.manifest) {
        Ok(manifest) => manifest,
        Err(e) => {
            ui::display_error(&format!(
                "Failed to load manifest '{}': {}",
                config.files.manifest, e
            ));
            std::process::exit(1);
        }
    };

    let current_version = match manifest.current_version() {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&format!("Failed to read current version: {}", e));
            std::process::exit(1);
        }
    };

    // Build the bump request from the CLI arguments
    let request = match (args.set_version.as_deref(), args.bump_version) {
        (Some(explicit), _) => match Version::parse(explicit) {
            Ok(version) => BumpRequest::Set(version),
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        },
        (None, Some(BumpPart::Major)) => BumpRequest::Major,
        (None, Some(BumpPart::Minor)) => BumpRequest::Minor,
        (None, Some(BumpPart::Patch)) => BumpRequest::Patch,
        (None, Some(BumpPart::Label)) => BumpRequest::Label,
        (None, None) => {
            // Unreachable in practice: the clap group requires one mode
            ui::display_error("Either --set-version or --bump-version is required");
            std::process::exit(1);
        }
    };

    // Compute the new version
    let new_version = match current_version.bump(&request) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_version_change(&current_version.to_string(), &new_version.to_string());

    if !args.force
        && !args.dry_run
        && !ui::confirm_action(&format!("Apply version {}?", new_version))?
    {
        println!("Operation cancelled by user.");
        return Ok(());
    }

    if args.dry_run {
        ui::display_status("Dry run:");
        ui::display_success(&format!(
            "  Step 1: would set manifest '{}' to version {}",
            config.files.manifest, new_version
        ));
        ui::display_success(&format!(
            "  Step 2: would rewrite every '{}' under '{}'",
            config.files.marker_filename, config.files.project_root
        ));
        ui::display_success("  Step 3: would prompt for release notes");
        return Ok(());
    }

    // Write the new version into the manifest
    ui::display_status(&format!(
        "Updating manifest '{}' to version {}",
        config.files.manifest, new_version
    ));
    if let Err(e) = manifest.set_version(&new_version).and_then(|_| manifest.save()) {
        ui::display_error(&format!("Failed to update manifest: {}", e));
        std::process::exit(1);
    }

    // Propagate the new version into every marker file under the project root
    let root = std::path::Path::new(&config.files.project_root);
    let updated = match propagate::propagate(root, &config.files.marker_filename, &new_version) {
        Ok(updated) => updated,
        Err(e) => {
            ui::display_error(&format!("Failed to propagate version: {}", e));
            std::process::exit(1);
        }
    };
    ui::display_updated_files(&updated);

    // Optional release notes, prepended to the manifest's notes field
    if !args.force && !config.behavior.skip_release_notes {
        let note = ui::prompt_release_notes()?;
        if !note.is_empty() {
            if let Err(e) = manifest
                .prepend_release_note(&new_version, &note)
                .and_then(|_| manifest.save())
            {
                ui::display_error(&format!("Failed to update release notes: {}", e));
                std::process::exit(1);
            }
            ui::display_success("Release notes updated");
        }
    }

    println!(
        "\n{} Version updated: {} -> {}\n",
        console::style("✓").green(),
        current_version,
        new_version
    );

    Ok(())
}
