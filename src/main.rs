use anyhow::Result;
use clap::{CommandFactory, Parser};

use ebump::config;
use ebump::domain::TagKind;
use ebump::engine::{self, Action, BumpOutcome};
use ebump::pattern::Pattern;
use ebump::project;
use ebump::ui;
use ebump::updater::{self, VersionUpdate};

const EXAMPLES: &str = "\
Basic:

> ebump show           # Show current version
> ebump --help         # Show help message

Bump version parts:

> ebump patch          # 1.0.0 -> 1.0.1
> ebump minor          # 1.0.1 -> 1.1.0
> ebump major          # 1.5.4 -> 2.0.0

Bump part with tag:

> ebump minor beta     # 1.0.0 -> 1.1.0-beta0

Bump tags:

> ebump alpha          # 1.0.0-alpha4 -> 1.0.0-alpha5
> ebump beta           # 1.0.0-alpha5 -> 1.0.0-beta0

Bump current tag number:

> ebump tag            # 1.0.0-beta0 -> 1.0.0-beta1

Make/ensure final release (no pre-release tag):

> ebump final          # 1.0.0-rc2 -> 1.0.0
";

#[derive(clap::Parser)]
#[command(name = "ebump", about = "Easy version bumping tool", after_help = EXAMPLES)]
struct Args {
    #[arg(
        help = "Version part to bump (patch/minor/major/tag), specific pre-release tag (alpha/beta/dev/rc/post/final), or 'show'"
    )]
    action: Option<String>,

    #[arg(help = "Optional pre-release tag when bumping version parts")]
    tag: Option<String>,

    #[arg(long, help = "Perform a dry run without modifying any files")]
    dry: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let Some(action_raw) = args.action else {
        Args::command().print_help()?;
        std::process::exit(1);
    };

    // Run from the project root so relative paths in the config resolve
    let root = project::find_project_root();
    std::env::set_current_dir(&root)?;

    let (config, config_path) = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let pattern = match Pattern::compile(&config.pattern) {
        Ok(pattern) => pattern,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let current = match pattern.parse(&config.current_version) {
        Ok(current) => current,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let action_raw = action_raw.to_lowercase();
    if action_raw == "show" {
        println!("{}", config.current_version);
        return Ok(());
    }

    let action: Action = match action_raw.parse() {
        Ok(action) => action,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let explicit_tag = match parse_tag_arg(args.tag.as_deref()) {
        Ok(tag) => tag,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let next = match engine::bump(&current, action, explicit_tag) {
        Ok(BumpOutcome::Bumped(next)) => next,
        Ok(BumpOutcome::AlreadyFinal) => {
            println!("Already at final version.");
            return Ok(());
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let new_version = pattern.format(&next);
    ui::display_version_change(&config.current_version, &new_version);

    let update = VersionUpdate {
        old: &config.current_version,
        new: &new_version,
    };
    if let Err(e) = updater::apply_update(&config_path, &config, &update, args.dry) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    if args.dry {
        ui::display_status("Dry run: no files were modified.");
    } else {
        ui::display_success(&format!(
            "Bumped version: {} -> {}",
            config.current_version, new_version
        ));
    }

    Ok(())
}

/// Parse the optional positional tag argument; "final" means no tag.
fn parse_tag_arg(tag: Option<&str>) -> ebump::Result<Option<TagKind>> {
    match tag {
        None => Ok(None),
        Some(raw) => {
            let raw = raw.to_lowercase();
            if raw == "final" {
                Ok(None)
            } else {
                Ok(Some(raw.parse()?))
            }
        }
    }
}
