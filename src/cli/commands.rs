use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::arena::TreeArena;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::file_node::FileNode;
use crate::render::TreeStyle;

/// Command line overrides for the `dir` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirOverrides {
    pub max_depth: Option<usize>,
    pub max_entry: Option<usize>,
    pub ascii: bool,
    pub no_color: bool,
}

impl DirOverrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(depth) = self.max_depth {
            settings.max_depth = Some(depth);
        }
        if let Some(entry) = self.max_entry {
            settings.max_entry = entry;
        }
        if self.ascii {
            settings.style = TreeStyle::Ascii;
        }
        if self.no_color {
            settings.color = "none".into();
        }
    }
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Dir {
            dir,
            max_depth,
            max_entry,
            ascii,
            no_color,
        }) => {
            let overrides = DirOverrides {
                max_depth: *max_depth,
                max_entry: *max_entry,
                ascii: *ascii,
                no_color: *no_color,
            };
            cmd_dir(dir.as_deref(), overrides)
        }
        Some(Commands::Config { command }) => cmd_config(command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument]
fn cmd_dir(dir: Option<&Path>, overrides: DirOverrides) -> CliResult<()> {
    let dir = resolve_dir(dir)?;
    let mut settings = Settings::load(Some(&dir))?;
    overrides.apply(&mut settings);
    debug!("settings: {:?}", settings);
    output::raw(&render_dir(&dir, &settings)?);
    Ok(())
}

#[instrument]
fn cmd_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show { dir } => {
            let dir = dir.as_deref().map(|d| resolve_dir(Some(d))).transpose()?;
            let settings = Settings::load(dir.as_deref())?;
            output::raw(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::raw(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => {
                output::info(&path.display());
                if !path.exists() {
                    output::warning("global config file does not exist");
                }
                output::info(&local_config_path(Path::new("<dir>")).display());
            }
            None => output::warning("no home directory, global config disabled"),
        },
    }
    Ok(())
}

/// Fills a [`FileNode`] tree for `dir` within the settings' limits and
/// renders it.
#[instrument(level = "debug")]
pub fn render_dir(dir: &Path, settings: &Settings) -> CliResult<String> {
    let mut arena = TreeArena::new();
    let root = arena.new_node(FileNode::new(dir));
    arena.fill_tree(root, settings.fill_limits())?;
    debug!("read {} entries below {}", arena.len() - 1, dir.display());
    Ok(arena.tree(root, &settings.render_options()?)?)
}

/// Expands `~`/`$VAR`, defaults to the current directory and requires a
/// directory.
fn resolve_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    let dir = match dir {
        Some(d) => {
            let raw = d.to_string_lossy();
            let expanded = shellexpand::full(&raw)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            PathBuf::from(expanded)
        }
        None => std::env::current_dir()?,
    };
    if !dir.is_dir() {
        return Err(CliError::InvalidArgs(format!(
            "not a directory: {}",
            dir.display()
        )));
    }
    Ok(dir.canonicalize()?)
}
