//! CLI for uritools.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uritools_core::config;
use uritools_core::AuthorityStyle;

use commands::{
    run_cache_path, run_classify, run_dirs, run_store, run_subpath, run_temp_path, run_to_path,
    run_to_uri,
};

/// Top-level CLI for uritools.
#[derive(Debug, Parser)]
#[command(name = "uritools")]
#[command(about = "Convert between file URIs and paths, and derive cache subpaths", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// `--style` values for `to-path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// `file://host/p` -> `//host/p`.
    Unc,
    /// `file://host/p` -> `/host/p`.
    PlainPrefix,
}

impl From<StyleArg> for AuthorityStyle {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::Unc => AuthorityStyle::Unc,
            StyleArg::PlainPrefix => AuthorityStyle::PlainPrefix,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the file:// URI for a local path.
    ToUri {
        /// Local path (drive-letter and UNC forms are accepted on any host).
        path: PathBuf,
    },

    /// Print the local path for a file:// URI.
    ToPath {
        /// URI starting with file:// or FILE://.
        uri: String,
        /// How to treat a host in file://host/path (default: config, then platform).
        #[arg(long, value_enum)]
        style: Option<StyleArg>,
    },

    /// Print the filesystem-safe subpath for a URI.
    Subpath {
        /// Any URI.
        uri: String,
        /// Keep at most N trailing characters (0 = no limit; default from config).
        #[arg(long, value_name = "N")]
        max: Option<usize>,
    },

    /// Print whether a URI is a file, http or other URI.
    Classify {
        /// Any URI.
        uri: String,
    },

    /// Print the cache location for a URI.
    CachePath {
        /// Any URI.
        uri: String,
    },

    /// Copy a local file into the cache location for a URI.
    Store {
        /// URI the content belongs to.
        uri: String,
        /// File whose bytes are stored.
        file: PathBuf,
    },

    /// Print a fresh temporary file path (the file is not created).
    TempPath,

    /// Print the data, cache, log and working data directories and the executable path.
    Dirs,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::ToUri { path } => run_to_uri(&path),
            CliCommand::ToPath { uri, style } => {
                let style = style.map(AuthorityStyle::from);
                run_to_path(&cfg, &uri, style)?;
            }
            CliCommand::Subpath { uri, max } => run_subpath(&cfg, &uri, max),
            CliCommand::Classify { uri } => run_classify(&uri),
            CliCommand::CachePath { uri } => run_cache_path(&cfg, &uri)?,
            CliCommand::Store { uri, file } => run_store(&cfg, &uri, &file)?,
            CliCommand::TempPath => run_temp_path()?,
            CliCommand::Dirs => run_dirs()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
