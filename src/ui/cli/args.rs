// Wed Jan 15 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "class-exporter")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Generates Boost.Python bindings for C++ classes", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export the classes named in the directive file into one module
    Export(ExportArgs),
    /// Print the order the classes would be exported in
    Order(OrderArgs),
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Declaration graph (JSON)
    #[arg(short, long)]
    pub declarations: PathBuf,

    /// Per-class directives (JSON)
    #[arg(short = 'D', long)]
    pub directives: PathBuf,

    /// Namespace and formatting options (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, default_value = "module.cpp")]
    pub output: PathBuf,

    /// Overrides the module name from the config
    #[arg(short, long)]
    pub module: Option<String>,

    /// Also write a JSON summary of the run
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Fail when any member is missing a call policy
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct OrderArgs {
    #[arg(short, long)]
    pub declarations: PathBuf,

    #[arg(short = 'D', long)]
    pub directives: PathBuf,
}

impl ExportArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !self.declarations.exists() {
            return Err(format!("Declaration file does not exist: {:?}", self.declarations));
        }
        if !self.directives.exists() {
            return Err(format!("Directive file does not exist: {:?}", self.directives));
        }
        if let Some(config) = &self.config {
            if !config.exists() {
                return Err(format!("Config file does not exist: {:?}", config));
            }
        }
        if matches!(&self.module, Some(name) if name.is_empty()) {
            return Err("Module name must not be empty".to_string());
        }
        Ok(())
    }
}
