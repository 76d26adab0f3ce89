// Wed Jan 15 2026 - Alex

use super::args::{Args, Command, ExportArgs, OrderArgs};
use crate::config::ExportConfig;
use crate::declarations::DeclarationGraph;
use crate::directives::{ClassDirectives, DirectiveTable};
use crate::export::{ClassExporter, CodeUnit, ExportError};
use crate::output::{ModuleWriter, RunSummary};
use anyhow::Context;
use colored::Colorize;
use std::collections::HashSet;

/// Directive entries sorted so that classes with fewer bases come first
pub fn export_order<'t>(
    graph: &DeclarationGraph,
    table: &'t DirectiveTable,
    config: &ExportConfig,
) -> Result<Vec<&'t ClassDirectives>, ExportError> {
    let mut keyed = Vec::with_capacity(table.classes.len());
    for info in &table.classes {
        let key = ClassExporter::new(graph, info, config).order()?;
        keyed.push((key, info));
    }
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(keyed.into_iter().map(|(_, info)| info).collect())
}

/// Exports every class of the table into one code unit, threading the set
/// of already exported names from class to class.
pub fn export_module(
    graph: &DeclarationGraph,
    table: &DirectiveTable,
    config: &ExportConfig,
) -> Result<(CodeUnit, RunSummary), ExportError> {
    let mut unit = CodeUnit::new();
    let mut summary = RunSummary::new(&config.module_name);
    let mut exported = HashSet::new();

    for info in export_order(graph, table, config)? {
        let report = ClassExporter::new(graph, info, config).export(&mut unit, &exported)?;
        exported.extend(report.exported.iter().cloned());
        summary.add(report);
    }

    Ok((unit, summary))
}

pub struct CommandHandler {
    quiet: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn execute(&mut self, args: Args) -> anyhow::Result<()> {
        self.quiet = args.quiet;
        if args.no_color {
            colored::control::set_override(false);
        }

        self.setup_logging(&args)?;

        match args.command {
            Command::Export(export_args) => self.handle_export(export_args),
            Command::Order(order_args) => self.handle_order(order_args),
        }
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            other => anyhow::bail!("Unknown log level: {}", other),
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()
            .context("Failed to initialize logging")?;

        Ok(())
    }

    fn status(&self, marker: colored::ColoredString, message: &str) {
        if !self.quiet {
            println!("{} {}", marker, message);
        }
    }

    fn load_inputs(
        &self,
        declarations: &std::path::Path,
        directives: &std::path::Path,
    ) -> anyhow::Result<(DeclarationGraph, DirectiveTable)> {
        self.status("[*]".blue(), &format!("Loading declarations: {}", declarations.display()));
        let graph = DeclarationGraph::from_file(declarations)
            .with_context(|| format!("Failed to load declarations from {}", declarations.display()))?;
        let table = DirectiveTable::from_file(directives)
            .with_context(|| format!("Failed to load directives from {}", directives.display()))?;
        self.status(
            "[+]".green(),
            &format!("{} declarations, {} classes to export", graph.len(), table.classes.len()),
        );
        Ok((graph, table))
    }

    fn handle_export(&self, args: ExportArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let mut config = match &args.config {
            Some(path) => ExportConfig::from_file(path).map_err(|e| anyhow::anyhow!(e))?,
            None => ExportConfig::default(),
        };
        if let Some(module) = &args.module {
            config.module_name = module.clone();
        }
        config.validate().map_err(|e| anyhow::anyhow!(e))?;

        let (graph, table) = self.load_inputs(&args.declarations, &args.directives)?;
        let (unit, summary) = export_module(&graph, &table, &config)?;

        for report in &summary.classes {
            self.status("[+]".green(), &format!("Exported {}", report.class));
            for diagnostic in &report.diagnostics {
                self.status("[!]".yellow(), &diagnostic.message);
            }
        }
        for class in &summary.skipped {
            self.status("[-]".dimmed(), &format!("Skipped {}", class));
        }

        ModuleWriter::new(&config)
            .save(&unit, &args.output)
            .with_context(|| format!("Failed to write {}", args.output.display()))?;
        self.status(
            "[+]".green(),
            &format!(
                "Module {} written to {} ({} classes)",
                config.module_name,
                args.output.display(),
                summary.exported_count()
            ),
        );

        if let Some(path) = &args.summary {
            summary
                .save(path)
                .with_context(|| format!("Failed to write summary {}", path.display()))?;
        }

        let diagnostics = summary.diagnostic_count();
        if args.strict && diagnostics > 0 {
            anyhow::bail!("{} members are missing a call policy", diagnostics);
        }
        Ok(())
    }

    fn handle_order(&self, args: OrderArgs) -> anyhow::Result<()> {
        let (graph, table) = self.load_inputs(&args.declarations, &args.directives)?;
        let config = ExportConfig::default();

        for (i, info) in export_order(&graph, &table, &config)?.iter().enumerate() {
            println!("{:>4}. {}", i + 1, info.name.cyan());
        }
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
