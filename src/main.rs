//! Grox CLI - load and inspect vocabulary documents

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use grox::config::{self, GroxConfig};
use grox::document::VocabularyDocument;
use grox::signifier::Role;
use grox::ui::{self, table, AxiomRow, Icons, SignifierRow};
use grox::{Categorization, Grammar};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "grox")]
#[command(version)]
#[command(about = "In-memory semantic triple store over QName-identified signifiers")]
#[command(long_about = r#"
Grox keeps (nomen, copula, attributum) axioms in memory and lets you:
  • Inspect the seeded core vocabulary
  • Load TOML vocabulary documents
  • Show a signifier with every axiom it takes part in
  • Find axioms by literal value

Example usage:
  grox vocab --categorization
  grox load family.toml --strict
  grox show family.toml :Eric
  grox literal family.toml 1970-07-24
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to grox.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default grox.toml
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// List the seeded namespaces and vocabulary
    Vocab {
        /// Include the categorization terms
        #[arg(long)]
        categorization: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Apply a vocabulary document and print statistics
    Load {
        /// Vocabulary document (TOML)
        file: PathBuf,

        /// Abort on the first failing record
        #[arg(long)]
        strict: bool,
    },

    /// Show a signifier and its axioms
    Show {
        /// Vocabulary document (TOML)
        file: PathBuf,

        /// QName or prefLabel
        signifier: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Find axioms whose attributum is a literal value
    Literal {
        /// Vocabulary document (TOML)
        file: PathBuf,

        /// Literal value to match exactly
        value: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(cli) {
        ui::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load_config(cli.config.as_deref())?.unwrap_or_default();

    match cli.command {
        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(config::default_config_path);
            config::write_config(&path, &config, force)?;
            ui::success(&format!("Wrote {}", path.display()));
        }

        Commands::Vocab { categorization, format } => {
            let grammar = build_grammar(&config, categorization || config.categorization)?;
            let registry = grammar.signature();

            match format {
                Format::Json => {
                    let namespaces: Vec<_> = registry.namespaces().collect();
                    let signifiers: Vec<_> = registry.signifiers().collect();
                    let value = serde_json::json!({
                        "namespaces": namespaces,
                        "signifiers": signifiers,
                    });
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
                Format::Text => {
                    ui::header("Seeded vocabulary");
                    ui::section("Namespaces");
                    for (prefix, uri) in registry.namespaces() {
                        ui::summary_row(&format!("{prefix}:"), uri);
                    }
                    ui::section("Signifiers");
                    let rows: Vec<SignifierRow> =
                        registry.signifiers().map(SignifierRow::from).collect();
                    println!("{}", table::rows_table(&rows));
                }
            }
        }

        Commands::Load { file, strict } => {
            let (grammar, report) = load(&config, &file, strict || config.strict)?;

            ui::header(&format!("Loaded {}", file.display()));
            for skipped in &report.skipped {
                ui::warn(&format!("[{}#{}] {}", skipped.section, skipped.index, skipped.reason));
            }
            ui::info("Applied", &report.applied.to_string());
            println!("{}", table::stats_table(&grammar.signature().stats()));
            if report.is_clean() {
                ui::success("Document applied");
            }
        }

        Commands::Show { file, signifier, format } => {
            let (grammar, _) = load(&config, &file, config.strict)?;
            let qname = grammar.get_unique_qname_for_signifier_id(&signifier)?;
            let registry = grammar.signature();
            let found = registry
                .get_signifier(qname.to_qname_string())
                .with_context(|| format!("Signifier not found: {qname}"))?;

            let views: Vec<_> = [Role::Nomen, Role::Copula, Role::Attributum]
                .into_iter()
                .map(|role| (role, registry.axioms_for(found.id(), role)))
                .collect();

            match format {
                Format::Json => {
                    let axioms: serde_json::Map<String, serde_json::Value> = views
                        .iter()
                        .map(|(role, axioms)| Ok((role.to_string(), serde_json::to_value(axioms)?)))
                        .collect::<serde_json::Result<_>>()?;
                    let value = serde_json::json!({ "signifier": found, "axioms": axioms });
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
                Format::Text => {
                    ui::header(&found.to_string());
                    for (role, axioms) in &views {
                        ui::section(&format!("As {role}"));
                        if axioms.is_empty() {
                            println!("  {}", ui::muted(Icons::EMPTY));
                        }
                        for axiom in axioms {
                            println!("  {} {}", Icons::LINK, ui::axiom_line(&registry.view(axiom)));
                        }
                    }
                    let mut labels: Vec<&str> = found.copula_labels().collect();
                    labels.sort_unstable();
                    if !labels.is_empty() {
                        ui::section("Attributa by copula label");
                        for label in labels {
                            if let Some(attributum) = found.attributum_for(label) {
                                let shown = match attributum.as_literal() {
                                    Some(value) => ui::literal(value),
                                    None => attributum
                                        .as_signifier()
                                        .and_then(|id| registry.get_signifier(id))
                                        .map(|s| s.pref_label().to_string())
                                        .unwrap_or_default(),
                                };
                                ui::summary_row(&format!("{} {label}", Icons::TAG), &shown);
                            }
                        }
                    }
                }
            }
        }

        Commands::Literal { file, value, format } => {
            let (grammar, _) = load(&config, &file, config.strict)?;
            let registry = grammar.signature();
            let axioms = grammar.get_axioms_with_literal_as_attributum(&value);

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&axioms)?),
                Format::Text => {
                    if axioms.is_empty() {
                        println!("{} No axioms with literal {}", Icons::QUOTE, ui::literal(&value));
                    } else {
                        ui::header(&format!("Axioms with literal {}", ui::literal(&value)));
                        let rows: Vec<AxiomRow> = axioms
                            .iter()
                            .map(|axiom| AxiomRow::from(&registry.view(axiom)))
                            .collect();
                        println!("{}", table::rows_table(&rows));
                    }
                }
            }
        }
    }

    Ok(())
}

fn build_grammar(config: &GroxConfig, categorization: bool) -> anyhow::Result<Grammar> {
    let mut grammar = if categorization {
        Categorization::with_registry()?.into_grammar()
    } else {
        Grammar::with_registry()?
    };
    config.apply(&mut grammar)?;
    Ok(grammar)
}

fn load(
    config: &GroxConfig,
    file: &Path,
    strict: bool,
) -> anyhow::Result<(Grammar, grox::document::LoadReport)> {
    let document = VocabularyDocument::load(file)?;
    let mut grammar = build_grammar(config, config.categorization)?;
    let report = document
        .apply(&mut grammar, strict)
        .with_context(|| format!("Failed to apply {}", file.display()))?;
    tracing::info!(applied = report.applied, skipped = report.skipped.len(), "document loaded");
    Ok((grammar, report))
}
