use clap::{Parser, Subcommand};
use flowsight::gallery::categories;
use flowsight::prelude::*;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Inspect how workflow diagrams and template galleries will be rendered
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify every node of a workflow document and wire its edges
    Render {
        /// Path to the workflow JSON file
        workflow_path: String,

        /// Print the render result as JSON instead of a text summary
        #[arg(long)]
        json: bool,

        /// Fail on edges that cannot be attached instead of dropping them
        #[arg(long)]
        strict: bool,

        /// Render an engine-specific kind as a known one, e.g. `trigger=start`
        #[arg(long = "alias", value_parser = parse_alias)]
        aliases: Vec<(String, String)>,
    },
    /// List the project templates that match a search and category
    Templates {
        /// Path to the template list JSON file
        catalog_path: String,

        /// Case-insensitive text to look for in title, description and category
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show this category, matched exactly. Omit to show every category
        #[arg(short, long)]
        category: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render {
            workflow_path,
            json,
            strict,
            aliases,
        } => run_render(&workflow_path, json, strict, aliases),
        Command::Templates {
            catalog_path,
            search,
            category,
        } => run_templates(&catalog_path, search, category),
    }
}

fn run_render(workflow_path: &str, json: bool, strict: bool, aliases: Vec<(String, String)>) {
    let start = Instant::now();

    let workflow = UiWorkflow::from_file(workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load workflow '{}': {}",
            workflow_path, e
        ))
    });
    let definition = workflow
        .into_workflow()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert workflow: {}", e)));

    let mut builder = WorkflowRenderer::builder(definition).strict_edges(strict);
    for (user_kind, canonical_kind) in &aliases {
        builder = builder.with_kind_alias(user_kind, canonical_kind);
    }
    let rendered = builder
        .build()
        .render()
        .unwrap_or_else(|e| exit_with_error(&format!("Render failed: {}", e)));

    if json {
        let out = serde_json::to_string_pretty(&rendered).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to serialize render result: {}", e))
        });
        println!("{}", out);
    } else {
        println!("{}", SummaryFormatter::format_workflow(&rendered));
        println!("\nRendered in {:?}", start.elapsed());
    }
}

fn run_templates(catalog_path: &str, search: String, category: Option<String>) {
    let catalog = TemplateCatalog::from_file(catalog_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load templates '{}': {}",
            catalog_path, e
        ))
    });

    let filter = category.map_or(CategoryFilter::All, CategoryFilter::Only);
    let query = TemplateQuery::new(search, filter);
    let matches = query.apply(&catalog.templates);

    println!("Categories: {}", categories(&catalog.templates).join(", "));
    println!(
        "Showing {} of {} templates\n",
        matches.len(),
        catalog.len()
    );
    if matches.is_empty() {
        println!("  -> No templates match the current filters");
    }
    for template in matches {
        println!("  {}", SummaryFormatter::format_template(template));
    }
}

fn parse_alias(value: &str) -> std::result::Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(user, canonical)| (user.trim().to_string(), canonical.trim().to_string()))
        .filter(|(user, canonical)| !user.is_empty() && !canonical.is_empty())
        .ok_or_else(|| format!("expected USER_KIND=KIND, got '{}'", value))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
