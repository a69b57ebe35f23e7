//! Intent resolution command

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::input::{read_document, FileContentProviders};
use crate::output::{print_document, print_info, print_table, print_warning, OutputFormat};
use clap::Args;
use inbound_search::{ContentProviderLoader, MatchSummary, SearchEngine};
use inbound_types::{format_inbound, format_intent, Inbound, Intent, KnownReferences, MatchedInbound};
use std::path::PathBuf;
use tabled::Tabled;
use tracing::info;

/// Arguments of `inbound resolve`
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Intent document (JSON or YAML)
    #[arg(long)]
    pub intent: PathBuf,

    /// Inbound catalog document
    #[arg(long)]
    pub inbounds: PathBuf,

    /// Known references, keyed by content provider
    #[arg(long)]
    pub references: Option<PathBuf>,

    /// Content providers and their supported data origins
    #[arg(long)]
    pub content_providers: Option<PathBuf>,

    /// Report why inbounds were rejected
    #[arg(long)]
    pub debug: bool,

    /// Show only the best N matches
    #[arg(long)]
    pub top: Option<usize>,
}

/// Table row for a ranked match
#[derive(Debug, Tabled)]
struct MatchRow {
    rank: usize,
    inbound: String,
    priority: String,
    technology: String,
    target: String,
    defaulted: String,
    key: String,
}

impl MatchRow {
    fn new(rank: usize, matched: &MatchedInbound) -> Self {
        let resolution = &matched.inbound.resolution_result;
        Self {
            rank,
            inbound: format_inbound(&matched.inbound),
            priority: matched
                .sap_priority
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".into()),
            technology: resolution.technology.clone().unwrap_or_else(|| "-".into()),
            target: resolution
                .url
                .clone()
                .or_else(|| resolution.ui5_component_name.clone())
                .unwrap_or_else(|| "-".into()),
            defaulted: matched.defaulted_param_names.join(", "),
            key: matched.priority_string.clone(),
        }
    }
}

/// Table row for a rejected inbound
#[derive(Debug, Tabled)]
struct NoMatchRow {
    inbound: String,
    reason: String,
}

/// Execute `inbound resolve`
pub async fn execute(args: ResolveArgs, config: &CliConfig, format: OutputFormat) -> CliResult<()> {
    let intent: Intent = read_document(&args.intent).await?;
    let inbounds: Vec<Inbound> = read_document(&args.inbounds).await?;
    let known = match &args.references {
        Some(path) => read_document(path).await?,
        None => KnownReferences::new(),
    };
    let loader = args
        .content_providers
        .as_ref()
        .map(|path| FileContentProviders::new(path.clone()));

    let search = config
        .search
        .clone()
        .with_debug(config.search.debug || args.debug);
    let engine = SearchEngine::new(search);

    info!(
        intent = %format_intent(&intent),
        inbounds = inbounds.len(),
        "Resolving intent"
    );
    let mut summary = engine
        .resolve(
            &intent,
            &inbounds,
            &known,
            loader.as_ref().map(|l| l as &dyn ContentProviderLoader),
        )
        .await?;
    if let Some(top) = args.top {
        summary.match_results.truncate(top);
    }

    match format {
        OutputFormat::Table => print_summary(&summary),
        _ => print_document(&summary, format)?,
    }
    Ok(())
}

fn print_summary(summary: &MatchSummary) {
    if summary.match_results.is_empty() {
        print_warning("No matching inbound");
    } else {
        let rows = summary
            .match_results
            .iter()
            .enumerate()
            .map(|(i, matched)| MatchRow::new(i + 1, matched))
            .collect();
        print_table::<MatchRow>(rows);
    }

    for (content_provider, references) in &summary.missing_references.0 {
        for reference in references {
            print_warning(&format!(
                "Unresolved reference {} (content provider \"{}\")",
                reference, content_provider
            ));
        }
    }

    if !summary.no_match_reasons.is_empty() {
        print_info("Rejected inbounds:");
        let rows = summary
            .no_match_reasons
            .iter()
            .map(|(inbound, reason)| NoMatchRow {
                inbound: inbound.clone(),
                reason: reason.clone(),
            })
            .collect();
        print_table::<NoMatchRow>(rows);
    }
}
