use crate::cli::ScoreArgs;
use crate::error::{CliError, Result};
use alpharing::core::io::{pdb::StructureConfidence, results, ring, scan::StabilityScan};
use alpharing::core::models::substitution::Substitution;
use alpharing::engine::classify;
use alpharing::workflows;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: ScoreArgs) -> Result<()> {
    let substitutions: Vec<Substitution> = args
        .substitutions
        .iter()
        .map(|text| {
            text.parse().map_err(|e| {
                CliError::Argument(format!("invalid substitution '{text}': {e}"))
            })
        })
        .collect::<Result<_>>()?;

    info!("Loading structure model from {:?}", &args.model);
    let structure = StructureConfidence::read_from_path(&args.model)?;

    info!(
        "Loading interaction network from {:?} and {:?}",
        &args.nodes, &args.edges
    );
    let mut network = ring::load_network(&args.nodes, &args.edges)?;

    info!("Loading stability scan from {:?}", &args.scan);
    let scan = StabilityScan::load(&args.scan)?;

    info!("Loading classifier artifact from {:?}", &args.artifact);
    let artifact = classify::load_artifact(&args.artifact)?;

    println!("Scoring {} substitution(s)...", substitutions.len());
    info!("Invoking the core scoring workflow...");

    let rows = workflows::score::run(&structure, &mut network, &scan, &artifact, &substitutions)?;

    if args.write_network {
        let nodes_out = weighted_table_path(&args.output, &args.nodes);
        let edges_out = weighted_table_path(&args.output, &args.edges);
        info!(
            "Writing weighted network tables to {:?} and {:?}",
            &nodes_out, &edges_out
        );
        ring::save_network(&network, &nodes_out, &edges_out)?;
    }

    results::save_scores(&rows, &args.output)?;

    for row in &rows {
        println!(
            "  {} -> {} (probability {:.3})",
            row.substitution, row.label, row.probability
        );
    }
    println!(
        "✓ Scores for {} substitution(s) written to: {}",
        rows.len(),
        args.output.display()
    );

    Ok(())
}

// The weighted tables land next to the scores table, named after the input
// tables they extend.
fn weighted_table_path(output: &Path, input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "table".to_string());
    let directory = output.parent().unwrap_or_else(|| Path::new("."));
    directory.join(format!("weighted_{name}"))
}
