// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line entry point.
//!
//! Builds the root quiver (from the catalog or from `--nodes`/`--arrow`),
//! reports whether it already has a cycle, then searches for an acyclic mutant.
//! Program output goes to stdout; logging goes to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use quiver_search::engine::DEFAULT_MAX_DEPTH;
use quiver_search::report::{write_header, write_result};
use quiver_search::{EliminationOrder, KnownQuiver, Quiver, SearchConfig, SearchEngine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "quiver")]
#[command(version, about = "Search for a mutation sequence that makes a quiver acyclic", long_about = None)]
struct Cli {
    /// Built-in quiver to start from
    #[arg(short, long, value_enum, default_value = "reference", conflicts_with = "nodes")]
    quiver: QuiverArg,

    /// Number of nodes of a custom quiver
    #[arg(short, long)]
    nodes: Option<usize>,

    /// Unit arrow of a custom quiver, repeatable
    #[arg(short, long = "arrow", value_name = "SOURCE:SINK", value_parser = parse_arrow, requires = "nodes")]
    arrows: Vec<(usize, usize)>,

    /// Deepest frame that is still expanded
    #[arg(short = 'd', long, env = "QUIVER_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Tie-break among nodes of in-degree zero
    #[arg(long, value_enum, default_value = "lowest-index")]
    tie_break: TieBreakArg,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum QuiverArg {
    Reference,
    Tiny,
    UnorientedCycle,
    Tree,
}

impl From<QuiverArg> for KnownQuiver {
    fn from(arg: QuiverArg) -> Self {
        match arg {
            QuiverArg::Reference => KnownQuiver::Reference,
            QuiverArg::Tiny => KnownQuiver::Tiny,
            QuiverArg::UnorientedCycle => KnownQuiver::UnorientedCycle,
            QuiverArg::Tree => KnownQuiver::Tree,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TieBreakArg {
    LowestIndex,
    HighestIndex,
}

impl From<TieBreakArg> for EliminationOrder {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::LowestIndex => EliminationOrder::LowestIndex,
            TieBreakArg::HighestIndex => EliminationOrder::HighestIndex,
        }
    }
}

/// Parse `SOURCE:SINK`.
fn parse_arrow(value: &str) -> std::result::Result<(usize, usize), String> {
    let (source, sink) = value
        .split_once(':')
        .ok_or_else(|| format!("expected SOURCE:SINK, got '{}'", value))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid node '{}': {}", part, e))
    };
    Ok((parse(source)?, parse(sink)?))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "quiver_search=debug,quiver=debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn root_quiver(cli: &Cli) -> Result<Quiver> {
    match cli.nodes {
        Some(nodes) => Quiver::from_arrows(nodes, cli.arrows.iter().copied())
            .context("invalid custom quiver"),
        None => {
            let known = KnownQuiver::from(cli.quiver);
            known
                .build()
                .with_context(|| format!("invalid built-in quiver '{}'", known))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = root_quiver(&cli)?;
    let config = SearchConfig::new(cli.max_depth).with_elimination_order(cli.tie_break.into());
    let engine = SearchEngine::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_header(&mut out, root.len(), engine.oracle().has_cycle(&root))?;
    out.flush()?;

    let report = engine.search(&root).context("search aborted")?;
    write_result(&mut out, &report)?;
    Ok(())
}
