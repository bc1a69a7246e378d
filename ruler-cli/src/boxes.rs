//! `ruler boxes`

use std::time::Instant;

use anyhow::{Context, bail};
use owo_colors::OwoColorize;
use serde::Serialize;
use strum::IntoEnumIterator;

use ruler_geometry::derive::position_summary;
use ruler_geometry::details::list_entry;
use ruler_geometry::{
    Adjacency, BoxData, BoxId, DetailsView, Edge, Osc52Clipboard, PositionSummary,
    PositioningTool, Strategy, parse_box_fields,
};

use crate::BoxesArgs;

#[derive(Serialize)]
struct SnippetReport {
    strategy: Strategy,
    code: String,
}

#[derive(Serialize)]
struct BoxesReport<'a> {
    boxes: &'a [BoxData],
    positions: Vec<PositionSummary>,
    adjacency: Vec<Adjacency>,
    snippets: Vec<SnippetReport>,
    details: DetailsView,
    #[serde(skip_serializing_if = "Option::is_none")]
    copied: Option<Strategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<String>,
}

pub fn run(args: &BoxesArgs) -> anyhow::Result<()> {
    let mut tool = PositioningTool::new();
    for (n, raw) in args.boxes.iter().enumerate() {
        let measurements =
            parse_box_fields(raw).with_context(|| format!("box {} ('{raw}')", n + 1))?;
        for edge in Edge::iter() {
            tool.set_draft(edge, measurements.get(edge).unwrap_or_default());
        }
        let _ = tool.add_box();
    }

    if let Some(n) = args.select {
        let found = tool.select_box(BoxId(n));
        if !found {
            bail!("no box with id {n}; ids run from 1 to {}", tool.boxes().len());
        }
    }

    let copied = args.copy.and_then(|strategy| {
        let now = Instant::now();
        tool.copy_snippet(strategy, &mut Osc52Clipboard::stdout(), now);
        tool.copied(now)
    });

    let strategies: Vec<Strategy> = match args.strategy {
        Some(strategy) => vec![strategy],
        None => Strategy::iter().collect(),
    };

    if args.json {
        let report = BoxesReport {
            boxes: tool.boxes().as_slice(),
            positions: tool.boxes().iter().map(position_summary).collect(),
            adjacency: tool.adjacency(),
            snippets: strategies
                .iter()
                .map(|&strategy| SnippetReport {
                    strategy,
                    code: tool.snippet(strategy),
                })
                .collect(),
            details: tool.details(),
            copied,
            preview: args.preview.then(|| tool.preview()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_boxes(&tool);
    print_adjacency(&tool);
    for strategy in strategies {
        println!("\n{}", format!("=== {} ===", strategy.as_ref()).bold());
        println!("{}", tool.snippet(strategy));
        if copied == Some(strategy) {
            println!("{}", "Copied!".green());
        }
    }
    println!("\n{}", "=== Details ===".bold());
    print!("{}", tool.details());
    if args.preview {
        println!("\n{}", "=== Preview ===".bold());
        println!("{}", tool.preview());
    }
    Ok(())
}

fn print_boxes(tool: &PositioningTool) {
    println!("{}", "=== Added Boxes ===".bold());
    for (index, data) in tool.boxes().iter().enumerate() {
        let marker = if tool.selected_id() == Some(data.id) {
            "*"
        } else {
            " "
        };
        println!("{marker} {}", list_entry(index, data));
    }
}

fn print_adjacency(tool: &PositioningTool) {
    let records = tool.adjacency();
    if records.is_empty() {
        return;
    }
    println!("\n{}", "=== Edge Differences ===".bold());
    for record in records {
        let mut line = format!("Box {} in {}:", record.index + 1, record.index + 2);
        for edge in Edge::iter() {
            let value = record
                .deltas
                .get(edge)
                .map_or_else(|| "n/a".dimmed().to_string(), |delta| delta.to_string());
            line.push_str(&format!("  {edge}: {value}"));
        }
        println!("{line}");
    }
}
