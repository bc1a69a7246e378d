//! `ruler traverse`

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, anyhow};
use owo_colors::OwoColorize;
use serde::Serialize;

use ruler_css::parse_selector_list;
use ruler_dom::{DomTree, MouseEvent, NodeId, Page, Rect, load_fixture};
use ruler_traversal::{ElementTraversal, TraversalOptions};

use crate::TraverseArgs;

#[derive(Serialize)]
struct VisitReport {
    index: usize,
    element: String,
    rect: Rect,
    style: String,
}

#[derive(Serialize)]
struct TraverseReport {
    target: String,
    engaged: bool,
    visited: Vec<VisitReport>,
}

/// An id first, then the first element matching `raw` as a selector.
fn resolve(tree: &DomTree, raw: &str) -> anyhow::Result<NodeId> {
    if let Some(node) = tree.element_by_id(raw) {
        return Ok(node);
    }
    let selectors =
        parse_selector_list(raw).ok_or_else(|| anyhow!("'{raw}' is neither an id nor a selector"))?;
    tree.inclusive_descendants(NodeId::ROOT)
        .into_iter()
        .find(|&node| selectors.matches(tree, node))
        .ok_or_else(|| anyhow!("no element matches '{raw}'"))
}

pub fn run(args: TraverseArgs) -> anyhow::Result<()> {
    let tree = load_fixture(&args.fixture)?;
    let target = resolve(&tree, &args.target).context("resolving --target")?;
    let container = match &args.container {
        Some(id) => tree
            .element_by_id(id)
            .ok_or_else(|| anyhow!("no element with id '{id}'"))?,
        None => tree
            .body()
            .or_else(|| tree.document_element())
            .ok_or_else(|| anyhow!("fixture has no elements"))?,
    };

    let mut page = Page::new(tree);
    let collected: Rc<RefCell<Option<Vec<NodeId>>>> = Rc::default();
    let sink = Rc::clone(&collected);
    let options = TraversalOptions {
        target_selector: args.selector,
        highlight_color: args.color,
        auto_highlight: args.highlight,
        on_traverse: Some(Box::new(move |elements: &[NodeId], _event: &MouseEvent| {
            *sink.borrow_mut() = Some(elements.to_vec());
        })),
    };
    let _trigger = ElementTraversal::mount(&mut page, container, options);
    let _ = page.click(target);

    let tree = page.tree();
    let engaged = collected.borrow().is_some();
    let visited: Vec<VisitReport> = collected
        .borrow()
        .iter()
        .flatten()
        .enumerate()
        .map(|(index, &node)| VisitReport {
            index,
            element: tree.describe(node),
            rect: tree.as_element(node).map(|e| e.bounds).unwrap_or_default(),
            style: tree
                .as_element(node)
                .map(|e| e.style.css_text())
                .unwrap_or_default(),
        })
        .collect();

    if args.json {
        let report = TraverseReport {
            target: tree.describe(target),
            engaged,
            visited,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", "Clicked".bold(), tree.describe(target));
    if !engaged {
        println!("{}", "Target does not match the selector; nothing collected".yellow());
        return Ok(());
    }
    println!("{}", "=== Ancestors (innermost first) ===".bold());
    for visit in &visited {
        let rect = visit.rect;
        print!(
            "{:>3}. {}  {}x{}",
            visit.index, visit.element, rect.width, rect.height
        );
        if visit.style.is_empty() {
            println!();
        } else {
            println!("  {}", format!("style=\"{}\"", visit.style).green());
        }
    }
    Ok(())
}
