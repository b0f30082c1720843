// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted session against a small company directory.
//!
//! This example shows how an embedding UI drives the chart:
//! - load a directory snapshot from JSON,
//! - forward clicks, wheel ticks, and drags,
//! - read back the scene and the queued events.
//!
//! Run:
//! - `cargo run -p arbor_demos --example walkthrough`
//! - `RUST_LOG=arbor_chart=debug cargo run -p arbor_demos --example walkthrough`

use arbor_chart::{CardFlags, ChartConfig, ChartView, OrgChart, Scene};
use arbor_directory::{CardKind, Directory, EmployeeId};
use arbor_tree::DepthLimit;
use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;

const SNAPSHOT: &str = include_str!("../data/acme.json");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let directory: Directory = serde_json::from_str(SNAPSHOT)?;
    let mut chart = OrgChart::new(directory, ChartConfig::default())?;
    chart.set_canvas_size(Size::new(1280.0, 720.0));
    chart.recenter();

    println!("== landing");
    print_chart(&chart);

    println!("\n== expand Grace (#2)");
    chart.toggle_expand(EmployeeId(2));
    print_chart(&chart);

    println!("\n== select Barbara (#7): accordion closes other branches");
    chart.select_node(EmployeeId(7));
    print_chart(&chart);

    println!("\n== show two levels");
    chart.show_levels(DepthLimit::Levels(2));
    print_chart(&chart);

    println!("\n== search result: jump to Margaret (#4)");
    chart.jump_to(EmployeeId(4));
    print_chart(&chart);

    println!("\n== go up");
    chart.go_up();
    print_chart(&chart);

    println!("\n== wheel zoom at the cursor, then drag");
    let cursor = Point::new(640.0, 200.0);
    if let Some(under) = chart.employee_at(cursor) {
        println!("under cursor before zoom: {}", under.name);
    }
    chart.wheel(cursor, -1.0);
    chart.wheel(cursor, -1.0);
    chart.pointer_down(Point::new(100.0, 100.0));
    chart.pointer_move(Point::new(160.0, 120.0));
    chart.pointer_leave();
    let viewport = chart.viewport();
    println!("zoom {:.2}, pan ({:.1}, {:.1})", viewport.zoom(), viewport.pan().x, viewport.pan().y);

    println!("\n== jump to an id that is not in the snapshot");
    chart.jump_to(EmployeeId(404));
    print_chart(&chart);

    println!("\n== events");
    for event in chart.take_events() {
        println!("{event:?}");
    }
    Ok(())
}

fn print_chart(chart: &OrgChart) {
    match chart.view() {
        ChartView::Empty => println!("(empty directory)"),
        ChartView::NotFound(id) => println!("employee {id} not found"),
        ChartView::Ready(layout) => {
            println!(
                "{} cards, {:.0} x {:.0}, depth {}",
                layout.len(),
                layout.width(),
                layout.height(),
                chart.current_depth()
            );
            if let Some(scene) = chart.scene() {
                print_scene(&scene);
            }
        }
    }
}

fn print_scene(scene: &Scene<'_>) {
    for card in &scene.cards {
        let marker = if card.flags.contains(CardFlags::EXPANDED) {
            "-"
        } else if card.flags.contains(CardFlags::HAS_REPORTS) {
            "+"
        } else {
            " "
        };
        let label = match card.kind {
            CardKind::Standard => card.employee.name.clone(),
            CardKind::Placeholder { open_reqs } => format!("{} ({open_reqs} open)", card.employee.title),
        };
        println!(
            "  [{marker}] {label:<32} at ({:>6.0}, {:>4.0})",
            card.rect.center().x,
            card.rect.y0
        );
    }
    println!("  {} connectors", scene.connectors.len());
}
