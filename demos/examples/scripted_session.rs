// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted session over the built-in demonstration tree.
//!
//! Builds a `SideNav` from a payload without a `tree`, then replays a fixed sequence
//! of pointer, keyboard, and host inputs, printing the outbound events and the render
//! tier chosen for each step.
//!
//! Run:
//! - `cargo run -p understory_nav_demos --example scripted_session`
//! - `RUST_LOG=understory_nav=debug cargo run -p understory_nav_demos --example scripted_session`

use kurbo::{Point, Vec2};
use tracing_subscriber::EnvFilter;
use understory_nav::{
    Command, InputEvent, Key, NodeId, RenderInstructions, SideNav, Update, WidgetState,
};

enum Step {
    Input(InputEvent),
    Command(Command),
}

fn describe(render: &RenderInstructions) -> String {
    match render {
        RenderInstructions::Rebuild {
            rows,
            content_height,
            ..
        } => format!("rebuild {} rows, content {content_height}px", rows.len()),
        RenderInstructions::Translate {
            translation,
            patches,
        } => format!(
            "translate {:.0}px, restyle {} rows",
            translation.y,
            patches.len()
        ),
        RenderInstructions::Restyle(patches) => {
            let ids: Vec<_> = patches.iter().map(|p| p.id.as_str()).collect();
            format!("restyle {ids:?}")
        }
        RenderInstructions::Nothing => "nothing".to_string(),
    }
}

fn print_rows(state: &WidgetState) {
    for row in state.visible_rows() {
        let depth = state.bounds().get(row.id.as_str()).map_or(0, |e| e.depth);
        let marker = match (state.active_id(), state.focused_id()) {
            (Some(a), _) if a == row.id => '*',
            (_, Some(f)) if f == row.id => '>',
            _ => ' ',
        };
        println!(
            "    {marker} {:indent$}{} @ y={:.0}",
            "",
            row.label,
            row.bounds.y0,
            indent = depth * 2
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut nav = match SideNav::from_json(
        r#"{
            "frame": { "x": 0, "y": 0, "width": 260, "height": 200 },
            "expanded": ["components"],
            "theme": { "row_height": 28, "scroll_speed": 1.5 }
        }"#,
    ) {
        Ok(nav) => nav,
        Err(err) => {
            tracing::error!(%err, "could not build the side navigation");
            return;
        }
    };

    let first = nav.render();
    println!("initial: {}", describe(&first));
    print_rows(nav.state());

    let script = [
        Step::Input(InputEvent::PointerMove(Point::new(120.0, 40.0))),
        Step::Input(InputEvent::Click(Point::new(6.0, 42.0))),
        Step::Input(InputEvent::Key(Key::Down)),
        Step::Input(InputEvent::Key(Key::Down)),
        Step::Input(InputEvent::Key(Key::Right)),
        Step::Input(InputEvent::Key(Key::PageDown)),
        Step::Input(InputEvent::Key(Key::Enter)),
        Step::Input(InputEvent::Scroll(Vec2::new(0.0, -40.0))),
        Step::Input(InputEvent::PointerLeave),
        Step::Command(Command::SetActive(NodeId::from("settings.keyboard"))),
        Step::Command(Command::SetFilter("grid".into())),
        Step::Command(Command::SetFilter(String::new())),
        Step::Input(InputEvent::Key(Key::Escape)),
        Step::Command(Command::CollapseAll),
    ];

    for (i, step) in script.into_iter().enumerate() {
        let (label, update): (String, Update) = match step {
            Step::Input(event) => (format!("{event:?}"), nav.handle_input(&event)),
            Step::Command(command) => {
                let label = format!("{command:?}");
                match nav.command(command) {
                    Ok(update) => (label, update),
                    Err(err) => {
                        tracing::warn!(%err, "command rejected");
                        continue;
                    }
                }
            }
        };
        println!("step {i}: {label}");
        for event in &update.events {
            println!("    event: {event:?}");
        }
        println!("    render: {}", describe(&update.render));
        println!(
            "    scroll: {:.0} / {:.0}",
            nav.state().scroll_offset(),
            nav.state().max_scroll()
        );
    }

    println!("final rows:");
    print_rows(nav.state());
}
