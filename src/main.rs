use std::path::PathBuf;

use shapekit::{init_logging, load_settings, DesignerState, EventFilter};

/// Runs a short scripted session and prints the final scene as JSON.
///
/// Usage: `shapekit [settings.toml]`. Set `events.history = true` in the
/// settings file to log how many events the session recorded.
fn main() -> anyhow::Result<()> {
    init_logging()?;

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = load_settings(settings_path.as_deref())?;
    tracing::info!("ShapeKit {} starting", shapekit::VERSION);

    let mut state = DesignerState::with_settings(settings);
    state.subscribe(EventFilter::All, |event| {
        tracing::debug!("{}", event.description());
    });

    let rect = state.add_rectangle();
    let circle = state.add_circle();
    let extra = state.add_rectangle();

    state.click(Some(rect), false);
    state.click(Some(circle), true);
    state.create_group()?;

    let group = state.selection().first().copied();
    if let Some(group) = group {
        state.click(Some(group), false);
        state.click(Some(extra), true);
        state.create_group()?;
    }
    tracing::info!("Group button now reads {}", state.controls().group_button);

    let shapes: Vec<_> = state.shapes().cloned().collect();
    let groups: Vec<_> = state.groups().into_iter().cloned().collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "shapes": shapes,
            "groups": groups,
            "controls": state.controls(),
        }))?
    );

    state.ungroup()?;
    state.clear_all();

    let history = state.events().history();
    if !history.is_empty() {
        tracing::info!("Session recorded {} events", history.len());
    }
    Ok(())
}
