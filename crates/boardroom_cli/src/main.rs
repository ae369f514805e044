//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `boardroom_core` wiring: config, logging, context, dispatch table.
//! - Replay a fixed builder interaction and print the render description.

use boardroom_core::{
    init_logging, BoardroomConfig, BoardroomContext, BoardroomEvent, ClickSignal, DispatchOutcome,
    EventDispatcher,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("boardroom_core ping={}", boardroom_core::ping());
    println!("boardroom_core version={}", boardroom_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("boardroom_cli error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let config = BoardroomConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(log_dir) = config.log_dir.as_ref() {
        init_logging(&config.log_level, &log_dir.to_string_lossy())?;
    }

    let dispatcher = EventDispatcher::with_default_handlers();
    let mut context = BoardroomContext::new(&config);
    println!("palette={}", context.palette().components().join(","));

    let row_id = match dispatch(&dispatcher, &mut context, BoardroomEvent::AddRow)? {
        DispatchOutcome::RowInserted { row_id } => row_id,
        other => return Err(format!("add_row produced {other:?}")),
    };
    let click = context
        .render_description()
        .first()
        .map(|descriptor| descriptor.click_identity.encode())
        .ok_or("render description is empty after add_row")?;
    let script = [
        BoardroomEvent::ClickBatch(vec![ClickSignal::raw(
            click,
            Some(serde_json::json!(10)),
        )]),
        BoardroomEvent::AddColumn,
        BoardroomEvent::AddRow,
    ];
    for event in script {
        let outcome = dispatch(&dispatcher, &mut context, event)?;
        println!("outcome={outcome:?}");
    }

    println!("selected_row={row_id}");
    let description = serde_json::to_string_pretty(&context.render_description())
        .map_err(|err| format!("failed to encode description: {err}"))?;
    println!("{description}");
    Ok(())
}

fn dispatch(
    dispatcher: &EventDispatcher,
    context: &mut BoardroomContext,
    event: BoardroomEvent,
) -> Result<DispatchOutcome, String> {
    dispatcher
        .dispatch(context, &event)
        .map_err(|err| err.to_string())
}
