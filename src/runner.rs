use std::io;
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::desktop::Desktop;
use crate::drivers::{InputDriver, OutputDriver};
use crate::event_loop::{ControlFlow, EventLoop};

/// Ctrl+Q and Ctrl+C leave the desktop.
pub fn is_quit_event(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(key)
            if key.kind != KeyEventKind::Release
                && key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    )
}

/// Run `desktop` until a quit key arrives.
///
/// The output is entered and mouse capture enabled for the duration of the
/// run; both are restored on the way out, including when the loop fails.
/// `clock` supplies the wall-clock time shown in the top bar.
pub fn run_desktop<O, I, C>(
    output: &mut O,
    input: I,
    desktop: &mut Desktop,
    frame_interval: Duration,
    mut clock: C,
) -> io::Result<()>
where
    O: OutputDriver,
    I: InputDriver,
    C: FnMut() -> NaiveDateTime,
{
    output.enter()?;
    let mut event_loop = EventLoop::new(input, frame_interval);
    event_loop.driver().set_mouse_capture(true)?;
    tracing::info!("desktop started");

    let result = event_loop.run(|_, event| {
        let Some(event) = event else {
            desktop.tick(Instant::now());
            let now = clock();
            output.draw(|mut frame| desktop.render(&mut frame, now))?;
            return Ok(ControlFlow::Continue);
        };
        if is_quit_event(&event) {
            tracing::info!("quit requested");
            return Ok(ControlFlow::Quit);
        }
        desktop.handle_event(&event, Instant::now());
        Ok(ControlFlow::Continue)
    });

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    let restore_capture = event_loop.driver().set_mouse_capture(false);
    let restore_output = output.exit();
    result.and(restore_capture).and(restore_output)
}
