use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// The single loop that owns the UI thread.
///
/// Each turn the handler is called once with `None` (time to tick and draw),
/// then with `Some(event)` for every event that is already queued. Draining
/// the queue keeps drags and wheel scrolling from lagging behind the pointer.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if handler(&mut self.driver, None)? == ControlFlow::Quit {
                return Ok(());
            }

            if self.driver.poll(self.poll_interval)? {
                loop {
                    let event = self.driver.read()?;
                    if handler(&mut self.driver, Some(event))? == ControlFlow::Quit {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::ZERO)? {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::ScriptedInputDriver;

    #[test]
    fn queued_events_are_drained_between_ticks() {
        let driver = ScriptedInputDriver::new([Event::FocusGained, Event::FocusLost]);
        let mut event_loop = EventLoop::new(driver, Duration::ZERO);
        let mut seen = Vec::new();
        event_loop
            .run(|_, event| {
                let idle = event.is_none();
                seen.push(event);
                // quit on the second tick
                if idle && seen.iter().filter(|e| e.is_none()).count() == 2 {
                    return Ok(ControlFlow::Quit);
                }
                Ok(ControlFlow::Continue)
            })
            .unwrap();
        assert_eq!(
            seen,
            vec![None, Some(Event::FocusGained), Some(Event::FocusLost), None]
        );
    }

    #[test]
    fn quit_from_an_event_stops_immediately() {
        let driver = ScriptedInputDriver::new([Event::FocusGained, Event::FocusLost]);
        let mut event_loop = EventLoop::new(driver, Duration::ZERO);
        event_loop
            .run(|_, event| {
                Ok(match event {
                    Some(Event::FocusGained) => ControlFlow::Quit,
                    _ => ControlFlow::Continue,
                })
            })
            .unwrap();
        assert_eq!(event_loop.into_driver().remaining(), 1);
    }
}
