use crate::ui::UiFrame;
use ratatui::Terminal;
use ratatui::backend::{Backend, TestBackend};
use std::io;

pub trait OutputDriver {
    type Backend: Backend;

    fn enter(&mut self) -> io::Result<()>;
    fn exit(&mut self) -> io::Result<()>;

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(UiFrame<'_>);
}

/// Draws into an in-memory buffer. Lets the run loop be driven headless.
pub struct BufferOutputDriver {
    terminal: Terminal<TestBackend>,
    entered: bool,
    frames: usize,
}

impl BufferOutputDriver {
    pub fn new(width: u16, height: u16) -> io::Result<Self> {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .map_err(|err| io::Error::other(err.to_string()))?;
        Ok(Self {
            terminal,
            entered: false,
            frames: 0,
        })
    }

    pub fn backend(&self) -> &TestBackend {
        self.terminal.backend()
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Number of completed draws.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl OutputDriver for BufferOutputDriver {
    type Backend = TestBackend;

    fn enter(&mut self) -> io::Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        self.entered = false;
        Ok(())
    }

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(UiFrame<'_>),
    {
        self.terminal
            .draw(move |frame| f(UiFrame::new(frame)))
            .map_err(|err| io::Error::other(err.to_string()))?;
        self.frames += 1;
        Ok(())
    }
}
