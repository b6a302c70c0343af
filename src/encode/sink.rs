use std::io::Write;
use std::time::Duration;

use unicode_width::UnicodeWidthStr;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::TrashResult;

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frames that will be pushed.
    pub frames: u64,
    /// Upper bound on the byte length of every pushed frame.
    pub max_frame_len: usize,
}

/// Sink contract for consuming rendered frames in order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order within the
/// requested render range.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> TrashResult<()>;
    /// Push one frame in strictly increasing order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &str) -> TrashResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> TrashResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, String)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, String)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> TrashResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &str) -> TrashResult<()> {
        self.frames.push((idx, frame.to_owned()));
        Ok(())
    }

    fn end(&mut self) -> TrashResult<()> {
        Ok(())
    }
}

/// How consecutive frames are laid out by a [`WriterSink`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FrameLayout {
    /// One frame per line.
    #[default]
    Lines,
    /// Redraw in place with `\r`, padding over leftovers of a wider previous frame.
    Inline,
}

/// Writes frames to any [`Write`], optionally pausing between them.
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    out: W,
    layout: FrameLayout,
    delay: Option<Duration>,
    last_width: usize,
    pushed: u64,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(out: W, layout: FrameLayout) -> Self {
        Self {
            out,
            layout,
            delay: None,
            last_width: 0,
            pushed: 0,
        }
    }

    /// Sleep this long between frames.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> FrameSink for WriterSink<W> {
    fn begin(&mut self, _cfg: SinkConfig) -> TrashResult<()> {
        self.last_width = 0;
        self.pushed = 0;
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, frame: &str) -> TrashResult<()> {
        if self.pushed > 0 {
            if let Some(d) = self.delay {
                std::thread::sleep(d);
            }
        }
        match self.layout {
            FrameLayout::Lines => writeln!(self.out, "{frame}")?,
            FrameLayout::Inline => {
                let width = frame.width();
                let pad = self.last_width.saturating_sub(width);
                write!(self.out, "\r{frame}{:pad$}", "")?;
                self.last_width = width;
            }
        }
        self.out.flush()?;
        self.pushed += 1;
        Ok(())
    }

    fn end(&mut self) -> TrashResult<()> {
        if self.layout == FrameLayout::Inline && self.pushed > 0 {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
