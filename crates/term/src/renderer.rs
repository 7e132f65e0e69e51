//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw. Later
//! frames only rewrite runs of cells that changed since the previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// How a frame is written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Clear the screen and write every cell
    Full,
    /// Rewrite only the runs that changed since the previous frame
    Diff,
}

impl Redraw {
    /// Diff only against a previous frame of the same size.
    pub fn choose(prev: Option<&FrameBuffer>, next: &FrameBuffer) -> Self {
        match prev {
            Some(prev) if prev.width() == next.width() && prev.height() == next.height() => {
                Redraw::Diff
            }
            _ => Redraw::Full,
        }
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    title: String,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            stdout: io::stdout(),
            title: title.into(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::SetTitle(&self.title))?;
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        log::info!("entered alternate screen");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        log::info!("restored terminal");
        Ok(())
    }

    /// Force the next draw to be a full redraw. Call on terminal resize.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it with the renderer's previous frame.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame; afterwards it
    /// holds the frame before last and is ready to be redrawn into.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<Redraw> {
        let redraw = self.encode_swap(fb)?;
        self.flush_buf()?;
        Ok(redraw)
    }

    /// Encode `fb` into the output buffer and keep it as the previous frame.
    fn encode_swap(&mut self, fb: &mut FrameBuffer) -> Result<Redraw> {
        self.buf.clear();
        let redraw = Redraw::choose(self.last.as_ref(), fb);
        let mut prev = match (redraw, self.last.take()) {
            (Redraw::Diff, Some(prev)) => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            (_, stale) => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(redraw)
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            pen.print(out, fb, x, y)?;
        }
    }
    pen.reset(out)
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Both framebuffers must have the same size; use [`encode_full_into`] otherwise.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for run in ChangedRuns::new(prev, next) {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        for x in run.x..run.x + run.len {
            pen.print(out, next, x, run.y)?;
        }
    }
    pen.reset(out)
}

/// Tracks the active terminal style so unchanged styles aren't re-sent.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, fb: &FrameBuffer, x: u16, y: u16) -> Result<()> {
        let cell = fb.get(x, y).unwrap_or_default();
        if self.style != Some(cell.style) {
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(SetForegroundColor(rgb_to_color(cell.style.fg)))?;
            out.queue(SetBackgroundColor(rgb_to_color(cell.style.bg)))?;
            if cell.style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            self.style = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn reset(self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// A horizontal run of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

/// Iterates maximal runs of cells that differ between two same-sized frames.
pub struct ChangedRuns<'a> {
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    x: u16,
    y: u16,
}

impl<'a> ChangedRuns<'a> {
    pub fn new(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> Self {
        debug_assert_eq!(
            (prev.width(), prev.height()),
            (next.width(), next.height())
        );
        Self {
            prev,
            next,
            x: 0,
            y: 0,
        }
    }

    fn differs(&self, x: u16, y: u16) -> bool {
        self.prev.get(x, y) != self.next.get(x, y)
    }
}

impl Iterator for ChangedRuns<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let w = self.next.width();
        while self.y < self.next.height() {
            while self.x < w {
                if !self.differs(self.x, self.y) {
                    self.x += 1;
                    continue;
                }
                let start = self.x;
                while self.x < w && self.differs(self.x, self.y) {
                    self.x += 1;
                }
                return Some(Run {
                    x: start,
                    y: self.y,
                    len: self.x - start,
                });
            }
            self.x = 0;
            self.y += 1;
        }
        None
    }
}
