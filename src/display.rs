//! The display channel a progress widget renders through.
//!
//! The notebook host's rendering pipeline is an external collaborator; the
//! widget only needs a narrow sink it can hand two kinds of payloads to. A
//! [`DisplaySurface`] is injected at construction, so nothing in this crate
//! talks to a process-wide display singleton.
//!
//! Two implementations ship with the crate: [`MemorySurface`] records
//! payloads in order (useful for tests and headless runs), and
//! [`MimeSurface`] frames payloads as MIME-tagged content blocks on a writer,
//! the stdout convention interactive notebook kernels scrape for rich output.
//! Hosts with their own display channel implement the trait directly.
//!
//! Contract with the host: the mount payload is delivered exactly once and
//! strictly before any update, and reapplying an update is harmless.

use std::io::{self, Write};

/// One-time payload that creates the bar's visual structure on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPayload {
    /// Identifier scoping the markup to one widget instance.
    pub id: String,
    /// Markup and style text, ready for insertion into the page.
    pub html: String,
}

/// Incremental payload that mutates the mounted bar's width and color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePayload {
    /// Identifier of the widget instance being updated.
    pub id: String,
    /// Executable instruction targeting the element scoped by `id`.
    pub script: String,
}

/// An output sink for widget payloads.
pub trait DisplaySurface {
    /// Accepts the one-time mount payload.
    fn mount(&mut self, payload: &MountPayload) -> io::Result<()>;

    /// Accepts an update payload.
    fn update(&mut self, payload: &UpdatePayload) -> io::Result<()>;
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &mut S {
    fn mount(&mut self, payload: &MountPayload) -> io::Result<()> {
        (**self).mount(payload)
    }

    fn update(&mut self, payload: &UpdatePayload) -> io::Result<()> {
        (**self).update(payload)
    }
}

/// A payload recorded by [`MemorySurface`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    /// A mount payload was received.
    Mount(MountPayload),
    /// An update payload was received.
    Update(UpdatePayload),
}

/// A surface that records every payload it receives.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    events: Vec<DisplayEvent>,
}

impl MemorySurface {
    /// Creates an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded payloads, in arrival order.
    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// The recorded mount payloads, in arrival order.
    pub fn mounts(&self) -> impl Iterator<Item = &MountPayload> {
        self.events.iter().filter_map(|e| match e {
            DisplayEvent::Mount(p) => Some(p),
            DisplayEvent::Update(_) => None,
        })
    }

    /// The recorded update payloads, in arrival order.
    pub fn updates(&self) -> impl Iterator<Item = &UpdatePayload> {
        self.events.iter().filter_map(|e| match e {
            DisplayEvent::Update(p) => Some(p),
            DisplayEvent::Mount(_) => None,
        })
    }
}

impl DisplaySurface for MemorySurface {
    fn mount(&mut self, payload: &MountPayload) -> io::Result<()> {
        self.events.push(DisplayEvent::Mount(payload.clone()));
        Ok(())
    }

    fn update(&mut self, payload: &UpdatePayload) -> io::Result<()> {
        self.events.push(DisplayEvent::Update(payload.clone()));
        Ok(())
    }
}

/// A surface that frames payloads as MIME-tagged content blocks on a writer.
///
/// Mount markup is written as a `text/html` block; update instructions are
/// wrapped in a `<script>` element so the host executes them on insertion.
/// Each block is flushed immediately so the bar reacts while the owning loop
/// is still running.
#[derive(Debug)]
pub struct MimeSurface<W: Write> {
    writer: W,
}

impl MimeSurface<io::Stdout> {
    /// A surface writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> MimeSurface<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit(&mut self, body: &str) -> io::Result<()> {
        writeln!(self.writer, "EVCXR_BEGIN_CONTENT text/html")?;
        writeln!(self.writer, "{body}")?;
        writeln!(self.writer, "EVCXR_END_CONTENT")?;
        self.writer.flush()
    }
}

impl<W: Write> DisplaySurface for MimeSurface<W> {
    fn mount(&mut self, payload: &MountPayload) -> io::Result<()> {
        self.emit(&payload.html)
    }

    fn update(&mut self, payload: &UpdatePayload) -> io::Result<()> {
        self.emit(&format!("<script>\n{}</script>", payload.script))
    }
}
