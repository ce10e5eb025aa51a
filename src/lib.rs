#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/notebook-progress/")]

//! # notebook-progress
//!
//! A colored CSS progress bar widget for interactive notebook cells.
//!
//! ## Overview
//!
//! `notebook-progress` renders a small animated progress bar into a notebook
//! cell and updates it in place as a loop advances. The crate is a thin
//! display layer: it samples colors from a named palette into a
//! [`ColorRamp`](palette::ColorRamp), emits a markup/style block scoped by a
//! unique identifier so multiple bars can coexist on one page, and pushes
//! script snippets through an injectable [`DisplaySurface`](display::DisplaySurface)
//! that widen the on-screen bar and step its color as progress advances.
//!
//! ## Features
//!
//! - **Named color ramps** sampled from diverging and sequential palettes
//!   (`"RdYlGn"`, `"viridis"`, `"winter"`, ...)
//! - **Identifier-scoped markup** so any number of bars share a page safely
//! - **Injectable display channel**: bring your host's display surface, or
//!   use the bundled MIME-block writer
//! - **Redundancy suppression**: updates are emitted only when the displayed
//!   percentage actually moves
//!
//! ## Quick Start
//!
//! ```rust
//! use notebook_progress::prelude::*;
//!
//! let mut bar = progress_new(
//!     MemorySurface::new(),
//!     &[with_palette("winter"), with_iterations(3)],
//! )?;
//!
//! for _ in 0..3 {
//!     // ... one unit of work ...
//!     bar.advance()?;
//! }
//! assert_eq!(bar.percent(), 99);
//! # Ok::<(), notebook_progress::Error>(())
//! ```
//!
//! In a notebook kernel, hand the bar a surface wired to the host's display
//! channel instead; [`MimeSurface::stdout()`](display::MimeSurface::stdout)
//! covers kernels that scrape MIME-tagged content blocks from standard
//! output.
//!
//! The widget is single-writer: `advance` takes `&mut self` and is meant to
//! be called sequentially from the loop that owns the bar.

pub mod display;
pub mod error;
mod markup;
pub mod palette;
pub mod progress;

pub use display::{
    DisplayEvent, DisplaySurface, MemorySurface, MimeSurface, MountPayload, UpdatePayload,
};
pub use error::{Error, Result};
pub use palette::ColorRamp;
pub use progress::{with_iterations, with_palette, Model as Progress, ProgressOption};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use notebook_progress::prelude::*;
///
/// let bar = progress_new(MemorySurface::new(), &[with_iterations(10)])?;
/// assert_eq!(bar.iterations(), 10);
/// # Ok::<(), notebook_progress::Error>(())
/// ```
pub mod prelude {
    pub use crate::display::{
        DisplayEvent, DisplaySurface, MemorySurface, MimeSurface, MountPayload, UpdatePayload,
    };
    pub use crate::error::{Error, Result};
    pub use crate::palette::ColorRamp;
    pub use crate::progress::{
        new as progress_new, with_iterations, with_palette, Model as Progress, ProgressOption,
    };
}
