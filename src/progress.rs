//! Progress widget for interactive notebook cells.
//!
//! The widget renders a colored CSS progress bar into a notebook cell and
//! updates it in place as a loop advances. On construction it mounts its
//! markup and style block, scoped by a unique identifier so multiple bars can
//! coexist on one page; each [`advance`](Model::advance) call that moves the
//! completion percentage pushes a small script to the host display channel
//! that widens the bar and steps its color along the configured ramp.
//!
//! # Basic Usage
//!
//! ```rust
//! use notebook_progress::display::MimeSurface;
//! use notebook_progress::progress::{self, with_iterations, with_palette};
//!
//! // Create a bar with default settings (RdYlGn ramp, 100 iterations).
//! let bar = progress::new(MimeSurface::stdout(), &[])?;
//!
//! // Or configure it with the option pattern.
//! let mut bar = progress::new(
//!     MimeSurface::stdout(),
//!     &[with_palette("winter"), with_iterations(200)],
//! )?;
//!
//! for _ in 0..200 {
//!     // ... one unit of work ...
//!     bar.advance()?;
//! }
//! # Ok::<(), notebook_progress::Error>(())
//! ```

use crate::display::{DisplaySurface, MountPayload, UpdatePayload};
use crate::error::{Error, Result};
use crate::markup;
use crate::palette::ColorRamp;
use log::{debug, trace};
use uuid::Uuid;

const DEFAULT_PALETTE: &str = "RdYlGn";
const DEFAULT_ITERATIONS: usize = 100;

/// Configuration options for customizing a progress bar.
///
/// Options are applied in order by [`new`]; later options win.
pub enum ProgressOption {
    /// Uses the named color ramp instead of the default diverging
    /// red-yellow-green one.
    WithPalette(String),
    /// Sets the number of advance calls the bar is tracking.
    WithIterations(usize),
}

struct Config {
    palette: String,
    iterations: usize,
}

impl ProgressOption {
    fn apply(&self, cfg: &mut Config) {
        match self {
            ProgressOption::WithPalette(name) => {
                cfg.palette = name.clone();
            }
            ProgressOption::WithIterations(n) => {
                cfg.iterations = *n;
            }
        }
    }
}

/// Selects the color ramp by palette name.
///
/// Any name registered in [`palette::names`](crate::palette::names) can be
/// used. Unknown names make [`new`] fail with [`Error::PaletteNotFound`].
///
/// # Examples
///
/// ```rust
/// use notebook_progress::display::MemorySurface;
/// use notebook_progress::progress::{self, with_palette};
///
/// let bar = progress::new(MemorySurface::new(), &[with_palette("viridis")])?;
/// assert_eq!(bar.iterations(), 100);
/// # Ok::<(), notebook_progress::Error>(())
/// ```
pub fn with_palette(name: impl Into<String>) -> ProgressOption {
    ProgressOption::WithPalette(name.into())
}

/// Sets the number of iterations the bar is tracking.
///
/// Must be positive; zero makes [`new`] fail with
/// [`Error::InvalidConfiguration`].
///
/// # Examples
///
/// ```rust
/// use notebook_progress::display::MemorySurface;
/// use notebook_progress::progress::{self, with_iterations};
///
/// let bar = progress::new(MemorySurface::new(), &[with_iterations(250)])?;
/// assert_eq!(bar.iterations(), 250);
/// # Ok::<(), notebook_progress::Error>(())
/// ```
pub fn with_iterations(n: usize) -> ProgressOption {
    ProgressOption::WithIterations(n)
}

/// The progress bar widget.
///
/// A `Model` owns its color ramp (one color per tracked iteration), a
/// process-unique identifier scoping everything it emits, and the injected
/// [`DisplaySurface`] it renders through. It is created once per tracked
/// loop and mutated only by sequential [`advance`](Model::advance) calls
/// from the owning loop; `advance` takes `&mut self`, so concurrent mutation
/// of one bar is ruled out by ownership. There is no teardown: when the
/// owning scope ends, the on-page element simply stops receiving updates.
#[derive(Debug)]
pub struct Model<S: DisplaySurface> {
    /// An identifier scoping markup and updates to this bar, so several bars
    /// can share a page without colliding.
    id: String,

    ramp: ColorRamp,
    num_iterations: usize,

    /// Percentage contributed by one iteration, fixed at construction.
    step_weight: f64,

    /// Advance calls made so far. Never decremented.
    loop_count: usize,

    /// Last percentage actually pushed to the display, used to suppress
    /// redundant updates.
    last_rendered_percent: u32,

    surface: S,
}

/// Creates a progress bar and mounts it on the given display surface.
///
/// Builds the color ramp (sized to the iteration count), draws a fresh
/// 128-bit random identifier, and emits the one-time mount payload through
/// `surface`. The bar starts at zero completed iterations.
///
/// # Defaults
///
/// - **Palette**: `"RdYlGn"`, a diverging red-yellow-green ramp
/// - **Iterations**: 100
///
/// # Errors
///
/// [`Error::PaletteNotFound`] for an unregistered palette name,
/// [`Error::InvalidConfiguration`] for a zero iteration count, and
/// [`Error::Surface`] when the display surface rejects the mount payload.
///
/// # Examples
///
/// ```rust
/// use notebook_progress::display::MemorySurface;
/// use notebook_progress::progress::{self, with_iterations, with_palette};
///
/// let bar = progress::new(
///     MemorySurface::new(),
///     &[with_palette("coolwarm"), with_iterations(50)],
/// )?;
///
/// // Exactly one mount, before any update.
/// assert_eq!(bar.surface().mounts().count(), 1);
/// assert_eq!(bar.surface().updates().count(), 0);
/// # Ok::<(), notebook_progress::Error>(())
/// ```
pub fn new<S: DisplaySurface>(surface: S, opts: &[ProgressOption]) -> Result<Model<S>> {
    let mut cfg = Config {
        palette: DEFAULT_PALETTE.to_string(),
        iterations: DEFAULT_ITERATIONS,
    };
    for opt in opts {
        opt.apply(&mut cfg);
    }

    if cfg.iterations == 0 {
        return Err(Error::InvalidConfiguration {
            iterations: cfg.iterations,
        });
    }
    let ramp = ColorRamp::new(&cfg.palette, cfg.iterations)?;

    let mut model = Model {
        id: Uuid::new_v4().to_string(),
        ramp,
        num_iterations: cfg.iterations,
        step_weight: 100.0 / cfg.iterations as f64,
        loop_count: 0,
        last_rendered_percent: 0,
        surface,
    };

    debug!(
        "mounting progress bar {} ({} over {} iterations)",
        model.id, cfg.palette, cfg.iterations
    );
    let payload = MountPayload {
        id: model.id.clone(),
        html: markup::mount_html(&model.id),
    };
    model.surface.mount(&payload)?;

    Ok(model)
}

impl<S: DisplaySurface> Model<S> {
    /// Advances the bar by one completed unit of work.
    ///
    /// Computes the completion percentage from the iterations completed
    /// before this call; when the percentage moved past the last rendered
    /// one, pushes an update that sets the bar width to `percent + 1` (so a
    /// started bar never reads as empty) and its color to the ramp entry for
    /// this iteration. The true final call is pinned to 99 percent, so
    /// integer truncation on the last step can never overshoot the bar.
    /// Calls that do not move the displayed percentage emit nothing.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when called more often than the configured
    /// iteration count, [`Error::Surface`] when the display surface rejects
    /// the update payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use notebook_progress::display::MemorySurface;
    /// use notebook_progress::progress::{self, with_iterations};
    ///
    /// let mut bar = progress::new(MemorySurface::new(), &[with_iterations(4)])?;
    /// for _ in 0..4 {
    ///     bar.advance()?;
    /// }
    ///
    /// // Percentages 0, 25, 50 were computed along the way; the final call
    /// // pins the bar at 99.
    /// assert_eq!(bar.percent(), 99);
    ///
    /// // The zero-percent step rendered nothing, the rest rendered once each.
    /// assert_eq!(bar.surface().updates().count(), 3);
    /// # Ok::<(), notebook_progress::Error>(())
    /// ```
    pub fn advance(&mut self) -> Result<()> {
        if self.loop_count >= self.num_iterations {
            return Err(Error::IndexOutOfRange {
                index: self.loop_count,
                len: self.ramp.len(),
            });
        }

        let mut percent = (self.loop_count as f64 * self.step_weight) as u32;
        if self.loop_count == self.num_iterations - 1 {
            percent = 99;
        }
        let ramp_index = self.loop_count;
        self.loop_count += 1;

        if percent > self.last_rendered_percent {
            let color = self.ramp.get(ramp_index).ok_or(Error::IndexOutOfRange {
                index: ramp_index,
                len: self.ramp.len(),
            })?;
            trace!(
                "progress bar {}: {}% (width {}, color #{})",
                self.id,
                percent,
                percent + 1,
                color
            );
            let payload = UpdatePayload {
                id: self.id.clone(),
                script: markup::update_script(&self.id, percent + 1, color),
            };
            self.surface.update(&payload)?;
        }
        self.last_rendered_percent = percent;

        Ok(())
    }

    /// The identifier scoping this bar's markup and updates.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The last completion percentage pushed through the rendering gate.
    pub fn percent(&self) -> u32 {
        self.last_rendered_percent
    }

    /// The number of iterations this bar is tracking.
    pub fn iterations(&self) -> usize {
        self.num_iterations
    }

    /// Read access to the injected display surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the widget, handing back the injected display surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{DisplayEvent, MemorySurface};
    use std::io;

    fn bar(opts: &[ProgressOption]) -> Model<MemorySurface> {
        new(MemorySurface::new(), opts).unwrap()
    }

    fn emitted_widths(surface: &MemorySurface) -> Vec<u32> {
        surface
            .updates()
            .map(|u| {
                let start = u.script.find("width = \"").unwrap() + "width = \"".len();
                let len = u.script[start..].find('%').unwrap();
                u.script[start..start + len].parse().unwrap()
            })
            .collect()
    }

    #[test]
    fn test_new_with_no_options() {
        let bar = bar(&[]);
        assert_eq!(bar.iterations(), DEFAULT_ITERATIONS);
        assert_eq!(bar.ramp.len(), DEFAULT_ITERATIONS);
        assert_eq!(bar.step_weight, 1.0);
        assert_eq!(bar.percent(), 0);
        // Default palette is the diverging red-yellow-green ramp.
        assert_eq!(bar.ramp.get(0), Some("a50026"));
    }

    #[test]
    fn test_new_with_options() {
        let bar = bar(&[with_palette("winter"), with_iterations(50)]);
        assert_eq!(bar.iterations(), 50);
        assert_eq!(bar.ramp.len(), 50);
        assert_eq!(bar.step_weight, 2.0);
        assert_eq!(bar.ramp.get(0), Some("0000ff"));
    }

    #[test]
    fn test_unknown_palette_errors() {
        let err = new(MemorySurface::new(), &[with_palette("nope")]).unwrap_err();
        assert!(matches!(err, Error::PaletteNotFound { name } if name == "nope"));
    }

    #[test]
    fn test_zero_iterations_errors() {
        let err = new(MemorySurface::new(), &[with_iterations(0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { iterations: 0 }));
    }

    #[test]
    fn test_mount_emitted_once_before_updates() {
        let mut bar = bar(&[with_iterations(10)]);
        for _ in 0..10 {
            bar.advance().unwrap();
        }

        let events = bar.surface().events();
        assert!(matches!(events[0], DisplayEvent::Mount(_)));
        assert_eq!(bar.surface().mounts().count(), 1);
    }

    #[test]
    fn test_mount_markup_is_scoped_by_id() {
        let bar = bar(&[]);
        let mount = bar.surface().mounts().next().unwrap();
        assert_eq!(mount.id, bar.id());
        assert!(mount.html.contains(bar.id()));
    }

    #[test]
    fn test_unique_ids() {
        let a = bar(&[]);
        let b = bar(&[]);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_percent_sequence_for_three_iterations() {
        let mut bar = bar(&[with_iterations(3)]);
        let mut percents = Vec::new();
        for _ in 0..3 {
            bar.advance().unwrap();
            percents.push(bar.percent());
        }
        assert_eq!(percents, vec![0, 33, 99]);
    }

    #[test]
    fn test_final_call_is_pinned_to_99() {
        for n in [1, 2, 3, 4, 100, 250] {
            let mut bar = bar(&[with_iterations(n)]);
            for _ in 0..n {
                bar.advance().unwrap();
            }
            assert_eq!(bar.percent(), 99, "final percent for {n} iterations");
        }
    }

    #[test]
    fn test_emitted_widths_for_four_iterations() {
        let mut bar = bar(&[with_iterations(4)]);
        for _ in 0..4 {
            bar.advance().unwrap();
        }

        // Computed percents 0, 25, 50, then the pinned 99; the zero-percent
        // step does not pass the rendering gate.
        assert_eq!(emitted_widths(bar.surface()), vec![26, 51, 100]);
    }

    #[test]
    fn test_emitted_colors_follow_the_ramp() {
        let mut bar = bar(&[with_iterations(4)]);
        for _ in 0..4 {
            bar.advance().unwrap();
        }

        let ramp = ColorRamp::new("RdYlGn", 4).unwrap();
        let colors: Vec<String> = bar
            .surface()
            .updates()
            .map(|u| {
                let start = u.script.find("\"#").unwrap() + 2;
                u.script[start..start + 6].to_string()
            })
            .collect();
        // Iterations 1, 2, 3 rendered; iteration 0 was gated out.
        let expected: Vec<&str> = (1..4).map(|i| ramp.get(i).unwrap()).collect();
        assert_eq!(colors, expected);
    }

    #[test]
    fn test_single_iteration_bar() {
        let mut bar = bar(&[with_iterations(1)]);
        bar.advance().unwrap();

        assert_eq!(bar.percent(), 99);
        assert_eq!(emitted_widths(bar.surface()), vec![100]);
    }

    #[test]
    fn test_repeated_percent_is_rendered_once() {
        // With 200 iterations the first two calls both compute 0 percent and
        // the third computes 1; only the third renders.
        let mut bar = bar(&[with_iterations(200)]);
        bar.advance().unwrap();
        bar.advance().unwrap();
        assert_eq!(bar.surface().updates().count(), 0);

        bar.advance().unwrap();
        assert_eq!(bar.surface().updates().count(), 1);
        assert_eq!(emitted_widths(bar.surface()), vec![2]);
    }

    #[test]
    fn test_emissions_are_strictly_increasing() {
        let mut bar = bar(&[with_iterations(50)]);
        for _ in 0..50 {
            bar.advance().unwrap();
        }

        let widths = emitted_widths(bar.surface());
        assert!(widths.len() <= 50);
        assert!(widths.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(widths.last(), Some(&100));
    }

    #[test]
    fn test_advancing_past_the_end_errors() {
        let mut bar = bar(&[with_iterations(2)]);
        bar.advance().unwrap();
        bar.advance().unwrap();

        let err = bar.advance().unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[derive(Debug)]
    struct RejectingSurface;

    impl DisplaySurface for RejectingSurface {
        fn mount(&mut self, _payload: &MountPayload) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn update(&mut self, _payload: &UpdatePayload) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_surface_rejection_surfaces_as_error() {
        let err = new(RejectingSurface, &[]).unwrap_err();
        assert!(matches!(err, Error::Surface(_)));
    }
}
