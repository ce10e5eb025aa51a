//! Named color palettes and the ramps sampled from them.
//!
//! A palette is an ordered list of control stops; a [`ColorRamp`] is a fixed
//! number of colors sampled evenly across those stops, one per tracked
//! iteration. Ramp generation is a pure function of `(name, count)`, so the
//! widget can index into it positionally as the loop advances.
//!
//! The registered names mirror the diverging and sequential ramps commonly
//! shipped by plotting libraries (`"RdYlGn"`, `"viridis"`, `"winter"`, ...),
//! with their published anchor values as stops.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use palette::Srgb;
use std::collections::BTreeMap;

// Diverging ramps, ColorBrewer 11-class anchors.
const RD_YL_GN: &[(u8, u8, u8)] = &[
    (165, 0, 38),
    (215, 48, 39),
    (244, 109, 67),
    (253, 174, 97),
    (254, 224, 139),
    (255, 255, 191),
    (217, 239, 139),
    (166, 217, 106),
    (102, 189, 99),
    (26, 152, 80),
    (0, 104, 55),
];

const RD_YL_BU: &[(u8, u8, u8)] = &[
    (165, 0, 38),
    (215, 48, 39),
    (244, 109, 67),
    (253, 174, 97),
    (254, 224, 144),
    (255, 255, 191),
    (224, 243, 248),
    (171, 217, 233),
    (116, 173, 209),
    (69, 117, 180),
    (49, 54, 149),
];

const COOLWARM: &[(u8, u8, u8)] = &[
    (59, 76, 192),
    (141, 176, 254),
    (221, 221, 221),
    (244, 154, 123),
    (180, 4, 38),
];

// Perceptually uniform, 10 anchors.
const VIRIDIS: &[(u8, u8, u8)] = &[
    (68, 1, 84),
    (72, 40, 120),
    (62, 73, 137),
    (49, 104, 142),
    (38, 130, 142),
    (31, 158, 137),
    (53, 183, 121),
    (110, 206, 88),
    (181, 222, 43),
    (253, 231, 37),
];

// Linear two-stop ramps.
const WINTER: &[(u8, u8, u8)] = &[(0, 0, 255), (0, 255, 128)];
const SUMMER: &[(u8, u8, u8)] = &[(0, 128, 102), (255, 255, 102)];
const SPRING: &[(u8, u8, u8)] = &[(255, 0, 255), (255, 255, 0)];
const AUTUMN: &[(u8, u8, u8)] = &[(255, 0, 0), (255, 255, 0)];
const COOL: &[(u8, u8, u8)] = &[(0, 255, 255), (255, 0, 255)];

// Sequential ramps, ColorBrewer 9-class anchors.
const BLUES: &[(u8, u8, u8)] = &[
    (247, 251, 255),
    (222, 235, 247),
    (198, 219, 239),
    (158, 202, 225),
    (107, 174, 214),
    (66, 146, 198),
    (33, 113, 181),
    (8, 81, 156),
    (8, 48, 107),
];

const GREENS: &[(u8, u8, u8)] = &[
    (247, 252, 245),
    (229, 245, 224),
    (199, 233, 192),
    (161, 217, 155),
    (116, 196, 118),
    (65, 171, 93),
    (35, 139, 69),
    (0, 109, 44),
    (0, 68, 27),
];

static PALETTES: Lazy<BTreeMap<&'static str, &'static [(u8, u8, u8)]>> = Lazy::new(|| {
    BTreeMap::from([
        ("RdYlGn", RD_YL_GN),
        ("RdYlBu", RD_YL_BU),
        ("coolwarm", COOLWARM),
        ("viridis", VIRIDIS),
        ("winter", WINTER),
        ("summer", SUMMER),
        ("spring", SPRING),
        ("autumn", AUTUMN),
        ("cool", COOL),
        ("Blues", BLUES),
        ("Greens", GREENS),
    ])
});

/// Names of all registered palettes, in stable order.
pub fn names() -> Vec<&'static str> {
    PALETTES.keys().copied().collect()
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Samples `count` colors evenly across the named palette.
///
/// Returns normalized `(r, g, b)` channel triples in `[0, 1]^3`, linearly
/// interpolated between the palette's control stops. Identical inputs always
/// produce the identical sequence.
///
/// # Errors
///
/// [`Error::PaletteNotFound`] for an unregistered name,
/// [`Error::InvalidConfiguration`] when `count` is zero.
pub fn sample(name: &str, count: usize) -> Result<Vec<(f64, f64, f64)>> {
    if count == 0 {
        return Err(Error::InvalidConfiguration { iterations: count });
    }
    let stops = PALETTES.get(name).ok_or_else(|| Error::PaletteNotFound {
        name: name.to_string(),
    })?;

    let last = stops.len() - 1;
    let mut colors = Vec::with_capacity(count);
    for i in 0..count {
        let t = if count == 1 {
            0.0
        } else {
            i as f64 / (count - 1) as f64
        };
        let pos = t * last as f64;
        let lo = pos.floor() as usize;
        let hi = (lo + 1).min(last);
        let frac = pos - lo as f64;

        let (r0, g0, b0) = stops[lo];
        let (r1, g1, b1) = stops[hi];
        colors.push((
            lerp(f64::from(r0) / 255.0, f64::from(r1) / 255.0, frac),
            lerp(f64::from(g0) / 255.0, f64::from(g1) / 255.0, frac),
            lerp(f64::from(b0) / 255.0, f64::from(b1) / 255.0, frac),
        ));
    }
    Ok(colors)
}

/// An ordered sequence of colors sampled from a named palette, one per
/// tracked iteration, each encoded as a 6-hex-digit lowercase RGB string
/// (e.g. `"ff00aa"`, no leading `#`).
///
/// Immutable once built; the progress widget indexes into it positionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRamp {
    colors: Vec<String>,
}

impl ColorRamp {
    /// Builds a ramp of exactly `count` colors from the named palette.
    ///
    /// # Errors
    ///
    /// Same conditions as [`sample`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use notebook_progress::palette::ColorRamp;
    ///
    /// let ramp = ColorRamp::new("RdYlGn", 100)?;
    /// assert_eq!(ramp.len(), 100);
    /// assert_eq!(ramp.get(0), Some("a50026"));
    /// # Ok::<(), notebook_progress::Error>(())
    /// ```
    pub fn new(name: &str, count: usize) -> Result<Self> {
        let colors = sample(name, count)?
            .into_iter()
            .map(|(r, g, b)| {
                let bytes: Srgb<u8> = Srgb::new(r, g, b).into_format();
                format!("{:02x}{:02x}{:02x}", bytes.red, bytes.green, bytes.blue)
            })
            .collect();
        Ok(Self { colors })
    }

    /// Number of colors in the ramp.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the ramp holds no colors. Never true for a built ramp.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at `index`, or `None` past the end of the ramp.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(s: &str) -> bool {
        s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    }

    #[test]
    fn test_ramp_has_requested_length() {
        for n in [1, 2, 3, 50, 100, 250] {
            let ramp = ColorRamp::new("RdYlGn", n).unwrap();
            assert_eq!(ramp.len(), n);
            assert!(!ramp.is_empty());
        }
    }

    #[test]
    fn test_ramp_entries_are_lowercase_hex() {
        for name in names() {
            let ramp = ColorRamp::new(name, 37).unwrap();
            for i in 0..ramp.len() {
                let color = ramp.get(i).unwrap();
                assert!(is_hex_color(color), "bad entry {color:?} in {name}");
            }
        }
    }

    #[test]
    fn test_ramp_is_deterministic() {
        let a = ColorRamp::new("viridis", 100).unwrap();
        let b = ColorRamp::new("viridis", 100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ramp_spans_palette_endpoints() {
        let ramp = ColorRamp::new("RdYlGn", 100).unwrap();
        assert_eq!(ramp.get(0), Some("a50026"));
        assert_eq!(ramp.get(99), Some("006837"));

        let ramp = ColorRamp::new("winter", 10).unwrap();
        assert_eq!(ramp.get(0), Some("0000ff"));
        assert_eq!(ramp.get(9), Some("00ff80"));
    }

    #[test]
    fn test_single_color_ramp_is_first_stop() {
        let ramp = ColorRamp::new("winter", 1).unwrap();
        assert_eq!(ramp.get(0), Some("0000ff"));
    }

    #[test]
    fn test_get_past_end_is_none() {
        let ramp = ColorRamp::new("winter", 5).unwrap();
        assert_eq!(ramp.get(5), None);
    }

    #[test]
    fn test_unknown_palette_errors() {
        let err = ColorRamp::new("no-such-palette", 10).unwrap_err();
        assert!(matches!(err, Error::PaletteNotFound { name } if name == "no-such-palette"));
    }

    #[test]
    fn test_zero_count_errors() {
        let err = ColorRamp::new("RdYlGn", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { iterations: 0 }));
    }

    #[test]
    fn test_sample_channels_stay_normalized() {
        for (r, g, b) in sample("coolwarm", 173).unwrap() {
            for v in [r, g, b] {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_sample_interpolates_between_stops() {
        // Midpoint of a two-stop ramp sits halfway between the stops.
        let colors = sample("winter", 3).unwrap();
        let (r, g, b) = colors[1];
        assert!(r.abs() < 1e-9);
        assert!((g - 0.5).abs() < 1e-3);
        assert!((b - (255.0 + 128.0) / (2.0 * 255.0)).abs() < 1e-3);
    }

    #[test]
    fn test_names_contains_default_palette() {
        assert!(names().contains(&"RdYlGn"));
    }
}
