//! Circle of fifths layout and hit-testing
//!
//! Twelve segments run clockwise from the top. The outer ring holds the major
//! keys, the inner ring their relative minors. Each step clockwise adds a sharp
//! (or drops a flat). Drawing happens in the browser; this module owns the
//! labels, radii and the click-to-segment arithmetic.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::models::MajorKey;

/// Canvas size the radii are expressed against
pub const REFERENCE_SIZE: f64 = 600.0;
const OUTER_RADIUS: f64 = 290.0;
const MIDDLE_RADIUS: f64 = 200.0;
const INNER_RADIUS: f64 = 70.0;

const SEGMENT_COUNT: usize = 12;
const SEGMENT_DEGREES: f64 = 30.0;

/// Viewports at or below this width use the compact canvas
const MOBILE_BREAKPOINT: f64 = 640.0;
const MOBILE_MAX_SIZE: f64 = 400.0;

/// One wedge of the circle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CircleSegment {
    /// "G", or "B/C♭" where two spellings share the wedge
    pub major: String,
    /// Relative minor, e.g. "Em"
    pub minor: String,
    /// Key signature of the major label, e.g. "1 sharp"
    pub signature: String,
}

// Primary spelling first; the flat side leads from the sixth wedge on
const LAYOUT: [(MajorKey, Option<MajorKey>); SEGMENT_COUNT] = [
    (MajorKey::G, None),
    (MajorKey::D, None),
    (MajorKey::A, None),
    (MajorKey::E, None),
    (MajorKey::B, Some(MajorKey::Cb)),
    (MajorKey::Gb, Some(MajorKey::Fs)),
    (MajorKey::Db, Some(MajorKey::Cs)),
    (MajorKey::Ab, None),
    (MajorKey::Eb, None),
    (MajorKey::Bb, None),
    (MajorKey::F, None),
    (MajorKey::C, None),
];

static SEGMENTS: Lazy<Vec<CircleSegment>> = Lazy::new(|| {
    LAYOUT
        .iter()
        .map(|(primary, twin)| {
            let (major, signature) = match twin {
                Some(twin) => (
                    format!("{}/{}", primary, twin),
                    format!("{}/{}", primary.signature(), twin.signature()),
                ),
                None => (primary.name().to_string(), primary.signature().descriptor()),
            };
            CircleSegment {
                minor: format!("{}m", primary.relative_minor()),
                major,
                signature,
            }
        })
        .collect()
});

/// The twelve wedges in drawing order
pub fn segments() -> &'static [CircleSegment] {
    &SEGMENTS
}

/// Which band of the circle a point falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ring {
    Center,
    Minor,
    Major,
    Outside,
}

/// Result of mapping a canvas point onto the circle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleHit {
    /// Wedge counted from the top boundary, 0..12
    pub segment: u8,
    pub ring: Ring,
    /// Clockwise angle from the top, degrees in [0, 360)
    pub angle: f64,
    /// Label under the point, if the point is on a key ring
    pub key: Option<String>,
}

/// Canvas dimensions; radii scale with the size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleGeometry {
    pub size: f64,
}

impl Default for CircleGeometry {
    fn default() -> Self {
        Self { size: REFERENCE_SIZE }
    }
}

impl CircleGeometry {
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    /// Pick the canvas size for a browser viewport width
    pub fn responsive(viewport_width: f64) -> Self {
        if viewport_width <= MOBILE_BREAKPOINT {
            Self::new((viewport_width * 0.9).min(MOBILE_MAX_SIZE))
        } else {
            Self::default()
        }
    }

    pub fn scale(&self) -> f64 {
        self.size / REFERENCE_SIZE
    }

    pub fn center(&self) -> (f64, f64) {
        (self.size / 2.0, self.size / 2.0)
    }

    pub fn outer_radius(&self) -> f64 {
        OUTER_RADIUS * self.scale()
    }

    pub fn middle_radius(&self) -> f64 {
        MIDDLE_RADIUS * self.scale()
    }

    pub fn inner_radius(&self) -> f64 {
        INNER_RADIUS * self.scale()
    }

    pub fn ring_at(&self, distance: f64) -> Ring {
        if distance < self.inner_radius() {
            Ring::Center
        } else if distance < self.middle_radius() {
            Ring::Minor
        } else if distance < self.outer_radius() {
            Ring::Major
        } else {
            Ring::Outside
        }
    }

    /// Map a point in canvas coordinates to ring, wedge and label
    pub fn hit_test(&self, x: f64, y: f64) -> CircleHit {
        let (cx, cy) = self.center();
        let dx = x - cx;
        let dy = y - cy;
        let distance = dx.hypot(dy);

        // 0 at the top, increasing clockwise
        let angle = (dy.atan2(dx).to_degrees() + 90.0).rem_euclid(360.0);
        let segment = (((angle + SEGMENT_DEGREES / 2.0) / SEGMENT_DEGREES).floor() as usize) % SEGMENT_COUNT;

        let ring = self.ring_at(distance);
        // Wedge 0 straddles the top and holds the last label (C)
        let label_index = (segment + SEGMENT_COUNT - 1) % SEGMENT_COUNT;
        let key = segments().get(label_index).and_then(|s| match ring {
            Ring::Major => Some(s.major.clone()),
            Ring::Minor => Some(s.minor.clone()),
            Ring::Center | Ring::Outside => None,
        });

        log::trace!("hit ({:.1}, {:.1}): segment {} ring {:?}", x, y, segment, ring);

        CircleHit {
            segment: segment as u8,
            ring,
            angle,
            key,
        }
    }

    /// Text anchor for label `index` on a key ring
    pub fn label_anchor(&self, index: usize, ring: Ring) -> Option<(f64, f64)> {
        let radius = match ring {
            Ring::Major => (self.middle_radius() + self.outer_radius()) / 2.0,
            Ring::Minor => (self.inner_radius() + self.middle_radius()) / 2.0,
            Ring::Center | Ring::Outside => return None,
        };
        let degrees = SEGMENT_DEGREES + SEGMENT_DEGREES * (index % SEGMENT_COUNT) as f64;
        let radians = (degrees - 90.0).to_radians();
        let (cx, cy) = self.center();
        Some((cx + radius * radians.cos(), cy + radius * radians.sin()))
    }
}
