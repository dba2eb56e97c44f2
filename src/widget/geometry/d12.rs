//! Twelve-sided die (dodecahedron)
//!
//! Face 1 on top, 12 on the bottom, two rings of five in between. Opposite
//! faces sum to 13.

use super::layout::{face_markup, num, ordered, size, stylesheet, FaceLayout};

/// Pentagon edge as a fraction of the die size
const EDGE: f64 = 0.35;
/// Inradius of a dodecahedron per unit edge
const INRADIUS_RATIO: f64 = 1.1135;
/// Pitch of the ring faces: 90deg minus the dihedral complement
const RING_PITCH: f64 = 26.5651;

pub fn faces() -> Vec<FaceLayout> {
    let radius = EDGE * INRADIUS_RATIO;
    let mut labelled = Vec::with_capacity(12);

    labelled.push((1, FaceLayout::facing(0.0, 90.0, radius)));
    labelled.push((12, FaceLayout::facing(0.0, -90.0, radius).turned(180.0)));

    for k in 0..5u32 {
        // Upper ring shares an edge with the top face, so its point hangs down
        let yaw = 72.0 * k as f64;
        labelled.push((
            2 + k,
            FaceLayout::facing(yaw, RING_PITCH, radius).turned(180.0),
        ));

        let yaw = 36.0 + 72.0 * k as f64;
        let opposite = (k + 3) % 5;
        labelled.push((11 - opposite, FaceLayout::facing(yaw, -RING_PITCH, radius)));
    }

    ordered(labelled)
}

pub fn html() -> String {
    face_markup(12)
}

pub fn css() -> String {
    let width = EDGE * 1.618;
    let height = EDGE * 1.5388;
    let circumradius = EDGE * 0.8507;
    let rules = format!(
        "#die .face {{
  left: 50%;
  top: 50%;
  width: {width_len};
  height: {height_len};
  margin-left: calc(var(--die-size) * -{half_width});
  margin-top: calc(var(--die-size) * -{circumradius});
  background: var(--face-color);
  clip-path: polygon(50% 0%, 100% 38.2%, 80.9% 100%, 19.1% 100%, 0% 38.2%);
  transform-origin: 50% {origin}%;
}}
#die .face::before {{
  left: 0;
  top: 0;
  width: 100%;
  font-size: {font};
  line-height: {line};
}}
",
        width_len = size(width),
        height_len = size(height),
        half_width = num(width / 2.0),
        circumradius = num(circumradius),
        origin = num(circumradius / height * 100.0),
        font = size(EDGE * 0.6),
        line = size(height * 1.1),
    );
    stylesheet(&rules, &faces())
}
