use super::layout::{face_markup, stylesheet, FaceLayout};

/// Cube side as a fraction of the die size
const SIDE: f64 = 0.7;

/// (yaw, pitch) per face, in face order. Opposite faces sum to 7.
const FACES: [(f64, f64); 6] = [
    (0.0, 0.0),
    (0.0, 90.0),
    (90.0, 0.0),
    (-90.0, 0.0),
    (0.0, -90.0),
    (180.0, 0.0),
];

pub fn faces() -> Vec<FaceLayout> {
    FACES
        .iter()
        .map(|&(yaw, pitch)| FaceLayout::facing(yaw, pitch, SIDE / 2.0))
        .collect()
}

pub fn html() -> String {
    face_markup(6)
}

pub fn css() -> String {
    let rules = format!(
        "#die .face {{
  left: 50%;
  top: 50%;
  width: calc(var(--die-size) * {SIDE});
  height: calc(var(--die-size) * {SIDE});
  margin: calc(var(--die-size) * -{half});
  background: var(--face-color);
  border-radius: calc(var(--die-size) * 0.06);
  box-shadow: inset 0 0 calc(var(--die-size) * 0.08) rgba(0, 0, 0, 0.35);
}}
#die .face::before {{
  left: 0;
  top: 0;
  width: 100%;
  font-size: calc(var(--die-size) * 0.35);
  line-height: calc(var(--die-size) * {SIDE});
}}
",
        half = SIDE / 2.0,
    );
    stylesheet(&rules, &faces())
}
