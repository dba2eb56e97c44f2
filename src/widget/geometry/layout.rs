//! Shared building blocks for die markup and stylesheets
//!
//! A die is a `#die` element holding one `.face` element per face. Each face
//! gets a placement transform (where it sits on the solid) and an orientation
//! transform for `#die[data-face="N"]` (how to turn the whole die so face N
//! points at the viewer). All lengths are fractions of `--die-size`.

use std::fmt;

/// One CSS transform function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    RotateX(f64),
    RotateY(f64),
    RotateZ(f64),
    TranslateY(f64),
    TranslateZ(f64),
    /// `rotateZ(var(--total-rolls))`, the whole-turn offset that keeps repeat faces animating
    Spin,
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::RotateX(deg) => write!(f, "rotateX({}deg)", num(*deg)),
            Transform::RotateY(deg) => write!(f, "rotateY({}deg)", num(*deg)),
            Transform::RotateZ(deg) => write!(f, "rotateZ({}deg)", num(*deg)),
            Transform::TranslateY(len) => write!(f, "translateY({})", size(*len)),
            Transform::TranslateZ(len) => write!(f, "translateZ({})", size(*len)),
            Transform::Spin => f.write_str("rotateZ(var(--total-rolls))"),
        }
    }
}

/// Placement and orientation of a single face.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceLayout {
    /// Transform of `#die` when this face is shown
    pub orientation: Vec<Transform>,
    /// Transform of the face element itself
    pub placement: Vec<Transform>,
    /// Optional `top` override for the face element, as a fraction of the die size
    pub top: Option<f64>,
}

impl FaceLayout {
    /// Face whose outward normal has the given yaw (around Y) and pitch (around X),
    /// pushed `radius` out from the die center.
    ///
    /// The orientation is the inverse rotation, so the die turns that normal
    /// toward the viewer.
    pub fn facing(yaw: f64, pitch: f64, radius: f64) -> Self {
        Self {
            orientation: vec![
                Transform::RotateZ(0.0),
                Transform::RotateX(-pitch),
                Transform::RotateY(-yaw),
                Transform::Spin,
            ],
            placement: vec![
                Transform::RotateY(yaw),
                Transform::RotateX(pitch),
                Transform::TranslateZ(radius),
            ],
            top: None,
        }
    }

    /// Turn the face within its own plane (e.g. a triangle pointing down). The
    /// orientation is compensated so the label still reads upright when shown.
    pub fn turned(mut self, deg: f64) -> Self {
        self.placement.push(Transform::RotateZ(deg));
        if let Some(Transform::RotateZ(z)) = self.orientation.first_mut() {
            *z -= deg;
        }
        self
    }
}

/// Sort `(label, layout)` pairs into face order 1..=N.
pub fn ordered(mut labelled: Vec<(u32, FaceLayout)>) -> Vec<FaceLayout> {
    labelled.sort_by_key(|(label, _)| *label);
    labelled.into_iter().map(|(_, face)| face).collect()
}

/// Trim float noise and negative zero so the CSS stays stable.
pub(crate) fn num(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0 + 0.0
}

/// A length expressed as a fraction of the rendered die size.
pub(crate) fn size(fraction: f64) -> String {
    format!("calc(var(--die-size) * {})", num(fraction))
}

fn join(transforms: &[Transform]) -> String {
    transforms
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `<div id="die">` with `face_count` numbered face elements.
pub fn face_markup(face_count: u32) -> String {
    let mut html = String::from("<div id=\"die\">\n");
    for n in 1..=face_count {
        html.push_str(&format!("  <div class=\"face face-{n}\"></div>\n"));
    }
    html.push_str("</div>\n");
    html
}

const DIE_RULES: &str = "#die {
  position: relative;
  width: var(--die-size);
  height: var(--die-size);
  transform-style: preserve-3d;
  transition: transform var(--roll-time) ease-out;
  cursor: pointer;
  counter-reset: steps;
}
#die .face {
  position: absolute;
  transform-style: preserve-3d;
  counter-increment: steps;
}
#die .face:nth-child(odd) {
  --face-color: var(--die-color-odd);
}
#die .face:nth-child(even) {
  --face-color: var(--die-color-even);
}
#die .face::before {
  content: counter(steps);
  position: absolute;
  color: var(--dot-color);
  text-align: center;
}
";

/// Full `<style>` block: shared rules, the shape's own rules, then one
/// orientation and one placement rule per face.
pub fn stylesheet(shape_rules: &str, faces: &[FaceLayout]) -> String {
    let mut css = String::from("<style>\n");
    css.push_str(DIE_RULES);
    css.push_str(shape_rules);

    for (i, face) in faces.iter().enumerate() {
        let n = i + 1;
        css.push_str(&format!(
            "#die[data-face=\"{n}\"] {{\n  transform: {};\n}}\n",
            join(&face.orientation)
        ));
        css.push_str(&format!("#die .face.face-{n} {{\n"));
        if let Some(top) = face.top {
            css.push_str(&format!("  top: {};\n", size(top)));
        }
        css.push_str(&format!("  transform: {};\n}}\n", join(&face.placement)));
    }

    css.push_str("</style>\n");
    css
}

/// Rules for equilateral triangle faces built from borders. `edge` is the
/// triangle side as a fraction of the die size.
pub fn triangle_rules(edge: f64) -> String {
    let half = edge / 2.0;
    let height = edge * 3f64.sqrt() / 2.0;
    // The centroid sits two thirds of the way down from the apex
    let centroid = height * 2.0 / 3.0;
    format!(
        "#die .face {{
  left: 50%;
  top: 50%;
  width: 0;
  height: 0;
  margin-left: calc(var(--die-size) * -{half});
  margin-top: calc(var(--die-size) * -{centroid});
  border-left: {half_len} solid transparent;
  border-right: {half_len} solid transparent;
  border-bottom: {height_len} solid var(--face-color);
  transform-origin: 50% 66.667%;
}}
#die .face::before {{
  left: calc(var(--die-size) * -{half});
  top: calc(var(--die-size) * {label_top});
  width: {edge_len};
  font-size: {font};
  line-height: {line};
}}
",
        half = num(half),
        centroid = num(centroid),
        half_len = size(half),
        height_len = size(height),
        label_top = num(height * 0.3),
        edge_len = size(edge),
        font = size(edge * 0.35),
        line = size(height * 0.6),
    )
}
