//! Ten-sided die (pentagonal trapezohedron)
//!
//! Odd faces sit on the lower cap, even faces on the upper cap, each pair
//! rotated 72 degrees from the previous one.

use super::layout::{face_markup, stylesheet, FaceLayout, Transform};

const RADIUS: f64 = 0.17;
const LIFT: f64 = 0.0348;
const TILT: f64 = 45.0;

pub fn faces() -> Vec<FaceLayout> {
    let mut faces = Vec::with_capacity(10);
    for pair in 1..=5 {
        let yaw = 72.0 * pair as f64;

        // Odd face, hanging from the lower cap
        faces.push(FaceLayout {
            orientation: vec![
                Transform::RotateZ(0.0),
                Transform::RotateX(-(180.0 + TILT)),
                Transform::RotateY(-yaw),
                Transform::Spin,
            ],
            placement: vec![
                Transform::RotateY(yaw),
                Transform::TranslateZ(-RADIUS),
                Transform::TranslateY(-LIFT),
                Transform::RotateZ(180.0),
                Transform::RotateY(180.0),
                Transform::RotateX(TILT),
            ],
            top: Some(0.5),
        });

        // Even face on the upper cap; the last one closes the ring at 0deg
        let yaw = yaw % 360.0;
        faces.push(FaceLayout {
            orientation: vec![
                Transform::RotateZ(0.0),
                Transform::RotateX(-TILT),
                Transform::RotateY(yaw),
                Transform::Spin,
            ],
            placement: vec![
                Transform::RotateY(-yaw),
                Transform::TranslateZ(RADIUS),
                Transform::TranslateY(LIFT),
                Transform::RotateX(TILT),
            ],
            top: None,
        });
    }
    faces
}

pub fn html() -> String {
    face_markup(10)
}

pub fn css() -> String {
    let rules = "#die {
  scale: 1.2;
}
#die .face {
  left: 50%;
  top: 0;
  margin: 0 calc(var(--die-size) * -0.25);
  border-left: calc(var(--die-size) * 0.26) solid transparent;
  border-right: calc(var(--die-size) * 0.26) solid transparent;
  border-bottom: calc(var(--die-size) * 0.5) solid var(--face-color);
}
#die .face::before {
  top: calc(var(--die-size) * 0.125);
  left: calc(var(--die-size) * -0.26);
  font-size: calc(var(--die-size) * 0.25);
  line-height: calc(var(--die-size) * 0.5);
  width: calc(var(--die-size) * 0.52);
  height: calc(var(--die-size) * 0.5);
}
#die .face::after {
  content: \"\";
  position: absolute;
  bottom: calc(var(--die-size) * -0.62);
  left: calc(var(--die-size) * -0.26);
  border-left: calc(var(--die-size) * 0.26) solid transparent;
  border-right: calc(var(--die-size) * 0.26) solid transparent;
  border-top: calc(var(--die-size) * 0.12) solid var(--face-color);
}
";
    stylesheet(rules, &faces())
}
