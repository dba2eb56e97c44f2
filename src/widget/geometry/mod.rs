//! Face geometry for each die shape family
//!
//! Every provider exposes the same two pure functions: `html` (one element per
//! face) and `css` (face placement plus one orientation rule per face value).
//! `DieShape` picks one provider from the configured maximum roll value and
//! stays fixed for the lifetime of a die.

pub mod d10;
pub mod d12;
pub mod d20;
pub mod d4_d8;
pub mod d6;
pub mod layout;

use serde::{Deserialize, Serialize};

pub use layout::{FaceLayout, Transform};

/// Styles for the element hosting the die's isolated subtree.
pub const HOST_STYLE: &str = "<style>
:host {
  position: relative;
  display: inline-block;
  font-family: arial;
}
</style>
";

/// Die geometry variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieShape {
    /// Combined four/eight-sided provider, rendering `faces` face elements
    D4D8 { faces: u32 },
    D6,
    D10,
    D12,
    D20,
}

impl DieShape {
    /// Thresholds are checked from the largest shape down; anything that isn't
    /// a d6 and has at most eight faces lands on the combined d4/d8 provider.
    pub fn for_max_roll(max_roll: u32) -> Self {
        if max_roll > 12 {
            DieShape::D20
        } else if max_roll > 10 {
            DieShape::D12
        } else if max_roll > 8 {
            DieShape::D10
        } else if max_roll == 6 {
            DieShape::D6
        } else {
            DieShape::D4D8 {
                faces: max_roll.max(1),
            }
        }
    }

    pub fn face_count(&self) -> u32 {
        match self {
            DieShape::D4D8 { faces } => *faces,
            DieShape::D6 => 6,
            DieShape::D10 => 10,
            DieShape::D12 => 12,
            DieShape::D20 => 20,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DieShape::D4D8 { faces } if d4_d8::uses_tetrahedron(*faces) => "tetrahedron",
            DieShape::D4D8 { .. } => "octahedron",
            DieShape::D6 => "cube",
            DieShape::D10 => "pentagonal trapezohedron",
            DieShape::D12 => "dodecahedron",
            DieShape::D20 => "icosahedron",
        }
    }

    pub fn faces(&self) -> Vec<FaceLayout> {
        match self {
            DieShape::D4D8 { faces } => d4_d8::faces(*faces),
            DieShape::D6 => d6::faces(),
            DieShape::D10 => d10::faces(),
            DieShape::D12 => d12::faces(),
            DieShape::D20 => d20::faces(),
        }
    }

    pub fn html(&self) -> String {
        match self {
            DieShape::D4D8 { faces } => d4_d8::html(*faces),
            DieShape::D6 => d6::html(),
            DieShape::D10 => d10::html(),
            DieShape::D12 => d12::html(),
            DieShape::D20 => d20::html(),
        }
    }

    pub fn css(&self) -> String {
        match self {
            DieShape::D4D8 { faces } => d4_d8::css(*faces),
            DieShape::D6 => d6::css(),
            DieShape::D10 => d10::css(),
            DieShape::D12 => d12::css(),
            DieShape::D20 => d20::css(),
        }
    }

    /// Everything that goes into the die's shadow subtree.
    pub fn fragment(&self) -> String {
        format!("{}{}{}", self.html(), self.css(), HOST_STYLE)
    }
}

impl std::fmt::Display for DieShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{} ({})", self.face_count(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_selection_thresholds() {
        assert_eq!(DieShape::for_max_roll(20), DieShape::D20);
        assert_eq!(DieShape::for_max_roll(13), DieShape::D20);
        assert_eq!(DieShape::for_max_roll(100), DieShape::D20);
        assert_eq!(DieShape::for_max_roll(12), DieShape::D12);
        assert_eq!(DieShape::for_max_roll(11), DieShape::D12);
        assert_eq!(DieShape::for_max_roll(10), DieShape::D10);
        assert_eq!(DieShape::for_max_roll(9), DieShape::D10);
        assert_eq!(DieShape::for_max_roll(8), DieShape::D4D8 { faces: 8 });
        assert_eq!(DieShape::for_max_roll(7), DieShape::D4D8 { faces: 7 });
        assert_eq!(DieShape::for_max_roll(6), DieShape::D6);
        assert_eq!(DieShape::for_max_roll(4), DieShape::D4D8 { faces: 4 });
        assert_eq!(DieShape::for_max_roll(0), DieShape::D4D8 { faces: 1 });
    }

    #[test]
    fn test_every_shape_has_one_rule_per_face() {
        let shapes = [
            DieShape::D4D8 { faces: 4 },
            DieShape::D4D8 { faces: 8 },
            DieShape::D6,
            DieShape::D10,
            DieShape::D12,
            DieShape::D20,
        ];
        for shape in shapes {
            let n = shape.face_count();
            let css = shape.css();
            assert_eq!(shape.faces().len() as u32, n, "{shape}");
            assert_eq!(
                shape.html().matches("class=\"face ").count() as u32,
                n,
                "{shape}"
            );
            assert!(css.contains(&format!("#die[data-face=\"{n}\"]")), "{shape}");
            assert!(
                !css.contains(&format!("#die[data-face=\"{}\"]", n + 1)),
                "{shape}"
            );
        }
    }

    #[test]
    fn test_every_orientation_spins_with_total_rolls() {
        for shape in [DieShape::D6, DieShape::D10, DieShape::D12, DieShape::D20] {
            for face in shape.faces() {
                assert_eq!(face.orientation.last(), Some(&Transform::Spin));
            }
        }
    }

    #[test]
    fn test_fragment_includes_host_style() {
        let fragment = DieShape::D6.fragment();
        assert!(fragment.contains("<div id=\"die\">"));
        assert!(fragment.contains(":host"));
        assert!(fragment.contains("var(--die-color-even)"));
        assert!(fragment.contains("var(--dot-color)"));
    }

    #[test]
    fn test_names() {
        assert_eq!(DieShape::D4D8 { faces: 4 }.name(), "tetrahedron");
        assert_eq!(DieShape::D4D8 { faces: 8 }.name(), "octahedron");
        assert_eq!(DieShape::D20.to_string(), "d20 (icosahedron)");
    }
}
