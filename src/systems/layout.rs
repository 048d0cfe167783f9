//! Horizontal layout mirroring
//!
//! Helpers the screens use to flip horizontal layout in RTL: logical edges,
//! style keys with a physical side in their name, row direction, text
//! alignment, absolute x positions and directional icons.

use std::borrow::Cow;

use serde::Serialize;

use crate::domain::{ReadingDirection, SemanticDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalEdge {
    Left,
    Right,
    Start,
    End,
}

/// Resolve a logical edge to a physical one (`Left` or `Right`).
pub fn resolve_edge(edge: HorizontalEdge, direction: ReadingDirection) -> HorizontalEdge {
    match (edge, direction) {
        (HorizontalEdge::Start, ReadingDirection::Ltr) => HorizontalEdge::Left,
        (HorizontalEdge::Start, ReadingDirection::Rtl) => HorizontalEdge::Right,
        (HorizontalEdge::End, ReadingDirection::Ltr) => HorizontalEdge::Right,
        (HorizontalEdge::End, ReadingDirection::Rtl) => HorizontalEdge::Left,
        (physical, _) => physical,
    }
}

// Style keys carrying a physical side, paired with their mirror.
const MIRRORED_KEYS: &[(&str, &str)] = &[
    ("left", "right"),
    ("marginLeft", "marginRight"),
    ("paddingLeft", "paddingRight"),
    ("borderLeftWidth", "borderRightWidth"),
    ("borderLeftColor", "borderRightColor"),
    ("borderTopLeftRadius", "borderTopRightRadius"),
    ("borderBottomLeftRadius", "borderBottomRightRadius"),
];

/// Swap the physical side of a style key in RTL. Unknown keys, and every key
/// in LTR, come back borrowed and unchanged.
pub fn mirror_style_key(key: &str, direction: ReadingDirection) -> Cow<'_, str> {
    if !direction.is_rtl() {
        return Cow::Borrowed(key);
    }
    for (a, b) in MIRRORED_KEYS {
        if key == *a {
            return Cow::Owned((*b).to_string());
        }
        if key == *b {
            return Cow::Owned((*a).to_string());
        }
    }
    Cow::Borrowed(key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    Row,
    RowReverse,
}

/// Row direction that lays children out in reading order.
pub fn row_direction(direction: ReadingDirection) -> FlexDirection {
    match direction {
        ReadingDirection::Ltr => FlexDirection::Row,
        ReadingDirection::Rtl => FlexDirection::RowReverse,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Right,
    Center,
}

pub fn text_align_start(direction: ReadingDirection) -> TextAlign {
    match direction {
        ReadingDirection::Ltr => TextAlign::Left,
        ReadingDirection::Rtl => TextAlign::Right,
    }
}

/// Reflect an absolute x position inside its container in RTL.
///
/// Non-finite input is returned as-is.
pub fn mirror_x(x: f64, container_width: f64, item_width: f64, direction: ReadingDirection) -> f64 {
    if !direction.is_rtl() || !all_finite!(x, container_width, item_width) {
        return x;
    }
    container_width - x - item_width
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Chevron {
    Left,
    Right,
}

/// Arrow icon that points toward `semantic` in the current direction.
pub fn chevron_for(semantic: SemanticDirection, direction: ReadingDirection) -> Chevron {
    match (semantic, direction) {
        (SemanticDirection::Advance, ReadingDirection::Ltr)
        | (SemanticDirection::Retreat, ReadingDirection::Rtl) => Chevron::Right,
        (SemanticDirection::Retreat, ReadingDirection::Ltr)
        | (SemanticDirection::Advance, ReadingDirection::Rtl) => Chevron::Left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RTL: ReadingDirection = ReadingDirection::Rtl;
    const LTR: ReadingDirection = ReadingDirection::Ltr;

    #[test]
    fn logical_edges_follow_direction() {
        assert_eq!(resolve_edge(HorizontalEdge::Start, LTR), HorizontalEdge::Left);
        assert_eq!(resolve_edge(HorizontalEdge::Start, RTL), HorizontalEdge::Right);
        assert_eq!(resolve_edge(HorizontalEdge::End, RTL), HorizontalEdge::Left);
        assert_eq!(resolve_edge(HorizontalEdge::Left, RTL), HorizontalEdge::Left);
    }

    #[test]
    fn style_keys_swap_only_in_rtl() {
        assert_eq!(mirror_style_key("marginLeft", RTL), "marginRight");
        assert_eq!(mirror_style_key("borderTopRightRadius", RTL), "borderTopLeftRadius");
        assert_eq!(mirror_style_key("marginLeft", LTR), "marginLeft");
        assert!(matches!(mirror_style_key("marginTop", RTL), Cow::Borrowed("marginTop")));
    }

    #[test]
    fn style_key_mirroring_is_an_involution() {
        for (a, b) in MIRRORED_KEYS {
            for key in [*a, *b] {
                let once = mirror_style_key(key, RTL).into_owned();
                assert_eq!(mirror_style_key(&once, RTL), key);
            }
        }
    }

    #[test]
    fn row_and_text_alignment() {
        assert_eq!(row_direction(LTR), FlexDirection::Row);
        assert_eq!(row_direction(RTL), FlexDirection::RowReverse);
        assert_eq!(text_align_start(RTL), TextAlign::Right);
    }

    #[test]
    fn mirror_x_reflects_inside_container() {
        assert_eq!(mirror_x(10.0, 300.0, 50.0, RTL), 240.0);
        assert_eq!(mirror_x(10.0, 300.0, 50.0, LTR), 10.0);
        assert!(mirror_x(f64::NAN, 300.0, 50.0, RTL).is_nan());
        assert_eq!(mirror_x(10.0, f64::INFINITY, 50.0, RTL), 10.0);
    }

    #[test]
    fn chevrons_point_in_reading_order() {
        assert_eq!(chevron_for(SemanticDirection::Advance, LTR), Chevron::Right);
        assert_eq!(chevron_for(SemanticDirection::Advance, RTL), Chevron::Left);
        assert_eq!(chevron_for(SemanticDirection::Retreat, RTL), Chevron::Right);
    }
}
