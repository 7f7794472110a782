//! History names and their icons

use egui_phosphor::regular as ph;

pub const LOAD: &str = "Load";
pub const CROP: &str = "Crop";
pub const FLIP: &str = "Flip";
pub const ROTATE: &str = "Rotate";
pub const RESIZE: &str = "Resize";
pub const DRAW: &str = "Draw";
pub const SHAPE: &str = "Shape";
pub const ICON: &str = "Icon";
pub const TEXT: &str = "Text";
pub const MASK: &str = "Mask";
pub const FILTER: &str = "Filter";
pub const ADD: &str = "Add";
pub const DELETE: &str = "Delete";
pub const GROUP: &str = "Group";

/// Marker drawn on the selected row
pub const CHECK_ICON: &str = ph::CHECK;

/// Maps a history name to the glyph drawn in front of its label
pub type IconResolver = fn(&str) -> &'static str;

/// Default resolver using the Phosphor icon font
pub fn phosphor_icon(name: &str) -> &'static str {
    match name {
        LOAD => ph::IMAGE,
        CROP => ph::CROP,
        FLIP => ph::FLIP_HORIZONTAL,
        ROTATE => ph::ARROW_CLOCKWISE,
        RESIZE => ph::ARROWS_OUT,
        DRAW => ph::PENCIL_SIMPLE,
        SHAPE => ph::SHAPES,
        ICON => ph::SMILEY,
        TEXT => ph::TEXT_T,
        MASK => ph::MASK_HAPPY,
        FILTER => ph::SLIDERS_HORIZONTAL,
        ADD => ph::PLUS,
        DELETE => ph::TRASH,
        GROUP => ph::STACK,
        _ => ph::CLOCK_COUNTER_CLOCKWISE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_have_their_own_icon() {
        let fallback = phosphor_icon("Something else");
        let names = [
            LOAD, CROP, FLIP, ROTATE, RESIZE, DRAW, SHAPE, ICON, TEXT, MASK, FILTER, ADD, DELETE,
            GROUP,
        ];
        for name in names {
            assert_ne!(phosphor_icon(name), fallback, "{name} uses the fallback icon");
        }
    }
}
