use std::cell::Cell;

use madori_core::UnitRecord;

use crate::runtime::{OverlaySurface, PointerHooks};

pub(crate) const HIGHLIGHT_FILL: &str = "#3271cc";

/// Parses a polygon's code attribute. Fails soft: a missing or non-numeric
/// attribute binds as code 0, which matches no record unless one legitimately
/// carries that code.
pub(crate) fn parse_code(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}

/// Keeps the overlay polygons' presentation in sync with the filtered view
/// and wires the pointer listeners exactly once per surface.
pub(crate) struct OverlayBinder {
    listeners_attached: Cell<bool>,
}

impl OverlayBinder {
    pub(crate) fn new() -> Self {
        Self {
            listeners_attached: Cell::new(false),
        }
    }

    /// Walks every polygon: members of `view` get the highlight fill and
    /// stay visible, everything else is hidden. Safe to re-run redundantly;
    /// unchanged input settles on the same presentation.
    pub(crate) fn sync(&self, surface: &dyn OverlaySurface, view: &[UnitRecord]) {
        for index in 0..surface.polygon_count() {
            let code = surface.polygon_code(index);
            if view.iter().any(|record| record.code == code) {
                surface.set_polygon_fill(index, HIGHLIGHT_FILL);
                surface.set_polygon_visible(index, true);
            } else {
                surface.set_polygon_visible(index, false);
            }
        }
    }

    /// Attaches the pointer hooks on the first call only; later calls are
    /// ignored so re-renders never stack duplicate handlers. Returns whether
    /// this call attached.
    pub(crate) fn attach_listeners_once(
        &self,
        surface: &dyn OverlaySurface,
        hooks: PointerHooks,
    ) -> bool {
        if self.listeners_attached.replace(true) {
            return false;
        }
        surface.attach_pointer_hooks(hooks);
        true
    }
}
