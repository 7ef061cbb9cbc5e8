use crate::unit::UnitRecord;

/// Transient hover tooltip. Starts hidden and cycles for the lifetime of the
/// view; there is no terminal state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible { x: f32, y: f32, content: String },
}

impl TooltipState {
    pub fn is_visible(&self) -> bool {
        matches!(self, TooltipState::Visible { .. })
    }

    /// Pointer entered a polygon. Transitions to visible only when the
    /// polygon's code resolved to a record in the current filtered view;
    /// an unresolved hover leaves the tooltip hidden.
    pub fn pointer_enter(&mut self, record: Option<&UnitRecord>, x: f32, y: f32) {
        if let Some(record) = record {
            *self = TooltipState::Visible {
                x,
                y,
                content: tooltip_content(record),
            };
        }
    }

    /// Pointer moved while over the same polygon: position update only,
    /// content untouched. Hidden stays hidden.
    pub fn pointer_move(&mut self, next_x: f32, next_y: f32) {
        if let TooltipState::Visible { x, y, .. } = self {
            *x = next_x;
            *y = next_y;
        }
    }

    pub fn pointer_leave(&mut self) {
        *self = TooltipState::Hidden;
    }
}

pub fn tooltip_content(record: &UnitRecord) -> String {
    format!(
        "Status: {}\nPrice: LE {}",
        record.status.as_str(),
        record.price
    )
}
