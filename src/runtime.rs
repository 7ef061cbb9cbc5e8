use std::rc::Rc;

/// Minimal capability surface over the loaded SVG overlay, so the binder and
/// the pointer wiring can run against a fake in tests. Implementations own
/// the polygon elements; indices are stable for the lifetime of the surface.
pub(crate) trait OverlaySurface {
    fn polygon_count(&self) -> usize;

    /// Unit code bound to the polygon; 0 when the code attribute is missing
    /// or unparseable.
    fn polygon_code(&self, index: usize) -> u32;

    fn set_polygon_visible(&self, index: usize, visible: bool);

    fn set_polygon_fill(&self, index: usize, fill: &str);

    fn attach_pointer_hooks(&self, hooks: PointerHooks);
}

/// Callbacks wired onto every polygon. Enter carries the polygon's code and
/// the pointer's screen position; move carries position only.
#[derive(Clone)]
pub(crate) struct PointerHooks {
    pub(crate) on_enter: Rc<dyn Fn(u32, f32, f32)>,
    pub(crate) on_move: Rc<dyn Fn(f32, f32)>,
    pub(crate) on_leave: Rc<dyn Fn()>,
}

impl PointerHooks {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            on_enter: Rc::new(|_, _, _| {}),
            on_move: Rc::new(|_, _| {}),
            on_leave: Rc::new(|| {}),
        }
    }
}
