use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use madori_core::UnitRecord;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlObjectElement, MouseEvent};

use crate::app_core::{AppCore, AppSubscription};
use crate::overlay::{parse_code, OverlayBinder};
use crate::runtime::{OverlaySurface, PointerHooks};

const CODE_ATTR: &str = "data-code";

thread_local! {
    static OVERLAY_VIEW: RefCell<Option<Rc<OverlayView>>> = RefCell::new(None);
}

/// `OverlaySurface` over the polygon elements of the loaded SVG document.
/// Listeners are retained here; dropping the surface detaches them.
struct DomSurface {
    polygons: Vec<Element>,
    listeners: RefCell<Vec<EventListener>>,
}

impl DomSurface {
    fn from_document(document: &Document) -> Self {
        let collection = document.get_elements_by_tag_name("polygon");
        let mut polygons = Vec::with_capacity(collection.length() as usize);
        for index in 0..collection.length() {
            if let Some(element) = collection.item(index) {
                polygons.push(element);
            }
        }
        Self {
            polygons,
            listeners: RefCell::new(Vec::new()),
        }
    }
}

impl OverlaySurface for DomSurface {
    fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    fn polygon_code(&self, index: usize) -> u32 {
        let raw = self
            .polygons
            .get(index)
            .and_then(|element| element.get_attribute(CODE_ATTR));
        parse_code(raw.as_deref())
    }

    fn set_polygon_visible(&self, index: usize, visible: bool) {
        let Some(element) = self.polygons.get(index) else {
            return;
        };
        if visible {
            let _ = element.remove_attribute("style");
        } else {
            let _ = element.set_attribute("style", "display: none;");
        }
    }

    fn set_polygon_fill(&self, index: usize, fill: &str) {
        if let Some(element) = self.polygons.get(index) {
            let _ = element.set_attribute("fill", fill);
        }
    }

    fn attach_pointer_hooks(&self, hooks: PointerHooks) {
        let mut listeners = self.listeners.borrow_mut();
        for element in &self.polygons {
            let code = parse_code(element.get_attribute(CODE_ATTR).as_deref());

            let on_enter = hooks.on_enter.clone();
            listeners.push(EventListener::new(
                element,
                "mouseover",
                move |event: &Event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        (on_enter)(code, event.client_x() as f32, event.client_y() as f32);
                    }
                },
            ));

            let on_move = hooks.on_move.clone();
            listeners.push(EventListener::new(
                element,
                "mousemove",
                move |event: &Event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        (on_move)(event.client_x() as f32, event.client_y() as f32);
                    }
                },
            ));

            let on_leave = hooks.on_leave.clone();
            listeners.push(EventListener::new(
                element,
                "mouseout",
                move |_event: &Event| {
                    (on_leave)();
                },
            ));
        }
    }
}

struct OverlayView {
    core: Rc<AppCore>,
    binder: OverlayBinder,
    surface: DomSurface,
    subscription: RefCell<Option<AppSubscription>>,
    last_view: RefCell<Option<Rc<Vec<UnitRecord>>>>,
}

impl OverlayView {
    /// Re-synchronizes the SVG when the filtered view actually changed.
    /// Notifications also fire for tooltip moves and panel edits; the
    /// shared-pointer check keeps those from rewriting the DOM.
    fn sync_if_changed(&self) {
        let view = self.core.snapshot().filtered;
        {
            let mut last = self.last_view.borrow_mut();
            if last
                .as_ref()
                .is_some_and(|previous| Rc::ptr_eq(previous, &view))
            {
                return;
            }
            *last = Some(Rc::clone(&view));
        }
        self.binder.sync(&self.surface, &view);
    }
}

/// Wires the overlay when the `<object>` asset finishes loading. The load
/// notification fires at most once per page lifetime; initial bind and
/// listener attachment happen here and never in the re-sync path. A missing
/// content document (asset race) is a silent no-op.
pub(crate) fn on_overlay_loaded(object: &HtmlObjectElement, core: Rc<AppCore>) {
    let Some(document) = object.content_document() else {
        return;
    };
    let surface = DomSurface::from_document(&document);
    gloo::console::log!("overlay loaded", surface.polygon_count() as u32);

    let view = Rc::new(OverlayView {
        core: Rc::clone(&core),
        binder: OverlayBinder::new(),
        surface,
        subscription: RefCell::new(None),
        last_view: RefCell::new(None),
    });
    view.sync_if_changed();
    view.binder
        .attach_listeners_once(&view.surface, pointer_hooks(&core));

    let subscription = core.subscribe(Rc::new({
        let view = Rc::clone(&view);
        move || view.sync_if_changed()
    }));
    *view.subscription.borrow_mut() = Some(subscription);

    OVERLAY_VIEW.with(|slot| {
        *slot.borrow_mut() = Some(view);
    });
}

fn pointer_hooks(core: &Rc<AppCore>) -> PointerHooks {
    PointerHooks {
        on_enter: Rc::new({
            let core = Rc::clone(core);
            move |code, x, y| core.pointer_enter(code, x, y)
        }),
        on_move: Rc::new({
            let core = Rc::clone(core);
            move |x, y| core.pointer_move(x, y)
        }),
        on_leave: Rc::new({
            let core = Rc::clone(core);
            move || core.pointer_leave()
        }),
    }
}
