use std::cell::RefCell;
use std::rc::Rc;

use madori_core::{
    apply_filter, FilterCriteria, RecordStore, TooltipState, UnitRecord, UnitStatus, PRICE_MAX,
    PRICE_MIN,
};

pub(crate) type AppSubscriber = Rc<dyn Fn()>;

/// Owns every mutable state slice of the viewer: the immutable record store,
/// the committed filter, the panel's pending working copy, the derived
/// filtered view, the tooltip and the panel visibility flag. All mutation
/// happens through its methods, each running to completion and then
/// notifying subscribers; nothing here is shared across threads.
pub(crate) struct AppCore {
    state: RefCell<AppState>,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

struct AppState {
    store: RecordStore,
    active: FilterCriteria,
    pending: FilterCriteria,
    filtered: Rc<Vec<UnitRecord>>,
    tooltip: TooltipState,
    panel_open: bool,
}

impl AppState {
    fn new() -> Self {
        Self {
            store: RecordStore::default(),
            active: FilterCriteria::default(),
            pending: FilterCriteria::default(),
            filtered: Rc::new(Vec::new()),
            tooltip: TooltipState::Hidden,
            panel_open: false,
        }
    }

    fn refilter(&mut self) {
        self.filtered = Rc::new(apply_filter(self.store.records(), &self.active));
    }
}

/// Cheap cloneable view of the current state for rendering. The filtered
/// view is shared by pointer so views can detect "unchanged" without
/// comparing contents.
#[derive(Clone)]
pub(crate) struct AppSnapshot {
    pub(crate) filtered: Rc<Vec<UnitRecord>>,
    pub(crate) pending: FilterCriteria,
    pub(crate) tooltip: TooltipState,
    pub(crate) panel_open: bool,
}

impl AppCore {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(AppState::new()),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: AppSubscriber) -> AppSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        AppSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }

    pub(crate) fn snapshot(&self) -> AppSnapshot {
        let state = self.state.borrow();
        AppSnapshot {
            filtered: Rc::clone(&state.filtered),
            pending: state.pending,
            tooltip: state.tooltip.clone(),
            panel_open: state.panel_open,
        }
    }

    /// One-shot startup load. The active criteria are the defaults at this
    /// point, so the initial view contains every record.
    pub(crate) fn load_records(&self, store: RecordStore) {
        {
            let mut state = self.state.borrow_mut();
            state.store = store;
            state.refilter();
        }
        self.notify();
    }

    pub(crate) fn set_pending_status(&self, status: Option<UnitStatus>) {
        self.state.borrow_mut().pending.status = status;
        self.notify();
    }

    /// Each bound is independently clamped to the slider range; `min > max`
    /// is allowed while editing and commits to an empty view.
    pub(crate) fn set_pending_min_price(&self, min: u32) {
        self.state.borrow_mut().pending.price_range.0 = min.clamp(PRICE_MIN, PRICE_MAX);
        self.notify();
    }

    pub(crate) fn set_pending_max_price(&self, max: u32) {
        self.state.borrow_mut().pending.price_range.1 = max.clamp(PRICE_MIN, PRICE_MAX);
        self.notify();
    }

    pub(crate) fn toggle_panel(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.panel_open = !state.panel_open;
        }
        self.notify();
    }

    /// Promotes the pending edits into the active criteria, recomputes the
    /// filtered view and closes the panel. Subscribed overlay views pick the
    /// new view up through the notification.
    pub(crate) fn commit_filter(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.active = state.pending;
            state.refilter();
            state.panel_open = false;
        }
        self.notify();
    }

    /// Hover resolves against the filtered view, not the full store: a
    /// polygon whose unit is filtered out shows no tooltip.
    pub(crate) fn pointer_enter(&self, code: u32, x: f32, y: f32) {
        {
            let mut state = self.state.borrow_mut();
            let record = state
                .filtered
                .iter()
                .find(|record| record.code == code)
                .copied();
            state.tooltip.pointer_enter(record.as_ref(), x, y);
        }
        self.notify();
    }

    pub(crate) fn pointer_move(&self, x: f32, y: f32) {
        self.state.borrow_mut().tooltip.pointer_move(x, y);
        self.notify();
    }

    pub(crate) fn pointer_leave(&self) {
        self.state.borrow_mut().tooltip.pointer_leave();
        self.notify();
    }
}

/// Dropping the subscription detaches the subscriber.
pub(crate) struct AppSubscription {
    subscriber: AppSubscriber,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl Drop for AppSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use madori_core::{UnitRecord, UnitStatus};

    use super::*;

    fn sample_store() -> RecordStore {
        RecordStore::new(vec![
            UnitRecord {
                code: 1,
                status: UnitStatus::Available,
                price: 10_000,
            },
            UnitRecord {
                code: 2,
                status: UnitStatus::Sold,
                price: 60_000,
            },
            UnitRecord {
                code: 3,
                status: UnitStatus::Reserved,
                price: 45_000,
            },
        ])
    }

    fn codes(view: &[UnitRecord]) -> Vec<u32> {
        view.iter().map(|record| record.code).collect()
    }

    #[test]
    fn load_populates_the_unfiltered_view() {
        let core = AppCore::new();
        core.load_records(sample_store());
        let snapshot = core.snapshot();
        assert_eq!(codes(&snapshot.filtered), vec![1, 2, 3]);
    }

    #[test]
    fn pending_edits_do_not_touch_the_active_view_until_commit() {
        let core = AppCore::new();
        core.load_records(sample_store());
        core.set_pending_status(Some(UnitStatus::Sold));
        core.set_pending_min_price(50_000);
        assert_eq!(codes(&core.snapshot().filtered), vec![1, 2, 3]);

        core.commit_filter();
        assert_eq!(codes(&core.snapshot().filtered), vec![2]);
    }

    #[test]
    fn commit_closes_the_panel() {
        let core = AppCore::new();
        core.load_records(sample_store());
        core.toggle_panel();
        assert!(core.snapshot().panel_open);
        core.commit_filter();
        assert!(!core.snapshot().panel_open);
    }

    #[test]
    fn pending_bounds_clamp_to_the_slider_range() {
        let core = AppCore::new();
        core.set_pending_max_price(250_000);
        core.set_pending_min_price(180_000);
        assert_eq!(core.snapshot().pending.price_range, (PRICE_MAX, PRICE_MAX));
    }

    #[test]
    fn transient_min_above_max_commits_to_an_empty_view() {
        let core = AppCore::new();
        core.load_records(sample_store());
        core.set_pending_min_price(80_000);
        core.set_pending_max_price(20_000);
        core.commit_filter();
        assert!(core.snapshot().filtered.is_empty());
    }

    #[test]
    fn hover_resolves_against_the_filtered_view() {
        let core = AppCore::new();
        core.load_records(sample_store());
        core.set_pending_status(Some(UnitStatus::Available));
        core.commit_filter();

        // Unit 2 is sold and filtered out; hovering its polygon shows nothing.
        core.pointer_enter(2, 50.0, 50.0);
        assert!(!core.snapshot().tooltip.is_visible());

        core.pointer_enter(1, 50.0, 50.0);
        assert_eq!(
            core.snapshot().tooltip,
            TooltipState::Visible {
                x: 50.0,
                y: 50.0,
                content: "Status: available\nPrice: LE 10000".to_string(),
            }
        );
    }

    #[test]
    fn pointer_move_and_leave_cycle_the_tooltip() {
        let core = AppCore::new();
        core.load_records(sample_store());
        core.pointer_enter(3, 10.0, 20.0);
        core.pointer_move(15.0, 25.0);
        match core.snapshot().tooltip {
            TooltipState::Visible { x, y, ref content } => {
                assert_eq!((x, y), (15.0, 25.0));
                assert_eq!(content, "Status: reserved\nPrice: LE 45000");
            }
            TooltipState::Hidden => panic!("tooltip should be visible"),
        }
        core.pointer_leave();
        assert!(!core.snapshot().tooltip.is_visible());
    }

    #[test]
    fn dropped_subscription_stops_receiving_notifications() {
        let core = AppCore::new();
        let count = Rc::new(Cell::new(0));
        let subscription = core.subscribe(Rc::new({
            let count = Rc::clone(&count);
            move || count.set(count.get() + 1)
        }));
        core.toggle_panel();
        assert_eq!(count.get(), 1);
        drop(subscription);
        core.toggle_panel();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn commit_notifies_subscribers_with_a_fresh_view_pointer() {
        let core = AppCore::new();
        core.load_records(sample_store());
        let before = core.snapshot().filtered;
        core.commit_filter();
        let after = core.snapshot().filtered;
        assert!(!Rc::ptr_eq(&before, &after));
    }
}
