use std::rc::Rc;

use web_sys::{Event, HtmlInputElement, HtmlObjectElement, HtmlSelectElement, InputEvent, MouseEvent};
use yew::prelude::*;

use crate::app_core::{AppCore, AppSnapshot};
use crate::svg_view;
use madori_core::{TooltipState, UnitStatus, PRICE_MAX, PRICE_MIN, PRICE_STEP};

const BACKGROUND_SRC: &str = "assets/floor-0.png";
const OVERLAY_SRC: &str = "assets/floor-0.svg";
const TOOLTIP_OFFSET_PX: f32 = 10.0;

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("", "All Status"),
    ("available", "Available"),
    ("sold", "Sold"),
    ("reserved", "Reserved"),
];

#[derive(Properties)]
pub(crate) struct AppProps {
    pub(crate) core: Rc<AppCore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let core = props.core.clone();
    let snapshot = use_state(|| core.snapshot());
    {
        let core = core.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let subscription = core.subscribe(Rc::new({
                let core = core.clone();
                move || snapshot.set(core.snapshot())
            }));
            move || drop(subscription)
        });
    }
    let snapshot_value: AppSnapshot = (*snapshot).clone();

    let on_overlay_load = {
        let core = core.clone();
        Callback::from(move |event: Event| {
            let object: HtmlObjectElement = event.target_unchecked_into();
            svg_view::on_overlay_loaded(&object, core.clone());
        })
    };

    let on_toggle_panel = {
        let core = core.clone();
        Callback::from(move |_: MouseEvent| core.toggle_panel())
    };

    let on_status_change = {
        let core = core.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            core.set_pending_status(UnitStatus::from_slug(&select.value()));
        })
    };

    let on_min_input = {
        let core = core.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u32>() {
                core.set_pending_min_price(value);
            }
        })
    };

    let on_max_input = {
        let core = core.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u32>() {
                core.set_pending_max_price(value);
            }
        })
    };

    let on_apply = {
        let core = core.clone();
        Callback::from(move |_: MouseEvent| core.commit_filter())
    };

    let tooltip = match &snapshot_value.tooltip {
        TooltipState::Visible { x, y, content } => {
            let style = format!(
                "top: {}px; left: {}px;",
                *y + TOOLTIP_OFFSET_PX,
                *x + TOOLTIP_OFFSET_PX
            );
            html! { <div class="unit-tooltip" style={style}>{content.clone()}</div> }
        }
        TooltipState::Hidden => Html::default(),
    };

    let pending_status_value = snapshot_value
        .pending
        .status
        .map(UnitStatus::as_str)
        .unwrap_or("");
    let (pending_min, pending_max) = snapshot_value.pending.price_range;
    let status_options: Html = STATUS_OPTIONS
        .iter()
        .map(|(value, label)| {
            html! {
                <option value={*value} selected={*value == pending_status_value}>
                    {*label}
                </option>
            }
        })
        .collect();

    let panel = if snapshot_value.panel_open {
        html! {
            <div class="filter-panel">
                <h3>{"Filter by"}</h3>
                <label>{"Status:"}</label>
                <select onchange={on_status_change}>
                    {status_options}
                </select>
                <label>{"Price Range:"}</label>
                <input
                    type="range"
                    min={PRICE_MIN.to_string()}
                    max={PRICE_MAX.to_string()}
                    step={PRICE_STEP.to_string()}
                    value={pending_min.to_string()}
                    oninput={on_min_input}
                />
                <input
                    type="range"
                    min={PRICE_MIN.to_string()}
                    max={PRICE_MAX.to_string()}
                    step={PRICE_STEP.to_string()}
                    value={pending_max.to_string()}
                    oninput={on_max_input}
                />
                <button class="apply-filters" onclick={on_apply}>{"Apply Filters"}</button>
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <>
            <img class="backdrop" src={BACKGROUND_SRC} alt="Background" />
            <object
                class="floor-overlay"
                type="image/svg+xml"
                data={OVERLAY_SRC}
                aria-label="Floor overlay"
                onload={on_overlay_load}
            />
            {tooltip}
            <button class="filter-toggle" onclick={on_toggle_panel}>{"⚙"}</button>
            {panel}
        </>
    }
}
