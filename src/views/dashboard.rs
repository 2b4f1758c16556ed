// ============================================================================
// DASHBOARD VIEW - Subject cards, year filter, search, recent subjects
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};
use crate::dom::{
    append_child, clear_children, get_element_by_id, navigate, on_change, on_click, on_input,
    set_text_by_id, set_visible, ElementBuilder,
};
use crate::models::YearFilter;
use crate::state::{AppState, SubjectCard};
use crate::viewmodels::DashboardViewModel;
use crate::views::message::show_error;

pub const GRID_ID: &str = "subjects-grid";
pub const TOGGLE_ID: &str = "view-more-btn";
pub const YEAR_FILTER_ID: &str = "year-filter";
pub const SEARCH_ID: &str = "subject-search";
pub const COURSE_TITLE_ID: &str = "course-title";
pub const RECENT_ID: &str = "recent-subjects";
pub const DASHBOARD_MESSAGE_ID: &str = "dashboard-message";

pub fn render_cards(state: &AppState) -> Result<(), JsValue> {
    let (view, title) = {
        let dashboard = state.dashboard.borrow();
        (dashboard.cards_view(), dashboard.course_title.clone())
    };

    if let Some(title) = title {
        set_text_by_id(COURSE_TITLE_ID, &title);
    }

    let Some(grid) = get_element_by_id(GRID_ID) else {
        return Ok(());
    };
    clear_children(&grid);

    if view.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("no-subjects")
            .text("No subjects found.")
            .build();
        append_child(&grid, &empty)?;
    }
    for card in &view.cards {
        append_child(&grid, &render_card(state, card)?)?;
    }

    if let Some(toggle) = get_element_by_id(TOGGLE_ID) {
        match view.toggle_label.as_deref() {
            Some(label) => {
                toggle.set_text_content(Some(label));
                set_visible(&toggle, true)?;
            }
            None => set_visible(&toggle, false)?,
        }
    }
    Ok(())
}

fn render_card(state: &AppState, card: &SubjectCard) -> Result<Element, JsValue> {
    let subject = &card.subject;
    let element = ElementBuilder::new("div")?
        .class("subject-card")
        .attr("style", &format!("border-top: 4px solid {}", card.color))?
        .attr("data-code", &subject.code)?
        .child(ElementBuilder::new("span")?.class("subject-code").text(&subject.code).build())?
        .child(ElementBuilder::new("h3")?.class("subject-title").text(&subject.title).build())?
        .child(ElementBuilder::new("span")?.class("subject-year").text(&subject.year_label()).build())?
        .build();

    let state = state.clone();
    let code = subject.code.clone();
    on_click(&element, move |_| open_subject(&state, &code))?;
    Ok(element)
}

/// Records the view and leaves for the roadmap page
pub fn open_subject(state: &AppState, code: &str) {
    let result = DashboardViewModel::new(state)
        .view_subject(code)
        .and_then(|url| navigate(&url).map_err(crate::error::js_error));
    if let Err(e) = result {
        log::error!("❌ [DASHBOARD] {}", e);
        show_error(DASHBOARD_MESSAGE_ID, &e);
    }
}

pub fn render_recent(state: &AppState) -> Result<(), JsValue> {
    let Some(list) = get_element_by_id(RECENT_ID) else {
        return Ok(());
    };
    clear_children(&list);

    let recent = state.activity.recent_views();
    if recent.is_empty() {
        let empty = ElementBuilder::new("li")?
            .class("recent-empty")
            .text("No recently viewed subjects")
            .build();
        return append_child(&list, &empty);
    }

    for view in recent.entries() {
        let year = view
            .year_level
            .map(crate::models::year_label)
            .unwrap_or_else(|| "Year N/A".to_string());
        let item = ElementBuilder::new("li")?
            .class("recent-item")
            .child(ElementBuilder::new("strong")?.text(&view.code).build())?
            .child(ElementBuilder::new("span")?.text(&format!(" {} · {}", view.title, year)).build())?
            .build();

        let state = state.clone();
        let code = view.code.clone();
        on_click(&item, move |_| open_subject(&state, &code))?;
        append_child(&list, &item)?;
    }
    Ok(())
}

pub fn bind_dashboard(state: &AppState) -> Result<(), JsValue> {
    if let Some(toggle) = get_element_by_id(TOGGLE_ID) {
        let state = state.clone();
        on_click(&toggle, move |event| {
            event.prevent_default();
            DashboardViewModel::new(&state).toggle_show_all();
        })?;
    }

    if let Some(select) = get_element_by_id(YEAR_FILTER_ID) {
        let state = state.clone();
        on_change(&select, move |event| {
            let Some(select) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            match select.value().parse::<YearFilter>() {
                Ok(year) => DashboardViewModel::new(&state).set_year_filter(year),
                Err(e) => log::warn!("⚠️ [DASHBOARD] {}", e),
            }
        })?;
    }

    if let Some(search) = get_element_by_id(SEARCH_ID) {
        let state = state.clone();
        on_input(&search, move |event| {
            if let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                DashboardViewModel::new(&state).set_search(&input.value());
            }
        })?;
    }

    render_recent(state)?;

    let vm = DashboardViewModel::new(state);
    spawn_local(async move {
        if let Err(e) = vm.load().await {
            log::error!("❌ [DASHBOARD] Error loading subjects: {}", e);
            show_error(DASHBOARD_MESSAGE_ID, &e);
        }
    });
    Ok(())
}
