//! Left-hand panel: stack list and the risk calendar.

use leptos::callback::Callback;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use coalwatch_common::event::parse_events;
use coalwatch_common::site::{sample_events, site_href, sites, Site};

use crate::components::calendar::MonthCalendar;

#[component]
pub fn Sidebar() -> impl IntoView {
    let navigate = use_navigate();
    let open_site = Callback::new(move |id: u32| navigate(&site_href(id), Default::default()));

    let events = parse_events(&sample_events());

    view! {
        <aside class="sidebar">
            <nav class="stacks">
                {sites().iter().map(|site| view! { <StackItem site=site/> }).collect_view()}
            </nav>

            <div class="calendar-section">
                <MonthCalendar events=events on_select=open_site/>
            </div>
        </aside>
    }
}

/// One clickable stack entry.
#[component]
fn StackItem(site: &'static Site) -> impl IntoView {
    view! {
        <a href=site.href() class="stack-item">
            {site.name}
        </a>
    }
}
