//! Overview map with one point per monitored stack.

use leptos::prelude::*;

use coalwatch_common::site::sites;

use crate::app::use_settings;

#[component]
pub fn Map() -> impl IntoView {
    let strings = use_settings().locale.strings();

    let points = sites()
        .iter()
        .map(|site| {
            let style = format!("left: {}%; top: {}%", site.x, site.y);
            view! {
                <a
                    href=site.href()
                    class=format!("map-point {}", site.status.css_class())
                    style=style
                    title=site.name
                ></a>
            }
        })
        .collect_view();

    view! {
        <div class="map-container">
            <img src="/russia.svg" alt=strings.map_alt class="map-image"/>
            {points}
        </div>
    }
}
