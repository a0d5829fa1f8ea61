//! Home page – map of all stacks.

use leptos::prelude::*;

use crate::components::map::Map;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home-page">
            <div class="map-section">
                <Map/>
            </div>
        </div>
    }
}
