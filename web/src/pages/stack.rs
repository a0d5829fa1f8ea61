//! Stack detail page – risk parameters of a single coal stack.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use coalwatch_common::site::find_site_by_param;
use coalwatch_common::{Locale, Site};

use crate::app::use_settings;

/// `/stack/:id`. Unknown ids get a short "no such stack" notice.
#[component]
pub fn StackPage() -> impl IntoView {
    let locale = use_settings().locale;
    let strings = locale.strings();
    let params = use_params_map();
    let site = move || params.with(|p| p.get("id")).and_then(|id| find_site_by_param(&id));

    view! {
        <div class="stack-page">
            <a href="/" class="back-link">{strings.back_home}</a>
            {move || match site() {
                Some(site) => view! { <StackDetails site=site locale=locale/> }.into_any(),
                None => view! { <p>{strings.no_such_stack}</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn StackDetails(site: &'static Site, locale: Locale) -> impl IntoView {
    let strings = locale.strings();

    view! {
        <h1>{site.name}</h1>
        <p>{site.description}</p>

        <table class="stack-table">
            <tbody>
                <tr>
                    <th>{strings.parameter}</th>
                    <th>{strings.value}</th>
                </tr>
                <ParamRow label=strings.coal_age value=site.coal_age/>
                <ParamRow label=strings.coal_type value=site.coal_type/>
                <tr>
                    <td>{strings.risk_probability}</td>
                    <td class=site.risk_probability.css_class()>
                        {site.risk_probability.probability_label(locale)}
                    </td>
                </tr>
                <ParamRow label=strings.risk_date value=site.risk_date/>
                <ParamRow label=strings.heating_rate value=site.heating_rate/>
                <ParamRow label=strings.max_temperature value=site.max_temperature/>
                <tr>
                    <td>{strings.status}</td>
                    <td class=site.status.css_class()>{site.status.status_label(locale)}</td>
                </tr>
            </tbody>
        </table>
    }
}

#[component]
fn ParamRow(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <tr>
            <td>{label}</td>
            <td>{value}</td>
        </tr>
    }
}

