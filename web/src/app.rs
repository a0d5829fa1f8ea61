//! Root Leptos application component with routing and the layout shell.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use coalwatch_common::calendar::MonthView;
use coalwatch_common::{Clock, ClockSource, Locale};

use crate::components::sidebar::Sidebar;
use crate::pages::{home::Home, stack::StackPage};

/// `name` of the `<meta>` tag that carries [`AppSettings`] to the client.
pub const SETTINGS_META: &str = "coalwatch-settings";

/// Settings every component may read: UI language and the calendar clock.
///
/// The server provides them from its config and writes them into the page
/// (see [`SETTINGS_META`]); the hydrated client reads them back before
/// mounting, so both sides render the same labels and month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub locale: Locale,
    pub clock: ClockSource,
    /// Server date when the page was rendered. The calendar opens on its month.
    #[serde(default)]
    pub rendered_on: Option<NaiveDate>,
}

impl AppSettings {
    /// Copy stamped with the clock's current date, one per rendered page.
    pub fn for_request(self) -> Self {
        Self {
            rendered_on: Some(self.clock.today()),
            ..self
        }
    }

    /// Month the calendar shows first.
    pub fn start_month(&self) -> MonthView {
        MonthView::containing(self.rendered_on.unwrap_or_else(|| self.clock.today()))
    }

    /// JSON for the settings `<meta>` tag.
    pub fn to_meta(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_meta(content: &str) -> Option<Self> {
        serde_json::from_str(content).ok()
    }
}

/// Settings from context, or the defaults when none were provided.
pub fn use_settings() -> AppSettings {
    use_context::<AppSettings>().unwrap_or_default()
}

/// Settings the server embedded in the current document.
#[cfg(feature = "hydrate")]
pub fn settings_from_document() -> Option<AppSettings> {
    let content = web_sys::window()?
        .document()?
        .query_selector(&format!("meta[name=\"{SETTINGS_META}\"]"))
        .ok()??
        .get_attribute("content")?;
    AppSettings::from_meta(&content)
}

/// HTML document around `<App/>`, rendered on the server only.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings = use_settings();
    let lang = settings.locale.code();

    view! {
        <!DOCTYPE html>
        <html lang=lang>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=SETTINGS_META content=settings.to_meta()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// The root `<App/>` component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let settings = use_settings();
    provide_context(settings);
    let strings = settings.locale.strings();

    view! {
        <Stylesheet id="leptos" href="/pkg/coalwatch-web.css"/>
        <Title text=strings.app_title/>
        <Meta name="description" content=strings.app_title/>

        <Router>
            <div class="layout">
                <Sidebar/>
                <main class="content">
                    <Routes fallback=move || view! { <p class="not-found">{strings.page_not_found}</p> }>
                        <Route path=path!("/") view=Home/>
                        <Route path=path!("/stack/:id") view=StackPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_settings_meta_round_trip() {
        let settings = AppSettings {
            locale: Locale::En,
            clock: ClockSource::Fixed(date(2025, 11, 22)),
            rendered_on: Some(date(2025, 11, 22)),
        };
        let content = settings.to_meta();
        assert!(!content.is_empty());
        assert_eq!(AppSettings::from_meta(&content), Some(settings));
    }

    #[test]
    fn test_settings_meta_rejects_garbage() {
        assert_eq!(AppSettings::from_meta(""), None);
        assert_eq!(AppSettings::from_meta("{\"locale\":\"fr\"}"), None);
    }

    #[test]
    fn test_missing_render_date_is_tolerated() {
        let parsed = AppSettings::from_meta(r#"{"locale":"ru","clock":"system"}"#).unwrap();
        assert_eq!(parsed.locale, Locale::Ru);
        assert_eq!(parsed.clock, ClockSource::System);
        assert_eq!(parsed.rendered_on, None);
    }

    #[test]
    fn test_for_request_pins_start_month() {
        let settings = AppSettings {
            locale: Locale::Ru,
            clock: ClockSource::Fixed(date(2025, 12, 31)),
            rendered_on: None,
        }
        .for_request();
        assert_eq!(settings.rendered_on, Some(date(2025, 12, 31)));
        assert_eq!(settings.start_month(), MonthView::new(2025, 12).unwrap());

        // A client whose clock already moved on still opens the server's month
        let client = AppSettings {
            clock: ClockSource::Fixed(date(2026, 1, 1)),
            ..settings
        };
        assert_eq!(client.start_month(), MonthView::new(2025, 12).unwrap());
    }
}
