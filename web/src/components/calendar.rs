//! Navigable month calendar with risk markers.

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

use coalwatch_common::calendar::{GridCell, MonthGrid, MonthView};
use coalwatch_common::locale::is_weekend_column;
use coalwatch_common::CalendarEvent;

use crate::app::use_settings;

/// Pass a clicked day's site id on; days without an event stay inert.
fn forward_selection(site_id: Option<u32>, on_select: Option<Callback<u32>>) {
    if let (Some(id), Some(on_select)) = (site_id, on_select) {
        on_select.run(id);
    }
}

/// Month grid starting on Monday, with one coloured marker per day.
///
/// Day cells that carry an event expose the site id as `data-stack`; clicks
/// on them are forwarded to `on_select`. The calendar itself never navigates.
#[component]
pub fn MonthCalendar(
    /// Events in priority order; when two share a day the earlier one is shown.
    #[prop(into)]
    events: Signal<Vec<CalendarEvent>>,
    /// Called with the site id of a clicked day that has an event.
    #[prop(optional)]
    on_select: Option<Callback<u32>>,
) -> impl IntoView {
    let settings = use_settings();
    let locale = settings.locale;
    let clock = settings.clock;
    let strings = locale.strings();

    let month = RwSignal::new(settings.start_month());

    let title = move || {
        let m = month.get();
        format!("{} {}", locale.month_name(m.month()), m.year())
    };

    let weekdays = locale
        .weekday_labels()
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let class = if is_weekend_column(i) { "weekday weekend-title" } else { "weekday" };
            view! { <div class=class>{label}</div> }
        })
        .collect_view();

    // Rebuilt on every render so "today" follows the clock
    let days = move || {
        let grid = events.with(|events| MonthGrid::build_with_clock(month.get(), events, &clock));
        grid.cells()
            .map(|cell| match cell {
                GridCell::Blank => view! { <div class="empty"></div> }.into_any(),
                GridCell::Day(day) => {
                    let site_id = day.site_id();
                    let on_click = move |_: leptos::ev::MouseEvent| forward_selection(site_id, on_select);
                    view! {
                        <div
                            class=day.classes()
                            data-stack=site_id.map(|id| id.to_string())
                            on:click=on_click
                        >
                            {day.day}
                        </div>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    view! {
        <div class="calendar">
            <div class="calendar-header">
                <button
                    class="nav-btn"
                    title=strings.prev_month
                    on:click=move |_| month.update(MonthView::go_previous)
                >
                    "<"
                </button>
                <p class="calendar-title">{title}</p>
                <button
                    class="nav-btn"
                    title=strings.next_month
                    on:click=move |_| month.update(MonthView::go_next)
                >
                    ">"
                </button>
            </div>

            <div class="calendar-weekdays">{weekdays}</div>

            <div class="calendar-days">{days}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_selection_forwarded_only_for_marked_days() {
        let owner = Owner::new();
        owner.with(|| {
            let picked = Arc::new(Mutex::new(Vec::new()));
            let sink = Arc::clone(&picked);
            let on_select = Callback::new(move |id: u32| sink.lock().unwrap().push(id));

            forward_selection(Some(2), Some(on_select));
            forward_selection(None, Some(on_select));
            forward_selection(Some(3), None);

            assert_eq!(*picked.lock().unwrap(), vec![2]);
        });
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_renders_november_2025() {
        use chrono::NaiveDate;
        use coalwatch_common::{ClockSource, EventStatus, Locale};
        use leptos::tachys::view::RenderHtml;

        use crate::app::AppSettings;

        let date = |d| NaiveDate::from_ymd_opt(2025, 11, d).unwrap();
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_context(AppSettings {
                locale: Locale::Ru,
                clock: ClockSource::Fixed(date(22)),
                rendered_on: None,
            });
            let events = vec![
                CalendarEvent::new(date(22), EventStatus::Ok, 1),
                CalendarEvent::new(date(25), EventStatus::Warning, 2),
            ];
            view! { <MonthCalendar events=events/> }.to_html()
        });

        assert!(html.contains("Ноябрь 2025"));
        // 1 November 2025 is a Saturday: five blanks, then 30 days
        assert_eq!(html.matches(r#"class="empty""#).count(), 5);
        assert_eq!(html.matches(r#"class="day"#).count(), 30);
        assert_eq!(html.matches("weekend-title").count(), 2);

        assert_eq!(html.matches("data-stack=").count(), 2);
        assert!(html.contains(r#"data-stack="1""#));
        assert!(html.contains(r#"data-stack="2""#));

        assert!(html.contains(r#"class="day today event-green""#));
        assert!(html.contains(r#"class="day event-yellow""#));
        assert_eq!(html.matches(" today").count(), 1);
    }
}
