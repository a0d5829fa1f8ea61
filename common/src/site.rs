//! Monitored coal stacks and the built-in sample data.

use serde::Serialize;

use crate::event::{EventRecord, EventStatus};
use crate::locale::Locale;

/// Qualitative risk grade, used both for the probability column and the
/// overall status of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
        }
    }

    /// Label for the probability column ("Низкая", "Средняя", "Высокая").
    pub fn probability_label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ru, RiskLevel::Low) => "Низкая",
            (Locale::Ru, RiskLevel::Medium) => "Средняя",
            (Locale::Ru, RiskLevel::High) => "Высокая",
            (Locale::En, RiskLevel::Low) => "Low",
            (Locale::En, RiskLevel::Medium) => "Medium",
            (Locale::En, RiskLevel::High) => "High",
        }
    }

    /// Label for the stack status ("Низкий риск", …).
    pub fn status_label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ru, RiskLevel::Low) => "Низкий риск",
            (Locale::Ru, RiskLevel::Medium) => "Средний риск",
            (Locale::Ru, RiskLevel::High) => "Высокий риск",
            (Locale::En, RiskLevel::Low) => "Low risk",
            (Locale::En, RiskLevel::Medium) => "Medium risk",
            (Locale::En, RiskLevel::High) => "High risk",
        }
    }
}

/// One coal stack with its latest risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Horizontal position on the map image, percent from the left edge.
    pub x: f32,
    /// Vertical position on the map image, percent from the top edge.
    pub y: f32,
    pub coal_age: &'static str,
    pub coal_type: &'static str,
    pub risk_probability: RiskLevel,
    pub risk_date: &'static str,
    pub heating_rate: &'static str,
    pub max_temperature: &'static str,
    pub status: RiskLevel,
}

impl Site {
    pub fn href(&self) -> String {
        site_href(self.id)
    }
}

/// Route of a stack's detail page.
pub fn site_href(id: u32) -> String {
    format!("/stack/{id}")
}

static SITES: [Site; 3] = [
    Site {
        id: 1,
        name: "Штабель 1",
        description: "Описание штабеля 1",
        x: 20.0,
        y: 30.0,
        coal_age: "3 месяца",
        coal_type: "Антрацит",
        risk_probability: RiskLevel::Medium,
        risk_date: "2025-11-28",
        heating_rate: "5 °C/ч",
        max_temperature: "120 °C",
        status: RiskLevel::Low,
    },
    Site {
        id: 2,
        name: "Штабель 2",
        description: "Описание штабеля 2",
        x: 50.0,
        y: 50.0,
        coal_age: "6 месяцев",
        coal_type: "Бурый уголь",
        risk_probability: RiskLevel::High,
        risk_date: "2025-12-05",
        heating_rate: "7 °C/ч",
        max_temperature: "140 °C",
        status: RiskLevel::Medium,
    },
    Site {
        id: 3,
        name: "Штабель 3",
        description: "Описание штабеля 3",
        x: 70.0,
        y: 80.0,
        coal_age: "1 месяц",
        coal_type: "Антрацит",
        risk_probability: RiskLevel::Low,
        risk_date: "2025-12-15",
        heating_rate: "4 °C/ч",
        max_temperature: "110 °C",
        status: RiskLevel::High,
    },
];

/// All known stacks, ordered by id.
pub fn sites() -> &'static [Site] {
    &SITES
}

pub fn find_site(id: u32) -> Option<&'static Site> {
    SITES.iter().find(|s| s.id == id)
}

/// Look up a stack from a raw route parameter. Non-numeric ids find nothing.
pub fn find_site_by_param(param: &str) -> Option<&'static Site> {
    param.trim().parse::<u32>().ok().and_then(find_site)
}

/// Risk events shown in the sidebar calendar.
pub fn sample_events() -> Vec<EventRecord> {
    vec![
        EventRecord::new("2025-11-22", EventStatus::Ok, 1),
        EventRecord::new("2025-11-25", EventStatus::Warning, 2),
        EventRecord::new("2025-12-15", EventStatus::Critical, 3),
        EventRecord::new("2025-12-8", EventStatus::Ok, 1),
    ]
}
