//! Fixed UI string tables.
//!
//! Everything the client displays is looked up here by [`Locale`]; there is
//! no runtime locale loading.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

const MONTHS_RU: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь",
    "Июль", "Август", "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const WEEKDAYS_RU: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];
const WEEKDAYS_EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Free-text labels used by the pages around the calendar.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    pub app_title: &'static str,
    pub map_alt: &'static str,
    pub back_home: &'static str,
    pub no_such_stack: &'static str,
    pub page_not_found: &'static str,
    pub prev_month: &'static str,
    pub next_month: &'static str,
    pub parameter: &'static str,
    pub value: &'static str,
    pub coal_age: &'static str,
    pub coal_type: &'static str,
    pub risk_probability: &'static str,
    pub risk_date: &'static str,
    pub heating_rate: &'static str,
    pub max_temperature: &'static str,
    pub status: &'static str,
}

const STRINGS_RU: Strings = Strings {
    app_title: "Мониторинг угольных штабелей",
    map_alt: "Карта России",
    back_home: "← Вернуться на главную",
    no_such_stack: "Такого штабеля не существует",
    page_not_found: "Страница не найдена",
    prev_month: "Предыдущий месяц",
    next_month: "Следующий месяц",
    parameter: "Параметр",
    value: "Значение",
    coal_age: "Возраст угля",
    coal_type: "Тип угля",
    risk_probability: "Вероятность риска",
    risk_date: "Дата риска",
    heating_rate: "Скорость нагрева",
    max_temperature: "Максимальная температура",
    status: "Статус",
};

const STRINGS_EN: Strings = Strings {
    app_title: "Coal stack monitoring",
    map_alt: "Map of Russia",
    back_home: "← Back to home",
    no_such_stack: "No such stack",
    page_not_found: "Page not found",
    prev_month: "Previous month",
    next_month: "Next month",
    parameter: "Parameter",
    value: "Value",
    coal_age: "Coal age",
    coal_type: "Coal type",
    risk_probability: "Risk probability",
    risk_date: "Risk date",
    heating_rate: "Heating rate",
    max_temperature: "Max temperature",
    status: "Status",
};

impl Locale {
    /// Name of a month, `month` in 1..=12.
    ///
    /// Out-of-range months give `"?"`.
    pub fn month_name(self, month: u32) -> &'static str {
        let table = match self {
            Locale::Ru => &MONTHS_RU,
            Locale::En => &MONTHS_EN,
        };
        month
            .checked_sub(1)
            .and_then(|i| table.get(i as usize))
            .copied()
            .unwrap_or("?")
    }

    /// Short weekday labels, Monday first.
    pub fn weekday_labels(self) -> [&'static str; 7] {
        match self {
            Locale::Ru => WEEKDAYS_RU,
            Locale::En => WEEKDAYS_EN,
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Ru => &STRINGS_RU,
            Locale::En => &STRINGS_EN,
        }
    }

    /// Value for the `<html lang>` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }
}

/// Saturday and Sunday in a Monday-first row.
pub fn is_weekend_column(index: usize) -> bool {
    index == 5 || index == 6
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale {0:?} (expected \"ru\" or \"en\")")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(Locale::Ru.month_name(1), "Январь");
        assert_eq!(Locale::Ru.month_name(11), "Ноябрь");
        assert_eq!(Locale::En.month_name(12), "December");
        assert_eq!(Locale::En.month_name(0), "?");
        assert_eq!(Locale::En.month_name(13), "?");
    }

    #[test]
    fn test_weekday_labels_start_monday() {
        assert_eq!(Locale::Ru.weekday_labels()[0], "Пн");
        assert_eq!(Locale::En.weekday_labels()[6], "Sun");
        let weekends: Vec<usize> = (0..7).filter(|&i| is_weekend_column(i)).collect();
        assert_eq!(weekends, vec![5, 6]);
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("RU".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!(" en ".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
    }
}
