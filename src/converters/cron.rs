//! Cron expression to English description
//!
//! Accepts five fields (minute, hour, day of month, month, day of week) or six
//! with a leading seconds field. Wording follows the cronstrue English locale,
//! e.g. `0 0 * * *` reads "At 12:00 AM" and `*/5 9-17 * * 1-5` reads
//! "Every 5 minutes, between 09:00 AM and 05:59 PM, Monday through Friday".

use crate::error::{ConversionError, ConversionResult};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const DAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

const ORDINALS: [&str; 5] = ["first", "second", "third", "fourth", "fifth"];

/// Why an expression was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CronParseError {
    #[error("Expression is empty")]
    Empty,

    #[error("Expression has {count} parts. Exactly 5 or 6 parts are allowed.")]
    PartCount { count: usize },

    #[error("Invalid {field} value '{token}'")]
    InvalidToken { field: &'static str, token: String },

    #[error("{field} value {value} is out of range ({min}-{max})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("Invalid {field} step '{token}'")]
    InvalidStep { field: &'static str, token: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    fn name(self) -> &'static str {
        match self {
            FieldKind::Second => "seconds",
            FieldKind::Minute => "minutes",
            FieldKind::Hour => "hours",
            FieldKind::DayOfMonth => "day-of-month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day-of-week",
        }
    }

    fn bounds(self) -> (u32, u32) {
        match self {
            FieldKind::Second | FieldKind::Minute => (0, 59),
            FieldKind::Hour => (0, 23),
            FieldKind::DayOfMonth => (1, 31),
            FieldKind::Month => (1, 12),
            FieldKind::DayOfWeek => (0, 7),
        }
    }

    fn named_value(self, token: &str) -> Option<u32> {
        let names: &[&str] = match self {
            FieldKind::Month => &MONTH_NAMES,
            FieldKind::DayOfWeek => &DAY_NAMES,
            _ => return None,
        };
        let offset = if self == FieldKind::Month { 1 } else { 0 };
        names
            .iter()
            .position(|name| name[..3].eq_ignore_ascii_case(token))
            .map(|idx| idx as u32 + offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepStart {
    Any,
    Value(u32),
    Range(u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Value(u32),
    Range(u32, u32),
    Step { start: StepStart, step: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Field {
    Every,
    Items(Vec<Item>),
    LastDayOfMonth,
    LastWeekdayOfMonth,
    NearestWeekday(u32),
    DaysBeforeLastDay(u32),
    LastDayOfWeek(u32),
    NthDayOfWeek { day: u32, nth: u32 },
}

impl Field {
    fn single_value(&self) -> Option<u32> {
        match self {
            Field::Items(items) => match items.as_slice() {
                [Item::Value(v)] => Some(*v),
                _ => None,
            },
            _ => None,
        }
    }

    fn single_range(&self) -> Option<(u32, u32)> {
        match self {
            Field::Items(items) => match items.as_slice() {
                [Item::Range(a, b)] => Some((*a, *b)),
                _ => None,
            },
            _ => None,
        }
    }

    fn value_list(&self) -> Option<Vec<u32>> {
        match self {
            Field::Items(items) if items.len() > 1 => items
                .iter()
                .map(|item| match item {
                    Item::Value(v) => Some(*v),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }

    fn is_step(&self) -> bool {
        matches!(self, Field::Items(items) if items.iter().any(|i| matches!(i, Item::Step { .. })))
    }
}

/// A validated cron expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronExpression {
    seconds: Option<Field>,
    minutes: Field,
    hours: Field,
    day_of_month: Field,
    month: Field,
    day_of_week: Field,
}

impl CronExpression {
    pub fn parse(expression: &str) -> Result<Self, CronParseError> {
        let parts: Vec<&str> = expression.split_whitespace().collect();
        let (seconds, rest) = match parts.len() {
            0 => return Err(CronParseError::Empty),
            5 => (None, &parts[..]),
            6 => (Some(parse_field(parts[0], FieldKind::Second)?), &parts[1..]),
            count => return Err(CronParseError::PartCount { count }),
        };

        Ok(Self {
            seconds,
            minutes: parse_field(rest[0], FieldKind::Minute)?,
            hours: parse_field(rest[1], FieldKind::Hour)?,
            day_of_month: parse_field(rest[2], FieldKind::DayOfMonth)?,
            month: parse_field(rest[3], FieldKind::Month)?,
            day_of_week: parse_field(rest[4], FieldKind::DayOfWeek)?,
        })
    }

    pub fn describe(&self) -> String {
        let mut description = self.time_of_day();
        description.push_str(&self.day_of_month_description());
        description.push_str(&self.day_of_week_description());
        description.push_str(&self.month_description());
        capitalize_first(&description)
    }

    fn time_of_day(&self) -> String {
        let second = match &self.seconds {
            None => Some(None),
            Some(field) => field.single_value().map(Some),
        };

        if let (Some(second), Some(minute), Some(hour)) = (
            second,
            self.minutes.single_value(),
            self.hours.single_value(),
        ) {
            return format!("at {}", format_time(hour, minute, second));
        }

        if self.seconds.is_none() {
            if let (Some((from, to)), Some(hour)) =
                (self.minutes.single_range(), self.hours.single_value())
            {
                return format!(
                    "every minute between {} and {}",
                    format_time(hour, from, None),
                    format_time(hour, to, None)
                );
            }

            if let (Some(hours), Some(minute)) =
                (self.hours.value_list(), self.minutes.single_value())
            {
                let times: Vec<String> = hours
                    .into_iter()
                    .map(|hour| format_time(hour, minute, None))
                    .collect();
                return format!("at {}", join_list(&times));
            }
        }

        [
            self.seconds_description(),
            self.minutes_description(),
            self.hours_description(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    fn seconds_description(&self) -> String {
        let Some(field) = &self.seconds else {
            return String::new();
        };
        describe_field(
            field,
            "every second",
            &SegmentText {
                single: &|v| v.to_string(),
                increment: &|n| format!("every {} seconds", n),
                range: &|a, b| format!("seconds {} through {} past the minute", a, b),
                wrap: &|x| format!("at {} seconds past the minute", x),
            },
        )
    }

    fn minutes_description(&self) -> String {
        // "every minute" is implied by a seconds field
        let all = if self.seconds.is_some() { "" } else { "every minute" };

        if self.seconds.is_none() && self.minutes.single_value() == Some(0) {
            return match self.hours {
                Field::Every => "every hour".to_string(),
                _ if self.hours.is_step() => String::new(),
                _ => "every hour".to_string(),
            };
        }

        describe_field(
            &self.minutes,
            all,
            &SegmentText {
                single: &|v| v.to_string(),
                increment: &|n| format!("every {} minutes", n),
                range: &|a, b| format!("minutes {} through {} past the hour", a, b),
                wrap: &|x| format!("at {} minutes past the hour", x),
            },
        )
    }

    fn hours_description(&self) -> String {
        let end_minute = if self.minutes.single_value() == Some(0) { 0 } else { 59 };
        describe_field(
            &self.hours,
            "",
            &SegmentText {
                single: &|h| format_time(h, 0, None),
                increment: &|n| format!("every {} hours", n),
                range: &|a, b| {
                    format!(
                        "between {} and {}",
                        format_time(a, 0, None),
                        format_time(b, end_minute, None)
                    )
                },
                wrap: &|x| format!("at {}", x),
            },
        )
    }

    fn day_of_month_description(&self) -> String {
        match &self.day_of_month {
            Field::LastDayOfMonth => ", on the last day of the month".to_string(),
            Field::LastWeekdayOfMonth => ", on the last weekday of the month".to_string(),
            Field::NearestWeekday(day) => {
                format!(", on the weekday nearest day {} of the month", day)
            }
            Field::DaysBeforeLastDay(days) => {
                format!(", {} days before the last day of the month", days)
            }
            field => describe_field(
                field,
                "",
                &SegmentText {
                    single: &|v| v.to_string(),
                    increment: &|n| {
                        if n == 1 {
                            ", every day".to_string()
                        } else {
                            format!(", every {} days", n)
                        }
                    },
                    range: &|a, b| format!(", between day {} and {} of the month", a, b),
                    wrap: &|x| format!(", on day {} of the month", x),
                },
            ),
        }
    }

    fn day_of_week_description(&self) -> String {
        let joiner = if self.day_of_month == Field::Every {
            ", only on"
        } else {
            ", and on"
        };

        match &self.day_of_week {
            Field::LastDayOfWeek(day) => {
                format!(", on the last {} of the month", day_name(*day))
            }
            Field::NthDayOfWeek { day, nth } => format!(
                ", on the {} {} of the month",
                ORDINALS[(*nth as usize).saturating_sub(1).min(ORDINALS.len() - 1)],
                day_name(*day)
            ),
            field => describe_field(
                field,
                "",
                &SegmentText {
                    single: &|v| day_name(v).to_string(),
                    increment: &|n| format!(", every {} days of the week", n),
                    range: &|a, b| format!(", {} through {}", day_name(a), day_name(b)),
                    wrap: &|x| format!("{} {}", joiner, x),
                },
            ),
        }
    }

    fn month_description(&self) -> String {
        describe_field(
            &self.month,
            "",
            &SegmentText {
                single: &|v| month_name(v).to_string(),
                increment: &|n| format!(", every {} months", n),
                range: &|a, b| format!(", {} through {}", month_name(a), month_name(b)),
                wrap: &|x| format!(", only in {}", x),
            },
        )
    }
}

/// Describe a cron expression in English.
pub fn cron_to_human(expression: &str) -> ConversionResult<String> {
    CronExpression::parse(expression)
        .map(|cron| cron.describe())
        .map_err(|e| ConversionError::invalid_argument(format!("Invalid cron expression: {}", e)))
}

/// Wording hooks for one field
struct SegmentText<'a> {
    single: &'a dyn Fn(u32) -> String,
    increment: &'a dyn Fn(u32) -> String,
    range: &'a dyn Fn(u32, u32) -> String,
    wrap: &'a dyn Fn(&str) -> String,
}

fn describe_field(field: &Field, all: &str, text: &SegmentText<'_>) -> String {
    let items = match field {
        Field::Every => return all.to_string(),
        Field::Items(items) => items,
        // Special day forms are rendered by their own field
        _ => return String::new(),
    };

    if let [item] = items.as_slice() {
        return match *item {
            Item::Value(v) => (text.wrap)(&(text.single)(v)),
            Item::Range(a, b) => (text.range)(a, b),
            Item::Step { start, step } => {
                let mut description = (text.increment)(step);
                match start {
                    StepStart::Any => {}
                    StepStart::Value(v) => {
                        let starting = (text.wrap)(&(text.single)(v));
                        description.push_str(", starting ");
                        description.push_str(strip_comma(&starting).trim_start());
                    }
                    StepStart::Range(a, b) => {
                        description.push_str(", ");
                        description.push_str(strip_comma(&(text.range)(a, b)));
                    }
                }
                description
            }
        };
    }

    let parts: Vec<String> = items
        .iter()
        .map(|item| match *item {
            Item::Value(v) => (text.single)(v),
            Item::Range(a, b) => format!("{} through {}", (text.single)(a), (text.single)(b)),
            Item::Step { step, .. } => strip_comma(&(text.increment)(step)).to_string(),
        })
        .collect();
    (text.wrap)(&join_list(&parts))
}

fn parse_field(raw: &str, kind: FieldKind) -> Result<Field, CronParseError> {
    let token = raw.to_ascii_uppercase();
    let invalid = || CronParseError::InvalidToken {
        field: kind.name(),
        token: raw.to_string(),
    };

    if token == "*" || token == "*/1" {
        return Ok(Field::Every);
    }
    if token == "?" {
        return match kind {
            FieldKind::DayOfMonth | FieldKind::DayOfWeek => Ok(Field::Every),
            _ => Err(invalid()),
        };
    }

    if kind == FieldKind::DayOfMonth {
        match token.as_str() {
            "L" => return Ok(Field::LastDayOfMonth),
            "LW" | "WL" => return Ok(Field::LastWeekdayOfMonth),
            _ => {}
        }
        if let Some(days) = token.strip_prefix("L-") {
            let days = parse_number(days, kind).ok_or_else(invalid)?;
            return check_range(days, kind, 1, 30).map(Field::DaysBeforeLastDay);
        }
        if let Some(day) = token.strip_suffix('W') {
            let day = parse_number(day, kind).ok_or_else(invalid)?;
            return check_range(day, kind, 1, 31).map(Field::NearestWeekday);
        }
    }

    if kind == FieldKind::DayOfWeek {
        if let Some((day, nth)) = token.split_once('#') {
            let day = parse_value(day, kind)?;
            let nth = parse_number(nth, kind).ok_or_else(invalid)?;
            let nth = check_range(nth, kind, 1, 5)?;
            return Ok(Field::NthDayOfWeek { day, nth });
        }
        if let Some(day) = token.strip_suffix('L') {
            if !day.is_empty() {
                return parse_value(day, kind).map(Field::LastDayOfWeek);
            }
        }
    }

    let items = token
        .split(',')
        .map(|item| parse_item(item, kind))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Field::Items(items))
}

fn parse_item(item: &str, kind: FieldKind) -> Result<Item, CronParseError> {
    let (min, _) = kind.bounds();
    let (base, step) = match item.split_once('/') {
        Some((base, step)) => {
            let step = parse_number(step, kind)
                .filter(|n| *n > 0)
                .ok_or_else(|| CronParseError::InvalidStep {
                    field: kind.name(),
                    token: item.to_string(),
                })?;
            (base, Some(step))
        }
        None => (item, None),
    };

    let start = if base == "*" {
        StepStart::Any
    } else if let Some((from, to)) = base.split_once('-') {
        StepStart::Range(parse_value(from, kind)?, parse_value(to, kind)?)
    } else {
        StepStart::Value(parse_value(base, kind)?)
    };

    match (start, step) {
        // 0/n on time fields reads the same as */n
        (StepStart::Value(v), Some(step))
            if v == min
                && matches!(kind, FieldKind::Second | FieldKind::Minute | FieldKind::Hour) =>
        {
            Ok(Item::Step {
                start: StepStart::Any,
                step,
            })
        }
        (start, Some(step)) => Ok(Item::Step { start, step }),
        (StepStart::Value(v), None) => Ok(Item::Value(v)),
        (StepStart::Range(a, b), None) => Ok(Item::Range(a, b)),
        (StepStart::Any, None) => Err(CronParseError::InvalidToken {
            field: kind.name(),
            token: item.to_string(),
        }),
    }
}

fn parse_value(token: &str, kind: FieldKind) -> Result<u32, CronParseError> {
    let (min, max) = kind.bounds();
    let value = parse_number(token, kind).ok_or_else(|| CronParseError::InvalidToken {
        field: kind.name(),
        token: token.to_string(),
    })?;
    check_range(value, kind, min, max)
}

fn parse_number(token: &str, kind: FieldKind) -> Option<u32> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        kind.named_value(token)
    }
}

fn check_range(value: u32, kind: FieldKind, min: u32, max: u32) -> Result<u32, CronParseError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(CronParseError::OutOfRange {
            field: kind.name(),
            value,
            min,
            max,
        })
    }
}

fn format_time(hour: u32, minute: u32, second: Option<u32>) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    match second {
        Some(s) => format!("{:02}:{:02}:{:02} {}", display_hour, minute, s, period),
        None => format!("{:02}:{:02} {}", display_hour, minute, period),
    }
}

fn day_name(value: u32) -> &'static str {
    DAY_NAMES[(value % 7) as usize]
}

fn month_name(value: u32) -> &'static str {
    MONTH_NAMES[(value.clamp(1, 12) - 1) as usize]
}

fn join_list(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

fn strip_comma(text: &str) -> &str {
    text.strip_prefix(", ").unwrap_or(text)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
