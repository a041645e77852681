//! Mapping from the upstream ccfddl schema to local conference records.

use serde_yaml::Value;
use tracing::warn;

use crate::models::{LocalConference, UpstreamConference, UpstreamInstance};
use crate::utils::parse_date_range;

/// Transform every upstream conference that has an edition in
/// `current_year` or later.
pub fn transform_conferences(
    conferences: &[UpstreamConference],
    current_year: i32,
) -> Vec<LocalConference> {
    conferences
        .iter()
        .filter_map(|conf| transform_conference(conf, current_year))
        .collect()
}

/// Build the local record for the first upcoming edition of a conference.
///
/// Returns `None` when every edition lies in the past.
pub fn transform_conference(conf: &UpstreamConference, current_year: i32) -> Option<LocalConference> {
    let instance = conf.confs.iter().find(|i| i.year >= current_year)?;
    let first_entry = instance.timeline.first();

    let mut record = LocalConference {
        title: conf.title.clone(),
        year: Some(instance.year),
        id: instance.id.clone(),
        full_name: conf.description.clone(),
        link: instance.link.clone(),
        deadline: first_entry.map(|t| t.deadline.clone()).unwrap_or_default(),
        timezone: instance.timezone.clone(),
        date: instance.date.clone(),
        tags: Vec::new(),
        abstract_deadline: first_entry.and_then(|t| t.abstract_deadline.clone()),
        ..Default::default()
    };

    let (city, country) = split_place(&instance.place);
    record.city = city;
    record.country = country;

    apply_dates(&mut record, instance);

    record.rankings = conf.rank.as_ref().and_then(format_rankings);

    Some(record)
}

fn apply_dates(record: &mut LocalConference, instance: &UpstreamInstance) {
    if instance.date.is_empty() {
        return;
    }
    match parse_date_range(&instance.date, &instance.year.to_string()) {
        Ok((start, end)) => {
            record.start = Some(start);
            record.end = Some(end);
        }
        Err(e) => warn!("Could not parse date for {}: {}", record.title, e),
    }
}

/// Split upstream place text into `(city, country)`.
///
/// `"Vienna, Austria"` gives both; a place without a comma is taken as the
/// country alone. Only the first comma splits, so `"Rio de Janeiro, RJ,
/// Brazil"` keeps `"RJ, Brazil"` as the country.
pub fn split_place(place: &str) -> (Option<String>, Option<String>) {
    if place.is_empty() {
        return (None, None);
    }
    match place.split_once(',') {
        Some((city, country)) => (
            Some(city.trim().to_string()),
            Some(country.trim().to_string()),
        ),
        None => (None, Some(place.trim().to_string())),
    }
}

/// Render a rank mapping as `CCF: A, CORE: A*`, in mapping order.
pub fn format_rankings(rank: &serde_yaml::Mapping) -> Option<String> {
    let parts: Vec<String> = rank
        .iter()
        .map(|(kind, value)| {
            format!("{}: {}", scalar_text(kind).to_uppercase(), scalar_text(value))
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
