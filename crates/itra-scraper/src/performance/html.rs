//! Performance index from an HTML runner profile page.
//!
//! The profile markup has moved between class names over site revisions, so
//! lookups run through an ordered list of probes. The first probe that yields
//! a number wins; if none does, the index is missing.

use std::sync::LazyLock;

use itra_core::{Field, UNKNOWN_RUNNER};
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use super::api::json_digits;
use super::PerformanceReading;
use crate::normalize::{collapse_whitespace, first_digit_run};

const LABEL: &str = "performance index";
const JSON_KEY: &str = "performanceIndex";

static EXACT_CLASS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".performance-index").expect("valid selector"));
static ALTERNATE_CLASSES: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".pi-score, .runner-pi, .performance-index-value, [data-performance-index]")
        .expect("valid selector")
});
static ANY_ELEMENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body *").expect("valid selector"));
static DATA_ISLAND: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        r#"script[type="application/json"], script#__NEXT_DATA__, script[type="application/ld+json"]"#,
    )
    .expect("valid selector")
});
static HEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").expect("valid selector"));
static TITLE_BLOCK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".runner-name, .title-block, .profile-title").expect("valid selector")
});

type Probe = fn(&Html) -> Option<String>;

/// Lookup strategies in priority order.
const PROBES: &[(&str, Probe)] = &[
    ("exact_class", exact_class),
    ("alternate_class", alternate_class),
    ("label_text", label_text),
    ("json_island", json_island),
];

/// Reads the performance index and runner name from a profile page body.
#[must_use]
pub fn parse_profile_page(body: &str) -> PerformanceReading {
    let document = Html::parse_document(body);
    PerformanceReading {
        performance_index: performance_index(&document),
        runner_name: runner_name(&document),
    }
}

fn performance_index(document: &Html) -> Field {
    PROBES
        .iter()
        .find_map(|(strategy, probe)| {
            let value = probe(document)?;
            tracing::debug!(strategy = *strategy, value = %value, "performance index found");
            Some(value)
        })
        .into()
}

fn exact_class(document: &Html) -> Option<String> {
    document
        .select(&EXACT_CLASS)
        .find_map(|el| first_digit_run(&element_text(el)))
}

fn alternate_class(document: &Html) -> Option<String> {
    document.select(&ALTERNATE_CLASSES).find_map(|el| {
        el.value()
            .attr("data-performance-index")
            .and_then(first_digit_run)
            .or_else(|| first_digit_run(&element_text(el)))
    })
}

/// An element whose own text mentions "Performance Index": the number is
/// the first one after the label in the element's text, else the first one in
/// its next element sibling.
fn label_text(document: &Html) -> Option<String> {
    document
        .select(&ANY_ELEMENT)
        .filter(|el| !matches!(el.value().name(), "script" | "style" | "noscript"))
        .filter(|el| own_text(*el).to_ascii_lowercase().contains(LABEL))
        .find_map(|el| {
            digits_after_label(&element_text(el)).or_else(|| {
                el.next_siblings()
                    .find_map(ElementRef::wrap)
                    .and_then(|sibling| first_digit_run(&element_text(sibling)))
            })
        })
}

/// ASCII lowercasing keeps byte offsets, so the match position indexes `text`.
fn digits_after_label(text: &str) -> Option<String> {
    let start = text.to_ascii_lowercase().find(LABEL)? + LABEL.len();
    first_digit_run(&text[start..])
}

fn json_island(document: &Html) -> Option<String> {
    document.select(&DATA_ISLAND).find_map(|script| {
        let raw = script.text().collect::<String>();
        let value: Value = serde_json::from_str(raw.trim()).ok()?;
        find_key(&value, JSON_KEY).and_then(|v| json_digits(v).into_option())
    })
}

/// Depth-first search for the first non-null `key` anywhere in `value`.
fn find_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map
            .get(key)
            .filter(|v| !v.is_null())
            .or_else(|| map.values().find_map(|v| find_key(v, key))),
        Value::Array(items) => items.iter().find_map(|v| find_key(v, key)),
        _ => None,
    }
}

fn runner_name(document: &Html) -> String {
    [&*HEADING, &*TITLE_BLOCK]
        .into_iter()
        .find_map(|selector| {
            document
                .select(selector)
                .map(element_text)
                .find(|text| !text.is_empty())
        })
        .unwrap_or_else(|| UNKNOWN_RUNNER.to_owned())
}

fn element_text(el: ElementRef<'_>) -> String {
    collapse_whitespace(&el.text().collect::<Vec<_>>().join(" "))
}

/// Text of the element's direct text children only.
fn own_text(el: ElementRef<'_>) -> String {
    el.children()
        .filter_map(|node| node.value().as_text().map(|t| String::from(&**t)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
