//! Identifier sanitizer
//!
//! Total string transforms from free EAGLE text into the constrained name
//! types of the core model. None of these fail: invalid input falls back to
//! [`UNNAMED`](eagleport_core::UNNAMED) where a name is mandatory.

use eagleport_core::{CircuitIdentifier, ElementName, GateSuffix};

const BOLD_TAGS: [&str; 2] = ["<b>", "</b>"];
const LINE_BREAK_TAGS: [&str; 3] = ["<br />", "<br/>", "<br>"];
const SEPARATORS: [char; 2] = ['-', '_'];

fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Trims and replaces every whitespace run with a single `_`.
fn underscore_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Matches `<prefix><digits>` with at least one ASCII digit and returns the
/// digits.
fn auto_name_number<'a>(raw: &'a str, prefix: &str) -> Option<&'a str> {
    raw.strip_prefix(prefix)
        .filter(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

fn element_name_or_unnamed(name: &str) -> ElementName {
    ElementName::new(name.trim()).unwrap_or_else(|_| ElementName::unnamed())
}

pub fn convert_element_name(raw: &str) -> ElementName {
    element_name_or_unnamed(raw)
}

/// Converts a description into plain text.
///
/// Bold markup is removed and line breaks become newlines. Lines are trimmed
/// and empty lines dropped.
pub fn convert_element_description(raw: &str) -> String {
    let mut text = raw.to_string();
    for tag in BOLD_TAGS {
        text = text.replace(tag, "");
    }
    for tag in LINE_BREAK_TAGS {
        text = text.replace(tag, "\n");
    }
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Converts a device set name.
///
/// EAGLE device sets often end with a separator which is meant to be
/// followed by a device suffix, e.g. `"LM358-"`. A single trailing `-` or
/// `_` is stripped unless nothing would be left.
pub fn convert_component_name(raw: &str) -> ElementName {
    let trimmed = raw.trim();
    let name = match trimmed.strip_suffix(SEPARATORS) {
        Some(rest) if !rest.is_empty() => rest,
        _ => trimmed,
    };
    element_name_or_unnamed(name)
}

/// Joins a device set name and a device suffix with exactly one separator.
///
/// A separator trailing `name` or leading `suffix` is reused, the suffix's
/// one winning if both are present. Without either, `-` is used. Both parts
/// are trimmed first and an empty part is not joined at all.
pub fn convert_device_name(name: &str, suffix: &str) -> ElementName {
    let mut name = name.trim();
    let mut suffix = suffix.trim();
    if suffix.is_empty() {
        return element_name_or_unnamed(name);
    }

    let mut separator = '-';
    if let Some(last) = name.chars().last().filter(|c| is_separator(*c)) {
        separator = last;
        name = &name[..name.len() - last.len_utf8()];
    }
    if let Some(first) = suffix.chars().next().filter(|c| is_separator(*c)) {
        separator = first;
        suffix = &suffix[first.len_utf8()..];
    }
    if name.is_empty() {
        return element_name_or_unnamed(suffix);
    }
    element_name_or_unnamed(&format!("{}{}{}", name, separator, suffix))
}

/// Converts a gate name into a device-unique gate suffix.
///
/// Auto-generated names (`G$1`, `G$2`, ...) denote the only or default gate
/// and become the empty suffix.
pub fn convert_gate_name(raw: &str) -> GateSuffix {
    if auto_name_number(raw, "G$").is_some() {
        return GateSuffix::default();
    }
    let trimmed = raw.trim();
    let name = trimmed.strip_prefix('-').unwrap_or(trimmed);
    GateSuffix::new(underscore_whitespace(name)).unwrap_or_default()
}

/// Converts a pin or pad name; auto-generated `P$<n>` names become `<n>`.
pub fn convert_pin_or_pad_name(raw: &str) -> CircuitIdentifier {
    let name = match auto_name_number(raw, "P$") {
        Some(digits) => digits.to_string(),
        None => underscore_whitespace(raw),
    };
    CircuitIdentifier::new(name).unwrap_or_else(|_| CircuitIdentifier::unnamed())
}

/// Maps EAGLE's placeholder texts onto attribute substitutions.
pub fn convert_text_value(raw: &str) -> String {
    match raw {
        ">NAME" => "{{NAME}}".to_string(),
        ">VALUE" => "{{VALUE}}".to_string(),
        _ => raw.to_string(),
    }
}
