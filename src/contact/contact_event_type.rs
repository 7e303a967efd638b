pub const OTHER_EVENT_TYPE: &str = "other";
pub const NOT_SPECIFIED: &str = "Not specified";

/// Collapse the event-type select and its free-text "other" box into the
/// string shown to the business owner.
///
/// Precedence: the free text when the select is `"other"` and the text is
/// non-empty, then the select value verbatim, then `"Not specified"`.
/// `"other"` with no free text therefore resolves to `"other"`.
pub fn resolve_event_type<'a>(
    event_type: Option<&'a str>,
    event_type_other: Option<&'a str>,
) -> &'a str {
    let event_type = event_type.filter(|value| !value.is_empty());
    let event_type_other = event_type_other.filter(|value| !value.is_empty());
    match (event_type, event_type_other) {
        (Some(OTHER_EVENT_TYPE), Some(other)) => other,
        (Some(event_type), _) => event_type,
        (None, _) => NOT_SPECIFIED,
    }
}
