//! Date display formatting.

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format an ISO `YYYY-MM-DD` date for display, e.g. `March 12, 2025`.
///
/// Input that does not parse as a date is returned unchanged rather than
/// reported as an error, in keeping with the graceful-degradation policy
/// of the rest of the pipeline.
#[must_use]
pub fn format_date(date: &str) -> String {
    let mut parts = date.splitn(3, '-');
    let parsed = (|| {
        let year = parts.next()?;
        let month: usize = parts.next()?.parse().ok()?;
        let day: u32 = parts.next()?.parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(format!("{} {day}, {year}", MONTHS[month - 1]))
    })();
    parsed.unwrap_or_else(|| date.to_owned())
}
