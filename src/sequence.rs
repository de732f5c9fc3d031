/// Reserved token marking the boundary between consecutive days.
pub const SENTINEL: &str = "-1";

/// Canonicalize a raw token stream into the catalog key form: every day's
/// activities space-joined and terminated by the sentinel, empty day
/// segments dropped. Sentinel-only or blank input yields an empty string
/// (zero days). Idempotent.
pub fn normalize(raw: &str) -> String {
    let days = split_days(raw);
    if days.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for day in days {
        out.push_str(&day.join(" "));
        out.push(' ');
        out.push_str(SENTINEL);
        out.push(' ');
    }
    out.pop();
    out
}

/// Render a sequence as human-readable day-separated text, e.g.
/// `"a b -1 c -1"` becomes `"a b -> c"`.
pub fn format(seq: &str) -> String {
    split_days(seq)
        .into_iter()
        .map(|day| day.join(" "))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Number of days in a sequence, counted as sentinel occurrences.
pub fn day_count(seq: &str) -> usize {
    seq.split_whitespace().filter(|t| *t == SENTINEL).count()
}

/// Build a candidate sequence from per-day activity lists. Blank entries
/// are skipped; each remaining day is terminated by the sentinel. All-blank
/// input yields an empty sequence.
pub fn from_days<S: AsRef<str>>(days: &[S]) -> String {
    let joined = days
        .iter()
        .map(|d| d.as_ref().trim())
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join(&format!(" {SENTINEL} "));
    normalize(&joined)
}

// Token-level day split: the sentinel only counts as a standalone token,
// never as a substring of an activity name.
fn split_days(seq: &str) -> Vec<Vec<&str>> {
    let mut days = Vec::new();
    let mut current = Vec::new();
    for tok in seq.split_whitespace() {
        if tok == SENTINEL {
            if !current.is_empty() {
                days.push(std::mem::take(&mut current));
            }
        } else {
            current.push(tok);
        }
    }
    if !current.is_empty() {
        days.push(current);
    }
    days
}
