/// A command palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: &'static str,
    pub label: &'static str,
}

/// Case-insensitive subsequence match. Returns a score (higher is better)
/// or None when the query is not a subsequence of the label. Consecutive
/// hits and early starts score higher, so "dash" ranks "Dashboard" above
/// "Delete a session hold".
fn fuzzy_score(query: &str, label: &str) -> Option<i32> {
    if query.is_empty() {
        return Some(0);
    }

    let label_chars: Vec<char> = label.to_lowercase().chars().collect();
    let mut score = 0i32;
    let mut pos = 0usize;
    let mut prev_hit: Option<usize> = None;

    for q in query.to_lowercase().chars() {
        let found = label_chars[pos..].iter().position(|&c| c == q)?;
        let at = pos + found;
        score += match prev_hit {
            Some(p) if at == p + 1 => 3,
            _ => 1,
        };
        if prev_hit.is_none() {
            // Earlier first hit, better match.
            score -= at as i32;
        }
        prev_hit = Some(at);
        pos = at + 1;
    }

    Some(score)
}

/// Filter and rank commands for the palette. An empty query keeps the
/// original order.
pub fn filter_commands<'a>(query: &str, commands: &'a [Command]) -> Vec<&'a Command> {
    if query.is_empty() {
        return commands.iter().collect();
    }

    let mut scored: Vec<(i32, &Command)> = commands
        .iter()
        .filter_map(|c| fuzzy_score(query, c.label).map(|s| (s, c)))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.label.cmp(b.1.label)));
    scored.into_iter().map(|(_, c)| c).collect()
}
