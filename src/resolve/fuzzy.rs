//! Approximate matching of directory paths against a short target name.

/// How well a path matches the target, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchTier {
    /// Last path segment equals the target.
    ExactName,
    /// Last path segment contains the target.
    NameContains,
    /// Somewhere in the path contains the target.
    PathContains,
    /// Target characters appear in order, with gaps.
    Subsequence,
}

/// Comparable score; lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Score {
    tier: MatchTier,
    distance: usize,
}

fn score(target: &str, candidate: &str) -> Option<Score> {
    let target = target.to_lowercase();
    let path = candidate.to_lowercase();
    if target.is_empty() || !is_subsequence(&target, &path) {
        return None;
    }
    let name = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    let tier = if name == target {
        MatchTier::ExactName
    } else if name.contains(&target) {
        MatchTier::NameContains
    } else if path.contains(&target) {
        MatchTier::PathContains
    } else {
        MatchTier::Subsequence
    };
    Some(Score {
        tier,
        distance: levenshtein(&target, &path),
    })
}

/// Pick the best-ranked candidate for `target`, preferring later entries on ties.
pub fn best_match<'a, I>(target: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(Score, &'a str)> = None;
    for candidate in candidates {
        let Some(current) = score(target, candidate) else {
            continue;
        };
        // `<=` lets the more recent history entry win a tie.
        let replace = match best {
            Some((top, _)) => current <= top,
            None => true,
        };
        if replace {
            best = Some((current, candidate));
        }
    }
    best.map(|(_, candidate)| candidate)
}

/// True when every char of `needle` appears in `haystack` in order.
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|wanted| hay.any(|c| c == wanted))
}

/// Classic edit distance over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}
