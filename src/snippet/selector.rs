//! Best-window selection under the character budget.

/// Inclusive word range chosen for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetWindow {
    pub start: usize,
    pub end: usize,
}

/// Find the contiguous word window with the highest summed weight whose
/// total character cost fits `budget`, where each word costs its normalized
/// length plus one separator.
///
/// Classic fixed-capacity sliding window: grow from the first word, then
/// slide right one word at a time, shrinking from the left until the new
/// word fits. Only a strictly greater score replaces the current best, so
/// ties keep the earliest window. The first word is always included even
/// when it alone exceeds the budget; the window is never empty.
pub fn select(weights: &[u32], word_lens: &[usize], budget: usize) -> SnippetWindow {
    debug_assert_eq!(weights.len(), word_lens.len());
    debug_assert!(!weights.is_empty());
    let n = weights.len();

    let mut sum = weights[0];
    let mut length = word_lens[0] + 1;
    let mut best = SnippetWindow { start: 0, end: 0 };
    let mut i = 1;
    while i < n && length + word_lens[i] + 1 <= budget {
        sum += weights[i];
        length += word_lens[i] + 1;
        best.end = i;
        i += 1;
    }
    let mut max = sum;

    let mut start = 0;
    while i < n {
        while start < i && length + word_lens[i] + 1 > budget {
            sum -= weights[start];
            length -= word_lens[start] + 1;
            start += 1;
        }
        sum += weights[i];
        length += word_lens[i] + 1;
        if length <= budget && sum > max {
            max = sum;
            best = SnippetWindow { start, end: i };
        }
        i += 1;
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_fits() {
        let window = select(&[1, 0, 2], &[5, 5, 5], 200);
        assert_eq!(window, SnippetWindow { start: 0, end: 2 });
    }

    #[test]
    fn test_prefers_heavier_later_window() {
        // Budget fits two words at a time; the heavy pair is at the end.
        let window = select(&[0, 0, 0, 2, 2], &[5, 4, 5, 5, 7], 15);
        assert_eq!(window, SnippetWindow { start: 3, end: 4 });
    }

    #[test]
    fn test_tie_keeps_earliest_window() {
        // Windows (0,1) and (2,3) both score 1; the first one found wins.
        let window = select(&[1, 0, 1, 0], &[4, 4, 4, 4], 10);
        assert_eq!(window, SnippetWindow { start: 0, end: 1 });
    }

    #[test]
    fn test_oversized_first_word_still_selected() {
        let window = select(&[0, 3], &[50, 4], 10);
        // The first word exceeds the budget on its own but the window may
        // not be empty; the later word then wins on score.
        assert_eq!(window, SnippetWindow { start: 1, end: 1 });
    }

    #[test]
    fn test_window_cost_stays_within_budget() {
        let weights = [3, 1, 4, 1, 5, 9, 2, 6];
        let lens = [4, 6, 3, 7, 5, 4, 6, 3];
        let budget = 20;
        let window = select(&weights, &lens, budget);
        let cost: usize = lens[window.start..=window.end]
            .iter()
            .map(|l| l + 1)
            .sum();
        assert!(cost <= budget);

        // No other feasible window scores strictly higher.
        let best: u32 = weights[window.start..=window.end].iter().sum();
        for s in 0..weights.len() {
            let mut cost = 0;
            let mut score = 0;
            for e in s..weights.len() {
                cost += lens[e] + 1;
                score += weights[e];
                if cost <= budget {
                    assert!(score <= best);
                }
            }
        }
    }
}
