use crate::player::Player;
use std::collections::HashSet;

pub struct RankedSelector;

impl RankedSelector {
    /// Takes the first `count` candidates not in `used`, in candidate order.
    /// Returns `None` rather than a short list when the candidates run out.
    pub fn select_first_available<'p>(
        candidates: &[&'p Player],
        count: usize,
        used: &HashSet<&str>,
    ) -> Option<Vec<&'p Player>> {
        Self::select_where(candidates, count, |candidate, _| {
            !used.contains(candidate.id.as_str())
        })
    }

    /// Same scan, gated by `accept`, which sees the candidate and the players
    /// already taken by this call.
    pub fn select_where<'p, F>(
        candidates: &[&'p Player],
        count: usize,
        mut accept: F,
    ) -> Option<Vec<&'p Player>>
    where
        F: FnMut(&Player, &[&'p Player]) -> bool,
    {
        let mut selected: Vec<&'p Player> = Vec::with_capacity(count);

        if count == 0 {
            return Some(selected);
        }

        for &candidate in candidates {
            if selected.iter().any(|p| p.id == candidate.id) {
                continue;
            }

            if accept(candidate, &selected) {
                selected.push(candidate);

                if selected.len() == count {
                    return Some(selected);
                }
            }
        }

        None
    }
}
