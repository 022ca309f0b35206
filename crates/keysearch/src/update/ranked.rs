use crate::Occurrence;

/// Moves the last occurrence of the list to its rank.
///
/// All the occurrences but the last must already be sorted by decreasing frequency.
/// The insertion point is found by a binary search over them: it is the first
/// occurrence with a strictly lower frequency, the new occurrence is therefore
/// placed after the ones with the same frequency.
///
/// The search does not stop on an occurrence with the same frequency, it keeps
/// going until the end of that band. On ties the probed midpoints are therefore
/// those of the whole search, not of a search ending at the first equal frequency.
///
/// Returns the midpoints probed by the search, `None` if there was nothing to sort.
pub fn insert_last_occurrence(occurrences: &mut Vec<Occurrence>) -> Option<Vec<usize>> {
    if occurrences.len() <= 1 {
        return None;
    }

    let occurrence = occurrences.pop()?;
    let mut midpoints = Vec::new();
    let rank = rank_of(occurrences, occurrence.frequency, |mid| midpoints.push(mid));
    occurrences.insert(rank, occurrence);
    Some(midpoints)
}

/// Inserts the occurrence at its rank in the already sorted list.
pub(crate) fn insert_ranked(occurrences: &mut Vec<Occurrence>, occurrence: Occurrence) {
    let rank = rank_of(occurrences, occurrence.frequency, |_| ());
    occurrences.insert(rank, occurrence);
}

fn rank_of(occurrences: &[Occurrence], frequency: u32, mut probe: impl FnMut(usize)) -> usize {
    let mut low = 0;
    let mut high = occurrences.len();
    while low < high {
        // midpoint of the inclusive range [low, high - 1]
        let mid = (low + high - 1) / 2;
        probe(mid);
        if frequency <= occurrences[mid].frequency {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}
