use crate::models::Item;

/// Grouped view of a flat item list: category label to ordered items.
/// Labels appear in first-occurrence order, items keep their input order.
pub type Grouped = Vec<(String, Vec<Item>)>;

/// Partition items by their source label ("Other" when absent).
///
/// Every input item lands in exactly one group; the total count is
/// preserved. Insertion order of the labels follows the first occurrence in
/// the input, so a re-render over identical input is deterministic.
pub fn group_by_category(items: &[Item]) -> Grouped {
    let mut groups: Grouped = Vec::new();
    for item in items {
        let label = item.label();
        match groups.iter_mut().find(|(l, _)| l == label) {
            Some((_, members)) => members.push(item.clone()),
            None => groups.push((label.to_string(), vec![item.clone()])),
        }
    }
    groups
}

/// Stable partition: every top pick precedes every non-top-pick, and items
/// with equal top-pick status keep their relative input order.
///
/// Deliberately not a comparator sort — the tie-break is strictly
/// "preserve original order".
pub fn rank(items: &[Item]) -> Vec<Item> {
    let mut ranked = Vec::with_capacity(items.len());
    ranked.extend(items.iter().filter(|i| i.top_pick).cloned());
    ranked.extend(items.iter().filter(|i| !i.top_pick).cloned());
    ranked
}
