use crate::publication::Publication;

/// Publications sharing a display year, in render order.
#[derive(Debug)]
pub struct YearGroup<'a> {
    pub year: i64,
    pub label: &'a str,
    pub publications: Vec<&'a Publication>,
}

/// Sort newest first. The sort is stable, so publications from the same year keep their input
/// order.
pub fn sort_by_year(publications: &mut [Publication]) {
    publications.sort_by(|a, b| b.year.value.cmp(&a.year.value));
}

/// Bucket already-sorted publications by year label in a single pass, then order the buckets
/// by numeric year, newest first.
pub fn group_by_year(sorted: &[Publication]) -> Vec<YearGroup<'_>> {
    let mut groups: Vec<YearGroup<'_>> = Vec::new();
    for publication in sorted {
        let label = publication.year.label.as_str();
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.publications.push(publication),
            None => groups.push(YearGroup {
                year: publication.year.value,
                label,
                publications: vec![publication],
            }),
        }
    }
    groups.sort_by(|a, b| b.year.cmp(&a.year));
    groups
}
