use crate::Worker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedWorker<'a> {
    pub worker: &'a Worker,
    pub proficiency: u8,
}

/// Workers holding `task_type`, most proficient first.
///
/// `sort_by` is stable, so equally proficient workers keep their input order.
pub fn qualified_workers<'a>(workers: &'a [Worker], task_type: &str) -> Vec<QualifiedWorker<'a>> {
    let mut candidates: Vec<_> = workers
        .iter()
        .filter_map(|worker| {
            worker
                .proficiency(task_type)
                .map(|proficiency| QualifiedWorker { worker, proficiency })
        })
        .collect();

    candidates.sort_by(|a, b| b.proficiency.cmp(&a.proficiency));
    candidates
}
