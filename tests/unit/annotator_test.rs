use crate::fields::model::FieldId;
use crate::problems::annotator::StatusAnnotator;
use crate::problems::problem::{Difficulty, ProblemCollection, ProblemView, RuleType};
use crate::progress::model::{JudgeStatus, ProgressMapSet, ProgressRecord, Scope};

fn problem(id: u64, rule_type: RuleType) -> ProblemView {
    ProblemView {
        id,
        display_id: format!("{}", 1000 + id),
        title: format!("Problem {}", id),
        rule_type,
        field: FieldId::from("0"),
        difficulty: Difficulty::Mid,
        visible: true,
        contest_id: None,
        is_bonus: false,
        my_status: None,
    }
}

fn record(id: u64, status: JudgeStatus) -> ProgressRecord {
    ProgressRecord {
        problem_id: format!("{}", 1000 + id),
        status,
        score: None,
    }
}

fn progress() -> ProgressMapSet {
    let mut set = ProgressMapSet::default();
    set.namespace_mut(RuleType::Acm, Scope::Global).insert("1", record(1, JudgeStatus::Accepted));
    set.namespace_mut(RuleType::Acm, Scope::Global).insert("2", record(2, JudgeStatus::WrongAnswer));
    set.namespace_mut(RuleType::Oi, Scope::Global).insert("3", record(3, JudgeStatus::PartiallyAccepted));
    set.namespace_mut(RuleType::Acm, Scope::Contest).insert("1", record(1, JudgeStatus::Pending));
    set.namespace_mut(RuleType::Oi, Scope::Contest).insert("4", record(4, JudgeStatus::Accepted));
    set
}

fn statuses(collection: &ProblemCollection) -> Vec<Option<JudgeStatus>> {
    collection.problems().iter().map(|p| p.my_status).collect()
}

#[test]
fn anonymous_requests_see_no_status() {
    let mut page = ProblemCollection::page(
        vec![problem(1, RuleType::Acm), problem(3, RuleType::Oi)],
        2,
    );
    // stale values from an earlier pass must be cleared too
    page.problems_mut()[0].my_status = Some(JudgeStatus::Accepted);

    let annotated = StatusAnnotator::global().annotate(&mut page, &progress(), false);
    assert_eq!(annotated, 0);
    assert_eq!(statuses(&page), vec![None, None]);
}

#[test]
fn global_page_reads_namespace_per_rule_type() {
    let mut page = ProblemCollection::page(
        vec![
            problem(1, RuleType::Acm),
            problem(2, RuleType::Acm),
            problem(3, RuleType::Oi),
            problem(5, RuleType::Acm),
        ],
        10,
    );

    let annotated = StatusAnnotator::global().annotate(&mut page, &progress(), true);
    assert_eq!(annotated, 3);
    assert_eq!(
        statuses(&page),
        vec![
            Some(JudgeStatus::Accepted),
            Some(JudgeStatus::WrongAnswer),
            Some(JudgeStatus::PartiallyAccepted),
            None,
        ]
    );
}

#[test]
fn rule_type_mismatch_does_not_leak_across_namespaces() {
    // id 3 only has OI progress; as an ACM problem it stays unattempted
    let mut single = ProblemCollection::Single(problem(3, RuleType::Acm));
    StatusAnnotator::global().annotate(&mut single, &progress(), true);
    assert_eq!(statuses(&single), vec![None]);
}

#[test]
fn contest_scope_ignores_global_progress() {
    let mut list = ProblemCollection::List(vec![
        problem(1, RuleType::Acm),
        problem(2, RuleType::Acm),
        problem(4, RuleType::Oi),
    ]);

    StatusAnnotator::contest().annotate(&mut list, &progress(), true);
    assert_eq!(
        statuses(&list),
        vec![Some(JudgeStatus::Pending), None, Some(JudgeStatus::Accepted)]
    );
}

#[test]
fn single_and_one_element_page_agree() {
    let progress = progress();
    for id in 1..=5 {
        for rule in [RuleType::Acm, RuleType::Oi] {
            for annotator in [StatusAnnotator::global(), StatusAnnotator::contest()] {
                let mut single = ProblemCollection::Single(problem(id, rule));
                let mut page = ProblemCollection::page(vec![problem(id, rule)], 1);
                annotator.annotate(&mut single, &progress, true);
                annotator.annotate(&mut page, &progress, true);
                assert_eq!(statuses(&single), statuses(&page));
            }
        }
    }
}

#[test]
fn missing_namespaces_yield_null_status() {
    let mut page = ProblemCollection::page(vec![problem(1, RuleType::Acm), problem(3, RuleType::Oi)], 2);
    let annotated = StatusAnnotator::global().annotate(&mut page, &ProgressMapSet::default(), true);
    assert_eq!(annotated, 0);
    assert_eq!(statuses(&page), vec![None, None]);
}

#[test]
fn empty_collection_is_noop() {
    let mut page = ProblemCollection::page(Vec::new(), 0);
    assert_eq!(StatusAnnotator::global().annotate(&mut page, &progress(), true), 0);
    assert!(page.is_empty());
}

#[test]
fn annotation_keeps_other_fields() {
    let original = problem(1, RuleType::Acm);
    let mut single = ProblemCollection::Single(original.clone());
    StatusAnnotator::global().annotate(&mut single, &progress(), true);

    let annotated = &single.problems()[0];
    assert_eq!(annotated.display_id, original.display_id);
    assert_eq!(annotated.title, original.title);
    assert_eq!(annotated.my_status, Some(JudgeStatus::Accepted));
}
