mod common;

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{FailingWrites, email, fake_subject, memory_state, state_with};
use schoolnav_catalog::{Catalog, all_paths};
use schoolnav_models::{Role, SectionState, SidebarConfig};

fn paths(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|p| p.to_string()).collect()
}

#[test]
fn test_editor_starts_from_open_default() {
    let state = memory_state();
    let editor = state.editor(Role::Teacher, fake_subject());

    assert!(!editor.config().enabled);
    assert_eq!(editor.config().allowed, all_paths(Role::Teacher));
    assert!(editor
        .section_states()
        .iter()
        .all(|(_, state)| *state == SectionState::Checked));
}

#[test]
fn test_toggle_item_twice_restores_membership() {
    let state = memory_state();
    let mut editor = state.editor(Role::Parent, fake_subject());
    let before = editor.config().clone();

    editor.toggle_item("/messages");
    assert!(!editor.config().allowed.contains("/messages"));
    editor.toggle_item("/messages");

    assert_eq!(editor.config(), &before);
}

#[test]
fn test_every_edit_is_persisted_immediately() {
    let state = memory_state();
    let subject = fake_subject();
    let mut editor = state.editor(Role::Headmaster, subject.clone());

    editor.toggle_item("/settings");
    assert_eq!(&state.store.get(Role::Headmaster, &subject), editor.config());

    editor.toggle_section("Finance");
    assert_eq!(&state.store.get(Role::Headmaster, &subject), editor.config());

    editor.toggle_enabled(true);
    assert_eq!(&state.store.get(Role::Headmaster, &subject), editor.config());
    assert!(editor.is_persisted());
}

#[test]
fn test_attendance_section_scenario() {
    let state = memory_state();
    let subject = email("teacher@school.test");
    state
        .store
        .set(Role::Teacher, &subject, &SidebarConfig::restricted(Vec::<String>::new()));

    let mut editor = state.editor(Role::Teacher, subject.clone());

    assert!(editor.toggle_section("Attendance"));
    assert_eq!(editor.config().allowed, paths(&["/attendance/students"]));
    assert_eq!(editor.section_state("Attendance"), Some(SectionState::Checked));

    assert!(editor.toggle_section("Attendance"));
    assert!(editor.config().allowed.is_empty());
    assert_eq!(editor.section_state("Attendance"), Some(SectionState::Unchecked));
    assert!(state.store.get(Role::Teacher, &subject).allowed.is_empty());
}

#[test]
fn test_full_section_removes_exactly_its_paths() {
    let state = memory_state();
    let mut editor = state.editor(Role::Headmaster, fake_subject());
    let mut expected = editor.config().allowed.clone();
    for path in Catalog::Headmaster.section("Reports").unwrap().paths() {
        expected.remove(path);
    }

    editor.toggle_section("Reports");

    assert_eq!(editor.config().allowed, expected);
    assert_eq!(editor.section_state("Reports"), Some(SectionState::Unchecked));
}

#[test]
fn test_partial_section_adds_only_missing_paths() {
    let state = memory_state();
    let subject = fake_subject();
    state.store.set(
        Role::Teacher,
        &subject,
        &SidebarConfig::restricted(["/grades", "/dashboard", "/retired/page"]),
    );
    let mut editor = state.editor(Role::Teacher, subject);
    assert_eq!(
        editor.section_state("Assessments"),
        Some(SectionState::Indeterminate)
    );

    editor.toggle_section("Assessments");

    assert_eq!(
        editor.config().allowed,
        paths(&["/assignments", "/dashboard", "/exams", "/grades", "/retired/page"])
    );
    assert_eq!(editor.section_state("Assessments"), Some(SectionState::Checked));
}

#[test]
fn test_unknown_section_is_a_no_op() {
    let state = memory_state();
    let writes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&writes);
    let _subscription = state.store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let mut editor = state.editor(Role::Parent, fake_subject());
    let before = editor.config().clone();

    assert!(!editor.toggle_section("Administration"));
    assert_eq!(editor.config(), &before);
    assert_eq!(writes.load(Ordering::SeqCst), 0);
    assert_eq!(editor.section_state("Administration"), None);
}

#[test]
fn test_enable_with_empty_allow_list_refills_catalog() {
    let state = memory_state();
    let subject = fake_subject();
    state.store.set(
        Role::Parent,
        &subject,
        &SidebarConfig {
            enabled: false,
            allowed: BTreeSet::new(),
        },
    );
    let mut editor = state.editor(Role::Parent, subject.clone());

    editor.toggle_enabled(true);

    assert!(editor.config().enabled);
    assert_eq!(editor.config().allowed, all_paths(Role::Parent));
    assert_eq!(state.store.get(Role::Parent, &subject), *editor.config());
}

#[test]
fn test_enable_keeps_non_empty_allow_list() {
    let state = memory_state();
    let subject = fake_subject();
    state
        .store
        .set(Role::Parent, &subject, &SidebarConfig::open(["/children"]));
    let mut editor = state.editor(Role::Parent, subject);

    editor.toggle_enabled(true);
    assert_eq!(editor.config().allowed, paths(&["/children"]));

    editor.toggle_enabled(false);
    assert!(!editor.config().enabled);
    assert_eq!(editor.config().allowed, paths(&["/children"]));
}

#[test]
fn test_select_subject_reloads() {
    let state = memory_state();
    let first = fake_subject();
    let second = email("second@school.test");
    state
        .store
        .set(Role::Parent, &second, &SidebarConfig::restricted(["/messages"]));

    let mut editor = state.editor(Role::Teacher, first);
    editor.toggle_item("/exams");

    editor.select_subject(Role::Parent, second.clone());

    assert_eq!(editor.role(), Role::Parent);
    assert_eq!(editor.catalog(), Catalog::Parent);
    assert_eq!(editor.subject(), &second);
    assert_eq!(editor.config(), &SidebarConfig::restricted(["/messages"]));
}

#[test]
fn test_management_view_shares_headmaster_entries() {
    let state = memory_state();
    let subject = email("deputy@school.test");

    let mut management = state.headmaster_management(subject.clone());
    assert_eq!(management.catalog(), Catalog::HeadmasterManagement);
    assert!(management.section_state("Administration").is_none());
    management.toggle_section("Finance");
    management.toggle_enabled(true);

    let headmaster = state.editor(Role::Headmaster, subject.clone());
    assert_eq!(headmaster.config(), management.config());
    assert_eq!(headmaster.section_state("Finance"), Some(SectionState::Unchecked));
    assert_eq!(
        headmaster.section_state("Administration"),
        Some(SectionState::Checked)
    );

    // Same role keeps the management catalog
    management.select_subject(Role::Headmaster, fake_subject());
    assert_eq!(management.catalog(), Catalog::HeadmasterManagement);
}

#[test]
fn test_failed_persistence_is_silent_but_visible() {
    let state = state_with(Arc::new(FailingWrites::default()));
    let subject = fake_subject();
    let mut editor = state.editor(Role::Teacher, subject.clone());

    editor.toggle_item("/exams");

    assert!(!editor.is_persisted());
    assert!(!editor.config().allowed.contains("/exams"));
    assert!(state.store.get(Role::Teacher, &subject).allowed.contains("/exams"));
}

#[test]
fn test_sections_view_mirrors_catalog() {
    let state = memory_state();
    let subject = fake_subject();
    state
        .store
        .set(Role::Teacher, &subject, &SidebarConfig::restricted(["/classrooms"]));
    let editor = state.editor(Role::Teacher, subject);

    let sections = editor.sections();
    assert_eq!(sections.len(), Catalog::Teacher.sections().len());

    let classes = sections.iter().find(|s| s.title == "Classes").unwrap();
    assert_eq!(classes.state, SectionState::Indeterminate);
    assert!(classes.items[0].checked);
    assert!(!classes.items[1].checked);
}
