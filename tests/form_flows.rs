//! Submit, save and delete as the pages run them, against the fake service.
mod common;

use chrono::NaiveDate;
use common::{record, spawn_fake};
use employee_desk::actions::{delete_record, save_edit, submit_new, SaveOutcome, SubmitOutcome};
use employee_desk::api::{CREATE_FAILED, DELETE_FAILED};
use employee_desk::models::{EmployeeRecord, Field};
use employee_desk::notice::{Notice, NoticeKind};
use employee_desk::roster::{EditPanel, ListingDisplay, LoadState, Roster};
use employee_desk::validation::ValidationError;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

#[tokio::test]
async fn rejected_drafts_never_reach_the_server() {
    let (client, fake) = spawn_fake(Vec::new()).await;

    let mut missing = record("N1", "Nadia");
    missing.email.clear();
    let mut long_id = record("ABCDEFGHIJK", "Nadia");
    long_id.phone = "0123456789".into();
    let mut bad_phone = record("N1", "Nadia");
    bad_phone.phone = "12a4567890".into();
    let mut future = record("N1", "Nadia");
    future.date_of_joining = "2025-03-11".into();

    let expected = [
        (missing, "All fields are mandatory."),
        (long_id, "Employee ID must be a maximum of 10 characters."),
        (bad_phone, "Phone number must be exactly 10 digits."),
        (future, "Date of Joining cannot be a future date."),
    ];
    for (draft, message) in expected {
        let outcome = submit_new(&client, &draft, today()).await;
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)), "{:?}", outcome);
        assert_eq!(outcome.notice(), Notice::error(message));
    }

    assert_eq!(fake.requests(), 0);
    assert!(fake.records().is_empty());
}

#[tokio::test]
async fn created_record_resets_the_draft_and_reports_success() {
    let (client, fake) = spawn_fake(Vec::new()).await;
    let mut draft = record("N2", "Tomas");
    draft.date_of_joining = "2025-03-10".into();

    let outcome = submit_new(&client, &draft, today()).await;
    let notice = outcome.notice();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.text, "Employee added successfully!");
    match outcome {
        SubmitOutcome::Created { reset, .. } => {
            assert_eq!(reset, EmployeeRecord::default());
            assert_eq!(reset.first_empty_field(), Some(Field::Name));
        }
        other => panic!("expected a created outcome, got {:?}", other),
    }
    assert_eq!(fake.records(), vec![draft]);
}

#[tokio::test]
async fn failed_create_keeps_server_text_and_the_draft() {
    let (client, fake) = spawn_fake(vec![record("N3", "Priya")]).await;

    let outcome = submit_new(&client, &record("N3", "Priya"), today()).await;
    assert_eq!(outcome, SubmitOutcome::Failed("Employee ID already exists".into()));
    assert_ne!(outcome.notice().text, CREATE_FAILED);
    assert_eq!(fake.records().len(), 1);
}

#[tokio::test]
async fn saved_edit_patches_the_row_without_refetching() {
    let (client, fake) = spawn_fake(vec![record("S1", "Ravi"), record("S2", "Sofia")]).await;

    let mut roster = Roster::from(client.list_employees().await.unwrap());
    let mut panel = EditPanel::default();
    let mut draft = roster.get("S2").unwrap().for_editing();
    panel.open("S2".into());
    draft.role = "Head of Marketing".into();

    match save_edit(&client, "S2", &draft, today()).await {
        SaveOutcome::Saved(saved) => {
            assert!(roster.replace(&saved));
            assert!(panel.close_if_showing("S2"));
        }
        other => panic!("expected a saved outcome, got {:?}", other),
    }

    assert_eq!(roster.get("S2").unwrap().role, "Head of Marketing");
    assert!(!panel.is_open());
    assert_eq!(fake.list_calls(), 1);
    assert_eq!(fake.records()[1].role, "Head of Marketing");
}

#[tokio::test]
async fn failed_save_leaves_the_panel_open() {
    let (client, fake) = spawn_fake(Vec::new()).await;
    let mut panel = EditPanel::default();
    panel.open("GONE".into());

    let outcome = save_edit(&client, "GONE", &record("GONE", "Ghost"), today()).await;
    assert_eq!(outcome, SaveOutcome::Failed("Employee not found".into()));
    assert_eq!(panel.employee_id(), Some("GONE"));

    let mut blank = record("GONE", "Ghost");
    blank.name = " ".into();
    let before = fake.requests();
    let outcome = save_edit(&client, "GONE", &blank, today()).await;
    assert_eq!(outcome, SaveOutcome::Rejected(ValidationError::MissingField(Field::Name)));
    assert_eq!(fake.requests(), before);
    assert!(panel.is_open());
}

#[tokio::test]
async fn deleted_row_disappears_without_refetching() {
    let (client, fake) = spawn_fake(vec![record("D1", "Ana")]).await;

    let mut roster = Roster::from(client.list_employees().await.unwrap());
    delete_record(&client, "D1").await.unwrap();
    assert!(roster.remove("D1"));

    assert_eq!(ListingDisplay::resolve(&LoadState::Loaded, roster.is_empty()), ListingDisplay::Empty);
    assert_eq!(fake.list_calls(), 1);

    let err = delete_record(&client, "D1").await.unwrap_err();
    assert_eq!(err, DELETE_FAILED);
}
