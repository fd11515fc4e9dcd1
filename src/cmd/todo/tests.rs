// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

use super::{TodoField, full_project, run_todo_done, run_todo_list, todo_cell};
use crate::cli::todo::{TodoDoneArgs, TodoListArgs};
use crate::error::{GswError, GswResult};
use crate::gitlab::fake::{Call, FakeGitlab};
use crate::gitlab::models::Todo;
use crate::output::{Field, OutputMode, Printer};
use serde_json::json;

fn merge_request_todo(id: u64, iid: u64) -> Todo {
    serde_json::from_value(json!({
        "id": id,
        "target_type": "MergeRequest",
        "body": "Please review",
        "state": "pending",
        "target_url": format!("https://gitlab.example.com/platform/gsw/-/merge_requests/{iid}"),
        "project": { "id": 7, "name": "gsw", "path_with_namespace": "platform/gsw" },
        "target": { "iid": iid, "title": format!("Change {iid}"), "state": "opened" },
    }))
    .unwrap()
}

fn issue_todo(id: u64) -> Todo {
    serde_json::from_value(json!({
        "id": id,
        "target_type": "Issue",
        "body": "Mentioned you",
        "project": { "id": 7, "name": "gsw" },
        "target": { "iid": 3, "title": "Crash", "state": "opened" },
    }))
    .unwrap()
}

fn fake() -> FakeGitlab {
    let mut fake = FakeGitlab::default();
    fake.todos = vec![
        merge_request_todo(101, 4),
        issue_todo(102),
        merge_request_todo(103, 12),
    ];
    fake
}

async fn list(args: &TodoListArgs, fake: &FakeGitlab) -> (GswResult<()>, String) {
    let mut printer = Printer::new(Vec::new(), OutputMode::Plain);
    let result = run_todo_list(args, fake, &mut printer).await;
    (result, String::from_utf8(printer.into_inner()).unwrap())
}

#[test]
fn test_vocabulary() {
    assert_eq!(TodoField::ALL.len(), 11);
    assert_eq!(
        TodoField::available(),
        "id, project_id, project, target_iid, target_type, target_state, body, \
         target_title, labels, target_url, full_project"
    );
    assert_eq!(
        TodoField::DEFAULT,
        &[
            TodoField::Id,
            TodoField::TargetState,
            TodoField::Project,
            TodoField::TargetType,
            TodoField::TargetIid,
            TodoField::TargetTitle,
        ]
    );
}

#[test]
fn test_full_project() {
    assert_eq!(
        full_project("https://gitlab.example.com/platform/gsw/-/merge_requests/4"),
        Some("platform/gsw")
    );
    assert_eq!(
        full_project("http://host:8080/a/b/c/-/merge_requests/1#note_2"),
        Some("a/b/c")
    );
    assert_eq!(full_project("https://gitlab.example.com/platform/gsw/-/issues/4"), None);
    assert_eq!(full_project("not a url"), None);
}

#[test]
fn test_todo_cell_resolution() {
    let todo = merge_request_todo(101, 4);
    let cells: Vec<String> = TodoField::ALL
        .iter()
        .map(|&field| todo_cell(&todo, field))
        .collect();
    assert_eq!(
        cells,
        [
            "101",
            "7",
            "gsw",
            "4",
            "MergeRequest",
            "opened",
            "Please review",
            "Change 4",
            "",
            "https://gitlab.example.com/platform/gsw/-/merge_requests/4",
            "platform/gsw",
        ]
    );
}

#[test]
fn test_non_merge_request_cells_are_empty() {
    let todo = issue_todo(102);
    assert!(
        TodoField::ALL
            .iter()
            .all(|&field| todo_cell(&todo, field).is_empty())
    );
}

#[tokio::test]
async fn test_default_report() {
    let fake = fake();
    let (result, out) = list(&TodoListArgs::default(), &fake).await;
    result.unwrap();

    assert_eq!(
        out,
        "101\topened\tgsw\tMergeRequest\t4\tChange 4\n\
         \t\t\t\t\t\n\
         103\topened\tgsw\tMergeRequest\t12\tChange 12\n"
    );
    assert_eq!(fake.calls(), [Call::Todos]);
}

#[tokio::test]
async fn test_custom_fields() {
    let fake = fake();
    let args = TodoListArgs {
        fields: Some(vec!["full_project".to_string(), "id".to_string()]),
    };
    let (result, out) = list(&args, &fake).await;
    result.unwrap();
    assert_eq!(out, "platform/gsw\t101\n\t\nplatform/gsw\t103\n");
}

#[tokio::test]
async fn test_unknown_field_makes_no_calls() {
    let fake = fake();
    let args = TodoListArgs {
        fields: Some(vec!["id".to_string(), "author".to_string()]),
    };
    let (result, out) = list(&args, &fake).await;

    assert!(matches!(result, Err(GswError::Field(_))));
    assert!(out.is_empty());
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_done_marks_matching_todo() {
    let fake = fake();
    run_todo_done(&TodoDoneArgs { id: 103 }, &fake).await.unwrap();
    assert_eq!(fake.calls(), [Call::Todos, Call::MarkTodoDone(103)]);
}

#[tokio::test]
async fn test_done_unknown_id_does_not_mark() {
    let fake = fake();
    let err = run_todo_done(&TodoDoneArgs { id: 999 }, &fake)
        .await
        .unwrap_err();

    assert!(matches!(err, GswError::TodoNotFound(999)));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(fake.calls(), [Call::Todos]);
}
