// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::PathBuf;

#[test]
fn progress_scope_runs_its_dismissal_on_drop() {
    let editor = FakeEditorAdapter::new();
    {
        let _scope = editor.begin_progress("working");
        assert_eq!(editor.progress_counts(), (1, 0));
    }
    assert_eq!(editor.progress_counts(), (1, 1));
}

#[test]
fn silent_scope_drops_without_effect() {
    let scope = ProgressScope::silent();
    drop(scope);
}

#[tokio::test]
async fn fake_records_notifications_in_order() {
    let editor = FakeEditorAdapter::new();
    editor.show_error("first").await.unwrap();
    editor.show_info("second", "Open README").await.unwrap();
    assert_eq!(
        editor.notifications(),
        vec![
            Notification::Error("first".to_string()),
            Notification::Info {
                message: "second".to_string(),
                action: "Open README".to_string()
            },
        ]
    );
    assert_eq!(editor.errors(), vec!["first".to_string()]);
}

#[tokio::test]
async fn fake_replays_the_scripted_action_choice() {
    let editor = FakeEditorAdapter::new().choose(ActionChoice::Selected);
    let choice = editor.show_info("done", "Open README").await.unwrap();
    assert_eq!(choice, ActionChoice::Selected);

    let dismissing = FakeEditorAdapter::new();
    let choice = dismissing.show_info("done", "Open README").await.unwrap();
    assert_eq!(choice, ActionChoice::Dismissed);
}

#[tokio::test]
async fn fake_records_opened_documents_and_diagnostics() {
    let editor = FakeEditorAdapter::new();
    editor.open_document(&PathBuf::from("/proj/README.md")).await.unwrap();
    editor.diagnostic("running: python main.py /proj");
    assert_eq!(editor.opened(), vec![PathBuf::from("/proj/README.md")]);
    assert_eq!(editor.diagnostics(), vec!["running: python main.py /proj".to_string()]);
}
