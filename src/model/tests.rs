// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::MainModel;
use super::affected::{ROOT, ancestors, expand, normalize, normalize_all, relative_dir};
use super::message::{Message, MessageBus, Notification};
use crate::error::GitError;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::Path;
use std::rc::Rc;

fn set(paths: &[&str]) -> BTreeSet<String> {
    paths.iter().map(ToString::to_string).collect()
}

// --- affected ---

#[test]
fn test_normalize_strips_noise() {
    let root = Path::new("/repo");
    assert_eq!(normalize(root, "", "foo/").unwrap(), "foo");
    assert_eq!(normalize(root, "", "./foo/bar").unwrap(), "foo/bar");
    assert_eq!(normalize(root, "", "foo/../the-file").unwrap(), "the-file");
    assert_eq!(normalize(root, "", "/repo/foo/bar/baz").unwrap(), "foo/bar/baz");
    assert_eq!(normalize(root, "", ".").unwrap(), ROOT);
    assert_eq!(normalize(root, "", "").unwrap(), ROOT);
    assert_eq!(normalize(root, "", "/repo").unwrap(), ROOT);
}

#[test]
fn test_normalize_rejects_escaping_paths() {
    let root = Path::new("/repo");
    for input in ["../elsewhere", "foo/../../x", "/other/file"] {
        let err = normalize(root, "", input).expect_err(input);
        assert!(
            matches!(err.as_git(), Some(GitError::PathOutsideRepository { path }) if path == input),
            "unexpected error for {input}: {err}"
        );
    }
}

#[test]
fn test_normalize_all_dedups() {
    let inputs = normalize_all(Path::new("/repo"), "", &["foo", "foo/", "./foo", "bar"]).unwrap();
    assert_eq!(inputs, set(&["bar", "foo"]));
}

#[test]
fn test_normalize_resolves_against_working_directory() {
    let root = Path::new("/repo");
    assert_eq!(normalize(root, "sub", "file").unwrap(), "sub/file");
    assert_eq!(normalize(root, "sub/deeper", "../x").unwrap(), "sub/x");
    assert_eq!(normalize(root, "sub", "../x").unwrap(), "x");
    assert_eq!(normalize(root, "sub", ".").unwrap(), "sub");
    assert_eq!(normalize(root, "sub", "/repo/top").unwrap(), "top");

    let err = normalize(root, "sub", "../../x").expect_err("escapes the root");
    assert!(matches!(
        err.as_git(),
        Some(GitError::PathOutsideRepository { .. })
    ));
}

#[test]
fn test_relative_dir() {
    let root = Path::new("/repo");
    assert_eq!(relative_dir(root, Path::new("/repo/a/b")), "a/b");
    assert_eq!(relative_dir(root, Path::new("/repo")), "");
    assert_eq!(relative_dir(root, Path::new("/nowhere/else")), "");
}

#[test]
fn test_ancestors_nearest_first() {
    let found: Vec<&str> = ancestors("foo/bar/baz").collect();
    assert_eq!(found, vec!["foo/bar", "foo"]);
    assert_eq!(ancestors("the-file").count(), 0);
}

#[test]
fn test_expand_directory_input() {
    let known = set(&["foo/bar/baz", "foo/qux", "foo-sibling", "food", "the-file"]);
    let affected = expand(&set(&["foo"]), &known);
    assert_eq!(affected, set(&["foo", "foo/bar", "foo/bar/baz", "foo/qux"]));
}

#[test]
fn test_expand_skips_prefix_siblings() {
    // '-' sorts before '/', so `foo-bar/x` sits between `foo` and `foo/y`.
    let known = set(&["foo-bar/x", "foo/y", "food"]);
    let affected = expand(&set(&["foo"]), &known);
    assert_eq!(affected, set(&["foo", "foo/y"]));
}

#[test]
fn test_expand_file_input_adds_ancestors() {
    let known = set(&["foo/bar/baz"]);
    let affected = expand(&set(&["foo/bar/baz"]), &known);
    assert_eq!(affected, set(&["foo", "foo/bar", "foo/bar/baz"]));
}

#[test]
fn test_expand_root_input() {
    let known = set(&["a/b", "c"]);
    let affected = expand(&set(&[ROOT]), &known);
    insta::assert_compact_debug_snapshot!(affected, @r#"{".", "a", "a/b", "c"}"#);
}

// --- message bus ---

#[test]
fn test_message_names() {
    let names = Message::ALL.map(Message::as_str);
    insta::assert_compact_debug_snapshot!(
        names,
        @r#"["paths staged", "paths unstaged", "paths reverted", "status updated", "committed"]"#
    );
}

#[test]
fn test_observers_run_in_registration_order() {
    let mut bus = MessageBus::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    for name in ["first", "second"] {
        let log = Rc::clone(&log);
        bus.add_message_observer(Message::PathsStaged, move |message, paths| {
            log.borrow_mut()
                .push(format!("{name}:{message}:{}", paths.len()));
        });
    }
    bus.notify(Message::PathsStaged, &set(&["a", "b"]));
    bus.notify(Message::PathsReverted, &set(&["ignored"]));

    assert_eq!(
        *log.borrow(),
        vec![
            "first:paths staged:2".to_string(),
            "second:paths staged:2".to_string()
        ]
    );
}

#[test]
fn test_remove_message_observer() {
    let mut bus = MessageBus::new();
    let hits = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&hits);
    let id = bus.add_message_observer(Message::PathsUnstaged, move |_, _| {
        *counter.borrow_mut() += 1;
    });
    assert_eq!(bus.observer_count(Message::PathsUnstaged), 1);

    bus.notify(Message::PathsUnstaged, &BTreeSet::new());
    assert!(bus.remove_message_observer(id));
    assert!(!bus.remove_message_observer(id));
    bus.notify(Message::PathsUnstaged, &BTreeSet::new());

    assert_eq!(*hits.borrow(), 1);
    assert_eq!(bus.observer_count(Message::PathsUnstaged), 0);
}

#[test]
fn test_subscribe_delivers_owned_notifications() {
    let mut bus = MessageBus::new();
    let rx = bus.subscribe(Message::PathsReverted);
    bus.notify(Message::PathsReverted, &set(&["the-file"]));

    let received = std::thread::spawn(move || rx.recv().expect("notification"))
        .join()
        .expect("receiver thread");
    assert_eq!(
        received,
        Notification {
            message: Message::PathsReverted,
            paths: set(&["the-file"]),
        }
    );
}

#[test]
fn test_subscribe_ignores_dropped_receiver() {
    let mut bus = MessageBus::new();
    drop(bus.subscribe(Message::Committed));
    bus.notify(Message::Committed, &set(&["x"]));
    assert_eq!(bus.observer_count(Message::Committed), 1);
}

// --- model without a repository ---

#[test]
fn test_update_status_outside_repository() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let mut model = MainModel::new(temp.path());
    let err = model.update_status().expect_err("not a repository");
    assert!(matches!(err.as_git(), Some(GitError::RepoNotFound { .. })));
    assert!(model.root().is_none());
    assert!(model.everything().is_empty());
}

#[test]
fn test_empty_inputs_are_a_no_op() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let mut model = MainModel::new(temp.path());
    let rx = model.subscribe(Message::PathsStaged);
    let none: [&str; 0] = [];
    assert!(model.stage_paths(&none).unwrap().is_empty());
    assert!(rx.try_recv().is_err());
}
