// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{CheckoutSource, GitMutation, GitQuery, GitStatusSource, GixBackend, ShellBackend};
use crate::error::GitError;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn shell() -> ShellBackend {
    ShellBackend::default()
}

fn configure_identity(path: &std::path::Path) {
    let git = shell();
    git.git_command(&["config", "user.email", "test@example.com"], path)
        .expect("failed to set email");
    git.git_command(&["config", "user.name", "Test"], path)
        .expect("failed to set name");
    git.git_command(&["config", "commit.gpgsign", "false"], path)
        .expect("failed to disable signing");
}

#[test]
fn test_work_tree_root_outside_repo() {
    let temp = temp_dir();
    let err = GixBackend
        .work_tree_root(temp.path())
        .expect_err("temp dir is not a repository");
    assert!(matches!(err.as_git(), Some(GitError::RepoNotFound { .. })));
}

#[test]
fn test_work_tree_root_of_gix_repo() {
    let temp = temp_dir();
    gix::init(temp.path()).expect("failed to init repo");
    let root = GixBackend.work_tree_root(temp.path()).unwrap();
    assert_eq!(
        root.canonicalize().unwrap(),
        temp.path().canonicalize().unwrap()
    );
}

#[test]
fn test_gix_sees_shell_commits() {
    let temp = temp_dir();
    shell().init_repo(temp.path()).expect("failed to init repo");
    configure_identity(temp.path());

    assert!(GixBackend.is_head_unborn(temp.path()).unwrap());
    let branch = GixBackend.current_branch(temp.path()).unwrap();

    std::fs::write(temp.path().join("the-file"), "").unwrap();
    shell()
        .add_paths(temp.path(), &["the-file".to_string()])
        .unwrap();
    shell().commit(temp.path(), "Initial commit", true).unwrap();

    assert!(!GixBackend.is_head_unborn(temp.path()).unwrap());
    assert!(branch.is_some());
    assert_eq!(GixBackend.current_branch(temp.path()).unwrap(), branch);
}

#[test]
fn test_shell_status_source_lists_changes() {
    let temp = temp_dir();
    let repo = temp.path();
    let git = shell();
    git.init_repo(repo).unwrap();
    configure_identity(repo);

    std::fs::write(repo.join("committed"), "one\n").unwrap();
    git.add_paths(repo, &["committed".to_string()]).unwrap();
    git.commit(repo, "Initial commit", false).unwrap();

    std::fs::write(repo.join("committed"), "two\n").unwrap();
    std::fs::write(repo.join("new-file"), "").unwrap();
    std::fs::write(repo.join("loose"), "").unwrap();
    git.add_paths(repo, &["new-file".to_string()]).unwrap();
    git.refresh_index(repo).unwrap();

    let staged = git.staged_changes(repo).unwrap();
    assert_eq!(staged.len(), 1);
    assert_eq!((staged[0].status, staged[0].path.as_str()), ('A', "new-file"));

    let modified = git.worktree_changes(repo).unwrap();
    assert_eq!(modified.len(), 1);
    assert_eq!(
        (modified[0].status, modified[0].path.as_str()),
        ('M', "committed")
    );

    assert_eq!(git.untracked_files(repo).unwrap(), vec!["loose".to_string()]);
    assert_eq!(
        git.tracked_files(repo).unwrap(),
        vec!["committed".to_string(), "new-file".to_string()]
    );

    git.checkout_paths(repo, CheckoutSource::Head, &["committed".to_string()])
        .unwrap();
    assert!(git.worktree_changes(repo).unwrap().is_empty());
}

#[test]
fn test_shell_command_failure_reports_command() {
    let temp = temp_dir();
    shell().init_repo(temp.path()).unwrap();
    let err = shell()
        .add_paths(temp.path(), &["missing-file".to_string()])
        .expect_err("adding a missing path fails");
    match err.as_git() {
        Some(GitError::CommandFailed { command, .. }) => {
            assert_eq!(command, "git add --all -- missing-file");
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[test]
fn test_locate_missing_executable() {
    let result = ShellBackend::locate(Some(std::path::Path::new(
        "definitely-not-a-git-binary-on-path",
    )));
    assert!(result.is_err());
}

#[test]
fn test_locate_git_from_path() {
    let git = ShellBackend::locate(None).expect("git on PATH");
    assert!(git.executable().is_absolute());
    let name = git.executable().file_stem().unwrap().to_string_lossy();
    assert_eq!(name, "git");
}
