#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
//! Integration tests for the file materializer's loss-avoidance guarantees.
//!
//! Every scenario checks that each byte written by the operator before a
//! run is still somewhere on disk afterwards.

mod common;

use common::{ScriptedPrompter, TestProject};
use spellbookx_cli::error::SetupError;
use spellbookx_cli::resources::ResourceChange;
use spellbookx_cli::resources::backup::BackupChain;
use spellbookx_cli::resources::file::{CollisionPolicy, GeneratedFile};

fn generated(project: &TestProject, name: &str, policy: CollisionPolicy) -> GeneratedFile {
    GeneratedFile::new(project.path(), name, "generated\n", policy)
}

#[test]
fn repeated_overwrites_keep_every_previous_version() {
    let project = TestProject::new();
    let file = generated(&project, ".editorconfig", CollisionPolicy::OverwriteWithBackup);
    let prompter = ScriptedPrompter::default();

    for version in ["v1\n", "v2\n", "v3\n"] {
        project.write(".editorconfig", version);
        let result = file.apply(&prompter).unwrap();
        assert_eq!(result.change, ResourceChange::Applied);
    }

    let chain = BackupChain::scan(&file.path);
    assert_eq!(chain.len(), 3);
    assert_eq!(project.read(".editorconfig.bak"), "v3\n");
    let mut rotated: Vec<String> = chain
        .rotated
        .iter()
        .map(|p| std::fs::read_to_string(p).unwrap())
        .collect();
    rotated.sort();
    assert_eq!(rotated, ["v1\n", "v2\n"]);
    assert_eq!(project.read(".editorconfig"), "generated\n");
}

#[test]
fn identical_content_causes_no_backup_churn() {
    let project = TestProject::new();
    project.write(".prettierignore", "generated\n");
    let file = generated(&project, ".prettierignore", CollisionPolicy::OverwriteWithBackup);

    let result = file.apply(&ScriptedPrompter::default()).unwrap();

    assert_eq!(result.change, ResourceChange::AlreadyCorrect);
    assert!(BackupChain::scan(&file.path).is_empty());
}

#[test]
fn confirm_overwrite_asks_once_and_defaults_to_no() {
    let project = TestProject::new();
    project.write("prettier.config.mjs", "mine\n");
    let file = generated(&project, "prettier.config.mjs", CollisionPolicy::ConfirmOverwrite);
    let prompter = ScriptedPrompter::default();

    let result = file.apply(&prompter).unwrap();

    assert_eq!(
        result.change,
        ResourceChange::Skipped {
            reason: "kept existing".to_string()
        }
    );
    assert_eq!(
        prompter.asked(),
        ["prettier.config.mjs already exists. Overwrite it?"]
    );
    assert_eq!(project.read("prettier.config.mjs"), "mine\n");
}

#[test]
fn confirm_overwrite_cancel_is_an_error() {
    let project = TestProject::new();
    project.write("prettier.config.mjs", "mine\n");
    let file = generated(&project, "prettier.config.mjs", CollisionPolicy::ConfirmOverwrite);
    let prompter = ScriptedPrompter::default().with_confirms([None]);

    let err = file.apply(&prompter).unwrap_err();

    assert!(matches!(err, SetupError::PromptCancelled { .. }));
    assert_eq!(project.read("prettier.config.mjs"), "mine\n");
}

#[test]
fn skip_if_exists_never_touches_the_target() {
    let project = TestProject::new();
    project.write(".cspell/custom-words.txt", "monorepo\n");
    let file = generated(&project, ".cspell/custom-words.txt", CollisionPolicy::SkipIfExists);

    let result = file.apply(&ScriptedPrompter::default()).unwrap();

    assert!(matches!(result.change, ResourceChange::Skipped { .. }));
    assert_eq!(project.read(".cspell/custom-words.txt"), "monorepo\n");
    assert!(BackupChain::scan(&file.path).is_empty());
}

#[test]
fn nested_targets_get_parent_directories() {
    let project = TestProject::new();
    let file = generated(&project, ".vscode/settings.json", CollisionPolicy::OverwriteWithBackup);

    file.apply(&ScriptedPrompter::default()).unwrap();

    assert_eq!(project.read(".vscode/settings.json"), "generated\n");
}

#[cfg(unix)]
#[test]
fn unwritable_directory_is_a_backup_failure() {
    use std::os::unix::fs::PermissionsExt as _;

    let project = TestProject::new();
    project.write("locked/.editorconfig", "mine\n");
    let locked = project.join("locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();
    // Root ignores directory permissions; nothing to check there.
    if std::fs::write(locked.join("probe"), "").is_ok() {
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }
    let file = generated(&project, "locked/.editorconfig", CollisionPolicy::OverwriteWithBackup);

    let err = file.apply(&ScriptedPrompter::default()).unwrap_err();

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    assert!(matches!(err, SetupError::FilesystemBackupFailed { .. }));
    assert_eq!(project.read("locked/.editorconfig"), "mine\n");
}
