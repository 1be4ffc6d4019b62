#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const MAP: &str = r#"{"major":["breaking"],"minor":["feature"],"patch":["fix","bug"]}"#;

pub fn signature_at(seconds: i64) -> Signature<'static> {
    Signature::new("Test User", "test@example.com", &Time::new(seconds, 0))
        .expect("Could not build signature")
}

// Helper function to setup an empty temporary git repo for testing
pub fn setup_test_repo() -> (TempDir, Repository) {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    (temp_dir, repo)
}

/// Write a file and commit it on HEAD at a fixed time
pub fn commit_at(repo: &Repository, message: &str, seconds: i64) -> Oid {
    let workdir = repo.workdir().expect("Repository has no workdir");
    let content_path = workdir.join("README.md");
    fs::write(&content_path, format!("{}\n", message)).expect("Could not write file");

    let mut index = repo.index().expect("Could not get index");
    index
        .add_path(Path::new("README.md"))
        .expect("Could not add file to index");
    index.write().expect("Could not write index");

    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
    let sig = signature_at(seconds);

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("Could not create commit")
}

/// Create an annotated tag dated `seconds`
pub fn tag_at(repo: &Repository, name: &str, target: Oid, seconds: i64) {
    let object = repo.find_object(target, None).expect("Could not find object");
    repo.tag(name, &object, &signature_at(seconds), name, false)
        .expect("Could not create tag");
}
