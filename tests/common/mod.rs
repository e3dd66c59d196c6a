//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use git2::{Oid, Repository, Signature};

/// Newline-delimited generate response, one fragment per piece of text,
/// followed by a final `done` fragment.
pub fn ndjson_response(pieces: &[&str]) -> String {
    let mut body = String::new();
    for piece in pieces {
        body.push_str(&serde_json::json!({"response": piece, "done": false}).to_string());
        body.push('\n');
    }
    body.push_str(r#"{"response":"","done":true,"done_reason":"stop"}"#);
    body.push('\n');
    body
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new git repository with one initial commit.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config.set_str("user.name", "Test User").expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");
        config
            .set_bool("commit.gpgsign", false)
            .expect("Failed to disable signing");

        let test_repo = Self { dir, repo };
        test_repo.commit_file("README.md", "test repo\n", "chore: initial commit");
        test_repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write a file in the working tree without staging it.
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write test file");
    }

    /// Write a file and add it to the index.
    pub fn stage_file(&self, name: &str, content: &str) {
        self.write_file(name, content);
        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Stage a file and commit it. Returns the commit OID.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> Oid {
        self.stage_file(name, content);

        let sig = self.signature();
        let mut index = self.repo.index().expect("Failed to get index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// OID of the current HEAD commit.
    pub fn head_oid(&self) -> Oid {
        self.repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to resolve HEAD")
            .id()
    }

    /// Message of the current HEAD commit.
    pub fn head_message(&self) -> String {
        self.repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to resolve HEAD")
            .message()
            .unwrap_or_default()
            .to_string()
    }

    /// Name of the current branch.
    pub fn branch_name(&self) -> String {
        self.repo
            .head()
            .ok()
            .and_then(|h| h.shorthand().map(|s| s.to_string()))
            .unwrap_or_else(|| "master".to_string())
    }

    /// Create a bare `origin` remote and push the current branch to it with
    /// upstream tracking, so a plain `git push` works afterwards.
    pub fn add_origin(&self) -> Remote {
        let dir = tempfile::tempdir().expect("Failed to create remote dir");
        let bare = Repository::init_bare(dir.path()).expect("Failed to init bare repo");

        self.repo
            .remote("origin", dir.path().to_str().expect("Invalid remote path"))
            .expect("Failed to add origin remote");

        let status = Command::new("git")
            .args(["push", "-u", "origin", "HEAD"])
            .current_dir(self.path())
            .output()
            .expect("Failed to push to origin");
        assert!(status.status.success(), "git push failed in test setup");

        Remote { dir, repo: bare }
    }

    /// Install a hook script that exits with status 1.
    #[cfg(unix)]
    pub fn install_failing_hook(&self, hook: &str) {
        use std::os::unix::fs::PermissionsExt;

        let hooks_dir = self.repo.path().join("hooks");
        std::fs::create_dir_all(&hooks_dir).expect("Failed to create hooks dir");
        let path = hooks_dir.join(hook);
        std::fs::write(&path, "#!/bin/sh\necho \"rejected by hook\" >&2\nexit 1\n")
            .expect("Failed to write hook");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make hook executable");
    }
}

/// Bare repository acting as a push target.
pub struct Remote {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl Remote {
    /// OID the remote branch points at, if it exists.
    pub fn branch_oid(&self, branch: &str) -> Option<Oid> {
        self.repo
            .find_reference(&format!("refs/heads/{}", branch))
            .ok()
            .and_then(|r| r.target())
    }
}
