//! Integration tests for [`storage::PromptRepository`].
//!
//! Each test runs on a fresh SQLite file in a temporary directory.

use storage::{NewSavedPrompt, PromptQuery, PromptRepository, PromptStore, StorageError};
use tempfile::TempDir;

async fn repo() -> (TempDir, PromptRepository) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("library.db");
    let repo = PromptRepository::new(path.to_str().expect("utf-8 path"))
        .await
        .expect("Failed to create repository");
    (dir, repo)
}

fn prompt(user_id: &str, title: &str, tool_type: &str) -> NewSavedPrompt {
    NewSavedPrompt {
        user_id: user_id.to_string(),
        title: title.to_string(),
        input_text: format!("input for {}", title),
        enhanced_text: "enhanced".to_string(),
        tool_type: tool_type.to_string(),
        provider: "OpenAI".to_string(),
        model: "GPT-4".to_string(),
        tone: "professional".to_string(),
        output_format: "Markdown".to_string(),
        file_attachments: vec!["notes.txt: hello".to_string()],
        tags: vec![tool_type.to_string(), "professional".to_string(), "Markdown".to_string()],
    }
}

/// **Test: Save then get returns the same fields, including list columns.**
///
/// **Expected:** `get` returns `Some` equal to the saved value.
#[tokio::test]
async fn test_save_and_get() {
    let (_dir, repo) = repo().await;

    let saved = repo
        .save(&prompt("alice", "Welcome email", "Email Writer"))
        .await
        .expect("Failed to save prompt");

    let fetched = repo
        .get("alice", &saved.id)
        .await
        .expect("Failed to get prompt")
        .expect("prompt exists");

    assert_eq!(fetched.id, saved.id);
    assert_eq!(fetched.title, "Welcome email");
    assert_eq!(fetched.file_attachments, vec!["notes.txt: hello"]);
    assert_eq!(fetched.tags, vec!["Email Writer", "professional", "Markdown"]);
}

/// **Test: Prompts are invisible to other users.**
///
/// **Expected:** get/list/update/delete for another user see nothing and change nothing.
#[tokio::test]
async fn test_user_scoping() {
    let (_dir, repo) = repo().await;
    let saved = repo.save(&prompt("alice", "Mine", "Email Writer")).await.unwrap();

    assert!(repo.get("bob", &saved.id).await.unwrap().is_none());
    assert!(repo.list_for_user("bob").await.unwrap().is_empty());
    assert!(matches!(
        repo.update_enhanced_text("bob", &saved.id, "hijacked").await,
        Err(StorageError::NotFound(_))
    ));
    assert!(!repo.delete("bob", &saved.id).await.unwrap());

    let still = repo.get("alice", &saved.id).await.unwrap().unwrap();
    assert_eq!(still.enhanced_text, "enhanced");
}

/// **Test: Listing returns newest first.**
#[tokio::test]
async fn test_list_newest_first() {
    let (_dir, repo) = repo().await;
    for title in ["first", "second", "third"] {
        repo.save(&prompt("alice", title, "Email Writer")).await.unwrap();
    }

    let titles: Vec<String> = repo
        .list_for_user("alice")
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

/// **Test: Search matches title, input and tags case-insensitively and filters by tool.**
#[tokio::test]
async fn test_search() {
    let (_dir, repo) = repo().await;
    repo.save(&prompt("alice", "Quarterly Report", "Blog Writer")).await.unwrap();
    repo.save(&prompt("alice", "Launch email", "Email Writer")).await.unwrap();
    repo.save(&prompt("bob", "Quarterly numbers", "Blog Writer")).await.unwrap();

    let by_title = repo
        .search(&PromptQuery::for_user("alice").term("quarterly"))
        .await
        .unwrap();
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Quarterly Report");

    let by_input = repo
        .search(&PromptQuery::for_user("alice").term("INPUT FOR LAUNCH"))
        .await
        .unwrap();
    assert_eq!(by_input.len(), 1);

    let by_tag = repo
        .search(&PromptQuery::for_user("alice").term("email writer"))
        .await
        .unwrap();
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].tool_type, "Email Writer");

    let filtered = repo
        .search(&PromptQuery::for_user("alice").tool_type("Blog Writer"))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);

    let wildcard = repo
        .search(&PromptQuery::for_user("alice").term("%"))
        .await
        .unwrap();
    assert!(wildcard.is_empty());

    let limited = repo
        .search(&PromptQuery::for_user("alice").limit(1))
        .await
        .unwrap();
    assert_eq!(limited.len(), 1);
}

/// **Test: Tag search looks at tag values, not at the stored JSON array.**
///
/// **Expected:** JSON punctuation matches nothing; a fragment of one tag still matches.
#[tokio::test]
async fn test_search_tags_by_value() {
    let (_dir, repo) = repo().await;
    repo.save(&prompt("alice", "Launch email", "Email Writer")).await.unwrap();

    for term in ["\",\"", "\"", "[", "]"] {
        let hits = repo
            .search(&PromptQuery::for_user("alice").term(term))
            .await
            .unwrap();
        assert!(hits.is_empty(), "term {:?} matched {} prompts", term, hits.len());
    }

    let by_fragment = repo
        .search(&PromptQuery::for_user("alice").term("markd"))
        .await
        .unwrap();
    assert_eq!(by_fragment.len(), 1);
}

/// **Test: Update enhanced text and delete.**
///
/// **Expected:** update bumps `updated_at` and returns the new text; delete removes the row once.
#[tokio::test]
async fn test_update_and_delete() {
    let (_dir, repo) = repo().await;
    let saved = repo.save(&prompt("alice", "Draft", "Email Writer")).await.unwrap();

    let updated = repo
        .update_enhanced_text("alice", &saved.id, "better text")
        .await
        .unwrap();
    assert_eq!(updated.enhanced_text, "better text");
    assert!(updated.updated_at >= saved.updated_at);

    assert!(repo.delete("alice", &saved.id).await.unwrap());
    assert!(!repo.delete("alice", &saved.id).await.unwrap());
    assert!(repo.get("alice", &saved.id).await.unwrap().is_none());
}
