use std::fs;
use std::path::PathBuf;

use aura_llm::{Provider, SnippetStore};
use aura_llm::prompts;

/// Per-test store file under the system temp directory
fn temp_store_path(name: &str) -> PathBuf
{   let path = std::env::temp_dir().join(format!(
      "aura-snippets-{}-{}.json",
      std::process::id(),
      name
    ));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_open_missing_file_is_empty_list()
{   let path = temp_store_path("missing");
    let store = SnippetStore::open(&path)
      .expect("open should tolerate a missing file");
    assert!(store.list().is_empty());
}

#[test]
fn test_add_is_newest_first_and_persists()
{   let path = temp_store_path("add");

    let mut store = SnippetStore::open(&path).unwrap();
    let first = store
      .add("first selection", "https://a.example", "Page A")
      .unwrap();
    let second = store
      .add("second selection", "https://b.example", "Page B")
      .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.list().len(), 2);
    assert_eq!(store.list()[0].text, "second selection");
    assert_eq!(store.list()[1].text, "first selection");

    // Reopening reads back what was written
    let reopened = SnippetStore::open(&path).unwrap();
    assert_eq!(reopened.list(), store.list());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_remove_by_id()
{   let path = temp_store_path("remove");

    let mut store = SnippetStore::open(&path).unwrap();
    let kept = store
      .add("keep me", "https://a.example", "Page A")
      .unwrap();
    let dropped = store
      .add("drop me", "https://b.example", "Page B")
      .unwrap();

    assert_eq!(store.remove(&dropped.id), Ok(true));
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.list()[0].id, kept.id);

    // Unknown id is a no-op
    assert_eq!(store.remove("not-an-id"), Ok(false));
    assert_eq!(store.list().len(), 1);

    let reopened = SnippetStore::open(&path).unwrap();
    assert_eq!(reopened.list().len(), 1);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_bound_chars_never_splits_a_code_point()
{   assert_eq!(prompts::bound_chars("héllo", 2), "hé");
    assert_eq!(prompts::bound_chars("héllo", 10), "héllo");
    assert_eq!(prompts::bound_chars("", 5), "");
}

#[test]
fn test_summarize_bounds_page_content()
{   let content = "a".repeat(16_000);
    let request = prompts::summarize(&content);

    let expected = format!(
      "Summarize this text: \n\n{}",
      "a".repeat(prompts::SUMMARIZE_CONTEXT_CHARS)
    );
    assert_eq!(request.user_prompt, expected);
    assert_eq!(request.model, prompts::DEFAULT_MODEL);
    assert_eq!(request.temperature, Some(0.7));
}

#[test]
fn test_page_chat_embeds_context_in_system_prompt()
{   let request = prompts::page_chat(
      "the page says the sky is green",
      "what color is the sky?"
    );

    assert!(request.system_prompt
      .contains("the page says the sky is green"));
    assert_eq!(request.user_prompt, "what color is the sky?");
}

#[test]
fn test_connection_test_probe()
{   let request = prompts::connection_test();
    assert_eq!(request.system_prompt, "You are a ping bot.");
    assert_eq!(request.user_prompt, "Ping");
    // The default model routes to Gemini
    assert_eq!(
      Provider::classify(&request.model),
      Ok(Provider::Gemini)
    );
}
