//! Prompt presets for the assistant's built-in actions

use crate::PromptRequest;

/// Model used when the caller has not picked one
pub const DEFAULT_MODEL: &str = "gemini-flash-latest";

/// Page content cap for summarization, in characters
pub const SUMMARIZE_CONTEXT_CHARS: usize = 15_000;
/// Page content cap for page chat, in characters
pub const CHAT_CONTEXT_CHARS: usize = 10_000;

const SUMMARIZE_SYSTEM_PROMPT: &str
  = "You are a helpful assistant that summarizes web pages. \
     Provide 5 clear, concise bullet points summarizing the key \
     information. Use Markdown formatting.";

const PAGE_CHAT_SYSTEM_PROMPT: &str
  = "You are a helpful assistant answering questions about the \
     current web page. Use the provided page context to answer. \
     If the answer is not in the context, say so.";

/// Summarize the given page content
pub fn summarize(page_content: &str) -> PromptRequest
{   PromptRequest::new(
      DEFAULT_MODEL,
      SUMMARIZE_SYSTEM_PROMPT,
      format!(
        "Summarize this text: \n\n{}",
        bound_chars(page_content, SUMMARIZE_CONTEXT_CHARS)
      )
    )
}

/// Answer a question about the given page content.
/// The page context rides in the system instruction; the user's
/// question is the user instruction.
pub fn page_chat(
  page_content: &str
, question: &str
) -> PromptRequest
{   PromptRequest::new(
      DEFAULT_MODEL,
      format!(
        "{} Context: \n\n{}",
        PAGE_CHAT_SYSTEM_PROMPT,
        bound_chars(page_content, CHAT_CONTEXT_CHARS)
      ),
      question
    )
}

/// Minimal round-trip probe used by the Settings connection test
pub fn connection_test() -> PromptRequest
{   PromptRequest::new(
      DEFAULT_MODEL,
      "You are a ping bot.",
      "Ping"
    )
}

/// Bound text to at most `max_chars` characters without splitting
/// a code point
pub fn bound_chars(text: &str, max_chars: usize) -> &str
{   match text.char_indices().nth(max_chars)
    {   Some((idx, _)) => &text[..idx]
      , None => text
    }
}
