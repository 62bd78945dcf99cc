//! Locally persisted snippet list
//!
//! Snippets captured from a page selection, kept newest-first in a
//! single JSON file. Every mutation rewrites the whole file; the
//! list is small by construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use log::{debug, error};

/// One captured selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet
{   /// Identifier derived from the capture time in milliseconds
    pub id: String
  , /// Selected text
    pub text: String
  , /// Page the selection came from
    pub url: String
  , /// Page title
    pub title: String
  , /// Capture time
    pub saved_at: DateTime<Utc>
}

/// JSON-file-backed snippet store
pub struct SnippetStore
{   path: PathBuf
  , snippets: Vec<Snippet>
}

impl SnippetStore
{   /// Open a store at the given path.
    /// A missing file is an empty list, not an error.
    pub fn open(path: impl Into<PathBuf>)
      -> Result<Self, crate::error::Error>
    {   let path = path.into();
        debug!("Opening snippet store: {}", path.display());

        let snippets = if path.exists()
        {   let contents = fs::read_to_string(&path)
              .map_err(|e| {
                error!("Failed to read snippets: {}", e);
                crate::error::Error::Storage(e.to_string())
              })?;
            serde_json::from_str(&contents)
              .map_err(|e| {
                error!("Failed to parse snippets: {}", e);
                crate::error::Error::ParseError(e.to_string())
              })?
        } else
        {   debug!("No snippet file yet, starting empty");
            vec![]
        };

        Ok(SnippetStore
        {   path
          , snippets
        })
    }

    /// Save a snippet at the front of the list and persist
    pub fn add(
      &mut self
    , text: impl Into<String>
    , url: impl Into<String>
    , title: impl Into<String>
    ) -> Result<Snippet, crate::error::Error>
    {   let saved_at = Utc::now();
        let mut id_num = saved_at.timestamp_millis();
        // Two captures can land in the same millisecond
        while self.snippets.iter()
          .any(|s| s.id == id_num.to_string())
        {   id_num += 1;
        }

        let snippet = Snippet
        {   id: id_num.to_string()
          , text: text.into()
          , url: url.into()
          , title: title.into()
          , saved_at
        };

        debug!("Saving snippet: {}", snippet.id);
        self.snippets.insert(0, snippet.clone());
        self.persist()?;
        Ok(snippet)
    }

    /// Delete a snippet by id and persist.
    /// Returns false when no snippet had that id.
    pub fn remove(&mut self, id: &str)
      -> Result<bool, crate::error::Error>
    {   let before = self.snippets.len();
        self.snippets.retain(|s| s.id != id);

        if self.snippets.len() == before
        {   debug!("No snippet with id: {}", id);
            return Ok(false);
        }

        debug!("Deleted snippet: {}", id);
        self.persist()?;
        Ok(true)
    }

    /// All snippets, newest first
    pub fn list(&self) -> &[Snippet]
    {   &self.snippets
    }

    fn persist(&self) -> Result<(), crate::error::Error>
    {   let contents
          = serde_json::to_string_pretty(&self.snippets)
            .map_err(|e| {
              error!("Failed to serialize snippets: {}", e);
              crate::error::Error::ParseError(e.to_string())
            })?;
        fs::write(&self.path, contents)
          .map_err(|e| {
            error!("Failed to write snippets: {}", e);
            crate::error::Error::Storage(e.to_string())
          })
    }
}
