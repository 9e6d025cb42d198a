// Standard Library Imports
use std::io::Read;

// External Crate Imports
use color_eyre::{Result, eyre::WrapErr};
use serde::{Deserialize, Serialize};

// Local Crate Imports
use crate::routes;

// Public API ==========================================================================================================

/// The display data for a single post, as handed to a `PostCard` for one render.
///
/// Field names on the wire follow the Zif feed (`Title`, `Source`, `InfoHash`). Missing fields decode to empty
/// strings and simply render as empty text.
#[derive(Clone, Eq, PartialEq, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PostViewModel {
    pub title: String,
    pub source: String,
    pub info_hash: String,
}

impl PostViewModel {
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        info_hash: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            info_hash: info_hash.into(),
        }
    }

    #[must_use]
    pub fn stream_path(&self) -> String {
        routes::stream(&self.info_hash)
    }
}

pub fn posts_from_json(json: impl Read) -> Result<Vec<PostViewModel>> {
    serde_json::from_reader(json).wrap_err("failed to decode the post feed")
}

// Unit Tests ==========================================================================================================
