//! Mutation API wire types

use serde::{Deserialize, Serialize};
use shared::Document;

/// A single mutation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Mutation<'a> {
    /// Create with a server-assigned id
    Create(&'a Document),
    /// Create, or overwrite the document with the same `_id`
    CreateOrReplace(&'a Document),
}

impl Mutation<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::CreateOrReplace(_) => "createOrReplace",
        }
    }
}

/// Request body of `POST /data/mutate/{dataset}`
#[derive(Debug, Serialize)]
pub struct MutateRequest<'a> {
    pub mutations: Vec<Mutation<'a>>,
}

/// Response body of a committed transaction
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutateResponse {
    pub transaction_id: String,
    #[serde(default)]
    pub results: Vec<MutationResult>,
}

/// Per-mutation result (present with `returnIds=true`)
#[derive(Debug, Clone, Deserialize)]
pub struct MutationResult {
    pub id: String,
    #[serde(default)]
    pub operation: Option<String>,
}
