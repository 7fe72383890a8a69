//! Sequenced push commands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a push identity command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushCommandKind {
    SetAlias,
    DeleteAlias,
    SetTags,
    DeleteTags,
    SetBadge,
}

impl PushCommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PushCommandKind::SetAlias => "set_alias",
            PushCommandKind::DeleteAlias => "delete_alias",
            PushCommandKind::SetTags => "set_tags",
            PushCommandKind::DeleteTags => "delete_tags",
            PushCommandKind::SetBadge => "set_badge",
        }
    }
}

impl fmt::Display for PushCommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload carried by a push command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PushPayload {
    Alias(String),
    Tags(Vec<String>),
    Badge(u32),
    Empty,
}

/// A command for the remote push service.
///
/// `sequence` comes from one process-wide counter shared by all kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushCommand {
    pub sequence: u64,
    pub kind: PushCommandKind,
    pub payload: PushPayload,
}

impl PushCommand {
    pub fn set_alias(sequence: u64, alias: impl Into<String>) -> Self {
        Self {
            sequence,
            kind: PushCommandKind::SetAlias,
            payload: PushPayload::Alias(alias.into()),
        }
    }

    pub fn delete_alias(sequence: u64) -> Self {
        Self {
            sequence,
            kind: PushCommandKind::DeleteAlias,
            payload: PushPayload::Empty,
        }
    }

    pub fn set_tags(sequence: u64, tags: Vec<String>) -> Self {
        Self {
            sequence,
            kind: PushCommandKind::SetTags,
            payload: PushPayload::Tags(tags),
        }
    }

    pub fn delete_tags(sequence: u64, tags: Vec<String>) -> Self {
        Self {
            sequence,
            kind: PushCommandKind::DeleteTags,
            payload: PushPayload::Tags(tags),
        }
    }

    pub fn set_badge(sequence: u64, count: u32) -> Self {
        Self {
            sequence,
            kind: PushCommandKind::SetBadge,
            payload: PushPayload::Badge(count),
        }
    }
}
