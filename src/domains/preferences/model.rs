//! The persisted preference record and the pure operations on it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::domains::tools::LoadedToolInfo;

/// How many recently used tools are remembered.
pub const LAST_USED_CAPACITY: usize = 10;

/// One entry of the recent-usage list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEntry {
    pub id: String,

    /// Milliseconds since the Unix epoch on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// User customization of the tool list.
///
/// Identifiers that no longer match a tool are kept and ignored by the
/// views; tools come and go between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserToolPreferences {
    pub pinned: BTreeSet<String>,
    pub favorites: BTreeSet<String>,

    /// Explicit user ordering. Tools missing here follow in discovery order.
    pub sort_order: Vec<String>,

    /// Most recent last, at most [`LAST_USED_CAPACITY`] entries.
    pub last_used: VecDeque<UsageEntry>,
}

impl UserToolPreferences {
    /// Flip pin membership. Returns whether the tool is now pinned.
    pub fn toggle_pin(&mut self, id: &str) -> bool {
        toggle(&mut self.pinned, id)
    }

    /// Flip favorite membership. Returns whether the tool is now a favorite.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        toggle(&mut self.favorites, id)
    }

    pub fn is_pinned(&self, id: &str) -> bool {
        self.pinned.contains(id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Move `from` to the position `to` currently occupies.
    ///
    /// `known` is the current identifier list in discovery order. Before the
    /// move, every known identifier missing from `sort_order` is appended in
    /// that order, so the first reorder fixes a full ordering. Returns false
    /// (and changes nothing) when either identifier is unknown or both are
    /// the same.
    pub fn reorder(&mut self, from: &str, to: &str, known: &[&str]) -> bool {
        if from == to {
            return false;
        }

        let mut order = self.sort_order.clone();
        let present: HashSet<String> = order.iter().cloned().collect();
        order.extend(
            known
                .iter()
                .filter(|id| !present.contains(**id))
                .map(|id| id.to_string()),
        );

        let (Some(from_idx), Some(to_idx)) = (
            order.iter().position(|id| id == from),
            order.iter().position(|id| id == to),
        ) else {
            return false;
        };

        let moved = order.remove(from_idx);
        order.insert(to_idx, moved);
        self.sort_order = order;
        true
    }

    /// Record that `id` was just used.
    pub fn record_usage(&mut self, id: &str, at: DateTime<Utc>) {
        self.last_used.retain(|entry| entry.id != id);
        self.last_used.push_back(UsageEntry {
            id: id.to_string(),
            timestamp: at,
        });
        while self.last_used.len() > LAST_USED_CAPACITY {
            self.last_used.pop_front();
        }
    }

    /// Display ordering of `tools` (given in discovery order).
    ///
    /// Tools listed in `sort_order` come first in that order, the rest follow
    /// in discovery order; then pinned tools are moved ahead of unpinned ones
    /// without disturbing the relative order inside either group. Every tool
    /// appears exactly once, including tools that share an identifier.
    pub fn sorted_view(&self, tools: &[LoadedToolInfo]) -> Vec<LoadedToolInfo> {
        let mut ordered: Vec<&LoadedToolInfo> = Vec::with_capacity(tools.len());
        let mut placed = vec![false; tools.len()];

        for id in &self.sort_order {
            for (index, tool) in tools.iter().enumerate() {
                if !placed[index] && &tool.id == id {
                    placed[index] = true;
                    ordered.push(tool);
                }
            }
        }
        for (index, tool) in tools.iter().enumerate() {
            if !placed[index] {
                ordered.push(tool);
            }
        }

        let (pinned, rest): (Vec<_>, Vec<_>) =
            ordered.into_iter().partition(|t| self.is_pinned(&t.id));

        pinned.into_iter().chain(rest).cloned().collect()
    }

    /// Favorite tools in display order.
    pub fn favorites_view(&self, tools: &[LoadedToolInfo]) -> Vec<LoadedToolInfo> {
        self.sorted_view(tools)
            .into_iter()
            .filter(|t| self.is_favorite(&t.id))
            .collect()
    }

    /// Recently used tools, most recent first. Unknown identifiers are skipped.
    pub fn recent_view(&self, tools: &[LoadedToolInfo]) -> Vec<(LoadedToolInfo, DateTime<Utc>)> {
        self.last_used
            .iter()
            .rev()
            .filter_map(|entry| {
                tools
                    .iter()
                    .find(|t| t.id == entry.id)
                    .map(|t| (t.clone(), entry.timestamp))
            })
            .collect()
    }
}

fn toggle(set: &mut BTreeSet<String>, id: &str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.to_string());
        true
    }
}
