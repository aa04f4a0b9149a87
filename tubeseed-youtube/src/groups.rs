use crate::types::{ResultKind, SearchResult};

/// Identifier → title mapping that remembers first-seen order.
///
/// Keys are unique: inserting an existing identifier replaces its title but
/// keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultGroup {
    entries: Vec<(String, String)>,
}

impl ResultGroup {
    pub fn insert(&mut self, id: impl Into<String>, title: impl Into<String>) {
        let id = id.into();
        let title = title.into();
        match self.entries.iter_mut().find(|(k, _)| *k == id) {
            Some((_, existing)) => *existing = title,
            None => self.entries.push((id, title)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, t)| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Results of one response partitioned by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultGroups {
    pub videos: ResultGroup,
    pub channels: ResultGroup,
    pub playlists: ResultGroup,
}

impl ResultGroups {
    /// Partition `items` by `id.kind`. Items of unknown kind, or missing the
    /// identifier their kind calls for, are dropped.
    pub fn classify(items: &[SearchResult]) -> Self {
        let mut groups = ResultGroups::default();
        for item in items {
            let (Some(kind), Some(id)) = (item.result_kind(), item.identifier()) else {
                tracing::trace!(kind = %item.id.kind, "youtube.classify.skip");
                continue;
            };
            groups.group_mut(kind).insert(id, item.title());
        }
        groups
    }

    pub fn group(&self, kind: ResultKind) -> &ResultGroup {
        match kind {
            ResultKind::Video => &self.videos,
            ResultKind::Channel => &self.channels,
            ResultKind::Playlist => &self.playlists,
        }
    }

    fn group_mut(&mut self, kind: ResultKind) -> &mut ResultGroup {
        match kind {
            ResultKind::Video => &mut self.videos,
            ResultKind::Channel => &mut self.channels,
            ResultKind::Playlist => &mut self.playlists,
        }
    }

    pub fn total(&self) -> usize {
        self.videos.len() + self.channels.len() + self.playlists.len()
    }
}
