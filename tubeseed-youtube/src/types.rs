use serde::{Deserialize, Serialize};

/// Body of a `search.list` response. Only the fields we read or log are typed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub etag: Option<String>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub region_code: Option<String>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub results_per_page: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub etag: Option<String>,
    /// Missing on malformed items; those classify as unknown and are dropped.
    #[serde(default)]
    pub id: ResourceId,
    #[serde(default)]
    pub snippet: Option<Snippet>,
}

/// `id` object of a search result; which id field is set depends on `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub playlist_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub channel_title: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub live_broadcast_content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Video,
    Channel,
    Playlist,
}

impl ResultKind {
    pub const ALL: [ResultKind; 3] = [ResultKind::Video, ResultKind::Channel, ResultKind::Playlist];

    /// Map an API `id.kind` string; unknown kinds yield `None`.
    pub fn from_api(kind: &str) -> Option<Self> {
        match kind {
            "youtube#video" => Some(ResultKind::Video),
            "youtube#channel" => Some(ResultKind::Channel),
            "youtube#playlist" => Some(ResultKind::Playlist),
            _ => None,
        }
    }

    /// Header used for the group in verbose output.
    pub fn section_name(self) -> &'static str {
        match self {
            ResultKind::Video => "Videos",
            ResultKind::Channel => "Channels",
            ResultKind::Playlist => "Playlists",
        }
    }
}

impl SearchResult {
    pub fn result_kind(&self) -> Option<ResultKind> {
        ResultKind::from_api(&self.id.kind)
    }

    /// The kind-specific identifier (`videoId`, `channelId` or `playlistId`).
    pub fn identifier(&self) -> Option<&str> {
        match self.result_kind()? {
            ResultKind::Video => self.id.video_id.as_deref(),
            ResultKind::Channel => self.id.channel_id.as_deref(),
            ResultKind::Playlist => self.id.playlist_id.as_deref(),
        }
    }

    pub fn title(&self) -> &str {
        self.snippet.as_ref().map(|s| s.title.as_str()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_live_shaped_response() {
        let body = r#"{
            "kind": "youtube#searchListResponse",
            "etag": "abc",
            "nextPageToken": "CDIQAA",
            "regionCode": "US",
            "pageInfo": {"totalResults": 1000000, "resultsPerPage": 2},
            "items": [
                {
                    "kind": "youtube#searchResult",
                    "etag": "e1",
                    "id": {"kind": "youtube#video", "videoId": "dQw4w9WgXcQ"},
                    "snippet": {
                        "publishedAt": "2009-10-25T06:57:33Z",
                        "channelId": "UCuAXFkgsw1L7xaCfnd5JJOw",
                        "title": "Never Gonna Give You Up",
                        "description": "...",
                        "channelTitle": "Rick Astley",
                        "liveBroadcastContent": "none"
                    }
                },
                {
                    "kind": "youtube#searchResult",
                    "id": {"kind": "youtube#playlist", "playlistId": "PL123"}
                }
            ]
        }"#;
        let resp: SearchListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.next_page_token.as_deref(), Some("CDIQAA"));
        assert_eq!(resp.page_info.as_ref().and_then(|p| p.results_per_page), Some(2));
        assert_eq!(resp.items.len(), 2);

        let video = &resp.items[0];
        assert_eq!(video.result_kind(), Some(ResultKind::Video));
        assert_eq!(video.identifier(), Some("dQw4w9WgXcQ"));
        assert_eq!(video.title(), "Never Gonna Give You Up");

        let playlist = &resp.items[1];
        assert_eq!(playlist.identifier(), Some("PL123"));
        assert_eq!(playlist.title(), "");
    }

    #[test]
    fn empty_body_decodes_to_no_items() {
        let resp: SearchListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.items.is_empty());
    }

    #[test]
    fn unknown_kind_has_no_identifier() {
        let item: SearchResult =
            serde_json::from_str(r#"{"id":{"kind":"youtube#short","videoId":"x"}}"#).unwrap();
        assert_eq!(item.result_kind(), None);
        assert_eq!(item.identifier(), None);
    }

    #[test]
    fn api_kind_strings_map_to_result_kinds() {
        assert_eq!(ResultKind::from_api("youtube#video"), Some(ResultKind::Video));
        assert_eq!(ResultKind::from_api("youtube#channel"), Some(ResultKind::Channel));
        assert_eq!(ResultKind::from_api("youtube#playlist"), Some(ResultKind::Playlist));
        assert_eq!(ResultKind::from_api("youtube#searchResult"), None);
        assert_eq!(ResultKind::from_api(""), None);
    }

    #[test]
    fn item_without_id_does_not_sink_the_page() {
        let body = r#"{"items":[
            {"id":{"kind":"youtube#video","videoId":"abc"},"snippet":{"title":"X"}},
            {"snippet":{"title":"no id"}}
        ]}"#;
        let resp: SearchListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.items.len(), 2);
        assert_eq!(resp.items[1].result_kind(), None);

        let groups = crate::groups::ResultGroups::classify(&resp.items);
        assert_eq!(groups.total(), 1);
        assert_eq!(groups.videos.get("abc"), Some("X"));
    }
}
