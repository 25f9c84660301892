use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::spotify::models::SavedTracksPage;

/// Flattened output record, one per saved track. `artists` is always a
/// single comma-joined string, never a list; `album` is the album's
/// display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackItem {
    pub id: String,
    pub name: String,
    pub album: String,
    pub artists: String,
    pub external_ids: HashMap<String, String>,
}

/// Project one page of raw saved-track entries into output records.
/// Pure: order and count match the input, external identifiers pass
/// through unchanged.
pub fn project(page: &SavedTracksPage) -> Vec<TrackItem> {
    page.items
        .iter()
        .map(|entry| {
            let track = &entry.track;
            TrackItem {
                id: track.id.clone(),
                name: track.name.clone(),
                album: track.album.name.clone(),
                artists: track
                    .artists
                    .iter()
                    .map(|a| a.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                external_ids: track.external_ids.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spotify::models::SavedTrackEntry;

    fn page_of(entries: Vec<SavedTrackEntry>) -> SavedTracksPage {
        let total = entries.len() as u32;
        SavedTracksPage {
            items: entries,
            total,
            next: None,
        }
    }

    #[test]
    fn test_projection_preserves_order_and_count() {
        let page = page_of(vec![
            SavedTrackEntry::mock("1", "First", "Album A", &["Artist"]),
            SavedTrackEntry::mock("2", "Second", "Album B", &["Artist"]),
            SavedTrackEntry::mock("3", "Third", "Album C", &["Artist"]),
        ]);

        let items = project(&page);

        assert_eq!(items.len(), page.items.len());
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_multiple_artists_are_comma_joined() {
        let page = page_of(vec![SavedTrackEntry::mock(
            "1",
            "Under Pressure",
            "Hot Space",
            &["A", "B", "C"],
        )]);

        let items = project(&page);
        assert_eq!(items[0].artists, "A, B, C");
    }

    #[test]
    fn test_single_artist_has_no_separator() {
        let page = page_of(vec![SavedTrackEntry::mock("1", "Song", "Album", &["A"])]);

        let items = project(&page);
        assert_eq!(items[0].artists, "A");
    }

    #[test]
    fn test_zero_artists_yield_empty_string() {
        let page = page_of(vec![SavedTrackEntry::mock("1", "Song", "Album", &[])]);

        let items = project(&page);
        assert_eq!(items[0].artists, "");
    }

    #[test]
    fn test_album_is_flattened_to_its_name() {
        let page = page_of(vec![SavedTrackEntry::mock(
            "1",
            "Bohemian Rhapsody",
            "A Night at the Opera",
            &["Queen"],
        )]);

        let items = project(&page);
        assert_eq!(items[0].album, "A Night at the Opera");
    }

    #[test]
    fn test_external_ids_pass_through_unchanged() {
        let page = page_of(vec![SavedTrackEntry::mock("1", "Song", "Album", &["A"])]);

        let items = project(&page);
        assert_eq!(
            items[0].external_ids.get("isrc").map(String::as_str),
            Some("MOCK12345678")
        );
    }
}
