use std::collections::HashMap;

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::types::{PlaylistRecord, TrackRecord};

/// In-memory track/playlist store. Nothing here survives a restart and the
/// relay path never touches it; each operation takes the lock once and never
/// awaits while holding it, so last-write-wins is the only semantics needed.
pub struct Storage {
    tracks: Mutex<HashMap<String, TrackRecord>>,
    playlists: Mutex<HashMap<String, PlaylistRecord>>,
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage {
    pub fn new() -> Self {
        Self {
            tracks: Mutex::new(HashMap::new()),
            playlists: Mutex::new(HashMap::new()),
        }
    }

    pub fn generate_id() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(26)
            .map(char::from)
            .collect::<String>()
            .to_lowercase()
    }

    pub async fn list_tracks(&self) -> Vec<TrackRecord> {
        self.tracks.lock().await.values().cloned().collect()
    }

    pub async fn get_track(&self, id: &str) -> Option<TrackRecord> {
        self.tracks.lock().await.get(id).cloned()
    }

    pub async fn insert_track(&self, mut track: TrackRecord) -> TrackRecord {
        if track.id.is_empty() {
            track.id = Self::generate_id();
        }
        self.tracks
            .lock()
            .await
            .insert(track.id.clone(), track.clone());
        track
    }

    pub async fn remove_track(&self, id: &str) -> bool {
        self.tracks.lock().await.remove(id).is_some()
    }

    pub async fn list_playlists(&self) -> Vec<PlaylistRecord> {
        self.playlists.lock().await.values().cloned().collect()
    }

    pub async fn get_playlist(&self, id: &str) -> Option<PlaylistRecord> {
        self.playlists.lock().await.get(id).cloned()
    }

    pub async fn insert_playlist(&self, mut playlist: PlaylistRecord) -> PlaylistRecord {
        let now = Utc::now();
        if playlist.id.is_empty() {
            playlist.id = Self::generate_id();
        }
        playlist.created_at = Some(now);
        playlist.updated_at = Some(now);
        self.playlists
            .lock()
            .await
            .insert(playlist.id.clone(), playlist.clone());
        playlist
    }

    pub async fn remove_playlist(&self, id: &str) -> bool {
        self.playlists.lock().await.remove(id).is_some()
    }

    /// Appends a track to a playlist, bumping `updatedAt`. Returns the
    /// updated playlist, or `None` when the playlist does not exist.
    pub async fn add_playlist_track(&self, id: &str, track: Value) -> Option<PlaylistRecord> {
        let mut playlists = self.playlists.lock().await;
        let playlist = playlists.get_mut(id)?;
        playlist.tracks.push(track);
        playlist.updated_at = Some(Utc::now());
        Some(playlist.clone())
    }

    /// Removes every track whose `id` field matches `track_id`.
    pub async fn remove_playlist_track(
        &self,
        id: &str,
        track_id: &str,
    ) -> Option<PlaylistRecord> {
        let mut playlists = self.playlists.lock().await;
        let playlist = playlists.get_mut(id)?;
        playlist
            .tracks
            .retain(|t| t["id"].as_str() != Some(track_id));
        playlist.updated_at = Some(Utc::now());
        Some(playlist.clone())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map};

    use super::*;

    fn track(id: &str) -> TrackRecord {
        TrackRecord {
            id: id.to_string(),
            fields: Map::new(),
        }
    }

    #[test]
    fn generated_ids_are_lowercase_alphanumeric() {
        let id = Storage::generate_id();
        assert_eq!(id.len(), 26);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_ne!(id, Storage::generate_id());
    }

    #[tokio::test]
    async fn track_insert_is_last_write_wins() {
        let storage = Storage::new();
        let mut first = track("a");
        first.fields.insert("title".into(), json!("one"));
        storage.insert_track(first).await;

        let mut second = track("a");
        second.fields.insert("title".into(), json!("two"));
        storage.insert_track(second).await;

        let stored = storage.get_track("a").await.unwrap();
        assert_eq!(stored.fields["title"], json!("two"));
        assert_eq!(storage.list_tracks().await.len(), 1);
    }

    #[tokio::test]
    async fn insert_generates_missing_ids() {
        let storage = Storage::new();
        let stored = storage.insert_track(track("")).await;
        assert_eq!(stored.id.len(), 26);
        assert!(storage.get_track(&stored.id).await.is_some());
    }

    #[tokio::test]
    async fn playlist_track_membership() {
        let storage = Storage::new();
        let playlist = storage
            .insert_playlist(PlaylistRecord {
                id: String::new(),
                tracks: Vec::new(),
                created_at: None,
                updated_at: None,
                fields: Map::new(),
            })
            .await;
        assert!(playlist.created_at.is_some());

        let updated = storage
            .add_playlist_track(&playlist.id, json!({ "id": "t1" }))
            .await
            .unwrap();
        assert_eq!(updated.tracks.len(), 1);

        let updated = storage
            .remove_playlist_track(&playlist.id, "t1")
            .await
            .unwrap();
        assert!(updated.tracks.is_empty());

        assert!(storage.add_playlist_track("missing", json!({})).await.is_none());
    }
}
