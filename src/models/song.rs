use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A song record as bundled in the seed dataset. The collection schema is
/// open: fields beyond the known three are carried through untouched.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub lyrics: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize, Debug)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Connectivity-probe success body: a human message plus one raw document.
#[derive(Serialize, Debug)]
pub struct SampleSongResponse {
    pub message: String,
    pub sample_song: Document,
}

#[derive(Serialize, Debug)]
pub struct SongListResponse {
    pub songs: Vec<Document>,
}

#[derive(Serialize, Debug)]
pub struct InsertedResponse {
    #[serde(rename = "inserted id")]
    pub inserted_id: String,
}

/// The duplicate-create body spells its key with a capital M. Clients depend
/// on that spelling, so it stays.
#[derive(Serialize, Debug)]
pub struct DuplicateResponse {
    #[serde(rename = "Message")]
    pub message: String,
}
