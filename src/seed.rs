use mongodb::bson::Document;
use once_cell::sync::Lazy;

use crate::models::song::Song;

const SEED_JSON: &str = include_str!("../data/songs.json");

/// The bundled dataset, parsed once. Startup clones this list into the store
/// after dropping whatever the previous run left behind.
pub static SEED_SONGS: Lazy<Vec<Document>> = Lazy::new(|| {
    let songs: Vec<Song> =
        serde_json::from_str(SEED_JSON).expect("data/songs.json is malformed");
    songs
        .iter()
        .map(|song| mongodb::bson::to_document(song).expect("seed song converts to BSON"))
        .collect()
});
