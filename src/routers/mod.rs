pub mod root;
pub mod song;

pub use root::{count_route, health_route, test_mongo_route};
pub use song::{
    create_song_route, delete_song_route, get_song_route, list_songs_route, update_song_route,
};
