use spladl::types::AlbumRef;
use spladl::utils::*;

// Helper function to create a test album
fn create_test_album(url: &str, name: &str) -> AlbumRef {
    AlbumRef {
        url: url.to_string(),
        name: name.to_string(),
        artist: "Artist".to_string(),
    }
}

#[test]
fn test_parse_playlist_id_raw_id() {
    assert_eq!(parse_playlist_id("37i9dQZF1DXcBWIGoYBM5M"), "37i9dQZF1DXcBWIGoYBM5M");
    assert_eq!(parse_playlist_id("  37i9dQZF1DXcBWIGoYBM5M "), "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_parse_playlist_id_uri() {
    assert_eq!(
        parse_playlist_id("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M"),
        "37i9dQZF1DXcBWIGoYBM5M"
    );
}

#[test]
fn test_parse_playlist_id_share_link() {
    assert_eq!(
        parse_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M"),
        "37i9dQZF1DXcBWIGoYBM5M"
    );

    // query parameters from share links are stripped
    assert_eq!(
        parse_playlist_id(
            "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abcdef123456"
        ),
        "37i9dQZF1DXcBWIGoYBM5M"
    );

    assert_eq!(
        parse_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M/"),
        "37i9dQZF1DXcBWIGoYBM5M"
    );
}

#[test]
fn test_remove_duplicate_albums() {
    let mut albums = vec![
        create_test_album("u1", "A1"),
        create_test_album("u2", "A2"),
        create_test_album("u1", "A1 again"),
        create_test_album("u3", "A3"),
        create_test_album("u2", "A2 again"),
    ];

    remove_duplicate_albums(&mut albums);

    assert_eq!(albums.len(), 3);
    assert_eq!(albums[0].url, "u1");
    assert_eq!(albums[1].url, "u2");
    assert_eq!(albums[2].url, "u3");
    // the first occurrence wins
    assert_eq!(albums[0].name, "A1");
}

#[test]
fn test_remove_duplicate_albums_empty() {
    let mut albums: Vec<AlbumRef> = Vec::new();
    remove_duplicate_albums(&mut albums);
    assert!(albums.is_empty());
}

#[test]
fn test_album_identity_by_url_only() {
    let a = create_test_album("same-url", "Name One");
    let b = AlbumRef {
        url: "same-url".to_string(),
        name: "Name Two".to_string(),
        artist: "Other".to_string(),
    };

    assert_eq!(a, b);

    let mut set = std::collections::HashSet::new();
    set.insert(a);
    assert!(!set.insert(b));
}
