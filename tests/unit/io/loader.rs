//! Tests for tile loaders and parallel tile construction

#[cfg(test)]
mod tests {
    use crate::fixtures::{noise_picture, small_config, small_layout};
    use puzzlestitch::io::error::{ErrorKind, PuzzleError};
    use puzzlestitch::io::loader::{
        DirectoryLoader, MemoryLoader, TileLoader, construct_tiles, load_tiles,
    };
    use puzzlestitch::io::scramble::{scramble, write_pieces};
    use puzzlestitch::spatial::RawTile;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    fn shuffled_raws(seed: u64) -> Vec<RawTile> {
        let layout = small_layout();
        scramble(&noise_picture(&layout), &layout, seed)
            .expect("picture matches layout")
            .into_iter()
            .map(|piece| piece.tile)
            .collect()
    }

    // Tests parallel loading keeps input order and reports every tile
    // Verified by collecting tiles in completion order
    #[test]
    fn test_load_tiles_keeps_input_order() {
        let raws = shuffled_raws(4);
        let loader = MemoryLoader::new(raws.clone());
        let loaded = AtomicUsize::new(0);

        let tiles = load_tiles(&loader, &small_config(), || {
            loaded.fetch_add(1, Ordering::Relaxed);
        })
        .expect("complete tile set");

        assert_eq!(loaded.load(Ordering::Relaxed), 12);
        for (index, (built, raw)) in tiles.iter().zip(&raws).enumerate() {
            assert_eq!(built.id(), index);
            assert_eq!(built.pixels(), raw.pixels());
        }
    }

    // Tests a tile set that doesn't fill the grid is refused before decoding
    // Verified by moving the count check after loading
    #[test]
    fn test_load_tiles_checks_count() {
        let mut raws = shuffled_raws(2);
        raws.pop();
        let loader = MemoryLoader::new(raws);
        let loaded = AtomicUsize::new(0);

        let result = load_tiles(&loader, &small_config(), || {
            loaded.fetch_add(1, Ordering::Relaxed);
        });

        assert!(matches!(
            result,
            Err(PuzzleError::TileCount {
                expected: 12,
                found: 11
            })
        ));
        assert_eq!(loaded.load(Ordering::Relaxed), 0);
    }

    // Tests directory scanning picks up images only, sorted by path
    // Verified by removing the extension filter
    #[test]
    fn test_directory_scan() {
        let dir = TempDir::new().expect("temporary directory");
        let layout = small_layout();
        let pieces = scramble(&noise_picture(&layout), &layout, 8).expect("picture matches layout");
        write_pieces(&pieces, dir.path(), "peace-{}.png").expect("pieces written");
        std::fs::write(dir.path().join("notes.txt"), "not a tile").expect("note written");

        let loader = DirectoryLoader::from_directory(dir.path());
        let ids = loader.identifiers().expect("directory readable");

        assert_eq!(loader.directory(), dir.path());
        assert_eq!(ids.len(), 12);
        assert!(ids.windows(2).all(|pair| matches!(pair, [a, b] if a < b)));

        let tiles = load_tiles(&loader, &small_config(), || {}).expect("complete tile set");
        assert_eq!(tiles.len(), 12);
    }

    // Tests template naming produces indices 0..count in order
    // Verified by starting the numbering at one
    #[test]
    fn test_template_identifiers() {
        let dir = TempDir::new().expect("temporary directory");
        let loader = DirectoryLoader::from_template(dir.path(), "peace-{}.jpg", 3);

        let ids = loader.identifiers().expect("templates need no directory access");

        assert_eq!(
            ids,
            vec![
                dir.path().join("peace-0.jpg"),
                dir.path().join("peace-1.jpg"),
                dir.path().join("peace-2.jpg"),
            ]
        );
    }

    // Tests a missing tile file is a load error naming the file
    // Verified by dropping the path context
    #[test]
    fn test_missing_file_is_load_error() {
        let dir = TempDir::new().expect("temporary directory");
        let loader = DirectoryLoader::from_template(dir.path(), "peace-{}.png", 12);

        match load_tiles(&loader, &small_config(), || {}) {
            Err(error) => {
                assert_eq!(error.kind(), ErrorKind::Load);
                assert!(error.to_string().contains("peace-"));
            }
            Ok(_) => unreachable!("Expected missing tiles to fail"),
        }
    }

    // Tests an unreadable directory is reported as a file system error
    // Verified by returning an empty listing on failure
    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().expect("temporary directory");
        let loader = DirectoryLoader::from_directory(dir.path().join("absent"));

        assert!(matches!(
            loader.identifiers(),
            Err(PuzzleError::FileSystem {
                operation: "read directory",
                ..
            })
        ));
    }

    // Tests memory loading rejects identifiers past the set
    // Verified by wrapping the index around
    #[test]
    fn test_memory_loader_bounds() {
        let loader = MemoryLoader::new(shuffled_raws(0));

        assert!(loader.load(&11).is_ok());
        assert!(matches!(
            loader.load(&12),
            Err(PuzzleError::InvalidTileIndex {
                index: 12,
                max_tiles: 12
            })
        ));
    }

    // Tests direct construction numbers tiles in input order
    // Verified by assigning ids after sorting
    #[test]
    fn test_construct_tiles_ids() {
        let tiles = construct_tiles(shuffled_raws(6), &small_config());

        assert_eq!(
            tiles.iter().map(|built| built.id()).collect::<Vec<_>>(),
            (0..12).collect::<Vec<_>>()
        );
    }
}
