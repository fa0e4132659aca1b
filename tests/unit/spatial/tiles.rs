//! Tests for raw tile validation and tile construction

#[cfg(test)]
mod tests {
    use crate::fixtures::{raw_tile, tile};
    use image::RgbaImage;
    use puzzlestitch::analysis::classification::Role;
    use puzzlestitch::io::error::PuzzleError;
    use puzzlestitch::spatial::RawTile;
    use puzzlestitch::spatial::edges::{SampleMode, Side, Signature};

    // Tests buffers that don't cover width x height RGBA pixels are refused
    // Verified by checking against width * height without the channel count
    #[test]
    fn test_raw_tile_rejects_wrong_buffer_length() {
        let result = RawTile::new(2, 2, vec![0; 12]);
        assert!(matches!(result, Err(PuzzleError::InvalidTileData { .. })));

        assert!(RawTile::new(2, 2, vec![0; 16]).is_ok());
    }

    // Tests zero-sized tiles are refused
    // Verified by removing the dimension check
    #[test]
    fn test_raw_tile_rejects_zero_dimensions() {
        assert!(RawTile::new(0, 3, Vec::new()).is_err());
        assert!(RawTile::new(3, 0, Vec::new()).is_err());
    }

    // Tests conversion from a decoded image keeps dimensions and bytes
    // Verified by swapping width and height in the conversion
    #[test]
    fn test_raw_tile_from_image() {
        let img = RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 4]));
        let raw = RawTile::from(img);

        assert_eq!(raw.width(), 3);
        assert_eq!(raw.height(), 2);
        assert_eq!(raw.pixels().len(), 24);
        assert_eq!(raw.pixels().get(..4), Some(&[1, 2, 3, 4][..]));
    }

    // Tests construction assigns roles from the tile dimensions
    // Verified by comparing only the tile height in role assignment
    #[test]
    fn test_tile_role_from_dimensions() {
        let gray = |_: u32, _: u32| [9_u8, 9, 9];

        assert_eq!(tile(0, raw_tile(6, 4, gray), SampleMode::Color).role(), Role::Anchor);
        assert_eq!(
            tile(1, raw_tile(6, 5, gray), SampleMode::Color).role(),
            Role::LeftColumnMember
        );
        assert_eq!(
            tile(2, raw_tile(7, 5, gray), SampleMode::Color).role(),
            Role::GeneralMember
        );
        assert_eq!(
            tile(3, raw_tile(7, 4, gray), SampleMode::Color).role(),
            Role::GeneralMember
        );
    }

    // Tests the tile keeps its id, pixels and extracted borders
    // Verified by extracting the left border from the last column
    #[test]
    fn test_tile_carries_signatures() {
        let raw = raw_tile(7, 5, |x, _| if x == 0 { [30, 30, 30] } else { [90, 90, 90] });
        let pixels = raw.pixels().to_vec();
        let built = tile(12, raw, SampleMode::Luminance);

        assert_eq!(built.id(), 12);
        assert_eq!((built.width(), built.height()), (7, 5));
        assert_eq!(built.pixels(), pixels.as_slice());
        assert_eq!(built.edge(Side::Left), &Signature::Luminance(vec![30; 5]));
        assert_eq!(built.edge(Side::Right), &Signature::Luminance(vec![90; 5]));
        assert_eq!(built.edges().get(Side::Top).len(), 7);
    }
}
