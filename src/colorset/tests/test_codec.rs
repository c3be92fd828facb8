#[cfg(test)]
mod codec_tests {
    use crate::{
        colorset::ColorSet,
        error::colorset::ColorSetError,
        model::{Color, ColorPair},
        stream::ColorSetStream,
    };

    #[test]
    fn test_encode_starts_with_magic_and_version() {
        let bytes = ColorSet::new().to_data();

        assert_eq!(&bytes[..8], b"COLORSET");
        // major 2, minor 0, count 0
        assert_eq!(
            &bytes[8..],
            &[0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0][..]
        );
    }

    #[test]
    fn test_round_trip_single_entry_with_variant() {
        let mut set = ColorSet::new();
        set.set_color_with_variant(
            "Background",
            Color::new(1.0, 1.0, 1.0, 1.0),
            Some(Color::new(0.0, 0.0, 0.0, 1.0)),
        );

        let decoded = ColorSet::from_data(&set.to_data()).unwrap();

        assert_eq!(decoded.len(), 1);
        assert_eq!(
            decoded.get("Background"),
            Some(&ColorPair::new(
                Color::new(1.0, 1.0, 1.0, 1.0),
                Some(Color::new(0.0, 0.0, 0.0, 1.0))
            ))
        );
    }

    #[test]
    fn test_round_trip_preserves_insertion_order() {
        let mut set = ColorSet::new();
        set.set_color("Zebra", Color::BLACK);
        set.set_color("Apple", Color::WHITE);
        set.set_color("Mango", Color::CLEAR);

        let decoded = ColorSet::from_data(&set.to_data()).unwrap();

        assert_eq!(
            decoded.names().collect::<Vec<_>>(),
            vec!["Zebra", "Apple", "Mango"]
        );
    }

    #[test]
    fn test_round_trip_variant_presence_per_entry() {
        let mut set = ColorSet::new();
        set.set_color("Plain", Color::new(0.1, 0.2, 0.3, 0.4));
        set.set_color_with_variant("Paired", Color::WHITE, Some(Color::BLACK));

        let decoded = ColorSet::from_data(&set.to_data()).unwrap();

        assert_eq!(decoded.get("Plain").unwrap().variant, None);
        assert_eq!(decoded.get("Paired").unwrap().variant, Some(Color::BLACK));
    }

    #[test]
    fn test_round_trip_unicode_name() {
        let mut set = ColorSet::new();
        set.set_color("café au lait ☕", Color::new(0.6, 0.4, 0.2, 1.0));

        let decoded = ColorSet::from_data(&set.to_data()).unwrap();

        assert!(decoded.contains("café au lait ☕"));
    }

    #[test]
    fn test_decode_corrupt_magic() {
        let mut bytes = {
            let mut set = ColorSet::new();
            set.set_color("Background", Color::WHITE);
            set.to_data()
        };
        bytes[0] = b'X';

        assert!(matches!(
            ColorSet::from_data(&bytes),
            Err(ColorSetError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_empty_data() {
        assert!(matches!(
            ColorSet::from_data(&[]),
            Err(ColorSetError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_unsupported_version() {
        let mut stream = ColorSetStream::new();
        stream.append_bytes(b"COLORSET");
        stream.append_u32(3);
        stream.append_u32(0);
        stream.append_u32(0);

        assert!(matches!(
            ColorSet::from_data(stream.data()),
            Err(ColorSetError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_legacy_major_version() {
        let mut stream = ColorSetStream::new();
        stream.append_bytes(b"COLORSET");
        stream.append_u32(1);
        stream.append_u32(2);
        stream.append_u32(0);

        assert!(matches!(
            ColorSet::from_data(stream.data()),
            Err(ColorSetError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_implausible_entry_count() {
        let mut stream = ColorSetStream::new();
        stream.append_bytes(b"COLORSET");
        stream.append_u32(2);
        stream.append_u32(0);
        stream.append_u32(u32::MAX);

        assert!(matches!(
            ColorSet::from_data(stream.data()),
            Err(ColorSetError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_truncated_mid_entry() {
        let mut set = ColorSet::new();
        set.set_color("One", Color::WHITE);
        set.set_color("Two", Color::BLACK);
        set.set_color("Three", Color::CLEAR);

        let bytes = set.to_data();
        // Cut into the third entry's primary color
        let truncated = &bytes[..bytes.len() - 5];

        assert!(matches!(
            ColorSet::from_data(truncated),
            Err(ColorSetError::Truncated(2, 3))
        ));
    }

    #[test]
    fn test_decode_duplicate_names_last_wins() {
        let mut stream = ColorSetStream::new();
        stream.append_bytes(b"COLORSET");
        stream.append_u32(2);
        stream.append_u32(0);
        stream.append_u32(2);

        stream.append_string("Accent");
        stream.append_bool(false);
        stream.append_color(&Color::WHITE);

        stream.append_string("Accent");
        stream.append_bool(false);
        stream.append_color(&Color::BLACK);

        let decoded = ColorSet::from_data(stream.data()).unwrap();

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.get("Accent").unwrap().color, Color::BLACK);
    }

    #[test]
    fn test_decode_invalid_name_bytes() {
        let mut stream = ColorSetStream::new();
        stream.append_bytes(b"COLORSET");
        stream.append_u32(2);
        stream.append_u32(0);
        stream.append_u32(1);

        // Length prefix claiming two bytes of invalid UTF-8, then entry padding
        stream.append_u32(2);
        stream.append_bytes(&[0xFF, 0xFE]);
        stream.append_bool(false);
        stream.append_color(&Color::WHITE);

        assert!(matches!(
            ColorSet::from_data(stream.data()),
            Err(ColorSetError::Stream(_))
        ));
    }

    #[test]
    fn test_decode_empty_set() {
        let decoded = ColorSet::from_data(&ColorSet::new().to_data()).unwrap();

        assert!(decoded.is_empty());
    }
}
