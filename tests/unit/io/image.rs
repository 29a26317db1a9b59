//! Tests for PNG and JPEG export and output type parsing

#[cfg(test)]
mod tests {
    use crate::fixtures::{CLEAR, gradient, pixel, solid};
    use collager::CollagerError;
    use collager::io::image::{FileType, SaveTarget, save_to};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Tests PNG output decodes back to identical pixels
    // Verified by encoding PNG through the JPEG branch
    #[test]
    fn test_png_round_trip_is_lossless() {
        let temp_dir = TempDir::new().unwrap();
        let target = SaveTarget::new(temp_dir.path().join("canvas.png"), FileType::Png);
        let mut canvas = gradient(32, 16);
        canvas.put_pixel(0, 0, image::Rgba(CLEAR));

        save_to(&canvas, &target).unwrap();

        let decoded = image::open(&target.name).unwrap().to_rgba8();
        assert_eq!(decoded, canvas);
    }

    // Tests JPEG output at maximum quality stays close to the source
    // Verified by lowering the encoder quality to 10
    #[test]
    fn test_jpeg_round_trip_within_tolerance() {
        let temp_dir = TempDir::new().unwrap();
        let target = SaveTarget::new(temp_dir.path().join("canvas.jpg"), FileType::Jpeg);
        let canvas = solid(16, 16, [200, 100, 50, 255]);

        save_to(&canvas, &target).unwrap();

        let bytes = fs::read(&target.name).unwrap();
        assert_eq!(bytes.get(..3), Some(&b"\xFF\xD8\xFF"[..]));
        let decoded = image::open(&target.name).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (16, 16));
        for (expected, actual) in canvas.pixels().zip(decoded.pixels()) {
            for channel in 0..3 {
                let delta = i16::from(expected.0[channel]) - i16::from(actual.0[channel]);
                assert!(delta.abs() <= 6, "channel {channel} off by {delta}");
            }
        }
    }

    // Tests unpainted pixels become black in JPEG output
    // Verified by keeping alpha in the JPEG conversion
    #[test]
    fn test_jpeg_drops_alpha() {
        let temp_dir = TempDir::new().unwrap();
        let target = SaveTarget::new(temp_dir.path().join("clear.jpeg"), FileType::Jpeg);

        save_to(&solid(8, 8, CLEAR), &target).unwrap();

        let decoded = image::open(&target.name).unwrap().to_rgba8();
        assert!(pixel(&decoded, 4, 4).iter().take(3).all(|&c| c <= 4));
    }

    // Tests translucent pixels keep their color channels when alpha is dropped
    // Verified by premultiplying alpha before the JPEG conversion
    #[test]
    fn test_jpeg_keeps_translucent_color() {
        let temp_dir = TempDir::new().unwrap();
        let target = SaveTarget::new(temp_dir.path().join("faint.jpg"), FileType::Jpeg);
        let canvas = solid(8, 8, [200, 0, 0, 10]);

        save_to(&canvas, &target).unwrap();

        let decoded = image::open(&target.name).unwrap().to_rgb8();
        let [red, green, blue] = decoded.get_pixel(4, 4).0;
        assert!(red.abs_diff(200) <= 4);
        assert!(green <= 4 && blue <= 4);
        assert_eq!(pixel(&canvas, 0, 0), [200, 0, 0, 10]);
    }

    // Tests an empty name is rejected before any file is created
    // Verified by creating the file before the name check
    #[test]
    fn test_empty_name_fails() {
        let target = SaveTarget::new("", FileType::Png);

        let result = save_to(&solid(2, 2, CLEAR), &target);

        assert!(matches!(result, Err(CollagerError::NoName)));
    }

    // Tests an uncreatable destination reports the create operation
    // Verified by creating missing parent directories
    #[test]
    fn test_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let target = SaveTarget::new(
            temp_dir.path().join("missing").join("out.png"),
            FileType::Png,
        );

        let result = save_to(&solid(2, 2, CLEAR), &target);

        assert!(matches!(
            result,
            Err(CollagerError::FileSystem {
                operation: "create",
                ..
            })
        ));
    }

    // Tests output type parsing accepts both JPEG spellings in any case
    // Verified by matching tags case-sensitively
    #[test]
    fn test_file_type_from_str() {
        assert_eq!("png".parse::<FileType>().unwrap(), FileType::Png);
        assert_eq!("JPG".parse::<FileType>().unwrap(), FileType::Jpeg);
        assert_eq!("jpeg".parse::<FileType>().unwrap(), FileType::Jpeg);
        assert!(matches!(
            "gif".parse::<FileType>(),
            Err(CollagerError::UnsupportedType { .. })
        ));
    }

    // Tests output type detection from file extensions
    // Verified by defaulting missing extensions to PNG
    #[test]
    fn test_file_type_from_extension() {
        assert_eq!(
            FileType::from_extension(Path::new("out/collage.JPEG")).unwrap(),
            FileType::Jpeg
        );
        assert!(FileType::from_extension(Path::new("collage")).is_err());
        assert!(FileType::from_extension(Path::new("collage.webp")).is_err());
        assert_eq!(FileType::Png.to_string(), "png");
    }
}
