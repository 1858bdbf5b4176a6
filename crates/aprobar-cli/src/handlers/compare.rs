//! Compare command handler: image similarity gate.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::ProgressReporter;
use crate::CompareArgs;
use aprobar::{CompareConfig, ImageComparator};

/// Execute the compare command
pub fn execute_compare(config: &CliConfig, args: &CompareArgs) -> CliResult<()> {
    let reporter = ProgressReporter::new(config.color.should_color(), config.verbosity.is_quiet());

    let comparator = ImageComparator::new(
        CompareConfig::default()
            .with_similarity_threshold(args.threshold)
            .with_resize_to_match(args.resize),
    );

    let result = if args.grayscale {
        comparator.compare_grayscale(&args.reference, &args.candidate)?
    } else {
        comparator.compare_files(&args.reference, &args.candidate)?
    };

    if result.passes(args.threshold) {
        reporter.success(&format!(
            "Images are similar: {:.2}% (required {}%)",
            result.similarity, args.threshold
        ));
        Ok(())
    } else {
        reporter.failure(&format!(
            "Images are not similar: {:.2}% (required {}%)",
            result.similarity, args.threshold
        ));
        Err(CliError::comparison(format!(
            "similarity {:.2}% is below the {}% threshold",
            result.similarity, args.threshold
        )))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn save_solid_png(temp: &TempDir, name: &str, color: [u8; 3]) -> PathBuf {
        let mut img = RgbImage::new(4, 4);
        for pixel in img.pixels_mut() {
            *pixel = Rgb(color);
        }
        let path = temp.path().join(name);
        img.save(&path).unwrap();
        path
    }

    fn args(reference: PathBuf, candidate: PathBuf, threshold: f64) -> CompareArgs {
        CompareArgs {
            reference,
            candidate,
            threshold,
            grayscale: false,
            resize: false,
        }
    }

    #[test]
    fn test_compare_identical_images_succeeds() {
        let temp = TempDir::new().unwrap();
        let img = save_solid_png(&temp, "a.png", [10, 20, 30]);

        let config = CliConfig::default();
        let result = execute_compare(&config, &args(img.clone(), img, 90.0));
        assert!(result.is_ok());
    }

    #[test]
    fn test_compare_dissimilar_images_fails() {
        let temp = TempDir::new().unwrap();
        let black = save_solid_png(&temp, "black.png", [0, 0, 0]);
        let white = save_solid_png(&temp, "white.png", [255, 255, 255]);

        let config = CliConfig::default();
        let result = execute_compare(&config, &args(black, white, 90.0));
        assert!(matches!(result, Err(CliError::Comparison { .. })));
    }

    #[test]
    fn test_compare_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        let img = save_solid_png(&temp, "a.png", [10, 20, 30]);

        let config = CliConfig::default();
        let result = execute_compare(
            &config,
            &args(img, temp.path().join("absent.png"), 90.0),
        );
        assert!(matches!(result, Err(CliError::Aprobar(_))));
    }

    #[test]
    fn test_compare_grayscale_mode() {
        let temp = TempDir::new().unwrap();
        let img = save_solid_png(&temp, "a.png", [100, 100, 100]);

        let config = CliConfig::default();
        let mut compare_args = args(img.clone(), img, 90.0);
        compare_args.grayscale = true;
        assert!(execute_compare(&config, &compare_args).is_ok());
    }
}
