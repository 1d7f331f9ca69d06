use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use crate::constants::*;

/// Image carousel with auto-advance, pause on hover and dot navigation.
#[derive(Debug, Parser)]
#[command(name = "carousel", version)]
pub struct Args {
    /// Directory holding the slide images (png, jpg, jpeg, bmp, gif)
    pub image_dir: PathBuf,

    /// Milliseconds between automatic advances
    #[arg(
        long,
        default_value_t = AUTOPLAY_INTERVAL.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_ms: u64,

    /// Hide previous/next buttons and dots; disables auto-advance
    #[arg(long)]
    pub no_controls: bool,

    /// Shuffle the slide order once at startup
    #[arg(long)]
    pub shuffle: bool,

    /// Initial window width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,
}

impl Args {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page() {
        let args = Args::try_parse_from(["carousel", "photos"]).unwrap();
        assert_eq!(args.image_dir, PathBuf::from("photos"));
        assert_eq!(args.interval(), Duration::from_millis(6000));
        assert!(!args.no_controls);
        assert!(!args.shuffle);
        assert_eq!((args.width, args.height, args.fps), (1280, 720, 60));
    }

    #[test]
    fn overrides_are_parsed() {
        let args = Args::try_parse_from([
            "carousel", "photos", "--interval-ms", "2500", "--no-controls", "--shuffle", "--fps", "30",
        ])
        .unwrap();
        assert_eq!(args.interval(), Duration::from_millis(2500));
        assert!(args.no_controls);
        assert!(args.shuffle);
        assert_eq!(args.fps, 30);
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(Args::try_parse_from(["carousel", "photos", "--interval-ms", "0"]).is_err());
        assert!(Args::try_parse_from(["carousel", "photos", "--interval-ms", "1"]).is_ok());
    }

    #[test]
    fn image_dir_is_required() {
        assert!(Args::try_parse_from(["carousel"]).is_err());
    }
}
