use clap::Parser;

pub(crate) const COPYRIGHT: &str = "Copyright © 2017 Andy Williams <andy@andywilliams.me> \
     and various contributors (see AUTHORS).";
pub(crate) const LICENSE: &str = "3 clause BSD license";

/// An interactive Mandelbrot set viewer.
///
/// Drag or use the arrow keys to pan; use the mouse wheel or +/- to zoom.
#[derive(Debug, Parser)]
#[command(name = "fractally", version, about)]
pub(crate) struct Args {
    /// Show the licence and exit
    #[arg(short = 'L', long)]
    pub license: bool,

    /// Show the copyright and exit
    #[arg(short = 'C', long)]
    pub copyright: bool,
}

impl Args {
    /// Text to print instead of starting the viewer, if any.
    pub(crate) fn info_text(&self) -> Option<&'static str> {
        if self.license {
            Some(LICENSE)
        } else if self.copyright {
            Some(COPYRIGHT)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_starts_viewer() {
        let args = Args::try_parse_from(["fractally"]).unwrap();
        assert_eq!(args.info_text(), None);
    }

    #[test]
    fn license_flag() {
        let args = Args::try_parse_from(["fractally", "--license"]).unwrap();
        assert_eq!(args.info_text(), Some(LICENSE));
        let args = Args::try_parse_from(["fractally", "-L"]).unwrap();
        assert_eq!(args.info_text(), Some(LICENSE));
    }

    #[test]
    fn copyright_flag() {
        let args = Args::try_parse_from(["fractally", "-C"]).unwrap();
        assert_eq!(args.info_text(), Some(COPYRIGHT));
    }

    #[test]
    fn fractal_options_are_rejected() {
        assert!(Args::try_parse_from(["fractally", "--scale", "2"]).is_err());
    }

    #[test]
    fn version_and_help_are_builtin() {
        let err = Args::try_parse_from(["fractally", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        let err = Args::try_parse_from(["fractally", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
