use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "reupcycle",
    version,
    about = "Recycling and upcycling advice for your home"
)]
pub(crate) struct Cli {
    /// Open the captured image screen with this image
    #[arg(long, value_name = "PATH")]
    pub(crate) image: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,
}
