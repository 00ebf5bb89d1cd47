mod renderer;
mod theme;

pub use renderer::Renderer;

use clap::ValueEnum;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}
