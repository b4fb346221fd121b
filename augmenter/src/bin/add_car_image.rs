//! Adds the 車イメージ column with a random image adjective.

use augmenter::presets::Preset;

fn main() {
    augmenter::cli::main(Preset::CarImage)
}
