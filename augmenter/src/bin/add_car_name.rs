//! Adds the 保有車_車名 column looked up from maker and category.

use augmenter::presets::Preset;

fn main() {
    augmenter::cli::main(Preset::CarName)
}
