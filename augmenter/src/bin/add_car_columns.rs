//! Adds the 保有車_メーカー and 保有車_カテゴリ columns with random values.

use augmenter::presets::Preset;

fn main() {
    augmenter::cli::main(Preset::CarColumns)
}
