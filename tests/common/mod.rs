#![allow(dead_code)]
use minitree::prelude::*;

use std::path::PathBuf;


pub const LENSES_ATTRIBUTES: [&str; 4] = [
    "age", "prescript", "astigmatic", "tearRate",
];


/// Path to the 24-record lenses table shipped with the crate.
pub fn lenses_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("data/lenses.txt");
    path
}


pub fn lenses() -> Sample {
    SampleReader::new()
        .file(lenses_path())
        .attributes(&LENSES_ATTRIBUTES)
        .read()
        .unwrap()
}


/// The three-record fixture.
pub fn tiny_lenses() -> Sample {
    Sample::from_rows(
        &LENSES_ATTRIBUTES,
        &[
            ["young", "myope", "no", "reduced", "none"],
            ["pre", "hyper", "no", "normal", "soft"],
            ["presbyopic", "myope", "yes", "normal", "hard"],
        ],
    )
    .unwrap()
}
