//! Cross-file reference links
//!
//! Anchors are built from the trailing package segments and the file stem,
//! e.g. `shop.v1` + `payment.proto` -> `#shop-v1-payment`. Two imports whose
//! trailing segments and stems coincide get the same anchor.

use crate::descriptor::{is_well_known, File};
use crate::naming::{last_segments, lower_snake_case, upper_camel_case};
use crate::types::PackageLink;

/// Package segments kept in an anchor
const ANCHOR_SEGMENTS: usize = 3;

/// Anchor for the documentation of `file`
pub fn anchor(file: &File) -> String {
    let mut parts: Vec<String> = last_segments(&file.package, ANCHOR_SEGMENTS)
        .into_iter()
        .map(lower_snake_case)
        .collect();
    parts.push(file.stem().to_lowercase());
    format!("#{}", parts.join("-"))
}

/// Link for a single imported file
pub fn package_link(file: &File) -> PackageLink {
    PackageLink {
        name: upper_camel_case(file.stem()),
        url: anchor(file),
    }
}

/// Links for `imports`, in order, skipping well-known-type files
pub fn package_links<'a>(imports: impl IntoIterator<Item = &'a File>) -> Vec<PackageLink> {
    imports
        .into_iter()
        .filter(|file| !is_well_known(&file.package))
        .map(package_link)
        .collect()
}
