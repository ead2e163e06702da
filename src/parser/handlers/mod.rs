pub mod acm;
pub mod google_scholar;
pub mod ieee;

use scraper::{ElementRef, Html};

use crate::output::{Record, Source};
use crate::parser::ExtractError;

/// Ordered candidate result fragments for one parsed page. An empty vec
/// means the page carries no result container, which is not an error
/// (saved zero-hit pages are normal input).
pub fn locate(source: Source, document: &Html) -> Vec<ElementRef<'_>> {
    match source {
        Source::Ieee => ieee::locate(document),
        Source::Acm => acm::locate(document),
        Source::GoogleScholar => google_scholar::locate(document),
    }
}

/// Extract one citation record from a located fragment. The filename field
/// is left empty here and stamped by the caller.
pub fn extract(source: Source, fragment: ElementRef<'_>) -> Result<Record, ExtractError> {
    match source {
        Source::Ieee => ieee::extract(fragment),
        Source::Acm => acm::extract(fragment),
        Source::GoogleScholar => google_scholar::extract(fragment),
    }
}
