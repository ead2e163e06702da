use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::output::{Record, Source};
use crate::parser::text::{self, normalize};
use crate::parser::ExtractError;

/// Year marker for entries whose byline carries no four-digit year.
pub const UNKNOWN_YEAR: &str = "unknown";

static ENTRY_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#gs_res_ccl_mid > div.gs_r.gs_or.gs_scl").unwrap());
static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.gs_ri > h3").unwrap());
static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static DESCRIPTION_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.gs_ri > div.gs_rs").unwrap());
static BYLINE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.gs_ri > div.gs_a").unwrap());

pub fn locate(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&ENTRY_SEL).collect()
}

/// One Scholar result. Citation-only entries render the title heading
/// without a link, so the anchor lookup falls back to the heading itself.
/// Scholar has no dedicated year cell; the byline ("authors - venue, year
/// - host") is scanned for a standalone four-digit year instead, with an
/// explicit marker when none is present.
pub fn extract(fragment: ElementRef<'_>) -> Result<Record, ExtractError> {
    let heading = fragment.select(&TITLE_SEL).next();
    let title_node = heading
        .and_then(|h3| h3.select(&ANCHOR_SEL).next())
        .or(heading);
    let url = title_node
        .and_then(|el| el.value().attr("href"))
        .unwrap_or_default()
        .to_string();

    let byline = normalize(fragment.select(&BYLINE_SEL).next());
    let year = text::find_year(&byline).unwrap_or(UNKNOWN_YEAR).to_string();

    Ok(Record {
        title: normalize(title_node),
        description: normalize(fragment.select(&DESCRIPTION_SEL).next()),
        year,
        url,
        datasource: Source::GoogleScholar,
        filename: String::new(),
    })
}
