use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::output::{Record, Source};
use crate::parser::text::{self, normalize};
use crate::parser::ExtractError;

static ENTRY_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#results > div.details").unwrap());
static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.title > a").unwrap());
static DESCRIPTION_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.abstract").unwrap());
static SOURCE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.source > span").unwrap());

pub fn locate(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&ENTRY_SEL).collect()
}

/// One Digital Library result. The year is the first digit run in the
/// first venue span ("June 2021, pp. 310-322" style); a digit-free span
/// fails the extraction outright.
pub fn extract(fragment: ElementRef<'_>) -> Result<Record, ExtractError> {
    let title_link = fragment.select(&TITLE_SEL).next();
    let url = title_link
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default()
        .to_string();

    let venue = normalize(fragment.select(&SOURCE_SEL).next());
    let year = text::first_digit_run(&venue)
        .ok_or_else(|| ExtractError::MissingYearDigits(venue.clone()))?
        .to_string();

    Ok(Record {
        title: normalize(title_link),
        description: normalize(fragment.select(&DESCRIPTION_SEL).next()),
        year,
        url,
        datasource: Source::Acm,
        filename: String::new(),
    })
}
