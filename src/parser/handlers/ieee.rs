use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::output::{Record, Source};
use crate::parser::text::{self, normalize};
use crate::parser::ExtractError;

static ENTRY_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".List-results-items > xpl-results-item > div:first-of-type").unwrap()
});
static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2 > a").unwrap());
static DESCRIPTION_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.js-displayer-content > span").unwrap());
static YEAR_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.description > div > span").unwrap());

pub fn locate(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&ENTRY_SEL).collect()
}

/// One Xplore result row. The publication cell reads "Year: <digits>", so
/// the label is stripped; a row without the cell degrades to an empty year.
pub fn extract(fragment: ElementRef<'_>) -> Result<Record, ExtractError> {
    let title_link = fragment.select(&TITLE_SEL).next();
    let url = title_link
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default()
        .to_string();

    let year_cell = normalize(fragment.select(&YEAR_SEL).next());
    let year = text::strip_year_prefix(&year_cell).to_string();

    Ok(Record {
        title: normalize(title_link),
        description: normalize(fragment.select(&DESCRIPTION_SEL).next()),
        year,
        url,
        datasource: Source::Ieee,
        filename: String::new(),
    })
}
