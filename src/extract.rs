use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::repo::{MissingField, Project, Skipped};

pub const GITHUB_HOST: &str = "https://github.com";

static ENTRY: Lazy<Selector> = Lazy::new(|| selector("article.Box-row"));
// Heading and description must carry exactly these class strings.
static TITLE: Lazy<Selector> = Lazy::new(|| selector(r#"h1[class="h3 lh-condensed"]"#));
static LINK: Lazy<Selector> = Lazy::new(|| selector("a"));
static DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| selector(r#"p[class="col-9 color-fg-muted my-1 pr-4"]"#));

fn selector(s: &str) -> Selector {
    Selector::parse(s).expect("static selector")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub projects: Vec<Project>,
    pub skipped: Vec<Skipped>,
}

/// Pull every trending entry out of the page, in document order.
///
/// Entries lacking a title heading or link are reported in `skipped` rather
/// than failing the whole page.
pub fn extract(html: &[u8], default_description: &str) -> Extraction {
    let html = String::from_utf8_lossy(html);
    let document = Html::parse_document(&html);

    let mut extraction = Extraction::default();
    for (index, entry) in document.select(&ENTRY).enumerate() {
        match extract_entry(entry, default_description) {
            Ok(project) => extraction.projects.push(project),
            Err(missing) => extraction.skipped.push(Skipped { index, missing }),
        }
    }
    extraction
}

fn extract_entry(entry: ElementRef, default_description: &str) -> Result<Project, MissingField> {
    let title = entry.select(&TITLE).next().ok_or(MissingField::Heading)?;
    let link = title.select(&LINK).next().ok_or(MissingField::Link)?;

    let path = link.value().attr("href").ok_or(MissingField::Href)?.trim();
    let name = text_of(link);
    if name.is_empty() {
        return Err(MissingField::Name);
    }

    let description = entry
        .select(&DESCRIPTION)
        .next()
        .map(text_of)
        .unwrap_or_else(|| default_description.to_string());

    Ok(Project {
        name,
        description,
        link: format!("{}{}", GITHUB_HOST, path),
    })
}

fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
