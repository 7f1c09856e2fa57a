/// One trending repository as listed on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub link: String,
}

/// Node an entry container was missing when it got dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Heading,
    Link,
    Href,
    Name,
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MissingField::Heading => "title tag",
            MissingField::Link => "link tag",
            MissingField::Href => "link href",
            MissingField::Name => "project name",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skipped {
    /// Position of the entry container in document order.
    pub index: usize,
    pub missing: MissingField,
}
