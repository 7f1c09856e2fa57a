use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::repo::Project;
use crate::{Error, Result};

const PLACEHOLDER: &str = "{project_entries}";

const TEMPLATE: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>GitHub Trending Projects</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 0;
            background-color: #f5f5f5;
        }
        .container {
            max-width: 800px;
            margin: 20px auto;
            padding: 20px;
            background-color: #ffffff;
            border-radius: 8px;
            box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
        }
        h1 {
            text-align: center;
            color: #333333;
        }
        .project {
            margin-bottom: 15px;
            padding: 10px;
            border-bottom: 1px solid #dddddd;
        }
        .project:last-child {
            border-bottom: none;
        }
        .project-name {
            font-size: 18px;
            font-weight: bold;
        }
        .project-description {
            margin: 5px 0;
            color: #666666;
        }
        .project-link {
            color: #007bff;
            text-decoration: none;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>GitHub Trending Projects</h1>
        {project_entries}
    </div>
    <script>
        // JavaScript for interactive features can be added here
    </script>
</body>
</html>
"#;

/// Render the report page with one `.project` block per entry, in order.
///
/// With `escape` off, names, links and descriptions go in verbatim.
pub fn render(projects: &[Project], escape: bool) -> String {
    let text = |s: &str| -> String {
        if escape {
            escape_html(s).into_owned()
        } else {
            s.to_string()
        }
    };

    let mut entries = String::new();
    for project in projects {
        entries.push_str(&format!(
            r#"
        <div class="project">
            <div class="project-name">
                <a href="{}" class="project-link" target="_blank">{}</a>
            </div>
            <div class="project-description">{}</div>
        </div>
        "#,
            text(&project.link),
            text(&project.name),
            text(&project.description),
        ));
    }

    TEMPLATE.replacen(PLACEHOLDER, &entries, 1)
}

pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Replace the file at `path` with `contents`.
pub fn write(path: &Path, contents: &str) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    out.write_all(contents.as_bytes()).map_err(io_err)?;
    out.flush().map_err(io_err)?;
    Ok(())
}
