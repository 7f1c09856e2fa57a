use std::fs;
use std::io;

use trending_report::{Config, Error, Fetch, Result, Status, TrendingReport};
use url::Url;

const TWO_ENTRIES: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div class="Box">
    <article class="Box-row">
      <h1 class="h3 lh-condensed">
        <a href="/octocat/Hello-World" data-view-component="true" class="Link">
          <span class="text-normal">octocat /</span>
          Hello-World
        </a>
      </h1>
      <p class="col-9 color-fg-muted my-1 pr-4">
        My first repository on GitHub!
      </p>
    </article>
    <article class="Box-row">
      <h1 class="h3 lh-condensed">
        <a href="/rust-lang/rust">rust-lang / rust</a>
      </h1>
    </article>
  </div>
</body>
</html>
"#;

struct Page(&'static str);

impl Fetch for Page {
    fn fetch(&self, _url: &Url) -> Result<Vec<u8>> {
        Ok(self.0.as_bytes().to_vec())
    }
}

struct Unreachable;

impl Fetch for Unreachable {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        Err(Error::network(
            url.as_str(),
            io::Error::new(io::ErrorKind::ConnectionReset, "connection reset by peer"),
        ))
    }
}

fn config_in(dir: &tempfile::TempDir) -> Config {
    Config {
        output_path: dir.path().join("report.html"),
        ..Config::default()
    }
}

#[test]
fn two_entries_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let page = Page(TWO_ENTRIES);
    let report = TrendingReport::with_fetcher(config_in(&dir), page);

    let status = report.run().unwrap();
    let path = dir.path().join("report.html");
    assert_eq!(
        status,
        Status::Written {
            path: path.clone(),
            count: 2
        }
    );

    let html = fs::read_to_string(&path).unwrap();
    assert_eq!(html.matches(r#"<div class="project">"#).count(), 2);

    let first = html.find("https://github.com/octocat/Hello-World").unwrap();
    let second = html.find("https://github.com/rust-lang/rust").unwrap();
    assert!(first < second);

    let first_desc = html.find("My first repository on GitHub!").unwrap();
    let default_desc = html.find("No description provided").unwrap();
    assert!(first < first_desc && first_desc < second);
    assert!(second < default_desc);
}

#[test]
fn same_page_same_report() {
    let dir = tempfile::tempdir().unwrap();
    let page = Page(TWO_ENTRIES);
    let report = TrendingReport::with_fetcher(config_in(&dir), page);
    report.run().unwrap();

    let dir2 = tempfile::tempdir().unwrap();
    let page = Page(TWO_ENTRIES);
    let report2 = TrendingReport::with_fetcher(config_in(&dir2), page);
    report2.run().unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("report.html")).unwrap(),
        fs::read_to_string(dir2.path().join("report.html")).unwrap(),
    );
}

#[test]
fn overwrites_previous_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");
    fs::write(&path, "stale").unwrap();

    TrendingReport::with_fetcher(config_in(&dir), Page(TWO_ENTRIES))
        .run()
        .unwrap();
    assert!(fs::read_to_string(&path).unwrap().starts_with("\n<!DOCTYPE html>"));
}

#[test]
fn failed_fetch_leaves_output_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");
    fs::write(&path, "previous run").unwrap();

    let report = TrendingReport::with_fetcher(config_in(&dir), Unreachable);
    let err = report.run().unwrap_err();

    let message = format!("{:#}", anyhow::Error::from(err));
    assert!(message.contains("failed to fetch"));
    assert!(message.contains("connection reset by peer"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous run");
}

#[test]
fn no_matching_entries_leaves_output_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");
    fs::write(&path, "previous run").unwrap();

    let page = Page(r#"<html><body><article class="Other">nothing</article></body></html>"#);
    let report = TrendingReport::with_fetcher(config_in(&dir), page);

    assert_eq!(report.run().unwrap(), Status::NoEntries);
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous run");
}

#[test]
fn unwritable_output_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        output_path: dir.path().join("no-such-dir").join("report.html"),
        ..Config::default()
    };

    let err = TrendingReport::with_fetcher(config, Page(TWO_ENTRIES))
        .run()
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
