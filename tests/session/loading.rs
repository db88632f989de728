//! Index lifecycle as a page sees it: load once, fail quietly.

use crate::common::{book_fixture, book_tree};
use navsieve::{DirSource, IndexStatus, KeyEvent, Session, SiteConfig};

#[test]
fn keystrokes_before_load_hide_everything() {
    let mut session = Session::new(book_tree(), SiteConfig::default());
    session.begin_load();
    let patch = session.handle_key(&KeyEvent::typed("glossary"));
    assert_eq!(patch.searched, Some(true));
    assert_eq!(session.tree().visible().count(), 0);

    assert!(session.finish_load(&book_fixture().to_json()));
    session.handle_key(&KeyEvent::typed("glossary"));
    assert_eq!(session.tree().visible().count(), 2);
}

#[test]
fn failed_load_degrades_to_no_matches() {
    let mut session = Session::new(book_tree(), SiteConfig::default());
    session.begin_load();
    session.fail_load("network error");
    assert_eq!(session.handle().status(), IndexStatus::Failed);

    session.handle_key(&KeyEvent::typed("glossary"));
    assert_eq!(session.tree().visible().count(), 0);
    assert!(session.tree().is_searched());

    // clearing still restores the full tree
    session.handle_key(&KeyEvent::typed(""));
    assert_eq!(session.tree().visible().count(), session.tree().len());
}

#[test]
fn wrong_version_is_a_failed_load() {
    let session = Session::new(book_tree(), SiteConfig::default());
    assert!(!session.finish_load(br#"{"version": 2, "docs": [], "terms": {}}"#));
    assert_eq!(session.handle().status(), IndexStatus::Failed);
    assert!(session
        .handle()
        .failure()
        .is_some_and(|reason| reason.contains("version")));
}

#[test]
fn load_from_site_directory() {
    let site = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(site.path().join("book")).unwrap();
    std::fs::write(
        site.path().join("book/search_index.json"),
        book_fixture().to_json(),
    )
    .unwrap();

    let mut session = Session::new(book_tree(), SiteConfig::default().with_base_path("/book/"));
    assert_eq!(session.index_url(), "/book/search_index.json");
    assert!(session.load_from(&DirSource::new(site.path())));

    session.handle_key(&KeyEvent::typed("themes"));
    assert!(session
        .tree()
        .find("guide/advanced/themes.html")
        .is_some_and(|id| session.tree().is_visible(id)));
}

#[test]
fn missing_artifact_is_swallowed() {
    let site = tempfile::tempdir().unwrap();
    let session = Session::new(book_tree(), SiteConfig::default());
    assert!(!session.load_from(&DirSource::new(site.path())));
    assert_eq!(session.handle().status(), IndexStatus::Failed);
    assert!(!session.load_from(&DirSource::new(site.path())));
}

#[test]
fn artifact_with_unfolded_terms_still_loads() {
    let artifact = r#"{
        "version": 1,
        "docs": [
            {"ref": "guide/install.html", "title": "Installing"},
            {"ref": "reference/cli.html", "title": "CLI"}
        ],
        "terms": {
            "install": [{"doc": 0, "field": "title"}],
            "Rust": [{"doc": 1, "field": "content"}]
        }
    }"#;
    let mut session = Session::new(book_tree(), SiteConfig::default());
    assert!(session.finish_load(artifact.as_bytes()));
    assert_eq!(session.handle().status(), IndexStatus::Ready);

    session.handle_key(&KeyEvent::typed("install"));
    let install = session.tree().find("guide/install.html").unwrap();
    assert!(session.tree().is_visible(install));

    session.handle_key(&KeyEvent::typed("rust"));
    let cli = session.tree().find("reference/cli.html").unwrap();
    assert!(session.tree().is_visible(cli));
    assert!(!session.tree().is_visible(install));
}
