//! Key-up sequences and the patches they produce.

use crate::common::{book_session, node, visible_names};
use navsieve::{InputState, KeyEvent};

#[test]
fn typing_narrows_the_tree() {
    let mut session = book_session();
    let patch = session.handle_key(&KeyEvent::typed("glossary"));
    assert_eq!(patch.searched, Some(true));
    assert!(!patch.clear_input && !patch.blur_input && !patch.prevent_default);
    assert_eq!(
        visible_names(session.tree()),
        vec!["Reference", "reference/glossary.html"]
    );
    assert_eq!(
        session.state(),
        &InputState::Active {
            query: "glossary".to_string()
        }
    );
}

#[test]
fn backspacing_to_empty_restores_without_clearing() {
    let mut session = book_session();
    session.handle_key(&KeyEvent::typed("t"));
    let patch = session.handle_key(&KeyEvent::typed(""));
    assert_eq!(patch.searched, Some(false));
    assert!(!patch.clear_input);
    assert!(!patch.blur_input);
    assert_eq!(session.tree().visible().count(), session.tree().len());
    assert_eq!(session.state(), &InputState::Idle);
}

#[test]
fn cancel_while_active_restores_everything() {
    let mut session = book_session();
    session.handle_key(&KeyEvent::typed("plugins"));
    let patch = session.handle_key(&KeyEvent::new(27, "plugins"));

    assert_eq!(session.state(), &InputState::Idle);
    assert!(patch.clear_input);
    assert!(patch.blur_input);
    assert!(patch.prevent_default);
    assert_eq!(patch.searched, Some(false));
    assert!(patch.visibility.iter().all(|c| c.visible));
    assert_eq!(session.tree().visible().count(), session.tree().len());
    assert!(!session.tree().is_searched());
}

#[test]
fn cancel_while_idle_is_harmless() {
    let mut session = book_session();
    let patch = session.handle_key(&KeyEvent::cancel(""));
    assert!(patch.visibility.is_empty());
    assert!(patch.clear_input);
    assert_eq!(patch.searched, Some(false));
}

#[test]
fn each_keystroke_supersedes_the_last() {
    let mut session = book_session();
    session.handle_key(&KeyEvent::typed("plugins"));
    let patch = session.handle_key(&KeyEvent::typed("themes"));

    let tree = session.tree();
    let plugins = node(tree, "guide/advanced/plugins.html");
    let themes = node(tree, "guide/advanced/themes.html");
    let flipped: Vec<_> = patch.visibility.iter().map(|c| (c.id, c.visible)).collect();
    assert_eq!(flipped, vec![(plugins, false), (themes, true)]);
}

#[test]
fn navigation_keys_rerun_with_same_value() {
    let mut session = book_session();
    session.handle_key(&KeyEvent::typed("serve"));
    let patch = session.handle_key(&KeyEvent::new(40, "serve"));
    assert!(patch.visibility.is_empty());
    assert_eq!(patch.searched, Some(true));
    assert!(session.state().is_active());
}
