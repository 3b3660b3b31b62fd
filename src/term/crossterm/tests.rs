use super::*;
use crossterm::event::KeyEventKind;

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: crossterm::event::KeyEventState::NONE,
    }
}

#[test]
fn plain_char_passes_through() {
    let k = translate_key_event(key_event(KeyCode::Char('x'), KeyModifiers::NONE));
    assert_eq!(k, Key::Char('x'));
}

#[test]
fn carriage_return_and_newline_both_become_enter() {
    assert_eq!(
        translate_key_event(key_event(KeyCode::Char('\r'), KeyModifiers::NONE)),
        Key::Enter
    );
    assert_eq!(
        translate_key_event(key_event(KeyCode::Char('\n'), KeyModifiers::NONE)),
        Key::Enter
    );
}

#[test]
fn ctrl_c_maps_to_quit_char() {
    let k = translate_key_event(key_event(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(k, Key::Char('q'));
}

#[test]
fn arrow_keys_map_directly() {
    assert_eq!(
        translate_key_event(key_event(KeyCode::Up, KeyModifiers::NONE)),
        Key::ArrowUp
    );
    assert_eq!(
        translate_key_event(key_event(KeyCode::Down, KeyModifiers::NONE)),
        Key::ArrowDown
    );
    assert_eq!(
        translate_key_event(key_event(KeyCode::Left, KeyModifiers::NONE)),
        Key::ArrowLeft
    );
    assert_eq!(
        translate_key_event(key_event(KeyCode::Right, KeyModifiers::NONE)),
        Key::ArrowRight
    );
}

#[test]
fn navigation_and_editing_keys_map_directly() {
    assert_eq!(
        translate_key_event(key_event(KeyCode::Home, KeyModifiers::NONE)),
        Key::Home
    );
    assert_eq!(
        translate_key_event(key_event(KeyCode::End, KeyModifiers::NONE)),
        Key::End
    );
    assert_eq!(
        translate_key_event(key_event(KeyCode::PageUp, KeyModifiers::NONE)),
        Key::PageUp
    );
    assert_eq!(
        translate_key_event(key_event(KeyCode::PageDown, KeyModifiers::NONE)),
        Key::PageDown
    );
    assert_eq!(
        translate_key_event(key_event(KeyCode::Delete, KeyModifiers::NONE)),
        Key::Delete
    );
    assert_eq!(
        translate_key_event(key_event(KeyCode::Backspace, KeyModifiers::NONE)),
        Key::Backspace
    );
    assert_eq!(
        translate_key_event(key_event(KeyCode::Esc, KeyModifiers::NONE)),
        Key::Escape
    );
}

#[test]
fn unhandled_key_codes_become_nul_char() {
    let k = translate_key_event(key_event(KeyCode::F(5), KeyModifiers::NONE));
    assert_eq!(k, Key::Char('\0'));
}
