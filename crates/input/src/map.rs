//! Key mapping from terminal key events to engine actions.
//!
//! Each game instance gets its own [`KeyBindings`], so two games in one
//! process can be driven from one keyboard with disjoint keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Action;

/// Key binding construction failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("{first} and {second} are both bound to {key:?}")]
    Duplicate {
        first: Action,
        second: Action,
        key: KeyCode,
    },
}

/// One key per engine action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBindings {
    left: KeyCode,
    right: KeyCode,
    down: KeyCode,
    rotate: KeyCode,
}

impl KeyBindings {
    /// Build a binding table; every action needs its own key.
    ///
    /// Letters are matched case-insensitively, so `'a'` and `'A'` count as
    /// the same key.
    pub fn new(
        left: KeyCode,
        right: KeyCode,
        down: KeyCode,
        rotate: KeyCode,
    ) -> Result<Self, BindingError> {
        let keys = [
            (Action::MoveLeft, normalize(left)),
            (Action::MoveRight, normalize(right)),
            (Action::MoveDown, normalize(down)),
            (Action::Rotate, normalize(rotate)),
        ];
        for (i, &(first, key)) in keys.iter().enumerate() {
            if let Some(&(second, _)) = keys[i + 1..].iter().find(|(_, k)| *k == key) {
                return Err(BindingError::Duplicate { first, second, key });
            }
        }
        Ok(Self {
            left: keys[0].1,
            right: keys[1].1,
            down: keys[2].1,
            rotate: keys[3].1,
        })
    }

    /// Arrow keys: Left, Right, Down, Up (rotate)
    pub fn arrows() -> Self {
        Self {
            left: KeyCode::Left,
            right: KeyCode::Right,
            down: KeyCode::Down,
            rotate: KeyCode::Up,
        }
    }

    /// Letter keys: a, d, s, w (rotate)
    pub fn wasd() -> Self {
        Self {
            left: KeyCode::Char('a'),
            right: KeyCode::Char('d'),
            down: KeyCode::Char('s'),
            rotate: KeyCode::Char('w'),
        }
    }

    /// Key bound to an action
    pub fn key_for(&self, action: Action) -> KeyCode {
        match action {
            Action::MoveLeft => self.left,
            Action::MoveRight => self.right,
            Action::MoveDown => self.down,
            Action::Rotate => self.rotate,
        }
    }

    /// Map a key event to an action.
    ///
    /// Only the press edge counts; repeats and releases map to nothing.
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let code = normalize(key.code);
        Action::ALL
            .into_iter()
            .find(|&action| self.key_for(action) == code)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::arrows()
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_default_arrow_keys() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.action_for(KeyEvent::from(KeyCode::Left)),
            Some(Action::MoveLeft)
        );
        assert_eq!(
            keys.action_for(KeyEvent::from(KeyCode::Right)),
            Some(Action::MoveRight)
        );
        assert_eq!(
            keys.action_for(KeyEvent::from(KeyCode::Down)),
            Some(Action::MoveDown)
        );
        assert_eq!(
            keys.action_for(KeyEvent::from(KeyCode::Up)),
            Some(Action::Rotate)
        );
        assert_eq!(keys.action_for(KeyEvent::from(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_only_press_edges_map() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.action_for(event(KeyCode::Left, KeyEventKind::Repeat)),
            None
        );
        assert_eq!(
            keys.action_for(event(KeyCode::Left, KeyEventKind::Release)),
            None
        );
    }

    #[test]
    fn test_letters_ignore_case() {
        let keys = KeyBindings::wasd();
        assert_eq!(
            keys.action_for(KeyEvent::from(KeyCode::Char('W'))),
            Some(Action::Rotate)
        );
        assert_eq!(
            keys.action_for(KeyEvent::from(KeyCode::Char('a'))),
            Some(Action::MoveLeft)
        );
        assert_eq!(keys.action_for(KeyEvent::from(KeyCode::Left)), None);
    }

    #[test]
    fn test_custom_bindings() {
        let keys = KeyBindings::new(
            KeyCode::Char('J'),
            KeyCode::Char('l'),
            KeyCode::Char('k'),
            KeyCode::Char('i'),
        )
        .unwrap();
        assert_eq!(keys.key_for(Action::MoveLeft), KeyCode::Char('j'));
        assert_eq!(
            keys.action_for(KeyEvent::from(KeyCode::Char('j'))),
            Some(Action::MoveLeft)
        );
    }

    #[test]
    fn test_duplicate_binding_rejected() {
        let err = KeyBindings::new(KeyCode::Left, KeyCode::Right, KeyCode::Char('x'), KeyCode::Char('X'))
            .unwrap_err();
        assert_eq!(
            err,
            BindingError::Duplicate {
                first: Action::MoveDown,
                second: Action::Rotate,
                key: KeyCode::Char('x'),
            }
        );
        assert!(err.to_string().contains("moveDown and rotate"));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
