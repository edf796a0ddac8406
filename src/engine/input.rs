use crate::util::{boxed_err, BoxedError};
use smallvec::SmallVec;

/// The keys the labs bind. Anything else is dropped by the windowing layer before it gets here.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    H,
    J,
    K,
    L,
    Q,
    P,
    Escape,
}

impl Key {
    /// Parse a key from its (case-insensitive) letter. `Escape` is spelled `'\u{1b}'`.
    pub fn from_char(c: char) -> Option<Key> {
        Some(match c.to_ascii_lowercase() {
            'w' => Key::W,
            'a' => Key::A,
            's' => Key::S,
            'd' => Key::D,
            'h' => Key::H,
            'j' => Key::J,
            'k' => Key::K,
            'l' => Key::L,
            'q' => Key::Q,
            'p' => Key::P,
            '\u{1b}' => Key::Escape,
            _ => return None,
        })
    }

    /// Parse a string of key letters, failing on the first character with no binding.
    pub fn parse_script(script: &str) -> Result<Vec<Key>, BoxedError> {
        script
            .chars()
            .map(|c| match Key::from_char(c) {
                Some(key) => Ok(key),
                None => boxed_err(format!("No binding for key {:?}", c)),
            })
            .collect()
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KeyState {
    Pressed,
    Repeated,
    Released,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Key { key: Key, state: KeyState },
    /// The framebuffer was resized, in pixels.
    Resized { width: u32, height: u32 },
    CloseRequested,
}

impl InputEvent {
    #[inline]
    pub fn pressed(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

/// What a key press does to the render context.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    MoveCamera(Direction),
    /// Nudge the model by this many steps along x and y.
    TranslateModel { x: i8, y: i8 },
    ToggleProjection,
    ToggleAnimation,
    Close,
}

impl Action {
    /// The fixed key bindings: WASD fly the camera, HJKL push the model around (vi-style),
    /// Q flips the projection and P starts/stops the spin.
    pub fn for_key(key: Key) -> Action {
        match key {
            Key::W => Action::MoveCamera(Direction::Forward),
            Key::S => Action::MoveCamera(Direction::Backward),
            Key::A => Action::MoveCamera(Direction::Left),
            Key::D => Action::MoveCamera(Direction::Right),
            Key::H => Action::TranslateModel { x: -1, y: 0 },
            Key::L => Action::TranslateModel { x: 1, y: 0 },
            Key::J => Action::TranslateModel { x: 0, y: -1 },
            Key::K => Action::TranslateModel { x: 0, y: 1 },
            Key::Q => Action::ToggleProjection,
            Key::P => Action::ToggleAnimation,
            Key::Escape => Action::Close,
        }
    }
}

/// Events collected while polling the window, drained once per frame.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: SmallVec<[InputEvent; 16]>,
}

impl InputQueue {
    #[inline]
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take every queued event, oldest first.
    #[inline]
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}
