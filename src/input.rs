/// Logical navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Forward,
    Back,
    Left,
    Right,
    Ascend,
}

impl NavKey {
    pub const ALL: [NavKey; 5] = [
        NavKey::Forward,
        NavKey::Back,
        NavKey::Left,
        NavKey::Right,
        NavKey::Ascend,
    ];

    const fn index(self) -> usize {
        match self {
            NavKey::Forward => 0,
            NavKey::Back => 1,
            NavKey::Left => 2,
            NavKey::Right => 3,
            NavKey::Ascend => 4,
        }
    }

    /// Parses the short names used on the command line: `w`, `forward`, `space`, ...
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "w" | "forward" => Some(NavKey::Forward),
            "s" | "back" => Some(NavKey::Back),
            "a" | "left" => Some(NavKey::Left),
            "d" | "right" => Some(NavKey::Right),
            "space" | "up" | "ascend" => Some(NavKey::Ascend),
            _ => None,
        }
    }
}

/// Controller - read-only view of which keys are held
pub trait Controller {
    fn is_down(&self, key: NavKey) -> bool;
}

/// Held flags, set and cleared by key-down/key-up edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; 5],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding(keys: &[NavKey]) -> Self {
        let mut state = Self::new();
        for &key in keys {
            state.set(key, true);
        }
        state
    }

    pub fn set(&mut self, key: NavKey, down: bool) {
        self.held[key.index()] = down;
    }

    pub fn release_all(&mut self) {
        self.held = [false; 5];
    }

    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&h| h)
    }
}

impl Controller for InputState {
    fn is_down(&self, key: NavKey) -> bool {
        self.held[key.index()]
    }
}
