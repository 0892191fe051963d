use crate::input::KeyAction;

/// Which screen the game loop is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Playing,
    Paused,
    GameOver,
    /// Terminal state: the loop stops and the terminal is restored
    Exit,
}

impl Screen {
    /// Screen to show after a key press. Heading changes do not change the
    /// screen; the caller applies them while `Playing`.
    pub fn next(self, action: KeyAction) -> Screen {
        match (self, action) {
            (Screen::Exit, _) => Screen::Exit,
            (_, KeyAction::Cancel) => Screen::Exit,

            (Screen::Intro, KeyAction::Confirm) => Screen::Playing,
            (Screen::Playing, KeyAction::Pause) => Screen::Paused,
            (Screen::Paused, KeyAction::Confirm) => Screen::Playing,
            (Screen::GameOver, KeyAction::Confirm) => Screen::Playing,

            (screen, _) => screen,
        }
    }

    /// Whether the world advances on ticks while this screen is up
    pub fn is_running(&self) -> bool {
        matches!(self, Screen::Playing)
    }
}
