//! # Locale Selector
//!
//! A single-question form: pick one of the supported locales. The controller
//! relays input to it and only ever asks whether a value has been submitted.
//! Drawing lives in `tui::components::locale_picker`.

use crate::core::action::Input;
use crate::core::locale::Locale;

pub const SELECTOR_TITLE: &str = "Choose your language / Wybierz język...";

/// What the controller should do after the selector consumed an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEffect {
    None,
    Redraw,
    Submitted(Locale),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSelector {
    cursor: usize,
    ready: bool,
    submitted: Option<Locale>,
}

impl Default for LocaleSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleSelector {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            ready: false,
            submitted: None,
        }
    }

    /// Marks the form as ready to draw and to take input. Idempotent.
    pub fn init(&mut self) -> SelectorEffect {
        if self.ready {
            return SelectorEffect::None;
        }
        self.ready = true;
        SelectorEffect::Redraw
    }

    /// Input before `init` is dropped: the form is not on screen yet.
    pub fn update(&mut self, input: Input) -> SelectorEffect {
        if !self.ready || self.submitted.is_some() {
            return SelectorEffect::None;
        }
        match input {
            Input::Up => {
                if self.cursor == 0 {
                    return SelectorEffect::None;
                }
                self.cursor -= 1;
                SelectorEffect::Redraw
            }
            Input::Down => {
                if self.cursor + 1 >= self.options().len() {
                    return SelectorEffect::None;
                }
                self.cursor += 1;
                SelectorEffect::Redraw
            }
            Input::Enter => {
                let locale = self.highlighted();
                self.submitted = Some(locale);
                SelectorEffect::Submitted(locale)
            }
            Input::Space => SelectorEffect::None,
        }
    }

    /// The chosen locale once the form is complete. Never changes afterwards.
    pub fn submitted_value(&self) -> Option<Locale> {
        self.submitted
    }

    pub fn options(&self) -> &'static [Locale] {
        &Locale::ALL
    }

    pub fn highlighted(&self) -> Locale {
        self.options()[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}
