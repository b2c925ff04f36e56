//! View switching: main catalog vs. "coming soon" page, plus the level and
//! contribute overlays. One owner, mutated only through the methods below.

use crate::department::Department;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Main,
    Placeholder { department: String },
}

/// Side effects the DOM layer applies after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Page switched; reset window scroll to the top.
    ScrollToTop,
    /// Page switched to the placeholder; reset scroll and focus its back control.
    ScrollToTopAndFocusBack,
    /// Level modal opened; focus its dismiss control after a short delay.
    FocusLevelClose,
    None,
}

/// What a cancel key press closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissed {
    LevelModal,
    ContributeModal,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Navigation {
    page: Page,
    level_modal: Option<String>,
    /// Outlives `level_modal` so the overlay keeps its content while closing.
    last_level_modal: Option<String>,
    contribute_open: bool,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn on_placeholder(&self) -> bool {
        matches!(self.page, Page::Placeholder { .. })
    }

    /// Name of the department shown on the placeholder page.
    pub fn placeholder_department(&self) -> Option<&str> {
        match &self.page {
            Page::Placeholder { department } => Some(department.as_str()),
            Page::Main => None,
        }
    }

    /// Name of the department whose level modal is open.
    pub fn level_modal(&self) -> Option<&str> {
        self.level_modal.as_deref()
    }

    /// Department most recently shown in the level modal, open or not.
    pub fn last_level_modal(&self) -> Option<&str> {
        self.last_level_modal.as_deref()
    }

    pub fn contribute_open(&self) -> bool {
        self.contribute_open
    }

    /// Page scroll is suspended while any overlay is open.
    pub fn scroll_locked(&self) -> bool {
        self.level_modal.is_some() || self.contribute_open
    }

    /// Card click. Non-live departments always go to the placeholder page,
    /// whatever their levels say.
    pub fn activate(&mut self, department: &Department) -> NavEffect {
        if department.live {
            self.level_modal = Some(department.name.clone());
            self.last_level_modal = Some(department.name.clone());
            NavEffect::FocusLevelClose
        } else {
            self.page = Page::Placeholder {
                department: department.name.clone(),
            };
            NavEffect::ScrollToTopAndFocusBack
        }
    }

    pub fn back(&mut self) -> NavEffect {
        self.page = Page::Main;
        NavEffect::ScrollToTop
    }

    pub fn close_level_modal(&mut self) {
        self.level_modal = None;
    }

    pub fn open_contribute(&mut self) {
        self.contribute_open = true;
    }

    pub fn close_contribute(&mut self) {
        self.contribute_open = false;
    }

    /// Cancel key. Closes the topmost thing: level modal, then contribute
    /// modal, then the placeholder page.
    pub fn cancel(&mut self) -> Option<(Dismissed, NavEffect)> {
        if self.level_modal.is_some() {
            self.close_level_modal();
            return Some((Dismissed::LevelModal, NavEffect::None));
        }
        if self.contribute_open {
            self.close_contribute();
            return Some((Dismissed::ContributeModal, NavEffect::None));
        }
        if self.on_placeholder() {
            return Some((Dismissed::Placeholder, self.back()));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::department::{Level, LevelId};

    fn dept(name: &str, live: bool) -> Department {
        Department {
            name: name.into(),
            faculty: "Science".into(),
            icon: String::new(),
            color: String::new(),
            live,
            levels: Vec::new(),
        }
    }

    #[test]
    fn starts_on_main_with_everything_closed() {
        let nav = Navigation::new();
        assert_eq!(nav.page(), &Page::Main);
        assert!(nav.level_modal().is_none());
        assert!(!nav.contribute_open());
        assert!(!nav.scroll_locked());
    }

    #[test]
    fn non_live_card_opens_placeholder_and_cancel_returns() {
        let mut nav = Navigation::new();
        let effect = nav.activate(&dept("Agronomy", false));
        assert_eq!(effect, NavEffect::ScrollToTopAndFocusBack);
        assert_eq!(nav.placeholder_department(), Some("Agronomy"));
        assert!(!nav.scroll_locked());

        assert_eq!(
            nav.cancel(),
            Some((Dismissed::Placeholder, NavEffect::ScrollToTop))
        );
        assert_eq!(nav.page(), &Page::Main);
        assert_eq!(nav.cancel(), None);
    }

    #[test]
    fn non_live_ignores_published_levels() {
        let mut d = dept("Agronomy", false);
        d.levels.push(Level {
            level: LevelId::new("100"),
            url: Some("https://drive.example/agr-100".into()),
        });
        let mut nav = Navigation::new();
        nav.activate(&d);
        assert!(nav.on_placeholder());
        assert!(nav.level_modal().is_none());
    }

    #[test]
    fn live_card_opens_level_modal_and_locks_scroll() {
        let mut nav = Navigation::new();
        assert_eq!(nav.activate(&dept("Zoology", true)), NavEffect::FocusLevelClose);
        assert_eq!(nav.level_modal(), Some("Zoology"));
        assert!(nav.scroll_locked());

        nav.close_level_modal();
        assert!(nav.level_modal().is_none());
        assert!(!nav.scroll_locked());
    }

    #[test]
    fn closed_level_modal_remembers_its_department() {
        let mut nav = Navigation::new();
        assert!(nav.last_level_modal().is_none());

        nav.activate(&dept("Zoology", true));
        nav.close_level_modal();
        assert!(nav.level_modal().is_none());
        assert_eq!(nav.last_level_modal(), Some("Zoology"));

        nav.activate(&dept("Agronomy", false));
        assert_eq!(nav.last_level_modal(), Some("Zoology"));

        nav.activate(&dept("Botany", true));
        assert_eq!(nav.last_level_modal(), Some("Botany"));
        assert_eq!(nav.cancel(), Some((Dismissed::LevelModal, NavEffect::None)));
        assert_eq!(nav.last_level_modal(), Some("Botany"));
    }

    #[test]
    fn cancel_closes_level_modal_before_placeholder() {
        let mut nav = Navigation::new();
        nav.activate(&dept("Agronomy", false));
        nav.activate(&dept("Zoology", true));

        assert_eq!(nav.cancel(), Some((Dismissed::LevelModal, NavEffect::None)));
        assert!(nav.on_placeholder());
        assert_eq!(
            nav.cancel().map(|(d, _)| d),
            Some(Dismissed::Placeholder)
        );
    }

    #[test]
    fn cancel_precedence_includes_contribute_modal() {
        let mut nav = Navigation::new();
        nav.activate(&dept("Agronomy", false));
        nav.open_contribute();
        nav.activate(&dept("Zoology", true));

        let order: Vec<Dismissed> = std::iter::from_fn(|| nav.cancel().map(|(d, _)| d)).collect();
        assert_eq!(
            order,
            vec![
                Dismissed::LevelModal,
                Dismissed::ContributeModal,
                Dismissed::Placeholder
            ]
        );
        assert_eq!(nav.page(), &Page::Main);
        assert!(nav.level_modal().is_none());
        assert!(!nav.contribute_open());
        assert!(!nav.scroll_locked());
    }

    #[test]
    fn contribute_modal_locks_scroll_independently() {
        let mut nav = Navigation::new();
        nav.open_contribute();
        assert!(nav.scroll_locked());
        nav.close_contribute();
        assert!(!nav.scroll_locked());
    }

    #[test]
    fn back_always_resets_to_main() {
        let mut nav = Navigation::new();
        assert_eq!(nav.back(), NavEffect::ScrollToTop);
        assert_eq!(nav.page(), &Page::Main);
    }
}
