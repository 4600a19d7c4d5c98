use crate::config::NAV_SCROLL_THRESHOLD;

/// Anchor-addressable sections of the page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section root.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

/// Navigation bar state: the scrolled style flag and the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    threshold: f64,
    scrolled: bool,
    menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(NAV_SCROLL_THRESHOLD)
    }
}

impl NavState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
            menu_open: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Recomputed on every scroll event; returns the new flag.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        self.scrolled = offset_y > self.threshold;
        self.scrolled
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A link in the mobile menu was followed.
    pub fn on_navigate(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_flag() {
        let mut nav = NavState::default();
        assert!(!nav.is_scrolled());
        assert!(!nav.on_scroll(0.0));
        assert!(!nav.on_scroll(50.0));
        assert!(nav.on_scroll(51.0));
        assert!(nav.is_scrolled());
        assert!(!nav.on_scroll(0.0));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_menu_toggle() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.toggle_menu();
        assert!(!nav.is_menu_open());

        nav.toggle_menu();
        nav.on_navigate();
        assert!(!nav.is_menu_open());
        // scrolling leaves the menu alone
        nav.toggle_menu();
        nav.on_scroll(300.0);
        assert!(nav.is_menu_open());
    }

    #[test]
    fn test_sections() {
        let anchors = Section::ALL.map(Section::anchor);
        assert_eq!(anchors, ["home", "about", "skills", "projects", "contact"]);
        assert_eq!(Section::Projects.href(), "#projects");
        assert_eq!(Section::Contact.label(), "Contact");
    }
}
