use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SiteConfig;

const PORTFOLIO_FILE: &str = "portfolio.json";

/// Parsed once per process (or per page load in the browser).
pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| match load_portfolio() {
    Ok(p) => p,
    Err(e) => {
        log::error!("Falling back to empty portfolio: {e}");
        Portfolio::default()
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content file: {0}")]
    ParseError(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Short wordmark used by the navigation bar and footer.
    pub brand: String,
    pub role: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub portrait: Image,
}

/// Theme color of a card or link. Each accessor yields a complete class name
/// so the stylesheet build can find it in the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    #[default]
    NeonBlue,
    NeonPurple,
    NeonViolet,
}

impl Accent {
    pub fn text(self) -> &'static str {
        match self {
            Accent::NeonBlue => "text-neon-blue",
            Accent::NeonPurple => "text-neon-purple",
            Accent::NeonViolet => "text-neon-violet",
        }
    }

    pub fn hover_text(self) -> &'static str {
        match self {
            Accent::NeonBlue => "hover:text-neon-blue",
            Accent::NeonPurple => "hover:text-neon-purple",
            Accent::NeonViolet => "hover:text-neon-violet",
        }
    }

    /// Faint background behind an icon.
    pub fn tint(self) -> &'static str {
        match self {
            Accent::NeonBlue => "bg-neon-blue/10",
            Accent::NeonPurple => "bg-neon-purple/10",
            Accent::NeonViolet => "bg-neon-violet/10",
        }
    }

    /// Stronger tint while the enclosing `group` is hovered.
    pub fn group_hover_tint(self) -> &'static str {
        match self {
            Accent::NeonBlue => "group-hover:bg-neon-blue/20",
            Accent::NeonPurple => "group-hover:bg-neon-purple/20",
            Accent::NeonViolet => "group-hover:bg-neon-violet/20",
        }
    }

    pub fn dot(self) -> &'static str {
        match self {
            Accent::NeonBlue => "bg-neon-blue/40",
            Accent::NeonPurple => "bg-neon-purple/40",
            Accent::NeonViolet => "bg-neon-violet/40",
        }
    }

    pub fn gradient_from(self) -> &'static str {
        match self {
            Accent::NeonBlue => "from-neon-blue",
            Accent::NeonPurple => "from-neon-purple",
            Accent::NeonViolet => "from-neon-violet",
        }
    }

    pub fn gradient_to(self) -> &'static str {
        match self {
            Accent::NeonBlue => "to-neon-blue",
            Accent::NeonPurple => "to-neon-purple",
            Accent::NeonViolet => "to-neon-violet",
        }
    }
}

/// Pictogram shown on highlight, skill and focus cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Brain,
    HeartPulse,
    #[default]
    Code,
    Chart,
    Settings,
    Server,
    Database,
    Triangle,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Brain => "🧠",
            Icon::HeartPulse => "♥",
            Icon::Code => "</>",
            Icon::Chart => "📊",
            Icon::Settings => "⚙",
            Icon::Server => "🖥",
            Icon::Database => "🗄",
            Icon::Triangle => "△",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub icon: Icon,
    pub accent: Accent,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: Icon,
    pub accent: Accent,
    pub skills: Vec<String>,
    #[serde(default)]
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Competency {
    pub name: String,
    /// Percentage, `0..=100`.
    pub level: u8,
}

impl Competency {
    pub fn width(&self) -> String {
        format!("{}%", self.level.min(100))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FocusArea {
    pub name: String,
    pub icon: Icon,
    /// Start and end colors of the badge gradient.
    pub gradient: (Accent, Accent),
}

impl FocusArea {
    pub fn gradient_class(&self) -> String {
        let (from, to) = self.gradient;
        format!("{} {}", from.gradient_from(), to.gradient_to())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

impl Project {
    pub fn has_all_links(&self) -> bool {
        self.repository.is_some() && self.demo.is_some()
    }

    pub fn is_coming_soon(&self) -> bool {
        self.repository.is_none() && self.demo.is_none()
    }

    /// Cards cascade in gallery order.
    pub fn reveal_delay_ms(index: usize) -> u64 {
        200 + 200 * index as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    Twitter,
}

impl SocialKind {
    pub fn icon(self) -> &'static str {
        match self {
            SocialKind::Github => "devicon-github-plain",
            SocialKind::Linkedin => "devicon-linkedin-plain",
            SocialKind::Twitter => "devicon-twitter-original",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            SocialKind::Github => Accent::NeonBlue,
            SocialKind::Linkedin => Accent::NeonPurple,
            SocialKind::Twitter => Accent::NeonViolet,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub competencies: Vec<Competency>,
    #[serde(default)]
    pub focus_areas: Vec<FocusArea>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub footer_links: Vec<Link>,
    #[serde(default)]
    pub settings: SiteConfig,
}

pub fn load_portfolio() -> Result<Portfolio, ContentError> {
    let file = ContentAssets::get(PORTFOLIO_FILE)
        .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
    parse_portfolio(&file.data)
}

fn parse_portfolio(data: &[u8]) -> Result<Portfolio, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::ParseError(e.to_string()))
}

pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

pub fn settings() -> &'static SiteConfig {
    &PORTFOLIO.settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_portfolio_parses() {
        let p = load_portfolio().expect("embedded portfolio should parse");
        assert!(!p.profile.name.is_empty());
        assert!(!p.profile.about.is_empty());
        assert_eq!(p.highlights.len(), 3);
        assert_eq!(p.skill_categories.len(), 3);
        assert!(!p.competencies.is_empty());
        assert_eq!(p.focus_areas.len(), 4);
        assert_eq!(p.projects.len(), 3);
        assert_eq!(p.socials.len(), 3);
        assert_eq!(p.settings, SiteConfig::default());
    }

    #[test]
    fn test_project_links() {
        let p = load_portfolio().expect("embedded portfolio should parse");
        let flagship = &p.projects[0];
        assert!(flagship.has_all_links());
        assert!(!flagship.is_coming_soon());
        assert!(p.projects[1..].iter().all(Project::is_coming_soon));
        assert_eq!(Project::reveal_delay_ms(0), 200);
        assert_eq!(Project::reveal_delay_ms(2), 600);
    }

    #[test]
    fn test_competency_levels_in_range() {
        let p = load_portfolio().expect("embedded portfolio should parse");
        assert!(p.competencies.iter().all(|c| c.level <= 100));
        let c = Competency {
            name: "Overflow".to_string(),
            level: 140,
        };
        assert_eq!(c.width(), "100%");
    }

    #[test]
    fn test_card_styling() {
        let p = load_portfolio().expect("embedded portfolio should parse");
        assert_eq!(p.highlights[0].icon, Icon::Brain);
        assert!(p.focus_areas.iter().all(|a| !a.icon.glyph().is_empty()));
        assert_eq!(p.highlights[1].accent, Accent::NeonPurple);
        assert_eq!(p.skill_categories[2].accent.dot(), "bg-neon-violet/40");
        assert_eq!(
            p.focus_areas[0].gradient_class(),
            "from-neon-purple to-neon-blue"
        );
        assert_eq!(SocialKind::Twitter.accent().hover_text(), "hover:text-neon-violet");
    }

    #[test]
    fn test_unknown_accent_rejected() {
        let err = parse_portfolio(
            br#"{ "profile": { "name": "A", "brand": "A.", "role": "", "tagline": "", "about": [], "portrait": { "src": "", "alt": "" } },
                  "highlights": [{ "title": "X", "icon": "code", "accent": "red" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::ParseError(_)));
    }

    #[test]
    fn test_minimal_document() {
        let p = parse_portfolio(br#"{ "profile": { "name": "A", "brand": "A.", "role": "", "tagline": "", "about": [], "portrait": { "src": "", "alt": "" } } }"#)
            .expect("minimal document should parse");
        assert!(p.projects.is_empty());
        assert_eq!(p.settings.notice_duration_ms, 5000);
    }

    #[test]
    fn test_malformed_document() {
        let err = parse_portfolio(b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::ParseError(_)));
    }
}
