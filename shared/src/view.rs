//! Display-ready projections of catalog data. Everything here is pure so the
//! derived attributes (badge, decoration, stagger) can be tested without a DOM.

use crate::catalog::Catalog;
use crate::colors::{ICON_BORDER_ALPHA, ICON_FILL_ALPHA, with_alpha};
use crate::department::Department;
use crate::filter::{FilterKey, Query};

/// Reveal delay added per card position in the visible grid.
pub const CARD_STAGGER_MS: u32 = 25;

/// Outbound level links open in a new browsing context with no opener.
pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";

/// `""` for exactly one, `"s"` otherwise.
pub fn plural_suffix(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Stat line shown above the grid.
pub fn summary_line(catalog: &Catalog, visible_len: usize, key: FilterKey, query: &Query) -> String {
    if !query.is_empty() {
        return format!(
            "{visible_len} result{} for \"{}\"",
            plural_suffix(visible_len),
            query.display()
        );
    }
    match key {
        FilterKey::Live => {
            let live = catalog.live_count();
            format!("{live} live department{}", plural_suffix(live))
        }
        FilterKey::Soon => format!("{} coming soon", catalog.soon_count()),
        FilterKey::All => format!("Showing all {} departments", catalog.len()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub fill: String,
    pub border: String,
}

impl Decoration {
    pub fn for_department(department: &Department) -> Self {
        let accent = department.accent();
        Self {
            fill: with_alpha(&accent, ICON_FILL_ALPHA),
            border: with_alpha(&accent, ICON_BORDER_ALPHA),
        }
    }

    pub fn icon_style(&self) -> String {
        format!("background:{};border:1px solid {};", self.fill, self.border)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Live,
    Soon,
}

impl Badge {
    pub fn for_department(department: &Department) -> Self {
        if department.live { Self::Live } else { Self::Soon }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Soon => "Coming Soon",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Live => "badge live",
            Self::Soon => "badge soon",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Department name; the click target resolves back through `Catalog::find`.
    pub key: String,
    pub icon: String,
    pub faculty: String,
    pub name: String,
    pub badge: Badge,
    pub decoration: Decoration,
    pub delay_ms: u32,
    pub aria_label: String,
}

impl CardView {
    pub fn new(department: &Department, position: usize) -> Self {
        let badge = Badge::for_department(department);
        let hint = match badge {
            Badge::Live => "Select level to open library",
            Badge::Soon => "Resources coming soon",
        };
        Self {
            key: department.name.clone(),
            icon: department.icon.clone(),
            faculty: department.faculty.clone(),
            name: department.name.clone(),
            badge,
            decoration: Decoration::for_department(department),
            delay_ms: stagger_delay(position),
            aria_label: format!("{} \u{2014} {hint}", department.name),
        }
    }

    pub fn card_class(&self) -> &'static str {
        match self.badge {
            Badge::Live => "dept-card",
            Badge::Soon => "dept-card soon-card",
        }
    }

    pub fn animation_style(&self) -> String {
        format!("animation-delay:{}ms", self.delay_ms)
    }
}

pub fn stagger_delay(position: usize) -> u32 {
    u32::try_from(position)
        .unwrap_or(u32::MAX)
        .saturating_mul(CARD_STAGGER_MS)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    /// Nothing matched; `search_term` echoes the trimmed query.
    Empty { search_term: String },
    Cards(Vec<CardView>),
}

pub fn grid_view(visible: &[&Department], query: &Query) -> GridView {
    if visible.is_empty() {
        return GridView::Empty {
            search_term: query.display().to_string(),
        };
    }
    GridView::Cards(
        visible
            .iter()
            .enumerate()
            .map(|(position, department)| CardView::new(department, position))
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelLinkView {
    pub label: String,
    /// `None` for unpublished levels, which render disabled and never navigate.
    pub href: Option<String>,
    pub aria_label: String,
}

impl LevelLinkView {
    pub fn is_inert(&self) -> bool {
        self.href.is_none()
    }
}

pub fn level_links(department: &Department) -> Vec<LevelLinkView> {
    department
        .levels
        .iter()
        .map(|level| LevelLinkView {
            label: level.level.to_string(),
            href: level.published_url().map(str::to_string),
            aria_label: format!("Open {} Level {} library", department.name, level.level),
        })
        .collect()
}

/// Header of the level modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalHeader {
    pub icon: String,
    pub faculty: String,
    pub name: String,
    pub decoration: Decoration,
}

impl ModalHeader {
    pub fn new(department: &Department) -> Self {
        Self {
            icon: department.icon.clone(),
            faculty: department.faculty.clone(),
            name: department.name.clone(),
            decoration: Decoration::for_department(department),
        }
    }
}
