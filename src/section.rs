//! Page sections, scroll tracking and in-page navigation.
//!
//! Layout lookups and scrolling go through [`Viewport`] so the logic runs the
//! same against the browser window and against a test fixture.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Lookahead added to the scroll offset when deciding which section is current.
pub const PROBE_OFFSET: f64 = 200.0;
/// Height of the fixed navbar; navigation leaves this much room above a section.
pub const NAVBAR_HEIGHT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Document order. Tracking resolves overlaps in favour of the earlier entry.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the section element
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a rendered section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

pub trait Viewport {
    /// Current vertical scroll offset of the document.
    fn scroll_y(&self) -> f64;

    /// Bounds of the element with `id`, or `None` if it isn't mounted.
    fn section_bounds(&self, id: &str) -> Option<SectionBounds>;

    /// Animated scroll so the document offset `top` is at the viewport top.
    fn smooth_scroll_to(&self, top: f64);
}

/// The first section (in document order) containing the probe position.
pub fn section_at(viewport: &impl Viewport) -> Option<Section> {
    let probe = viewport.scroll_y() + PROBE_OFFSET;
    Section::ALL.into_iter().find(|section| {
        viewport
            .section_bounds(section.id())
            .is_some_and(|bounds| bounds.contains(probe))
    })
}

/// Active section after a scroll. Keeps `current` when the probe is outside
/// every section.
pub fn track_active(viewport: &impl Viewport, current: Section) -> Section {
    section_at(viewport).unwrap_or(current)
}

/// Smooth-scroll to the section named `id`, stopping [`NAVBAR_HEIGHT`] short
/// of its top. Unknown or unmounted sections are ignored.
pub fn scroll_to_section(viewport: &impl Viewport, id: &str) {
    let section = match id.parse::<Section>() {
        Ok(section) => section,
        Err(e) => {
            log::debug!("ignoring navigation: {e}");
            return;
        }
    };
    let Some(bounds) = viewport.section_bounds(section.id()) else {
        log::debug!("ignoring navigation: {section} is not mounted");
        return;
    };
    viewport.smooth_scroll_to(bounds.top - NAVBAR_HEIGHT);
}
