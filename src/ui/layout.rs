// SPDX-License-Identifier: MPL-2.0
//! Page geometry.
//!
//! Every section is rendered with the height computed here, which makes the
//! vertical position of each anchor known without measuring widgets. The
//! navbar uses it to find scroll targets and the active section; the app
//! uses it to decide which sections have scrolled into view.

use crate::domain::ui::SectionId;
use iced::Size;

/// Windows narrower than this collapse the navbar into a menu.
pub const NARROW_BREAKPOINT: f32 = 768.0;

/// Vertical padding above and below each section's content.
pub const SECTION_PADDING: f32 = 80.0;

/// Section title plus the gap below it.
pub const HEADING_BLOCK: f32 = 84.0;

pub const GRID_GAP: f32 = 32.0;

/// Smallest hero height; the hero otherwise fills the window.
pub const HERO_MIN_HEIGHT: f32 = 560.0;

pub const SKILL_CARD_HEIGHT: f32 = 136.0;
pub const PROJECT_CARD_HEIGHT: f32 = 440.0;
pub const TESTIMONIAL_HEIGHT: f32 = 300.0;
pub const CONTACT_HEIGHT: f32 = 560.0;

/// Tolerance when deciding which section an offset falls in, so a finished
/// smooth scroll lands inside its target section.
const ACTIVE_TOLERANCE: f32 = 1.0;

/// Computed positions of all sections for one window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    viewport: Size,
    tops: [f32; SectionId::ALL.len()],
    heights: [f32; SectionId::ALL.len()],
}

impl PageLayout {
    #[must_use]
    pub fn new(viewport: Size, skill_count: usize, project_count: usize) -> Self {
        let skill_rows = rows(skill_count, skill_columns(viewport.width));
        let project_rows = rows(project_count, project_columns(viewport.width));

        let mut heights = [0.0; SectionId::ALL.len()];
        let mut tops = [0.0; SectionId::ALL.len()];
        let mut top = 0.0;

        for (slot, section) in SectionId::ALL.iter().enumerate() {
            let height = match section {
                SectionId::Home => viewport.height.max(HERO_MIN_HEIGHT),
                SectionId::Skills => grid_section(skill_rows, SKILL_CARD_HEIGHT),
                SectionId::Projects => grid_section(project_rows, PROJECT_CARD_HEIGHT),
                SectionId::Testimonials => framed(TESTIMONIAL_HEIGHT),
                SectionId::Contact => framed(CONTACT_HEIGHT),
            };
            tops[slot] = top;
            heights[slot] = height;
            top += height;
        }

        Self {
            viewport,
            tops,
            heights,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    #[must_use]
    pub fn is_narrow(&self) -> bool {
        is_narrow(self.viewport.width)
    }

    #[must_use]
    pub fn skill_columns(&self) -> usize {
        skill_columns(self.viewport.width)
    }

    #[must_use]
    pub fn project_columns(&self) -> usize {
        project_columns(self.viewport.width)
    }

    #[must_use]
    pub fn top(&self, section: SectionId) -> f32 {
        self.tops[section.index()]
    }

    #[must_use]
    pub fn height(&self, section: SectionId) -> f32 {
        self.heights[section.index()]
    }

    /// Scroll offset that puts `section` just below a navbar of height
    /// `offset`, clamped at the top of the page.
    #[must_use]
    pub fn scroll_target(&self, section: SectionId, offset: f32) -> f32 {
        (self.top(section) - offset).max(0.0)
    }

    /// Section under the navbar's bottom edge at scroll offset `scroll_y`.
    #[must_use]
    pub fn section_at(&self, scroll_y: f32, offset: f32) -> SectionId {
        let probe = scroll_y + offset + ACTIVE_TOLERANCE;
        SectionId::ALL
            .iter()
            .rev()
            .find(|section| self.top(**section) <= probe)
            .copied()
            .unwrap_or(SectionId::Home)
    }

    /// Whether any part of `section` is inside the window at `scroll_y`.
    #[must_use]
    pub fn is_visible(&self, section: SectionId, scroll_y: f32) -> bool {
        let top = self.top(section);
        let bottom = top + self.height(section);
        top < scroll_y + self.viewport.height && bottom > scroll_y
    }
}

#[must_use]
pub fn is_narrow(width: f32) -> bool {
    width < NARROW_BREAKPOINT
}

fn skill_columns(width: f32) -> usize {
    if is_narrow(width) {
        1
    } else {
        2
    }
}

fn project_columns(width: f32) -> usize {
    skill_columns(width)
}

fn rows(items: usize, columns: usize) -> usize {
    items.div_ceil(columns.max(1))
}

#[allow(clippy::cast_precision_loss)]
fn grid_section(rows: usize, row_height: f32) -> f32 {
    let gaps = rows.saturating_sub(1) as f32 * GRID_GAP;
    framed(rows as f32 * row_height + gaps)
}

fn framed(content: f32) -> f32 {
    SECTION_PADDING * 2.0 + HEADING_BLOCK + content
}
