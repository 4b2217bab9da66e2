//! # HelloBanner Component
//!
//! The page header: a bordered block titled with the page heading and a
//! single centered line of text inside it.
//!
//! ## Stateless Component
//!
//! HelloBanner is purely presentational. It receives the heading and the
//! text as props and never looks at `ViewState` itself:
//!
//! ```rust,ignore
//! let mut banner = HelloBanner::new(PAGE_HEADING, view.render());
//! banner.render(frame, area);
//! ```
//!
//! The text is drawn as-is; ratatui renders it as literal characters, so
//! markup in a backend message shows up verbatim.

use std::borrow::Cow;

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

/// Left + right borders
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders
const VERTICAL_OVERHEAD: u16 = 2;

pub struct HelloBanner {
    pub heading: String,
    pub text: String,
}

impl HelloBanner {
    pub fn new(heading: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            text: text.into(),
        }
    }

    /// Height needed to show all of `text` inside the borders at `width` columns.
    pub fn required_height(&self, width: u16) -> u16 {
        let lines = self.wrapped_lines(inner_width(width)).len().max(1);
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .saturating_add(VERTICAL_OVERHEAD)
    }

    /// Wraps the text the same way for measuring and drawing, so every
    /// measured line is a drawn line. Widths are display cells, not chars.
    fn wrapped_lines(&self, inner_width: u16) -> Vec<Cow<'_, str>> {
        let options = textwrap::Options::new(inner_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        textwrap::wrap(&self.text, options)
    }
}

fn inner_width(width: u16) -> u16 {
    width.saturating_sub(HORIZONTAL_OVERHEAD).max(1)
}

impl Component for HelloBanner {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(self.heading.as_str())
            .title_alignment(Alignment::Center)
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::Cyan));

        let lines: Vec<Line> = self
            .wrapped_lines(inner_width(area.width))
            .into_iter()
            .map(Line::from)
            .collect();

        // Already wrapped to the inner width; no second wrap pass.
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}
