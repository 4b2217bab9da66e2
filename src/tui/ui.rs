use crate::core::state::{HelloView, PAGE_HEADING};
use crate::tui::component::Component;
use crate::tui::components::HelloBanner;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

const QUIT_HINT: &str = "q / Esc to quit";

pub fn draw_ui(frame: &mut Frame, view: &HelloView) {
    use Constraint::{Length, Min};
    let [main_area, hint_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());

    let mut banner = HelloBanner::new(PAGE_HEADING, view.render());

    // Center the banner in the main area, capped so it reads as a header.
    let width = main_area.width.min(72);
    let height = banner.required_height(width).min(main_area.height);
    let [row] = Layout::vertical([Length(height)])
        .flex(Flex::Center)
        .areas(main_area);
    let [banner_area] = Layout::horizontal([Length(width)])
        .flex(Flex::Center)
        .areas(row);

    banner.render(frame, banner_area);

    let hint = Paragraph::new(QUIT_HINT)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}
