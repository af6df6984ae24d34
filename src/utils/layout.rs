use ratatui::prelude::*;

/// Create the page layout: header, tabs, body, footer
pub fn create_page_layout(area: Rect, header_height: u16, footer_height: u16) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Center a popup of `width_percent` x `height_percent` inside `area`
pub fn center_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let width = area.width.saturating_mul(width_percent.min(100)) / 100;
    let height = area.height.saturating_mul(height_percent.min(100)) / 100;
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

/// Whether the terminal is narrow enough to collapse the section tabs into a menu
pub fn is_compact(area: Rect) -> bool {
    area.width < 80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_popup_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = center_popup(area, 50, 50);
        assert_eq!(popup, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_page_layout_fills_area() {
        let area = Rect::new(0, 0, 120, 40);
        let [header, tabs, body, footer] = create_page_layout(area, 5, 2);
        assert_eq!(header.height, 5);
        assert_eq!(tabs.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(body.height, 30);
    }
}
