//! Popup placement relative to the caret
//!
//! The popup opens below the caret line. When that would overflow the
//! container it flips above the line, and a container too small for either
//! gets the popup clamped inside it.

use serde::{Deserialize, Serialize};

use crate::model::Point;

/// Popup size parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupMetrics {
    /// Fixed popup width in pixels
    pub width: i32,
    /// Vertical chrome (border and padding) added to the rows
    pub chrome_padding: i32,
    /// Rows sized before the list starts scrolling (0 = no cap)
    pub max_visible_items: usize,
}

impl Default for PopupMetrics {
    fn default() -> Self {
        Self {
            width: 200,
            chrome_padding: 8,
            max_visible_items: 10,
        }
    }
}

/// Popup rectangle in surface coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PopupBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PopupBounds {
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Where the popup goes and whether it sits above the caret line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PopupPlacement {
    pub bounds: PopupBounds,
    pub flipped: bool,
}

impl PopupMetrics {
    /// Rows actually sized for `item_count` entries
    pub fn visible_rows(&self, item_count: usize) -> usize {
        if self.max_visible_items == 0 {
            item_count
        } else {
            item_count.min(self.max_visible_items)
        }
    }

    /// Rows that fit inside a popup of `height`, at least one
    pub fn rows_fitting(&self, height: i32, item_height: i32) -> usize {
        if item_height <= 0 {
            return 1;
        }
        ((height - self.chrome_padding).max(0) / item_height).max(1) as usize
    }

    /// Popup height for `item_count` entries
    pub fn popup_height(&self, item_count: usize, item_height: i32) -> i32 {
        self.chrome_padding + item_height * self.visible_rows(item_count) as i32
    }

    /// Compute popup bounds for a caret at `caret` (top of the caret line)
    pub fn place(
        &self,
        caret: Point,
        line_height: i32,
        container_height: i32,
        item_count: usize,
        item_height: i32,
    ) -> PopupPlacement {
        let height = self.popup_height(item_count, item_height);
        let x = caret.x.max(0);
        let below = caret.y + line_height;

        if below + height <= container_height {
            return PopupPlacement {
                bounds: PopupBounds {
                    x,
                    y: below,
                    width: self.width,
                    height,
                },
                flipped: false,
            };
        }

        // Bottom edge on the caret line's top; clamp for tiny containers
        let height = height.min(container_height.max(0));
        let y = (caret.y - height).min(container_height - height).max(0);

        PopupPlacement {
            bounds: PopupBounds {
                x,
                y,
                width: self.width,
                height,
            },
            flipped: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_below_caret() {
        let placement = PopupMetrics::default().place(Point::new(40, 100), 16, 600, 3, 16);

        assert!(!placement.flipped);
        assert_eq!(placement.bounds.x, 40);
        assert_eq!(placement.bounds.y, 116);
        assert_eq!(placement.bounds.width, 200);
        assert_eq!(placement.bounds.height, 8 + 16 * 3);
    }

    #[test]
    fn test_rows_fitting_clamped_popup() {
        let metrics = PopupMetrics::default();
        let placement = metrics.place(Point::new(8, 16), 16, 32, 10, 16);
        assert_eq!(placement.bounds.height, 32);
        assert_eq!(metrics.rows_fitting(placement.bounds.height, 16), 1);
        assert_eq!(metrics.rows_fitting(8 + 16 * 10, 16), 10);
        assert_eq!(metrics.rows_fitting(4, 16), 1);
    }

    #[test]
    fn test_place_flips_above_caret_line() {
        let placement = PopupMetrics::default().place(Point::new(0, 480), 16, 600, 10, 16);

        assert!(placement.flipped);
        assert_eq!(placement.bounds.height, 168);
        assert_eq!(placement.bounds.bottom(), 480);
        assert_eq!(placement.bounds.y, 312);
    }

    #[test]
    fn test_place_exact_fit_does_not_flip() {
        // 100 + 16 + 8 + 16 * 2 == 156
        let placement = PopupMetrics::default().place(Point::new(0, 100), 16, 156, 2, 16);
        assert!(!placement.flipped);
        assert_eq!(placement.bounds.bottom(), 156);
    }

    #[test]
    fn test_height_capped_at_max_visible_items() {
        let metrics = PopupMetrics::default();
        assert_eq!(metrics.popup_height(25, 16), 8 + 16 * 10);

        let uncapped = PopupMetrics {
            max_visible_items: 0,
            ..PopupMetrics::default()
        };
        assert_eq!(uncapped.popup_height(25, 16), 8 + 16 * 25);
    }

    #[test]
    fn test_tiny_container_clamps() {
        let placement = PopupMetrics::default().place(Point::new(5, 10), 16, 60, 10, 16);

        assert!(placement.flipped);
        assert_eq!(placement.bounds.y, 0);
        assert_eq!(placement.bounds.height, 60);
        assert!(placement.bounds.bottom() <= 60);
    }

    #[test]
    fn test_negative_caret_x_clamped() {
        let placement = PopupMetrics::default().place(Point::new(-12, 0), 16, 600, 1, 16);
        assert_eq!(placement.bounds.x, 0);
    }
}
