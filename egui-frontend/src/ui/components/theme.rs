//! # Theme Configuration
//!
//! Centralized colors for the dashboard. Components use these constants
//! rather than inline RGB values.

use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub layout: LayoutColors,
    pub typography: TypographyColors,
    pub interactive: InteractiveColors,
    pub chart: ChartColors,
    pub table: TableColors,
}

#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub page_background: Color32,
    pub card_background: Color32,
    pub card_shadow: Color32,
    pub card_border: Color32,
}

#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub muted: Color32,
    pub white: Color32,
}

#[derive(Debug, Clone)]
pub struct InteractiveColors {
    pub accent: Color32,
    pub inactive_background: Color32,
    pub selected_outline: Color32,
}

#[derive(Debug, Clone)]
pub struct ChartColors {
    pub line: Color32,
    pub growth: Color32,
    pub growth_background: Color32,
    pub decline: Color32,
    pub decline_background: Color32,
}

#[derive(Debug, Clone)]
pub struct TableColors {
    pub header_background: Color32,
    pub header_text: Color32,
    pub delete: Color32,
}

pub const CURRENT_THEME: Theme = Theme {
    layout: LayoutColors {
        page_background: Color32::from_rgb(244, 246, 250),
        card_background: Color32::WHITE,
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 18),
        card_border: Color32::from_rgb(226, 232, 240),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(15, 23, 42),
        secondary: Color32::from_rgb(71, 85, 105),
        muted: Color32::from_rgb(148, 163, 184),
        white: Color32::WHITE,
    },
    interactive: InteractiveColors {
        // Stripe-ish indigo
        accent: Color32::from_rgb(99, 91, 255),
        inactive_background: Color32::from_rgb(241, 245, 249),
        selected_outline: Color32::from_rgb(15, 23, 42),
    },
    chart: ChartColors {
        line: Color32::from_rgb(99, 91, 255),
        growth: Color32::from_rgb(22, 163, 74),
        growth_background: Color32::from_rgb(220, 252, 231),
        decline: Color32::from_rgb(220, 38, 38),
        decline_background: Color32::from_rgb(254, 226, 226),
    },
    table: TableColors {
        header_background: Color32::from_rgb(248, 250, 252),
        header_text: Color32::from_rgb(100, 116, 139),
        delete: Color32::from_rgb(220, 38, 38),
    },
};

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const PAGE_BACKGROUND: Color32 = CURRENT_THEME.layout.page_background;
    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_SHADOW: Color32 = CURRENT_THEME.layout.card_shadow;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_MUTED: Color32 = CURRENT_THEME.typography.muted;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;

    pub const ACCENT: Color32 = CURRENT_THEME.interactive.accent;
    pub const INACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.inactive_background;
    pub const SELECTED_OUTLINE: Color32 = CURRENT_THEME.interactive.selected_outline;
}
