//! Header appearance, derived from scroll position, overlay and page.

use crate::config::SITE;
use crate::router::PageId;

pub struct NavLink {
    pub page: PageId,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { page: PageId::Home, label: "Accueil" },
    NavLink { page: PageId::Products, label: "Nos Fenêtres" },
    NavLink { page: PageId::Gallery, label: "Réalisations" },
    NavLink { page: PageId::About, label: "Entreprise" },
    NavLink { page: PageId::Contact, label: "Contact" },
];

const NAV_BASE: &str = "fixed w-full z-50 transition-all duration-300";
const LOGO_BASE: &str =
    "text-2xl font-serif font-bold tracking-tighter cursor-pointer flex flex-col leading-none";
const TAGLINE_BASE: &str =
    "text-[10px] uppercase tracking-widest font-sans font-normal opacity-80 mt-1";
const LINK_BASE: &str = "text-sm font-semibold uppercase tracking-wide hover:text-amber-500 transition";

/// Utility classes for every themed part of the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderStyle {
    /// Past the scroll threshold.
    pub scrolled: bool,
    pub opaque: bool,
    pub light_text: bool,
    page: PageId,
    menu_open: bool,
}

impl HeaderStyle {
    pub fn derive(scroll_y: f64, menu_open: bool, page: PageId) -> Self {
        let scrolled = scroll_y > SITE.header_scroll_threshold;
        let on_hero = !scrolled && page == PageId::Home;
        Self {
            scrolled,
            opaque: scrolled && !menu_open,
            light_text: menu_open || on_hero,
            page,
            menu_open,
        }
    }

    pub fn nav_class(&self) -> String {
        let bg = if self.opaque {
            "bg-white/95 backdrop-blur-md shadow-md py-3"
        } else {
            "bg-transparent py-4"
        };
        format!("{NAV_BASE} {bg}")
    }

    /// Logo and mobile toggle share this color.
    pub fn text_class(&self) -> &'static str {
        if self.light_text { "text-white" } else { "text-slate-900" }
    }

    pub fn logo_class(&self) -> String {
        format!("{LOGO_BASE} {}", self.text_class())
    }

    pub fn tagline_class(&self) -> String {
        let color = if self.menu_open {
            "text-slate-400"
        } else if self.scrolled || self.page != PageId::Home {
            "text-slate-500"
        } else {
            "text-slate-300"
        };
        format!("{TAGLINE_BASE} {color}")
    }

    pub fn link_class(&self, target: PageId) -> String {
        let color = if self.scrolled || self.page != PageId::Home {
            "text-slate-700"
        } else {
            "text-white/90"
        };
        if target == self.page {
            format!("{LINK_BASE} {color} text-amber-500")
        } else {
            format!("{LINK_BASE} {color}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_on_home_hero() {
        let style = HeaderStyle::derive(0.0, false, PageId::Home);
        assert!(!style.opaque);
        assert!(style.light_text);
        assert!(style.nav_class().ends_with("bg-transparent py-4"));
        assert!(style.tagline_class().ends_with("text-slate-300"));
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!HeaderStyle::derive(50.0, false, PageId::Home).scrolled);
        assert!(HeaderStyle::derive(50.5, false, PageId::Home).scrolled);
    }

    #[test]
    fn opaque_once_scrolled() {
        let style = HeaderStyle::derive(120.0, false, PageId::Home);
        assert!(style.opaque);
        assert_eq!(style.text_class(), "text-slate-900");
        assert!(style.nav_class().contains("bg-white/95"));
    }

    #[test]
    fn open_menu_forces_transparent_light_header() {
        let style = HeaderStyle::derive(400.0, true, PageId::Contact);
        assert!(!style.opaque);
        assert!(style.light_text);
        assert!(style.tagline_class().ends_with("text-slate-400"));
    }

    #[test]
    fn inner_pages_use_dark_text_at_top() {
        let style = HeaderStyle::derive(0.0, false, PageId::Gallery);
        assert!(!style.light_text);
        assert!(style.link_class(PageId::Home).contains("text-slate-700"));
    }

    #[test]
    fn active_link_is_highlighted() {
        let style = HeaderStyle::derive(0.0, false, PageId::About);
        assert!(style.link_class(PageId::About).ends_with("text-amber-500"));
        assert!(!style.link_class(PageId::Contact).ends_with("text-amber-500"));
    }

    #[test]
    fn nav_links_cover_main_pages() {
        let pages: Vec<PageId> = NAV_LINKS.iter().map(|l| l.page).collect();
        assert_eq!(
            pages,
            vec![PageId::Home, PageId::Products, PageId::Gallery, PageId::About, PageId::Contact]
        );
    }
}
