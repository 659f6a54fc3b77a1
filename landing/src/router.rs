//! Page selection.
//!
//! The site has no URL routing: the active page is a single [`PageId`] held in
//! a reactive [`Router`] context. Every transition is accepted as-is, closes
//! the mobile menu and scrolls the window back to the top.

use std::fmt;

use leptos::prelude::*;

/// Products with a dedicated detail page, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductId {
    Alu,
    Pvc,
    Baie,
    Porte,
    Volet,
    Pergola,
}

impl ProductId {
    pub const ALL: [ProductId; 6] = [
        ProductId::Alu,
        ProductId::Pvc,
        ProductId::Baie,
        ProductId::Porte,
        ProductId::Volet,
        ProductId::Pergola,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ProductId::Alu => "alu",
            ProductId::Pvc => "pvc",
            ProductId::Baie => "baie",
            ProductId::Porte => "porte",
            ProductId::Volet => "volet",
            ProductId::Pergola => "pergola",
        }
    }

}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Home,
    Products,
    Product(ProductId),
    About,
    Gallery,
    Contact,
    Legal,
    Privacy,
    Sitemap,
}

impl PageId {
    /// Every page of the site, sitemap order.
    pub const ALL: [PageId; 14] = [
        PageId::Home,
        PageId::Products,
        PageId::Product(ProductId::Alu),
        PageId::Product(ProductId::Pvc),
        PageId::Product(ProductId::Baie),
        PageId::Product(ProductId::Porte),
        PageId::Product(ProductId::Volet),
        PageId::Product(ProductId::Pergola),
        PageId::About,
        PageId::Gallery,
        PageId::Contact,
        PageId::Legal,
        PageId::Privacy,
        PageId::Sitemap,
    ];

    pub fn slug(self) -> String {
        match self {
            PageId::Home => "home".into(),
            PageId::Products => "products".into(),
            PageId::Product(p) => format!("product-{}", p.slug()),
            PageId::About => "about".into(),
            PageId::Gallery => "gallery".into(),
            PageId::Contact => "contact".into(),
            PageId::Legal => "legal".into(),
            PageId::Privacy => "privacy".into(),
            PageId::Sitemap => "sitemap".into(),
        }
    }

}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug())
    }
}

/// Side effect a transition asks the host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    ScrollToTop,
}

/// Navigation state: the active page and the mobile overlay flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    pub page: PageId,
    pub menu_open: bool,
}

impl Navigation {
    pub fn navigate(&mut self, page: PageId) -> NavEffect {
        self.page = page;
        self.menu_open = false;
        NavEffect::ScrollToTop
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

/// Reactive handle on [`Navigation`], provided once by the root component.
#[derive(Clone, Copy)]
pub struct Router {
    state: RwSignal<Navigation>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(Navigation::default()),
        }
    }

    pub fn page(&self) -> PageId {
        self.state.with(|s| s.page)
    }

    pub fn menu_open(&self) -> bool {
        self.state.with(|s| s.menu_open)
    }

    pub fn navigate(&self, page: PageId) {
        let mut effect = None;
        self.state.update(|s| effect = Some(s.navigate(page)));
        tracing::debug!(page = %page, "navigate");
        if let Some(NavEffect::ScrollToTop) = effect {
            window().scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    pub fn toggle_menu(&self) {
        self.state.update(Navigation::toggle_menu);
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Router installed by `App`.
pub fn use_router() -> Router {
    use_context::<Router>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_page_has_a_distinct_slug() {
        let mut slugs: Vec<String> = PageId::ALL.iter().map(|p| p.slug()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), PageId::ALL.len());
    }

    #[test]
    fn product_slugs_are_prefixed() {
        assert_eq!(PageId::Product(ProductId::Pergola).to_string(), "product-pergola");
        assert_eq!(PageId::Product(ProductId::Alu).slug(), "product-alu");
        assert_eq!(PageId::Sitemap.to_string(), "sitemap");
    }

    #[test]
    fn navigate_closes_menu_and_scrolls() {
        let mut nav = Navigation::default();
        nav.toggle_menu();
        assert!(nav.menu_open);

        let effect = nav.navigate(PageId::Gallery);
        assert_eq!(effect, NavEffect::ScrollToTop);
        assert_eq!(nav.page, PageId::Gallery);
        assert!(!nav.menu_open);
    }

    #[test]
    fn navigate_to_current_page_is_accepted() {
        let mut nav = Navigation::default();
        assert_eq!(nav.navigate(PageId::Home), NavEffect::ScrollToTop);
        assert_eq!(nav.page, PageId::Home);
    }
}
