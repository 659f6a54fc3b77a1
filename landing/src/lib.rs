//! InterPlus Fenêtre marketing site.
//!
//! A single-page Leptos app: the [`router`] decides which view `App` renders,
//! the [`catalog`], [`content`] and [`gallery`] modules hold the static copy,
//! and [`lead`] carries the quote form from validation through reCAPTCHA to
//! EmailJS.

pub mod catalog;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod lead;
pub mod pages;
pub mod router;
pub mod shell;

use leptos::prelude::*;

use components::{Footer, Nav};
use pages::*;
use router::{PageId, Router};

/// Page component a [`PageId`] renders. Product pages carry their catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    Home,
    Products,
    ProductDetail(&'static catalog::ProductInfo),
    About,
    Gallery,
    Contact,
    Legal,
    Privacy,
    Sitemap,
}

impl PageView {
    pub fn for_page(page: PageId) -> Self {
        match page {
            PageId::Home => PageView::Home,
            PageId::Products => PageView::Products,
            PageId::Product(id) => PageView::ProductDetail(catalog::product(id)),
            PageId::About => PageView::About,
            PageId::Gallery => PageView::Gallery,
            PageId::Contact => PageView::Contact,
            PageId::Legal => PageView::Legal,
            PageId::Privacy => PageView::Privacy,
            PageId::Sitemap => PageView::Sitemap,
        }
    }
}

/// View rendered for `page`.
pub fn page_view(page: PageId) -> AnyView {
    match PageView::for_page(page) {
        PageView::Home => view! { <HomePage /> }.into_any(),
        PageView::Products => view! { <ProductsPage /> }.into_any(),
        PageView::ProductDetail(product) => view! { <ProductDetailPage product=product /> }.into_any(),
        PageView::About => view! { <AboutPage /> }.into_any(),
        PageView::Gallery => view! { <GalleryPage /> }.into_any(),
        PageView::Contact => view! { <ContactPage /> }.into_any(),
        PageView::Legal => view! { <LegalPage /> }.into_any(),
        PageView::Privacy => view! { <PrivacyPage /> }.into_any(),
        PageView::Sitemap => view! { <SitemapPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let router = Router::new();
    provide_context(router);

    view! {
        <div class="font-sans text-slate-900 bg-white selection:bg-amber-500 selection:text-white">
            <Nav />
            <main>{move || page_view(router.page())}</main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::ProductId;

    #[test]
    fn each_page_maps_to_its_own_view() {
        let views: Vec<PageView> = PageId::ALL.into_iter().map(PageView::for_page).collect();
        for (i, a) in views.iter().enumerate() {
            for b in &views[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn product_pages_render_their_catalog_entry() {
        match PageView::for_page(PageId::Product(ProductId::Volet)) {
            PageView::ProductDetail(info) => assert_eq!(info.id, ProductId::Volet),
            other => panic!("expected a product detail view, got {other:?}"),
        }
        assert_eq!(PageView::for_page(PageId::default()), PageView::Home);
    }
}
