// Sitemap page - every reachable view, grouped
use leptos::prelude::*;

use crate::catalog::PRODUCTS;
use crate::components::{Glyph, Icon, SectionTitle};
use crate::router::{PageId, use_router};

const MAIN_PAGES: [(PageId, &str); 5] = [
    (PageId::Home, "Accueil"),
    (PageId::Products, "Nos Gammes de Fenêtres"),
    (PageId::Gallery, "Réalisations"),
    (PageId::About, "L'Entreprise"),
    (PageId::Contact, "Contact & Devis"),
];

const INFO_PAGES: [(PageId, &str); 2] = [
    (PageId::Legal, "Mentions Légales"),
    (PageId::Privacy, "Politique de Confidentialité"),
];

#[component]
fn SitemapLink(page: PageId, label: &'static str) -> impl IntoView {
    let router = use_router();
    view! {
        <li>
            <button
                class="text-lg text-slate-700 hover:text-amber-500 flex items-center gap-2 transition-colors"
                on:click=move |_| router.navigate(page)
            >
                <Icon glyph=Glyph::ChevronRight size=16 />
                {label}
            </button>
        </li>
    }
}

fn links(entries: impl IntoIterator<Item = (PageId, &'static str)>) -> impl IntoView {
    entries
        .into_iter()
        .map(|(page, label)| view! { <SitemapLink page=page label=label /> })
        .collect_view()
}

#[component]
pub fn SitemapPage() -> impl IntoView {
    let products = PRODUCTS.iter().map(|p| (PageId::Product(p.id), p.title));

    view! {
        <div class="pt-24 pb-20 bg-white min-h-screen">
            <div class="container mx-auto px-4 max-w-4xl">
                <SectionTitle title="Plan du site" subtitle="Vue d'ensemble de la navigation." centered=false />

                <div class="grid md:grid-cols-2 gap-12">
                    <div>
                        <h3 class="text-2xl font-serif font-bold text-slate-900 mb-6 flex items-center gap-2">
                            <Icon glyph=Glyph::Layout class="text-amber-500" />
                            "Pages Principales"
                        </h3>
                        <ul class="space-y-4">{links(MAIN_PAGES)}</ul>
                    </div>

                    <div>
                        <h3 class="text-2xl font-serif font-bold text-slate-900 mb-6 flex items-center gap-2">
                            <Icon glyph=Glyph::Star class="text-amber-500" />
                            "Nos Produits"
                        </h3>
                        <ul class="space-y-4">{links(products)}</ul>

                        <h3 class="text-2xl font-serif font-bold text-slate-900 mb-6 mt-10 flex items-center gap-2">
                            <Icon glyph=Glyph::FileText class="text-amber-500" />
                            "Informations"
                        </h3>
                        <ul class="space-y-4">{links(INFO_PAGES)}</ul>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sitemap_reaches_every_page() {
        let mut listed: Vec<PageId> = MAIN_PAGES
            .iter()
            .chain(INFO_PAGES.iter())
            .map(|(page, _)| *page)
            .chain(PRODUCTS.iter().map(|p| PageId::Product(p.id)))
            .collect();
        listed.push(PageId::Sitemap);
        listed.sort_by_key(|p| p.slug());
        let mut all = PageId::ALL.to_vec();
        all.sort_by_key(|p| p.slug());
        assert_eq!(listed, all);
    }
}
