use leptos::prelude::*;

use super::icons::{Glyph, Icon};
use crate::catalog;
use crate::config::SITE;
use crate::router::{PageId, ProductId, use_router};

const FOOTER_PRODUCTS: [ProductId; 4] = [
    ProductId::Alu,
    ProductId::Pvc,
    ProductId::Baie,
    ProductId::Porte,
];

#[component]
pub fn Footer() -> impl IntoView {
    let router = use_router();

    let nav_item = move |page: PageId, label: &'static str| {
        view! {
            <li class="hover:text-amber-500 cursor-pointer transition" on:click=move |_| router.navigate(page)>
                {label}
            </li>
        }
    };

    let products = FOOTER_PRODUCTS
        .into_iter()
        .map(|id| {
            view! {
                <li
                    class="hover:text-white cursor-pointer transition"
                    on:click=move |_| router.navigate(PageId::Product(id))
                >
                    {catalog::product(id).title}
                </li>
            }
        })
        .collect_view();

    let legal_link = move |page: PageId, label: &'static str| {
        view! {
            <span class="cursor-pointer hover:text-white" on:click=move |_| router.navigate(page)>
                {label}
            </span>
        }
    };

    view! {
        <footer class="bg-slate-900 text-white pt-16 pb-8">
            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-4 gap-8 mb-12">
                    <div class="col-span-1 md:col-span-1">
                        <div class="text-2xl font-serif font-bold mb-4 tracking-tighter flex items-center gap-2">
                            "InterPlus " <span class="text-amber-500 text-4xl">"."</span> " Fenêtre"
                        </div>
                        <p class="text-slate-400 text-sm leading-relaxed mb-6">
                            "Spécialiste de la fenêtre premium et partenaire officiel Schüco. "
                            "Nous transformons votre habitat avec exigence et passion."
                        </p>
                        <div class="flex gap-4">
                            <a href="#" class="w-10 h-10 bg-slate-800 rounded-lg flex items-center justify-center hover:bg-blue-600 transition-colors duration-300">
                                <Icon glyph=Glyph::Facebook size=20 />
                            </a>
                            <a href="#" class="w-10 h-10 bg-slate-800 rounded-lg flex items-center justify-center hover:bg-pink-600 transition-colors duration-300">
                                <Icon glyph=Glyph::Instagram size=20 />
                            </a>
                            <a href="#" class="w-10 h-10 bg-slate-800 rounded-lg flex items-center justify-center hover:bg-blue-700 transition-colors duration-300">
                                <Icon glyph=Glyph::Linkedin size=20 />
                            </a>
                        </div>
                    </div>

                    <div>
                        <h4 class="font-bold text-lg mb-6">"Navigation"</h4>
                        <ul class="space-y-3 text-slate-400 text-sm">
                            {nav_item(PageId::Home, "Accueil")}
                            {nav_item(PageId::Products, "Nos Fenêtres")}
                            {nav_item(PageId::Gallery, "Réalisations")}
                            {nav_item(PageId::About, "L'Entreprise")}
                            {nav_item(PageId::Sitemap, "Plan du site")}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-bold text-lg mb-6">"Produits"</h4>
                        <ul class="space-y-3 text-slate-400 text-sm">{products}</ul>
                    </div>

                    <div>
                        <h4 class="font-bold text-lg mb-6">"Contact"</h4>
                        <ul class="space-y-3 text-slate-400 text-sm">
                            <li class="flex items-center gap-2"><Icon glyph=Glyph::Phone size=14 />{SITE.phone_display}</li>
                            <li class="flex items-center gap-2"><Icon glyph=Glyph::Mail size=14 />{SITE.email}</li>
                            <li class="flex items-center gap-2"><Icon glyph=Glyph::MapPin size=14 />{SITE.service_area}</li>
                            <li class="flex items-center gap-2"><Icon glyph=Glyph::Clock size=14 />{SITE.opening_hours}</li>
                        </ul>
                    </div>
                </div>

                <div class="border-t border-slate-800 pt-8 flex flex-col md:flex-row justify-between items-center text-xs text-slate-500">
                    <p>{format!("© 2024 {}. Tous droits réservés.", SITE.company)}</p>
                    <div class="flex gap-4 mt-4 md:mt-0">
                        {legal_link(PageId::Legal, "Mentions Légales")}
                        {legal_link(PageId::Privacy, "Politique de Confidentialité")}
                        {legal_link(PageId::Sitemap, "Plan du site")}
                    </div>
                </div>
            </div>
        </footer>
    }
}
