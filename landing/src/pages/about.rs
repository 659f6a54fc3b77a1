// About page - company story, values, call to action
use leptos::prelude::*;

use crate::components::{Button, SectionTitle};
use crate::content::{ABOUT_STATS, VALUES};
use crate::router::{PageId, use_router};

#[component]
pub fn AboutPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="pt-24 pb-20 bg-white min-h-screen">
            <div class="container mx-auto px-4">
                <SectionTitle
                    title="Notre Maison"
                    subtitle="L'artisanat au service de la performance depuis plus de 10 ans."
                />

                <div class="grid md:grid-cols-2 gap-12 mb-20 items-center">
                    <div class="space-y-6">
                        <p class="text-lg text-slate-700 leading-relaxed">
                            "Fondée avec la conviction que la fenêtre est un élément central du bien-être chez soi, "
                            <span class="font-bold text-slate-900">"InterPlus Fenêtre"</span>
                            " s'est imposée comme la référence de la menuiserie premium en Île-de-France."
                        </p>
                        <p class="text-lg text-slate-700 leading-relaxed">
                            "Notre partenariat officiel avec "
                            <span class="font-bold text-slate-900">"Schüco"</span>
                            ", leader mondial des systèmes de fenêtres, nous permet de vous proposer des produits "
                            "à la pointe de l'innovation technologique, tout en garantissant une installation "
                            "locale, soignée et réactive."
                        </p>
                        <div class="grid grid-cols-2 gap-6 pt-4">
                            {ABOUT_STATS
                                .iter()
                                .map(|s| view! {
                                    <div class="bg-slate-50 p-4 rounded-lg border border-slate-100">
                                        <h4 class="font-bold text-slate-900 text-xl mb-1">{s.figure}</h4>
                                        <p class="text-sm text-slate-500">{s.caption}</p>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="relative">
                        <img
                            src="https://images.unsplash.com/photo-1542744173-8e7e53415bb0?auto=format&fit=crop&w=800&q=80"
                            alt="Equipe"
                            class="rounded-xl shadow-2xl"
                        />
                    </div>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {VALUES
                        .iter()
                        .map(|v| view! {
                            <div class="text-center p-8 rounded-xl bg-slate-50 border border-slate-100 shadow-md hover:shadow-xl hover:bg-white hover:-translate-y-2 hover:border-amber-500 transition-all duration-300 group">
                                <div class="w-12 h-1 bg-amber-500 rounded mx-auto mb-6 group-hover:w-20 transition-all duration-300 opacity-50 group-hover:opacity-100"></div>
                                <h4 class="font-serif font-bold text-xl mb-3 text-slate-800">{v.title}</h4>
                                <p class="text-slate-600 leading-relaxed">{v.text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>

                <div class="mt-20 text-center bg-slate-900 rounded-2xl p-10 md:p-16 text-white relative overflow-hidden">
                    <div class="relative z-10">
                        <h3 class="text-3xl font-serif font-bold mb-4">"Prêt à discuter de votre projet ?"</h3>
                        <p class="text-slate-300 mb-8 max-w-2xl mx-auto">
                            "Rencontrez nos experts techniques pour une étude personnalisée et gratuite de vos besoins."
                        </p>
                        <Button class="mx-auto" on_click=move |_| router.navigate(PageId::Contact)>
                            "Prendre Rendez-vous"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}
