// Product detail page - one per catalog entry
use leptos::prelude::*;

use crate::catalog::ProductInfo;
use crate::components::{Glyph, Icon, LeadForm, SectionTitle};

#[component]
pub fn ProductDetailPage(product: &'static ProductInfo) -> impl IntoView {
    let features = product
        .features
        .iter()
        .map(|f| {
            view! {
                <div class="bg-slate-50 p-6 rounded-xl border border-slate-100 flex gap-4">
                    <div class="bg-white p-3 rounded-full h-fit shadow-sm text-amber-500">
                        <Icon glyph=f.icon size=24 />
                    </div>
                    <div>
                        <h4 class="font-bold text-slate-900 mb-1">{f.title}</h4>
                        <p class="text-sm text-slate-600">{f.text}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let details = product
        .details
        .iter()
        .map(|d| {
            view! {
                <li class="flex items-start gap-3 text-slate-300">
                    <Icon glyph=Glyph::CheckCircle size=20 class="text-green-500 min-w-[20px] mt-1" />
                    <span>{*d}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="pt-24 pb-20 bg-white min-h-screen">
            <div class="relative h-[50vh] md:h-[60vh] overflow-hidden">
                <img src=product.hero_img alt=product.title class="w-full h-full object-cover" />
                <div class="absolute inset-0 bg-slate-900/60 flex items-center justify-center text-center px-4">
                    <div class="max-w-4xl animate-fade-in-up">
                        <span class="inline-block bg-amber-500 text-white text-xs font-bold px-3 py-1 rounded-full mb-4 uppercase tracking-wider">
                            "Gamme Premium"
                        </span>
                        <h1 class="text-4xl md:text-6xl font-serif font-bold text-white mb-4">{product.title}</h1>
                        <p class="text-xl text-slate-200">{product.subtitle}</p>
                    </div>
                </div>
            </div>

            <div class="container mx-auto px-4 py-16">
                <div class="grid lg:grid-cols-3 gap-12">
                    <div class="lg:col-span-2 space-y-12">
                        <div>
                            <SectionTitle
                                title="Description & Bénéfices"
                                subtitle="Pourquoi choisir cette solution pour votre habitat ?"
                                centered=false
                            />
                            <p class="text-lg text-slate-700 leading-relaxed mb-8">{product.description}</p>
                            <div class="grid md:grid-cols-2 gap-6">{features}</div>
                        </div>

                        <div class="bg-slate-900 text-white p-8 rounded-2xl">
                            <h3 class="text-2xl font-serif font-bold mb-6 flex items-center gap-3">
                                <Icon glyph=Glyph::Ruler class="text-amber-500" />
                                "Caractéristiques Techniques"
                            </h3>
                            <ul class="space-y-4">{details}</ul>
                        </div>
                    </div>

                    <div class="lg:col-span-1">
                        <div class="sticky top-32">
                            <div class="bg-amber-50 border border-amber-200 rounded-xl p-6 mb-8 text-center">
                                <h4 class="font-bold text-amber-900 text-lg mb-2">"Partenaire Officiel Schüco"</h4>
                                <p class="text-sm text-amber-800 mb-4">
                                    "L'assurance d'une fabrication et d'une pose conformes aux standards allemands."
                                </p>
                                <Icon glyph=Glyph::ShieldCheck size=48 class="text-amber-500 mx-auto opacity-80" />
                            </div>
                            <LeadForm compact=true subject=product.title />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
