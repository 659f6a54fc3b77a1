// Contact page - company channels + the full quote form
use leptos::prelude::*;

use crate::components::{Glyph, Icon, LeadForm};
use crate::config::SITE;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="pt-24 pb-20 bg-white min-h-screen">
            <div class="container mx-auto px-4">
                <div class="grid lg:grid-cols-2 gap-12">
                    <div>
                        <h1 class="text-4xl font-serif font-bold text-slate-900 mb-6">"Contactez-nous"</h1>
                        <p class="text-lg text-slate-600 mb-8">
                            "Vous avez un projet ? Une question technique ? Nos experts sont à votre écoute "
                            "pour vous conseiller la meilleure solution."
                        </p>

                        <div class="space-y-6 mb-10">
                            <div class="flex items-start gap-4">
                                <div class="bg-blue-100 p-3 rounded-full text-blue-700">
                                    <Icon glyph=Glyph::Phone />
                                </div>
                                <div>
                                    <h4 class="font-bold text-slate-900">"Téléphone"</h4>
                                    <p class="text-slate-600 mb-1">"Du Lundi au Vendredi, 9h - 19h"</p>
                                    <a href=SITE.phone_href class="text-xl font-bold text-blue-700 hover:text-blue-800">
                                        {SITE.phone_display}
                                    </a>
                                </div>
                            </div>

                            <div class="flex items-start gap-4">
                                <div class="bg-amber-100 p-3 rounded-full text-amber-600">
                                    <Icon glyph=Glyph::Mail />
                                </div>
                                <div>
                                    <h4 class="font-bold text-slate-900">"Email"</h4>
                                    <p class="text-slate-600 mb-1">"Réponse sous 24h ouvrées"</p>
                                    <a href=SITE.mailto() class="font-bold text-slate-900 underline">{SITE.email}</a>
                                </div>
                            </div>

                            <div class="flex items-start gap-4">
                                <div class="bg-slate-100 p-3 rounded-full text-slate-700">
                                    <Icon glyph=Glyph::MapPin />
                                </div>
                                <div>
                                    <h4 class="font-bold text-slate-900">"Showroom (Sur RDV)"</h4>
                                    <p class="text-slate-600">{SITE.showroom_address}</p>
                                </div>
                            </div>
                        </div>

                        <div class="w-full h-64 bg-slate-200 rounded-xl overflow-hidden relative">
                            <div class="absolute inset-0 flex items-center justify-center text-slate-400 font-bold bg-slate-300">
                                "Carte Interactive Google Maps"
                            </div>
                        </div>
                    </div>

                    <div>
                        <LeadForm />
                    </div>
                </div>
            </div>
        </div>
    }
}
