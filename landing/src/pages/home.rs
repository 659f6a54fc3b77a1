// Home page - hero with quote form, highlights, reasons, reviews
use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, Card, Glyph, Icon, LeadForm, Rating, SectionTitle};
use crate::content::{FEATURED_REVIEW, HIGHLIGHTS, REASONS, TESTIMONIALS, TRUST_BADGES};
use crate::router::{PageId, ProductId, use_router};

#[component]
pub fn HomePage() -> impl IntoView {
    let router = use_router();

    view! {
        <Hero />

        <section class="bg-slate-100 py-10 border-b border-slate-200">
            <div class="container mx-auto px-4">
                <p class="text-center text-slate-500 uppercase tracking-widest text-sm font-bold mb-6">
                    "Ils nous font confiance & Certifications"
                </p>
                <div class="flex flex-wrap justify-center items-center gap-8 md:gap-16 opacity-70 grayscale hover:grayscale-0 transition-all duration-500">
                    <div class="text-2xl font-bold text-slate-800 flex items-center gap-2">
                        <Icon glyph=Glyph::ShieldCheck size=32 />
                        "SCHÜCO"
                    </div>
                    {TRUST_BADGES
                        .into_iter()
                        .map(|badge| view! { <div class="text-xl font-bold text-slate-800">{badge}</div> })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <SectionTitle
                    title="Nos Solutions Premium"
                    subtitle="Des matériaux nobles et une technologie de pointe pour votre confort."
                />
                <div class="grid md:grid-cols-3 gap-8">
                    {HIGHLIGHTS
                        .iter()
                        .map(|item| {
                            let page = PageId::Product(item.product);
                            view! {
                                <Card class="group cursor-pointer" on_click=move |_| router.navigate(page)>
                                    <div class="relative h-64 overflow-hidden">
                                        <img
                                            src=item.img
                                            alt=item.title
                                            class="w-full h-full object-cover transition duration-700 group-hover:scale-110"
                                        />
                                        {item.badge.map(|b| view! {
                                            <span class="absolute top-4 right-4 bg-amber-500 text-white text-xs font-bold px-3 py-1 rounded-full">{b}</span>
                                        })}
                                    </div>
                                    <div class="p-6">
                                        <h3 class="text-xl font-bold text-slate-900 mb-2">{item.title}</h3>
                                        <p class="text-slate-600 mb-4">{item.description}</p>
                                        <span class="text-blue-700 font-semibold flex items-center gap-1 group-hover:gap-3 transition-all">
                                            "Découvrir" <Icon glyph=Glyph::ArrowRight size=16 />
                                        </span>
                                    </div>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center mt-12">
                    <Button
                        variant=ButtonVariant::Outline
                        class="!text-slate-900 !border-slate-300 hover:!bg-slate-100 mx-auto"
                        on_click=move |_| router.navigate(PageId::Product(ProductId::Porte))
                    >
                        "Découvrir aussi nos Portes Blindées"
                    </Button>
                </div>
            </div>
        </section>

        <WhyUs />
        <Testimonials />

        <div class="md:hidden fixed bottom-4 left-4 right-4 z-50">
            <Button
                class="w-full shadow-2xl animate-subtle-pulse"
                on_click=move |_| router.navigate(PageId::Contact)
            >
                "Demander un devis gratuit"
            </Button>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let router = use_router();

    view! {
        <section class="relative min-h-[90vh] flex items-center bg-slate-900 overflow-hidden">
            <div class="absolute inset-0 opacity-40">
                <img
                    src="https://images.unsplash.com/photo-1600607686527-6fb886090705?ixlib=rb-1.2.1&auto=format&fit=crop&w=2000&q=80"
                    alt="Fenêtres modernes Schüco"
                    class="w-full h-full object-cover"
                />
            </div>
            <div class="absolute inset-0 bg-gradient-to-r from-slate-900/90 via-slate-900/50 to-transparent"></div>

            <div class="container mx-auto px-4 relative z-10 grid md:grid-cols-2 gap-12 items-center pt-20">
                <div class="space-y-6 animate-fade-in-up">
                    <div class="inline-block bg-slate-800/80 backdrop-blur border border-slate-600 rounded-full px-4 py-1 text-amber-400 text-sm font-semibold mb-2">
                        "★ Partenaire Officiel Schüco"
                    </div>
                    <h1 class="text-4xl md:text-6xl font-serif font-bold text-white leading-tight">
                        "L'excellence de la " <br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-white">
                            "fenêtre sur mesure"
                        </span>
                    </h1>
                    <p class="text-lg text-slate-300 max-w-lg">
                        "Alliez design, sécurité et isolation thermique. InterPlus Fenêtre installe vos "
                        "menuiseries Schüco avec une précision artisanale en Île-de-France."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 pt-4">
                        <Button on_click=move |_| router.navigate(PageId::Contact)>
                            "Demander un devis gratuit"
                        </Button>
                        <Button variant=ButtonVariant::Outline on_click=move |_| router.navigate(PageId::Products)>
                            "Découvrir nos gammes"
                        </Button>
                    </div>
                    <div class="flex items-center gap-6 pt-8 pb-8 text-sm text-slate-400">
                        <div class="flex items-center gap-2">
                            <Icon glyph=Glyph::CheckCircle size=20 class="text-green-500" />
                            "+10 ans d'expérience"
                        </div>
                        <div class="flex items-center gap-2">
                            <Icon glyph=Glyph::CheckCircle size=20 class="text-green-500" />
                            "Garantie décennale"
                        </div>
                    </div>
                </div>

                <div class="hidden md:block animate-fade-in-right delay-200">
                    <LeadForm compact=true />
                </div>
            </div>
        </section>
    }
}

#[component]
fn WhyUs() -> impl IntoView {
    view! {
        <section class="py-12 md:py-20 bg-slate-900 text-white">
            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <SectionTitle
                            title="Pourquoi choisir InterPlus Fenêtre ?"
                            subtitle="Plus qu'un installateur, un partenaire de confiance."
                            centered=false
                            dark=true
                            class="mb-8"
                        />
                        <div class="space-y-6 mt-4">
                            {REASONS
                                .iter()
                                .map(|r| view! {
                                    <div class="flex gap-4">
                                        <div class="bg-blue-600/20 p-3 rounded-lg h-fit">
                                            <Icon glyph=r.icon class="w-6 h-6 text-blue-400" />
                                        </div>
                                        <div>
                                            <h4 class="text-lg font-bold mb-1">{r.title}</h4>
                                            <p class="text-slate-400 text-sm leading-relaxed">{r.text}</p>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="relative">
                        <div class="absolute inset-0 bg-amber-500 rounded-2xl transform translate-x-4 translate-y-4"></div>
                        <img
                            src="https://images.unsplash.com/photo-1595846519845-68e298c2edd8?auto=format&fit=crop&w=800&q=80"
                            alt="Poseur InterPlus"
                            class="relative rounded-2xl shadow-2xl w-full object-cover h-[500px]"
                        />
                        <div class="absolute bottom-10 left-[-20px] bg-white text-slate-900 p-6 rounded-lg shadow-xl max-w-xs hidden md:block">
                            <div class="flex text-amber-500 mb-2"><Rating /></div>
                            <p class="font-serif italic text-sm">{format!("\"{}\"", FEATURED_REVIEW.text)}</p>
                            <p class="text-xs font-bold mt-2 text-slate-500">
                                {format!("- {}, {}", FEATURED_REVIEW.name, FEATURED_REVIEW.location)}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="py-20 bg-slate-50">
            <div class="container mx-auto px-4">
                <SectionTitle title="La satisfaction de nos clients" subtitle="La meilleure preuve de notre expertise." />
                <div class="grid md:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! {
                            <Card class="p-8">
                                <div class="flex items-center gap-1 mb-4 text-amber-500"><Rating size=18 /></div>
                                <p class="text-slate-700 italic mb-6">{format!("\"{}\"", t.text)}</p>
                                <div class="flex items-center gap-3">
                                    <div class="w-10 h-10 bg-slate-200 rounded-full flex items-center justify-center font-bold text-slate-600">
                                        {t.initial().to_string()}
                                    </div>
                                    <div>
                                        <h5 class="font-bold text-slate-900">{t.name}</h5>
                                        <span class="text-xs text-slate-500">{t.location}</span>
                                    </div>
                                </div>
                            </Card>
                        })
                        .collect_view()}
                </div>
                <div class="mt-12 text-center">
                    <Button variant=ButtonVariant::Outline class="!text-slate-600 !border-slate-300 hover:!bg-slate-100 mx-auto">
                        "Voir plus d'avis sur Google"
                    </Button>
                </div>
            </div>
        </section>
    }
}
