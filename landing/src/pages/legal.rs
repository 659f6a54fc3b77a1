// Legal notice and privacy policy - static text pages
use leptos::prelude::*;

use crate::components::SectionTitle;
use crate::config::SITE;

#[component]
fn LegalSection(heading: &'static str, children: Children) -> impl IntoView {
    view! {
        <section>
            <h3 class="text-xl font-bold text-slate-900 mb-2">{heading}</h3>
            {children()}
        </section>
    }
}

#[component]
pub fn LegalPage() -> impl IntoView {
    view! {
        <div class="pt-24 pb-20 bg-white min-h-screen">
            <div class="container mx-auto px-4 max-w-4xl">
                <SectionTitle
                    title="Mentions Légales"
                    subtitle="Informations juridiques sur la société InterPlus Fenêtre."
                    centered=false
                />

                <div class="space-y-8 text-slate-700">
                    <LegalSection heading="1. Éditeur du Site">
                        <p>
                            "Le présent site est édité par la société " <strong>{SITE.company}</strong> "." <br />
                            <strong>"Forme juridique :"</strong> " SAS au capital de 10 000 €" <br />
                            <strong>"Siège social :"</strong> " " {SITE.showroom_address} <br />
                            <strong>"RCS :"</strong> " Bobigny B 123 456 789" <br />
                            <strong>"Numéro de TVA Intracommunautaire :"</strong> " FR 12 123456789" <br />
                            <strong>"Directeur de la publication :"</strong> " La Direction"
                        </p>
                    </LegalSection>

                    <LegalSection heading="2. Hébergement">
                        <p>
                            "Ce site est hébergé sur des serveurs sécurisés en Europe." <br />
                            "Responsable technique : Service Informatique InterPlus."
                        </p>
                    </LegalSection>

                    <LegalSection heading="3. Propriété Intellectuelle">
                        <p>
                            "L'ensemble de ce site relève de la législation française et internationale sur le "
                            "droit d'auteur et la propriété intellectuelle. Tous les droits de reproduction sont "
                            "réservés, y compris pour les documents téléchargeables et les représentations "
                            "iconographiques et photographiques."
                        </p>
                    </LegalSection>

                    <LegalSection heading="4. Contact">
                        <p>
                            "Pour toute question concernant ces mentions légales, vous pouvez nous contacter à :" <br />
                            <strong>"Email :"</strong> " "
                            <a href=SITE.mailto() class="text-blue-600 hover:underline">{SITE.email}</a> <br />
                            <strong>"Téléphone :"</strong> " " {SITE.phone_display}
                        </p>
                    </LegalSection>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="pt-24 pb-20 bg-white min-h-screen">
            <div class="container mx-auto px-4 max-w-4xl">
                <SectionTitle
                    title="Politique de Confidentialité"
                    subtitle="Engagement sur la protection de vos données personnelles."
                    centered=false
                />

                <div class="space-y-8 text-slate-700">
                    <div class="bg-blue-50 p-6 rounded-lg border border-blue-100">
                        <p class="text-sm">
                            "InterPlus Fenêtre s'engage à ce que la collecte et le traitement de vos données, "
                            "effectués à partir du site interplus-fenetre.fr, soient conformes au règlement "
                            "général sur la protection des données (RGPD) et à la loi Informatique et Libertés."
                        </p>
                    </div>

                    <LegalSection heading="1. Données collectées">
                        <p>
                            "Nous limitons la collecte des données personnelles au strict nécessaire "
                            "(minimisation des données). Les données collectées via notre formulaire de "
                            "contact/devis (Nom, Email, Téléphone, Adresse, Projet) sont indispensables pour :"
                        </p>
                        <ul class="list-disc pl-5 mt-2 space-y-1">
                            <li>"Traiter votre demande de devis."</li>
                            <li>"Vous contacter pour un rendez-vous technique."</li>
                            <li>"Assurer le suivi commercial de votre projet."</li>
                        </ul>
                    </LegalSection>

                    <LegalSection heading="2. Destinataires des données">
                        <p>
                            "Les données personnelles recueillies sont traitées uniquement par les services "
                            "internes d'InterPlus Fenêtre (commercial et technique). Aucune donnée n'est vendue "
                            "ou transmise à des tiers à des fins publicitaires."
                        </p>
                    </LegalSection>

                    <LegalSection heading="3. Durée de conservation">
                        <p>
                            "Les données sont conservées pendant toute la durée de la relation commerciale et "
                            "peuvent être archivées conformément aux durées légales de prescription (ex: 10 ans "
                            "pour les factures et garanties décennales). Pour les prospects sans suite, les "
                            "données sont conservées maximum 3 ans."
                        </p>
                    </LegalSection>

                    <LegalSection heading="4. Vos droits">
                        <p>
                            "Vous disposez d'un droit d'accès, de rectification, d'effacement et de portabilité "
                            "de vos données. Vous pouvez exercer ces droits en nous contactant :"
                        </p>
                        <div class="mt-2 pl-4 border-l-4 border-amber-500">
                            <strong>"Par courrier :"</strong>
                            {format!(" DPO - {}, {}", SITE.company, SITE.showroom_address)}
                            <br />
                            <strong>"Par email :"</strong> " " {SITE.email}
                        </div>
                    </LegalSection>
                </div>
            </div>
        </div>
    }
}
