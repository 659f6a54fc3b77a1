//! Product catalog: one entry per detail page.

use crate::components::icons::Glyph;
use crate::router::ProductId;

/// A selling point shown as a card on the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Glyph,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductInfo {
    pub id: ProductId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub hero_img: &'static str,
    pub description: &'static str,
    pub features: &'static [Feature],
    /// Technical specification lines, display order.
    pub details: &'static [&'static str],
}

const fn feature(icon: Glyph, title: &'static str, text: &'static str) -> Feature {
    Feature { icon, title, text }
}

pub static PRODUCTS: [ProductInfo; 6] = [
    ProductInfo {
        id: ProductId::Alu,
        title: "Fenêtres Aluminium Schüco",
        subtitle: "L'alliance parfaite du design minimaliste et de la performance thermique.",
        hero_img: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?ixlib=rb-1.2.1&auto=format&fit=crop&w=2000&q=80",
        description: "Nos fenêtres en aluminium Schüco AWS (Aluminium Window System) offrent une finesse de profilés inégalée pour un clair de jour maximal. Idéales pour les architectures contemporaines, elles intègrent une rupture de pont thermique avancée pour répondre aux normes environnementales les plus strictes (RT2020).",
        features: &[
            feature(Glyph::Sun, "Luminosité Maximale", "Ouvrants cachés disponibles pour 15% de lumière en plus."),
            feature(Glyph::ShieldCheck, "Sécurité Certifiée", "Résistance à l'effraction jusqu'à RC3."),
            feature(Glyph::Thermometer, "Isolation Thermique", "Coefficient Uw jusqu'à 0.9 W/m²K."),
            feature(Glyph::PenTool, "Design Sur-Mesure", "Large choix de poignées design et plus de 200 coloris RAL."),
        ],
        details: &[
            "Profilés Schüco AWS 75.SI+ haute isolation",
            "Vitrage : Double ou Triple vitrage isolant (jusqu'à 61mm)",
            "Ferrure : Schüco AvanTec SimplySmart (invisible)",
            "Étanchéité : Triple barrière de joints EPDM",
        ],
    },
    ProductInfo {
        id: ProductId::Pvc,
        title: "Fenêtres PVC Premium",
        subtitle: "La performance thermique absolue sans compromis sur l'esthétique.",
        hero_img: "https://images.unsplash.com/photo-1505691938895-1758d7feb511?auto=format&fit=crop&w=1200&q=80",
        description: "Le système Schüco LivIng fixe de nouveaux standards en matière de confort et de sécurité. Avec ses 7 chambres d'isolation, c'est la solution idéale pour réduire drastiquement vos factures d'énergie tout en bénéficiant d'une isolation phonique exceptionnelle.",
        features: &[
            feature(Glyph::Thermometer, "Isolation Passive", "Compatible maison passive avec un Uw jusqu'à 0.75 W/m²K."),
            feature(Glyph::Wind, "Silence Absolu", "Affaiblissement acoustique jusqu'à 48 dB."),
            feature(Glyph::CheckCircle, "Durabilité", "PVC sans plomb, stable aux UV et 100% recyclable."),
            feature(Glyph::PenTool, "Finitions Uniques", "Disponible en imitation bois ultra-réaliste ou laquage couleur."),
        ],
        details: &[
            "Profilés Schüco LivIng 82 AS (7 chambres)",
            "Joints : Technologie EPDM soudable (premier mondial)",
            "Sécurité : Renforts en acier systématiques",
            "Garantie : 10 ans sur le profilé et la colorimétrie",
        ],
    },
    ProductInfo {
        id: ProductId::Baie,
        title: "Baies Vitrées Coulissantes",
        subtitle: "Effacez les frontières entre votre intérieur et l'extérieur.",
        hero_img: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&w=1200&q=80",
        description: "Les systèmes coulissants et levants-coulissants Schüco permettent de réaliser de très grandes ouvertures vitrées faciles à manœuvrer. Profitez d'une vue panoramique et d'un apport solaire gratuit en hiver grâce à nos solutions haute performance.",
        features: &[
            feature(Glyph::Maximize, "Grandes Dimensions", "Jusqu'à 3m de hauteur et 300kg par vantail."),
            feature(Glyph::Ruler, "Seuil Plat PMR", "Encastrement possible pour un passage sans obstacle."),
            feature(Glyph::Lock, "Sécurité Renforcée", "Verrouillage multipoints et vitrage feuilleté de série."),
            feature(Glyph::Sun, "Confort d'usage", "Système de levage assisté 'SmartStop' pour une manipulation sans effort."),
        ],
        details: &[
            "Système Schüco ASS 70.HI (Aluminium Sliding System)",
            "Type d'ouverture : Coulissant 2, 3, 4 rails ou Galandage",
            "Motorisation : Compatible Schüco TipTronic",
            "Isolation : Rupture de pont thermique par barrettes polyamide",
        ],
    },
    ProductInfo {
        id: ProductId::Porte,
        title: "Portes d'Entrée Blindées",
        subtitle: "La première impression est la bonne. Sécurité et design d'exception.",
        hero_img: "https://images.unsplash.com/photo-1628744876497-eb30460be9f6?auto=format&fit=crop&w=1200&q=80",
        description: "Votre porte d'entrée doit être impénétrable tout en reflétant votre style. Nos portes aluminium monobloc allient une épaisseur de 90mm pour l'isolation à des serrures automatiques 5 points pour votre tranquillité.",
        features: &[
            feature(Glyph::ShieldCheck, "Haute Sécurité", "Serrure automatique 5 points crochets + pênes."),
            feature(Glyph::Thermometer, "Isolation Renforcée", "Panneau isolant de 70 à 90mm (Ud < 0.8)."),
            feature(Glyph::PenTool, "Personnalisation", "Inserts inox, vitrages sablés, barres de tirage LED."),
            feature(Glyph::Lock, "Domotique", "Lecteur d'empreinte digitale ou ouverture smartphone intégrable."),
        ],
        details: &[
            "Système Schüco AD UP 90 (Aluminium Door Universal Platform)",
            "Charnières : Paumelles cachées ou rouleaux design",
            "Seuil : Aluminium à rupture de pont thermique (20mm)",
            "Vitrage : Triple vitrage feuilleté P4A sablé",
        ],
    },
    ProductInfo {
        id: ProductId::Volet,
        title: "Volets Roulants & BSO",
        subtitle: "Sécurité, confort thermique et gestion intelligente de la lumière.",
        hero_img: "https://images.unsplash.com/photo-1613490493576-7fde63acd811?auto=format&fit=crop&w=1200&q=80",
        description: "Nos solutions de fermetures (Volets roulants et Brise-Soleil Orientables) renforcent l'isolation de vos fenêtres, sécurisent votre habitat et s'intègrent à votre système domotique pour une gestion autonome et confortable.",
        features: &[
            feature(Glyph::Sun, "Gestion Solaire", "Maîtrisez la chaleur avec les lames orientables (BSO)."),
            feature(Glyph::ShieldCheck, "Sécurité", "Verrous automatiques anti-relevage et simulation de présence."),
            feature(Glyph::Thermometer, "Isolation", "Tablier aluminium isolé pour une barrière thermique additionnelle."),
            feature(Glyph::Lock, "Domotique", "Pilotage smartphone (Compatible Somfy/Schüco)."),
        ],
        details: &[
            "Lames aluminium double paroi avec mousse isolante",
            "Motorisation silencieuse avec détection d'obstacles",
            "Coffres : Intérieurs, Extérieurs ou Tunnels",
            "Garantie : 7 ans sur la motorisation",
        ],
    },
    ProductInfo {
        id: ProductId::Pergola,
        title: "Pergolas Bioclimatiques",
        subtitle: "Profitez de votre terrasse en toutes saisons.",
        hero_img: "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?auto=format&fit=crop&w=1200&q=80",
        description: "Transformez votre terrasse en une véritable extension de votre maison. Nos pergolas bioclimatiques à lames orientables vous protègent du soleil et de la pluie tout en assurant une ventilation naturelle. Design épuré et structure aluminium robuste.",
        features: &[
            feature(Glyph::Sun, "Bioclimatique", "Régulation naturelle de la température par lames orientables."),
            feature(Glyph::Wind, "Résistance Vent", "Structure testée pour résister aux vents violents."),
            feature(Glyph::Umbrella, "100% Étanche", "Évacuation des eaux de pluie intégrée aux poteaux."),
            feature(Glyph::PenTool, "Options Confort", "Éclairage LED, chauffage infrarouge et stores latéraux."),
        ],
        details: &[
            "Structure 100% Aluminium extrudé thermolaqué",
            "Lames orientables motorisées jusqu'à 135°",
            "Capteurs pluie/vent pour fermeture automatique",
            "Dimensions sur-mesure (jusqu'à 7m sans poteau)",
        ],
    },
];

/// Catalog entry for `id`. `PRODUCTS` is laid out in `ProductId` order.
pub fn product(id: ProductId) -> &'static ProductInfo {
    let idx = match id {
        ProductId::Alu => 0,
        ProductId::Pvc => 1,
        ProductId::Baie => 2,
        ProductId::Porte => 3,
        ProductId::Volet => 4,
        ProductId::Pergola => 5,
    };
    &PRODUCTS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_matches_entry_id() {
        for id in ProductId::ALL {
            assert_eq!(product(id).id, id);
        }
    }

    #[test]
    fn catalog_is_in_product_order() {
        let ids: Vec<ProductId> = PRODUCTS.iter().map(|p| p.id).collect();
        assert_eq!(ids, ProductId::ALL.to_vec());
    }

    #[test]
    fn every_product_has_four_features_and_details() {
        for p in &PRODUCTS {
            assert_eq!(p.features.len(), 4, "{}", p.title);
            assert_eq!(p.details.len(), 4, "{}", p.title);
            assert!(p.hero_img.starts_with("https://"));
        }
    }

    #[test]
    fn feature_order_is_preserved() {
        let titles: Vec<&str> = product(ProductId::Alu).features.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec![
                "Luminosité Maximale",
                "Sécurité Certifiée",
                "Isolation Thermique",
                "Design Sur-Mesure"
            ]
        );
    }
}
