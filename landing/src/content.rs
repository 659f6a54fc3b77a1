//! Static copy for the home, products and about pages.

use crate::components::icons::Glyph;
use crate::router::ProductId;

/// Product teaser on the home page.
pub struct Highlight {
    pub product: ProductId,
    pub title: &'static str,
    pub description: &'static str,
    pub img: &'static str,
    pub badge: Option<&'static str>,
}

pub static HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        product: ProductId::Alu,
        title: "Fenêtres Aluminium",
        description: "Finesse, robustesse et luminosité maximale. La signature Schüco.",
        img: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?auto=format&fit=crop&w=800&q=80",
        badge: Some("Best-Seller"),
    },
    Highlight {
        product: ProductId::Pvc,
        title: "Fenêtres PVC",
        description: "Le meilleur rapport qualité/prix avec une isolation thermique exceptionnelle.",
        img: "https://images.unsplash.com/photo-1513694203232-719a280e022f?auto=format&fit=crop&w=800&q=80",
        badge: None,
    },
    Highlight {
        product: ProductId::Baie,
        title: "Baies Vitrées",
        description: "Ouvrez votre intérieur sur l'extérieur. Coulissants haute performance.",
        img: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&w=800&q=80",
        badge: None,
    },
];

/// Icon + title + text row.
pub struct Reason {
    pub icon: Glyph,
    pub title: &'static str,
    pub text: &'static str,
}

pub static REASONS: [Reason; 4] = [
    Reason {
        icon: Glyph::Thermometer,
        title: "Isolation Maximale",
        text: "Réduisez votre facture énergétique jusqu'à 30% grâce à nos profilés haute performance.",
    },
    Reason {
        icon: Glyph::ShieldCheck,
        title: "Sécurité Renforcée",
        text: "Vitrages anti-effraction et quincaillerie de sécurité Schüco intégrée.",
    },
    Reason {
        icon: Glyph::PenTool,
        title: "Pose Certifiée",
        text: "Nos propres équipes de poseurs, formés aux dernières normes DTU.",
    },
    Reason {
        icon: Glyph::Ruler,
        title: "100% Sur Mesure",
        text: "Chaque fenêtre est fabriquée au millimètre près pour s'adapter parfaitement à votre habitat.",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub text: &'static str,
}

impl Testimonial {
    /// Avatar letter.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Quote pinned on the "why us" photo.
pub static FEATURED_REVIEW: Testimonial = Testimonial {
    name: "Marc D.",
    location: "Versailles",
    text: "Une équipe ponctuelle et un chantier laissé impeccable. La qualité des fenêtres change vraiment la vie !",
};

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sophie L.",
        location: "Paris 16ème",
        text: "Nous cherchions des menuiseries haut de gamme pour notre appartement haussmannien. Le rendu Aluminium Schüco est magnifique.",
    },
    Testimonial {
        name: "Thomas B.",
        location: "Boulogne",
        text: "Service commercial à l'écoute et installation rapide. L'isolation phonique est impressionnante, je n'entends plus la rue.",
    },
    Testimonial {
        name: "Valérie M.",
        location: "Saint-Germain",
        text: "Je recommande InterPlus pour leur sérieux. Devis respecté et finitions parfaites.",
    },
];

pub const TRUST_BADGES: [&str; 3] = ["RGE QUALIBAT", "CSTB Certifié", "CEKAL"];

pub struct Value {
    pub title: &'static str,
    pub text: &'static str,
}

pub static VALUES: [Value; 3] = [
    Value {
        title: "Transparence",
        text: "Des devis clairs, détaillés, sans coûts cachés.",
    },
    Value {
        title: "Excellence",
        text: "Nous visons la perfection, de la prise de mesure à la dernière vis.",
    },
    Value {
        title: "Accompagnement",
        text: "Un interlocuteur unique suit votre projet du début à la fin.",
    },
];

pub struct Stat {
    pub figure: &'static str,
    pub caption: &'static str,
}

pub static ABOUT_STATS: [Stat; 2] = [
    Stat {
        figure: "100%",
        caption: "Poseurs salariés (pas de sous-traitance)",
    },
    Stat {
        figure: "98%",
        caption: "Clients satisfaits sur 500+ projets",
    },
];

/// Large alternating range block on the products page.
pub struct Range {
    pub product: ProductId,
    pub title: &'static str,
    pub tagline: &'static str,
    pub text: &'static str,
    pub img: &'static str,
    pub img_alt: &'static str,
    pub badge: Option<&'static str>,
    pub bullets: [&'static str; 2],
}

pub static RANGES: [Range; 2] = [
    Range {
        product: ProductId::Alu,
        title: "Gamme Aluminium Schüco",
        tagline: "Design épuré & Lumière maximale",
        text: "Idéales pour les grandes ouvertures, nos fenêtres aluminium allient finesse des profilés et robustesse incomparable.",
        img: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?ixlib=rb-1.2.1&auto=format&fit=crop&w=1200&q=80",
        img_alt: "Alu",
        badge: Some("Premium"),
        bullets: [
            "Profilés ultra-fins pour +15% de lumière",
            "Sécurité niveau RC2/RC3",
        ],
    },
    Range {
        product: ProductId::Pvc,
        title: "Gamme PVC Haute Performance",
        tagline: "Isolation thermique & Silence",
        text: "La solution idéale pour la rénovation. Nos fenêtres PVC offrent le meilleur coefficient d'isolation du marché.",
        img: "https://images.unsplash.com/photo-1505691938895-1758d7feb511?auto=format&fit=crop&w=1200&q=80",
        img_alt: "PVC",
        badge: None,
        bullets: [
            "Coefficient Uw jusqu'à 0.8 W/m²K",
            "Design contemporain ou mouluré style ancien",
        ],
    },
];

/// "Nous réalisons aussi" chips.
pub const OTHER_SERVICES: [(ProductId, &str); 4] = [
    (ProductId::Porte, "Portes d'Entrée Blindées"),
    (ProductId::Baie, "Baies Coulissantes"),
    (ProductId::Volet, "Volets Roulants"),
    (ProductId::Pergola, "Pergolas"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testimonial_initial_is_first_letter() {
        assert_eq!(TESTIMONIALS[2].initial(), 'V');
        assert_eq!(FEATURED_REVIEW.initial(), 'M');
    }

    #[test]
    fn only_the_first_highlight_has_a_badge() {
        let badges: Vec<_> = HIGHLIGHTS.iter().map(|h| h.badge).collect();
        assert_eq!(badges, vec![Some("Best-Seller"), None, None]);
    }
}
