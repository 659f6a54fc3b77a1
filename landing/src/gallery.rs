//! Completed projects and the category filter on the gallery page.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Renovation,
    Neuf,
    Appartement,
    Maison,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Renovation => "Rénovation",
            Category::Neuf => "Neuf",
            Category::Appartement => "Appartement",
            Category::Maison => "Maison",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryProject {
    /// Unsplash base URL, sizing parameters are appended when rendering.
    pub img: &'static str,
    pub kind: &'static str,
    pub categories: &'static [Category],
    pub location: &'static str,
    pub description: &'static str,
}

impl GalleryProject {
    pub fn thumbnail(&self) -> String {
        format!("{}?auto=format&fit=crop&w=600&q=80", self.img)
    }

    pub fn has(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

/// Active filter; `All` is the "Tous" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryFilter {
    #[default]
    All,
    Only(Category),
}

impl GalleryFilter {
    /// Filter buttons, display order.
    pub const ALL_FILTERS: [GalleryFilter; 5] = [
        GalleryFilter::All,
        GalleryFilter::Only(Category::Renovation),
        GalleryFilter::Only(Category::Neuf),
        GalleryFilter::Only(Category::Appartement),
        GalleryFilter::Only(Category::Maison),
    ];

    pub fn label(self) -> &'static str {
        match self {
            GalleryFilter::All => "Tous",
            GalleryFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(self, project: &GalleryProject) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Only(c) => project.has(c),
        }
    }
}


pub const EMPTY_GALLERY_MESSAGE: &str =
    "Aucun projet trouvé pour cette catégorie pour le moment.";

pub static PROJECTS: [GalleryProject; 6] = [
    GalleryProject {
        img: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c",
        kind: "Rénovation Maison",
        categories: &[Category::Renovation, Category::Maison],
        location: "Versailles",
        description: "Remplacement complet bois par Aluminium Schüco Noir.",
    },
    GalleryProject {
        img: "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3",
        kind: "Appartement",
        categories: &[Category::Appartement, Category::Renovation],
        location: "Paris 7",
        description: "Fenêtres PVC acoustiques sur rue passante.",
    },
    GalleryProject {
        img: "https://images.unsplash.com/photo-1600210492493-0946911123ea",
        kind: "Extension",
        categories: &[Category::Maison, Category::Renovation],
        location: "Boulogne",
        description: "Grande baie vitrée coulissante 4 vantaux.",
    },
    GalleryProject {
        img: "https://images.unsplash.com/photo-1605276374104-dee2a0ed3cd6",
        kind: "Neuf",
        categories: &[Category::Neuf, Category::Maison],
        location: "Saint-Cloud",
        description: "Ensemble des menuiseries villa moderne.",
    },
    GalleryProject {
        img: "https://images.unsplash.com/photo-1556912172-45b7abe8b7e1",
        kind: "Rénovation",
        categories: &[Category::Renovation, Category::Appartement],
        location: "Neuilly",
        description: "Conservation des vitraux existants avec survitrage.",
    },
    GalleryProject {
        img: "https://images.unsplash.com/photo-1628744876497-eb30460be9f6",
        kind: "Maison",
        categories: &[Category::Maison, Category::Renovation],
        location: "Rueil-Malmaison",
        description: "Porte d'entrée aluminium blindée et fenêtres assorties.",
    },
];

/// Projects visible under `filter`, catalog order preserved.
pub fn filter_projects(catalog: &[GalleryProject], filter: GalleryFilter) -> Vec<&GalleryProject> {
    catalog.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn locations(projects: &[&GalleryProject]) -> Vec<&'static str> {
        projects.iter().map(|p| p.location).collect()
    }

    #[test]
    fn all_returns_full_catalog_in_order() {
        let shown = filter_projects(&PROJECTS, GalleryFilter::All);
        assert_eq!(
            locations(&shown),
            vec!["Versailles", "Paris 7", "Boulogne", "Saint-Cloud", "Neuilly", "Rueil-Malmaison"]
        );
    }

    #[test]
    fn tag_filter_keeps_order() {
        let shown = filter_projects(&PROJECTS, GalleryFilter::Only(Category::Appartement));
        assert_eq!(locations(&shown), vec!["Paris 7", "Neuilly"]);

        let shown = filter_projects(&PROJECTS, GalleryFilter::Only(Category::Neuf));
        assert_eq!(locations(&shown), vec!["Saint-Cloud"]);
    }

    #[test]
    fn unused_tag_yields_empty_list() {
        let catalog = [PROJECTS[1], PROJECTS[4]];
        let shown = filter_projects(&catalog, GalleryFilter::Only(Category::Neuf));
        assert!(shown.is_empty());
    }

    #[test]
    fn filter_buttons_start_with_sentinel() {
        let labels: Vec<&str> = GalleryFilter::ALL_FILTERS.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Tous", "Rénovation", "Neuf", "Appartement", "Maison"]);
    }

    #[test]
    fn thumbnail_appends_sizing() {
        assert!(PROJECTS[0].thumbnail().ends_with("?auto=format&fit=crop&w=600&q=80"));
    }
}
