//! Example questions and capability descriptions shown to users.

use serde::Serialize;

/// A themed group of example questions.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExampleGroup {
    pub category: &'static str,
    pub questions: &'static [&'static str],
}

/// One thing the assistant can answer, with sample phrasings.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Capability {
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Capabilities {
    pub categories: &'static [Capability],
    pub features: &'static [&'static str],
}

static EXAMPLES: [ExampleGroup; 6] = [
    ExampleGroup {
        category: "Services",
        questions: &[
            "Quels sont les services médicaux disponibles ?",
            "Liste des services pour les maladies cardiaques",
            "Services de télémédecine disponibles",
        ],
    },
    ExampleGroup {
        category: "Prix",
        questions: &[
            "Combien coûte une consultation en cardiologie ?",
            "Quel est le prix d'une analyse sanguine ?",
            "Tarif pour une téléconsultation",
        ],
    },
    ExampleGroup {
        category: "Examens",
        questions: &[
            "Quels examens sont inclus dans un check-up complet ?",
            "Que comprend une consultation cardiologie ?",
            "Contenu d'une analyse sanguine",
        ],
    },
    ExampleGroup {
        category: "Patients",
        questions: &[
            "Combien de patients sont enregistrés ?",
            "Liste des utilisateurs",
            "Qui sont les patients ?",
        ],
    },
    ExampleGroup {
        category: "Paiements",
        questions: &[
            "Historique des paiements de nawrasse_elbenna",
            "Combien a payé l'utilisateur John ?",
            "Total des paiements pour Marie",
        ],
    },
    ExampleGroup {
        category: "Statistiques",
        questions: &[
            "Statistiques des services",
            "Combien de consultations ?",
            "Nombre de paiements par statut",
        ],
    },
];

static CAPABILITY_LIST: [Capability; 6] = [
    Capability {
        name: "Services médicaux",
        description: "Recherche et liste des services disponibles",
        examples: &["Quels services pour le diabète ?", "Liste des services médicaux"],
    },
    Capability {
        name: "Tarification",
        description: "Information sur les prix des services",
        examples: &["Combien coûte une consultation ?", "Prix d'une analyse"],
    },
    Capability {
        name: "Examens et détails",
        description: "Contenu et détails des services",
        examples: &["Que comprend un check-up ?", "Quels examens sont inclus dans un check-up ?"],
    },
    Capability {
        name: "Gestion patients",
        description: "Information sur les utilisateurs",
        examples: &["Liste des patients", "Combien d'utilisateurs ?"],
    },
    Capability {
        name: "Historique paiements",
        description: "Consultation des paiements",
        examples: &["Paiements de John", "Historique des paiements de Marie"],
    },
    Capability {
        name: "Statistiques",
        description: "Données agrégées et analyses",
        examples: &["Statistiques des services", "Nombre de consultations"],
    },
];

static FEATURES: [&str; 5] = [
    "Compréhension du langage naturel",
    "Traduction automatique en SPARQL",
    "Réponses formatées en français",
    "Support de questions complexes",
    "Suggestions de reformulation",
];

/// Example questions grouped by theme.
pub fn example_questions() -> &'static [ExampleGroup] {
    &EXAMPLES
}

/// Capability overview.
pub fn capabilities() -> Capabilities {
    Capabilities {
        categories: &CAPABILITY_LIST,
        features: &FEATURES,
    }
}
