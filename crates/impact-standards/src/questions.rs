//! Static question sets per activity type and phase.
//!
//! Transcribed from the questionnaire templates the field teams use.
//! No activity currently surveys extra questions at the 3-month follow-up;
//! that phase carries only the transversal block.

use crate::question::{InputKind, QuestionDefinition};

pub(crate) const INCLUSION_NUMERIQUE_AVANT: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: "in_q1",
        prompt: "À quelle fréquence utilisez-vous Internet ?",
        kind: InputKind::Select,
        options: &[
            "Jamais",
            "Rarement (1x/mois)",
            "Hebdomadaire",
            "Quotidiennement",
        ],
        indicator: Some("frequence_utilisation_internet"),
        required: true,
    },
    QuestionDefinition {
        id: "in_q2",
        prompt: "Comment évaluez-vous votre capacité à naviguer sur Internet ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("competence_navigation_web"),
        required: true,
    },
    QuestionDefinition {
        id: "in_q3",
        prompt: "Comment évaluez-vous votre capacité à gérer vos emails ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("competence_email"),
        required: true,
    },
    QuestionDefinition {
        id: "in_q4",
        prompt: "Comment évaluez-vous votre capacité à faire des démarches administratives en ligne ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("competence_demarches_admin"),
        required: true,
    },
    QuestionDefinition {
        id: "in_q5",
        prompt: "Vous sentez-vous confiant(e) face aux outils numériques ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("confiance_outils_num"),
        required: true,
    },
];

pub(crate) const INCLUSION_NUMERIQUE_APRES: &[QuestionDefinition] = &[QuestionDefinition {
    id: "in_q6",
    prompt: "Combien de démarches administratives avez-vous réalisées seul(e) en ligne depuis la formation ?",
    kind: InputKind::Numeric,
    options: &[],
    indicator: Some("nb_demarches_realisees_seul"),
    required: true,
}];

pub(crate) const INCLUSION_NUMERIQUE_SUIVI_6MOIS: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: "in_q7",
        prompt: "Ces compétences numériques vous ont-elles aidé à trouver un emploi ?",
        kind: InputKind::Boolean,
        options: &[],
        indicator: Some("emploi_trouve_grace_num"),
        required: true,
    },
    QuestionDefinition {
        id: "in_q8",
        prompt: "Avez-vous transmis ces compétences à d'autres personnes ?",
        kind: InputKind::Boolean,
        options: &[],
        indicator: Some("transmission_competences"),
        required: true,
    },
    QuestionDefinition {
        id: "in_q9",
        prompt: "Vous sentez-vous moins isolé(e) grâce au numérique ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("reduction_isolement"),
        required: true,
    },
];

pub(crate) const SECOURISME_AVANT: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: "sec_q1",
        prompt: "Avez-vous déjà suivi une formation aux premiers secours ?",
        kind: InputKind::Boolean,
        options: &[],
        indicator: Some("formation_anterieure"),
        required: true,
    },
    QuestionDefinition {
        id: "sec_q2",
        prompt: "Vous sentiriez-vous capable d'intervenir face à une personne inconsciente ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("confiance_intervention"),
        required: true,
    },
    QuestionDefinition {
        id: "sec_q3",
        prompt: "Sauriez-vous comment alerter les secours efficacement ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("connaissance_alertes"),
        required: true,
    },
    QuestionDefinition {
        id: "sec_q4",
        prompt: "Vous sentez-vous capable de garder votre calme en situation d'urgence ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("capacite_garder_calme"),
        required: true,
    },
];

pub(crate) const SECOURISME_APRES: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: "sec_q5",
        prompt: "Comment évaluez-vous votre maîtrise de la Position Latérale de Sécurité (PLS) ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("maitrise_pls"),
        required: true,
    },
    QuestionDefinition {
        id: "sec_q6",
        prompt: "Comment évaluez-vous votre maîtrise de la Réanimation Cardio-Pulmonaire (RCP) ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("maitrise_rcp"),
        required: true,
    },
    QuestionDefinition {
        id: "sec_q7",
        prompt: "Comment évaluez-vous votre capacité à utiliser un défibrillateur (DAE) ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("maitrise_dae"),
        required: true,
    },
];

pub(crate) const SECOURISME_SUIVI_6MOIS: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: "sec_q8",
        prompt: "Combien de fois avez-vous dû intervenir pour porter secours depuis la formation ?",
        kind: InputKind::Numeric,
        options: &[],
        indicator: Some("nb_interventions_reelles"),
        required: true,
    },
    QuestionDefinition {
        id: "sec_q9",
        prompt: "Avez-vous formé ou sensibilisé votre entourage aux gestes de premiers secours ?",
        kind: InputKind::Boolean,
        options: &[],
        indicator: Some("formation_entourage"),
        required: true,
    },
    QuestionDefinition {
        id: "sec_q10",
        prompt: "Cette formation a-t-elle changé vos comportements de sécurité au quotidien ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("changement_comportement_securite"),
        required: true,
    },
];

pub(crate) const ACCOMPAGNEMENT_SOCIAL_AVANT: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: "as_q1",
        prompt: "Quels sont vos besoins principaux ?",
        kind: InputKind::MultiSelect,
        options: &[
            "Aide administrative",
            "Accès aux droits sociaux",
            "Recherche de logement",
            "Recherche d'emploi",
            "Accès aux soins",
            "Régularisation de situation",
            "Autre",
        ],
        indicator: Some("besoins_initiaux"),
        required: true,
    },
    QuestionDefinition {
        id: "as_q2",
        prompt: "Comprenez-vous les démarches administratives que vous devez effectuer ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("comprehension_demarches"),
        required: true,
    },
    QuestionDefinition {
        id: "as_q3",
        prompt: "Vous sentez-vous capable de faire vos démarches seul(e) ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("capacite_faire_seul"),
        required: true,
    },
];

pub(crate) const ACCOMPAGNEMENT_SOCIAL_APRES: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: "as_q4",
        prompt: "Combien de vos droits ont été identifiés grâce à l'accompagnement ?",
        kind: InputKind::Numeric,
        options: &[],
        indicator: Some("droits_identifies"),
        required: true,
    },
    QuestionDefinition {
        id: "as_q5",
        prompt: "Vous sentez-vous écouté(e) et compris(e) ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("sentiment_ecoute"),
        required: true,
    },
];

pub(crate) const ACCOMPAGNEMENT_SOCIAL_SUIVI_6MOIS: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: "as_q6",
        prompt: "Êtes-vous désormais autonome dans vos démarches administratives ?",
        kind: InputKind::Boolean,
        options: &[],
        indicator: Some("autonomie_demarches"),
        required: true,
    },
    QuestionDefinition {
        id: "as_q7",
        prompt: "Votre situation globale s'est-elle stabilisée ?",
        kind: InputKind::Boolean,
        options: &[],
        indicator: Some("situation_stabilisee"),
        required: true,
    },
    QuestionDefinition {
        id: "as_q8",
        prompt: "Comment évaluez-vous votre qualité de vie actuelle ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("qualite_vie_amelioree"),
        required: true,
    },
];

pub(crate) const FORMATION_CITOYENNE_AVANT: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: "fc_q1",
        prompt: "Comment évaluez-vous votre connaissance des institutions françaises ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("connaissance_institutions"),
        required: true,
    },
    QuestionDefinition {
        id: "fc_q2",
        prompt: "Comment évaluez-vous votre compréhension du fonctionnement démocratique ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("comprehension_democratie"),
        required: true,
    },
    QuestionDefinition {
        id: "fc_q3",
        prompt: "Vous sentez-vous capable de défendre votre point de vue dans un débat ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("capacite_argumenter"),
        required: true,
    },
];

pub(crate) const FORMATION_CITOYENNE_APRES: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: "fc_q4",
        prompt: "Comment évaluez-vous votre capacité à développer un esprit critique ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("esprit_critique"),
        required: true,
    },
    QuestionDefinition {
        id: "fc_q5",
        prompt: "Vous sentez-vous mieux armé(e) pour participer à des débats citoyens ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("capacite_debattre"),
        required: true,
    },
];

pub(crate) const FORMATION_CITOYENNE_SUIVI_6MOIS: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: "fc_q6",
        prompt: "Avez-vous participé à des élections depuis la formation ?",
        kind: InputKind::Boolean,
        options: &[],
        indicator: Some("participation_elections"),
        required: true,
    },
    QuestionDefinition {
        id: "fc_q7",
        prompt: "Vous êtes-vous engagé(e) dans une association ?",
        kind: InputKind::Boolean,
        options: &[],
        indicator: Some("engagement_associatif"),
        required: true,
    },
    QuestionDefinition {
        id: "fc_q8",
        prompt: "Êtes-vous devenu(e) plus tolérant(e) envers les opinions différentes ?",
        kind: InputKind::Scale1To5,
        options: &[],
        indicator: Some("evolution_tolerance"),
        required: true,
    },
];
