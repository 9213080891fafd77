//! Compiled-in content used whenever the stored configuration leaves a field unset.

use super::catalog::{AnswerOption, Question, QuestionCatalog};
use super::tiers::{Bullet, BulletKind, ResultTier, TierTable};

pub const PRIMARY_COLOR: &str = "#2F80ED";
pub const SECONDARY_COLOR: &str = "#0B1E3D";
pub const TITLE: &str = "Er jeres onboarding gearet til fremtiden?";
pub const SUBTITLE: &str = "HR Maturity Tools";
pub const DESCRIPTION: &str = "Tag vores 2-minutters maturity check og få en dybdegående analyse af jeres styrker og potentialer.";
pub const BUTTON_TEXT: &str = "Start testen nu";

fn question<const N: usize>(
    id: u32,
    category: &str,
    text: &str,
    options: [(&str, &str, u32); N],
) -> Question {
    Question {
        id,
        category: category.to_string(),
        text: text.to_string(),
        options: options
            .into_iter()
            .map(|(label, text, points)| AnswerOption {
                label: Some(label.to_string()),
                text: text.to_string(),
                points,
            })
            .collect(),
    }
}

fn tier<const N: usize>(
    min: u32,
    max: u32,
    title: &str,
    description: &str,
    bullets: [(BulletKind, &str); N],
) -> ResultTier {
    ResultTier {
        min,
        max,
        title: title.to_string(),
        description: description.to_string(),
        bullets: bullets
            .into_iter()
            .map(|(kind, text)| Bullet {
                kind,
                text: text.to_string(),
            })
            .collect(),
    }
}

/// The ten onboarding questions, each scored 0 to 3.
pub fn questions() -> Vec<Question> {
    vec![
        question(
            1,
            "Plan og struktur",
            "Har I en standardiseret plan for de første 30 dage for nye medarbejdere?",
            [
                ("A", "Ja, for alle relevante stillinger og vi opdaterer den jævnligt.", 3),
                ("B", "Ja, for de fleste nøglestillinger.", 2),
                ("C", "Kun for enkelte roller.", 1),
                ("D", "Nej, det løses fra gang til gang.", 0),
            ],
        ),
        question(
            2,
            "Kultur og værdier",
            "Hvordan introducerer I kultur og værdier i onboardingforløbet?",
            [
                ("A", "Der er et struktureret forløb med konkrete aktiviteter og eksempler.", 3),
                ("B", "Der er en præsentation eller et oplæg, men ikke meget mere.", 2),
                ("C", "Det sker primært uformelt i hverdagen.", 1),
                ("D", "Vi har ikke en klar tilgang til det.", 0),
            ],
        ),
        question(
            3,
            "Netværk og relationer",
            "Hvordan sikrer I, at nye medarbejdere får opbygget et relevant internt netværk?",
            [
                ("A", "Vi har planlagte møder med nøglepersoner og tværgående kolleger.", 3),
                ("B", "Vi introducerer dem til nærmeste team og enkelte nøglepersoner.", 2),
                ("C", "Det forventes at ske naturligt over tid.", 1),
                ("D", "Vi har ikke fokus på det.", 0),
            ],
        ),
        question(
            4,
            "Rolle- og ansvarsfordeling",
            "Hvor tydeligt er ansvaret for onboarding fordelt mellem HR, leder og kolleger?",
            [
                ("A", "Meget tydeligt og dokumenteret.", 3),
                ("B", "Nogenlunde tydeligt, men ikke formelt beskrevet.", 2),
                ("C", "Det er primært implicit og afhænger af den enkelte leder.", 1),
                ("D", "Det er uklart, hvem der har ansvaret.", 0),
            ],
        ),
        question(
            5,
            "Opfølgning og måling",
            "Evaluerer I systematisk, om onboardingforløbet har været en succes?",
            [
                ("A", "Ja, via faste målinger og samtaler på bestemte tidspunkter.", 3),
                ("B", "Ja, men mere ad hoc og uregelmæssigt.", 2),
                ("C", "Kun hvis der opstår problemer.", 1),
                ("D", "Nej, vi evaluerer ikke struktureret.", 0),
            ],
        ),
        question(
            6,
            "Forberedelse før første dag",
            "Hvor meget er på plads før første arbejdsdag for en ny medarbejder?",
            [
                ("A", "Udstyr, systemadgang, program og velkomstmateriale er klart.", 3),
                ("B", "Det meste er klar, men enkelte ting mangler ofte.", 2),
                ("C", "Noget er klar, men mange ting ordnes først på dagen.", 1),
                ("D", "Det meste bliver ordnet, efter medarbejderen er startet.", 0),
            ],
        ),
        question(
            7,
            "Digital støtte",
            "Hvordan understøtter I onboarding digitalt i dag?",
            [
                ("A", "Vi bruger et dedikeret onboardingværktøj med opgaver, planer og opfølgning.", 3),
                ("B", "Vi bruger HR-system, intranet eller andre værktøjer med simple skabeloner.", 2),
                ("C", "Vi bruger primært mails, dokumenter og regneark.", 1),
                ("D", "Der er ingen samlet digital løsning.", 0),
            ],
        ),
        question(
            8,
            "Ledelsesinvolvering",
            "Hvor tydeligt er lederens rolle i onboarding?",
            [
                ("A", "Lederens rolle er klart defineret med konkrete opgaver og touchpoints.", 3),
                ("B", "Lederen ved nogenlunde hvad der forventes, men uden fast struktur.", 2),
                ("C", "Det afhænger meget af den enkelte leder.", 1),
                ("D", "Der er ingen fælles forventninger til lederens rolle.", 0),
            ],
        ),
        question(
            9,
            "Varighed og helhed",
            "Hvor længe betragter I onboardingforløbet som aktivt?",
            [
                ("A", "Vi har en tydelig plan der strækker sig mindst 3 måneder.", 3),
                ("B", "Vi har en plan for 2 til 4 uger.", 2),
                ("C", "Vi fokuserer mest på første uge.", 1),
                ("D", "Onboarding er primært første dag.", 0),
            ],
        ),
        question(
            10,
            "Løbende forbedring",
            "Hvordan arbejder I med at forbedre jeres onboarding over tid?",
            [
                ("A", "Vi bruger data og feedback til at justere programmet løbende.", 3),
                ("B", "Vi justerer indimellem baseret på oplevelser og enkeltstående input.", 2),
                ("C", "Vi ændrer kun noget hvis der har været en meget dårlig oplevelse.", 1),
                ("D", "Onboardingforløbet har stort set været det samme i flere år.", 0),
            ],
        ),
    ]
}

fn ad_hoc() -> ResultTier {
    use BulletKind::{Opportunity, Risk, Strength};

    tier(
        0,
        10,
        "Jeres onboarding er primært ad hoc",
        "Onboarding afhænger i høj grad af den enkelte leder og situation. Nye medarbejdere kan få meget forskellige oplevelser, og vigtige elementer risikerer at blive glemt.",
        [
            (Strength, "I kan tilpasse jer hurtigt fra gang til gang."),
            (Risk, "Uensartet kvalitet og større risiko for dårlige oplevelser."),
            (Opportunity, "Ved at samle onboarding i en enkel struktur kan I hurtigt løfte niveauet."),
        ],
    )
}

fn foundational() -> ResultTier {
    use BulletKind::{Opportunity, Risk, Strength};

    tier(
        11,
        18,
        "Jeres onboarding har et grundlæggende fundament",
        "I har flere gode elementer i onboarding, men de er ikke fuldt ud standardiseret og skaleret. Oplevelsen kan stadig variere alt efter rolle og leder.",
        [
            (Strength, "Nye medarbejdere får typisk en fornuftig start."),
            (Risk, "Manglende konsistens og begrænset opfølgning."),
            (Opportunity, "Med en samlet plan og digitale værktøjer kan I skabe en mere ensartet oplevelse."),
        ],
    )
}

fn structured() -> ResultTier {
    use BulletKind::{Opportunity, Risk, Strength};

    tier(
        19,
        24,
        "Jeres onboarding er struktureret",
        "I har et solidt fundament med planer, faste elementer og tydelige roller. De største muligheder ligger i at gøre onboarding mere datadrevet og let at skalere på tværs af organisationen.",
        [
            (Strength, "Klare rammer og genkendelige forløb."),
            (Risk, "Afhængighed af enkelte nøglepersoner og manuelle processer."),
            (Opportunity, "Ved at samle onboarding digitalt kan I spare tid og få bedre overblik."),
        ],
    )
}

fn strategic() -> ResultTier {
    use BulletKind::{Opportunity, Risk, Strength};

    tier(
        25,
        30,
        "Jeres onboarding er på et strategisk niveau",
        "Onboarding er integreret i jeres måde at drive forretning og HR på. I arbejder struktureret med forløb, roller og opfølgning og bruger viden til at forbedre oplevelsen løbende.",
        [
            (Strength, "En stærk, konsistent oplevelse for nye medarbejdere."),
            (Risk, "At kompleksitet og vedligeholdelse kan vokse over tid."),
            (Opportunity, "I kan bruge data til at koble onboarding endnu tættere til performance og fastholdelse."),
        ],
    )
}

/// Four tiers covering 0..=30 without gaps.
pub fn results() -> Vec<ResultTier> {
    vec![ad_hoc(), foundational(), structured(), strategic()]
}

pub fn catalog() -> QuestionCatalog {
    QuestionCatalog::from_defaults(questions())
}

pub fn tier_table() -> TierTable {
    TierTable::from_parts(ad_hoc(), vec![foundational(), structured(), strategic()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_scores_out_of_thirty() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.max_score(), 30);
        assert!(catalog
            .iter()
            .all(|question| question.options.len() == 4));
    }

    #[test]
    fn default_tiers_cover_every_achievable_score() {
        let tiers = tier_table();
        assert_eq!(tiers.len(), 4);
        assert!(tiers.audit(catalog().max_score()).is_empty());
    }
}
