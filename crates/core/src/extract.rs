//! District and keyword extraction over free text.
//!
//! Both functions are deterministic, case-insensitive substring matchers.
//! There is deliberately no fuzzy or partial matching here.

/// Reference list of Lima/Callao districts recognised at ingestion time.
///
/// Manual district writes are free-form and are NOT validated against this
/// list; it only drives candidate extraction.
pub const KNOWN_DISTRICTS: &[&str] = &[
    "Barranco",
    "Cercado de Lima",
    "Miraflores",
    "San Isidro",
    "Surco",
    "La Molina",
    "San Borja",
    "Lince",
    "Jesús María",
    "Magdalena",
    "Pueblo Libre",
    "San Miguel",
    "Breña",
    "Rímac",
    "Los Olivos",
    "Independencia",
    "Comas",
    "Carabayllo",
    "San Martín de Porres",
    "San Juan de Miraflores",
    "Villa María del Triunfo",
    "Villa El Salvador",
    "San Juan de Lurigancho",
    "Ate",
    "Santa Anita",
    "El Agustino",
    "La Victoria",
    "Surquillo",
    "Chorrillos",
    "Callao",
];

/// Keywords that mark a headline as an infrastructure-project announcement.
pub const PROJECT_KEYWORDS: &[&str] = &[
    "obra",
    "proyecto",
    "construcción",
    "infraestructura",
    "vía",
    "parque",
    "recuperación",
    "mejora",
];

/// Extract every known district mentioned in `text`.
///
/// Case-insensitive substring match against [`KNOWN_DISTRICTS`]. Each district
/// appears at most once, in reference-list order, which keeps the result
/// deterministic regardless of where names occur in the text.
pub fn extract_districts(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    KNOWN_DISTRICTS
        .iter()
        .filter(|district| lower.contains(&district.to_lowercase()))
        .copied()
        .collect()
}

/// Whether a title reads like an infrastructure-project announcement.
///
/// Used only as an ingestion filter, never for correctness of stored data.
pub fn looks_like_project(title: &str) -> bool {
    let lower = title.to_lowercase();
    PROJECT_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Split a comma-delimited district set as it arrives on the HTTP surface.
///
/// Segments are trimmed; empty segments are ignored.
pub fn parse_district_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Order-preserving exact dedup of district names.
///
/// Duplicate names within one call are silently dropped (first occurrence
/// wins) rather than rejected, so callers see the distinct set they asked for.
pub fn distinct_names(names: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_multiple_districts() {
        let found = extract_districts("Nueva obra en Barranco y Surco");
        assert_eq!(found, vec!["Barranco", "Surco"]);
    }

    #[test]
    fn no_district_yields_empty() {
        assert!(extract_districts("Proyecto nacional").is_empty());
    }

    #[test]
    fn extraction_is_case_insensitive() {
        let found = extract_districts("mejoras viales en MIRAFLORES y surquillo");
        assert_eq!(found, vec!["Miraflores", "Surquillo"]);
    }

    #[test]
    fn district_mentioned_twice_appears_once() {
        let found = extract_districts("Callao: puente Callao en emergencia");
        assert_eq!(found, vec!["Callao"]);
    }

    #[test]
    fn accented_district_matches() {
        let found = extract_districts("ciclovía en Jesús María");
        assert_eq!(found, vec!["Jesús María"]);
    }

    #[test]
    fn project_keywords_match() {
        assert!(looks_like_project("Nueva obra vial en el centro"));
        assert!(looks_like_project("PROYECTO de recuperación de parques"));
        assert!(looks_like_project("Mejora de infraestructura"));
    }

    #[test]
    fn unrelated_title_is_filtered() {
        assert!(!looks_like_project("Resultados del partido de anoche"));
    }

    #[test]
    fn parse_district_list_trims_and_drops_empties() {
        assert_eq!(
            parse_district_list(" Lima , Callao ,, "),
            vec!["Lima".to_string(), "Callao".to_string()]
        );
        assert!(parse_district_list("").is_empty());
    }

    #[test]
    fn distinct_names_keeps_first_occurrence() {
        let names = vec![
            "Surco".to_string(),
            "Lima".to_string(),
            "Surco".to_string(),
        ];
        assert_eq!(
            distinct_names(&names),
            vec!["Surco".to_string(), "Lima".to_string()]
        );
    }
}
