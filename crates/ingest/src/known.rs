//! Static list of known major Lima projects.
//!
//! Always appended to a pipeline run, so ingestion produces data even when
//! every live source fails. Entries come from recent press coverage of the
//! Municipalidad de Lima's priority projects.

use obramap_db::models::project::NewCandidate;

fn candidate(
    name: &str,
    description: &str,
    districts: &[&str],
    source_url: &str,
) -> NewCandidate {
    NewCandidate {
        name: name.to_string(),
        description: Some(description.to_string()),
        districts: districts.iter().map(|d| d.to_string()).collect(),
        source_url: Some(source_url.to_string()),
    }
}

/// The fallback candidate set. Non-empty by construction.
pub fn known_projects() -> Vec<NewCandidate> {
    vec![
        candidate(
            "Vía Expresa Grau - Conexión Metropolitano con Línea 1",
            "Corredor de 2.8 km que enlazará el Metropolitano con la Línea 1 del Metro, \
             beneficiando a 2 millones de usuarios. Incluye 4 paraderos: Abancay, \
             Andahuaylas, Parinacochas y Nicolás Ayllón.",
            &["Cercado de Lima"],
            "https://www.infobae.com/peru/2025/12/20/asi-sera-la-nueva-megaobra-que-reducira-a-45-minutos-el-viaje-de-norte-a-sur-en-lima-y-unira-8-distritos/",
        ),
        candidate(
            "Teleférico Urbano Independencia - San Juan de Miraflores",
            "Sistema de teleférico para reducir en 2 horas el tiempo de viaje entre el \
             norte y sur de Lima. Inversión de 350 millones de soles.",
            &["Independencia", "San Juan de Miraflores"],
            "https://www.infobae.com/peru/2023/11/04/cuales-son-los-5-proyectos-de-infraestructura-que-la-municipalidad-de-lima-anuncio-que-priorizara/",
        ),
        candidate(
            "Ampliación Norte del Metropolitano",
            "Extensión del servicio Metropolitano desde Plaza San Miguel hasta Av. Chimpu \
             Ocllo en Carabayllo, recorriendo toda la Av. Universitaria.",
            &["San Miguel", "Carabayllo", "Los Olivos"],
            "https://visionminera.com/cuales-son-los-5-proyectos-infraestructura-municipalidad-lima-priorizara.html",
        ),
        candidate(
            "Ampliación Sur del Metropolitano",
            "Nueva ruta del Metropolitano desde Barranco hasta San Juan de Miraflores, \
             cruzando por gran parte de Surco.",
            &["Barranco", "Surco", "San Juan de Miraflores"],
            "https://visionminera.com/cuales-son-los-5-proyectos-infraestructura-municipalidad-lima-priorizara.html",
        ),
        candidate(
            "Vía Expresa Sur - Obras Complementarias",
            "Obras complementarias de 5km de vía que conecta Barranco, Surco y San Juan \
             de Miraflores. Incluye conexión con Panamericana Sur y acceso a Mall del Sur.",
            &["Barranco", "Surco", "San Juan de Miraflores"],
            "https://larepublica.pe/sociedad/2025/12/03/municipalidad-de-lima-declara-en-emergencia-obras-complementarias-en-la-via-expresa-sur-que-inauguro-hace-mas-de-3-meses-44607",
        ),
    ]
}
