//! Spanish dictionary for UI labels
//!
//! English label -> Spanish translation. Keep alphabetized by key.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub(super) static SPANISH: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Back", "Volver"),
        ("Blog", "Blog"),
        ("By", "Por"),
        ("Dashboard", "Panel"),
        ("Discover our journeys", "Descubre nuestros viajes"),
        ("End of gallery", "Fin de la galería"),
        ("Explore the world with us", "Explora el mundo con nosotros"),
        ("Featured", "Destacado"),
        ("Featured Tours", "Tours Destacados"),
        ("Gallery", "Galería"),
        ("Home", "Inicio"),
        ("Language", "Idioma"),
        ("Latest Stories", "Últimas Historias"),
        ("Loading...", "Cargando..."),
        ("Moments from the road", "Momentos del camino"),
        ("Read more", "Leer más"),
        ("Retry", "Reintentar"),
        ("Scroll to explore", "Desplázate para explorar"),
        ("Stories", "Historias"),
        ("Tours", "Tours"),
        ("Unable to load", "No se pudo cargar"),
        ("days", "días"),
    ])
});
