use serde::Serialize;

/// One stop on the journey: a fixed geographic point with its narrative
/// content. All entries live in [`LOCATIONS`]; nothing is created at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub id: u32,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub photo: &'static str,
    pub accent: Accent,
    pub moment: &'static str,
    pub question: &'static str,
    pub insight: &'static str,
}

/// Cosmetic accent tag used by the detail panel chrome (badge, heading dots).
/// Carries no semantics and is not the marker tint; markers cycle the palette
/// in [`crate::colors`] by registry position instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Emerald,
    Purple,
    Teal,
    Orange,
    Indigo,
    Amber,
    Pink,
}

impl Accent {
    pub const fn hex(self) -> &'static str {
        match self {
            Accent::Blue => "#3b82f6",
            Accent::Emerald => "#10b981",
            Accent::Purple => "#a855f7",
            Accent::Teal => "#14b8a6",
            Accent::Orange => "#f97316",
            Accent::Indigo => "#6366f1",
            Accent::Amber => "#f59e0b",
            Accent::Pink => "#ec4899",
        }
    }
}

/// The journey, in visit order. `id` is contiguous from 1 and matches the
/// array position; display ranks are still derived from position via
/// [`stop_number`], never read from `id`.
///
/// A `static` rather than a `const` so entries have one stable address and
/// selection can compare by identity.
pub static LOCATIONS: [Location; 8] = [
    Location {
        id: 1,
        name: "Copenhagen, Denmark",
        lat: 55.6761,
        lng: 12.5683,
        photo: "/copenhagen.jpg",
        accent: Accent::Blue,
        moment: "Walking along the harbor during my first week, I remember feeling how calm and considered everything seemed. New buildings sit right beside old streets without competing for attention, and the whole place feels edited in a good way.",
        question: "Copenhagen is known for renewing older structures instead of expanding outward. How will the city keep growing while protecting the character that makes it so timeless?",
        insight: "Good planning shapes how people move and feel. Copenhagen reminded me that density and comfort can work together.",
    },
    Location {
        id: 2,
        name: "Malmö, Sweden",
        lat: 55.605,
        lng: 13.0038,
        photo: "/malmo.jpg",
        accent: Accent::Emerald,
        moment: "Seeing the Turning Torso next to the quiet canals made me notice how Malmö mixes the futuristic with the familiar. The city feels calm, almost self-assured in its own rhythm.",
        question: "How has Malmö used modern design to shift its identity while still keeping neighborhoods livable and welcoming?",
        insight: "Big architectural statements can change how a city sees itself, but the smaller everyday spaces shape how people actually experience it.",
    },
    Location {
        id: 3,
        name: "Aalborg, Denmark",
        lat: 57.0488,
        lng: 9.9217,
        photo: "/aalborg.jpg",
        accent: Accent::Purple,
        moment: "Standing near Musikkens Hus, I noticed how the city feels both industrial and cultural at the same time. It’s small, but the ambitions feel bigger.",
        question: "Aalborg is planning for rising sea levels and more public access to the waterfront. How can it stay true to its roots while adapting for the future?",
        insight: "Smaller cities can transform themselves, but it takes a careful balance between growth and preserving identity.",
    },
    Location {
        id: 4,
        name: "Cologne, Germany",
        lat: 50.9375,
        lng: 6.9603,
        photo: "/koln.jpg",
        accent: Accent::Teal,
        moment: "Stepping out of the train station and immediately facing the cathedral was overwhelming in the best way. Everything around it feels practical, but the cathedral sets the emotional tone for the whole city.",
        question: "How do cities with major historical landmarks modernize without losing the identity that those landmarks create?",
        insight: "Landmarks become anchors in people’s mental map of a city. They connect old and new without needing to dominate everything.",
    },
    Location {
        id: 5,
        name: "Amsterdam, Netherlands",
        lat: 52.3676,
        lng: 4.9041,
        photo: "/amsterdam.jpg",
        accent: Accent::Orange,
        moment: "Amsterdam's houses clearly show traces of how life might have been in the past—narrow fronts, hoisting hooks, and compact layouts that reflect practical needs shaped by trade and limited space. The canal network itself feels like an organizing spine for the city, guiding movement and framing everyday life.",
        question: "How has Amsterdam handled heavy tourism while still keeping everyday life comfortable for residents?",
        insight: "Human-scale design makes it easier to pay attention. Cities you can walk through help you form real memories instead of quick impressions.",
    },
    Location {
        id: 6,
        name: "Tromsø, Norway",
        lat: 69.6496,
        lng: 18.956,
        photo: "/tromso.jpg",
        accent: Accent::Indigo,
        moment: "Tromsø’s city center is quiet but distinctly defined, especially when compared to the more residential Tromsdalen across the water. The surrounding mountains and sea make the city feel tightly framed by nature, almost as if the environment sets the boundaries for how the urban areas grow.",
        question: "As climate shifts in the Arctic, how will Tromsø keep its balance between nature, tourism, and local industries?",
        insight: "Extreme climates demand their own kind of resilience. Cities this far north adapt not only to weather, but also to darkness and isolation.",
    },
    Location {
        id: 7,
        name: "Vatican City",
        lat: 41.9029,
        lng: 12.4534,
        photo: "/vatican.jpg",
        accent: Accent::Amber,
        moment: "Walking through the Vatican felt surreal. The crowds, the scale, and the golden light made the whole place feel intentional and almost unreal.",
        question: "How does such a tiny territory maintain its public spaces while hosting constant waves of visitors?",
        insight: "Even symbolic places rely on everyday systems—maintenance, planning, governance. Sacred spaces still function as urban spaces.",
    },
    Location {
        id: 8,
        name: "Amalfi, Italy",
        lat: 40.634,
        lng: 14.602,
        photo: "/amalfi.jpg",
        accent: Accent::Pink,
        moment: "Walking up the hills felt like stepping into a vertical neighborhood. Everything is close, steep, and somehow cozy.",
        question: "With little flat land and narrow roads, how does Amalfi keep essential goods and daily life flowing for residents?",
        insight: "Landscape shapes lifestyle. In places built into mountains, slower rhythms and close communities feel natural.",
    },
];

/// Display rank for "Stop N of M" badges, derived from registry position by
/// identity. Returns 0 for a location that is not a registry entry, which the
/// selection contract rules out.
pub fn stop_number(location: &Location) -> usize {
    LOCATIONS
        .iter()
        .position(|entry| std::ptr::eq(entry, location))
        .map_or(0, |index| index + 1)
}

#[cfg(test)]
mod tests {
    use super::{Accent, LOCATIONS, stop_number};

    #[test]
    fn ids_are_unique_and_contiguous_from_one() {
        for (index, location) in LOCATIONS.iter().enumerate() {
            assert_eq!(location.id as usize, index + 1);
        }
    }

    #[test]
    fn coordinates_are_within_wgs84_ranges() {
        for location in &LOCATIONS {
            assert!(
                (-90.0..=90.0).contains(&location.lat),
                "{} latitude out of range: {}",
                location.name,
                location.lat
            );
            assert!(
                (-180.0..=180.0).contains(&location.lng),
                "{} longitude out of range: {}",
                location.name,
                location.lng
            );
        }
    }

    #[test]
    fn narrative_fields_are_always_present() {
        for location in &LOCATIONS {
            assert!(!location.name.is_empty());
            assert!(!location.moment.is_empty());
            assert!(!location.question.is_empty());
            assert!(!location.insight.is_empty());
        }
    }

    #[test]
    fn photo_paths_are_site_rooted() {
        for location in &LOCATIONS {
            assert!(
                location.photo.starts_with('/') && location.photo.ends_with(".jpg"),
                "unexpected photo path: {}",
                location.photo
            );
        }
    }

    #[test]
    fn stop_number_follows_registry_position() {
        for (index, location) in LOCATIONS.iter().enumerate() {
            assert_eq!(stop_number(location), index + 1);
        }
    }

    #[test]
    fn stop_number_rejects_foreign_locations() {
        let copy = LOCATIONS[0];
        assert_eq!(stop_number(&copy), 0);
    }

    #[test]
    fn accent_hex_values_are_exact() {
        assert_eq!(Accent::Blue.hex(), "#3b82f6");
        assert_eq!(Accent::Emerald.hex(), "#10b981");
        assert_eq!(Accent::Purple.hex(), "#a855f7");
        assert_eq!(Accent::Teal.hex(), "#14b8a6");
        assert_eq!(Accent::Orange.hex(), "#f97316");
        assert_eq!(Accent::Indigo.hex(), "#6366f1");
        assert_eq!(Accent::Amber.hex(), "#f59e0b");
        assert_eq!(Accent::Pink.hex(), "#ec4899");
    }

    #[test]
    fn registry_has_eight_stops() {
        assert_eq!(LOCATIONS.len(), 8);
        assert_eq!(LOCATIONS[0].name, "Copenhagen, Denmark");
        assert_eq!(LOCATIONS[7].name, "Amalfi, Italy");
    }
}
