//! Option catalog: the closed value sets a client can pick from.
//!
//! Every enumerated attribute is a plain enum whose wire and storage form is
//! its human-readable label. The catalog itself is built once per process and
//! handed out by reference.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::CoreError;

/// Aspect ratio directive used when a client does not choose one.
pub const DEFAULT_ASPECT_RATIO: &str = "--ar 2:3";

macro_rules! define_catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) {
            $( $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            /// Every member, in catalog order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Attribute name used in validation messages.
            pub const FIELD: &'static str = $field;

            /// The display label, which is also the stored value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// All labels, in catalog order.
            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Invalid {} '{other}'. Must be one of: {}",
                        Self::FIELD,
                        Self::labels().join(" | ")
                    ))),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_catalog_enum! {
    /// Overall theme of the photoshoot.
    Theme("theme") {
        Formal => "Formal",
        Casual => "Casual",
        Vintage => "Vintage",
        Fantasy => "Fantasy",
        TraditionalJavanese => "Traditional Javanese",
        TraditionalBalinese => "Traditional Balinese",
    }
}

define_catalog_enum! {
    /// Rendering style of the final image.
    VisualStyle("visual_style") {
        RealisticPhotography => "Realistic Photography",
        Cinematic => "Cinematic",
        BlackAndWhite => "Black and White",
        OilPainting => "Oil Painting",
        AnimeStyle => "Anime Style",
    }
}

define_catalog_enum! {
    StudioBackground("studio_background") {
        PlainGreyWall => "Plain Grey Wall",
        ClassicLibrary => "Classic Library Setting",
        IndustrialLoftWindow => "Industrial Loft Window",
        RedVelvetCurtains => "Red Velvet Curtains",
        BookshelfBackdrop => "Bookshelf Backdrop",
        FloralWall => "Floral Wall",
    }
}

define_catalog_enum! {
    Lighting("lighting") {
        SoftWindow => "Soft window light",
        ElegantStudio => "Elegant studio lighting",
        GoldenHour => "Golden hour sunset glow",
        DramaticNeon => "Dramatic neon lights",
        DimAmbient => "Dim ambient light",
    }
}

define_catalog_enum! {
    CameraAngle("camera_angle") {
        EyeLevel => "Eye-level shot",
        FullBody => "Full body shot",
        CloseUp => "Close-up",
        LowAngle => "Low angle shot",
        HighAngle => "High angle shot",
    }
}

define_catalog_enum! {
    /// How the couple is posed relative to each other and the camera.
    CouplePose("couple_pose") {
        StandingParallel => "Standing parallel, facing camera, soft expression",
        ManBehindWomanSeated => "Man standing behind, woman sitting elegantly on a chair",
        LookingAtEachOther => "Looking at each other with a slight smile",
        HoldingHandFromSide => "Man holding the woman's hand from the side",
        SideBySideAngled => "Sitting side-by-side, slightly angled towards each other",
        ManOnArmrest => "Woman seated, man sitting on the armrest",
        WalkingSlowly => "Posed as if walking slowly, man slightly ahead",
        HoldingArmFromBehind => "Man holding the woman's arm from behind",
        SmallTable => "Sitting facing each other, hands on a small table",
        FormalStanding => "Formal standing pose, hands in front",
        SeatedHalfBody => "Seated facing each other, half-body shot",
        LeaningOnWall => "Man leaning against a wall, woman in front",
        HoldingBouquet => "Woman holding a bouquet, man standing beside her",
        StudioFloor => "Sitting on the studio floor with a carpet",
        BowingGreeting => "Man slightly bowing to greet the woman",
    }
}

const ASPECT_RATIOS: &[(&str, &str)] = &[
    ("Potret (2:3)", "--ar 2:3"),
    ("Potret (9:16)", "--ar 9:16"),
    ("Lanskap (3:2)", "--ar 3:2"),
    ("Persegi (1:1)", "--ar 1:1"),
    ("Layar Lebar (16:9)", "--ar 16:9"),
];

/// Every selectable value, grouped per attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionCatalog {
    pub themes: Vec<&'static str>,
    pub visual_styles: Vec<&'static str>,
    pub studio_backgrounds: Vec<&'static str>,
    pub lighting: Vec<&'static str>,
    pub camera_angles: Vec<&'static str>,
    pub couple_poses: Vec<&'static str>,
    /// Human-readable label to `--ar` directive, in display order.
    pub aspect_ratios: IndexMap<&'static str, &'static str>,
}


static CATALOG: LazyLock<OptionCatalog> = LazyLock::new(|| OptionCatalog {
    themes: Theme::labels(),
    visual_styles: VisualStyle::labels(),
    studio_backgrounds: StudioBackground::labels(),
    lighting: Lighting::labels(),
    camera_angles: CameraAngle::labels(),
    couple_poses: CouplePose::labels(),
    aspect_ratios: ASPECT_RATIOS.iter().copied().collect(),
});

/// The process-wide option catalog.
pub fn list_options() -> &'static OptionCatalog {
    &CATALOG
}

/// Aspect ratio directives in catalog order.
pub fn aspect_ratio_values() -> impl Iterator<Item = &'static str> {
    ASPECT_RATIOS.iter().map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_matches::assert_matches;

    use super::*;

    fn assert_unique(values: &[&str]) {
        let set: HashSet<_> = values.iter().collect();
        assert_eq!(set.len(), values.len(), "duplicate entry in {values:?}");
    }

    #[test]
    fn list_options_is_idempotent() {
        assert_eq!(list_options(), list_options());
        assert_eq!(list_options().clone(), *list_options());
    }

    #[test]
    fn catalog_sets_have_no_duplicates() {
        let c = list_options();
        assert_unique(&c.themes);
        assert_unique(&c.visual_styles);
        assert_unique(&c.studio_backgrounds);
        assert_unique(&c.lighting);
        assert_unique(&c.camera_angles);
        assert_unique(&c.couple_poses);
    }

    #[test]
    fn aspect_ratios_map_labels_to_distinct_values() {
        let c = list_options();
        assert_eq!(c.aspect_ratios.len(), ASPECT_RATIOS.len());
        let values: Vec<&str> = c.aspect_ratios.values().copied().collect();
        assert_unique(&values);
        assert_eq!(c.aspect_ratios["Persegi (1:1)"], "--ar 1:1");
        assert!(values.contains(&DEFAULT_ASPECT_RATIO));
    }

    #[test]
    fn catalog_sizes() {
        let c = list_options();
        assert_eq!(c.themes.len(), 6);
        assert_eq!(c.visual_styles.len(), 5);
        assert_eq!(c.studio_backgrounds.len(), 6);
        assert_eq!(c.lighting.len(), 5);
        assert_eq!(c.camera_angles.len(), 5);
        assert_eq!(c.couple_poses.len(), 15);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), *theme);
        }
        for pose in CouplePose::ALL {
            assert_eq!(pose.as_str().parse::<CouplePose>().unwrap(), *pose);
        }
    }

    #[test]
    fn unknown_value_is_a_validation_error() {
        let err = "traditional_indonesian".parse::<Theme>().unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg.contains("Invalid theme"));
        // Matching is exact, including case.
        assert!("cinematic".parse::<VisualStyle>().is_err());
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&Lighting::GoldenHour).unwrap();
        assert_eq!(json, "\"Golden hour sunset glow\"");

        let angle: CameraAngle = serde_json::from_str("\"Close-up\"").unwrap();
        assert_eq!(angle, CameraAngle::CloseUp);

        assert!(serde_json::from_str::<CameraAngle>("\"Bird's eye\"").is_err());
    }

    #[test]
    fn catalog_serializes_aspect_ratios_as_ordered_object() {
        let json = serde_json::to_value(list_options()).unwrap();
        let keys: Vec<&String> = json["aspect_ratios"].as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        assert_eq!(json["themes"][0], "Formal");
    }
}
