/// Colour family a studio is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Sky,
    Violet,
    Emerald,
    Amber,
    Rose,
    Blue,
}

/// A workload the backend knows how to deploy. The set is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Studio {
    pub identifier: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const STUDIOS: [Studio; 6] = [
    Studio {
        identifier: "3d",
        display_name: "Omni 3D Studio",
        description:
            "Advanced computer vision solutions for image recognition, analysis, and automation.",
        accent: Accent::Sky,
    },
    Studio {
        identifier: "audio",
        display_name: "Omni Voice Studio",
        description:
            "Compose, edit, and remix audio projects effortlessly with intelligent AI tooling.",
        accent: Accent::Violet,
    },
    Studio {
        identifier: "avatar",
        display_name: "Omni Avatar Studio",
        description:
            "Create realistic, animated avatars for virtual experiences with AI personalization.",
        accent: Accent::Emerald,
    },
    Studio {
        identifier: "office",
        display_name: "Omni Office Studio",
        description:
            "AI-powered productivity suite for document creation, collaboration, and automation.",
        accent: Accent::Amber,
    },
    Studio {
        identifier: "photo",
        display_name: "Omni Photo Studio",
        description:
            "Smart photo editing, enhancement, and creative design using AI-powered tools.",
        accent: Accent::Rose,
    },
    Studio {
        identifier: "video",
        display_name: "Omni Video Studio",
        description:
            "Streamlined video editing, creation, and effects enhanced by AI technology.",
        accent: Accent::Blue,
    },
];

pub fn find_studio(identifier: &str) -> Option<&'static Studio> {
    STUDIOS.iter().find(|s| s.identifier == identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_identifiers_are_unique() {
        let ids: HashSet<&str> = STUDIOS.iter().map(|s| s.identifier).collect();
        assert_eq!(ids.len(), STUDIOS.len());
    }

    #[test]
    fn find_by_identifier() {
        assert_eq!(find_studio("audio").unwrap().display_name, "Omni Voice Studio");
        assert!(find_studio("music").is_none());
    }
}
