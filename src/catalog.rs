//! Static idea catalog
//!
//! Three fixed categories, each with twenty prompts and five AI enhancement
//! hints. Read-only after startup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SparkError};

/// Idea domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Art,
    Startup,
    Design,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Art, Category::Startup, Category::Design];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Art => "art",
            Category::Startup => "startup",
            Category::Design => "design",
        }
    }

    /// Human label shown when switching category
    pub fn context(&self) -> &'static str {
        match self {
            Category::Art => "Art & Creative Projects",
            Category::Startup => "Business & Technology Ventures",
            Category::Design => "Design & User Experience",
        }
    }

    /// Accent colour name for feed markers
    pub fn color(&self) -> &'static str {
        match self {
            Category::Art => "pink",
            Category::Startup => "green",
            Category::Design => "yellow",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SparkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "art" => Ok(Category::Art),
            "startup" => Ok(Category::Startup),
            "design" => Ok(Category::Design),
            _ => Err(SparkError::UnknownCategory(s.trim().to_string())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// BUILTIN CONTENT
// ═══════════════════════════════════════════════════════════════

const ART_IDEAS: &[&str] = &[
    "Create a series of abstract paintings exploring the intersection of technology and nature",
    "Design an interactive sculpture that responds to viewer movement and biometric data",
    "Develop a mixed media installation about climate change using recycled materials",
    "Create a digital art collection inspired by quantum physics and consciousness",
    "Design an immersive VR experience that explores historical art movements",
    "Develop a generative art system that creates unique pieces based on user emotions",
    "Create a large-scale mural that incorporates augmented reality elements",
    "Design an art therapy program using AI-generated visual prompts",
    "Develop a kinetic sculpture that visualizes real-time environmental data",
    "Create a series of portraits exploring identity in the digital age",
    "Design an interactive light installation for public spaces",
    "Develop a bio-art project using living organisms as artistic medium",
    "Create a data visualization artwork representing global internet traffic",
    "Design a participatory art project that evolves with community input",
    "Develop an art education platform using machine learning for personalized feedback",
    "Create a series of sculptures that explore the concept of time and memory",
    "Design an immersive sound installation that responds to visitor movement",
    "Develop a street art project with social and political commentary",
    "Create a collection of digital fashion designs for virtual worlds",
    "Design an art installation that visualizes human connection and isolation",
];

const STARTUP_IDEAS: &[&str] = &[
    "Develop a SaaS platform for creative project management with AI-powered insights",
    "Create a marketplace connecting freelance designers with sustainable businesses",
    "Build a subscription service for personalized art supplies and creative challenges",
    "Develop a platform for virtual art galleries and digital exhibitions",
    "Create a blockchain-based system for authenticating and selling digital art",
    "Build an AI-powered tool that helps businesses develop creative marketing campaigns",
    "Develop a platform for collaborative storytelling and narrative design",
    "Create a service that transforms customer data into actionable creative insights",
    "Build a marketplace for unique creative experiences and workshops",
    "Develop a platform that uses AI to match creative talent with project opportunities",
    "Create a subscription box service for emerging artists and designers",
    "Build a platform for real-time collaborative design and feedback",
    "Develop a tool that helps brands create culturally sensitive marketing content",
    "Create a service that provides creative direction for small businesses",
    "Build a platform for crowdsourced design solutions and creative challenges",
    "Develop an AI assistant that helps with creative block and idea generation",
    "Create a marketplace for vintage and rare design artifacts",
    "Build a platform for creative professionals to showcase their process work",
    "Develop a service that offers creative consulting for tech startups",
    "Create a platform that connects artists with corporate commission opportunities",
];

const DESIGN_IDEAS: &[&str] = &[
    "Design a mobile app interface for a mental health and wellness platform",
    "Create a brand identity system for a sustainable technology company",
    "Develop a user experience for an AI-powered educational platform",
    "Design a dashboard for monitoring environmental impact metrics",
    "Create a web application for collaborative creative writing",
    "Develop a mobile interface for a smart home automation system",
    "Design a brand system for a virtual reality entertainment company",
    "Create a user interface for a blockchain-based creative marketplace",
    "Develop a design system for a global non-profit organization",
    "Design an interactive experience for a museum exhibition",
    "Create a mobile app design for a personal productivity platform",
    "Develop a user interface for a cryptocurrency wallet and exchange",
    "Design a brand identity for a biotech innovation company",
    "Create a web platform for virtual event hosting and networking",
    "Develop a mobile interface for a fitness and nutrition tracking app",
    "Design a user experience for an autonomous vehicle interface",
    "Create a brand system for a space exploration technology company",
    "Develop a mobile app design for a language learning platform",
    "Design a user interface for a medical diagnosis and treatment app",
    "Create a web platform for collaborative music production and sharing",
];

const ART_ENHANCEMENTS: &[&str] = &[
    "Consider incorporating mixed reality elements to enhance viewer engagement",
    "Explore sustainable materials and eco-friendly production methods",
    "Research current art market trends to inform your creative direction",
    "Consider the psychological impact of color psychology in your work",
    "Explore collaboration with artists from different cultural backgrounds",
];

const STARTUP_ENHANCEMENTS: &[&str] = &[
    "Analyze market competition and identify unique value propositions",
    "Consider scalability challenges and plan for growth infrastructure",
    "Research funding opportunities and investor requirements",
    "Develop a comprehensive go-to-market strategy",
    "Consider partnerships with established industry players",
];

const DESIGN_ENHANCEMENTS: &[&str] = &[
    "Conduct user research to validate design assumptions",
    "Consider accessibility standards and inclusive design principles",
    "Explore emerging technologies like AR/VR for enhanced user experience",
    "Research competitor designs and identify differentiation opportunities",
    "Consider internationalization and cross-cultural design requirements",
];

// ═══════════════════════════════════════════════════════════════
// CATALOG
// ═══════════════════════════════════════════════════════════════

/// Category -> ordered idea list. Never mutated after construction.
#[derive(Debug, Clone, Copy)]
pub struct IdeaCatalog {
    art: &'static [&'static str],
    startup: &'static [&'static str],
    design: &'static [&'static str],
}

impl Default for IdeaCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IdeaCatalog {
    pub fn builtin() -> Self {
        Self {
            art: ART_IDEAS,
            startup: STARTUP_IDEAS,
            design: DESIGN_IDEAS,
        }
    }

    pub fn get(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Art => self.art,
            Category::Startup => self.startup,
            Category::Design => self.design,
        }
    }

    /// Look up by raw name, failing on anything outside the fixed set
    pub fn lookup(&self, name: &str) -> Result<&'static [&'static str]> {
        Ok(self.get(name.parse()?))
    }

    pub fn contains(&self, category: Category, text: &str) -> bool {
        self.get(category).iter().any(|idea| *idea == text)
    }

    pub fn enhancements(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Art => ART_ENHANCEMENTS,
            Category::Startup => STARTUP_ENHANCEMENTS,
            Category::Design => DESIGN_ENHANCEMENTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("art".parse::<Category>().unwrap(), Category::Art);
        assert_eq!(" Startup ".parse::<Category>().unwrap(), Category::Startup);
        assert_eq!("DESIGN".parse::<Category>().unwrap(), Category::Design);
    }

    #[test]
    fn test_unknown_category() {
        let err = "music".parse::<Category>().unwrap_err();
        assert!(matches!(err, SparkError::UnknownCategory(ref name) if name == "music"));

        let catalog = IdeaCatalog::builtin();
        assert!(matches!(catalog.lookup("poetry"), Err(SparkError::UnknownCategory(_))));
    }

    #[test]
    fn test_builtin_sizes() {
        let catalog = IdeaCatalog::builtin();
        for category in Category::ALL {
            assert_eq!(catalog.get(category).len(), 20, "{category}");
            assert_eq!(catalog.enhancements(category).len(), 5, "{category}");
        }
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Startup).unwrap();
        assert_eq!(json, "\"startup\"");
        let back: Category = serde_json::from_str("\"design\"").unwrap();
        assert_eq!(back, Category::Design);
    }

    #[test]
    fn test_context_labels() {
        assert_eq!(Category::Art.context(), "Art & Creative Projects");
        assert_eq!(Category::Startup.color(), "green");
    }
}
