//! Static marketing copy for the landing page.

use crate::progress::parse_duration_weeks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub headline: &'static str,
    pub highlight: &'static str,
    pub tagline: &'static str,
    pub primary_action: &'static str,
    pub secondary_action: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub highlight: &'static str,
    pub intro: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub image: &'static str,
}

impl Course {
    #[must_use]
    pub fn weeks(&self) -> u32 {
        parse_duration_weeks(self.duration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
}

/// Placeholder backdrop for a gallery tile, cycling by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryTone {
    Accent,
    Blend,
    Primary,
}

impl GalleryTone {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accent => "accent",
            Self::Blend => "blend",
            Self::Primary => "primary",
        }
    }
}

impl GalleryItem {
    #[must_use]
    pub fn tone(&self) -> GalleryTone {
        if self.id % 3 == 0 {
            GalleryTone::Accent
        } else if self.id % 2 == 0 {
            GalleryTone::Blend
        } else {
            GalleryTone::Primary
        }
    }
}

pub const BRAND: &str = "OcorpAI";

pub const HERO: Hero = Hero {
    headline: "Master the Art of",
    highlight: "Automotive Design",
    tagline: "Transform your passion into a career. Learn from industry experts and create stunning vehicle designs that push boundaries.",
    primary_action: "Start Your Journey",
    secondary_action: "Explore Courses",
};

pub const ABOUT: Section = Section {
    title: "Why Choose",
    highlight: BRAND,
    intro: "We bridge the gap between passion and profession. Our comprehensive curriculum and expert instructors prepare you for a thriving career in automotive design.",
};

pub const ABOUT_FEATURES: [Feature; 4] = [
    Feature {
        icon: "🎨",
        title: "AI-Powered Learning",
        description: "Get instant feedback on your designs with our advanced AI analysis system that evaluates your work like a professional mentor.",
    },
    Feature {
        icon: "📚",
        title: "Progressive Curriculum",
        description: "Structured 9-term program from beginner to advanced, covering everything from basic sketching to professional portfolio development.",
    },
    Feature {
        icon: "⚡",
        title: "Industry-Ready Skills",
        description: "Master CAD tools, materials science, ergonomics, and professional presentation skills that employers demand.",
    },
    Feature {
        icon: "👥",
        title: "Expert Network",
        description: "Connect with industry professionals from Tesla, BMW, Aston Martin, and other leading automotive brands for mentorship and career guidance.",
    },
];

pub const COURSES_SECTION: Section = Section {
    title: "Our",
    highlight: "Programs",
    intro: "Comprehensive courses designed to take you from beginner to professional automotive designer.",
};

pub const COURSES: [Course; 3] = [
    Course {
        title: "Exterior Design Mastery",
        description: "Master the art of creating stunning vehicle exteriors. Learn form development, surface modeling, and design language.",
        duration: "12 Weeks",
        level: "Beginner to Advanced",
        image: "course-exterior.jpg",
    },
    Course {
        title: "Interior Design Excellence",
        description: "Design luxurious and functional car interiors. Cover ergonomics, materials, and user experience principles.",
        duration: "10 Weeks",
        level: "Intermediate",
        image: "course-interior.jpg",
    },
    Course {
        title: "3D Modeling & Visualization",
        description: "Bring your designs to life with advanced 3D modeling techniques and photorealistic rendering skills.",
        duration: "14 Weeks",
        level: "All Levels",
        image: "course-3d.jpg",
    },
];

pub const GALLERY_SECTION: Section = Section {
    title: "Student",
    highlight: "Showcase",
    intro: "Witness the exceptional work created by our talented students. These designs represent the future of automotive innovation.",
};

pub const GALLERY: [GalleryItem; 6] = [
    GalleryItem { id: 1, title: "Sports Car Concept", category: "Exterior Design" },
    GalleryItem { id: 2, title: "Luxury Sedan Interior", category: "Interior Design" },
    GalleryItem { id: 3, title: "Electric Vehicle Design", category: "3D Modeling" },
    GalleryItem { id: 4, title: "SUV Dashboard Design", category: "Interior Design" },
    GalleryItem { id: 5, title: "Concept Supercar", category: "Exterior Design" },
    GalleryItem { id: 6, title: "Futuristic Cockpit", category: "Interior Design" },
];

pub const CONTACT_SECTION: Section = Section {
    title: "Start Your",
    highlight: "Design Journey",
    intro: "Ready to transform your passion into a profession? Get in touch with us today.",
};

pub const CONTACT_ACK_TITLE: &str = "Message Received!";
pub const CONTACT_ACK_BODY: &str = "We'll get back to you within 24 hours.";
