//! Built-in curriculum content.

use url::Url;

use crate::catalog::CatalogError;
use crate::model::{
    Assessment, AssessmentKind, Lesson, LessonId, Level, LevelColor, LevelId, Term, TermId,
};

struct LevelSpec {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    student_status: &'static str,
    goal: &'static str,
    theme: Option<&'static str>,
    color: LevelColor,
    icon: &'static str,
    terms: &'static [TermSpec],
}

struct TermSpec {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    objectives: &'static [&'static str],
    lessons: &'static [LessonSpec],
}

struct LessonSpec {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    skills: &'static [&'static str],
    prerequisites: &'static [&'static str],
    equipment: &'static [&'static str],
    video: &'static str,
    assessment: AssessmentKind,
    criteria: &'static [&'static str],
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

impl LessonSpec {
    fn build(&self) -> Result<Lesson, CatalogError> {
        let video_url = Url::parse(self.video).map_err(|_| CatalogError::InvalidUrl {
            lesson: LessonId::new(self.id),
            url: self.video.to_owned(),
        })?;

        Ok(Lesson {
            id: LessonId::new(self.id),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            duration: self.duration.to_owned(),
            skills: strings(self.skills),
            prerequisites: self.prerequisites.iter().copied().map(LessonId::new).collect(),
            equipment: strings(self.equipment),
            video_url: Some(video_url),
            document_url: None,
            interactive_content: None,
            assessment: Some(Assessment {
                kind: self.assessment,
                criteria: strings(self.criteria),
                ai_feedback: true,
            }),
        })
    }
}

impl TermSpec {
    fn build(&self) -> Result<Term, CatalogError> {
        Ok(Term {
            id: TermId::new(self.id),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            duration: self.duration.to_owned(),
            lessons: self
                .lessons
                .iter()
                .map(LessonSpec::build)
                .collect::<Result<_, _>>()?,
            objectives: strings(self.objectives),
        })
    }
}

impl LevelSpec {
    fn build(&self) -> Result<Level, CatalogError> {
        Ok(Level {
            id: LevelId::new(self.id),
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            student_status: self.student_status.to_owned(),
            goal: self.goal.to_owned(),
            theme: self.theme.map(str::to_owned),
            terms: self
                .terms
                .iter()
                .map(TermSpec::build)
                .collect::<Result<_, _>>()?,
            color: self.color,
            icon: self.icon.to_owned(),
        })
    }
}

pub(super) fn levels() -> Result<Vec<Level>, CatalogError> {
    LEVELS.iter().map(LevelSpec::build).collect()
}

const LEVELS: &[LevelSpec] = &[
    LevelSpec {
        id: "beginner",
        name: "Beginner Level",
        description: "Zero to One - Learn how to express",
        student_status: "Freshman Year",
        goal: "Students with no automotive design experience learn the fundamentals from scratch, including basic geometrical figures, construction techniques, lighting principles, and form intersection to create basic car architectures.",
        theme: Some("Geometrical Cars"),
        color: LevelColor::Green,
        icon: "🟢",
        terms: &[
            TermSpec {
                id: "term1",
                title: "Car Anatomy & Basic Geometries",
                description: "Understanding fundamental geometric principles in automotive design",
                duration: "4 weeks",
                objectives: &[
                    "Master basic geometric shapes and forms",
                    "Understand vehicle composition as geometric elements",
                    "Learn wheel placement and vehicle stance",
                    "Develop silhouette capture skills",
                ],
                lessons: &[
                    LessonSpec {
                        id: "lesson1-1",
                        title: "Geometric Figures",
                        description: "Understanding basic shapes and forms in automotive design",
                        duration: "2 hours",
                        skills: &["Basic geometry", "Shape recognition", "Form understanding"],
                        prerequisites: &[],
                        equipment: &["Pencil", "Paper", "Ruler"],
                        video: "https://youtube.com/embed/example1",
                        assessment: AssessmentKind::Sketch,
                        criteria: &["Geometric accuracy", "Line quality", "Proportion understanding"],
                    },
                    LessonSpec {
                        id: "lesson1-2",
                        title: "Cars and Boxes",
                        description: "Learning to see vehicles as geometric compositions",
                        duration: "2.5 hours",
                        skills: &["Composition", "Geometric thinking", "Vehicle structure"],
                        prerequisites: &["lesson1-1"],
                        equipment: &["Pencil", "Paper", "Ruler", "Eraser"],
                        video: "https://youtube.com/embed/example2",
                        assessment: AssessmentKind::Sketch,
                        criteria: &["Composition quality", "Geometric accuracy", "Creative interpretation"],
                    },
                    LessonSpec {
                        id: "lesson1-3",
                        title: "Boxes and Wheels",
                        description: "Integrating circular elements with rectangular forms",
                        duration: "2 hours",
                        skills: &["Circle integration", "Wheel placement", "Form combination"],
                        prerequisites: &["lesson1-2"],
                        equipment: &["Pencil", "Paper", "Compass"],
                        video: "https://youtube.com/embed/example3",
                        assessment: AssessmentKind::Sketch,
                        criteria: &["Wheel accuracy", "Integration quality", "Proportion"],
                    },
                    LessonSpec {
                        id: "lesson1-4",
                        title: "Capture The Silhouette",
                        description: "Understanding vehicle profiles and side views",
                        duration: "3 hours",
                        skills: &["Silhouette recognition", "Profile drawing", "Vehicle identification"],
                        prerequisites: &["lesson1-3"],
                        equipment: &["Pencil", "Paper", "Tracing paper"],
                        video: "https://youtube.com/embed/example4",
                        assessment: AssessmentKind::Sketch,
                        criteria: &["Silhouette accuracy", "Recognition skills", "Drawing quality"],
                    },
                ],
            },
            TermSpec {
                id: "term2",
                title: "Sketching Fundamentals",
                description: "Developing core sketching skills and techniques",
                duration: "4 weeks",
                objectives: &[
                    "Master dynamic line quality",
                    "Develop geometric design skills",
                    "Build sketching confidence",
                    "Understand perspective and proportions",
                ],
                lessons: &[
                    LessonSpec {
                        id: "lesson2-1",
                        title: "Dynamic Line Quality",
                        description: "Developing expressive, confident line work",
                        duration: "2.5 hours",
                        skills: &["Line confidence", "Expression", "Technique"],
                        prerequisites: &["lesson1-4"],
                        equipment: &["Various pencils", "Paper", "Sharpener"],
                        video: "https://youtube.com/embed/example5",
                        assessment: AssessmentKind::Sketch,
                        criteria: &["Line quality", "Confidence", "Expression"],
                    },
                    LessonSpec {
                        id: "lesson2-2",
                        title: "Perspective Side View",
                        description: "Mastering side view perspective drawing",
                        duration: "3 hours",
                        skills: &["Perspective", "Side view", "Technical drawing"],
                        prerequisites: &["lesson2-1"],
                        equipment: &["Pencil", "Paper", "Ruler", "Eraser"],
                        video: "https://youtube.com/embed/example6",
                        assessment: AssessmentKind::Sketch,
                        criteria: &["Perspective accuracy", "Technical quality", "Proportion"],
                    },
                ],
            },
            TermSpec {
                id: "term3",
                title: "Design Fundamentals",
                description: "Introduction to vehicle components and basic CAD tools",
                duration: "4 weeks",
                objectives: &[
                    "Understand basic vehicle components",
                    "Learn vehicle proportions and ergonomics",
                    "Introduction to CAD tools",
                    "Develop design thinking",
                ],
                lessons: &[
                    LessonSpec {
                        id: "lesson3-1",
                        title: "Basic Vehicle Components",
                        description: "Understanding automotive anatomy and key components",
                        duration: "2 hours",
                        skills: &["Vehicle anatomy", "Component recognition", "System understanding"],
                        prerequisites: &["lesson2-2"],
                        equipment: &["Pencil", "Paper", "Reference materials"],
                        video: "https://youtube.com/embed/example7",
                        assessment: AssessmentKind::Sketch,
                        criteria: &["Component accuracy", "Understanding", "Detail quality"],
                    },
                    LessonSpec {
                        id: "lesson3-2",
                        title: "Intro to CAD Tools",
                        description: "Introduction to digital design software",
                        duration: "4 hours",
                        skills: &["CAD basics", "Digital modeling", "Software navigation"],
                        prerequisites: &["lesson3-1"],
                        equipment: &["Computer", "CAD software", "Mouse"],
                        video: "https://youtube.com/embed/example8",
                        assessment: AssessmentKind::Model3d,
                        criteria: &["Software proficiency", "Model accuracy", "Technical skills"],
                    },
                ],
            },
        ],
    },
    LevelSpec {
        id: "intermediate",
        name: "Intermediate Level",
        description: "Building upon fundamentals",
        student_status: "Junior",
        goal: "Improve sketching techniques, explore materials and manufacturing processes, understand ergonomics, and begin developing digital design skills.",
        theme: None,
        color: LevelColor::Yellow,
        icon: "🟡",
        terms: &[
            TermSpec {
                id: "term4",
                title: "Advanced Sketching Techniques",
                description: "Developing professional sketching and rendering skills",
                duration: "4 weeks",
                objectives: &[
                    "Master dynamic sketches and storytelling",
                    "Develop rendering techniques",
                    "Learn design communication",
                ],
                lessons: &[
                    LessonSpec {
                        id: "lesson4-1",
                        title: "Dynamic Sketches and Storytelling",
                        description: "Creating compelling design narratives through sketches",
                        duration: "3 hours",
                        skills: &["Storytelling", "Narrative design", "Communication"],
                        prerequisites: &["lesson3-2"],
                        equipment: &["Pencil", "Paper", "Markers"],
                        video: "https://youtube.com/embed/example9",
                        assessment: AssessmentKind::Sketch,
                        criteria: &["Narrative quality", "Communication", "Visual impact"],
                    },
                    LessonSpec {
                        id: "lesson4-2",
                        title: "Rendering Techniques",
                        description: "Adding depth and realism to sketches",
                        duration: "4 hours",
                        skills: &["Rendering", "Shading", "Material representation"],
                        prerequisites: &["lesson4-1"],
                        equipment: &["Pencil", "Paper", "Markers", "Colored pencils"],
                        video: "https://youtube.com/embed/example10",
                        assessment: AssessmentKind::Sketch,
                        criteria: &["Rendering quality", "Material accuracy", "Visual realism"],
                    },
                ],
            },
            TermSpec {
                id: "term5",
                title: "Materials and Manufacturing",
                description: "Understanding materials science and production processes",
                duration: "4 weeks",
                objectives: &[
                    "Learn materials used in automotive design",
                    "Understand manufacturing processes",
                    "Consider sustainability in design",
                ],
                lessons: &[LessonSpec {
                    id: "lesson5-1",
                    title: "Materials Used in Automotive Design",
                    description: "Understanding material properties and applications",
                    duration: "2.5 hours",
                    skills: &["Material science", "Property understanding", "Application knowledge"],
                    prerequisites: &["lesson4-2"],
                    equipment: &["Reference materials", "Samples"],
                    video: "https://youtube.com/embed/example11",
                    assessment: AssessmentKind::Presentation,
                    criteria: &["Knowledge depth", "Application understanding", "Communication"],
                }],
            },
            TermSpec {
                id: "term6",
                title: "Human Factors and Ergonomics",
                description: "Designing for user comfort, safety, and accessibility",
                duration: "4 weeks",
                objectives: &[
                    "Design for user comfort and safety",
                    "Apply anthropometric data",
                    "Consider accessibility in design",
                ],
                lessons: &[LessonSpec {
                    id: "lesson6-1",
                    title: "Designing for User Comfort and Safety",
                    description: "Understanding human-centered design principles",
                    duration: "3 hours",
                    skills: &["Ergonomics", "Human factors", "Safety design"],
                    prerequisites: &["lesson5-1"],
                    equipment: &["Anthropometric data", "Reference materials"],
                    video: "https://youtube.com/embed/example12",
                    assessment: AssessmentKind::Sketch,
                    criteria: &["Ergonomic accuracy", "Safety consideration", "User focus"],
                }],
            },
        ],
    },
    LevelSpec {
        id: "advanced",
        name: "Advanced Level",
        description: "Industry-ready professionals",
        student_status: "Senior",
        goal: "Master digital and physical modeling techniques, develop professional presentation skills, and prepare for industry careers.",
        theme: None,
        color: LevelColor::Red,
        icon: "🔴",
        terms: &[
            TermSpec {
                id: "term7",
                title: "Digital Modeling and CAD",
                description: "Mastering professional design software and 3D modeling",
                duration: "4 weeks",
                objectives: &[
                    "Master advanced CAD techniques",
                    "Create photorealistic renderings",
                    "Prepare designs for prototyping",
                ],
                lessons: &[
                    LessonSpec {
                        id: "lesson7-1",
                        title: "Advanced CAD Techniques",
                        description: "Mastering professional design software",
                        duration: "6 hours",
                        skills: &["Advanced CAD", "Surface modeling", "Technical precision"],
                        prerequisites: &["lesson6-1"],
                        equipment: &["Computer", "Professional CAD software", "Graphics tablet"],
                        video: "https://youtube.com/embed/example13",
                        assessment: AssessmentKind::Model3d,
                        criteria: &["Technical accuracy", "Surface quality", "Professional standards"],
                    },
                    LessonSpec {
                        id: "lesson7-2",
                        title: "3D Modeling and Visualization",
                        description: "Creating photorealistic renderings and visualizations",
                        duration: "5 hours",
                        skills: &["3D visualization", "Rendering", "Lighting"],
                        prerequisites: &["lesson7-1"],
                        equipment: &["Computer", "Rendering software", "Graphics card"],
                        video: "https://youtube.com/embed/example14",
                        assessment: AssessmentKind::Model3d,
                        criteria: &["Visual quality", "Realism", "Technical execution"],
                    },
                ],
            },
            TermSpec {
                id: "term8",
                title: "Physical Modeling and Prototyping",
                description: "Traditional and modern manufacturing techniques",
                duration: "4 weeks",
                objectives: &[
                    "Learn clay modeling and sculpting",
                    "Understand 3D printing and rapid prototyping",
                    "Evaluate and refine designs",
                ],
                lessons: &[LessonSpec {
                    id: "lesson8-1",
                    title: "Clay Modeling and Sculpting",
                    description: "Traditional automotive design techniques",
                    duration: "8 hours",
                    skills: &["Clay modeling", "Sculpting", "Physical design"],
                    prerequisites: &["lesson7-2"],
                    equipment: &["Clay", "Sculpting tools", "Work surface"],
                    video: "https://youtube.com/embed/example15",
                    assessment: AssessmentKind::Portfolio,
                    criteria: &["Sculpting quality", "Form accuracy", "Professional finish"],
                }],
            },
            TermSpec {
                id: "term9",
                title: "Design Presentation & Professional Development",
                description: "Professional communication and career preparation",
                duration: "4 weeks",
                objectives: &[
                    "Develop compelling presentations",
                    "Build industry-ready portfolios",
                    "Establish professional networks",
                ],
                lessons: &[
                    LessonSpec {
                        id: "lesson9-1",
                        title: "Compelling Presentations and Design Rationale",
                        description: "Professional communication skills for design",
                        duration: "3 hours",
                        skills: &["Presentation", "Communication", "Design rationale"],
                        prerequisites: &["lesson8-1"],
                        equipment: &["Presentation software", "Portfolio materials"],
                        video: "https://youtube.com/embed/example16",
                        assessment: AssessmentKind::Presentation,
                        criteria: &["Communication quality", "Professionalism", "Content depth"],
                    },
                    LessonSpec {
                        id: "lesson9-2",
                        title: "Portfolio Development for Industry",
                        description: "Building career-ready portfolios",
                        duration: "4 hours",
                        skills: &["Portfolio design", "Career preparation", "Industry standards"],
                        prerequisites: &["lesson9-1"],
                        equipment: &["Portfolio software", "High-quality images"],
                        video: "https://youtube.com/embed/example17",
                        assessment: AssessmentKind::Portfolio,
                        criteria: &["Portfolio quality", "Professional standards", "Industry readiness"],
                    },
                ],
            },
        ],
    },
];
