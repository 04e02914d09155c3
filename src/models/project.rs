use serde::{Deserialize, Serialize};

/// Top-level project classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Youtube,
    Github,
    Others,
}

impl Category {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "youtube" => Some(Self::Youtube),
            "github" => Some(Self::Github),
            "others" => Some(Self::Others),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Github => "github",
            Self::Others => "others",
        }
    }
}

/// A single gallery entry. Immutable after load.
///
/// Ids are plain JSON numbers: the seed data carries fractional ids
/// (`1`, `1.5`, `2.2`, ...) and duplicates are tolerated, so uniqueness is
/// not an invariant of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: f64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub full_description: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

impl Project {
    /// Detail text: the long description when present, the card blurb
    /// otherwise.
    pub fn detail_text(&self) -> &str {
        self.full_description.as_deref().unwrap_or(&self.description)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match over title, description and tags.
    pub fn matches_query(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(query))
    }
}

/// Embedded default projects, used whenever the remote source is absent,
/// unreachable or malformed.
pub fn seed_projects() -> Vec<Project> {
    let raw = serde_json::json!([
        {
            "id": 1,
            "title": "When Nepotism Destroys a Company | A Powerful Anti-Corruption Story",
            "description": "Nepotism and corruption don't just hurt individuals, they can collapse entire organizations",
            "fullDescription": "This video exposes how favoritism, unchecked power, and corruption led to the shutdown of a company, serving as a warning for leaders and societies alike.",
            "category": "youtube",
            "tags": ["Informative Video", "Ethics on Technology"],
            "image": "/assets/youtube1.png",
            "youtube": "https://www.youtube.com/feed/history",
            "demo": "https://www.youtube.com/watch?v=ue_Yj6ww-hs"
        },
        {
            "id": 1.5,
            "title": "Professionalism at workplace",
            "description": "This video shows about people being unprofessional at workplace. Video is made for awareness for people to be professional at their workplace and show their professional behavior towards their respective staff members.",
            "fullDescription": "Professionalism plays a vital role in creating a respectful and productive workplace. This video highlights examples of unprofessional behavior at work and how such actions can affect employees, teamwork, and the overall environment. Created for awareness, the video encourages individuals to maintain professional conduct and show respect toward their colleagues and staff members, helping build a positive and healthy workplace culture.",
            "category": "youtube",
            "tags": ["Informative Video", "Professionalism in Workplace"],
            "image": "/assets/youtube2.png",
            "youtube": "https://www.youtube.com/@Professionalkids-sr6jn",
            "demo": "https://www.youtube.com/watch?v=cryQXn94l6g&t=6s"
        },
        {
            "id": 2,
            "title": "Nepal Earthquake Analysis & Prediction",
            "description": "From Data Exploration to ML Forecasting",
            "fullDescription": "This project analyzes a dataset of Nepal earthquakes from 2015-2025, sourced from Kaggle, to uncover patterns in seismic activity and build predictive models. Using Pandas and Dask for efficient data loading and preprocessing, I aggregated and visualized trends like hourly quake counts, magnitude distributions, and depth-magnitude relationships. A Random Forest classifier identifies large earthquakes (magnitude >=5.0) with high accuracy, while an LSTM neural network forecasts future magnitudes based on time-series sequences.",
            "category": "github",
            "tags": ["Jupyter_Notebook", "Python", "Data Visualization"],
            "image": "/assets/github1.png",
            "github": "https://github.com/ROJIT270/MLPC_IDV_Assignment"
        },
        {
            "id": 2.2,
            "title": "Student-Teacher Ratio Analysis & Clustering",
            "description": "Analysis of Teacher to student ratio in Nepal's district level.",
            "fullDescription": "Analyzed student-teacher ratios (STR) across 76 Nepalese districts: cleaned and transformed level-wise STR data, visualized distributions and province averages, and used K-Means clustering (silhouette = 0.534) to group districts by STR profile. Deliverables: cleaned CSV, EDA plots (histogram, boxplots, heatmap, top-district bar chart), and a clustered dataset.",
            "category": "github",
            "tags": ["Jupyter_Notebook", "Python", "Data Visualization"],
            "image": "/assets/github2.png",
            "github": "https://github.com/ROJIT270/DAML_Indv_Assignment"
        },
        {
            "id": 2.3,
            "title": "Banking System GUI / Bank Management System",
            "description": "A simple demo of typical banking system with basic features.",
            "fullDescription": "A Java desktop application that consist graphical user interface for the purpose of simulating basic banking operations. Supports features like account creation, deposits, withdrawals, balance checks, and transactions built using Swing for the GUI as a college project.",
            "category": "github",
            "tags": ["Java"],
            "image": "/assets/github5.png",
            "github": "https://github.com/ROJIT270/BankingSystem_Demo"
        },
        {
            "id": 2.4,
            "title": "Student Registration System",
            "description": "A simple application demo for students to keep track and control courses they have enrolled in.",
            "fullDescription": "A desktop application based on java for managing student registration and records. Features include adding, updating, viewing, and deleting student information with a simple user interface and data persistence.",
            "category": "github",
            "tags": ["Java"],
            "image": "/assets/github4.png",
            "github": "https://github.com/ROJIT270/Student_Course_Registration_System"
        },
        {
            "id": 3,
            "title": "N/A",
            "description": "N/A",
            "fullDescription": "N/A",
            "category": "others",
            "tags": ["N/A"],
            "image": "/assets/others1.png"
        }
    ]);

    serde_json::from_value(raw).expect("embedded seed projects are valid")
}
