//! Static portfolio content.
//!
//! Profile, skills, showcase projects and timeline never change at runtime.
//! [`PortfolioContent`] is built once by the composition root and shared
//! behind an `Arc`; every query is a plain borrow.

use serde::Serialize;

/// Message returned by the root banner.
pub const BANNER_MESSAGE: &str = "Mechatronics Portfolio API running";

/// A labelled outbound link on the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// Portfolio owner's profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub university: String,
    pub location: String,
    pub tagline: String,
    pub avatar: String,
    pub links: Vec<Link>,
}

/// A skill with a free-form proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: String,
    pub level: String,
}

/// A highlighted project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowcaseProject {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub tech: Vec<String>,
    pub highlights: Vec<String>,
    pub repo: Option<String>,
    pub demo: Option<String>,
    pub images: Vec<String>,
}

/// Milestones grouped by year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub year: String,
    pub items: Vec<String>,
}

/// Response of the root endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub name: String,
    pub message: String,
}

/// Immutable portfolio content served by the read-only endpoints.
///
/// # Examples
/// ```
/// use portfolio_backend::domain::PortfolioContent;
///
/// let content = PortfolioContent::default();
/// assert_eq!(content.skills().len(), 8);
/// assert_eq!(content.banner().name, content.profile().name);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioContent {
    profile: Profile,
    skills: Vec<Skill>,
    projects: Vec<ShowcaseProject>,
    timeline: Vec<TimelineEntry>,
}

impl PortfolioContent {
    pub fn new(
        profile: Profile,
        skills: Vec<Skill>,
        projects: Vec<ShowcaseProject>,
        timeline: Vec<TimelineEntry>,
    ) -> Self {
        Self {
            profile,
            skills,
            projects,
            timeline,
        }
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    #[must_use]
    pub fn projects(&self) -> &[ShowcaseProject] {
        &self.projects
    }

    #[must_use]
    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    /// Service banner naming the portfolio owner.
    #[must_use]
    pub fn banner(&self) -> Banner {
        Banner {
            name: self.profile.name.clone(),
            message: BANNER_MESSAGE.to_owned(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

fn link(label: &str, href: &str) -> Link {
    Link {
        label: label.to_owned(),
        href: href.to_owned(),
    }
}

fn skill(name: &str, level: &str) -> Skill {
    Skill {
        name: name.to_owned(),
        level: level.to_owned(),
    }
}

impl Default for PortfolioContent {
    /// The published mechatronics portfolio.
    fn default() -> Self {
        let profile = Profile {
            name: "Mechatronics Student".to_owned(),
            university: "Dedan Kimathi University of Technology (DeKUT)".to_owned(),
            location: "Nyeri, Kenya".to_owned(),
            tagline: "Building robots and smart systems that bridge hardware and software."
                .to_owned(),
            avatar: "/avatar.png".to_owned(),
            links: vec![
                link("GitHub", "https://github.com/"),
                link("LinkedIn", "https://linkedin.com/"),
                link("Email", "mailto:student@example.com"),
            ],
        };

        let skills = vec![
            skill("Control Systems", "Advanced"),
            skill("Embedded C/C++", "Advanced"),
            skill("Python (Robotics)", "Advanced"),
            skill("ROS / ROS2", "Intermediate"),
            skill("Computer Vision (OpenCV)", "Intermediate"),
            skill("PCB Design (KiCad)", "Intermediate"),
            skill("3D CAD (Fusion 360)", "Intermediate"),
            skill("IoT (ESP32, MQTT)", "Advanced"),
        ];

        let projects = vec![
            ShowcaseProject {
                title: "Vision-Guided Line Follower".to_owned(),
                tagline: "A high-speed line follower with PID and camera correction".to_owned(),
                description: concat!(
                    "Designed and built a differential drive robot with an ESP32, optical sensor array, ",
                    "and onboard camera for corner detection. Implemented PID control and Kalman filtering ",
                    "for smooth tracking and anti-overshoot behavior."
                )
                .to_owned(),
                tech: strings(&["ESP32", "PID", "OpenCV", "Python", "3D Printed Chassis"]),
                highlights: strings(&[
                    "100+ samples/sec sensor fusion",
                    "On-the-fly PID tuning via BLE",
                    "Real-time telemetry dashboard",
                ]),
                repo: Some("https://github.com/".to_owned()),
                demo: Some("https://youtu.be/".to_owned()),
                images: strings(&[
                    "/projects/line-follower-1.jpg",
                    "/projects/line-follower-2.jpg",
                ]),
            },
            ShowcaseProject {
                title: "Robotic Arm with Inverse Kinematics".to_owned(),
                tagline: "5-DOF desktop arm with web-based control".to_owned(),
                description: concat!(
                    "Built a 3D-printed 5-DOF arm driven by stepper motors, controlled with a Raspberry Pi. ",
                    "Implemented inverse kinematics in Python and exposed a web UI for trajectory planning."
                )
                .to_owned(),
                tech: strings(&[
                    "Raspberry Pi",
                    "Python",
                    "Flask/React",
                    "Stepper Drivers",
                    "IK",
                ]),
                highlights: strings(&[
                    "Configurable workspace limits",
                    "Saved motion profiles",
                    "Camera-based calibration",
                ]),
                repo: Some("https://github.com/".to_owned()),
                demo: Some("https://youtu.be/".to_owned()),
                images: strings(&["/projects/arm-1.jpg", "/projects/arm-2.jpg"]),
            },
        ];

        let timeline = vec![
            TimelineEntry {
                year: "2025".to_owned(),
                items: strings(&[
                    "Final year at DeKUT focusing on autonomous systems",
                    "Research: Low-cost visual odometry for indoor robots",
                ]),
            },
            TimelineEntry {
                year: "2024".to_owned(),
                items: strings(&[
                    "Internship: Industrial automation (PLC, SCADA)",
                    "Robotics club lead: organized 3 hackathons",
                ]),
            },
        ];

        Self::new(profile, skills, projects, timeline)
    }
}
