use crate::tab_widget::CodeTab;

pub struct Profile {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub avatar: &'static str,
    pub about: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Greg Contic",
    subtitle: "Web Developer & Designer",
    avatar: "https://avatars.githubusercontent.com/u/00000000?v=4",
    about: "Hi! I'm Greg, a passionate web developer with a knack for building modern, responsive web applications. I love working with React, TypeScript, and creating beautiful user experiences.",
};

pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "HTML5", icon: "images/skills/html.svg" },
    Skill { name: "CSS3", icon: "images/skills/css.svg" },
    Skill { name: "JavaScript", icon: "images/skills/javascript.svg" },
    Skill { name: "TypeScript", icon: "images/skills/typescript.svg" },
    Skill { name: "React", icon: "images/skills/react.svg" },
    Skill { name: "Figma", icon: "images/skills/figma.svg" },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Work,
    Education,
}

impl TimelineKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Experience",
            Self::Education => "Education",
        }
    }
}

pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        kind: TimelineKind::Work,
        title: "Freelance Web Developer",
        organization: "Self-employed",
        period: "2022 - Present",
        summary: "Designing and shipping responsive marketing sites and dashboards for small businesses.",
    },
    TimelineEntry {
        kind: TimelineKind::Work,
        title: "Front-end Intern",
        organization: "Pixel Studio",
        period: "2021 - 2022",
        summary: "Built reusable React components and tightened the design-to-code handoff.",
    },
    TimelineEntry {
        kind: TimelineKind::Education,
        title: "BS Information Technology",
        organization: "State University",
        period: "2019 - 2023",
        summary: "Focused on web systems, human-computer interaction and visual design.",
    },
];

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub thumbnail: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Personal Portfolio",
        summary: "This site! Scroll-driven reveals and a live code preview.",
        thumbnail: "images/product.png",
    },
    Project {
        title: "Weather App",
        summary: "Real-time weather updates using public APIs.",
        thumbnail: "images/portwan.png",
    },
    Project {
        title: "Task Manager",
        summary: "Productivity app for managing daily tasks.",
        thumbnail: "images/tpage.png",
    },
];

pub struct Contact {
    pub email: &'static str,
    pub github_handle: &'static str,
    pub github_url: &'static str,
}

pub const CONTACT: Contact = Contact {
    email: "gregcontic@email.com",
    github_handle: "GregContic",
    github_url: "https://github.com/GregContic",
};

const APP_JSX_SNIPPETS: [&str; 3] = [
    "// Example React component\nexport default function App() {\n  return <button className=\"btn\">Click Me</button>;\n}",
    "// Add state\nimport { useState } from 'react';\nexport default function App() {\n  const [count, setCount] = useState(0);\n  return <button onClick={() => setCount(count+1)}>Clicked {count} times</button>;\n}",
    "// Styled button\nimport './styles.css';\nexport default function App() {\n  return <button className=\"btn primary\">Primary Button</button>;\n}",
];

const STYLES_CSS_SNIPPETS: [&str; 3] = [
    ".btn {\n  background: #232946;\n  color: #fff;\n  border: none;\n  padding: 12px 28px;\n  border-radius: 8px;\n  font-family: 'Fira Mono', monospace;\n  font-size: 1rem;\n  cursor: pointer;\n}",
    ".btn.primary {\n  background: #0077ff;\n  color: #fff;\n  box-shadow: 0 2px 8px 0 rgba(0,119,255,0.08);\n}",
    ".btn:active {\n  transform: scale(0.97);\n}",
];

const CONFIG_JS_SNIPPETS: [&str; 3] = [
    "export const theme = {\n  accent: '#0077ff',\n  dark: true,\n};",
    "export const breakpoints = {\n  mobile: 480,\n  tablet: 900,\n  desktop: 1200,\n};",
    "export const features = ['split-view', 'dev-view', 'client-view'];",
];

pub const PREVIEW_IMAGES: [&str; 3] = [
    "images/product.png",
    "images/portwan.png",
    "images/tpage.png",
];

pub const PREVIEW_ALT: &str = "Project Preview";

pub fn snippets(tab: CodeTab) -> &'static [&'static str] {
    match tab {
        CodeTab::AppJsx => &APP_JSX_SNIPPETS,
        CodeTab::StylesCss => &STYLES_CSS_SNIPPETS,
        CodeTab::ConfigJs => &CONFIG_JS_SNIPPETS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_has_one_snippet_per_preview_image() {
        for tab in CodeTab::ALL {
            assert_eq!(snippets(tab).len(), PREVIEW_IMAGES.len(), "{}", tab.label());
        }
    }
}
